mod buffer;
mod config;
mod errors;
mod geom;
mod logging;
mod render;
mod shader;
mod window;

pub use buffer::*;
pub use config::*;
pub use errors::*;
pub use geom::*;
pub use logging::*;
pub use render::*;
pub use shader::*;
pub use window::*;
