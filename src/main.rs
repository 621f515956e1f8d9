use log::error;

use hello_triangle::{init_logging, LoggingConfig, Renderer, Result, Window, WindowParams};

fn main() {
    init_logging(&LoggingConfig::default());

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut window = Window::new(&WindowParams::default())?;
    let mut renderer = Renderer::new()?;
    window.run(&mut renderer)
}
