use log::warn;

use crate::buffer::VertexBuffer;
use crate::errors::Result;
use crate::shader::{Program, FRAG, VERT};
use crate::{Color, TRIANGLE};

pub struct Renderer {
    prog: Program,
    triangle: VertexBuffer,
}

impl Renderer {
    /// Requires a current GL context with functions loaded.
    pub fn new() -> Result<Renderer> {
        let prog = Program::new(VERT, FRAG)?;
        let triangle = VertexBuffer::new(&TRIANGLE);

        prog.bind();
        triangle.bind();

        if let Err(err) = prog.validate() {
            warn!("{}", err);
        }

        Ok(Renderer { prog, triangle })
    }

    pub fn clear(&mut self, col: Color) {
        unsafe {
            gl::ClearColor(col.r, col.g, col.b, col.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn draw(&mut self) {
        self.prog.bind();
        self.triangle.bind();
        self.triangle.draw();
    }
}
