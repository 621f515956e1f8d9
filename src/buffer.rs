use gl::types::{GLuint, GLint, GLsizei, GLsizeiptr, GLvoid};
use log::debug;

use crate::Vertex;

/// Vertex data uploaded once and drawn every frame.
pub struct VertexBuffer {
    vao: GLuint,
    vbo: GLuint,
    len: usize,
}

impl VertexBuffer {
    pub fn new(vertices: &[Vertex]) -> VertexBuffer {
        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * Vertex::stride()) as GLsizeiptr,
                vertices.as_ptr() as *const GLvoid,
                gl::STATIC_DRAW);

            gl::EnableVertexAttribArray(Vertex::POSITION_LOCATION);
            gl::VertexAttribPointer(
                Vertex::POSITION_LOCATION,
                Vertex::POSITION_COMPONENTS,
                gl::FLOAT,
                gl::FALSE,
                Vertex::stride() as GLint,
                Vertex::POSITION_OFFSET as *const GLvoid);
        }

        debug!("uploaded {} vertices (vao {}, vbo {})", vertices.len(), vao, vbo);

        VertexBuffer { vao, vbo, len: vertices.len() }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.vao); }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn draw(&self) {
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, self.len as GLsizei); }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
