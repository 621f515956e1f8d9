use std::ffi::CString;
use std::fmt;
use gl::types::{GLuint, GLint, GLchar, GLenum, GLsizei};
use log::debug;

use crate::errors::{Error, Result};

pub const VERT: &str = "#version 330 core

layout(location = 0) in vec4 position;

void main() {
    gl_Position = position;
}
";

pub const FRAG: &str = "#version 330 core

layout(location = 0) out vec4 color;

void main() {
    color = vec4(0.0, 1.0, 1.0, 1.0);
}
";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct Program {
    id: GLuint,
}

impl Program {
    /// Compiles both stages and links them. The stage objects are released
    /// whether or not linking succeeds.
    pub fn new(vert_src: &str, frag_src: &str) -> Result<Program> {
        let vert = compile(ShaderStage::Vertex, vert_src)?;
        let frag = match compile(ShaderStage::Fragment, frag_src) {
            Ok(frag) => frag,
            Err(err) => {
                unsafe { gl::DeleteShader(vert); }
                return Err(err);
            }
        };

        unsafe {
            let prog = gl::CreateProgram();
            gl::AttachShader(prog, vert);
            gl::AttachShader(prog, frag);
            gl::LinkProgram(prog);

            gl::DetachShader(prog, vert);
            gl::DetachShader(prog, frag);
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            let mut status = GLint::from(gl::FALSE);
            gl::GetProgramiv(prog, gl::LINK_STATUS, &mut status);
            if status != GLint::from(gl::TRUE) {
                let log = info_log(prog, gl::GetProgramiv, gl::GetProgramInfoLog);
                gl::DeleteProgram(prog);
                return Err(Error::ProgramLink(log));
            }

            debug!("linked shader program {}", prog);
            Ok(Program { id: prog })
        }
    }

    /// Checks whether the program can execute given the current GL state.
    pub fn validate(&self) -> Result<()> {
        unsafe {
            gl::ValidateProgram(self.id);

            let mut status = GLint::from(gl::FALSE);
            gl::GetProgramiv(self.id, gl::VALIDATE_STATUS, &mut status);
            if status != GLint::from(gl::TRUE) {
                return Err(Error::ProgramValidation(info_log(self.id, gl::GetProgramiv, gl::GetProgramInfoLog)));
            }
        }

        Ok(())
    }

    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id); }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id); }
    }
}

pub fn compile(stage: ShaderStage, src: &str) -> Result<GLuint> {
    let src = CString::new(src).map_err(|_| Error::InvalidSource(stage))?;

    unsafe {
        let shader = gl::CreateShader(stage.gl_enum());
        gl::ShaderSource(shader, 1, &src.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);

        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status != GLint::from(gl::TRUE) {
            let log = info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog);
            gl::DeleteShader(shader);
            return Err(Error::ShaderCompile { stage, log });
        }

        Ok(shader)
    }
}

type GetIv = unsafe fn(GLuint, GLenum, *mut GLint);
type GetInfoLog = unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);

unsafe fn info_log(id: GLuint, get_iv: GetIv, get_log: GetInfoLog) -> String {
    let mut len: GLint = 0;
    get_iv(id, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    get_log(id, len, &mut written, buf.as_mut_ptr() as *mut GLchar);

    decode_log(buf, written.max(0) as usize)
}

fn decode_log(mut buf: Vec<u8>, written: usize) -> String {
    buf.truncate(written);
    String::from_utf8_lossy(&buf)
        .trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_owned()
}
