use failure::Fail;

use crate::shader::ShaderStage;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Glutin: {}", _0)]
    Window(String),
    #[fail(display = "Context: {}", _0)]
    Context(String),
    #[fail(display = "OpenGL function {} is not loaded.", _0)]
    Loader(&'static str),
    #[fail(display = "The {} shader source contains a nul byte.", _0)]
    InvalidSource(ShaderStage),
    #[fail(display = "Failed to compile {} shader:\n{}", stage, log)]
    ShaderCompile { stage: ShaderStage, log: String },
    #[fail(display = "Failed to link shader program:\n{}", _0)]
    ProgramLink(String),
    #[fail(display = "Shader program failed validation:\n{}", _0)]
    ProgramValidation(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::Window(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Context(format!("{}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_stage_and_log() {
        let err = Error::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:3(1): error: syntax error".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to compile fragment shader:\n0:3(1): error: syntax error"
        );
    }

    #[test]
    fn loader_error_names_function() {
        assert_eq!(Error::Loader("glDrawArrays").to_string(), "OpenGL function glDrawArrays is not loaded.");
    }

    #[test]
    fn creation_error_converts() {
        let err: Error = glutin::CreationError::NoAvailablePixelFormat.into();
        match err {
            Error::Window(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
