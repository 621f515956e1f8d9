use std::ffi::CStr;
use std::time::{Duration, Instant};
use gl::types::{GLenum, GLsizei};
use log::{debug, info};

use crate::errors::{Error, Result};
use crate::{Color, Renderer, WindowParams};

const FRAME: Duration = Duration::from_micros(1_000_000 / 60);

pub struct Window {
    events_loop: glutin::EventsLoop,
    context: glutin::ContextWrapper<glutin::PossiblyCurrent, glutin::Window>,
    clear_color: Color,
    vsync: bool,
}

impl Window {
    /// Opens the window, makes its GL 3.3 core context current and loads
    /// the GL function pointers.
    pub fn new(params: &WindowParams) -> Result<Window> {
        let events_loop = glutin::EventsLoop::new();
        let window_builder = glutin::WindowBuilder::new()
            .with_dimensions(glutin::dpi::LogicalSize::new(f64::from(params.width), f64::from(params.height)))
            .with_title(params.title.clone());
        let context = glutin::ContextBuilder::new()
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
            .with_gl_profile(glutin::GlProfile::Core)
            .with_vsync(params.vsync)
            .build_windowed(window_builder, &events_loop)?;
        let context = unsafe { context.make_current() }.map_err(|(_, err)| Error::from(err))?;

        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);
        check_loaded()?;

        info!("OpenGL {}", gl_string(gl::VERSION).unwrap_or_else(|| "(unknown version)".to_owned()));
        info!("renderer: {}", gl_string(gl::RENDERER).unwrap_or_else(|| "(unknown)".to_owned()));

        Ok(Window {
            events_loop,
            context,
            clear_color: params.clear_color,
            vsync: params.vsync,
        })
    }

    /// Renders until the window is closed.
    pub fn run(&mut self, renderer: &mut Renderer) -> Result<()> {
        let mut running = true;
        let mut now = Instant::now();
        let mut fps_counter = FpsCounter::new();
        while running {
            let elapsed = now.elapsed();
            now = Instant::now();
            if fps_counter.update(elapsed) {
                debug!("{:.1} fps", fps_counter.fps());
            }

            renderer.clear(self.clear_color);
            renderer.draw();

            self.context.swap_buffers()?;

            let mut resized = false;
            self.events_loop.poll_events(|event| {
                if let glutin::Event::WindowEvent { event, .. } = event {
                    use glutin::WindowEvent::*;
                    match event {
                        CloseRequested | Destroyed => {
                            running = false;
                        }
                        Resized(_) | HiDpiFactorChanged(_) => {
                            resized = true;
                        }
                        _ => {}
                    }
                }
            });

            if resized {
                self.resize();
            }

            if !self.vsync {
                let elapsed = now.elapsed();
                if elapsed < FRAME {
                    std::thread::sleep(FRAME - elapsed);
                }
            }
        }

        info!("window closed");
        Ok(())
    }

    fn resize(&mut self) {
        let window = self.context.window();
        let size = match window.get_inner_size() {
            Some(size) => size.to_physical(window.get_hidpi_factor()),
            None => return,
        };

        self.context.resize(size);
        let (width, height) = viewport_size(size);
        unsafe { gl::Viewport(0, 0, width, height); }
        debug!("resized to {}x{}", width, height);
    }
}

fn viewport_size(size: glutin::dpi::PhysicalSize) -> (GLsizei, GLsizei) {
    (size.width.round() as GLsizei, size.height.round() as GLsizei)
}

fn check_loaded() -> Result<()> {
    let required = [
        ("glClear", gl::Clear::is_loaded()),
        ("glClearColor", gl::ClearColor::is_loaded()),
        ("glViewport", gl::Viewport::is_loaded()),
        ("glGetString", gl::GetString::is_loaded()),
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glShaderSource", gl::ShaderSource::is_loaded()),
        ("glCompileShader", gl::CompileShader::is_loaded()),
        ("glGetShaderiv", gl::GetShaderiv::is_loaded()),
        ("glGetShaderInfoLog", gl::GetShaderInfoLog::is_loaded()),
        ("glDeleteShader", gl::DeleteShader::is_loaded()),
        ("glCreateProgram", gl::CreateProgram::is_loaded()),
        ("glAttachShader", gl::AttachShader::is_loaded()),
        ("glDetachShader", gl::DetachShader::is_loaded()),
        ("glLinkProgram", gl::LinkProgram::is_loaded()),
        ("glValidateProgram", gl::ValidateProgram::is_loaded()),
        ("glGetProgramiv", gl::GetProgramiv::is_loaded()),
        ("glGetProgramInfoLog", gl::GetProgramInfoLog::is_loaded()),
        ("glUseProgram", gl::UseProgram::is_loaded()),
        ("glDeleteProgram", gl::DeleteProgram::is_loaded()),
        ("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
        ("glBindVertexArray", gl::BindVertexArray::is_loaded()),
        ("glDeleteVertexArrays", gl::DeleteVertexArrays::is_loaded()),
        ("glGenBuffers", gl::GenBuffers::is_loaded()),
        ("glBindBuffer", gl::BindBuffer::is_loaded()),
        ("glBufferData", gl::BufferData::is_loaded()),
        ("glDeleteBuffers", gl::DeleteBuffers::is_loaded()),
        ("glEnableVertexAttribArray", gl::EnableVertexAttribArray::is_loaded()),
        ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded()),
        ("glDrawArrays", gl::DrawArrays::is_loaded()),
    ];

    match required.iter().find(|(_, loaded)| !loaded) {
        Some((name, _)) => Err(Error::Loader(*name)),
        None => Ok(()),
    }
}

fn gl_string(name: GLenum) -> Option<String> {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return None;
        }
        Some(CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned())
    }
}

/// Average frame rate over the last 100 frames.
struct FpsCounter {
    frames: [u32; 100],
    i: usize,
    sum: u32,
}

impl FpsCounter {
    fn new() -> FpsCounter {
        FpsCounter {
            frames: [0; 100],
            i: 0,
            sum: 0,
        }
    }

    /// Records a frame time in microseconds. Returns true each time the
    /// window wraps around.
    fn update(&mut self, elapsed: Duration) -> bool {
        let micros = elapsed.as_secs().saturating_mul(1_000_000).saturating_add(u64::from(elapsed.subsec_micros()));
        let micros = micros.min(u64::from(u32::max_value() / 100)) as u32;

        self.sum -= self.frames[self.i];
        self.frames[self.i] = micros;
        self.sum += micros;
        self.i = (self.i + 1) % self.frames.len();
        self.i == 0
    }

    fn fps(&self) -> f32 {
        if self.sum == 0 {
            return 0.0;
        }
        (self.frames.len() as f32 * 1_000_000.0) / self.sum as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_follows_dpi_factor() {
        let logical = glutin::dpi::LogicalSize::new(640.0, 480.0);
        assert_eq!(viewport_size(logical.to_physical(1.0)), (640, 480));
        assert_eq!(viewport_size(logical.to_physical(2.0)), (1280, 960));
        assert_eq!(viewport_size(logical.to_physical(1.25)), (800, 600));
    }

    // Loader state is process-wide, so both cases share one test.
    #[test]
    fn check_loaded_reports_first_missing_function() {
        let fake = 1 as *const std::os::raw::c_void;

        gl::load_with(|symbol| if symbol.starts_with("glAttach") { std::ptr::null() } else { fake });
        match check_loaded() {
            Err(Error::Loader(name)) => assert_eq!(name, "glAttachShader"),
            other => panic!("unexpected {:?}", other),
        }

        gl::load_with(|_| fake);
        assert!(check_loaded().is_ok());
    }

    #[test]
    fn fps_is_zero_before_any_frame() {
        assert_eq!(FpsCounter::new().fps(), 0.0);
    }

    #[test]
    fn fps_averages_full_window() {
        let mut counter = FpsCounter::new();
        let mut wrapped = 0;
        for _ in 0..100 {
            if counter.update(Duration::from_millis(10)) {
                wrapped += 1;
            }
        }
        assert_eq!(wrapped, 1);
        assert!((counter.fps() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn old_frames_fall_out_of_window() {
        let mut counter = FpsCounter::new();
        for _ in 0..100 {
            counter.update(Duration::from_millis(50));
        }
        for _ in 0..100 {
            counter.update(Duration::from_micros(16_000));
        }
        assert_eq!(counter.sum, 1_600_000);
        assert!((counter.fps() - 62.5).abs() < 1e-3);
    }

    #[test]
    fn huge_frame_time_does_not_overflow() {
        let mut counter = FpsCounter::new();
        for _ in 0..100 {
            counter.update(Duration::from_secs(3600));
        }
        assert!(counter.fps() > 0.0);
    }
}
