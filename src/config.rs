use crate::Color;

#[derive(Clone, Debug)]
pub struct WindowParams {
    pub title: String,
    /// Size of the client area in logical pixels.
    pub width: u32,
    pub height: u32,
    /// When false, the frame loop sleeps to 60 Hz instead.
    pub vsync: bool,
    pub clear_color: Color,
}

impl Default for WindowParams {
    fn default() -> WindowParams {
        WindowParams {
            title: "Hello World".to_owned(),
            width: 640,
            height: 480,
            vsync: true,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 1.0),
        }
    }
}

impl WindowParams {
    pub fn with_title<T: Into<String>>(mut self, title: T) -> WindowParams {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> WindowParams {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> WindowParams {
        self.vsync = vsync;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> WindowParams {
        self.clear_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_window() {
        let params = WindowParams::default();
        assert_eq!(params.title, "Hello World");
        assert_eq!((params.width, params.height), (640, 480));
        assert!(params.vsync);
        assert_eq!(params.clear_color, Color::rgba(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn setters_override_fields() {
        let params = WindowParams::default()
            .with_title("triangle")
            .with_size(800, 600)
            .with_vsync(false)
            .with_clear_color(Color::rgba(0.1, 0.2, 0.3, 1.0));

        assert_eq!(params.title, "triangle");
        assert_eq!((params.width, params.height), (800, 600));
        assert!(!params.vsync);
        assert_eq!(params.clear_color.b, 0.3);
    }
}
