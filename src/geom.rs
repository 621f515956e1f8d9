use std::mem;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32, pub g: f32, pub b: f32, pub a: f32,
}

impl Color {
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }
}

/// A 2D position in normalized device coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl Vertex {
    /// Attribute location of `pos`, matching `layout(location = 0)` in the vertex shader.
    pub const POSITION_LOCATION: u32 = 0;
    pub const POSITION_COMPONENTS: i32 = 2;
    pub const POSITION_OFFSET: usize = 0;

    #[inline]
    pub const fn new(x: f32, y: f32) -> Vertex {
        Vertex { pos: [x, y] }
    }

    #[inline]
    pub fn stride() -> usize {
        mem::size_of::<Vertex>()
    }
}

pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.0, 0.5),
    Vertex::new(0.5, -0.5),
];
