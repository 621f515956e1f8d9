use hello_triangle::{Color, Vertex, WindowParams, FRAG, TRIANGLE, VERT};

#[test]
fn vertex_layout_feeds_shader_input() {
    let location = format!("layout(location = {}) in vec4 position;", Vertex::POSITION_LOCATION);
    assert!(VERT.contains(&location));
    assert_eq!(Vertex::POSITION_COMPONENTS as usize * std::mem::size_of::<f32>(), Vertex::stride());
    assert_eq!(Vertex::POSITION_OFFSET, 0);
}

#[test]
fn triangle_has_three_distinct_vertices() {
    assert_eq!(TRIANGLE.len(), 3);
    assert_ne!(TRIANGLE[0], TRIANGLE[1]);
    assert_ne!(TRIANGLE[1], TRIANGLE[2]);
    assert_ne!(TRIANGLE[0], TRIANGLE[2]);
    assert_eq!(TRIANGLE[1], Vertex::new(0.0, 0.5));
}

#[test]
fn cyan_on_black_by_default() {
    assert_eq!(WindowParams::default().clear_color, Color::rgba(0.0, 0.0, 0.0, 1.0));
    assert!(FRAG.contains("color = vec4(0.0, 1.0, 1.0, 1.0);"));
}
