use crate::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Debug drawing primitives offered by the host. Headless hosts use [`NullDraw`].
pub trait DebugDraw {
    fn draw_polygon(&mut self, points: &[Vec2], color: Color);
    fn draw_solid_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

#[derive(Debug, Default)]
pub struct NullDraw;

impl DebugDraw for NullDraw {
    fn draw_polygon(&mut self, _points: &[Vec2], _color: Color) {}

    fn draw_solid_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
}
