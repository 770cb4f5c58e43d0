mod color;

pub use color::Color;

use crate::error::Result;

/// Accumulates path and painting operators for a page content stream.
#[derive(Debug, Clone)]
pub struct GraphicsContext {
    operations: String,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(format!("{x:.2} {y:.2} m"));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(format!("{x:.2} {y:.2} l"));
        self
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.push(format!("{x:.2} {y:.2} {width:.2} {height:.2} re"));
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.push("h".to_string());
        self
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.push("S".to_string());
        self
    }

    pub fn fill(&mut self) -> &mut Self {
        self.push("f".to_string());
        self
    }

    pub fn fill_stroke(&mut self) -> &mut Self {
        self.push("B".to_string());
        self
    }

    /// Colour operators go out immediately, so set colours before
    /// starting a path.
    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.stroke_color = color;
        self.push(color.stroke_operator());
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = color;
        self.push(color.fill_operator());
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = width;
        self.push(format!("{width:.2} w"));
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.push("q".to_string());
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.push("Q".to_string());
        self
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub(crate) fn generate_operations(&self) -> Result<Vec<u8>> {
        Ok(self.operations.as_bytes().to_vec())
    }

    fn push(&mut self, operator: String) {
        self.operations.push_str(&operator);
        self.operations.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphics_context_new() {
        let ctx = GraphicsContext::new();
        assert_eq!(ctx.fill_color(), Color::black());
        assert_eq!(ctx.stroke_color(), Color::black());
        assert_eq!(ctx.line_width(), 1.0);
        assert!(ctx.operations().is_empty());
    }

    #[test]
    fn test_path_operators() {
        let mut ctx = GraphicsContext::new();
        ctx.move_to(10.0, 20.0).line_to(30.0, 40.0).close_path();

        assert_eq!(ctx.operations(), "10.00 20.00 m\n30.00 40.00 l\nh\n");
    }

    #[test]
    fn test_rect() {
        let mut ctx = GraphicsContext::new();
        ctx.rect(10.0, 20.0, 100.0, 50.0);
        assert!(ctx.operations().contains("10.00 20.00 100.00 50.00 re\n"));
    }

    #[test]
    fn test_fill_color_precedes_path() {
        let mut ctx = GraphicsContext::new();
        ctx.set_fill_color(Color::red()).rect(0.0, 0.0, 1.0, 1.0).fill();

        assert_eq!(
            ctx.operations(),
            "1.000 0.000 0.000 rg\n0.00 0.00 1.00 1.00 re\nf\n"
        );
        assert_eq!(ctx.fill_color(), Color::red());
    }

    #[test]
    fn test_fill_stroke() {
        let mut ctx = GraphicsContext::new();
        ctx.set_fill_color(Color::white())
            .set_stroke_color(Color::black())
            .rect(0.0, 0.0, 5.0, 5.0)
            .fill_stroke();

        let ops = ctx.operations();
        assert!(ops.contains("1.000 g\n"));
        assert!(ops.contains("0.000 G\n"));
        assert!(ops.ends_with("B\n"));
    }

    #[test]
    fn test_line_width_and_state() {
        let mut ctx = GraphicsContext::new();
        ctx.save_state().set_line_width(0.61).restore_state();

        assert_eq!(ctx.line_width(), 0.61);
        assert_eq!(ctx.operations(), "q\n0.61 w\nQ\n");
    }
}
