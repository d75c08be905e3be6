use plotters::style::RGBColor;

use crate::style::Color;

impl From<Color> for RGBColor {
    fn from(color: Color) -> Self {
        RGBColor(color.0, color.1, color.2)
    }
}

/// Colors handed out to series without an explicit color, one cycle per panel
pub struct ColorCycle {
    colors: Vec<RGBColor>,
    index: usize,
}
impl ColorCycle {
    pub fn next_color(&mut self) -> RGBColor {
        let color = self.colors[self.index];
        self.index = (self.index + 1) % self.colors.len();
        color
    }
}
impl Default for ColorCycle {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::BLUE.into(),
                Color::ORANGE.into(),
                Color::GREEN.into(),
                Color::RED.into(),
                Color::PURPLE.into(),
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                Color::GREY.into(),
                RGBColor(188, 189, 34), // Olive
                RGBColor(23, 190, 207), // Cyan
            ],
            index: 0,
        }
    }
}
