//! Rendering styles for series and legends
use std::fmt;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);
impl Color {
    /// Black
    pub const BLACK: Self = Self(0, 0, 0);
    /// White
    pub const WHITE: Self = Self(255, 255, 255);
    /// Red
    pub const RED: Self = Self(214, 39, 40);
    /// Blue
    pub const BLUE: Self = Self(31, 119, 180);
    /// Green
    pub const GREEN: Self = Self(44, 160, 44);
    /// Orange
    pub const ORANGE: Self = Self(255, 127, 14);
    /// Purple
    pub const PURPLE: Self = Self(148, 103, 189);
    /// Grey
    pub const GREY: Self = Self(127, 127, 127);
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// How the points of a series are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Continuous line
    #[default]
    Solid,

    /// Dashed line
    Dashed,

    /// Points are not joined
    None,
}

/// Glyph drawn at each data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle
    Circle,

    /// Diagonal cross
    Cross,

    /// Filled triangle
    Triangle,

    /// Filled square
    Square,
}

/// Visual style of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Line and marker color. `None` takes the next color from the panel's cycle.
    pub color: Option<Color>,

    /// Stroke width in pixels
    pub line_width: u32,

    /// Line style joining the points
    pub line: LineStyle,

    /// Marker drawn at each point
    pub marker: Option<Marker>,

    /// Marker radius in pixels
    pub marker_size: u32,

    /// Half-width of error bar caps in pixels
    pub cap_size: u32,
}
impl Default for Style {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1,
            line: LineStyle::Solid,
            marker: None,
            marker_size: 3,
            cap_size: 2,
        }
    }
}
impl Style {
    /// Style for error-bar series: black bars with caps and no connecting line
    #[must_use]
    pub fn error_bars() -> Self {
        Self {
            color: Some(Color::BLACK),
            line: LineStyle::None,
            ..Self::default()
        }
    }

    /// Points only, no line
    #[must_use]
    pub fn scatter(marker: Marker) -> Self {
        Self {
            line: LineStyle::None,
            marker: Some(marker),
            ..Self::default()
        }
    }

    /// Sets the color
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the stroke width
    #[must_use]
    pub fn with_line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the line style
    #[must_use]
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Sets the marker
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// Where a legend is placed within its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendLocation {
    /// Let the renderer choose; currently the upper right corner
    #[default]
    Best,
    /// Upper left corner
    UpperLeft,
    /// Upper right corner
    UpperRight,
    /// Lower left corner
    LowerLeft,
    /// Lower right corner
    LowerRight,
    /// Centered along the top
    UpperMiddle,
    /// Centered along the bottom
    LowerMiddle,
    /// Centered along the left edge
    MiddleLeft,
    /// Centered along the right edge
    MiddleRight,
    /// Center of the panel
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_bar_style() {
        let style = Style::error_bars();
        assert_eq!(style.color, Some(Color::BLACK));
        assert_eq!(style.line, LineStyle::None);
        assert!(style.marker.is_none());
    }

    #[test]
    fn test_builders() {
        let style = Style::default()
            .with_color(Color::RED)
            .with_line(LineStyle::Dashed)
            .with_marker(Marker::Cross)
            .with_line_width(3);
        assert_eq!(style.color, Some(Color::RED));
        assert_eq!(style.line, LineStyle::Dashed);
        assert_eq!(style.marker, Some(Marker::Cross));
        assert_eq!(style.line_width, 3);
        assert_eq!(Color::RED.to_string(), "#d62728");
    }
}
