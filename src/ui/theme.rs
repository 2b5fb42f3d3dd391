use crate::snapshot::Tone;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub field_name: Color,
    pub value: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub result: Color, // Special color for returned values
}

impl Theme {
    /// Color for an action tag of the given tone
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Neutral => self.primary,
            Tone::Success => self.success,
            Tone::Failure => self.error,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    field_name: Color::Rgb(148, 226, 213),     // Cyan/teal for field names
    value: Color::Rgb(250, 179, 135),          // Orange for values
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current step
    result: Color::Rgb(245, 194, 231),         // Pink for results
};
