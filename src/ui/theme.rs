use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,            // Resting bar color
    pub bar_compare: Color,    // Bars under comparison
    pub bar_write: Color,      // Bars being swapped or written
    pub bar_sorted: Color,     // Bars locked in their final position
    pub annotation: Color,     // Pseudocode annotation text
    pub type_name: Color,      // Cyan for labels and badges
    pub highlight_value: Color, // Pink for emphasized values
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    bar: Color::Rgb(137, 180, 250),            // Blue for resting bars
    bar_compare: Color::Rgb(249, 226, 175),    // Yellow while comparing
    bar_write: Color::Rgb(243, 139, 168),      // Red while swapping/writing
    bar_sorted: Color::Rgb(166, 227, 161),     // Green once final
    annotation: Color::Rgb(250, 179, 135),     // Orange for annotations
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for labels
    highlight_value: Color::Rgb(245, 194, 231), // Pink for emphasized values
};
