use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub status_bg: Color,
    pub button_active: Color,
    pub button_idle: Color,
    pub button_label: Color,
    pub bars: [Color; 3], // Rotated by bar index
    pub highlight: Color, // Bars touched by the current step
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    status_bg: Color::Rgb(50, 50, 70),
    button_active: Color::Rgb(127, 132, 156), // Lighter fill for the selection
    button_idle: Color::Rgb(69, 71, 90),
    button_label: Color::Rgb(255, 255, 255),
    bars: [
        Color::Rgb(88, 91, 112),
        Color::Rgb(166, 173, 200),
        Color::Rgb(127, 132, 156),
    ],
    highlight: Color::Rgb(243, 139, 168), // Pink
};
