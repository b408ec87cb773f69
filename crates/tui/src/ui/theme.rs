use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface_bright: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_bright: Color::Rgb(18, 22, 26),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(86, 97, 107),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(255, 84, 3),
            border: Color::Rgb(60, 66, 72),
            border_focused: Color::Rgb(255, 84, 3),
            positive: Color::Rgb(60, 170, 110),
            negative: Color::Rgb(200, 80, 80),
            warning: Color::Rgb(210, 160, 60),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
