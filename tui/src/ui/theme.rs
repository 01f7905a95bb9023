use ratatui::style::{Color, Modifier, Style};

/// Amber-on-charcoal palette.
///
/// - warm amber foreground for content
/// - charcoal background
/// - green/yellow/red reserved for outcome severities
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(18, 18, 20);
    pub const FG_AMBER: Color = Color::Rgb(255, 191, 0);
    pub const FG_SAND: Color = Color::Rgb(214, 176, 98);
    pub const FG_ASH: Color = Color::Rgb(110, 104, 96);

    pub const ACCENT_TEAL: Color = Color::Rgb(64, 224, 208);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 220, 90);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 230, 80);
    pub const ACCENT_RED: Color = Color::Rgb(255, 85, 85);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_AMBER).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_SAND).bg(Self::BG)
    }

    /// Border of the focused panel or field.
    pub fn border_focus() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG_AMBER)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_SAND)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_ASH)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::FG_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }
}
