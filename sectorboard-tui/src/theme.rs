//! Parrot/neon theme tokens.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, headers, active sort)
//! - **Positive**: Neon green (gains)
//! - **Negative**: Hot pink (losses, errors)
//! - **Warning**: Neon orange (alerts)
//! - **Neutral**: Cool purple (market breadth, never signed)
//! - **Muted**: Steel blue (secondary text, N/A)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Signed change: green at or above zero, pink below, muted when absent.
    pub fn change_color(&self, value: Option<f64>) -> Color {
        match value.filter(|v| v.is_finite()) {
            Some(v) if v >= 0.0 => self.positive,
            Some(_) => self.negative,
            None => self.muted,
        }
    }

    /// Market breadth is informational only.
    pub fn breadth_color(&self, value: Option<f64>) -> Color {
        match value {
            Some(_) => self.neutral,
            None => self.muted,
        }
    }
}

const PALETTE: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(PALETTE.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(PALETTE.muted)
}

pub fn text() -> Style {
    Style::default().fg(PALETTE.text_primary)
}

pub fn secondary() -> Style {
    Style::default().fg(PALETTE.text_secondary)
}

pub fn warning() -> Style {
    Style::default().fg(PALETTE.warning)
}

pub fn negative() -> Style {
    Style::default().fg(PALETTE.negative)
}

pub fn neutral() -> Style {
    Style::default().fg(PALETTE.neutral)
}

pub fn change(value: Option<f64>) -> Style {
    Style::default().fg(PALETTE.change_color(value))
}

pub fn breadth(value: Option<f64>) -> Style {
    Style::default().fg(PALETTE.breadth_color(value))
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Highlight for the cursor row.
pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_change_color() {
        let theme = Theme::default();
        assert_eq!(theme.change_color(Some(1.5)), theme.positive);
        assert_eq!(theme.change_color(Some(0.0)), theme.positive);
        assert_eq!(theme.change_color(Some(-0.1)), theme.negative);
        assert_eq!(theme.change_color(None), theme.muted);
    }

    #[test]
    fn test_breadth_is_never_signed() {
        let theme = Theme::default();
        assert_eq!(theme.breadth_color(Some(-5.0)), theme.neutral);
        assert_eq!(theme.breadth_color(Some(80.0)), theme.neutral);
        assert_eq!(theme.breadth_color(None), theme.muted);
    }
}
