//! Studio palette, its high-contrast variant, and font scale as spacing.
//!
//! A terminal cannot change its font size, so the admin "font size"
//! preference becomes panel padding plus bold body text at `Large`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Padding;

use hisi_core::{FontSize, OrderStatus, Presentation};

// ── Studio palette ────────────────────────────────────────────────────

pub const PLUM: Color = Color::Rgb(142, 68, 173); // #8e44ad
pub const GOLD: Color = Color::Rgb(230, 180, 80); // #e6b450
pub const IVORY: Color = Color::Rgb(236, 230, 218); // #ece6da
pub const SAGE: Color = Color::Rgb(125, 190, 140); // #7dbe8c
pub const CLAY: Color = Color::Rgb(224, 108, 95); // #e06c5f
pub const SKY: Color = Color::Rgb(120, 175, 220); // #78afdc
pub const SLATE: Color = Color::Rgb(110, 108, 125); // #6e6c7d
pub const INK: Color = Color::Rgb(28, 26, 34); // #1c1a22
pub const INK_RAISED: Color = Color::Rgb(44, 40, 54); // #2c2836

/// Resolved colors and spacing for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub secondary: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub bg: Color,
    pub bg_raised: Color,
    pub font_size: FontSize,
    pub high_contrast: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_presentation(Presentation::default())
    }
}

impl Theme {
    pub fn from_presentation(presentation: Presentation) -> Self {
        let base = if presentation.high_contrast {
            Self::high_contrast()
        } else {
            Self::studio()
        };
        Self {
            font_size: presentation.font_size,
            high_contrast: presentation.high_contrast,
            ..base
        }
    }

    fn studio() -> Self {
        Self {
            accent: PLUM,
            secondary: GOLD,
            text: IVORY,
            muted: SLATE,
            border: SLATE,
            success: SAGE,
            warning: GOLD,
            error: CLAY,
            info: SKY,
            bg: INK,
            bg_raised: INK_RAISED,
            font_size: FontSize::Medium,
            high_contrast: false,
        }
    }

    /// Pure colors on black; muted text is kept readable.
    fn high_contrast() -> Self {
        Self {
            accent: Color::Yellow,
            secondary: Color::LightCyan,
            text: Color::White,
            muted: Color::Gray,
            border: Color::White,
            success: Color::LightGreen,
            warning: Color::Yellow,
            error: Color::LightRed,
            info: Color::LightCyan,
            bg: Color::Black,
            bg_raised: Color::Black,
            font_size: FontSize::Medium,
            high_contrast: true,
        }
    }

    /// Horizontal padding inside panels.
    pub fn padding(&self) -> Padding {
        match self.font_size {
            FontSize::Small => Padding::ZERO,
            FontSize::Medium => Padding::horizontal(1),
            FontSize::Large => Padding::new(2, 2, 1, 0),
        }
    }

    /// Extra blank lines between stacked fields.
    pub fn line_gap(&self) -> u16 {
        match self.font_size {
            FontSize::Small | FontSize::Medium => 0,
            FontSize::Large => 1,
        }
    }

    fn body_modifier(&self) -> Modifier {
        if self.font_size == FontSize::Large || self.high_contrast {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }
    }

    // ── Semantic styles ───────────────────────────────────────────────

    pub fn text(&self) -> Style {
        Style::default().fg(self.text).add_modifier(self.body_modifier())
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.secondary).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn selected(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.high_contrast {
            style.fg(Color::Black).bg(Color::Yellow)
        } else {
            style.fg(self.text).bg(self.bg_raised)
        }
    }

    pub fn tab(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn key(&self) -> Style {
        Style::default().fg(self.secondary).add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn disabled(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    pub fn price(&self) -> Style {
        Style::default().fg(self.secondary).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    pub fn background(&self) -> Style {
        Style::default().bg(self.bg)
    }

    pub fn status(&self, status: OrderStatus) -> Style {
        let color = match status {
            OrderStatus::Pending => self.warning,
            OrderStatus::Processing => self.info,
            OrderStatus::Shipped => self.accent,
            OrderStatus::Delivered => self.success,
            OrderStatus::Cancelled => self.error,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn high_contrast_swaps_palette() {
        let normal = Theme::default();
        let contrast = Theme::from_presentation(Presentation {
            high_contrast: true,
            ..Presentation::default()
        });
        assert_eq!(normal.bg, INK);
        assert_eq!(contrast.bg, Color::Black);
        assert_eq!(contrast.text, Color::White);
        assert!(contrast.text().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn font_size_scales_spacing() {
        let small = Theme::from_presentation(Presentation {
            font_size: FontSize::Small,
            high_contrast: false,
        });
        let large = Theme::from_presentation(Presentation {
            font_size: FontSize::Large,
            high_contrast: false,
        });
        assert_eq!(small.padding(), Padding::ZERO);
        assert_eq!(large.padding(), Padding::new(2, 2, 1, 0));
        assert_eq!(large.line_gap(), 1);
        assert_eq!(Theme::default().padding(), Padding::horizontal(1));
    }
}
