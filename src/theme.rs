//! Colour scheme and typography the renderer resolves style tokens against.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};

/// Named typography slots a view may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    TitleMedium,
    BodyMedium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub weight: FontWeight,
}

/// Colours of the full-screen container and the text drawn on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Color,
    pub on_surface: Color,
}

impl ColorScheme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xff, 0xfb, 0xfe),
            on_surface: Color::Rgb(0x1c, 0x1b, 0x1f),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x1c, 0x1b, 0x1f),
            on_surface: Color::Rgb(0xe6, 0xe1, 0xe5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub title_medium: TextStyle,
    pub body_medium: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_medium: TextStyle {
                weight: FontWeight::Medium,
            },
            body_medium: TextStyle {
                weight: FontWeight::Normal,
            },
        }
    }
}

impl Typography {
    pub fn get(&self, token: StyleToken) -> TextStyle {
        match token {
            StyleToken::TitleMedium => self.title_medium,
            StyleToken::BodyMedium => self.body_medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub typography: Typography,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        };
        Self {
            colors,
            typography: Typography::default(),
        }
    }

    /// Resolves a style token to a terminal style.
    pub fn style(&self, token: StyleToken) -> Style {
        let text = self.typography.get(token);
        let style = Style::default()
            .fg(self.colors.on_surface)
            .bg(self.colors.background);
        match text.weight {
            FontWeight::Medium => style.add_modifier(Modifier::BOLD),
            FontWeight::Normal => style,
        }
    }

    pub fn background(&self) -> Style {
        Style::default()
            .fg(self.colors.on_surface)
            .bg(self.colors.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_bold_body_is_not() {
        let theme = Theme::default();
        assert!(
            theme
                .style(StyleToken::TitleMedium)
                .add_modifier
                .contains(Modifier::BOLD)
        );
        assert!(
            !theme
                .style(StyleToken::BodyMedium)
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    #[test]
    fn test_modes_use_their_palette() {
        let light = Theme::new(ThemeMode::Light);
        let dark = Theme::new(ThemeMode::Dark);
        assert_eq!(light.colors.background, Color::Rgb(0xff, 0xfb, 0xfe));
        assert_eq!(dark.colors.background, Color::Rgb(0x1c, 0x1b, 0x1f));
        assert_eq!(light.background().bg, Some(light.colors.background));
        assert_ne!(
            light.style(StyleToken::BodyMedium).fg,
            dark.style(StyleToken::BodyMedium).fg
        );
    }
}
