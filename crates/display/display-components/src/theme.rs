//! Palette, themes and symbolic colors.
//!
//! Widgets describe colors either as literal RGB values or as [`ThemeToken`]s
//! ("primary text", "panel border", …). Tokens are resolved against the active
//! [`Theme`] before a component tree is built, so components only ever hold
//! concrete [`Rgb888`] values.
//!
//! ```
//! use display_components::theme::{palette, Color, Theme, ThemeToken};
//!
//! let theme = Theme::CLASSIC;
//! assert_eq!(theme.resolve(Color::Token(ThemeToken::TextPrimary)), palette::WHITE);
//! assert_eq!(theme.resolve(Color::Rgb(palette::CYAN)), palette::CYAN);
//! ```

use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

/// Named colors shared by every theme.
///
/// Accents come from colorblind-friendly qualitative palettes.
pub mod palette {
    use embedded_graphics::pixelcolor::Rgb888;

    /// Pure white.
    pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);
    /// Secondary text on dark backgrounds.
    pub const GRAY: Rgb888 = Rgb888::new(100, 100, 100);
    /// Gauge tracks.
    pub const DARK_GRAY: Rgb888 = Rgb888::new(40, 40, 40);
    /// Panel fill.
    pub const PANEL: Rgb888 = Rgb888::new(18, 18, 18);
    /// Panel outline.
    pub const PANEL_BORDER: Rgb888 = Rgb888::new(50, 50, 50);

    /// Purple.
    pub const PURPLE: Rgb888 = Rgb888::new(127, 60, 141);
    /// Teal.
    pub const TEAL: Rgb888 = Rgb888::new(17, 165, 121);
    /// Blue.
    pub const BLUE: Rgb888 = Rgb888::new(57, 105, 172);
    /// Yellow.
    pub const YELLOW: Rgb888 = Rgb888::new(242, 183, 1);
    /// Pink.
    pub const PINK: Rgb888 = Rgb888::new(231, 63, 116);
    /// Green.
    pub const GREEN: Rgb888 = Rgb888::new(128, 186, 90);

    /// Cyan (teal variant), the default accent.
    pub const CYAN: Rgb888 = Rgb888::new(27, 158, 119);
    /// Orange.
    pub const ORANGE: Rgb888 = Rgb888::new(217, 95, 2);
    /// Lavender.
    pub const LAVENDER: Rgb888 = Rgb888::new(117, 112, 179);
    /// Magenta.
    pub const MAGENTA: Rgb888 = Rgb888::new(231, 41, 138);
    /// Lime, the default "on" color.
    pub const LIME: Rgb888 = Rgb888::new(102, 166, 30);
    /// Gold.
    pub const GOLD: Rgb888 = Rgb888::new(230, 171, 2);
    /// Brown.
    pub const BROWN: Rgb888 = Rgb888::new(166, 118, 29);
    /// Red, the default "off" and error color.
    pub const RED: Rgb888 = Rgb888::new(231, 76, 60);
}

/// Symbolic color resolved against the active theme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeToken {
    /// Canvas background.
    Background,
    /// Panel fill.
    Panel,
    /// Panel outline.
    PanelBorder,
    /// Main values.
    TextPrimary,
    /// Labels, units and captions.
    TextSecondary,
    /// Unfilled part of bars and gauges.
    Track,
}

/// Literal RGB value or theme token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// Concrete color; resolving it is a no-op.
    Rgb(Rgb888),
    /// Looked up in the active theme.
    Token(ThemeToken),
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Color::Rgb(c)
    }
}

impl From<ThemeToken> for Color {
    fn from(t: ThemeToken) -> Self {
        Color::Token(t)
    }
}

/// Concrete colors for every [`ThemeToken`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Canvas background.
    pub background: Rgb888,
    /// Panel fill.
    pub panel: Rgb888,
    /// Panel outline.
    pub panel_border: Rgb888,
    /// Main values.
    pub text_primary: Rgb888,
    /// Labels, units and captions.
    pub text_secondary: Rgb888,
    /// Unfilled part of bars and gauges.
    pub track: Rgb888,
}

impl Default for Theme {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl Theme {
    /// Light text on black, the device default.
    pub const CLASSIC: Theme = Theme {
        background: palette::BLACK,
        panel: palette::PANEL,
        panel_border: palette::PANEL_BORDER,
        text_primary: palette::WHITE,
        text_secondary: palette::GRAY,
        track: palette::DARK_GRAY,
    };

    /// Dark text on an off-white background.
    pub const LIGHT: Theme = Theme {
        background: Rgb888::new(245, 245, 245),
        panel: palette::WHITE,
        panel_border: Rgb888::new(200, 200, 200),
        text_primary: Rgb888::new(20, 20, 20),
        text_secondary: Rgb888::new(110, 110, 110),
        track: Rgb888::new(220, 220, 220),
    };

    /// Looks up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Theme> {
        name.parse::<ThemeName>().ok().map(ThemeName::theme)
    }

    /// Color bound to `token`.
    pub fn token(&self, token: ThemeToken) -> Rgb888 {
        match token {
            ThemeToken::Background => self.background,
            ThemeToken::Panel => self.panel,
            ThemeToken::PanelBorder => self.panel_border,
            ThemeToken::TextPrimary => self.text_primary,
            ThemeToken::TextSecondary => self.text_secondary,
            ThemeToken::Track => self.track,
        }
    }

    /// Resolves a symbolic or literal color. Idempotent.
    pub fn resolve(&self, color: Color) -> Rgb888 {
        match color {
            Color::Rgb(c) => c,
            Color::Token(t) => self.token(t),
        }
    }
}

/// Serializable name of a built-in theme.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// [`Theme::CLASSIC`].
    #[default]
    Classic,
    /// [`Theme::LIGHT`].
    Light,
}

impl ThemeName {
    /// The theme this name refers to.
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Classic => Theme::CLASSIC,
            ThemeName::Light => Theme::LIGHT,
        }
    }
}

impl core::str::FromStr for ThemeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(ThemeName::Classic),
            "light" => Ok(ThemeName::Light),
            _ => Err(()),
        }
    }
}

/// `serde` helpers for `[r, g, b]` color arrays.
pub mod rgb_array {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes an optional color as `[r, g, b]` or `null`.
    pub fn serialize<S: Serializer>(color: &Option<Rgb888>, s: S) -> Result<S::Ok, S::Error> {
        color.map(|c| [c.r(), c.g(), c.b()]).serialize(s)
    }

    /// Deserializes `[r, g, b]` or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Rgb888>, D::Error> {
        Ok(Option::<[u8; 3]>::deserialize(d)?.map(|[r, g, b]| Rgb888::new(r, g, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_idempotent() {
        for theme in [Theme::CLASSIC, Theme::LIGHT] {
            for token in [
                ThemeToken::Background,
                ThemeToken::Panel,
                ThemeToken::PanelBorder,
                ThemeToken::TextPrimary,
                ThemeToken::TextSecondary,
                ThemeToken::Track,
            ] {
                let once = theme.resolve(token.into());
                assert_eq!(theme.resolve(once.into()), once);
            }
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("classic"), Some(Theme::CLASSIC));
        assert_eq!(Theme::by_name("light"), Some(Theme::LIGHT));
        assert_eq!(Theme::by_name("neon"), None);
    }

    #[test]
    fn test_light_theme_inverts_text() {
        assert_ne!(Theme::LIGHT.text_primary, Theme::CLASSIC.text_primary);
        assert_eq!(Theme::default(), Theme::CLASSIC);
    }

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Holder {
        #[serde(with = "rgb_array", default)]
        color: Option<Rgb888>,
    }

    #[test]
    fn test_rgb_array_serde() {
        let h: Holder = serde_json::from_str(r#"{"color": [27, 158, 119]}"#).unwrap();
        assert_eq!(h.color, Some(palette::CYAN));
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"color":[27,158,119]}"#);

        let empty: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.color, None);
    }
}
