//! Theme Builder
//!
//! One primary color in, a full token record out. Identical input always
//! yields an identical record.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_PRIMARY: &str = "#6c5ce7";

const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("pink", "#ffc0cb"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("teal", "#008080"),
    ("navy", "#000080"),
    ("gold", "#ffd700"),
];

/// Token set consumed by the renderer's stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub primary: String,
    pub primary_dark: String,
    pub primary_soft: String,
    pub hero_gradient: String,
    pub accent: String,
    pub bg: String,
    pub surface: String,
    pub surface_alt: String,
    pub text: String,
    pub text_secondary: String,
    pub card_bg: String,
    pub border_color: String,
    pub font_family: String,
    pub radius: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    fn scaled(self, factor: f64) -> Rgb {
        let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Rgb(scale(self.0), scale(self.1), scale(self.2))
    }

    fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn rgba(self, alpha: &str) -> String {
        format!("rgba({},{},{},{})", self.0, self.1, self.2, alpha)
    }
}

/// `#rgb`, `#rrggbb`, `#rrggbbaa` or one of a small set of named colors.
pub fn is_color_literal(value: &str) -> bool {
    static HEX_COLOR_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let hex_regex = HEX_COLOR_REGEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").ok()
    });
    let value = value.trim();
    hex_regex.as_ref().is_some_and(|re| re.is_match(value)) || named_color(value).is_some()
}

fn named_color(value: &str) -> Option<&'static str> {
    let lower = value.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, hex)| *hex)
}

fn parse_rgb(value: &str) -> Option<Rgb> {
    let value = value.trim();
    let hex = named_color(value).unwrap_or(value).strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgb(digits.next()??, digits.next()??, digits.next()??))
        }
        6 | 8 => Some(Rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Build the theme for `primary_color`. An unusable literal falls back to [`DEFAULT_PRIMARY`].
pub fn build(primary_color: &str) -> ThemeRecord {
    let parsed = if is_color_literal(primary_color) {
        parse_rgb(primary_color)
    } else {
        None
    };
    let (primary, rgb) = match parsed {
        Some(rgb) => (primary_color.trim().to_string(), rgb),
        None => {
            warn!(primary_color, "invalid primary color, using default");
            let rgb = parse_rgb(DEFAULT_PRIMARY).unwrap_or(Rgb(0x6c, 0x5c, 0xe7));
            (DEFAULT_PRIMARY.to_string(), rgb)
        }
    };

    ThemeRecord {
        primary_dark: rgb.scaled(0.8).hex(),
        primary_soft: rgb.rgba("0.06"),
        hero_gradient: format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            rgb.rgba("1"),
            rgb.rgba("0.72")
        ),
        primary,
        accent: "#fd79a8".to_string(),
        bg: "#ffffff".to_string(),
        surface: "#f8f9fb".to_string(),
        surface_alt: "#eef0f4".to_string(),
        text: "#1a1a2e".to_string(),
        text_secondary: "#6b7280".to_string(),
        card_bg: "#ffffff".to_string(),
        border_color: "#e5e7eb".to_string(),
        font_family: "'Tajawal', sans-serif".to_string(),
        radius: "12px".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build("#00b894"), build("#00b894"));
    }

    #[test]
    fn test_gradient_uses_primary_at_two_opacities() {
        let theme = build("#6c5ce7");
        assert_eq!(
            theme.hero_gradient,
            "linear-gradient(135deg, rgba(108,92,231,1) 0%, rgba(108,92,231,0.72) 100%)"
        );
        assert_eq!(theme.primary_dark, "#564ab9");
    }

    #[test]
    fn test_structural_tokens_independent_of_input() {
        let a = build("#111111");
        let b = build("orange");
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.font_family, b.font_family);
        assert_eq!(a.surface, b.surface);
        assert_ne!(a.hero_gradient, b.hero_gradient);
    }

    #[test]
    fn test_short_hex_and_named() {
        assert_eq!(build("#fff").primary_dark, "#cccccc");
        assert_eq!(build("red").primary_soft, "rgba(255,0,0,0.06)");
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let theme = build("red;}</style><script>alert(1)</script>");
        assert_eq!(theme.primary, DEFAULT_PRIMARY);
        assert_eq!(theme, build(DEFAULT_PRIMARY));
    }

    #[test]
    fn test_is_color_literal() {
        assert!(is_color_literal("#abc"));
        assert!(is_color_literal("#AABBCC"));
        assert!(is_color_literal("#aabbccdd"));
        assert!(is_color_literal("Teal"));
        assert!(!is_color_literal("#abcd"));
        assert!(!is_color_literal("url(javascript:x)"));
        assert!(!is_color_literal(""));
    }
}
