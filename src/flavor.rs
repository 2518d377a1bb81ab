//! Built-in Catppuccin flavor definitions and flavor naming rules.

use std::collections::BTreeMap;

use crate::error::{Result, ThemeError};
use crate::xterm;

/// Class name prefix for generated color schemes.
const CLASS_PREFIX: &str = "Catppuccin";

/// A named set of semantic colors, each a 24-bit hex value.
#[derive(Debug, Clone, Copy)]
pub struct Flavor {
    /// Display name. The first whitespace-delimited word determines the
    /// output file name and the generated class name.
    pub name: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

impl Flavor {
    /// Identifier-safe key derived from the name: first word, lowercased,
    /// stripped of anything outside `[a-z0-9_]`.
    pub fn key(&self) -> Result<String> {
        let word = self
            .name
            .split_whitespace()
            .next()
            .ok_or_else(|| ThemeError::InvalidFlavorName(self.name.to_string()))?;
        let key: String = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect();
        if key.is_empty() {
            return Err(ThemeError::InvalidFlavorName(self.name.to_string()));
        }
        Ok(key)
    }

    /// Class name for the generated scheme, e.g. `CatppuccinLatte`.
    pub fn class_name(&self) -> Result<String> {
        let word = self
            .name
            .split_whitespace()
            .next()
            .ok_or_else(|| ThemeError::InvalidFlavorName(self.name.to_string()))?;
        let lower = word.to_lowercase();
        let mut chars = lower.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => return Err(ThemeError::InvalidFlavorName(self.name.to_string())),
        };
        Ok(format!("{CLASS_PREFIX}{capitalized}"))
    }

    /// Quantize every color to its xterm palette index, keyed by the
    /// lowercased color name. Ordered map keeps output deterministic.
    pub fn quantize(&self) -> Result<BTreeMap<String, u8>> {
        self.colors
            .iter()
            .map(|(name, hex)| Ok((name.to_lowercase(), xterm::hex_to_index(hex)?)))
            .collect()
    }
}

/// All known flavors, in generation order.
pub fn all_flavors() -> &'static [Flavor] {
    &[LATTE, FRAPPE, MACCHIATO, MOCHA]
}

pub const LATTE: Flavor = Flavor {
    name: "Latte (light)",
    colors: &[
        ("rosewater", "#DC8A78"),
        ("flamingo", "#DD7878"),
        ("pink", "#EA76CB"),
        ("mauve", "#8839EF"),
        ("red", "#D20F39"),
        ("maroon", "#E64553"),
        ("peach", "#FE640B"),
        ("yellow", "#DF8E1D"),
        ("green", "#40A02B"),
        ("teal", "#179299"),
        ("sky", "#04A5E5"),
        ("sapphire", "#209FB5"),
        ("blue", "#1E66F5"),
        ("lavender", "#7287FD"),
        ("text", "#4C4F69"),
        ("subtext_1", "#5C5F77"),
        ("subtext_0", "#6C6F85"),
        ("overlay_2", "#7C7F93"),
        ("overlay_1", "#8C8FA1"),
        ("overlay_0", "#9CA0B0"),
        ("surface_2", "#ACB0BE"),
        ("surface_1", "#BCC0CC"),
        ("surface_0", "#CCD0DA"),
        ("base", "#EFF1F5"),
        ("mantle", "#E6E9EF"),
        ("crust", "#DCE0E8"),
    ],
};

pub const FRAPPE: Flavor = Flavor {
    name: "Frappe (dark)",
    colors: &[
        ("rosewater", "#f2d5cf"),
        ("flamingo", "#eebebe"),
        ("pink", "#f4b8e4"),
        ("mauve", "#ca9ee6"),
        ("red", "#e78284"),
        ("maroon", "#ea999c"),
        ("peach", "#ef9f76"),
        ("yellow", "#e5c890"),
        ("green", "#a6d189"),
        ("teal", "#81c8be"),
        ("sky", "#99d1db"),
        ("sapphire", "#85c1dc"),
        ("blue", "#8caaee"),
        ("lavender", "#babbf1"),
        ("text", "#c6d0f5"),
        ("subtext_1", "#b5bfe2"),
        ("subtext_0", "#a5adce"),
        ("overlay_2", "#949cbb"),
        ("overlay_1", "#838ba7"),
        ("overlay_0", "#737994"),
        ("surface_2", "#626880"),
        ("surface_1", "#51576d"),
        ("surface_0", "#414559"),
        ("base", "#303446"),
        ("mantle", "#292c3c"),
        ("crust", "#232634"),
    ],
};

pub const MACCHIATO: Flavor = Flavor {
    name: "Macchiato (dark)",
    colors: &[
        ("rosewater", "#F4DBD6"),
        ("flamingo", "#F0C6C6"),
        ("pink", "#F5BDE6"),
        ("mauve", "#C6A0F6"),
        ("red", "#ED8796"),
        ("maroon", "#EE99A0"),
        ("peach", "#F5A97F"),
        ("yellow", "#EED49F"),
        ("green", "#A6DA95"),
        ("teal", "#8BD5CA"),
        ("sky", "#91D7E3"),
        ("sapphire", "#7DC4E4"),
        ("blue", "#8AADF4"),
        ("lavender", "#B7BDF8"),
        ("text", "#CAD3F5"),
        ("subtext_1", "#B8C0E0"),
        ("subtext_0", "#A5ADCB"),
        ("overlay_2", "#939AB7"),
        ("overlay_1", "#8087A2"),
        ("overlay_0", "#6E738D"),
        ("surface_2", "#5B6078"),
        ("surface_1", "#494D64"),
        ("surface_0", "#363A4F"),
        ("base", "#24273A"),
        ("mantle", "#1E2030"),
        ("crust", "#181926"),
    ],
};

pub const MOCHA: Flavor = Flavor {
    name: "Mocha (dark)",
    colors: &[
        ("rosewater", "#f5e0dc"),
        ("flamingo", "#f2cdcd"),
        ("pink", "#f5c2e7"),
        ("mauve", "#cba6f7"),
        ("red", "#f38ba8"),
        ("maroon", "#eba0ac"),
        ("peach", "#fab387"),
        ("yellow", "#f9e2af"),
        ("green", "#a6e3a1"),
        ("teal", "#94e2d5"),
        ("sky", "#89dceb"),
        ("sapphire", "#74c7ec"),
        ("blue", "#89b4fa"),
        ("lavender", "#b4befe"),
        ("text", "#cdd6f4"),
        ("subtext_1", "#bac2de"),
        ("subtext_0", "#a6adc8"),
        ("overlay_2", "#9399b2"),
        ("overlay_1", "#7f849c"),
        ("overlay_0", "#6c7086"),
        ("surface_2", "#585b70"),
        ("surface_1", "#45475a"),
        ("surface_0", "#313244"),
        ("base", "#1e1e2e"),
        ("mantle", "#181825"),
        ("crust", "#11111b"),
    ],
};
