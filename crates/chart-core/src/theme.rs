// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, plus the card colour palette.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub indicator: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            grid: Rgba::opaque(0x88, 0x88, 0x88).with_alpha(0.2),
            axis_label: Rgba::BLACK,
            indicator: Rgba::BLACK,
            tooltip_background: Rgba::WHITE.with_alpha(0.9),
            tooltip_text: Rgba::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            grid: Rgba::opaque(40, 40, 45),
            axis_label: Rgba::opaque(235, 235, 245),
            indicator: Rgba::opaque(255, 230, 70),
            tooltip_background: Rgba::opaque(40, 40, 45).with_alpha(0.9),
            tooltip_text: Rgba::opaque(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Card background colours.
pub const NICE_COLORS: [Rgba; 8] = [
    Rgba::from_argb_u32(0xFFEF5350), // red
    Rgba::from_argb_u32(0xFFAB47BC), // purple
    Rgba::from_argb_u32(0xFF42A5F5), // blue
    Rgba::from_argb_u32(0xFF26A69A), // teal
    Rgba::from_argb_u32(0xFF66BB6A), // green
    Rgba::from_argb_u32(0xFFFFCA28), // yellow
    Rgba::from_argb_u32(0xFFEC407A), // pink
    Rgba::from_argb_u32(0xFF29B6F6), // light blue
];

/// Gain/loss colours for percentage changes.
pub const GAIN: Rgba = Rgba::from_argb_u32(0xFF4CAF50);
pub const LOSS: Rgba = Rgba::from_argb_u32(0xFFF44336);

/// Pick a palette colour for `key`. Stable for a given key within a build.
pub fn nice_color_for(key: &str) -> Rgba {
    let mut h = DefaultHasher::new();
    key.hash(&mut h);
    NICE_COLORS[(h.finish() % NICE_COLORS.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }

    #[test]
    fn nice_color_is_stable() {
        assert_eq!(nice_color_for("AAPL"), nice_color_for("AAPL"));
        assert!(NICE_COLORS.contains(&nice_color_for("MSFT")));
    }
}
