// File: crates/wallet-chart-core/src/theme.rs
// Summary: Light/Dark theming for balance-chart rendering colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Low-alpha horizontal grid lines.
    pub grid: Color,
    pub line_stroke: Color,
    /// Gradient endpoint near the line.
    pub area_top: Color,
    /// Gradient endpoint at the baseline.
    pub area_bottom: Color,
    pub marker: Color,
    pub axis_label: Color,
    pub placeholder: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 17, 24, 39),
            grid: Color::from_argb(26, 59, 130, 246),
            line_stroke: Color::from_argb(255, 59, 130, 246),
            area_top: Color::from_argb(77, 59, 130, 246),
            area_bottom: Color::from_argb(0, 59, 130, 246),
            marker: Color::from_argb(255, 59, 130, 246),
            axis_label: Color::from_argb(255, 156, 163, 175),
            placeholder: Color::from_argb(255, 156, 163, 175),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(30, 37, 99, 235),
            line_stroke: Color::from_argb(255, 37, 99, 235),
            area_top: Color::from_argb(70, 37, 99, 235),
            area_bottom: Color::from_argb(0, 37, 99, 235),
            marker: Color::from_argb(255, 37, 99, 235),
            axis_label: Color::from_argb(255, 75, 85, 99),
            placeholder: Color::from_argb(255, 107, 114, 128),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
