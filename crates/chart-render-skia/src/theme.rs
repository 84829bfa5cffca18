// File: crates/chart-render-skia/src/theme.rs
// Summary: Band palettes (one color per threshold band) plus surface colors.

use chart_threshold::Band;
use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub threshold_rule: skia::Color,
    pub above: skia::Color,
    /// Interior bands cycle through these, top to bottom.
    pub interior: Vec<skia::Color>,
    pub below: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            threshold_rule: skia::Color::from_argb(255, 90, 90, 100),
            above: skia::Color::from_argb(255, 220, 80, 80),
            interior: vec![
                skia::Color::from_argb(255, 255, 170, 50),
                skia::Color::from_argb(255, 240, 220, 90),
                skia::Color::from_argb(255, 150, 210, 90),
            ],
            below: skia::Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            threshold_rule: skia::Color::from_argb(255, 170, 170, 180),
            above: skia::Color::from_argb(255, 200, 60, 60),
            interior: vec![
                skia::Color::from_argb(255, 230, 140, 20),
                skia::Color::from_argb(255, 190, 170, 20),
                skia::Color::from_argb(255, 60, 150, 60),
            ],
            below: skia::Color::from_argb(255, 32, 120, 200),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            threshold_rule: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            above: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),       // red
            interior: vec![
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
                skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
            ],
            below: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
        }
    }

    pub fn color(&self, band: Band) -> skia::Color {
        match band {
            Band::Above => self.above,
            Band::Interior(k) if !self.interior.is_empty() => self.interior[k % self.interior.len()],
            Band::Interior(_) => self.above,
            Band::Below => self.below,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
