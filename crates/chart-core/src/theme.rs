// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    /// Series colors, assigned in order and cycled.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 225, 225, 230),
            axis_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            legend_fill: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 205),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
                skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_fill: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 170, 60),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 130, 240),
                skia::Color::from_argb(255, 255, 230, 70),
            ],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            legend_fill: skia::Color::from_argb(230, 0xfd, 0xf6, 0xe3),
            legend_border: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
            palette: [
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
            ],
        }
    }

    /// Palette color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
