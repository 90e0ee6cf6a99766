use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: type value → Color32
// ---------------------------------------------------------------------------

/// Maps the catalog's distinct `type` values to distinct colours, shared by
/// the pie slices and the histogram series so a type keeps one colour
/// across the whole dashboard.
#[derive(Debug, Clone, Default)]
pub struct KindColors {
    mapping: BTreeMap<String, Color32>,
}

impl KindColors {
    /// Build a colour map from the distinct type values, in their
    /// enumeration order so colours are stable across refilters.
    pub fn new(kinds: &[String]) -> Self {
        let palette = generate_palette(kinds.len());
        let mapping = kinds
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();
        KindColors { mapping }
    }

    /// Look up the colour for a type value.
    pub fn color_for(&self, kind: &str) -> Color32 {
        self.mapping.get(kind).copied().unwrap_or(Color32::GRAY)
    }
}
