use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{METHOD_COUNT, METHOD_LABELS};

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
// Color mapping: method column → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per method, shared by the plot lines, the legend and the
/// side-panel toggles.
#[derive(Debug, Clone)]
pub struct MethodColors {
    colors: [Color32; METHOD_COUNT],
}

impl MethodColors {
    pub fn new() -> Self {
        let palette = generate_palette(METHOD_COUNT);
        let mut colors = [Color32::GRAY; METHOD_COUNT];
        for (slot, c) in colors.iter_mut().zip(palette) {
            *slot = c;
        }
        MethodColors { colors }
    }

    /// Colour for the series at the given column index.
    pub fn color_at(&self, index: usize) -> Color32 {
        self.colors.get(index).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries (method label → colour) in column order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Color32)> + '_ {
        METHOD_LABELS
            .iter()
            .copied()
            .zip(self.colors.iter().copied())
    }
}

impl Default for MethodColors {
    fn default() -> Self {
        Self::new()
    }
}
