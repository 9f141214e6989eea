use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::engine::chart::series_rgb;

// ---------------------------------------------------------------------------
// Series colors – egui view of the engine's deterministic formula
// ---------------------------------------------------------------------------

/// Fill color for the series at a selection index (0.6 alpha, matching the
/// `rgba(...,0.6)` strings the engine emits).
pub fn series_fill(idx: usize) -> Color32 {
    let (r, g, b) = series_rgb(idx);
    Color32::from_rgba_unmultiplied(r, g, b, 153)
}

/// Opaque stroke color for the series at a selection index.
pub fn series_stroke(idx: usize) -> Color32 {
    let (r, g, b) = series_rgb(idx);
    Color32::from_rgb(r, g, b)
}

// ---------------------------------------------------------------------------
// Slice palette – distinct hues for pie slices
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Pie charts color per slice, not per series, so they need their own
/// palette rather than the positional series formula.
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
