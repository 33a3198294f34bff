use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Mix, Srgb};

use crate::data::model::Region;

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
            to_color32(hsl.into_color())
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Region colours
// ---------------------------------------------------------------------------

/// Maps each of the five regions to a distinct colour for scatter/legend use.
#[derive(Debug, Clone)]
pub struct RegionColors {
    mapping: BTreeMap<Region, Color32>,
    default_color: Color32,
}

impl Default for RegionColors {
    fn default() -> Self {
        let palette = generate_palette(Region::ALL.len());
        let mapping: BTreeMap<Region, Color32> =
            Region::ALL.iter().copied().zip(palette).collect();
        RegionColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl RegionColors {
    pub fn color_for(&self, region: Region) -> Color32 {
        self.mapping
            .get(&region)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Continuous scales
// ---------------------------------------------------------------------------

fn lerp3(t: f32, lo: Srgb, mid: Srgb, hi: Srgb) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mixed = if t < 0.5 {
        lo.into_linear().mix(mid.into_linear(), t * 2.0)
    } else {
        mid.into_linear().mix(hi.into_linear(), (t - 0.5) * 2.0)
    };
    to_color32(Srgb::from_linear(mixed))
}

/// Freedom-score scale: red at 0, amber at 50, green at 100.
pub fn score_color(score: f64) -> Color32 {
    lerp3(
        (score / 100.0) as f32,
        Srgb::new(0.85, 0.21, 0.20),
        Srgb::new(0.89, 0.70, 0.25),
        Srgb::new(0.25, 0.73, 0.31),
    )
}

/// Correlation scale: red at -1, near-black at 0, green at +1. NaN cells
/// (degenerate columns) render as the neutral midpoint.
pub fn correlation_color(r: f64) -> Color32 {
    if r.is_nan() {
        return Color32::from_gray(40);
    }
    lerp3(
        ((r + 1.0) / 2.0) as f32,
        Srgb::new(0.85, 0.21, 0.20),
        Srgb::new(0.13, 0.15, 0.18),
        Srgb::new(0.25, 0.73, 0.31),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_region_gets_a_colour() {
        let rc = RegionColors::default();
        let colours: Vec<Color32> = Region::ALL.iter().map(|&r| rc.color_for(r)).collect();
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn score_scale_endpoints() {
        // Low scores are red-dominant, high scores green-dominant.
        let low = score_color(0.0);
        let high = score_color(100.0);
        assert!(low.r() > low.g());
        assert!(high.g() > high.r());
    }
}
