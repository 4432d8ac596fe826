//! Resource color assignment for the timeline legend.
//!
//! Colors are a pure function of the distinct resource list and a seed:
//! evenly spaced hues, rotated by the seed. Same inputs, same palette.

use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

const FALLBACK_COLOR: &str = "rgb(128, 128, 128)";

#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, String>,
}

impl ColorMap {
    /// Assign one color per resource, in `rgb(r, g, b)` form.
    pub fn assign(resources: &[String], seed: u64) -> Self {
        let n = resources.len().max(1);
        let offset = (seed % 360) as f32;

        let mapping = resources
            .iter()
            .enumerate()
            .map(|(i, resource)| {
                let hue = (offset + (i as f32 / n as f32) * 360.0) % 360.0;
                (resource.clone(), rgb_string(hue))
            })
            .collect();

        Self { mapping }
    }

    pub fn color_for(&self, resource: &str) -> &str {
        self.mapping
            .get(resource)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.mapping
    }
}

fn rgb_string(hue: f32) -> String {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    format!(
        "rgb({}, {}, {})",
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8
    )
}
