//! Heatmap color scale and layout
//!
//! Maps a set of emission estimates onto a green -> yellow -> red gradient
//! and pairs each region with its fixed display rectangle for the map view.
//! Low emissions always render cool (green), high always hot (red); the
//! legend gradient in the UI assumes this ordering.
//!
//! The geometry is illustrative, not GIS-accurate: hand-placed rectangles on
//! a 500x700 viewBox that roughly follow the shape of the country.

use crate::estimate::EmissionResult;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// SVG viewBox the tile geometry is expressed in
pub const VIEW_BOX: &str = "0 0 500 700";

/// An RGB color, displayed in CSS `rgb(r, g, b)` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Round and clamp one gradient channel to [0, 255]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Map `value` within `[min, max]` to the emission color scale
///
/// Two-segment piecewise gradient:
/// - lower half interpolates green `rgb(100, 180, 80)` to yellow
///   `rgb(255, 255, 80)`
/// - upper half interpolates yellow to red `rgb(255, 155, 0)`
///
/// A degenerate range (`min == max`, e.g. a single region or identical
/// forecasts) normalizes to 0 so every tile gets the green endpoint instead
/// of a NaN-poisoned color.
pub fn color_for(value: f64, min: f64, max: f64) -> Rgb {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };

    if t < 0.5 {
        let r2 = t * 2.0;
        Rgb {
            r: channel(100.0 + r2 * 155.0),
            g: channel(180.0 + r2 * 75.0),
            b: 80,
        }
    } else {
        let r2 = (t - 0.5) * 2.0;
        Rgb {
            r: 255,
            g: channel(255.0 - r2 * 100.0),
            b: channel(80.0 - r2 * 80.0),
        }
    }
}

/// Fixed display rectangle for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Hand-placed region rectangles, keyed by display name
static GEOMETRY: Lazy<HashMap<&'static str, TileGeometry>> = Lazy::new(|| {
    HashMap::from([
        ("North Scotland", TileGeometry { x: 200, y: 30, width: 180, height: 120 }),
        ("South Scotland", TileGeometry { x: 200, y: 150, width: 180, height: 100 }),
        ("North West England", TileGeometry { x: 180, y: 280, width: 120, height: 100 }),
        ("North East England", TileGeometry { x: 320, y: 250, width: 100, height: 100 }),
        ("South Yorkshire", TileGeometry { x: 300, y: 350, width: 100, height: 80 }),
        ("North Wales, Merseyside and Cheshire", TileGeometry { x: 150, y: 360, width: 130, height: 80 }),
        ("South Wales", TileGeometry { x: 150, y: 440, width: 100, height: 80 }),
        ("West Midlands", TileGeometry { x: 240, y: 430, width: 90, height: 90 }),
        ("East Midlands", TileGeometry { x: 330, y: 430, width: 90, height: 90 }),
        ("East England", TileGeometry { x: 380, y: 490, width: 100, height: 100 }),
        ("South West England", TileGeometry { x: 180, y: 540, width: 120, height: 100 }),
        ("South England", TileGeometry { x: 280, y: 590, width: 100, height: 70 }),
        ("London", TileGeometry { x: 340, y: 560, width: 70, height: 50 }),
        ("South East England", TileGeometry { x: 380, y: 590, width: 100, height: 70 }),
    ])
});

/// Lookup the display rectangle for a region name
pub fn geometry_of(region: &str) -> Option<TileGeometry> {
    GEOMETRY.get(region).copied()
}

/// One colored, labeled tile ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTile {
    /// Region display name (also the click-selection key)
    pub region: String,
    #[serde(flatten)]
    pub geometry: TileGeometry,
    /// CSS color string, e.g. `rgb(255, 255, 80)`
    pub color: String,
    /// Value annotation drawn under the region name
    pub label: String,
}

/// Scale tick values for the legend: observed min, midpoint, max
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    pub min: f64,
    pub mid: f64,
    pub max: f64,
}

/// Complete heatmap layout for one result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayout {
    pub view_box: &'static str,
    pub tiles: Vec<RegionTile>,
    pub legend: Legend,
}

/// Compose the heatmap layout for a set of emission results
///
/// Colors are normalized over the unrounded values of the full result set.
/// A result whose region has no display rectangle is dropped from the tiles
/// but still exists in the tabular results; layout never filters the result
/// set itself. An empty result set yields an empty layout.
pub fn layout(results: &[EmissionResult]) -> HeatmapLayout {
    if results.is_empty() {
        return HeatmapLayout {
            view_box: VIEW_BOX,
            tiles: Vec::new(),
            legend: Legend { min: 0.0, mid: 0.0, max: 0.0 },
        };
    }

    let min = results
        .iter()
        .map(|r| r.annual_co2_kg)
        .fold(f64::INFINITY, f64::min);
    let max = results
        .iter()
        .map(|r| r.annual_co2_kg)
        .fold(f64::NEG_INFINITY, f64::max);

    let tiles = results
        .iter()
        .filter_map(|result| {
            let geometry = geometry_of(&result.region)?;
            Some(RegionTile {
                region: result.region.clone(),
                geometry,
                color: color_for(result.annual_co2_kg, min, max).to_string(),
                label: format!("{:.2} kg", result.rounded_kg()),
            })
        })
        .collect();

    HeatmapLayout {
        view_box: VIEW_BOX,
        tiles,
        legend: Legend {
            min,
            mid: (min + max) / 2.0,
            max,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb = Rgb { r: 100, g: 180, b: 80 };
    const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 80 };
    const RED: Rgb = Rgb { r: 255, g: 155, b: 0 };

    fn result(region: &str, kg: f64) -> EmissionResult {
        EmissionResult {
            region: region.to_string(),
            annual_co2_kg: kg,
        }
    }

    #[test]
    fn test_endpoint_colors_exact() {
        assert_eq!(color_for(10.0, 10.0, 50.0), GREEN);
        assert_eq!(color_for(50.0, 10.0, 50.0), RED);
        assert_eq!(color_for(30.0, 10.0, 50.0), YELLOW);
    }

    #[test]
    fn test_degenerate_range_is_green() {
        // min == max must not divide by zero
        assert_eq!(color_for(42.0, 42.0, 42.0), GREEN);
        assert_eq!(color_for(0.0, 0.0, 0.0), GREEN);
    }

    #[test]
    fn test_out_of_range_values_clamp_to_endpoints() {
        assert_eq!(color_for(-5.0, 0.0, 100.0), GREEN);
        assert_eq!(color_for(500.0, 0.0, 100.0), RED);
    }

    #[test]
    fn test_lower_half_interpolates_green_to_yellow() {
        // t = 0.25 -> r2 = 0.5
        let color = color_for(25.0, 0.0, 100.0);
        assert_eq!(color, Rgb { r: 178, g: 218, b: 80 });
    }

    #[test]
    fn test_upper_half_interpolates_yellow_to_red() {
        // t = 0.75 -> r2 = 0.5
        let color = color_for(75.0, 0.0, 100.0);
        assert_eq!(color, Rgb { r: 255, g: 205, b: 40 });
    }

    #[test]
    fn test_css_display() {
        assert_eq!(GREEN.to_string(), "rgb(100, 180, 80)");
    }

    #[test]
    fn test_layout_scenario_three_regions() {
        // A lowest -> green endpoint, B highest -> red endpoint, C between
        let results = vec![
            result("London", 10.0),
            result("South Wales", 20.0),
            result("East England", 30.0),
        ];
        let layout = layout(&results);

        assert_eq!(layout.tiles.len(), 3);
        assert_eq!(layout.tiles[0].color, GREEN.to_string());
        assert_eq!(layout.tiles[1].color, YELLOW.to_string());
        assert_eq!(layout.tiles[2].color, RED.to_string());

        assert_eq!(layout.legend.min, 10.0);
        assert_eq!(layout.legend.mid, 20.0);
        assert_eq!(layout.legend.max, 30.0);
    }

    #[test]
    fn test_layout_drops_regions_without_geometry() {
        let results = vec![result("London", 10.0), result("Atlantis", 30.0)];
        let layout = layout(&results);

        // Atlantis still participated in normalization but gets no tile
        assert_eq!(layout.tiles.len(), 1);
        assert_eq!(layout.tiles[0].region, "London");
        assert_eq!(layout.legend.max, 30.0);
    }

    #[test]
    fn test_layout_empty_results() {
        let layout = layout(&[]);
        assert!(layout.tiles.is_empty());
        assert_eq!(layout.legend.min, 0.0);
        assert_eq!(layout.legend.max, 0.0);
    }

    #[test]
    fn test_layout_label_uses_display_rounding() {
        let results = vec![result("London", 94.608)];
        let layout = layout(&results);
        assert_eq!(layout.tiles[0].label, "94.61 kg");
    }

    #[test]
    fn test_every_registered_region_has_geometry() {
        for region in crate::regions::all() {
            assert!(
                geometry_of(region.name).is_some(),
                "missing geometry for {}",
                region.name
            );
        }
    }
}
