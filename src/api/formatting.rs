//! Footprint output formatting
//!
//! Renders a [`Footprint`] as human-readable text, a GeoJSON polygon feature
//! for map layers, or CSV rows for logging.

use crate::algorithms::projection::Footprint;
use crate::core::GeoPoint;
use crate::validation::error::FootprintResult;
use serde_json::{json, Value};

/// Corner labels in footprint order
pub const CORNER_NAMES: [&str; 4] = ["bottom_left", "bottom_right", "top_right", "top_left"];

/// Human-readable text formatter
pub struct TextFormatter {
    /// Single-line output
    pub compact: bool,
    /// Decimal places for coordinates
    pub precision: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { compact: false, precision: 7 }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true, ..Self::default() }
    }

    fn point(&self, point: &Option<GeoPoint>) -> String {
        match point {
            Some(p) => format!("{:.*}, {:.*}", self.precision, p.lat, self.precision, p.lon),
            None => "unresolved".to_string(),
        }
    }

    pub fn format(&self, footprint: &Footprint) -> String {
        if self.compact {
            let corners: Vec<String> = footprint
                .corners
                .iter()
                .map(|c| format!("({})", self.point(c)))
                .collect();
            return format!("Footprint [{}]", corners.join(" "));
        }

        let mut output = String::new();
        output.push_str("Footprint:\n");
        if let Some(timestamp) = footprint.timestamp {
            output.push_str(&format!("  Timestamp:    {:.3} s\n", timestamp));
        }
        output.push_str(&format!("  Origin:       {}\n", self.point(&Some(footprint.origin))));
        for (name, corner) in CORNER_NAMES.iter().zip(footprint.corners.iter()) {
            output.push_str(&format!("  {:<13} {}\n", format!("{}:", name), self.point(corner)));
        }
        output
    }
}

/// GeoJSON formatter
#[derive(Default)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// GeoJSON `Feature` for the footprint.
    ///
    /// The polygon ring is closed and uses `[lon, lat]` order. Geometry is
    /// `null` when fewer than three corners resolved.
    pub fn to_geojson(&self, footprint: &Footprint) -> Value {
        let resolved = footprint.resolved();
        let geometry = if resolved.len() >= 3 {
            let mut ring: Vec<[f64; 2]> = resolved.iter().map(|p| [p.lon, p.lat]).collect();
            ring.push(ring[0]);
            json!({ "type": "Polygon", "coordinates": [ring] })
        } else {
            Value::Null
        };

        json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "timestamp": footprint.timestamp,
                "origin": [footprint.origin.lon, footprint.origin.lat],
                "missing": footprint
                    .missing_corners()
                    .iter()
                    .map(|&i| CORNER_NAMES[i])
                    .collect::<Vec<_>>(),
            }
        })
    }

    pub fn format_json(&self, footprint: &Footprint) -> FootprintResult<String> {
        let value = self.to_geojson(footprint);
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

/// CSV formatter, one row per corner
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "timestamp,corner,latitude,longitude".to_string()
    }

    pub fn format_csv(&self, footprint: &Footprint) -> String {
        let timestamp = footprint.timestamp.map(|t| format!("{:.3}", t)).unwrap_or_default();

        let mut lines = Vec::with_capacity(5);
        if self.include_header {
            lines.push(self.header());
        }
        for (name, corner) in CORNER_NAMES.iter().zip(footprint.corners.iter()) {
            let (lat, lon) = match corner {
                Some(p) => (format!("{:.9}", p.lat), format!("{:.9}", p.lon)),
                None => (String::new(), String::new()),
            };
            lines.push(format!("{},{},{},{}", timestamp, name, lat, lon));
        }
        lines.join("\n")
    }
}
