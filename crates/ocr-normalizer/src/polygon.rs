//! Polygon normalization across the analysis engine's wire encodings.

use serde_json::Value;
use shared_types::Point;

/// Normalize a polygon value into a point list.
///
/// Accepts a flat numeric sequence `[x1, y1, x2, y2, ...]`, a sequence of
/// `{x, y}` objects, or a sequence of `[x, y]` pairs. Entries fitting none
/// of these are skipped individually — a partial polygon beats none at all.
pub fn normalize_polygon(polygon: &Value) -> Vec<Point> {
    let entries = match polygon.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Vec::new(),
    };

    // Flat array [x1, y1, x2, y2, ...]
    if entries[0].is_number() {
        return entries
            .chunks(2)
            .filter_map(|pair| match pair {
                [x, y] => Some(Point {
                    x: x.as_f64()?,
                    y: y.as_f64()?,
                }),
                _ => None,
            })
            .collect();
    }

    entries.iter().filter_map(point_from_entry).collect()
}

fn point_from_entry(entry: &Value) -> Option<Point> {
    match entry {
        Value::Object(map) => Some(Point {
            x: map.get("x")?.as_f64()?,
            y: map.get("y")?.as_f64()?,
        }),
        Value::Array(pair) if pair.len() >= 2 => Some(Point {
            x: pair[0].as_f64()?,
            y: pair[1].as_f64()?,
        }),
        _ => None,
    }
}
