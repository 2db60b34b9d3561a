//! DXF encoder
//!
//! Emits a minimal R12-style ASCII DXF stream: one `SECTION`/`ENTITIES`
//! block containing two closed `POLYLINE` entities. The top view (top arc
//! forward, bottom arc reversed) lands on layer `TOP_VIEW`; the side
//! trapezoid lands on layer `SIDE_VIEW`, shifted right by twice the bottom
//! radius so the two views do not overlap in CAD software.
//!
//! Only group codes 0/8/10/20/66/70 are used. Coordinates are written at
//! full precision with shortest-roundtrip float formatting.

use conekit_core::{ConeParams, Point2};
use conekit_pattern::compute_pattern;
use tracing::debug;

const TOP_LAYER: &str = "TOP_VIEW";
const SIDE_LAYER: &str = "SIDE_VIEW";

/// Generate the DXF artifact for a cone's flat patterns.
pub fn generate_dxf(params: &ConeParams) -> String {
    let points = compute_pattern(params);
    let mut lines: Vec<String> = vec![
        "0".into(),
        "SECTION".into(),
        "2".into(),
        "ENTITIES".into(),
    ];

    push_polyline_header(&mut lines, TOP_LAYER);
    for point in points.top_view_outline() {
        push_vertex(&mut lines, TOP_LAYER, point);
    }
    lines.push("SEQEND".into());

    push_polyline_header(&mut lines, SIDE_LAYER);
    let side_offset = 2.0 * params.bottom_radius;
    for point in points.side {
        push_vertex(
            &mut lines,
            SIDE_LAYER,
            Point2::new(point.x + side_offset, point.y),
        );
    }
    lines.push("SEQEND".into());

    lines.push("0".into());
    lines.push("ENDSEC".into());
    lines.push("0".into());
    lines.push("EOF".into());

    debug!(lines = lines.len(), "generated DXF stream");
    lines.join("\n")
}

fn push_polyline_header(lines: &mut Vec<String>, layer: &str) {
    lines.push("0".into());
    lines.push("POLYLINE".into());
    lines.push("8".into());
    lines.push(layer.into());
    // 66: vertices follow; 70: closed polyline.
    lines.push("66".into());
    lines.push("1".into());
    lines.push("70".into());
    lines.push("1".into());
    lines.push("0".into());
}

fn push_vertex(lines: &mut Vec<String>, layer: &str, point: Point2) {
    lines.push("VERTEX".into());
    lines.push("8".into());
    lines.push(layer.into());
    lines.push("10".into());
    lines.push(format!("{}", point.x));
    lines.push("20".into());
    lines.push(format!("{}", point.y));
    lines.push("0".into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use conekit_pattern::DEFAULT_SEGMENTS;

    #[test]
    fn test_stream_structure() {
        let dxf = generate_dxf(&ConeParams::default());
        let lines: Vec<&str> = dxf.lines().collect();

        assert_eq!(&lines[..4], &["0", "SECTION", "2", "ENTITIES"]);
        assert!(dxf.ends_with("0\nENDSEC\n0\nEOF"));
        assert_eq!(lines.iter().filter(|&&l| l == "POLYLINE").count(), 2);
        assert_eq!(lines.iter().filter(|&&l| l == "SEQEND").count(), 2);

        // Top view outline carries both arcs; side view the 4 trapezoid corners.
        let vertices = lines.iter().filter(|&&l| l == "VERTEX").count();
        assert_eq!(vertices, 2 * (DEFAULT_SEGMENTS + 1) + 4);
    }

    #[test]
    fn test_layers_present() {
        let dxf = generate_dxf(&ConeParams::default());
        assert!(dxf.contains("TOP_VIEW"));
        assert!(dxf.contains("SIDE_VIEW"));
    }

    #[test]
    fn test_side_view_offset() {
        let params = ConeParams::default();
        let dxf = generate_dxf(&params);
        let lines: Vec<&str> = dxf.lines().collect();

        // First side vertex is (-bottom_radius + 2*bottom_radius, height/2).
        let side_start = lines
            .iter()
            .position(|l| *l == "SIDE_VIEW")
            .expect("side layer");
        let vertex_at = lines[side_start..]
            .iter()
            .position(|l| *l == "VERTEX")
            .expect("side vertex")
            + side_start;
        assert_eq!(lines[vertex_at + 3], "10");
        let x: f64 = lines[vertex_at + 4].parse().unwrap();
        assert!((x - params.bottom_radius).abs() < 1e-12);
        let y: f64 = lines[vertex_at + 6].parse().unwrap();
        assert!((y - params.height / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic_output() {
        let params = ConeParams::default();
        assert_eq!(generate_dxf(&params), generate_dxf(&params));
    }
}
