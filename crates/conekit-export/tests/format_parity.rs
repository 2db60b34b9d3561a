// Cross-format geometric parity: all three encoders must derive from the
// same pattern point set, so the extents implied by each artifact agree.

use conekit_core::{ConeParams, Unit};
use conekit_export::{generate_coordinates, generate_dxf, generate_eps};
use conekit_pattern::compute_pattern;

fn fixture() -> ConeParams {
    ConeParams {
        top_radius: 30.0,
        bottom_radius: 75.0,
        height: 120.0,
        unit: Unit::Millimeters,
        top_angle: 240.0,
        bottom_angle: 240.0,
        auto_close: false,
    }
}

/// Collect (x, y) pairs from the DXF stream for one layer.
fn dxf_vertices(dxf: &str, layer: &str) -> Vec<(f64, f64)> {
    let lines: Vec<&str> = dxf.lines().collect();
    let mut vertices = Vec::new();
    let mut current_layer = String::new();
    let mut i = 0;
    while i < lines.len() {
        match lines[i] {
            "8" => {
                current_layer = lines[i + 1].to_string();
                i += 2;
            }
            "10" if current_layer == layer => {
                let x: f64 = lines[i + 1].parse().unwrap();
                assert_eq!(lines[i + 2], "20");
                let y: f64 = lines[i + 3].parse().unwrap();
                vertices.push((x, y));
                i += 4;
            }
            _ => i += 1,
        }
    }
    vertices
}

/// Collect (x, y) pairs from every `lineto` in the EPS path data.
fn eps_linetos(eps: &str) -> Vec<(f64, f64)> {
    eps.lines()
        .filter(|l| l.ends_with(" lineto"))
        .map(|l| {
            let fields: Vec<&str> = l.split_whitespace().collect();
            (fields[0].parse().unwrap(), fields[1].parse().unwrap())
        })
        .collect()
}

fn max_abs(points: &[(f64, f64)]) -> (f64, f64) {
    points.iter().fold((0.0_f64, 0.0_f64), |(mx, my), (x, y)| {
        (mx.max(x.abs()), my.max(y.abs()))
    })
}

#[test]
fn dxf_and_eps_top_view_extents_match() {
    let params = fixture();
    let dxf = generate_dxf(&params);
    let eps = generate_eps(&params);

    let dxf_top = dxf_vertices(&dxf, "TOP_VIEW");
    let points = compute_pattern(&params);
    let outline_len = points.top.len() + points.bottom.len();
    assert_eq!(dxf_top.len(), outline_len);

    // The EPS draws the top outline first, then the 4 side corners.
    let linetos = eps_linetos(&eps);
    assert_eq!(linetos.len(), outline_len + 4);
    let eps_top = &linetos[..outline_len];

    let (dx, dy) = max_abs(&dxf_top);
    let (ex, ey) = max_abs(eps_top);
    assert!((dx - ex).abs() < 1e-9);
    assert!((dy - ey).abs() < 1e-9);

    // And both agree with the solver's own extents over the top view.
    let solver_max_x = points
        .top
        .iter()
        .chain(points.bottom.iter())
        .map(|p| p.x.abs())
        .fold(0.0_f64, f64::max);
    assert!((dx - solver_max_x).abs() < 1e-9);
}

#[test]
fn coordinate_text_matches_dxf_top_arc() {
    let params = fixture();
    let dxf = generate_dxf(&params);
    let text = generate_coordinates(&params);

    let dxf_top = dxf_vertices(&dxf, "TOP_VIEW");
    let points = compute_pattern(&params);

    // The DXF top-view polyline starts with the top arc in forward order;
    // the text lines carry the same points rounded to 3 decimals.
    let text_top: Vec<(f64, f64)> = text
        .lines()
        .filter(|l| l.starts_with("TOP_"))
        .map(|l| {
            let coords = l.split(": ").nth(1).unwrap();
            let mut parts = coords.split(',');
            (
                parts.next().unwrap().parse().unwrap(),
                parts.next().unwrap().parse().unwrap(),
            )
        })
        .collect();

    assert_eq!(text_top.len(), points.top.len());
    for (i, (tx, ty)) in text_top.iter().enumerate() {
        assert!((tx - dxf_top[i].0).abs() < 5e-4, "x mismatch at {}", i);
        assert!((ty - dxf_top[i].1).abs() < 5e-4, "y mismatch at {}", i);
    }
}

#[test]
fn side_view_offset_only_in_dxf() {
    let params = fixture();
    let dxf = generate_dxf(&params);
    let eps = generate_eps(&params);
    let points = compute_pattern(&params);

    let dxf_side = dxf_vertices(&dxf, "SIDE_VIEW");
    let linetos = eps_linetos(&eps);
    let eps_side = &linetos[linetos.len() - 4..];

    for i in 0..4 {
        // DXF shifts the side view right by 2 * bottom_radius; EPS positions
        // it with a translate instead and keeps raw coordinates.
        assert!(
            (dxf_side[i].0 - (points.side[i].x + 2.0 * params.bottom_radius)).abs() < 1e-9,
            "dxf x at {}",
            i
        );
        assert!((eps_side[i].0 - points.side[i].x).abs() < 1e-9, "eps x at {}", i);
        assert!((dxf_side[i].1 - eps_side[i].1).abs() < 1e-9, "y at {}", i);
    }
}
