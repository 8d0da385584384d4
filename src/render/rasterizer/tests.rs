//! Unit tests for triangle rasterization

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use proptest::prelude::*;

use super::*;
use crate::colors::{ChannelMode, Color};
use crate::math::matrix::Matrix;
use crate::render::FrameBuffer;

/// Surface that remembers every write.
#[derive(Default)]
struct Recorder {
    pixels: BTreeMap<(i32, i32), Color>,
    writes: usize,
}

impl Surface for Recorder {
    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.writes += 1;
        self.pixels.insert((x, y), color);
    }
}

/// Owns the vectors a borrowing [`Triangle`] points at.
struct Fixture {
    vertices: [Matrix; 3],
    colors: [Matrix; 3],
}

const RED: [f64; 3] = [255.0, 0.0, 0.0];
const GREEN: [f64; 3] = [0.0, 255.0, 0.0];
const BLUE: [f64; 3] = [0.0, 0.0, 255.0];

impl Fixture {
    fn new(points: [(f64, f64); 3], colors: [[f64; 3]; 3]) -> Self {
        Self {
            vertices: points.map(|(x, y)| Matrix::column(&[x, y])),
            colors: colors.map(|c| Matrix::column(&c)),
        }
    }

    fn rgb(points: [(f64, f64); 3]) -> Self {
        Self::new(points, [RED, GREEN, BLUE])
    }

    fn triangle(&self) -> Triangle<'_> {
        Triangle::new(
            [&self.vertices[0], &self.vertices[1], &self.vertices[2]],
            [&self.colors[0], &self.colors[1], &self.colors[2]],
        )
    }
}

/// Right triangle with legs along both axes, listed clockwise.
fn corner() -> Fixture {
    Fixture::rgb([(0.0, 0.0), (0.0, 4.0), (4.0, 0.0)])
}

fn sample_triangles() -> Vec<Fixture> {
    vec![
        corner(),
        Fixture::rgb([(10.0, 2.0), (3.0, 20.0), (25.0, 14.0)]),
        // thin sliver where the span drifts faster than it widens
        Fixture::rgb([(0.0, 0.0), (40.0, 12.0), (41.0, 11.0)]),
        // flat top
        Fixture::rgb([(2.0, 3.0), (12.0, 18.0), (22.0, 3.0)]),
        // flat bottom
        Fixture::rgb([(12.0, 1.0), (2.0, 15.0), (22.0, 15.0)]),
        // fractional and negative coordinates
        Fixture::rgb([(-7.3, -4.6), (-2.2, 9.1), (6.8, -1.4)]),
        // the top vertex is not where the first row's span starts
        Fixture::rgb([(30.5, 0.9), (1.0, 2.0), (31.0, 25.0)]),
    ]
}

fn scan(fixture: &Fixture) -> Recorder {
    let mut out = Recorder::default();
    ScanlineRasterizer::new()
        .fill_triangle(&fixture.triangle(), &mut out, 1.0)
        .unwrap();
    out
}

fn brute(fixture: &Fixture) -> Recorder {
    let mut out = Recorder::default();
    EdgeFunctionRasterizer::new()
        .fill_triangle(&fixture.triangle(), &mut out, 1.0)
        .unwrap();
    out
}

#[test]
fn test_corner_triangle_fills_region() {
    let fixture = corner();
    let out = scan(&fixture);

    // x >= 0, y >= 0, x + y <= 4
    assert_eq!(out.pixels.len(), 15);
    assert_eq!(out.writes, 15);
    for &(x, y) in out.pixels.keys() {
        assert!(x >= 0 && y >= 0 && x + y <= 4, "({x}, {y}) outside");
    }
}

#[test]
fn test_corner_triangle_vertex_colors_exact() {
    let out = scan(&corner());
    assert_eq!(out.pixels[&(0, 0)], Color::rgb(255, 0, 0));
    assert_eq!(out.pixels[&(0, 4)], Color::rgb(0, 255, 0));
    assert_eq!(out.pixels[&(4, 0)], Color::rgb(0, 0, 255));
}

#[test]
fn test_corner_triangle_interpolates_interior() {
    let out = scan(&corner());
    // weights (0.5, 0.25, 0.25)
    assert_eq!(out.pixels[&(1, 1)], Color::rgb(127, 63, 63));
    // on edge B-C, halfway: weights (0, 0.5, 0.5)
    assert_eq!(out.pixels[&(2, 2)], Color::rgb(0, 127, 127));
    assert!(out.pixels.values().all(|c| c.a == 255));
}

#[test]
fn test_returned_count_matches_writes() {
    for fixture in sample_triangles() {
        let mut out = Recorder::default();
        let written = ScanlineRasterizer::new()
            .fill_triangle(&fixture.triangle(), &mut out, 1.0)
            .unwrap();
        assert_eq!(written, out.writes);
        // every pixel is written exactly once
        assert_eq!(out.writes, out.pixels.len());
    }
}

#[test]
fn test_scanline_matches_edge_function() {
    for fixture in sample_triangles() {
        let seeded = scan(&fixture);
        let reference = brute(&fixture);
        assert!(!reference.pixels.is_empty());
        assert_eq!(seeded.pixels, reference.pixels);
    }
}

#[test]
fn test_covered_pixels_stay_in_bounding_box() {
    for fixture in sample_triangles() {
        let setup = TriangleSetup::new(&fixture.triangle()).unwrap();
        for &(x, y) in brute(&fixture).pixels.keys() {
            assert!(setup.bounds.contains(x, y));
        }
    }
}

#[test]
fn test_barycentric_weights_sum_to_one() {
    for fixture in sample_triangles() {
        let setup = TriangleSetup::new(&fixture.triangle()).unwrap();
        for &(x, y) in brute(&fixture).pixels.keys() {
            let edges = setup.edges(Vec2::new(x as f64, y as f64));
            let sum: f64 = setup.barycentric(edges).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_vertices_are_inside_with_unit_weight() {
    let fixture = Fixture::rgb([(3.0, 1.0), (1.0, 9.0), (11.0, 6.0)]);
    let setup = TriangleSetup::new(&fixture.triangle()).unwrap();
    for (i, &p) in setup.points.iter().enumerate() {
        assert!(setup.contains(p));
        let weights = setup.barycentric(setup.edges(p));
        for (j, &w) in weights.iter().enumerate() {
            assert_relative_eq!(w, if i == j { 1.0 } else { 0.0 });
        }
    }

    let out = scan(&fixture);
    assert_eq!(out.pixels[&(3, 1)], Color::rgb(255, 0, 0));
    assert_eq!(out.pixels[&(1, 9)], Color::rgb(0, 255, 0));
    assert_eq!(out.pixels[&(11, 6)], Color::rgb(0, 0, 255));
}

#[test]
fn test_reversed_winding_draws_nothing() {
    for fixture in sample_triangles() {
        let reversed = fixture.triangle().reversed();
        let mut out = Recorder::default();
        let result = ScanlineRasterizer::new().fill_triangle(&reversed, &mut out, 1.0);
        assert!(matches!(result, Err(RasterError::CounterClockwise { area }) if area > 0.0));
        assert_eq!(out.writes, 0);
    }
}

#[test]
fn test_two_row_color_is_rejected() {
    let mut fixture = corner();
    fixture.colors[1] = Matrix::column(&[0.0, 255.0]);

    let mut fb = FrameBuffer::filled(8, 8, Color::rgb(1, 2, 3));
    let before = fb.clone();
    let result = ScanlineRasterizer::new().fill_triangle(&fixture.triangle(), &mut fb, 1.0);

    assert_eq!(
        result,
        Err(RasterError::ColorShape {
            index: 1,
            rows: 2,
            cols: 1
        })
    );
    assert_eq!(fb, before);
}

#[test]
fn test_missing_color_is_rejected() {
    let fixture = corner();
    let triangle = Triangle::with_optional_colors(
        [&fixture.vertices[0], &fixture.vertices[1], &fixture.vertices[2]],
        [Some(&fixture.colors[0]), Some(&fixture.colors[1]), None],
    );
    let mut out = Recorder::default();
    let result = EdgeFunctionRasterizer::new().fill_triangle(&triangle, &mut out, 1.0);
    assert_eq!(result, Err(RasterError::MissingColor { index: 2 }));
    assert_eq!(out.writes, 0);
}

#[test]
fn test_colors_are_checked_before_winding() {
    let mut fixture = corner();
    fixture.colors[0] = Matrix::new(3, 2);
    let reversed = fixture.triangle().reversed();
    assert!(matches!(
        TriangleSetup::new(&reversed),
        Err(RasterError::ColorShape { index: 0, .. })
    ));
}

#[test]
fn test_short_vertex_is_rejected() {
    let mut fixture = corner();
    fixture.vertices[2] = Matrix::column(&[4.0]);
    assert_eq!(
        TriangleSetup::new(&fixture.triangle()),
        Err(RasterError::VertexShape {
            index: 2,
            rows: 1,
            cols: 1
        })
    );
}

#[test]
fn test_extra_vertex_rows_are_ignored() {
    let mut fixture = corner();
    fixture.vertices = [
        Matrix::column(&[0.0, 0.0, 9.0]),
        Matrix::column(&[0.0, 4.0, 9.0]),
        Matrix::column(&[4.0, 0.0, 9.0]),
    ];
    assert_eq!(scan(&fixture).pixels, scan(&corner()).pixels);
}

#[test]
fn test_degenerate_triangles_draw_nothing() {
    let coincident = Fixture::rgb([(5.0, 5.0), (5.0, 5.0), (9.0, 2.0)]);
    let collinear = Fixture::rgb([(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
    let point = Fixture::rgb([(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);

    for fixture in [coincident, collinear, point] {
        let mut out = Recorder::default();
        let result = rasterize_with(&fixture, RasterizerType::Scanline, &mut out);
        assert!(matches!(result, Err(RasterError::Degenerate { .. })));
        assert_eq!(out.writes, 0);
    }
}

#[test]
fn test_non_finite_vertices_are_rejected() {
    let fixture = Fixture::rgb([(0.0, 0.0), (0.0, f64::NAN), (4.0, 0.0)]);
    assert!(matches!(
        TriangleSetup::new(&fixture.triangle()),
        Err(RasterError::Degenerate { .. })
    ));
}

#[test]
fn test_triangle_between_pixels_covers_nothing() {
    let fixture = Fixture::rgb([(0.2, 0.2), (0.3, 0.8), (0.8, 0.3)]);
    let mut out = Recorder::default();
    let written = ScanlineRasterizer::new()
        .fill_triangle(&fixture.triangle(), &mut out, 1.0)
        .unwrap();
    assert_eq!(written, 0);
    assert_eq!(out.writes, 0);
}

#[test]
fn test_negative_coordinates_use_floor() {
    let fixture = Fixture::rgb([(-2.5, -2.5), (-2.5, 2.5), (2.5, -2.5)]);
    let setup = TriangleSetup::new(&fixture.triangle()).unwrap();
    assert_eq!(
        setup.bounds,
        BoundingBox {
            min_x: -3,
            min_y: -3,
            max_x: 3,
            max_y: 3
        }
    );

    let out = scan(&fixture);
    assert!(out.pixels.contains_key(&(-2, -2)));
    assert!(out.pixels.contains_key(&(2, -2)));
    assert!(!out.pixels.contains_key(&(-3, -2)));
    assert_eq!(out.pixels, brute(&fixture).pixels);
}

#[test]
fn test_rasterizing_twice_is_idempotent() {
    let fixture = Fixture::rgb([(10.0, 2.0), (3.0, 20.0), (25.0, 14.0)]);
    let mut fb = FrameBuffer::new(32, 32);
    ScanlineRasterizer::new()
        .fill_triangle(&fixture.triangle(), &mut fb, 0.8)
        .unwrap();
    let once = fb.clone();
    ScanlineRasterizer::new()
        .fill_triangle(&fixture.triangle(), &mut fb, 0.8)
        .unwrap();
    assert_eq!(fb, once);
}

#[test]
fn test_light_factor_in_range() {
    let fixture = corner();
    let mut out = Recorder::default();
    ScanlineRasterizer::new()
        .fill_triangle(&fixture.triangle(), &mut out, 0.5)
        .unwrap();
    assert_eq!(out.pixels[&(0, 0)], Color::rgb(127, 0, 0));
    assert_eq!(out.pixels[&(4, 0)], Color::rgb(0, 0, 127));
}

#[test]
fn test_overbright_wrap_and_saturate() {
    let grey = [200.0, 100.0, 0.0];
    let fixture = Fixture::new([(0.0, 0.0), (0.0, 4.0), (4.0, 0.0)], [grey, grey, grey]);

    let mut wrapped = Recorder::default();
    ScanlineRasterizer::with_channel_mode(ChannelMode::Wrap)
        .fill_triangle(&fixture.triangle(), &mut wrapped, 1.5)
        .unwrap();
    // 300 wraps to 44, 150 is in range
    assert_eq!(wrapped.pixels[&(0, 0)], Color::rgb(44, 150, 0));

    let mut saturated = Recorder::default();
    ScanlineRasterizer::with_channel_mode(ChannelMode::Saturate)
        .fill_triangle(&fixture.triangle(), &mut saturated, 1.5)
        .unwrap();
    assert_eq!(saturated.pixels[&(0, 0)], Color::rgb(255, 150, 0));
}

#[test]
fn test_top_vertex_prefers_first_on_ties() {
    let fixture = Fixture::rgb([(0.0, 0.0), (0.0, 4.0), (4.0, 0.0)]);
    let setup = TriangleSetup::new(&fixture.triangle()).unwrap();
    assert_eq!(setup.top_vertex(), 0);

    let fixture = Fixture::rgb([(0.0, 5.0), (3.0, 9.0), (4.0, 1.0)]);
    let setup = TriangleSetup::new(&fixture.triangle()).unwrap();
    assert_eq!(setup.top_vertex(), 2);
}

#[test]
fn test_dispatcher_switches_algorithms() {
    let config = RasterConfig {
        rasterizer: RasterizerType::EdgeFunction,
        channel_mode: ChannelMode::Saturate,
    };
    let mut dispatcher = RasterizerDispatcher::new(&config);
    assert_eq!(dispatcher.active_type(), RasterizerType::EdgeFunction);

    let fixture = Fixture::rgb([(10.0, 2.0), (3.0, 20.0), (25.0, 14.0)]);
    let mut a = Recorder::default();
    dispatcher.fill_triangle(&fixture.triangle(), &mut a, 1.0).unwrap();

    dispatcher.set_type(RasterizerType::Scanline);
    let mut b = Recorder::default();
    dispatcher.fill_triangle(&fixture.triangle(), &mut b, 1.0).unwrap();

    assert_eq!(a.pixels, b.pixels);
}

#[test]
fn test_rasterize_through_trait_object() {
    let fixture = corner();
    let mut out = Recorder::default();
    let surface: &mut dyn Surface = &mut out;
    let written = crate::render::rasterize(surface, &fixture.triangle(), 1.0).unwrap();
    assert_eq!(written, 15);
}

fn rasterize_with(
    fixture: &Fixture,
    rasterizer: RasterizerType,
    out: &mut Recorder,
) -> Result<usize, RasterError> {
    let config = RasterConfig {
        rasterizer,
        ..RasterConfig::default()
    };
    RasterizerDispatcher::new(&config).fill_triangle(&fixture.triangle(), out, 1.0)
}

fn coordinate() -> impl Strategy<Value = f64> {
    // mix of whole and fractional pixel positions
    prop_oneof![(-30i32..60).prop_map(f64::from), -30.0f64..60.0]
}

proptest! {
    #[test]
    fn prop_scanline_matches_edge_function(
        ax in coordinate(), ay in coordinate(),
        bx in coordinate(), by in coordinate(),
        cx in coordinate(), cy in coordinate(),
        light in 0.0f64..2.0,
    ) {
        let (a, mut b, mut c) = ((ax, ay), (bx, by), (cx, cy));
        let area = edge_function(Vec2::new(a.0, a.1), Vec2::new(b.0, b.1), Vec2::new(c.0, c.1));
        prop_assume!(area != 0.0);
        if area > 0.0 {
            std::mem::swap(&mut b, &mut c);
        }
        let fixture = Fixture::rgb([a, b, c]);

        let mut seeded = Recorder::default();
        let mut reference = Recorder::default();
        let n = ScanlineRasterizer::new()
            .fill_triangle(&fixture.triangle(), &mut seeded, light)
            .unwrap();
        EdgeFunctionRasterizer::new()
            .fill_triangle(&fixture.triangle(), &mut reference, light)
            .unwrap();

        prop_assert_eq!(n, seeded.writes);
        prop_assert_eq!(seeded.writes, seeded.pixels.len());
        prop_assert_eq!(seeded.pixels, reference.pixels);
    }
}
