// Host-side tests for curve generation: buffer shape, finiteness, and
// per-family bounding boxes (which catch equation regressions even with
// the declared noise terms in play).

use morpho_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn gen(id: CurveId, count: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(7);
    generate(id, count, &mut rng)
}

#[test]
fn every_family_yields_three_finite_floats_per_particle() {
    for &id in CurveId::ALL.iter() {
        for count in [1usize, 2, 37, 500] {
            let buf = gen(id, count);
            assert_eq!(buf.len(), count * 3, "{id:?} count={count}");
            assert!(
                buf.iter().all(|v| v.is_finite()),
                "{id:?} produced non-finite values"
            );
        }
    }
}

#[test]
fn zero_count_yields_empty_buffer() {
    for &id in CurveId::ALL.iter() {
        assert!(gen(id, 0).is_empty(), "{id:?}");
    }
}

/// Assert every point of `id` fits inside the half-extents `(bx, by, bz)`.
fn assert_bounds(id: CurveId, bx: f32, by: f32, bz: f32) {
    let buf = gen(id, 2000);
    for (i, p) in buf.chunks_exact(3).enumerate() {
        assert!(
            p[0].abs() <= bx && p[1].abs() <= by && p[2].abs() <= bz,
            "{id:?} particle {i} out of bounds: ({}, {}, {})",
            p[0],
            p[1],
            p[2]
        );
    }
}

// Half-extents below are the analytic maxima times the 5% noise headroom
// (scale 150), padded slightly.

#[test]
fn lissajous_bounding_box() {
    // unit amplitudes on x/y, half on z
    assert_bounds(CurveId::Lissajous, 158.0, 158.0, 79.0);
}

#[test]
fn heart_bounding_box() {
    // 16*0.08 = 1.28 wide, 21*0.08 = 1.68 tall, 0.3 thick
    assert_bounds(CurveId::Heart, 202.0, 265.0, 48.0);
}

#[test]
fn butterfly_bounding_box() {
    // |r| <= e + 3, radius scale 0.3
    assert_bounds(CurveId::Butterfly, 275.0, 275.0, 48.0);
}

#[test]
fn archimedean_bounding_box() {
    // r <= 0.1 + 0.05*8pi, z <= 0.1*8pi
    assert_bounds(CurveId::Archimedean, 215.0, 215.0, 400.0);
}

#[test]
fn catenary_bounding_box() {
    // r <= 0.3*cosh(pi/2), |y| <= 0.3*pi
    assert_bounds(CurveId::Catenary, 120.0, 150.0, 120.0);
}

#[test]
fn lemniscate_bounding_box() {
    assert_bounds(CurveId::Lemniscate, 158.0, 80.0, 48.0);
}

#[test]
fn rose_bounding_box() {
    assert_bounds(CurveId::Rose, 158.0, 158.0, 48.0);
}

#[test]
fn torus_knot_bounding_box() {
    // tube radius 0.5 +/- 0.3
    assert_bounds(CurveId::TorusKnot, 127.0, 127.0, 48.0);
}

#[test]
fn lorenz_stays_on_the_attractor() {
    assert_bounds(CurveId::Lorenz, 150.0, 150.0, 150.0);
}

#[test]
fn galaxy_is_a_thin_disc() {
    // unit radius in the plane, vertical scatter <= 0.2 shrinking outward
    assert_bounds(CurveId::Galaxy, 158.0, 158.0, 32.0);
}

#[test]
fn lorenz_first_particle_is_the_initial_condition() {
    // count=1 -> zero integration steps -> transformed (0.1, 0, 0)
    let buf = gen(CurveId::Lorenz, 1);
    let expect_x = 0.1 * 0.03 * CURVE_SCALE; // 0.45
    let expect_z = -25.0 * 0.03 * CURVE_SCALE; // -112.5
    let tol = 1.0 + AXIS_NOISE; // multiplicative noise headroom
    assert!(
        (buf[0] - expect_x).abs() <= expect_x * (tol - 1.0) + 1e-4,
        "x = {}",
        buf[0]
    );
    assert_eq!(buf[1], 0.0, "y starts at exactly zero; jitter scales it");
    assert!(
        (buf[2] - expect_z).abs() <= expect_z.abs() * (tol - 1.0) + 1e-4,
        "z = {}",
        buf[2]
    );
}

#[test]
fn galaxy_radial_distribution_is_area_uniform() {
    // sqrt-of-uniform radial draw: about a quarter of particles inside
    // half the radius
    let buf = gen(CurveId::Galaxy, 4000);
    let half_radius = 0.5 * CURVE_SCALE;
    let inner = buf
        .chunks_exact(3)
        .filter(|p| (p[0] * p[0] + p[1] * p[1]).sqrt() < half_radius)
        .count();
    let fraction = inner as f32 / 4000.0;
    assert!(
        (0.15..=0.35).contains(&fraction),
        "inner-half fraction {fraction}"
    );
}

#[test]
fn curve_ids_cycle_in_order_and_wrap() {
    let mut id = CurveId::Lissajous;
    let mut seen = vec![id];
    for _ in 0..CurveId::ALL.len() {
        id = id.next();
        seen.push(id);
    }
    assert_eq!(seen[CurveId::ALL.len()], seen[0], "wraps back to the start");
    for (i, &expected) in CurveId::ALL.iter().enumerate() {
        assert_eq!(seen[i], expected);
        assert_eq!(CurveId::from_index(i).expect("valid index"), expected);
        assert_eq!(expected.index(), i);
    }
}

#[test]
fn out_of_range_index_is_invalid_argument() {
    let err = CurveId::from_index(CurveId::ALL.len());
    assert!(matches!(err, Err(EngineError::InvalidArgument(_))));
}

#[test]
fn labels_are_distinct_and_nonempty() {
    for (i, a) in CurveId::ALL.iter().enumerate() {
        assert!(!a.label().is_empty());
        for b in CurveId::ALL.iter().skip(i + 1) {
            assert_ne!(a.label(), b.label());
        }
    }
}
