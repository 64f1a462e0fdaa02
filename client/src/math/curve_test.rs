use super::*;

const E_INV: f64 = 1.0 / std::f64::consts::E;

#[test]
fn origin_is_defined_as_one_for_both_identities() {
    for identity in [Identity::First, Identity::Second] {
        let points = sample_curve(identity, 100);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, 1.0);
    }
}

#[test]
fn sample_count_is_resolution_plus_one() {
    let points = sample_curve(Identity::First, 150);
    assert_eq!(points.len(), 151);
    assert_eq!(points.last().unwrap().x, 1.0);
}

#[test]
fn grid_is_uniform_and_ordered() {
    let points = sample_curve(Identity::Second, 10);
    for pair in points.windows(2) {
        assert!((pair[1].x - pair[0].x - 0.1).abs() < 1e-12);
    }
}

#[test]
fn both_curves_end_at_one() {
    for identity in [Identity::First, Identity::Second] {
        let points = sample_curve(identity, 100);
        assert!((points.last().unwrap().y - 1.0).abs() < 1e-12);
    }
}

#[test]
fn first_identity_peaks_near_one_over_e() {
    // x⁻ˣ has its maximum e^(1/e) at x = 1/e.
    let points = sample_curve(Identity::First, 1000);
    let peak = points
        .iter()
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .unwrap();
    assert!((peak.x - E_INV).abs() < 2e-3);
    assert!((peak.y - E_INV.powf(-E_INV)).abs() < 1e-6);
    assert!(peak.y > 1.44 && peak.y < 1.45);
}

#[test]
fn second_identity_dips_near_one_over_e() {
    // xˣ has its minimum e^(-1/e) at x = 1/e.
    let points = sample_curve(Identity::Second, 1000);
    let dip = points
        .iter()
        .min_by(|a, b| a.y.total_cmp(&b.y))
        .unwrap();
    assert!((dip.x - E_INV).abs() < 2e-3);
    assert!(dip.y > 0.69 && dip.y < 0.70);
}

#[test]
fn curves_are_reciprocal_of_each_other() {
    let first = sample_curve(Identity::First, 50);
    let second = sample_curve(Identity::Second, 50);
    // Away from the defined origin, x⁻ˣ · xˣ = 1.
    for (a, b) in first.iter().zip(&second).skip(1) {
        assert!((a.y * b.y - 1.0).abs() < 1e-12);
    }
}

#[test]
fn zero_resolution_clamps_to_endpoints() {
    let points = sample_curve(Identity::First, 0);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].x, 0.0);
    assert_eq!(points[1].x, 1.0);
}
