
use option_calc::{cumulative, density, ErfNormal, NormalDistribution};
use test_utils::statrs_cdf;

/// N(x) + N(-x) = 1 for every nonzero x. The negative branch is defined by reflection, so
/// this holds to rounding error.
#[test]
fn test_cumulative_symmetry() {
    let mut x = -12.0;
    while x <= 12.0 {
        if x != 0.0 {
            let sum = cumulative(x) + cumulative(-x);
            assert!((sum - 1.0).abs() < 1e-9, "N({x}) + N({}) = {sum}", -x);
        }
        x += 0.0125;
    }

    for &x in &[1e-12, 1e-6, 0.33267, 3.0, 37.5] {
        assert!((cumulative(x) + cumulative(-x) - 1.0).abs() < 1e-9);
    }
}

/// N(0) is 0.5 up to the approximation error of the polynomial.
#[test]
fn test_cumulative_at_zero() {
    let n0 = cumulative(0.0);
    assert!((n0 - 0.5).abs() < 1e-6, "N(0) = {}", n0);
    assert_eq!(ErfNormal.cumulative(0.0), 0.5);
}

/// The approximation is non-decreasing, including across the reflection at zero.
#[test]
fn test_cumulative_monotonic() {
    let xs: Vec<f64> = (-12_000..=12_000).map(|i| i as f64 / 1000.0).collect();
    let values: Vec<f64> = xs.iter().map(|&x| cumulative(x)).collect();

    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "N decreased between x={} and x={}: {} -> {}",
            xs[i],
            xs[i + 1],
            pair[0],
            pair[1]
        );
    }

    assert!(cumulative(-1e-9) < cumulative(0.0));
}

#[test]
fn test_cumulative_bounds_and_tails() {
    for i in -800..=800 {
        let x = i as f64 / 100.0;
        let v = cumulative(x);
        assert!((0.0..=1.0).contains(&v), "N({}) = {} out of [0, 1]", x, v);
        if x.abs() <= 5.0 {
            assert!(v > 0.0 && v < 1.0, "N({}) = {} not strictly inside", x, v);
        }
    }

    assert!(cumulative(-10.0) < 1e-12);
    assert!(cumulative(10.0) > 1.0 - 1e-12);
    assert!(cumulative(-10.0) >= 0.0);
    assert!(cumulative(10.0) <= 1.0);
}

/// Compare against an independent CDF. The polynomial is good to about 1.2e-5.
#[test]
fn test_cumulative_against_statrs() {
    let mut worst = 0.0_f64;
    let mut worst_x = 0.0;
    for i in -600..=600 {
        let x = i as f64 / 100.0;
        let err = (cumulative(x) - statrs_cdf(x)).abs();
        if err > worst {
            worst = err;
            worst_x = x;
        }
    }
    println!("max |N - N_exact| = {:.3e} at x = {}", worst, worst_x);
    assert!(worst < 1.2e-5);

    // statrs itself is only good to ~1e-11 here (1.36e-11 at x = -1)
    for &x in &[-3.0, -1.0, -0.25, 0.5, 2.0, 4.0] {
        let gap = (ErfNormal.cumulative(x) - statrs_cdf(x)).abs();
        assert!(gap < 1e-10, "erf vs statrs at x = {}: {:.3e}", x, gap);
    }
}

#[test]
fn test_density_integrates_to_cumulative_difference() {
    // Trapezoid on [a, b] against the exact CDF
    let (a, b) = (-1.5, 0.75);
    let steps = 20_000;
    let h = (b - a) / steps as f64;
    let mut integral = 0.5 * (density(a) + density(b));
    for i in 1..steps {
        integral += density(a + i as f64 * h);
    }
    integral *= h;
    assert!((integral - (statrs_cdf(b) - statrs_cdf(a))).abs() < 1e-8);
}
