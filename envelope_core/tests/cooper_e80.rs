use approx::{assert_abs_diff_eq, assert_relative_eq};
use envelope_core::calculations::{envelope, moment_profile, shear_profile, EvaluationPoint};
use envelope_core::{AxleTrain, DynamicFactors, MovingLoadAnalysis, PositionSweep};

#[test]
fn midspan_envelope_of_100_ft_span() {
    let analysis = MovingLoadAnalysis::new(100.0, 1.0).expect("valid span and increment");
    let result = analysis
        .envelope(50.0, DynamicFactors::default())
        .expect("mid-span envelope");

    assert_relative_eq!(result.moment.max_value, 12876.0, epsilon = 1e-6);
    assert_eq!(result.moment.position_ft, 19.0);
    assert!(result.moment.position_ft >= -100.0);
    assert!(result.moment.position_ft <= analysis.train().total_length_ft());

    assert_relative_eq!(result.shear.max_value, 151.36, epsilon = 1e-6);
    assert_eq!(result.shear.position_ft, -43.0);
}

#[test]
fn moment_rises_toward_midspan_then_falls() {
    let analysis = MovingLoadAnalysis::new(100.0, 1.0).expect("valid span and increment");
    let f = DynamicFactors::default();
    let at = |x: f64| analysis.max_moment(x, f).expect("point inside span").max_value;

    assert!(at(10.0) < at(25.0));
    assert!(at(25.0) < at(50.0));
    assert!(at(75.0) < at(50.0));
    assert!(at(90.0) < at(75.0));
}

#[test]
fn short_span_extension_and_envelope() {
    let train = AxleTrain::build_extended(10.0).expect("valid span");
    assert_eq!(train.appended_axles(), 10);
    assert_eq!(train.extension_length_ft(), 10.0);

    let sweep = PositionSweep::for_train(&train, 1.0).expect("valid increment");
    assert_eq!(sweep.len(), 130);

    let result = envelope(10.0, 5.0, &train, sweep.positions(), DynamicFactors::default())
        .expect("mid-span envelope");
    // A single 80 kip driver at mid-span: PL/4 = 200 kip-ft
    assert_relative_eq!(result.moment.max_value, 200.0, epsilon = 1e-9);
}

#[test]
fn quarter_point_profiles() {
    let train = AxleTrain::build_extended(100.0).expect("valid span");
    let sweep = PositionSweep::for_train(&train, 1.0).expect("valid increment");
    let f = DynamicFactors::default();

    let moments = moment_profile(100.0, 4, &train, sweep.positions(), f).expect("profile");
    let xs: Vec<f64> = moments.iter().map(|p| p.x_ft).collect();
    assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

    let mid = moments.points[2].max_value;
    assert_abs_diff_eq!(moments.points[0].max_value, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(moments.points[4].max_value, 0.0, epsilon = 1e-9);
    assert!(moments.points[1].max_value < mid);
    assert!(moments.points[3].max_value < mid);

    let shears = shear_profile(100.0, 4, &train, sweep.positions(), f).expect("profile");
    assert_eq!(shears.len(), 5);
    // End shear governs over mid-span shear
    assert!(shears.points[0].max_value > shears.points[2].max_value);
    assert!(shears.points[4].max_value > shears.points[2].max_value);
}

#[test]
fn impact_factor_of_minus_one_is_rejected() {
    let analysis = MovingLoadAnalysis::new(50.0, 1.0).expect("valid span and increment");
    let error = analysis
        .max_moment(25.0, DynamicFactors::new(-1.0, 1.0))
        .expect_err("impact of -1 cancels the load");
    assert_eq!(error.error_code(), "INVALID_PARAMETER");
    assert_eq!(error.field(), Some("impact_factor"));
}

#[test]
fn zero_divisions_are_rejected() {
    let analysis = MovingLoadAnalysis::new(50.0, 1.0).expect("valid span and increment");
    let error = analysis
        .moment_profile(0, DynamicFactors::default())
        .expect_err("n = 0 divides by zero");
    assert_eq!(error.error_code(), "INVALID_PARAMETER");
    assert!(analysis.shear_profile(0, DynamicFactors::default()).is_err());
}

#[test]
fn invalid_spans_and_increments_are_rejected() {
    assert!(MovingLoadAnalysis::new(0.0, 1.0).is_err());
    assert!(MovingLoadAnalysis::new(-20.0, 1.0).is_err());
    assert!(MovingLoadAnalysis::new(20.0, 0.0).is_err());
    assert!(MovingLoadAnalysis::new(20.0, -0.5).is_err());
}

#[test]
fn span_fraction_points_resolve_before_evaluation() {
    let analysis = MovingLoadAnalysis::new(100.0, 1.0).expect("valid span and increment");
    let f = DynamicFactors::default();
    let x = EvaluationPoint::SpanFraction(0.5).resolve(analysis.span_ft());
    assert_eq!(
        analysis.max_moment(x, f).expect("mid-span"),
        analysis.max_moment(50.0, f).expect("mid-span")
    );
}

#[test]
fn results_are_deterministic() {
    let analysis = MovingLoadAnalysis::new(64.0, 0.5).expect("valid span and increment");
    let f = DynamicFactors::new(0.4, 0.75);
    let first = analysis.shear_profile(8, f).expect("profile");
    let second = analysis.shear_profile(8, f).expect("profile");
    assert_eq!(first, second);
}
