//! Integration tests for the polygon-vote classifier.

use approx::assert_relative_eq;
use ndarray::{array, Array2, Axis};

use drawn_classifiers::chart::ChartDescription;
use drawn_classifiers::data_handling::Frame;
use drawn_classifiers::error::ModelError;
use drawn_classifiers::models::{PolygonClassifier, PolygonEstimator};

fn features(names: &[&str], values: Array2<f64>) -> Frame {
    Frame::new(names.iter().map(|n| n.to_string()).collect(), values).unwrap()
}

/// One chart, label "pos" on a [0,10] square over (f1, f2).
fn single_class_chart() -> ChartDescription {
    let mut chart = ChartDescription::new("c1", "f1", "f2");
    chart.add_ring("pos", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0]);
    chart
}

/// One chart, "pos" on a [0,10] square and "neg" on a [20,30]x[0,10] square.
fn two_class_chart() -> ChartDescription {
    let mut chart = single_class_chart();
    chart.add_ring("neg", &[20.0, 30.0, 30.0, 20.0], &[0.0, 0.0, 10.0, 10.0]);
    chart
}

// ---------------------------------------------------------------------------
// Probabilities
// ---------------------------------------------------------------------------

#[test]
fn single_class_probability_is_one_for_hits_and_misses() {
    let model = PolygonClassifier::new(vec![single_class_chart()]);
    let x = features(&["f1", "f2"], array![[5.0, 5.0], [50.0, 50.0]]);

    let probs = model.predict_proba(&x).unwrap();
    assert_eq!(probs.shape(), &[2, 1]);
    assert_relative_eq!(probs[[0, 0]], 1.0, epsilon = 1e-12);
    assert_relative_eq!(probs[[1, 0]], 1.0, epsilon = 1e-12);

    let labels = model.predict(&x).unwrap();
    assert_eq!(labels, ["pos", "pos"]);
}

#[test]
fn rows_normalize_to_one() {
    let model = PolygonClassifier::new(vec![two_class_chart()]);
    let x = features(
        &["f1", "f2"],
        array![[5.0, 5.0], [25.0, 5.0], [50.0, 50.0], [0.0, 0.0]],
    );

    let probs = model.predict_proba(&x).unwrap();
    for row_sum in probs.sum_axis(Axis(1)).iter() {
        assert_relative_eq!(*row_sum, 1.0, epsilon = 1e-9);
    }
    for p in probs.iter() {
        assert!(*p > 0.0, "smoothing keeps every entry positive");
    }
}

#[test]
fn hit_class_dominates_the_row() {
    let model = PolygonClassifier::new(vec![two_class_chart()]);
    let x = features(&["f1", "f2"], array![[5.0, 5.0], [25.0, 5.0]]);

    let probs = model.predict_proba(&x).unwrap();
    assert!(probs[[0, 0]] > 0.99, "inside the pos square");
    assert!(probs[[1, 1]] > 0.99, "inside the neg square");

    let labels = model.predict(&x).unwrap();
    assert_eq!(labels, ["pos", "neg"]);
}

#[test]
fn zero_smoothing_yields_nan_for_unvoted_rows() {
    let model = PolygonClassifier::new(vec![two_class_chart()]).with_smoothing(0.0);
    let x = features(&["f1", "f2"], array![[50.0, 50.0]]);

    let probs = model.predict_proba(&x).unwrap();
    assert!(probs[[0, 0]].is_nan());
    assert!(probs[[0, 1]].is_nan());

    // Arg-max over NaNs still resolves to the first class
    assert_eq!(model.predict(&x).unwrap(), ["pos"]);
}

// ---------------------------------------------------------------------------
// Hard labels and ties
// ---------------------------------------------------------------------------

#[test]
fn ties_resolve_to_the_first_class_in_document_order() {
    // Both labels drawn on the same square: any interior point ties.
    let mut chart = ChartDescription::new("c1", "f1", "f2");
    chart.add_ring("first", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0]);
    chart.add_ring("second", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0]);

    let model = PolygonClassifier::new(vec![chart]);
    let x = features(&["f1", "f2"], array![[5.0, 5.0], [50.0, 50.0]]);

    // Tied inside the squares and tied outside them; both go to "first"
    assert_eq!(model.predict(&x).unwrap(), ["first", "first"]);
}

#[test]
fn tie_break_follows_label_order_not_label_name() {
    let mut chart = ChartDescription::new("c1", "f1", "f2");
    chart.add_ring("zeta", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0]);
    chart.add_ring("alpha", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0]);

    let model = PolygonClassifier::new(vec![chart]);
    let x = features(&["f1", "f2"], array![[5.0, 5.0]]);
    assert_eq!(model.predict(&x).unwrap(), ["zeta"]);
}

// ---------------------------------------------------------------------------
// Multi-chart pooling
// ---------------------------------------------------------------------------

#[test]
fn charts_on_different_axis_pairs_pool_votes() {
    let mut second = ChartDescription::new("c2", "f3", "f4");
    second.add_ring("pos", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0]);
    let model = PolygonClassifier::new(vec![single_class_chart(), second]);

    let x = features(
        &["f1", "f2", "f3", "f4"],
        array![
            [5.0, 5.0, 50.0, 50.0], // only the first chart hits
            [5.0, 5.0, 5.0, 5.0],   // both hit
            [50.0, 50.0, 50.0, 50.0] // neither hits
        ],
    );

    let counts = model.hit_counts(&x).unwrap();
    assert_eq!(counts[[0, 0]], 1, "one vote, not two and not zero");
    assert_eq!(counts[[1, 0]], 2);
    assert_eq!(counts[[2, 0]], 0);
}

// ---------------------------------------------------------------------------
// Fit lifecycle
// ---------------------------------------------------------------------------

#[test]
fn predict_derives_fit_state_on_first_use() {
    let model = PolygonClassifier::new(vec![two_class_chart()]);
    assert!(!model.is_fitted());

    let x = features(&["f1", "f2"], array![[5.0, 5.0]]);
    model.predict(&x).unwrap();
    assert!(model.is_fitted());
    assert_eq!(model.classes().unwrap(), ["pos", "neg"]);
}

#[test]
fn refit_disabled_requires_an_explicit_fit() {
    let mut model = PolygonClassifier::new(vec![two_class_chart()]).with_refit(false);
    let x = features(&["f1", "f2"], array![[5.0, 5.0]]);

    assert!(matches!(
        model.predict(&x).unwrap_err(),
        ModelError::NotFitted
    ));
    assert!(matches!(
        model.predict_proba(&x).unwrap_err(),
        ModelError::NotFitted
    ));

    model.fit(&x, None).unwrap();
    assert_eq!(model.predict(&x).unwrap(), ["pos"]);
}

#[test]
fn repeated_fits_are_no_ops() {
    let mut model = PolygonClassifier::new(vec![two_class_chart()]);
    let x = features(&["f1", "f2"], array![[5.0, 5.0]]);

    model.fit(&x, None).unwrap();
    let before = model.classes().unwrap().to_vec();
    model.fit(&x, None).unwrap();
    assert_eq!(model.classes().unwrap(), before.as_slice());
}

#[test]
fn chartless_model_errors_on_use() {
    let model = PolygonClassifier::new(Vec::new());
    let x = features(&["f1", "f2"], array![[5.0, 5.0]]);
    assert!(matches!(
        model.predict(&x).unwrap_err(),
        ModelError::EmptyModel
    ));
}

#[test]
fn missing_feature_column_is_reported_by_name() {
    let model = PolygonClassifier::new(vec![single_class_chart()]);
    let x = features(&["f1", "other"], array![[5.0, 5.0]]);
    match model.predict_proba(&x).unwrap_err() {
        ModelError::FeatureNotFound { feature } => assert_eq!(feature, "f2"),
        other => panic!("expected FeatureNotFound, got {:?}", other),
    }
}

#[test]
fn positional_frames_use_stringified_column_names() {
    let mut chart = ChartDescription::new("c1", "0", "1");
    chart.add_ring("pos", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0]);
    let model = PolygonClassifier::new(vec![chart]);

    let x = Frame::from_array(array![[5.0, 5.0], [50.0, 50.0]]);
    let counts = model.hit_counts(&x).unwrap();
    assert_eq!(counts[[0, 0]], 1);
    assert_eq!(counts[[1, 0]], 0);
}
