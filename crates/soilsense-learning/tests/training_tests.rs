//! Integration tests for the training and inference pipeline.
//!
//! These run the full path the operator binary drives: raw frame in,
//! cleaned matrix, trained bundle, single-vector predictions out.

use polars::prelude::*;
use pretty_assertions::assert_eq;
use soilsense_learning::{
    LearningError, PredictionService, RandomForest, SoilMeasurements, Trainer, TrainerConfig,
};
use soilsense_processing::DataCleaner;

// ============================================================================
// Helper Functions
// ============================================================================

/// A raw dataset in which pH alone determines the crop: below 5 is rice,
/// 5 and above is wheat. A few measurement entries are missing.
fn ph_ruled_frame() -> DataFrame {
    let rows = 30usize;
    let mut n = Vec::new();
    let mut p = Vec::new();
    let mut k = Vec::new();
    let mut temperature = Vec::new();
    let mut humidity = Vec::new();
    let mut ph = Vec::new();
    let mut rainfall = Vec::new();
    let mut label = Vec::new();

    for i in 0..rows {
        let offset = i as f64;
        // rice row, ph in [3.0, 4.45]
        n.push(Some(15.0 + offset));
        p.push(Some(18.0 + offset * 0.5));
        k.push(if i == 3 { None } else { Some(45.0 + offset) });
        temperature.push(Some(22.0 + offset * 0.1));
        humidity.push(Some(55.0 + offset * 0.5));
        ph.push(Some(3.0 + offset * 0.05));
        rainfall.push(Some(70.0 + offset));
        label.push("rice");

        // wheat row, ph in [5.5, 6.95]
        n.push(Some(16.0 + offset));
        p.push(Some(19.0 + offset * 0.5));
        k.push(Some(46.0 + offset));
        temperature.push(if i == 7 { None } else { Some(21.0 + offset * 0.1) });
        humidity.push(Some(56.0 + offset * 0.5));
        ph.push(Some(5.5 + offset * 0.05));
        rainfall.push(Some(71.0 + offset));
        label.push("wheat");
    }

    df![
        "N" => n,
        "P" => p,
        "K" => k,
        "temperature" => temperature,
        "humidity" => humidity,
        "ph" => ph,
        "rainfall" => rainfall,
        "label" => label,
    ]
    .unwrap()
}

fn default_trainer() -> Trainer {
    Trainer::new(
        TrainerConfig::builder()
            .test_size(0.2)
            .seed(42)
            .n_trees(60)
            .build()
            .unwrap(),
    )
}

fn probe_measurements() -> SoilMeasurements {
    SoilMeasurements {
        nitrogen: 20.0,
        phosphorus: 20.0,
        potassium: 50.0,
        temperature: 25.0,
        humidity: 60.0,
        ph: 0.9,
        rainfall: 80.0,
    }
}

// ============================================================================
// End-to-End Pipeline Tests
// ============================================================================

#[test]
fn test_end_to_end_low_ph_recommends_rice() {
    let cleaned = DataCleaner::clean(ph_ruled_frame()).unwrap();
    let outcome = default_trainer().train_frame(&cleaned.frame).unwrap();

    let crop = outcome.service.predict(&probe_measurements()).unwrap();
    assert_eq!(crop, "rice");
}

#[test]
fn test_end_to_end_high_ph_recommends_wheat() {
    let cleaned = DataCleaner::clean(ph_ruled_frame()).unwrap();
    let outcome = default_trainer().train_frame(&cleaned.frame).unwrap();

    let mut input = probe_measurements();
    input.ph = 6.8;
    let crop = outcome.service.predict(&input).unwrap();
    assert_eq!(crop, "wheat");
}

#[test]
fn test_end_to_end_accuracy_is_a_fraction() {
    let cleaned = DataCleaner::clean(ph_ruled_frame()).unwrap();
    let outcome = default_trainer().train_frame(&cleaned.frame).unwrap();

    assert!((0.0..=1.0).contains(&outcome.report.accuracy));
    assert_eq!(outcome.report.train_rows + outcome.report.test_rows, 60);
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_training_twice_with_same_seed_is_identical() {
    let cleaned = DataCleaner::clean(ph_ruled_frame()).unwrap();

    let first = default_trainer().train_frame(&cleaned.frame).unwrap();
    let second = default_trainer().train_frame(&cleaned.frame).unwrap();

    assert_eq!(first.report.accuracy, second.report.accuracy);
    assert_eq!(first.service.classes(), second.service.classes());

    // Identical bundle contents: every probe resolves identically
    for ph in [0.9, 3.5, 4.4, 5.6, 6.8, 9.0] {
        let mut input = probe_measurements();
        input.ph = ph;
        assert_eq!(
            first.service.predict(&input).unwrap(),
            second.service.predict(&input).unwrap(),
            "diverging prediction at ph {ph}"
        );
    }
}

#[test]
fn test_prediction_is_idempotent() {
    let cleaned = DataCleaner::clean(ph_ruled_frame()).unwrap();
    let outcome = default_trainer().train_frame(&cleaned.frame).unwrap();

    let input = probe_measurements();
    assert_eq!(
        outcome.service.predict(&input).unwrap(),
        outcome.service.predict(&input).unwrap()
    );
}

// ============================================================================
// Boundary Tests
// ============================================================================

#[test]
fn test_predict_with_wrong_feature_count_fails() {
    let cleaned = DataCleaner::clean(ph_ruled_frame()).unwrap();
    let outcome = default_trainer().train_frame(&cleaned.frame).unwrap();

    let six = [20.0, 20.0, 50.0, 25.0, 60.0, 0.9];
    assert!(matches!(
        outcome.service.predict_features(&six),
        Err(LearningError::ShapeMismatch {
            expected: 7,
            actual: 6
        })
    ));

    let eight = [20.0, 20.0, 50.0, 25.0, 60.0, 0.9, 80.0, 1.0];
    assert!(matches!(
        outcome.service.predict_features(&eight),
        Err(LearningError::ShapeMismatch {
            expected: 7,
            actual: 8
        })
    ));
}

#[test]
fn test_train_frame_with_too_few_rows_fails() {
    let df = df![
        "N" => [20.0, 40.0],
        "P" => [20.0, 30.0],
        "K" => [50.0, 45.0],
        "temperature" => [25.0, 22.0],
        "humidity" => [60.0, 70.0],
        "ph" => [6.5, 5.5],
        "rainfall" => [80.0, 120.0],
        "label" => ["rice", "wheat"],
    ]
    .unwrap();

    // 0.2 of 2 rows rounds down to an empty holdout
    let result = default_trainer().train_frame(&df);
    assert!(matches!(
        result,
        Err(LearningError::InsufficientData(_))
    ));
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[test]
fn test_saved_bundle_serves_identically_after_reload() {
    let cleaned = DataCleaner::clean(ph_ruled_frame()).unwrap();
    let outcome = default_trainer().train_frame(&cleaned.frame).unwrap();
    let expected = outcome.service.predict(&probe_measurements()).unwrap();

    let path = std::env::temp_dir().join("soilsense_training_tests_bundle.json");
    outcome.service.save(&path).unwrap();

    let restored = PredictionService::<RandomForest>::load(&path).unwrap();
    assert_eq!(restored.predict(&probe_measurements()).unwrap(), expected);
    assert_eq!(restored.classes(), outcome.service.classes());

    std::fs::remove_file(&path).ok();
}
