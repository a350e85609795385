use super::common::*;
use crate::screening::confidence::{ConfidenceBand, ConfidenceError, UniformConfidence};
use crate::screening::domain::RiskLevel;
use crate::screening::evaluation::{
    classify, tier_for, AnalyzerVariant, RiskEngine, HIGH_THRESHOLD, MEDIUM_THRESHOLD,
    SIMULATION_BANDS, WEIGHTED_BANDS,
};

#[test]
fn thresholds_belong_to_the_upper_tier() {
    assert_eq!(tier_for(0.0), RiskLevel::Low);
    assert_eq!(tier_for(0.299_999), RiskLevel::Low);
    assert_eq!(tier_for(MEDIUM_THRESHOLD), RiskLevel::Medium);
    assert_eq!(tier_for(0.599_999), RiskLevel::Medium);
    assert_eq!(tier_for(HIGH_THRESHOLD), RiskLevel::High);
    assert_eq!(tier_for(1.0), RiskLevel::High);
    assert_eq!(tier_for(1.4), RiskLevel::High);
}

#[test]
fn tiers_never_decrease_as_scores_grow() {
    let mut previous = tier_for(0.0);
    for step in 1..=1_000 {
        let current = tier_for(step as f64 / 1_000.0);
        assert!(current >= previous, "tier dropped at step {step}");
        previous = current;
    }
}

#[test]
fn classify_draws_from_the_band_of_the_assigned_tier() {
    let source = RecordingConfidence::default();

    let low = classify(0.1, &WEIGHTED_BANDS, &source).expect("draw succeeds");
    let medium = classify(0.45, &WEIGHTED_BANDS, &source).expect("draw succeeds");
    let high = classify(0.9, &SIMULATION_BANDS, &source).expect("draw succeeds");

    assert_eq!(low, (RiskLevel::Low, 85));
    assert_eq!(medium, (RiskLevel::Medium, 70));
    assert_eq!(high, (RiskLevel::High, 75));
    assert_eq!(
        source.draws(),
        vec![
            ConfidenceBand::new(85, 10),
            ConfidenceBand::new(70, 15),
            ConfidenceBand::new(75, 20),
        ]
    );
}

#[test]
fn classify_passes_pinned_values_through() {
    let (level, confidence) =
        classify(0.7, &WEIGHTED_BANDS, &PinnedConfidence(93)).expect("draw succeeds");
    assert_eq!(level, RiskLevel::High);
    assert_eq!(confidence, 93);
}

#[test]
fn classify_surfaces_source_failures() {
    let err = classify(0.5, &WEIGHTED_BANDS, &FailingConfidence).expect_err("source is down");
    assert!(matches!(err, ConfidenceError::Unavailable(_)));
}

#[test]
fn documented_bands_match_each_variant() {
    assert_eq!(WEIGHTED_BANDS.low, ConfidenceBand::new(85, 10));
    assert_eq!(WEIGHTED_BANDS.medium, ConfidenceBand::new(70, 15));
    assert_eq!(WEIGHTED_BANDS.high, ConfidenceBand::new(80, 15));
    assert_eq!(SIMULATION_BANDS.low, ConfidenceBand::new(80, 15));
    assert_eq!(SIMULATION_BANDS.medium, ConfidenceBand::new(70, 20));
    assert_eq!(SIMULATION_BANDS.high, ConfidenceBand::new(75, 20));
}

#[test]
fn uniform_confidence_stays_within_tier_bands() {
    let cases = [
        input("parent", &[], false),
        input("adult", &["Fatigue", "Vertiges ou étourdissements"], false),
        input("teenager", &["Pâleur de la peau", "Ongles cassants", "Essoufflement"], true),
    ];

    for variant in [AnalyzerVariant::Full, AnalyzerVariant::Simulation] {
        let engine = RiskEngine::new(variant);
        for case in &cases {
            for _ in 0..200 {
                let result = engine
                    .evaluate(case, &UniformConfidence)
                    .expect("uniform source draws");
                let band = variant.bands().for_level(result.risk_level);
                assert!(
                    band.contains(result.confidence),
                    "{variant} drew {} outside {band:?}",
                    result.confidence
                );
            }
        }
    }
}

#[test]
fn reference_cases_land_in_documented_tiers() {
    let engine = RiskEngine::new(AnalyzerVariant::Full);
    let adult = engine
        .evaluate(
            &input("adult", &["Fatigue", "Vertiges ou étourdissements"], false),
            &UniformConfidence,
        )
        .expect("evaluates");
    assert_eq!(adult.risk_level, RiskLevel::Medium);
    assert!((70..85).contains(&adult.confidence));

    let simulation = RiskEngine::new(AnalyzerVariant::Simulation);
    let teenager = simulation
        .evaluate(&input("teenager", &["a", "b", "c"], false), &UniformConfidence)
        .expect("evaluates");
    assert_eq!(teenager.risk_level, RiskLevel::High);
    assert!((75..95).contains(&teenager.confidence));
}
