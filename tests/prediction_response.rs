use pl_prep::response::{ConfidenceLevel, DEFAULT_CLASSES, format_probabilities, summarize};

#[test]
fn summary_serializes_for_api_clients() {
    let summary = summarize(&[0.12, 0.18, 0.7], &DEFAULT_CLASSES).unwrap();
    assert_eq!(summary.confidence, ConfidenceLevel::High);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["predicted"], "home_win");
    assert_eq!(json["confidence"], "High");
    assert_eq!(json["probabilities"]["draw"], 0.18);

    let keys = json["probabilities"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(keys.len(), 3);
}

#[test]
fn model_class_order_is_preserved() {
    let classes = vec!["Home Win".to_string(), "Draw".to_string(), "Away Win".to_string()];
    let out = format_probabilities(&[0.5, 0.3, 0.2], &classes).unwrap();
    let keys = out.iter().map(|(k, _)| k).collect::<Vec<_>>();
    assert_eq!(keys, ["home_win", "draw", "away_win"]);
    assert_eq!(
        serde_json::to_string(&out).unwrap(),
        r#"{"home_win":0.5,"draw":0.3,"away_win":0.2}"#
    );
}

#[test]
fn empty_prediction_is_low_confidence() {
    let empty: [&str; 0] = [];
    let summary = summarize(&[], &empty).unwrap();
    assert!(summary.probabilities.is_empty());
    assert_eq!(summary.predicted, None);
    assert_eq!(summary.confidence, ConfidenceLevel::Low);
}
