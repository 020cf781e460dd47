// Dispatcher behaviour with injected mock engines

use image::{GrayImage, Luma};

use duo::engine::mock::{LoadCounter, MockDigitLoader, MockSentimentLoader};
use duo::engine::Provenance;
use duo::models::{Dispatcher, ImageModel, TextModel};
use duo::{Category, LoadStatus, ModelError, Prediction};

fn dispatcher_with_counters() -> (Dispatcher, LoadCounter, LoadCounter) {
    let text_loads = LoadCounter::new();
    let digit_loads = LoadCounter::new();

    let dispatcher = Dispatcher::new(vec![
        TextModel::new(Box::new(MockSentimentLoader::new(text_loads.clone()))).into(),
        ImageModel::new(Box::new(MockDigitLoader::new(digit_loads.clone(), Provenance::Trained))).into(),
    ]);

    (dispatcher, text_loads, digit_loads)
}

#[test]
fn test_unknown_names_select_not_available() {
    let (mut dispatcher, _, _) = dispatcher_with_counters();

    for name in ["", "   ", "bert", "Sentiment Analyser", "digits!", "MNIST"] {
        let info = dispatcher.select(name);
        assert!(!info.is_available(), "'{}' should not resolve", name);
        assert_eq!(info.name, "N/A");
        assert_eq!(info.description, "N/A");
        assert_eq!(info.category_label(), "N/A");
    }
    assert!(dispatcher.selected().is_none());
}

#[test]
fn test_predict_before_load_for_every_model() {
    let (mut dispatcher, text_loads, digit_loads) = dispatcher_with_counters();

    let err = dispatcher.run("sentiment", Category::Text, "I love this").unwrap_err();
    assert!(matches!(err, ModelError::NotLoaded { .. }));

    let err = dispatcher.run("digits", Category::Vision, "seven.png").unwrap_err();
    assert!(matches!(err, ModelError::NotLoaded { .. }));

    // No lazy loading
    assert_eq!(text_loads.count(), 0);
    assert_eq!(digit_loads.count(), 0);
}

#[test]
fn test_mismatch_never_reaches_predict() {
    let (mut dispatcher, _, _) = dispatcher_with_counters();

    // Unloaded: predict would have answered NotLoaded
    let err = dispatcher.run("sentiment", Category::Vision, "seven.png").unwrap_err();
    assert!(matches!(
        err,
        ModelError::CategoryMismatch { expected: Category::Text, got: Category::Vision, .. }
    ));

    // Loaded with empty payload: predict would have answered EmptyInput
    dispatcher.load("digits").unwrap();
    let err = dispatcher.run("digits", Category::Text, "").unwrap_err();
    assert!(matches!(
        err,
        ModelError::CategoryMismatch { expected: Category::Vision, got: Category::Text, .. }
    ));
}

#[test]
fn test_sentiment_positive() {
    let (mut dispatcher, _, _) = dispatcher_with_counters();
    assert_eq!(dispatcher.load("Sentiment Analyzer").unwrap(), LoadStatus::Loaded);

    let prediction = dispatcher.run("sentiment", Category::Text, "I love this").unwrap();
    assert_eq!(prediction.label(), "POSITIVE");
    assert!((0.0..=1.0).contains(&prediction.score()));

    let text = prediction.to_string();
    assert!(text.starts_with("Prediction: POSITIVE (Score: "));
    let score = text.trim_start_matches("Prediction: POSITIVE (Score: ").trim_end_matches(')');
    assert_eq!(score.len(), 4, "score should have two decimals: {}", score);
}

#[test]
fn test_unreadable_image_after_load() {
    let (mut dispatcher, _, _) = dispatcher_with_counters();
    dispatcher.load("digits").unwrap();

    let err = dispatcher.run("digits", Category::Vision, "missing/eight.jpg").unwrap_err();
    assert!(matches!(err, ModelError::FileDecode { .. }));
    assert!(err.to_string().contains("eight.jpg"));
}

#[test]
fn test_repeat_load_does_not_reinitialize() {
    let (mut dispatcher, text_loads, digit_loads) = dispatcher_with_counters();

    assert_eq!(dispatcher.load("sentiment").unwrap(), LoadStatus::Loaded);
    assert_eq!(dispatcher.load("sentiment").unwrap(), LoadStatus::AlreadyLoaded);
    assert_eq!(dispatcher.load("sentiment").unwrap(), LoadStatus::AlreadyLoaded);
    assert_eq!(text_loads.count(), 1);

    assert_eq!(dispatcher.load("digits").unwrap(), LoadStatus::Trained);
    assert_eq!(dispatcher.load("digits").unwrap(), LoadStatus::AlreadyLoaded);
    assert_eq!(digit_loads.count(), 1);
}

#[test]
fn test_digit_from_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");
    GrayImage::from_pixel(56, 56, Luma([0])).save(&path).unwrap();

    let (mut dispatcher, _, _) = dispatcher_with_counters();
    dispatcher.load("digits").unwrap();

    let prediction = dispatcher
        .run("digits", Category::Vision, path.to_str().unwrap())
        .unwrap();
    assert_eq!(prediction, Prediction::Digit { digit: 0, confidence: 0.9 });
}

#[test]
fn test_current_follows_last_successful_load() {
    let sentiment_loads = LoadCounter::new();
    let mut dispatcher = Dispatcher::new(vec![
        TextModel::new(Box::new(MockSentimentLoader::failing(sentiment_loads, "no tokenizer"))).into(),
        ImageModel::new(Box::new(MockDigitLoader::default())).into(),
    ]);

    dispatcher.load("digits").unwrap();
    assert!(matches!(dispatcher.load("sentiment"), Err(ModelError::LoadFailed { .. })));
    assert_eq!(dispatcher.current().map(|i| i.id), Some("digits".to_string()));
}

#[test]
fn test_predict_after_failed_load_reports_reason() {
    let mut dispatcher = Dispatcher::new(vec![
        TextModel::new(Box::new(MockSentimentLoader::failing(LoadCounter::new(), "no tokenizer"))).into(),
        ImageModel::new(Box::new(MockDigitLoader::default())).into(),
    ]);
    assert!(dispatcher.load("sentiment").is_err());

    let err = dispatcher.run("sentiment", Category::Text, "I love this").unwrap_err();
    match &err {
        ModelError::NotLoaded { last_error, .. } => assert_eq!(last_error.as_deref(), Some("no tokenizer")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().ends_with("Last load failed: no tokenizer"));

    let info = dispatcher.info("sentiment").unwrap();
    assert_eq!(info.last_error.as_deref(), Some("no tokenizer"));
    assert!(!info.loaded);
}

#[cfg(unix)]
#[test]
fn test_image_path_is_not_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(" blank.png ");
    GrayImage::from_pixel(28, 28, Luma([0])).save_with_format(&path, image::ImageFormat::Png).unwrap();

    let (mut dispatcher, _, _) = dispatcher_with_counters();
    dispatcher.load("digits").unwrap();

    let prediction = dispatcher
        .run("digits", Category::Vision, path.to_str().unwrap())
        .unwrap();
    assert_eq!(prediction, Prediction::Digit { digit: 0, confidence: 0.9 });

    let err = dispatcher.run("digits", Category::Vision, " \t ").unwrap_err();
    assert!(matches!(err, ModelError::EmptyInput { category: Category::Vision }));
}
