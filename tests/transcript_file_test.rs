//! End-to-end game written to a transcript file.

use std::fs;

use draw_number::{
    ConfigurationBuilder, DrawNumber, DrawNumberApp, DrawNumberView, PrintStreamView,
    TranscriptFormat,
};
use tempfile::TempDir;

#[test]
fn test_transcript_file_records_whole_game() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logger.txt");
    let config = ConfigurationBuilder::new()
        .set_min(0)
        .set_max(100)
        .set_attempts(2)
        .build();
    let engine = DrawNumber::with_secret(config, 50).expect("Valid secret");
    let view = PrintStreamView::create(&path, TranscriptFormat::Text).expect("Create transcript");
    let views: Vec<Box<dyn DrawNumberView>> = vec![Box::new(view)];

    let mut app = DrawNumberApp::with_engine(engine, views);
    app.run("10\nabc\n200\n90\n".as_bytes()).expect("In-memory input");
    drop(app);

    let text = fs::read_to_string(&path).expect("Read transcript");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "New game: range 0..=100, 2 attempts",
            "Your number is too small, attempts left: 1",
            "Incorrect number, try again",
            "Incorrect number, try again",
            "Your number is too big. You lost!",
        ]
    );
}

#[test]
fn test_json_transcript_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logger.jsonl");
    let config = ConfigurationBuilder::new().set_attempts(3).build();
    let engine = DrawNumber::with_secret(config, 7).expect("Valid secret");
    let view = PrintStreamView::create(&path, TranscriptFormat::Json).expect("Create transcript");
    let views: Vec<Box<dyn DrawNumberView>> = vec![Box::new(view)];

    let mut app = DrawNumberApp::with_engine(engine, views);
    app.new_attempt(7);
    drop(app);

    let text = fs::read_to_string(&path).expect("Read transcript");
    let last: serde_json::Value =
        serde_json::from_str(text.lines().last().expect("At least one line")).expect("JSON line");
    assert_eq!(last["event"], "result");
    assert_eq!(last["result"]["comparison"], "equal");
    assert_eq!(last["result"]["remaining_attempts"], 2);
}
