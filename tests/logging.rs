// tests/logging.rs
use log::{Level, LevelFilter, Log, Metadata, Record};
use lsystem_turtle::{Alphabet, TurtleInterpreter};
use std::sync::Mutex;

struct Recorder(Mutex<Vec<String>>);

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.0.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder(Mutex::new(Vec::new()));

#[test]
fn test_summary_counts_characters_not_bytes() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    // Three characters, six bytes in UTF-8.
    TurtleInterpreter::default()
        .interpret("éF€", &Alphabet::standard(0.4))
        .unwrap();

    let messages = RECORDER.0.lock().unwrap();
    let summary = messages
        .iter()
        .find(|m| m.starts_with("interpreted"))
        .expect("summary line logged");
    assert!(
        summary.starts_with("interpreted 3 characters into 1 segments"),
        "got {summary}"
    );
}
