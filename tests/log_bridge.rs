//! `log` facade bridge.

#![cfg(feature = "log")]

use std::sync::{Arc, Mutex};

use vassert::log::{LogCrateSink, SinkGuard};
use vassert::{vfatal, vinfo, vwarn};

struct RecordingLogger {
    records: Mutex<Vec<(log::Level, String, String)>>,
}

impl log::Log for RecordingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

#[test]
fn test_lines_forwarded_to_log() {
    let logger: &'static RecordingLogger = Box::leak(Box::new(RecordingLogger {
        records: Mutex::new(Vec::new()),
    }));
    log::set_logger(logger).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    {
        let _guard = SinkGuard::install(Arc::new(LogCrateSink));
        vinfo!("hello {}", 1);
        vwarn!("careful");
        vfatal!("gone");
    }

    let records = logger.records.lock().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], (log::Level::Info, "vassert".to_string(), "[INFO] hello 1".to_string()));
    assert_eq!(records[1].0, log::Level::Warn);
    assert_eq!(records[2].0, log::Level::Error);
    assert_eq!(records[2].2, "[FATAL] gone");
}
