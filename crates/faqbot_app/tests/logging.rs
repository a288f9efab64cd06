use std::fs;

use engine_logging::{engine_info, LogDestination};
use faqbot_app::init_logging;
use log::LevelFilter;
use tempfile::TempDir;

#[test]
fn file_destination_installs_logger() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("faqbot.log");

    assert!(init_logging(
        LogDestination::File(path.clone()),
        LevelFilter::Info
    ));
    engine_info!("query dispatched");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Logging to file"));
    assert!(content.contains("query dispatched"));

    // The global logger can only be installed once.
    assert!(!init_logging(LogDestination::Terminal, LevelFilter::Info));
}
