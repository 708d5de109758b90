//! Integration tests for the start-up configuration pipeline.
//!
//! These tests exercise the public API of bridge-host end-to-end against a
//! real scratch directory: `ConfigLoader` + `FileDocumentStore` +
//! `DefaultGenerator` + the presenter, with only process exit replaced.

use std::path::PathBuf;
use std::sync::Arc;

use bridge_core::document::fields;
use bridge_core::{BridgeConfig, BroadcastColor};
use bridge_host::application::display_config::config_lines;
use bridge_host::application::{
    ConfigError, ConfigLoader, DocumentStore, GenerateOutcome, LoadOutcome, ProcessExit,
};
use bridge_host::infrastructure::logging::capture::CapturedLog;
use bridge_host::infrastructure::process::mock::RecordingProcessExit;
use bridge_host::infrastructure::storage::file_store::FileDocumentStore;
use bridge_host::infrastructure::storage::paths::ConfigPaths;
use uuid::Uuid;

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new() -> Self {
        Self {
            dir: std::env::temp_dir().join(format!("bridge_it_{}", Uuid::new_v4())),
        }
    }

    fn paths(&self) -> ConfigPaths {
        ConfigPaths::new(&self.dir)
    }

    fn write(&self, text: &str) {
        std::fs::create_dir_all(&self.dir).unwrap();
        std::fs::write(self.paths().file(), text).unwrap();
    }

    fn loader(&self) -> (ConfigLoader, Arc<RecordingProcessExit>) {
        let exit = Arc::new(RecordingProcessExit::new());
        let loader = ConfigLoader::new(
            Arc::new(FileDocumentStore::new(&self.paths())),
            Arc::clone(&exit) as Arc<dyn ProcessExit>,
        );
        (loader, exit)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.dir).ok();
    }
}

fn document(locale: &str, red: &str, debug: bool) -> String {
    format!(
        r#"
[locale]
string = "{locale}"
[bot]
token = "NzkyNzE1NDU0MTk2MDg4ODQy.X-hvzA.secret"
[channel]
id = "734219817234562345"
[owner]
id = "112233445566778899"
[command]
prefix = "."
[relay]
commands = "true"
[remote]
commands = "false"
[authorized]
roles = "Admin Mod Helper"
[game]
status = "on the server"
[topic]
interval = "120"
offline = "Server is down"
[broadcast]
red = "{red}"
green = "128"
blue = "64"
[silence]
broadcasts = "false"
chat = "true"
saves = "true"
[announce]
reconnect = "false"
[join]
prefix = ":arrow_right:"
[leave]
prefix = ":arrow_left:"
[ignore]
chat = "false"
[log]
chat = "true"
[message]
length = "-5"
[debug]
mode = "{debug}"
[author]
format = "[%u]"
[timestamp]
format = "yyyy-MM-dd HH:mm"
[exception]
abort = "true"
"#
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_directory_generates_defaults_then_next_start_loads_them() {
    // Arrange
    let scratch = Scratch::new();
    let (loader, exit) = scratch.loader();

    // Act: first start-up finds nothing.
    let first = loader.load().expect("absent document is recoverable");

    // Assert
    match first {
        LoadOutcome::DefaultsGenerated(GenerateOutcome::Written { path }) => {
            assert_eq!(path, scratch.paths().file());
            assert!(path.is_file(), "default document must exist on disk");
        }
        other => panic!("expected generated defaults, got {other:?}"),
    }
    assert!(exit.statuses().is_empty(), "default abort flag keeps the process alive");

    // Act: the next start-up reads what was generated.
    let second = loader.load().unwrap();

    // Assert
    assert_eq!(second, LoadOutcome::Loaded(BridgeConfig::default()));
}

#[test]
fn test_generated_document_is_commented_utf8() {
    let scratch = Scratch::new();
    let (loader, _exit) = scratch.loader();
    loader.load().unwrap();

    let bytes = std::fs::read(scratch.paths().file()).unwrap();
    let text = String::from_utf8(bytes).expect("document must be UTF-8");

    assert!(text.lines().filter(|l| l.starts_with('#')).count() >= 22);
    assert!(text.contains(":small_blue_diamond:"));
}

#[test]
fn test_load_reads_every_value_from_disk() {
    // Arrange
    let scratch = Scratch::new();
    scratch.write(&document("en-US", "10", false));
    let (loader, _exit) = scratch.loader();

    // Act
    let outcome = loader.load().unwrap();

    // Assert
    let LoadOutcome::Loaded(cfg) = outcome else {
        panic!("expected a loaded configuration");
    };
    assert_eq!(cfg.channel_id, 734_219_817_234_562_345);
    assert_eq!(cfg.owner_id, 112_233_445_566_778_899);
    assert_eq!(cfg.command_prefix, '.');
    assert_eq!(cfg.authorized_role_list(), vec!["Admin", "Mod", "Helper"]);
    assert_eq!(cfg.broadcast_color, BroadcastColor::new(10, 128, 64));
    assert_eq!(cfg.message_length, -5);
    assert!(cfg.abort_on_error);
}

#[test]
fn test_presenter_renders_exactly_the_document_values() {
    let scratch = Scratch::new();
    scratch.write(&document("en-US", "10", false));
    let (loader, _exit) = scratch.loader();

    let LoadOutcome::Loaded(cfg) = loader.load().unwrap() else {
        panic!("expected a loaded configuration");
    };
    let lines = config_lines(&cfg);

    assert_eq!(lines[0], "Locale: en-US");
    assert_eq!(lines[1], "Bot Token: NzkyNzE1NDU0MTk2MDg4ODQy.X-hvzA.secret");
    assert_eq!(lines[2], "Channel ID: 734219817234562345");
    assert_eq!(lines[9], "Topic Interval: 120");
    assert_eq!(lines[11], "Broadcast Color: (10, 128, 64)");
    assert_eq!(lines[20], "Message Length: -5");
    assert_eq!(lines[22], "Author Format: [%u]");
}

#[test]
fn test_comma_locale_does_not_change_integer_parsing() {
    let scratch = Scratch::new();
    scratch.write(&document("de-DE", "10", false));
    let (loader, _exit) = scratch.loader();

    let LoadOutcome::Loaded(cfg) = loader.load().unwrap() else {
        panic!("expected a loaded configuration");
    };

    assert_eq!(cfg.locale.tag(), "de-DE");
    assert_eq!(cfg.channel_id, 734_219_817_234_562_345);
    assert_eq!(cfg.topic_interval, 120);
    assert_eq!(cfg.message_length, -5);
}

#[test]
fn test_out_of_range_red_is_fatal_and_logged() {
    // Arrange
    let scratch = Scratch::new();
    scratch.write(&document("en-US", "300", false));
    let (loader, exit) = scratch.loader();
    let log = CapturedLog::new();

    // Act
    let result = log.record(|| loader.load());

    // Assert
    match result {
        Err(ConfigError::MalformedValue { field, value, .. }) => {
            assert_eq!(field, fields::BROADCAST_RED);
            assert_eq!(value, "300");
        }
        other => panic!("expected MalformedValue, got {other:?}"),
    }
    assert!(log.lines().iter().any(|l| l.contains("ERROR")));
    assert!(exit.statuses().is_empty(), "load errors are returned, not exited on");
    // The broken document is left untouched.
    let on_disk = std::fs::read_to_string(scratch.paths().file()).unwrap();
    assert!(on_disk.contains("red = \"300\""));
}

#[test]
fn test_debug_mode_displays_every_field_in_order() {
    // Arrange
    let scratch = Scratch::new();
    scratch.write(&document("en-US", "10", true));
    let (loader, _exit) = scratch.loader();
    let log = CapturedLog::new();

    // Act
    let outcome = log.record(|| loader.load()).unwrap();

    // Assert
    let LoadOutcome::Loaded(cfg) = outcome else {
        panic!("expected a loaded configuration");
    };
    let expected = config_lines(&cfg);
    assert_eq!(expected.len(), 25);

    let captured = log.lines();
    let displayed: Vec<&String> = captured
        .iter()
        .filter(|l| l.contains("DEBUG") && expected.iter().any(|e| l.ends_with(e.as_str())))
        .collect();
    assert_eq!(displayed.len(), 25);
    for (line, want) in displayed.iter().zip(&expected) {
        assert!(line.ends_with(want.as_str()), "{line} should end with {want}");
    }
    assert!(captured
        .iter()
        .any(|l| l.contains("NzkyNzE1NDU0MTk2MDg4ODQy.X-hvzA.secret")));
}

#[test]
fn test_missing_directory_is_created() {
    let scratch = Scratch::new();
    let nested = ConfigPaths::new(scratch.dir.join("a").join("b"));
    let store = FileDocumentStore::new(&nested);
    let exit = Arc::new(RecordingProcessExit::new());
    let loader = ConfigLoader::new(Arc::new(store.clone()), exit);

    loader.load().unwrap();

    assert!(nested.dir().is_dir());
    assert!(store.location().is_file());
}
