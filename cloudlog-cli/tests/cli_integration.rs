// cloudlog-cli/tests/cli_integration.rs

use clap::Parser;
use cloudlog_cli::{Cli, Commands, PlotArgs, TeeArgs, build_core_config, run_plot, run_tee};
use cloudlog_core::mocks::{CallLog, MockCloudSink, MockNotificationSink, SentNotification};
use cloudlog_core::{ChatTarget, CloudLog, CoreError};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_parse_tee_with_global_options() {
    let cli = Cli::try_parse_from([
        "cloudlog",
        "--root",
        "/tmp/run",
        "--telegram-token",
        "123:abc",
        "--chat-id",
        "-1001234",
        "tee",
        "--sync-every",
        "50",
        "--notify",
        "-m",
        "done",
    ])
    .expect("arguments should parse");

    assert_eq!(cli.root, PathBuf::from("/tmp/run"));
    assert_eq!(cli.chat_id, Some(-1_001_234));
    match cli.command {
        Commands::Tee(args) => {
            assert_eq!(args.sync_every, 50);
            assert!(args.notify);
            assert_eq!(args.message.as_deref(), Some("done"));
        }
        other => panic!("Expected tee command, got {:?}", other),
    }
}

#[test]
fn test_parse_plot_and_defaults() {
    let cli = Cli::try_parse_from(["cloudlog", "plot", "loss.png", "--caption", "loss"])
        .expect("arguments should parse");

    assert_eq!(cli.timeout, cloudlog_core::config::DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(!cli.verbose);
    match cli.command {
        Commands::Plot(args) => {
            assert_eq!(args.image, PathBuf::from("loss.png"));
            assert_eq!(args.caption.as_deref(), Some("loss"));
            assert!(!args.notify);
        }
        other => panic!("Expected plot command, got {:?}", other),
    }
}

#[test]
fn test_plot_requires_image() {
    assert!(Cli::try_parse_from(["cloudlog", "plot"]).is_err());
}

#[test]
fn test_zero_timeout_rejected() {
    assert!(Cli::try_parse_from(["cloudlog", "--timeout", "0", "tee"]).is_err());
}

#[test]
fn test_build_core_config() {
    let cli = Cli::try_parse_from([
        "cloudlog",
        "--root",
        "out",
        "--dropbox-token",
        "sl.abc",
        "--timeout",
        "5",
        "tee",
    ])
    .expect("arguments should parse");

    let config = build_core_config(&cli);
    assert_eq!(config.root_path, PathBuf::from("out"));
    assert_eq!(config.dropbox_token.as_deref(), Some("sl.abc"));
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert!(config.validate().is_ok());
}

#[test]
fn test_build_core_config_missing_chat_id_fails_validation() {
    let cli = Cli::try_parse_from(["cloudlog", "--telegram-token", "123:abc", "tee"])
        .expect("arguments should parse");
    let config = build_core_config(&cli);
    assert!(matches!(config.validate(), Err(CoreError::Config(_))));
}

#[test]
fn test_tee_logs_lines_and_syncs_periodically() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let call_log = CallLog::new();
    let cloud = MockCloudSink::new(call_log.clone());
    let log = CloudLog::new(dir.path(), Some(Box::new(cloud.clone())), None)?;

    let input = Cursor::new("one\ntwo\nthree\nfour\nfive\n");
    let args = TeeArgs {
        sync_every: 2,
        ..Default::default()
    };
    let count = run_tee(&log, input, &args)?;

    assert_eq!(count, 5);
    assert_eq!(
        fs::read_to_string(log.log_file_path())?,
        "one\ntwo\nthree\nfour\nfive\n"
    );

    // After lines 2 and 4, plus the final sync
    let uploads = cloud.get_uploads();
    assert_eq!(uploads.len(), 3);
    assert_eq!(uploads[0].contents, b"one\ntwo\n");
    assert_eq!(uploads[2].contents, b"one\ntwo\nthree\nfour\nfive\n");
    Ok(())
}

#[test]
fn test_tee_notifies_at_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let call_log = CallLog::new();
    let notifier = MockNotificationSink::new(call_log.clone());
    let log = CloudLog::new(
        dir.path(),
        None,
        Some(ChatTarget::new(Box::new(notifier.clone()), 99)),
    )?;

    let args = TeeArgs {
        sync_every: 0,
        notify: true,
        message: Some("finished".to_string()),
    };
    run_tee(&log, Cursor::new("only line"), &args)?;

    let sent = notifier.get_sent_notifications();
    assert_eq!(sent.len(), 2);
    assert!(matches!(&sent[0], SentNotification::Text { text, .. } if text == "finished"));
    assert!(matches!(&sent[1], SentNotification::Document { silent: true, .. }));
    Ok(())
}

#[test]
fn test_tee_empty_input_still_syncs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let call_log = CallLog::new();
    let cloud = MockCloudSink::new(call_log.clone());
    let log = CloudLog::new(dir.path(), Some(Box::new(cloud.clone())), None)?;

    let count = run_tee(&log, Cursor::new(""), &TeeArgs::default())?;
    assert_eq!(count, 0);
    assert_eq!(cloud.get_uploads().len(), 1);
    assert!(cloud.get_uploads()[0].contents.is_empty());
    Ok(())
}

#[test]
fn test_tee_keeps_going_after_invalid_utf8() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let call_log = CallLog::new();
    let cloud = MockCloudSink::new(call_log.clone());
    let log = CloudLog::new(dir.path(), Some(Box::new(cloud.clone())), None)?;

    let input = Cursor::new(&b"ok\nbad \xff\nafter\n"[..]);
    let count = run_tee(&log, input, &TeeArgs::default())?;

    assert_eq!(count, 3);
    assert_eq!(
        fs::read_to_string(log.log_file_path())?,
        "ok\nbad \u{FFFD}\nafter\n"
    );
    assert_eq!(cloud.get_uploads().len(), 1);
    Ok(())
}

#[test]
fn test_tee_strips_crlf_line_endings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log = CloudLog::new(dir.path(), None, None)?;

    let count = run_tee(&log, Cursor::new("a\r\nb\r\nc"), &TeeArgs::default())?;

    assert_eq!(count, 3);
    assert_eq!(fs::read_to_string(log.log_file_path())?, "a\nb\nc\n");
    Ok(())
}

#[test]
fn test_plot_publishes_existing_image() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("accuracy.png");
    fs::write(&image, b"png-bytes")?;

    let root = dir.path().join("logs");
    let call_log = CallLog::new();
    let cloud = MockCloudSink::new(call_log.clone());
    let notifier = MockNotificationSink::new(call_log.clone());
    let log = CloudLog::new(
        &root,
        Some(Box::new(cloud.clone())),
        Some(ChatTarget::new(Box::new(notifier.clone()), 5)),
    )?;

    let args = PlotArgs {
        image,
        notify: true,
        caption: Some("accuracy".to_string()),
    };
    let plot_file = run_plot(&log, &args)?;

    assert_eq!(fs::read(root.join(&plot_file))?, b"png-bytes");
    assert_eq!(cloud.get_uploads()[0].remote_path, format!("/{plot_file}"));
    assert!(matches!(
        &notifier.get_sent_notifications()[0],
        SentNotification::Photo { caption: Some(c), .. } if c == "accuracy"
    ));
    Ok(())
}

#[test]
fn test_plot_missing_image_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log = CloudLog::new(dir.path(), None, None)?;
    let args = PlotArgs {
        image: dir.path().join("nope.png"),
        notify: false,
        caption: None,
    };
    assert!(matches!(run_plot(&log, &args), Err(CoreError::PlotRender(_))));
    Ok(())
}
