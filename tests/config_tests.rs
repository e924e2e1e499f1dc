//! Configuration file loading tests

use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use utilkit::config::KernelConfig;
use utilkit::core::ShufflePolicy;
use utilkit::decorators::MemoKeyPolicy;
use utilkit::error::ErrorCode;
use utilkit::KernelError;

#[test]
fn load_reads_toml_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("utilkit.toml");
    fs::write(
        &path,
        "log_level = \"debug\"\nshuffle_policy = \"uniform\"\n",
    )?;

    let config = KernelConfig::load(&path)?;
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.shuffle_policy, ShufflePolicy::Uniform);
    assert_eq!(config.memo_key, MemoKeyPolicy::Joined);
    Ok(())
}

#[test]
fn missing_file_is_reported_with_path() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.toml");

    let err = KernelConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
    assert!(err.user_message().contains("absent.toml"));
    assert!(std::error::Error::source(&err).is_some());
    Ok(())
}

#[test]
fn invalid_file_keeps_code_and_gains_path() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "memo_key = \"structural\"\nlog_level = \"shout\"\n")?;

    let err = KernelConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    match err {
        KernelError::Config { path: Some(reported), .. } => assert_eq!(reported, path),
        other => panic!("expected a config error with a path, got {other:?}"),
    }
    Ok(())
}

#[test]
fn file_values_then_overrides() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("utilkit.toml");
    fs::write(&path, "memo_key = \"structural\"\n")?;

    let mut config = KernelConfig::load(&path)?;
    config.merge_vars(|name| match name {
        "UTILKIT_MEMO_KEY" => Some("joined".to_string()),
        "UTILKIT_LOG_LEVEL" => Some("error".to_string()),
        _ => None,
    })?;

    assert_eq!(config.memo_key, MemoKeyPolicy::Joined);
    assert_eq!(config.log_level, "error");
    assert_eq!(config.shuffle_policy, ShufflePolicy::RejectIdentity);
    Ok(())
}
