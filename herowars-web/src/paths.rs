//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "herowars";
const APPLICATION: &str = "herowars-web";

/// Name of the log file written by the current run.
const LATEST_LOG: &str = "latest.log";

/// Archived run logs are named `run-<start time>-<nn>.log`.
const ARCHIVE_PREFIX: &str = "run-";
const ARCHIVE_STAMP: &str = "%Y%m%d-%H%M%S";

/// Maximum number of archived run logs to keep.
const MAX_OLD_LOGS: usize = 25;

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/herowars-web` or `~/.config/herowars-web`
/// - macOS: `~/Library/Application Support/dev.herowars.herowars-web`
/// - Windows: `C:\Users\<User>\AppData\Roaming\herowars\herowars-web\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, which holds the logs.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Outcome of rotating the log directory at startup.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Rotation {
    /// Where the previous run's log was moved.
    pub archived: Option<PathBuf>,
    /// Number of archives deleted to stay within the limit.
    pub pruned: usize,
}

/// Archive the previous run's log and prune old archives.
///
/// Runs before the logger exists, so the caller reports the outcome.
pub fn rotate_logs() -> Rotation {
    match cache_dir() {
        Some(dir) => rotate_logs_in(&dir, Local::now()),
        None => Rotation::default(),
    }
}

fn rotate_logs_in(dir: &Path, now: DateTime<Local>) -> Rotation {
    let latest = dir.join(LATEST_LOG);
    let archived = if latest.is_file() {
        let target = archive_path(dir, now);
        fs::rename(&latest, &target).ok().map(|()| target)
    } else {
        None
    };
    Rotation {
        archived,
        pruned: prune_archives(dir),
    }
}

/// First unused archive name for a run started at `now`.
fn archive_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format(ARCHIVE_STAMP);
    let mut seq = 0;
    loop {
        let path = dir.join(format!("{ARCHIVE_PREFIX}{stamp}-{seq:02}.log"));
        if !path.exists() {
            return path;
        }
        seq += 1;
    }
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}

/// Delete the oldest archives beyond `MAX_OLD_LOGS`, returning how many went.
fn prune_archives(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else { return 0 };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| is_archive(path))
        .collect();
    // Names carry the start time, so name order is age order
    archives.sort();

    let excess = archives.len().saturating_sub(MAX_OLD_LOGS);
    let mut pruned = 0;
    for path in &archives[..excess] {
        if fs::remove_file(path).is_ok() {
            pruned += 1;
        }
    }
    pruned
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("herowars-web-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn start_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap()
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch_dir("archive");
        fs::write(dir.join(LATEST_LOG), "previous run").unwrap();

        let rotation = rotate_logs_in(&dir, start_time());
        let archived = dir.join("run-20260301-123005-00.log");
        assert_eq!(rotation.archived, Some(archived.clone()));
        assert_eq!(rotation.pruned, 0);
        assert!(!dir.join(LATEST_LOG).exists());
        assert_eq!(fs::read_to_string(archived).unwrap(), "previous run");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rotate_same_second_gets_next_sequence() {
        let dir = scratch_dir("sequence");
        fs::write(dir.join(LATEST_LOG), "first").unwrap();
        rotate_logs_in(&dir, start_time());
        fs::write(dir.join(LATEST_LOG), "second").unwrap();

        let rotation = rotate_logs_in(&dir, start_time());
        assert_eq!(rotation.archived, Some(dir.join("run-20260301-123005-01.log")));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rotate_without_previous_log() {
        let dir = scratch_dir("empty");
        assert_eq!(rotate_logs_in(&dir, start_time()), Rotation::default());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prune_keeps_newest_archives() {
        let dir = scratch_dir("prune");
        for second in 0..MAX_OLD_LOGS + 2 {
            let name = format!("run-20260301-1200{second:02}-00.log");
            fs::write(dir.join(name), "").unwrap();
        }
        fs::write(dir.join("notes.log"), "").unwrap();

        assert_eq!(prune_archives(&dir), 2);
        assert!(!dir.join("run-20260301-120000-00.log").exists());
        assert!(!dir.join("run-20260301-120001-00.log").exists());
        assert!(dir.join("run-20260301-120002-00.log").exists());
        assert!(dir.join("notes.log").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
