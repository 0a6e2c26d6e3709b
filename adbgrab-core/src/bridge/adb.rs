//! src/bridge/adb.rs
//! ============================================================================
//! # AdbBridge: The Real Device Bridge
//!
//! Thin wrapper over the `adb` executable. Listing uses one `adb shell
//! ls -lA` invocation per navigation and parses the long-format output with
//! best-effort size extraction; pulling inherits stdio so adb's own progress
//! display reaches the terminal untouched.

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::{info, warn};

use crate::bridge::runner::DeviceBridge;
use crate::error::AppError;
use crate::fs::entry::Entry;
use crate::model::nav::DevicePath;

pub struct AdbBridge {
    adb: String,
}

impl AdbBridge {
    pub fn new(adb: impl Into<String>) -> Self {
        Self { adb: adb.into() }
    }

    fn run_captured(&self, args: &[&str]) -> Result<Output, AppError> {
        Command::new(&self.adb)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => AppError::Startup(format!(
                    "adb executable '{}' not found; install Android platform-tools and add it to PATH",
                    self.adb
                )),
                _ => AppError::Io(e),
            })
    }
}

impl DeviceBridge for AdbBridge {
    fn probe(&self) -> Result<(), AppError> {
        let output: Output = self.run_captured(&["devices"])?;
        if !output.status.success() {
            return Err(AppError::Bridge {
                cmd: format!("{} devices", self.adb),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let attached: usize = count_attached_devices(&stdout);
        if attached == 0 {
            return Err(AppError::Startup(
                "no Android device connected or authorized; enable USB debugging and retry"
                    .to_string(),
            ));
        }

        info!("adb bridge ready, {attached} device(s) attached");
        Ok(())
    }

    fn list_dir(&self, path: &DevicePath) -> Result<Vec<Entry>, AppError> {
        let shell_cmd: String = format!("ls -lA {}", shell_quote(path.as_str()));
        let output: Output = self.run_captured(&["shell", &shell_cmd])?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let reason = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(AppError::listing_failed(path.as_str(), reason));
        }

        // Older adb versions report shell failures on stdout with exit 0.
        for marker in ["No such file or directory", "Permission denied", "Not a directory"] {
            if stdout.contains(marker) || stderr.contains(marker) {
                return Err(AppError::listing_failed(path.as_str(), marker));
            }
        }

        let mut entries: Vec<Entry> = Vec::new();
        for line in stdout.lines() {
            match parse_ls_line(line) {
                Some(entry) => entries.push(entry),
                None => {
                    if !line.trim().is_empty() && !line.starts_with("total ") {
                        warn!("skipping unparsable ls line: {line:?}");
                    }
                }
            }
        }
        Ok(entries)
    }

    fn pull(&self, src: &DevicePath, dest_dir: &Path) -> Result<(), AppError> {
        let dest_file = dest_dir.join(src.file_name());
        info!("adb pull {} -> {}", src, dest_file.display());

        // Inherit stdio: adb renders its own transfer progress.
        let status = Command::new(&self.adb)
            .arg("pull")
            .arg(src.as_str())
            .arg(&dest_file)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::pull_failed(src.as_str(), e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::pull_failed(
                src.as_str(),
                format!("adb pull exited with {status}"),
            ))
        }
    }
}

/// Count attached devices in `adb devices` output.
/// The header line is skipped; `unauthorized`/`offline` states don't count.
fn count_attached_devices(stdout: &str) -> usize {
    stdout
        .lines()
        .skip(1)
        .filter(|line| {
            let mut cols = line.split_whitespace();
            matches!((cols.next(), cols.next()), (Some(_), Some("device")))
        })
        .count()
}

/// Single-quote `s` for the device-side shell, escaping embedded quotes.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Parse one long-format `ls -lA` line into an [`Entry`].
///
/// Toybox layout: `perms links owner group size date time name...`.
/// The name is taken as the raw remainder of the line so internal spacing
/// survives; symlink targets (` -> target`) are stripped. Returns `None`
/// for the `total` header and anything malformed.
fn parse_ls_line(line: &str) -> Option<Entry> {
    if line.starts_with("total ") {
        return None;
    }

    let (fields, name_part) = split_fields(line, 7)?;
    let perms: &str = fields[0];
    let kind: char = perms.chars().next()?;
    if !matches!(kind, 'd' | '-' | 'l' | 'c' | 'b' | 'p' | 's') {
        return None;
    }

    let is_dir: bool = kind == 'd';
    let is_symlink: bool = kind == 'l';

    let name: &str = if is_symlink {
        name_part.split(" -> ").next().unwrap_or(name_part)
    } else {
        name_part
    };
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }

    let size: Option<u64> = if is_dir {
        None
    } else {
        fields[4].parse::<u64>().ok()
    };

    Some(Entry {
        name: name.to_string(),
        is_dir,
        size,
    })
}

/// Split off the first `count` whitespace-delimited fields and return them
/// with the untouched remainder of the line.
fn split_fields(line: &str, count: usize) -> Option<(Vec<&str>, &str)> {
    let mut fields: Vec<&str> = Vec::with_capacity(count);
    let mut rest: &str = line;
    for _ in 0..count {
        rest = rest.trim_start();
        let end: usize = rest.find(char::is_whitespace)?;
        fields.push(&rest[..end]);
        rest = &rest[end..];
    }
    let rest: &str = rest.trim_start();
    if rest.is_empty() {
        None
    } else {
        Some((fields, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directory_line() {
        let entry =
            parse_ls_line("drwxrwx--x 4 root sdcard_rw 4096 2024-03-01 10:22 DCIM").unwrap();
        assert_eq!(entry.name, "DCIM");
        assert!(entry.is_dir);
        assert_eq!(entry.size, None);
    }

    #[test]
    fn parses_file_line_with_internal_spaces() {
        let entry =
            parse_ls_line("-rw-rw---- 1 root sdcard_rw 1048576 2024-03-01 10:23 IMG  0001 (1).jpg")
                .unwrap();
        assert_eq!(entry.name, "IMG  0001 (1).jpg");
        assert!(!entry.is_dir);
        assert_eq!(entry.size, Some(1_048_576));
    }

    #[test]
    fn strips_symlink_target() {
        let entry =
            parse_ls_line("lrwxrwxrwx 1 root root 21 2024-03-01 10:22 sdcard -> /storage/self")
                .unwrap();
        assert_eq!(entry.name, "sdcard");
        assert!(!entry.is_dir);
    }

    #[test]
    fn rejects_total_and_malformed_lines() {
        assert!(parse_ls_line("total 128").is_none());
        assert!(parse_ls_line("").is_none());
        assert!(parse_ls_line("ls: /x: No such file or directory").is_none());
        assert!(parse_ls_line("drwx").is_none());
    }

    #[test]
    fn unparsable_size_is_best_effort_none() {
        let entry =
            parse_ls_line("-rw-rw---- 1 root sdcard_rw ? 2024-03-01 10:23 weird.bin").unwrap();
        assert_eq!(entry.size, None);
        assert_eq!(entry.name, "weird.bin");
    }

    #[test]
    fn counts_only_attached_devices() {
        let out = "List of devices attached\n\
                   emulator-5554\tdevice\n\
                   0A1B2C3D\tunauthorized\n\
                   9Z8Y7X6W\toffline\n\n";
        assert_eq!(count_attached_devices(out), 1);
        assert_eq!(count_attached_devices("List of devices attached\n\n"), 0);
    }

    #[test]
    fn shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote("/sdcard/My Files"), "'/sdcard/My Files'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }
}
