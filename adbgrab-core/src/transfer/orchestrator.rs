//! src/transfer/orchestrator.rs
//! ============================================================================
//! # Transfer Orchestrator: Selection Set → Pull Batch
//!
//! Turns the selection set into a sequence of bridge pull invocations, one
//! at a time in selection insertion order so the bridge's native progress
//! output stays legible. Partial-failure tolerant: one failed file never
//! aborts the batch, and there is no rollback.

use std::path::Path;

use tracing::{info, warn};

use crate::bridge::runner::DeviceBridge;
use crate::error::AppError;
use crate::model::nav::DevicePath;

/// Result of one pull invocation.
#[derive(Debug)]
pub struct PullOutcome {
    pub source: DevicePath,
    pub result: Result<(), AppError>,
}

/// Per-file outcomes for one executed batch.
#[derive(Debug, Default)]
pub struct TransferReport {
    pub outcomes: Vec<PullOutcome>,
}

impl TransferReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &DevicePath> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_ok())
            .map(|o| &o.source)
    }

    pub fn failed(&self) -> impl Iterator<Item = &DevicePath> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| &o.source)
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// One-line summary for the status bar.
    pub fn summary_line(&self) -> String {
        if self.failure_count() == 0 {
            format!("Transfer complete: {} file(s) copied", self.success_count())
        } else {
            format!(
                "Transfer finished: {} copied, {} failed (failed files stay selected)",
                self.success_count(),
                self.failure_count()
            )
        }
    }
}

/// Execute one transfer batch into `dest_dir`.
///
/// The terminal must already be handed back to the bridge (cooked mode,
/// main screen): banners and the summary are printed around each pull's
/// native progress stream. Returns `Err` only for batch-level failures
/// (destination not creatable); per-file failures land in the report.
pub fn execute_batch<B: DeviceBridge>(
    bridge: &B,
    sources: &[DevicePath],
    dest_dir: &Path,
) -> Result<TransferReport, AppError> {
    std::fs::create_dir_all(dest_dir)?;

    println!();
    println!("Starting transfer of {} file(s)", sources.len());
    println!("Destination: {}", dest_dir.display());
    println!("{}", "-".repeat(60));

    let mut report = TransferReport::default();
    for source in sources {
        println!();
        println!("Copying: {}", source.file_name());

        let result: Result<(), AppError> = bridge.pull(source, dest_dir);
        match &result {
            Ok(()) => {
                info!("pulled {}", source);
                println!("  ok: {}", source.file_name());
            }
            Err(e) => {
                warn!("pull failed for {}: {e}", source);
                println!("  FAILED: {} ({e})", source.file_name());
            }
        }

        report.outcomes.push(PullOutcome {
            source: source.clone(),
            result,
        });
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("{}", report.summary_line());
    for failed in report.failed() {
        println!("  failed: {failed}");
    }
    println!("{}", "=".repeat(60));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::entry::Entry;
    use std::collections::HashSet;

    /// Scripted bridge: pulls write a marker file, except for paths in the
    /// failure set.
    struct ScriptedBridge {
        failing: HashSet<String>,
    }

    impl ScriptedBridge {
        fn failing_on(paths: &[&str]) -> Self {
            Self {
                failing: paths.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl DeviceBridge for ScriptedBridge {
        fn probe(&self) -> Result<(), AppError> {
            Ok(())
        }

        fn list_dir(&self, _path: &DevicePath) -> Result<Vec<Entry>, AppError> {
            Ok(Vec::new())
        }

        fn pull(&self, src: &DevicePath, dest_dir: &Path) -> Result<(), AppError> {
            if self.failing.contains(src.as_str()) {
                return Err(AppError::pull_failed(src.as_str(), "device I/O error"));
            }
            std::fs::write(dest_dir.join(src.file_name()), b"pulled")?;
            Ok(())
        }
    }

    fn sources(paths: &[&str]) -> Vec<DevicePath> {
        paths.iter().map(|p| DevicePath::new(p)).collect()
    }

    #[test]
    fn partial_failure_continues_and_is_reported() {
        let dest = tempfile::tempdir().unwrap();
        let bridge = ScriptedBridge::failing_on(&["/sdcard/DCIM/a.jpg"]);

        let report = execute_batch(
            &bridge,
            &sources(&["/sdcard/DCIM/a.jpg", "/sdcard/DCIM/b.jpg"]),
            dest.path(),
        )
        .unwrap();

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.failed().map(DevicePath::as_str).collect::<Vec<_>>(),
            ["/sdcard/DCIM/a.jpg"]
        );
        // the surviving file landed at the destination
        assert!(dest.path().join("b.jpg").is_file());
        assert!(!dest.path().join("a.jpg").exists());
    }

    #[test]
    fn outcomes_keep_selection_order() {
        let dest = tempfile::tempdir().unwrap();
        let bridge = ScriptedBridge::failing_on(&[]);
        let batch = sources(&["/s/c.bin", "/s/a.bin", "/s/b.bin"]);

        let report = execute_batch(&bridge, &batch, dest.path()).unwrap();
        let order: Vec<&str> = report
            .outcomes
            .iter()
            .map(|o| o.source.as_str())
            .collect();
        assert_eq!(order, ["/s/c.bin", "/s/a.bin", "/s/b.bin"]);
    }

    #[test]
    fn destination_is_created_before_the_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("new").join("deep");
        let bridge = ScriptedBridge::failing_on(&[]);

        let report = execute_batch(&bridge, &sources(&["/s/x.txt"]), &dest).unwrap();
        assert_eq!(report.failure_count(), 0);
        assert!(dest.join("x.txt").is_file());
    }

    #[test]
    fn summary_line_names_both_counts() {
        let dest = tempfile::tempdir().unwrap();
        let bridge = ScriptedBridge::failing_on(&["/s/bad.bin"]);

        let report =
            execute_batch(&bridge, &sources(&["/s/bad.bin", "/s/good.bin"]), dest.path()).unwrap();
        let line = report.summary_line();
        assert!(line.contains("1 copied"));
        assert!(line.contains("1 failed"));
    }
}
