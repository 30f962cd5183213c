//! Integration tests for chart writing through the public API.
//!
//! These tests verify that:
//! 1. Content normalization and existence policies hold on real disk and in memory
//! 2. Batches continue past failures and report every failing path
//! 3. A custom capability can be injected through the traits
//! 4. Errors carry the path and cause

use chart_writer::*;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

// =============================================================================
// Test Capability
// =============================================================================

/// Wraps a [`MemoryFs`], records every call, and injects failures.
struct RecordingFs {
    inner: MemoryFs,
    calls: Mutex<Vec<String>>,
    deny_stat: Option<PathBuf>,
    fail_write: Option<PathBuf>,
}

impl RecordingFs {
    fn new(inner: MemoryFs) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
            deny_stat: None,
            fail_write: None,
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl FsRead for RecordingFs {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        self.record(format!("stat {}", path.display()));
        if self.deny_stat.as_deref() == Some(path) {
            return Err(FsError::PermissionDenied {
                path: path.to_path_buf(),
                operation: "stat",
            });
        }
        self.inner.metadata(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        self.inner.read(path)
    }
}

impl FsWrite for RecordingFs {
    fn write_file(&self, path: &Path, data: &[u8], perm: Permissions) -> Result<(), FsError> {
        self.record(format!("write {} {:o}", path.display(), perm.mode()));
        if self.fail_write.as_deref() == Some(path) {
            return Err(FsError::Backend("disk full".into()));
        }
        self.inner.write_file(path, data, perm)
    }
}

impl FsDir for RecordingFs {
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        self.record(format!("mkdir {} {:o}", path.display(), perm.mode()));
        self.inner.create_dir_all(path, perm)
    }
}

fn read_native(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

// =============================================================================
// Native Filesystem
// =============================================================================

#[test]
fn native_normalizes_trailing_newline() {
    let tmp = TempDir::new().unwrap();
    let writer = ChartWriter::new(tmp.path(), NativeFs);

    writer
        .write_files(&[
            ChartFile::new("no-newline.yaml", "a: 1"),
            ChartFile::new("newline.yaml", "a: 1\n"),
            ChartFile::new("empty.yaml", ""),
        ])
        .unwrap();

    assert_eq!(read_native(&tmp.path().join("no-newline.yaml")), "a: 1\n");
    assert_eq!(read_native(&tmp.path().join("newline.yaml")), "a: 1\n");
    assert_eq!(read_native(&tmp.path().join("empty.yaml")), "");
}

#[test]
fn native_batch_skip_and_override() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("B"), "old").unwrap();
    let writer = ChartWriter::new(tmp.path(), NativeFs);

    writer
        .write_files(&[
            ChartFile::new("A", "x").with_policy(ExistsPolicy::Override),
            ChartFile::new("B", "y").with_policy(ExistsPolicy::Skip),
        ])
        .unwrap();

    assert_eq!(read_native(&tmp.path().join("A")), "x\n");
    assert_eq!(read_native(&tmp.path().join("B")), "old");
}

#[test]
fn native_override_replaces_existing() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("values.yaml"), "old: true\nextra: 1\n").unwrap();
    let writer = ChartWriter::new(tmp.path(), NativeFs);

    writer
        .write_file(&ChartFile::new("values.yaml", "new: true"))
        .unwrap();
    assert_eq!(read_native(&tmp.path().join("values.yaml")), "new: true\n");
}

#[test]
fn native_creates_missing_directory_chain() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("dist/chart");
    let writer = ChartWriter::new(&root, NativeFs);

    writer
        .write_file(&ChartFile::new("templates/manager/manager.yaml", "kind: Deployment"))
        .unwrap();

    assert!(root.join("templates/manager").is_dir());
    assert_eq!(
        read_native(&root.join("templates/manager/manager.yaml")),
        "kind: Deployment\n"
    );
}

#[cfg(unix)]
#[test]
fn native_applies_fixed_modes() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let writer = ChartWriter::new(tmp.path(), NativeFs);
    writer
        .write_file(&ChartFile::new("templates/a.yaml", "x"))
        .unwrap();

    // umask can only remove bits
    let dir_mode = std::fs::metadata(tmp.path().join("templates"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    let file_mode = std::fs::metadata(tmp.path().join("templates/a.yaml"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(dir_mode & !0o755, 0);
    assert_eq!(file_mode & !0o644, 0);
    assert_ne!(dir_mode & 0o700, 0);
    assert_ne!(file_mode & 0o600, 0);
}

#[test]
fn native_batch_continues_past_invalid_path() {
    let tmp = TempDir::new().unwrap();
    let writer = ChartWriter::new(tmp.path(), NativeFs);

    let err = writer
        .write_files(&[
            ChartFile::new("A", "x"),
            ChartFile::new("/invalid/\0/path", "y"),
        ])
        .unwrap_err();

    assert_eq!(read_native(&tmp.path().join("A")), "x\n");
    assert_eq!(err.len(), 1);
    let failure = &err.failures()[0];
    assert_eq!(failure.path, Path::new("/invalid/\0/path"));
    assert!(err.to_string().contains("unable to write file /invalid/"));
}

#[test]
fn native_repeated_writes_are_idempotent() {
    let tmp = TempDir::new().unwrap();
    let writer = ChartWriter::new(tmp.path(), NativeFs);
    let files = vec![
        ChartFile::new("Chart.yaml", "name: demo"),
        ChartFile::new("templates/svc.yaml", "kind: Service\n"),
    ];

    writer.write_files(&files).unwrap();
    let first: Vec<String> = ["Chart.yaml", "templates/svc.yaml"]
        .iter()
        .map(|p| read_native(&tmp.path().join(p)))
        .collect();

    writer.write_files(&files).unwrap();
    let second: Vec<String> = ["Chart.yaml", "templates/svc.yaml"]
        .iter()
        .map(|p| read_native(&tmp.path().join(p)))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn native_write_onto_directory_fails_with_path() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("templates")).unwrap();
    let writer = ChartWriter::new(tmp.path(), NativeFs);

    let err = writer
        .write_file(&ChartFile::new("templates", "x"))
        .unwrap_err();
    assert!(matches!(err, WriteError::Write { .. }));
    assert_eq!(err.path(), tmp.path().join("templates"));
}

// =============================================================================
// Injected Capability
// =============================================================================

#[test]
fn writer_uses_fixed_modes_through_capability() {
    let fs = RecordingFs::new(MemoryFs::new());
    let writer = ChartWriter::new("/out", &fs);

    writer
        .write_file(&ChartFile::new("templates/a.yaml", "x"))
        .unwrap();

    assert_eq!(
        fs.calls(),
        vec![
            "mkdir /out/templates 755".to_string(),
            "write /out/templates/a.yaml 644".to_string(),
        ]
    );
}

#[test]
fn skip_policy_consults_capability_before_writing() {
    let fs = RecordingFs::new(MemoryFs::new().with_file("/out/values.yaml", "old"));
    let writer = ChartWriter::new("/out", &fs);

    writer
        .write_file(&ChartFile::new("values.yaml", "new").skip_if_exists())
        .unwrap();

    assert_eq!(fs.calls(), vec!["stat /out/values.yaml".to_string()]);
    assert_eq!(fs.read(Path::new("/out/values.yaml")).unwrap(), b"old");
}

#[test]
fn stat_failure_counts_as_existing() {
    let mut fs = RecordingFs::new(MemoryFs::new());
    fs.deny_stat = Some(PathBuf::from("/out/a.yaml"));
    let writer = ChartWriter::new("/out", &fs);

    writer
        .write_files(&[
            ChartFile::new("a.yaml", "skip me").skip_if_exists(),
            ChartFile::new("a.yaml", "override me"),
        ])
        .unwrap();

    // The skip record is left alone, the override record is still written.
    assert_eq!(
        fs.read(Path::new("/out/a.yaml")).unwrap(),
        b"override me\n"
    );
    assert_eq!(
        fs.calls()
            .iter()
            .filter(|c| c.starts_with("write "))
            .count(),
        1
    );
}

#[test]
fn batch_reports_every_failure_in_order() {
    let mut fs = RecordingFs::new(MemoryFs::new().with_file("/out/blocker", ""));
    fs.fail_write = Some(PathBuf::from("/out/full.yaml"));
    let writer = ChartWriter::new("/out", &fs);

    let err = writer
        .write_files(&[
            ChartFile::new("full.yaml", "x"),
            ChartFile::new("ok.yaml", "y"),
            ChartFile::new("blocker/nested.yaml", "z"),
        ])
        .unwrap_err();

    let paths: Vec<&Path> = err.paths().collect();
    assert_eq!(paths, vec![Path::new("full.yaml"), Path::new("blocker/nested.yaml")]);

    let failures = err.failures();
    assert!(matches!(
        &failures[0].source,
        WriteError::Write {
            source: FsError::Backend(msg),
            ..
        } if msg == "disk full"
    ));
    assert!(matches!(
        &failures[1].source,
        WriteError::CreateDir {
            source: FsError::NotADirectory { .. },
            ..
        }
    ));

    assert_eq!(fs.read(Path::new("/out/ok.yaml")).unwrap(), b"y\n");
    let message = err.to_string();
    assert!(message.starts_with("errors writing files: ["));
    assert!(message.contains("full.yaml"));
    assert!(message.contains("blocker/nested.yaml"));
}

#[test]
fn boxed_capability_works() {
    let writer: ChartWriter<Box<dyn Fs>> = ChartWriter::new("/chart", Box::new(MemoryFs::new()));

    writer
        .write_file(&ChartFile::new("Chart.yaml", "name: demo"))
        .unwrap();
    assert!(writer
        .filesystem()
        .is_file(Path::new("/chart/Chart.yaml"))
        .unwrap());
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
#[test]
fn chart_files_deserialize_from_manifest() {
    let manifest = r#"[
        {"path": "Chart.yaml", "content": "name: demo", "policy": "Override"},
        {"path": "values.yaml", "content": "a: 1", "policy": "Skip"},
        {"path": "templates/NOTES.txt", "content": ""}
    ]"#;
    let files: Vec<ChartFile> = serde_json::from_str(manifest).unwrap();

    assert_eq!(files[1].policy, ExistsPolicy::Skip);
    assert_eq!(files[2].policy, ExistsPolicy::Override);

    let fs = MemoryFs::new();
    ChartWriter::new("/chart", &fs).write_files(&files).unwrap();
    assert_eq!(fs.file_count(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn exists_policy_serializes_by_name() {
    assert_eq!(
        serde_json::to_string(&ExistsPolicy::Skip).unwrap(),
        "\"Skip\""
    );
}
