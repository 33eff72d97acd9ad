//! Filesystem side of generation
//!
//! Every directory and file the generators produce goes through here so that
//! each one is recorded on the [`GenerationResult`]. Failures are recorded
//! and skipped; nothing is rolled back.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use super::{ComponentPlan, ModuleContext};
use crate::error::ScaffoldError;
use crate::result::{FileKind, GenerationResult};

/// Create `path` and any missing parents unless it is already a directory
///
/// Every level that did not exist before is recorded, outermost first.
pub(crate) fn ensure_dir(path: &Path, result: &mut GenerationResult) -> bool {
    if path.is_dir() {
        return true;
    }
    let mut missing = vec![path];
    let mut parent = path.parent();
    while let Some(dir) = parent {
        if dir.as_os_str().is_empty() || dir.exists() {
            break;
        }
        missing.push(dir);
        parent = dir.parent();
    }

    for dir in missing.into_iter().rev() {
        match fs::create_dir(dir) {
            Ok(()) => {
                tracing::debug!(path = %dir.display(), "created directory");
                result.record_directory(dir);
            }
            // lost a race with another writer
            Err(source) if source.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {}
            Err(source) => {
                let err = ScaffoldError::write(dir, source);
                tracing::warn!(error = %err, "directory creation failed");
                result.record_failure(&err);
                return false;
            }
        }
    }
    true
}

/// Write `contents` to a file that must not exist yet
///
/// An existing file is never overwritten; it is reported as a write error.
pub(crate) fn write_new(
    path: &Path,
    kind: FileKind,
    contents: &str,
    result: &mut GenerationResult,
) -> bool {
    let written = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .and_then(|mut file| file.write_all(contents.as_bytes()));
    match written {
        Ok(()) => {
            tracing::debug!(path = %path.display(), %kind, "generated file");
            result.record_file(path, kind);
            result.success(format!("Created {kind}: {}", path.display()));
            true
        }
        Err(source) => {
            let err = ScaffoldError::write(path, source);
            tracing::warn!(error = %err, "file generation failed");
            result.record_failure(&err);
            false
        }
    }
}

/// Create a component's directories, then render and write each of its files
pub(crate) fn execute(plan: &ComponentPlan, ctx: &ModuleContext, result: &mut GenerationResult) {
    for dir in &plan.directories {
        ensure_dir(dir, result);
    }
    for artifact in &plan.files {
        match artifact.render(ctx) {
            Ok(contents) => {
                write_new(&artifact.path, artifact.kind, &contents, result);
            }
            Err(err) => {
                tracing::warn!(error = %err, path = %artifact.path.display(), "render failed");
                result.record_failure(&err);
            }
        }
    }
}
