//! # Registration Patcher
//!
//! Adds a module's service provider to the application's central provider
//! list, e.g. Laravel's `bootstrap/providers.php`:
//!
//! ```text
//! <?php
//!
//! return [
//!     App\Providers\AppServiceProvider::class,
//!     App\Modules\Billing\Providers\BillingServiceProvider::class,   <- inserted
//! ];
//! ```
//!
//! The text transform ([`patch_registration`]) is pure and separate from the
//! file handling ([`RegistrationPatcher`]). Applying it a second time with the
//! same reference changes nothing.
//!
//! [`RegistrationPatcher`] is the only code in this crate that writes the
//! registration file. It does no locking: concurrent runs against the same
//! file must be serialized by the caller.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::ScaffoldError;
use crate::result::GenerationResult;

const ENTRY_INDENT: &str = "    ";

// Closing `];` with nothing but whitespace after it.
#[allow(clippy::expect_used)]
static LIST_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\]\s*;\s*\z").expect("list end regex should be valid"));

#[allow(clippy::expect_used)]
static DOUBLED_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",(?:[ \t]*,)+").expect("separator regex should be valid"));

// Two `::class` entries sharing one line.
#[allow(clippy::expect_used)]
static CONCATENATED_ENTRIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(::class,)[ \t]*([A-Za-z_\\])").expect("concatenated entry regex should be valid")
});

/// Outcome of patching the registration list text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// New text with the reference inserted
    Patched(String),
    /// The reference is already present; nothing to do
    AlreadyRegistered,
    /// No closing `];` at the end of the text
    MissingDelimiter,
}

/// Insert `reference` as the last entry of the list closed by the final `];`
///
/// The previous entry gets a trailing comma if it lacks one, the new entry is
/// four-space indented and comma-terminated, and the whole text is then run
/// through [`tidy_registration`].
#[must_use]
pub fn patch_registration(text: &str, reference: &str) -> PatchOutcome {
    if text.contains(reference) {
        return PatchOutcome::AlreadyRegistered;
    }
    let Some(end) = LIST_END.find(text) else {
        return PatchOutcome::MissingDelimiter;
    };

    let (head, tail) = text.split_at(end.start());
    let mut patched = terminate_last_entry(head.trim_end());
    patched.reserve(reference.len() + tail.len() + 8);
    patched.push('\n');
    patched.push_str(ENTRY_INDENT);
    patched.push_str(reference);
    patched.push_str(",\n");
    patched.push_str(tail);

    PatchOutcome::Patched(tidy_registration(&patched))
}

/// Collapse doubled separators and split entries that share a line
///
/// Only `::class` entries are split. Quoted string entries sharing a line
/// (`'A', 'B',`) are left as they are, which a provider list never contains.
#[must_use]
pub fn tidy_registration(text: &str) -> String {
    let collapsed = DOUBLED_SEPARATOR.replace_all(text, ",");
    let split = CONCATENATED_ENTRIES.replace_all(&collapsed, format!("${{1}}\n{ENTRY_INDENT}${{2}}"));
    split.into_owned()
}

// Give the last entry before the delimiter its comma, ahead of any trailing
// comment on that line. Blank lines, comment lines and the opening `[` are
// left alone.
fn terminate_last_entry(head: &str) -> String {
    let (before, last_line) = match head.rfind('\n') {
        Some(i) => head.split_at(i + 1),
        None => ("", head),
    };
    let trimmed = last_line.trim_start();
    let is_comment = trimmed.starts_with("//")
        || trimmed.starts_with('#')
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*');
    let code_end = trailing_comment_start(last_line).unwrap_or(last_line.len());
    let code = last_line[..code_end].trim_end();
    if is_comment || code.trim().is_empty() || code.ends_with(',') || code.ends_with('[') {
        return head.to_string();
    }

    let mut out = String::with_capacity(head.len() + 1);
    out.push_str(before);
    out.push_str(code);
    out.push(',');
    out.push_str(&last_line[code.len()..]);
    out
}

// Byte offset of a `//`, `/*` or `#` comment outside any quoted string.
fn trailing_comment_start(line: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '#' => return Some(i),
                '/' if matches!(chars.peek(), Some((_, '/' | '*'))) => return Some(i),
                _ => {}
            },
        }
    }
    None
}

/// What the patcher did to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    AlreadyRegistered,
    Failed,
}

/// Writes module references into the central registration list file
#[derive(Debug, Clone)]
pub struct RegistrationPatcher {
    path: PathBuf,
}

impl RegistrationPatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register `reference`, recording what happened on `result`
    ///
    /// Never fails the run: a missing, unreadable or malformed file is an
    /// `error` message, an existing entry is a `warning`.
    pub fn register(&self, reference: &str, result: &mut GenerationResult) -> RegistrationOutcome {
        match self.try_register(reference) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), reference, "module registered");
                result.success(format!(
                    "Registered {reference} in {}",
                    self.path.display()
                ));
                RegistrationOutcome::Registered
            }
            Err(err @ ScaffoldError::AlreadyRegistered { .. }) => {
                tracing::debug!(reference, "registration skipped");
                result.record_failure(&err);
                RegistrationOutcome::AlreadyRegistered
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                result.record_failure(&err);
                RegistrationOutcome::Failed
            }
        }
    }

    fn try_register(&self, reference: &str) -> Result<(), ScaffoldError> {
        if !self.path.is_file() {
            return Err(ScaffoldError::MissingRegistrationFile {
                path: self.path.clone(),
            });
        }
        let text = fs::read_to_string(&self.path).map_err(|source| ScaffoldError::FileSystemRead {
            path: self.path.clone(),
            source,
        })?;

        match patch_registration(&text, reference) {
            PatchOutcome::Patched(patched) => write_atomic(&self.path, &patched)
                .map_err(|source| ScaffoldError::write(&self.path, source)),
            PatchOutcome::AlreadyRegistered => Err(ScaffoldError::AlreadyRegistered {
                reference: reference.to_string(),
            }),
            PatchOutcome::MissingDelimiter => Err(ScaffoldError::MalformedRegistrationFile {
                path: self.path.clone(),
            }),
        }
    }
}

/// Replace `path` with `contents` via a sibling temp file and rename
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
