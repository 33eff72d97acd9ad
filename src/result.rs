//! # Result Aggregator
//!
//! A [`GenerationResult`] is created once per run, filled in by every
//! component in turn, and handed back to the caller. It is the only record of
//! what a run did: components never print and never return their own status.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::naming::Identifiers;

/// Severity of a recorded message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral progress note
    Info,
    /// Something was produced or patched
    Success,
    /// Nothing went wrong, but nothing was done either
    Warning,
    /// An artifact could not be produced
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// What a generated file is, for reporting and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Controller,
    Service,
    Request,
    Resource,
    Provider,
    Routes,
    Types,
    Page,
    Component,
    Hook,
    Action,
    Model,
    Migration,
    Factory,
    Seeder,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileKind::Controller => "controller",
            FileKind::Service => "service",
            FileKind::Request => "request",
            FileKind::Resource => "resource",
            FileKind::Provider => "provider",
            FileKind::Routes => "routes",
            FileKind::Types => "types",
            FileKind::Page => "page",
            FileKind::Component => "component",
            FileKind::Hook => "hook",
            FileKind::Action => "action",
            FileKind::Model => "model",
            FileKind::Migration => "migration",
            FileKind::Factory => "factory",
            FileKind::Seeder => "seeder",
        };
        f.write_str(label)
    }
}

/// A file written during the run
#[derive(Debug, Clone, Serialize)]
pub struct CreatedFile {
    pub path: PathBuf,
    pub kind: FileKind,
    pub timestamp: DateTime<Utc>,
}

/// A directory that did not exist before the run
#[derive(Debug, Clone, Serialize)]
pub struct CreatedDirectory {
    pub path: PathBuf,
    pub timestamp: DateTime<Utc>,
}

/// One entry in the user-facing narrative
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

/// Counts derived from a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files_created: usize,
    pub directories_created: usize,
    pub errors: usize,
    pub warnings: usize,
    pub successes: usize,
    /// `true` when no error was recorded
    pub success: bool,
}

/// Everything one generation run did, in order
#[derive(Debug, Default, Serialize)]
pub struct GenerationResult {
    module: Option<Identifiers>,
    backend_root: Option<PathBuf>,
    frontend_root: Option<PathBuf>,
    created_files: Vec<CreatedFile>,
    created_directories: Vec<CreatedDirectory>,
    messages: Vec<Message>,
}

impl GenerationResult {
    /// Empty result for a fresh run
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_module(&mut self, ids: Identifiers, backend_root: PathBuf, frontend_root: PathBuf) {
        self.module = Some(ids);
        self.backend_root = Some(backend_root);
        self.frontend_root = Some(frontend_root);
    }

    /// Record a written file
    pub fn record_file(&mut self, path: impl Into<PathBuf>, kind: FileKind) {
        self.created_files.push(CreatedFile {
            path: path.into(),
            kind,
            timestamp: Utc::now(),
        });
    }

    /// Record a newly created directory
    pub fn record_directory(&mut self, path: impl Into<PathBuf>) {
        self.created_directories.push(CreatedDirectory {
            path: path.into(),
            timestamp: Utc::now(),
        });
    }

    /// Append a message to the narrative
    pub fn record_message(&mut self, text: impl Into<String>, severity: Severity) {
        self.messages.push(Message {
            text: text.into(),
            severity,
            timestamp: Utc::now(),
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.record_message(text, Severity::Info);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.record_message(text, Severity::Success);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.record_message(text, Severity::Warning);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.record_message(text, Severity::Error);
    }

    /// Record a taxonomy error with the severity it carries
    ///
    /// `AlreadyRegistered` is a warning; everything else is an error.
    pub fn record_failure(&mut self, err: &ScaffoldError) {
        match err {
            ScaffoldError::AlreadyRegistered { .. } => self.warning(err.to_string()),
            _ => self.error(err.to_string()),
        }
    }

    /// Identifier pair, absent if the name was rejected
    #[must_use]
    pub fn module(&self) -> Option<&Identifiers> {
        self.module.as_ref()
    }

    #[must_use]
    pub fn backend_root(&self) -> Option<&Path> {
        self.backend_root.as_deref()
    }

    #[must_use]
    pub fn frontend_root(&self) -> Option<&Path> {
        self.frontend_root.as_deref()
    }

    #[must_use]
    pub fn created_files(&self) -> &[CreatedFile] {
        &self.created_files
    }

    #[must_use]
    pub fn created_directories(&self) -> &[CreatedDirectory] {
        &self.created_directories
    }

    /// Full message log in insertion order
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages of one severity, in insertion order
    #[must_use]
    pub fn messages_with(&self, severity: Severity) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .collect()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<&Message> {
        self.messages_with(Severity::Error)
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<&Message> {
        self.messages_with(Severity::Warning)
    }

    #[must_use]
    pub fn successes(&self) -> Vec<&Message> {
        self.messages_with(Severity::Success)
    }

    /// Whether a file of the given kind was written
    #[must_use]
    pub fn has_file_kind(&self, kind: FileKind) -> bool {
        self.created_files.iter().any(|f| f.kind == kind)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Error)
    }

    #[must_use]
    pub fn is_successful(&self) -> bool {
        !self.has_errors()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let count = |s: Severity| self.messages.iter().filter(|m| m.severity == s).count();
        Summary {
            files_created: self.created_files.len(),
            directories_created: self.created_directories.len(),
            errors: count(Severity::Error),
            warnings: count(Severity::Warning),
            successes: count(Severity::Success),
            success: self.is_successful(),
        }
    }
}
