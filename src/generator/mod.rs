//! # Generator Module
//!
//! Scaffolds a complete application module from a name and a set of flags.
//!
//! ## Overview
//!
//! One call to [`ModuleGenerator::generate`] runs every component in a fixed
//! order and returns a [`GenerationResult`] describing what happened:
//!
//! ```text
//! name, options
//!   → naming::normalize      (Pascal / kebab identifiers; rejects unusable names)
//!   → plan::plan             (applies `full` dominance)
//!   → backend::generate      (controller, service, requests, resource, provider, routes)
//!   → frontend::generate     (types, pages, components, hooks, actions)
//!   → database::generate     (model, migration, factory, seeder; only when flagged)
//!   → RegistrationPatcher    (adds the provider to the central list, once)
//!   → GenerationResult
//! ```
//!
//! ## Failure policy
//!
//! Generation is best-effort. A file that cannot be written (including one
//! that already exists) is recorded as an error and the run moves on to the
//! next artifact and the next component. Nothing is rolled back; fix the
//! cause and re-run. Only an invalid module name stops a run before any
//! component executes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modforge::config::{Layout, ScaffoldConfig};
//! use modforge::generator::ModuleGenerator;
//! use modforge::plan::OptionSet;
//!
//! let generator = ModuleGenerator::new(Layout::new(".", ScaffoldConfig::default()));
//! let result = generator.generate("Invoice", &OptionSet::full());
//! for message in result.messages() {
//!     println!("[{}] {}", message.severity, message.text);
//! }
//! ```
//!
//! ## Templates
//!
//! Artifacts are rendered from askama templates under `templates/`:
//! `backend/*.php.txt`, `frontend/*.tsx.txt` / `*.ts.txt` and
//! `database/*.php.txt`.

pub mod backend;
pub mod database;
pub mod frontend;
mod templates;
mod writer;
#[cfg(test)]
mod tests;

pub use templates::Renderer;

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::config::{Layout, ScaffoldConfig};
use crate::error::ScaffoldError;
use crate::naming::{normalize, Identifiers};
use crate::plan::{plan, EffectiveFlags, OptionSet};
use crate::registration::RegistrationPatcher;
use crate::result::{FileKind, GenerationResult};

/// Everything the templates and generators need to know about one module
///
/// Built once per run after the name has been normalized and the flags
/// resolved.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    pub pascal: String,
    pub kebab: String,
    pub camel: String,
    pub title: String,
    /// Pluralised snake_case table name
    pub table: String,
    /// Backend namespace of the module, e.g. `App\Modules\Billing`
    pub namespace: String,
    /// Reference written into the registration list
    pub provider_reference: String,
    /// URL prefix, e.g. `/billing`
    pub route_prefix: String,
    /// `YYYY_MM_DD_HHMMSS` prefix for a new migration
    pub migration_timestamp: String,
    pub backend_root: PathBuf,
    pub frontend_root: PathBuf,
    pub model: bool,
    pub migration: bool,
    pub factory: bool,
    pub seeder: bool,
    pub resource: bool,
    pub full: bool,
}

impl ModuleContext {
    pub fn new(
        layout: &Layout,
        ids: &Identifiers,
        flags: EffectiveFlags,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            pascal: ids.pascal.clone(),
            kebab: ids.kebab.clone(),
            camel: ids.camel(),
            title: ids.title(),
            table: ids.table_name(),
            namespace: layout.module_namespace(ids),
            provider_reference: layout.provider_reference(ids),
            route_prefix: format!("/{}", ids.kebab),
            migration_timestamp: started_at.format("%Y_%m_%d_%H%M%S").to_string(),
            backend_root: layout.backend_root(ids),
            frontend_root: layout.frontend_root(ids),
            model: flags.model,
            migration: flags.migration,
            factory: flags.factory,
            seeder: flags.seeder,
            resource: flags.resource,
            full: flags.full,
        }
    }
}

/// A file a generator intends to write
#[derive(Clone)]
pub struct PlannedArtifact {
    pub path: PathBuf,
    pub kind: FileKind,
    renderer: Renderer,
}

impl PlannedArtifact {
    pub fn new(path: PathBuf, kind: FileKind, renderer: Renderer) -> Self {
        Self {
            path,
            kind,
            renderer,
        }
    }

    /// Render the file's contents
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the template fails.
    pub fn render(&self, ctx: &ModuleContext) -> Result<String, ScaffoldError> {
        (self.renderer)(ctx)
    }
}

impl std::fmt::Debug for PlannedArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannedArtifact")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Output of one component's planning step
#[derive(Debug, Clone)]
pub struct ComponentPlan {
    /// `backend`, `frontend` or `database`
    pub component: &'static str,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedArtifact>,
}

/// What a run would do, without doing it
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub module: Identifiers,
    pub flags: EffectiveFlags,
    pub components: Vec<ComponentPlan>,
    pub registration_file: PathBuf,
    pub provider_reference: String,
}

impl ScaffoldPlan {
    /// All planned files across components, in generation order
    pub fn files(&self) -> impl Iterator<Item = &PlannedArtifact> {
        self.components.iter().flat_map(|c| c.files.iter())
    }
}

/// Scaffolds modules into one project layout
#[derive(Debug, Clone)]
pub struct ModuleGenerator {
    layout: Layout,
}

impl ModuleGenerator {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run every component for `name` and report what happened
    ///
    /// Never panics and never returns early except for an invalid name, in
    /// which case the result holds exactly that one error.
    pub fn generate(&self, name: &str, options: &OptionSet) -> GenerationResult {
        let mut result = GenerationResult::new();
        let ids = match normalize(name) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(error = %err, "rejected module name");
                result.record_failure(&err);
                return result;
            }
        };
        let span = tracing::info_span!("generate", module = %ids.pascal);
        let _guard = span.enter();

        let flags = plan(options);
        let ctx = ModuleContext::new(&self.layout, &ids, flags, Utc::now());
        result.set_module(ids, ctx.backend_root.clone(), ctx.frontend_root.clone());

        backend::generate(&ctx, &mut result);
        frontend::generate(&ctx, &mut result);
        if flags.wants_database() {
            database::generate(&ctx, &mut result);
        }
        RegistrationPatcher::new(self.layout.registration_file())
            .register(&ctx.provider_reference, &mut result);

        let summary = result.summary();
        tracing::info!(
            files = summary.files_created,
            errors = summary.errors,
            warnings = summary.warnings,
            "generation finished"
        );
        result
    }

    /// Plan a run without touching the filesystem (beyond looking for an
    /// existing migration)
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] for an unusable name.
    pub fn preview(&self, name: &str, options: &OptionSet) -> Result<ScaffoldPlan, ScaffoldError> {
        let ids = normalize(name)?;
        let flags = plan(options);
        let ctx = ModuleContext::new(&self.layout, &ids, flags, Utc::now());
        let mut components = vec![backend::plan(&ctx), frontend::plan(&ctx)];
        if flags.wants_database() {
            components.push(database::plan(&ctx));
        }
        Ok(ScaffoldPlan {
            module: ids,
            flags,
            components,
            registration_file: self.layout.registration_file(),
            provider_reference: ctx.provider_reference,
        })
    }
}

/// Scaffold `name` into the current directory with the default layout
pub fn generate(name: &str, options: &OptionSet) -> GenerationResult {
    ModuleGenerator::new(Layout::new(".", ScaffoldConfig::default())).generate(name, options)
}
