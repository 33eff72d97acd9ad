//! # Database Generator
//!
//! Model, migration, factory and seeder, each behind its own effective flag,
//! placed under the module's backend root:
//!
//! ```text
//! Invoice/
//! ├── Models/Invoice.php
//! └── Database/
//!     ├── Migrations/2026_10_19_120000_create_invoices_table.php
//!     ├── Factories/InvoiceFactory.php
//!     └── Seeders/InvoiceSeeder.php
//! ```
//!
//! The model's fields and the migration's columns are not cross-checked.

use std::fs;
use std::path::{Path, PathBuf};

use super::templates;
use super::{writer, ComponentPlan, ModuleContext, PlannedArtifact};
use crate::result::{FileKind, GenerationResult};

/// Directories and files the database generator would produce
///
/// Empty when no database flag is effective.
#[must_use]
pub fn plan(ctx: &ModuleContext) -> ComponentPlan {
    let root = &ctx.backend_root;
    let database = root.join("Database");
    let p = &ctx.pascal;
    let mut directories = Vec::new();
    let mut files = Vec::new();

    if ctx.model {
        let models = root.join("Models");
        files.push(PlannedArtifact::new(
            models.join(format!("{p}.php")),
            FileKind::Model,
            templates::model,
        ));
        directories.push(models);
    }
    if ctx.migration {
        let migrations = database.join("Migrations");
        files.push(PlannedArtifact::new(
            migration_path(&migrations, ctx),
            FileKind::Migration,
            templates::migration,
        ));
        directories.push(migrations);
    }
    if ctx.factory {
        let factories = database.join("Factories");
        files.push(PlannedArtifact::new(
            factories.join(format!("{p}Factory.php")),
            FileKind::Factory,
            templates::factory,
        ));
        directories.push(factories);
    }
    if ctx.seeder {
        let seeders = database.join("Seeders");
        files.push(PlannedArtifact::new(
            seeders.join(format!("{p}Seeder.php")),
            FileKind::Seeder,
            templates::seeder,
        ));
        directories.push(seeders);
    }

    ComponentPlan {
        component: "database",
        directories,
        files,
    }
}

/// Migration file for this module's table
///
/// Migration names carry a timestamp, so an earlier run's
/// `*_create_<table>_table.php` is reused as the target; writing to it then
/// fails like any other existing file instead of adding a second migration.
fn migration_path(dir: &Path, ctx: &ModuleContext) -> PathBuf {
    let suffix = format!("_create_{}_table.php", ctx.table);
    let existing = fs::read_dir(dir).ok().and_then(|entries| {
        entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(&suffix))
            })
            .min()
    });
    existing.unwrap_or_else(|| dir.join(format!("{}{suffix}", ctx.migration_timestamp)))
}

/// Write the effective database artifacts, recording every outcome on `result`
pub fn generate(ctx: &ModuleContext, result: &mut GenerationResult) {
    let plan = plan(ctx);
    if plan.files.is_empty() {
        return;
    }
    tracing::info!(module = %ctx.pascal, table = %ctx.table, "generating database artifacts");
    result.info(format!(
        "Generating database artifacts for {} (table {})",
        ctx.pascal, ctx.table
    ));
    writer::execute(&plan, ctx, result);
}
