//! # Artifact Planner
//!
//! Resolves the user's option set into the flags each generator checks.
//! `full` dominates: when it is set every other flag is on, whatever the
//! caller passed. This is the only place that rule lives.

use serde::{Deserialize, Serialize};

/// Options as supplied by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    /// Emit a data model
    pub model: bool,
    /// Emit a schema migration
    pub migration: bool,
    /// Emit a test-data factory
    pub factory: bool,
    /// Emit a seeder
    pub seeder: bool,
    /// Emit an API resource transformer
    pub resource: bool,
    /// Everything, plus full CRUD routes and the complete page set
    pub full: bool,
}

impl OptionSet {
    /// Option set with only `full` enabled
    #[must_use]
    pub fn full() -> Self {
        OptionSet {
            full: true,
            ..OptionSet::default()
        }
    }
}

/// Flags after `full` has been applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveFlags {
    pub model: bool,
    pub migration: bool,
    pub factory: bool,
    pub seeder: bool,
    pub resource: bool,
    pub full: bool,
}

impl EffectiveFlags {
    /// Whether the database generator has anything to do
    #[must_use]
    pub fn wants_database(&self) -> bool {
        self.full || self.model || self.migration || self.factory || self.seeder
    }
}

/// Apply `full` dominance to an option set
#[must_use]
pub fn plan(options: &OptionSet) -> EffectiveFlags {
    let full = options.full;
    EffectiveFlags {
        model: full || options.model,
        migration: full || options.migration,
        factory: full || options.factory,
        seeder: full || options.seeder,
        resource: full || options.resource,
        full,
    }
}
