//! # modforge
//!
//! **modforge** scaffolds a complete application module (server-side
//! skeleton, client-side skeleton and optional database artifacts) from a
//! single name and a handful of flags, then registers the module's startup
//! unit in the project's central provider list.
//!
//! ## Overview
//!
//! One invocation is one pass over a fixed pipeline. Every step reports into a
//! shared [`GenerationResult`] instead of printing or returning early, so a
//! caller always gets back the full story of the run: which files and
//! directories were created, and an ordered log of info/success/warning/error
//! messages.
//!
//! ## Architecture
//!
//! - **[`naming`]** - Turns a raw name into its Pascal and kebab identifiers
//! - **[`plan`]** - Resolves the option set (`full` turns everything on)
//! - **[`generator`]** - Orchestrates the backend, frontend and database generators
//! - **[`registration`]** - Inserts the provider reference into the registration list, once
//! - **[`result`]** - The run record handed back to the caller
//! - **[`config`]** - Project layout from `modforge.toml`
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - The `modforge` command-line front end
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Gen as ModuleGenerator
//!     participant Naming as naming::normalize
//!     participant Plan as plan::plan
//!     participant Writer as generator::writer
//!     participant Reg as RegistrationPatcher
//!     participant FS as File System
//!
//!     Caller->>Gen: generate("Invoice", options)
//!     Gen->>Naming: normalize("Invoice")
//!     Naming-->>Gen: Identifiers { Invoice, invoice }
//!     Gen->>Plan: plan(options)
//!     Plan-->>Gen: EffectiveFlags
//!     loop backend, frontend, database
//!         Gen->>Writer: execute(component plan)
//!         Writer->>FS: create directories, write new files
//!         Writer-->>Gen: recorded on GenerationResult
//!     end
//!     Gen->>Reg: register(provider reference)
//!     Reg->>FS: atomic rewrite of bootstrap/providers.php
//!     Gen-->>Caller: GenerationResult
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modforge::{generate, OptionSet};
//!
//! let result = generate("Invoice", &OptionSet { model: true, migration: true, ..Default::default() });
//! if !result.is_successful() {
//!     for message in result.errors() {
//!         eprintln!("{}", message.text);
//!     }
//! }
//! ```
//!
//! From the command line:
//!
//! ```bash
//! modforge make Invoice --full
//! ```
//!
//! ## Failure Model
//!
//! Generation is best-effort and never rolls back. An existing file is never
//! overwritten: it is recorded as an error and the run moves on. Registering a
//! module that is already listed is a warning and leaves the file untouched.
//! A run is successful when it recorded no errors.
//!
//! Runs are synchronous and single-threaded. Two concurrent runs against the
//! same project must be serialized by the caller.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod naming;
pub mod plan;
pub mod registration;
pub mod result;

pub use config::{Layout, ScaffoldConfig};
pub use error::ScaffoldError;
pub use generator::{generate, ModuleContext, ModuleGenerator, ScaffoldPlan};
pub use naming::{normalize, Identifiers};
pub use plan::{plan, EffectiveFlags, OptionSet};
pub use registration::{patch_registration, PatchOutcome, RegistrationOutcome, RegistrationPatcher};
pub use result::{FileKind, GenerationResult, Message, Severity, Summary};
