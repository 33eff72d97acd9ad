//! # CLI Module
//!
//! Command-line front end for the scaffolding engine, exposed as the
//! `modforge` binary.
//!
//! ## Commands
//!
//! ### `make`
//!
//! Scaffold a module into a project:
//!
//! ```bash
//! modforge make Invoice --full
//! modforge make "order item" --model --migration --root ../shop
//! ```
//!
//! Options:
//! - `--model`, `--migration`, `--factory`, `--seeder`, `--resource` - opt into individual artifacts
//! - `--full` - every artifact plus full CRUD routes and pages (overrides the others)
//! - `--root <DIR>` - project root the layout is relative to (default: `.`)
//! - `--config <FILE>` - layout config (default: `<root>/modforge.toml` when present)
//! - `--dry-run` - list what would be created and write nothing
//! - `--json` - print the run result as JSON instead of the human report
//! - `-v` / `-vv` / `-vvv` - diagnostic logging on stderr
//!
//! The process exits with status 0 only when the run recorded no errors.

mod commands;


pub use commands::{run, run_cli, Cli, Commands, MakeFlags};
