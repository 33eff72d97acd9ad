use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::load_layout;
use crate::generator::{ModuleGenerator, ScaffoldPlan};
use crate::logging::{init_logging_with_config, LogConfig};
use crate::plan::OptionSet;
use crate::result::{GenerationResult, Severity};

/// Command-line interface for modforge
#[derive(Parser)]
#[command(name = "modforge")]
#[command(about = "Scaffold backend, frontend and database skeletons for an application module", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new module
    Make {
        /// Module name, e.g. "Invoice" or "order item"
        name: String,

        #[command(flatten)]
        flags: MakeFlags,

        /// Project root that layout paths are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Layout config file
        /// If not provided, `<root>/modforge.toml` is used when present
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show what would be created without writing anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Artifact switches for `make`
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MakeFlags {
    /// Generate a data model
    #[arg(long, default_value_t = false)]
    pub model: bool,

    /// Generate a schema migration
    #[arg(long, default_value_t = false)]
    pub migration: bool,

    /// Generate a test-data factory
    #[arg(long, default_value_t = false)]
    pub factory: bool,

    /// Generate a seeder
    #[arg(long, default_value_t = false)]
    pub seeder: bool,

    /// Generate an API resource transformer
    #[arg(long, default_value_t = false)]
    pub resource: bool,

    /// Generate everything, with full CRUD routes and pages
    #[arg(long, default_value_t = false)]
    pub full: bool,
}

impl From<MakeFlags> for OptionSet {
    fn from(flags: MakeFlags) -> Self {
        OptionSet {
            model: flags.model,
            migration: flags.migration,
            factory: flags.factory,
            seeder: flags.seeder,
            resource: flags.resource,
            full: flags.full,
        }
    }
}

/// Parse the process arguments, set up logging and execute the command
///
/// # Errors
///
/// Returns an error if logging cannot be initialised, the layout config
/// cannot be loaded, or stdout cannot be written.
pub fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging_with_config(&LogConfig::from_env().with_verbosity(cli.verbose))?;
    let stdout = io::stdout();
    let succeeded = run(&cli, &mut stdout.lock())?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Execute a parsed command, writing the report to `out`
///
/// Returns whether the run succeeded (no errors recorded).
///
/// # Errors
///
/// Returns an error if the layout config cannot be loaded or `out` cannot
/// be written.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Make {
            name,
            flags,
            root,
            config,
            dry_run,
            json,
        } => {
            let layout = load_layout(config.as_deref(), root)
                .with_context(|| format!("Failed to load layout for {}", root.display()))?;
            let generator = ModuleGenerator::new(layout);
            let options = OptionSet::from(*flags);

            if *dry_run {
                return match generator.preview(name, &options) {
                    Ok(plan) if *json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(&plan_json(&plan))?)?;
                        Ok(true)
                    }
                    Ok(plan) => {
                        print_plan(&plan, out)?;
                        Ok(true)
                    }
                    Err(err) => {
                        writeln!(out, "{} {err}", glyph(Severity::Error))?;
                        Ok(false)
                    }
                };
            }

            let result = generator.generate(name, &options);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result_json(&result)?)?)?;
            } else {
                print_result(&result, out)?;
            }
            Ok(result.is_successful())
        }
    }
}

fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ️ ",
        Severity::Success => "✅",
        Severity::Warning => "⚠️ ",
        Severity::Error => "❌",
    }
}

fn print_result(result: &GenerationResult, out: &mut dyn Write) -> io::Result<()> {
    if let Some(module) = result.module() {
        writeln!(out, "📦 Module {} ({})", module.pascal, module.kebab)?;
    }

    if !result.created_files().is_empty() {
        writeln!(out, "\n📄 Created files:")?;
        for file in result.created_files() {
            writeln!(out, "   [{}] {}", file.kind, file.path.display())?;
        }
    }

    if !result.messages().is_empty() {
        writeln!(out, "\n📋 Messages:")?;
        for message in result.messages() {
            writeln!(out, "   {} {}", glyph(message.severity), message.text)?;
        }
    }

    let summary = result.summary();
    writeln!(
        out,
        "\n{} {} file(s), {} director(ies), {} error(s), {} warning(s)",
        if summary.success { "✅" } else { "❌" },
        summary.files_created,
        summary.directories_created,
        summary.errors,
        summary.warnings
    )
}

fn print_plan(plan: &ScaffoldPlan, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "🔍 Dry run for module {} ({}); nothing will be written",
        plan.module.pascal, plan.module.kebab
    )?;
    for component in &plan.components {
        if component.files.is_empty() {
            continue;
        }
        writeln!(out, "\n{}:", component.component)?;
        for dir in &component.directories {
            writeln!(out, "   dir  {}", dir.display())?;
        }
        for file in &component.files {
            writeln!(out, "   [{}] {}", file.kind, file.path.display())?;
        }
    }
    writeln!(
        out,
        "\nregistration: {} in {}",
        plan.provider_reference,
        plan.registration_file.display()
    )
}

fn plan_json(plan: &ScaffoldPlan) -> serde_json::Value {
    let components: Vec<_> = plan
        .components
        .iter()
        .map(|component| {
            let files: Vec<_> = component
                .files
                .iter()
                .map(|file| json!({ "path": file.path, "kind": file.kind }))
                .collect();
            json!({
                "component": component.component,
                "directories": component.directories,
                "files": files,
            })
        })
        .collect();
    json!({
        "module": plan.module,
        "flags": plan.flags,
        "components": components,
        "registration_file": plan.registration_file,
        "provider_reference": plan.provider_reference,
    })
}

fn result_json(result: &GenerationResult) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(result)?;
    if let Some(map) = value.as_object_mut() {
        map.insert("summary".to_string(), serde_json::to_value(result.summary())?);
    }
    Ok(value)
}
