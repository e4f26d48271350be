//! docconf — settings loader for documentation projects.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use docconf::config::ProjectSettings;
use docconf::constants;
use docconf::env::Env;
use docconf::schema;

use cli::args::{CheckArgs, Cli, Command, InitArgs, ShowArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Show(args) => run_show(args),
        Command::Init(args) => run_init(args),
        Command::Schema => run_schema(),
        Command::Version => run_version(),
    }
}

/// Load the project's settings and report whether they resolve cleanly.
fn run_check(args: CheckArgs) -> Result<()> {
    let root = std::fs::canonicalize(&args.path)
        .with_context(|| format!("--path directory not found: {}", args.path.display()))?;

    match ProjectSettings::load(&root, &Env::real()) {
        Ok(settings) => {
            println!(
                "  {} {}  {}",
                "✔".green().bold(),
                settings.project.bold(),
                format!("by {}", settings.author).dimmed(),
            );
            println!(
                "         {}  {} · theme {} · {} extension(s)",
                "resolved:".cyan(),
                settings.language,
                settings.theme,
                settings.extensions.len(),
            );
            Ok(())
        }
        Err(e) => {
            bail!("{} {}", "✖".red().bold(), format!("{e}").red());
        }
    }
}

/// Print the fully resolved settings in the requested format.
fn run_show(args: ShowArgs) -> Result<()> {
    let root = std::fs::canonicalize(&args.path)
        .with_context(|| format!("--path directory not found: {}", args.path.display()))?;

    let settings =
        ProjectSettings::load(&root, &Env::real()).context("failed to load settings")?;
    print!("{}", args.format.render(&settings));
    Ok(())
}

/// Write a starter declaration file into the project root.
fn run_init(args: InitArgs) -> Result<()> {
    let path = args.path.join(constants::CONFIG_FILENAME);
    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, STARTER_DECLARATION)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "  {} Wrote {}",
        "✔".green().bold(),
        path.display().to_string().bold(),
    );
    Ok(())
}

/// Print the declaration-file JSON Schema.
fn run_schema() -> Result<()> {
    println!("{}", schema::declaration_schema());
    Ok(())
}

/// Print version information.
fn run_version() -> Result<()> {
    println!("{} {}", "docconf".bold(), constants::VERSION.green().bold());
    Ok(())
}

/// Starter file written by `docconf init`. Optional fields are left
/// commented out at their built-in defaults.
const STARTER_DECLARATION: &str = r#"project = "My Project"
author = "Documentation Team"

# show_copyright = true
# language = "en"
# theme = "default"
# exclude_patterns = []
# extensions = []

# [extension_options.some-extension]
# some_option = true
"#;
