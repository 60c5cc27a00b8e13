//! `elizacog init`: lay out a fresh integration directory.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use console::style;

use elizacog_core::config::ConfigStore;
use elizacog_infra::filesystem::resolve_base_dir;
use elizacog_types::report::InitReport;

use crate::cli::print_header;
use crate::state;

/// Initialize the integration in `directory`, creating it if needed.
///
/// Any failure is reported and turned into a non-zero exit status.
pub fn init(directory: &Path, json: bool) -> Result<ExitCode> {
    if !json {
        print_header("🧠", "ElizaCog: Initializing OpenCog-ElizaOS Integration");
    }

    let report = match run_init(directory) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("  {} Initialization failed: {e:#}", style("✗").red());
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render(&report);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(directory: &Path) -> Result<InitReport> {
    let base_dir = resolve_base_dir(directory, true)
        .with_context(|| format!("could not create {}", directory.display()))?;
    tracing::debug!(base_dir = %base_dir.display(), "Resolved integration directory");

    let mut bridge = state::build_bridge(ConfigStore::new(), base_dir);
    Ok(bridge.initialize()?)
}

fn render(report: &InitReport) {
    let base_dir = report
        .config_file
        .parent()
        .unwrap_or(report.config_file.as_path());

    println!("  Integration directory: {}", style(base_dir.display()).cyan());
    println!();

    for (name, dir) in &report.directories {
        println!("  {} Created {name}: {}", style("📁").dim(), dir.display());
    }
    for file in &report.files {
        let label = file.strip_prefix(base_dir).unwrap_or(file);
        println!("  {} Created {}", style("📄").dim(), label.display());
    }

    println!();
    println!(
        "  {} ElizaCog integration initialized successfully!",
        style("✓").green()
    );
    println!(
        "  Configuration saved to: {}",
        style(report.config_file.display()).cyan()
    );
    println!("  Ready for cognitive excellence and seamless interoperability!");
    println!();

    println!("  {}", style("── Next Steps ──").dim());
    println!("  1. Review configuration: {}", report.config_file.display());
    println!("  2. Check bridge modules: {}/", report.bridges_dir.display());
    println!("  3. Test the integration: elizacog test");
    println!();
}
