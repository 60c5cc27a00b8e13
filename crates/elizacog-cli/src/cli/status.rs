//! `elizacog status`: read-only integration dashboard.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use console::style;

use elizacog_infra::config::{config_path, is_initialized_dir, load_config};
use elizacog_infra::filesystem::resolve_base_dir;
use elizacog_types::report::StatusReport;

use crate::cli::{check_mark, flag, optional_flag, print_header};
use crate::state;

/// Display integration status. An uninitialized directory is reported, not
/// treated as a failure.
pub fn status(directory: &Path, json: bool) -> Result<ExitCode> {
    if !json {
        print_header("📊", "ElizaCog: Integration Status");
    }

    let base_dir = resolve_base_dir(directory, false)?;
    if !is_initialized_dir(&base_dir) {
        if json {
            let value = serde_json::json!({
                "base_dir": base_dir.display().to_string(),
                "initialized": false,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("  {} ElizaCog not initialized", check_mark(false));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&config_path(&base_dir))?;
    let report = state::build_bridge(config, base_dir).show_status();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render(&report);
    }
    Ok(ExitCode::SUCCESS)
}

fn render(report: &StatusReport) {
    println!("  Base Directory: {}", report.base_dir.display());
    println!("  Initialized: {}", flag(report.initialized));
    println!(
        "  Created: {}",
        report.created_at.as_deref().unwrap_or("Unknown")
    );
    println!("  OpenCog Available: {}", flag(report.opencog_available));
    println!();

    println!("  {}", style("── Bridge Modules ──").dim());
    for module in &report.bridge_modules {
        println!("  {} {}", check_mark(module.exists), module.name);
    }
    println!();

    println!("  {}", style("── Configuration ──").dim());
    println!("  Bidirectional Sync: {}", flag(report.bidirectional_sync));
    println!(
        "  AtomSpace Enabled:  {}",
        optional_flag(report.atomspace_enabled)
    );
    println!(
        "  ElizaOS Enabled:    {}",
        optional_flag(report.eliza_os_enabled)
    );
    println!();
}
