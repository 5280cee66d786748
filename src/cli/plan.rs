//! Dry-run preview of a provisioning run.

use crate::cli::CliContext;
use crate::core::plan::{self, Plan};
use anyhow::{bail, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, Table};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Output format (text|json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(ctx: &CliContext, args: PlanArgs) -> Result<()> {
    let plan = plan::build(&ctx.system, &ctx.config);
    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&plan)?),
        "text" => print_text(&plan),
        other => bail!("unknown format '{}' (expected text or json)", other),
    }
    Ok(())
}

fn print_text(plan: &Plan) {
    println!("Plan: provision '{}'", plan.target.display());
    match (plan.exists, plan.current_mode) {
        (true, Some(mode)) => println!("  folder: exists (mode {:04o})", mode),
        (true, None) => println!("  folder: exists"),
        (false, _) => println!("  folder: will be created (mode 0755)"),
    }

    if plan.grants.is_empty() {
        println!("  permissions: none configured");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Group").add_attribute(Attribute::Bold),
            Cell::new("Exists").add_attribute(Attribute::Bold),
            Cell::new("Tier").add_attribute(Attribute::Bold),
            Cell::new("Mode").add_attribute(Attribute::Bold),
            Cell::new("Action").add_attribute(Attribute::Bold),
        ]);
        for grant in &plan.grants {
            let mode = match grant.mode {
                Some(mode) => format!("{:04o}", mode),
                None => "unsupported".to_string(),
            };
            let action = if grant.action == plan::PlannedAction::Apply {
                Cell::new(grant.action.label()).fg(Color::Green)
            } else {
                Cell::new(grant.action.label()).fg(Color::Yellow)
            };
            table.add_row(vec![
                Cell::new(&grant.group),
                Cell::new(if grant.group_exists { "yes" } else { "no" }),
                Cell::new(&grant.tier),
                Cell::new(mode),
                action,
            ]);
        }
        println!("{table}");
    }

    println!("\nNo changes made (dry-run).");
}
