use serde::Serialize;
use uuid::Uuid;

use crate::core::errors::{CliError, DonationError};
use crate::domain::DonationLedger;
use crate::storage::{canonical_name, SnapshotStorage};
use crate::utils::build_info;

use super::context::ShellContext;
use super::formatters;
use super::output;

/// Static description of a shell command, used by `help` and completion.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

const fn entry(name: &'static str, usage: &'static str, description: &'static str) -> CommandEntry {
    CommandEntry {
        name,
        usage,
        description,
    }
}

pub const COMMANDS: &[CommandEntry] = &[
    entry("load", "load <path|name>", "Open a snapshot file or a stored snapshot"),
    entry("save", "save <name>", "Store the open snapshot under a name"),
    entry("snapshots", "snapshots", "List stored snapshots"),
    entry("inventory", "inventory [type] [--json]", "Per-type received, distributed and remaining quantities"),
    entry("donors", "donors [--json]", "Contribution summary for every donor with donations"),
    entry("stats", "stats [days] [--json]", "System statistics with new donors in the last <days>"),
    entry("balance", "balance <donation-id>", "Distributed and remaining quantity of one donation"),
    entry("warnings", "warnings", "List dangling references and over-distributed donations"),
    entry("config", "config [window <days>|color <on|off>]", "Show or change preferences"),
    entry("version", "version", "Show build information"),
    entry("help", "help [command]", "Show this list"),
    entry("exit", "exit", "Leave the shell"),
];

type CommandResult = Result<(), CliError>;

struct ReportArgs<'a> {
    positional: Vec<&'a str>,
    json: bool,
}

fn split_flags<'a>(args: &[&'a str]) -> Result<ReportArgs<'a>, CliError> {
    let mut positional = Vec::new();
    let mut json = false;
    for arg in args {
        match *arg {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Input(format!("unknown flag `{flag}`")));
            }
            value => positional.push(value),
        }
    }
    Ok(ReportArgs { positional, json })
}

fn print_json<T: Serialize>(value: &T) -> CommandResult {
    let json = serde_json::to_string_pretty(value).map_err(DonationError::from)?;
    println!("{json}");
    Ok(())
}

fn require_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CliError> {
    args.first()
        .copied()
        .ok_or_else(|| CliError::Input(format!("usage: {usage}")))
}

pub(crate) fn help(args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let found = COMMANDS
            .iter()
            .find(|entry| entry.name == *name)
            .ok_or_else(|| CliError::Input(format!("no help for `{name}`")))?;
        println!("{}\n  {}", found.usage, found.description);
        return Ok(());
    }
    output::section("Commands");
    let width = COMMANDS.iter().map(|entry| entry.usage.len()).max().unwrap_or(0);
    for entry in COMMANDS {
        println!("  {:<width$}  {}", entry.usage, entry.description, width = width);
    }
    Ok(())
}

pub(crate) fn load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = require_arg(args, "load <path|name>")?;
    let label = context.open(target)?;
    let ledger = context.ledger().ok_or(DonationError::SnapshotNotLoaded)?;
    output::success(format!(
        "Loaded `{label}`: {} donors, {} donations, {} distributions",
        ledger.donors.len(),
        ledger.donations.len(),
        ledger.distributions.len()
    ));
    Ok(())
}

pub(crate) fn save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = require_arg(args, "save <name>")?;
    let ledger: DonationLedger = context
        .ledger()
        .cloned()
        .ok_or(DonationError::SnapshotNotLoaded)?;
    context.store().save_snapshot(name, &ledger)?;
    let stored = canonical_name(name);
    let remembered = stored.clone();
    context.update_config(|config| {
        config.last_snapshot = Some(remembered);
        Ok(())
    })?;
    context.set_ledger(ledger, stored);
    output::success(format!("Saved snapshot `{name}`."));
    Ok(())
}

pub(crate) fn snapshots(context: &mut ShellContext) -> CommandResult {
    let names = context.store().list_snapshots()?;
    if names.is_empty() {
        output::info("No stored snapshots.");
        return Ok(());
    }
    for name in names {
        let marker = if context.source() == Some(name.as_str()) { "*" } else { " " };
        println!("{marker} {name}");
    }
    Ok(())
}

pub(crate) fn inventory(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = split_flags(args)?;
    let reports = context.reports()?;
    if let Some(donation_type) = parsed.positional.first() {
        let entry = reports.inventory_for_type(donation_type)?;
        return match (entry, parsed.json) {
            (Some(entry), true) => print_json(&entry),
            (Some(entry), false) => {
                println!("{}", formatters::render_inventory(std::slice::from_ref(&entry)));
                Ok(())
            }
            (None, _) => Err(CliError::Command(format!(
                "no donations of type `{donation_type}`"
            ))),
        };
    }
    let entries = reports.generate_inventory_report()?;
    if parsed.json {
        return print_json(&entries);
    }
    output::section("Inventory");
    println!("{}", formatters::render_inventory(&entries));
    Ok(())
}

pub(crate) fn donors(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = split_flags(args)?;
    let entries = context.reports()?.generate_donor_report()?;
    if parsed.json {
        return print_json(&entries);
    }
    output::section("Donors");
    println!("{}", formatters::render_donors(&entries));
    Ok(())
}

pub(crate) fn stats(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = split_flags(args)?;
    let window = parsed
        .positional
        .first()
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| CliError::Input(format!("`{raw}` is not a number of days")))
        })
        .transpose()?;
    let stats = context.reports()?.system_statistics(window)?;
    if parsed.json {
        return print_json(&stats);
    }
    output::section("Statistics");
    println!("{}", formatters::render_statistics(&stats));
    Ok(())
}

pub(crate) fn balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = require_arg(args, "balance <donation-id>")?;
    let id = Uuid::parse_str(raw)
        .map_err(|_| CliError::Input(format!("`{raw}` is not a donation id")))?;
    let balance = context.reports()?.ledger_balance(id)?;
    println!("{}", formatters::render_balance(&balance));
    Ok(())
}

pub(crate) fn warnings(context: &mut ShellContext) -> CommandResult {
    let warnings = context.reports()?.integrity_warnings()?;
    if warnings.is_empty() {
        output::success("No integrity problems found.");
        return Ok(());
    }
    for warning in warnings {
        output::warning(warning);
    }
    Ok(())
}

pub(crate) fn config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let config = context.config();
            println!("default window: {} days", config.default_window_days);
            println!("color output:   {}", if config.ui_color_enabled { "on" } else { "off" });
            println!(
                "last snapshot:  {}",
                config.last_snapshot.as_deref().unwrap_or("-")
            );
            println!("data root:      {}", context.store().base_dir().display());
            Ok(())
        }
        ["window", raw] => {
            let days = raw
                .parse::<i64>()
                .map_err(|_| CliError::Input(format!("`{raw}` is not a number of days")))?;
            context.update_config(|config| config.set_window_days(days))?;
            output::success(format!("Default window set to {days} days."));
            Ok(())
        }
        ["color", value] => {
            let enabled = match *value {
                "on" | "true" => true,
                "off" | "false" => false,
                other => {
                    return Err(CliError::Input(format!("expected on or off, got `{other}`")));
                }
            };
            context.update_config(|config| {
                config.ui_color_enabled = enabled;
                Ok(())
            })?;
            output::success(format!("Color output {}.", if enabled { "enabled" } else { "disabled" }));
            Ok(())
        }
        _ => Err(CliError::Input(
            "usage: config [window <days>|color <on|off>]".into(),
        )),
    }
}

pub(crate) fn version() -> CommandResult {
    let meta = build_info::current();
    println!("{}", meta.summary());
    println!("rustc: {}", meta.rustc);
    Ok(())
}
