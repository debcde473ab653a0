//! Plain-text renderings of the report structures.

use chrono::{DateTime, Utc};

use crate::domain::{DonationBalance, DonorReportEntry, InventoryReportEntry, SystemStatistics};

use super::table::{Table, TableColumn};

pub fn format_quantity(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn render_inventory(entries: &[InventoryReportEntry]) -> String {
    if entries.is_empty() {
        return "No donations recorded.".to_string();
    }
    let mut table = Table::new(vec![
        TableColumn::left("Type"),
        TableColumn::right("Received"),
        TableColumn::right("Distributed"),
        TableColumn::right("Remaining"),
        TableColumn::left("Unit"),
    ]);
    let mut mixed = false;
    for entry in entries {
        let unit = if entry.mixed_units {
            mixed = true;
            format!("{}*", entry.unit)
        } else {
            entry.unit.clone()
        };
        table.push_row(vec![
            entry.donation_type.clone(),
            format_quantity(entry.total_received),
            format_quantity(entry.total_distributed),
            format_quantity(entry.remaining_quantity),
            unit,
        ]);
    }
    let mut out = table.render();
    if mixed {
        out.push_str("\n* donations of this type were recorded in more than one unit");
    }
    out
}

pub fn render_donors(entries: &[DonorReportEntry]) -> String {
    if entries.is_empty() {
        return "No donors with donations.".to_string();
    }
    let mut table = Table::new(vec![
        TableColumn::left("Donor"),
        TableColumn::left("Contact"),
        TableColumn::right("Donations"),
        TableColumn::right("Total"),
        TableColumn::left("First"),
        TableColumn::left("Last"),
    ]);
    for entry in entries {
        table.push_row(vec![
            entry.donor_name.clone(),
            entry.contact_info.clone().unwrap_or_else(|| "-".into()),
            entry.total_donations.to_string(),
            format_quantity(entry.total_value),
            format_timestamp(&entry.first_donation_date),
            format_timestamp(&entry.last_donation_date),
        ]);
    }
    table.render()
}

pub fn render_statistics(stats: &SystemStatistics) -> String {
    let mut lines = vec![
        format!("Donors:              {}", stats.total_donors),
        format!("Donations:           {}", stats.total_donations),
        format!("Distributions:       {}", stats.total_distributions),
        format!("Donated quantity:    {}", format_quantity(stats.total_donation_value)),
        format!("Distributed:         {}", format_quantity(stats.total_distributed_value)),
        format!(
            "New donors ({} days): {}",
            stats.window_days, stats.donor_stats.new_count
        ),
    ];
    if stats.unresolved_distributions > 0 {
        lines.push(format!(
            "Unresolved:          {} distributions ({})",
            stats.unresolved_distributions,
            format_quantity(stats.unresolved_distributed_value)
        ));
    }
    if !stats.donation_type_stats.is_empty() {
        let mut table = Table::new(vec![
            TableColumn::left("Type"),
            TableColumn::right("Count"),
            TableColumn::right("Total"),
            TableColumn::right("Distributed"),
            TableColumn::right("Allocated"),
        ]);
        for entry in &stats.donation_type_stats {
            table.push_row(vec![
                entry.donation_type.clone(),
                entry.count.to_string(),
                format_quantity(entry.total_amount),
                format_quantity(entry.distributed_amount),
                format!("{:.1}%", entry.percent_pct),
            ]);
        }
        lines.push(String::new());
        lines.push(table.render());
    }
    lines.join("\n")
}

pub fn render_balance(balance: &DonationBalance) -> String {
    format!(
        "{} ({}): {} {unit} received, {} {unit} distributed, {} {unit} remaining",
        balance.donation_id,
        balance.donation_type,
        format_quantity(balance.quantity),
        format_quantity(balance.distributed),
        format_quantity(balance.remaining),
        unit = balance.unit
    )
}
