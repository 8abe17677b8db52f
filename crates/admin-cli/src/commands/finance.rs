//! Finance report commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use bigeye_client::AdminClient;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::cli::FinanceAction;
use crate::output;

const DATE_FMT: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

pub async fn run(client: &AdminClient, action: FinanceAction) -> Result<()> {
    match action {
        FinanceAction::Daily { from, to } => daily(client, from, to).await,
        FinanceAction::Monthly { year } => monthly(client, year).await,
        FinanceAction::Export { from, to, out } => export(client, &from, &to, out).await,
    }
}

async fn daily(client: &AdminClient, from: Option<String>, to: Option<String>) -> Result<()> {
    let today = OffsetDateTime::now_utc().date();
    let to = match to {
        Some(s) => validate_date(&s)?,
        None => today.format(DATE_FMT)?,
    };
    let from = match from {
        Some(s) => validate_date(&s)?,
        None => (today - Duration::days(30)).format(DATE_FMT)?,
    };

    let report = client.finance_daily(&from, &to).await?;
    let rows: Vec<Vec<String>> = report
        .days
        .iter()
        .map(|d| {
            vec![
                d.date.clone(),
                format!("{:.2}", d.topup_thb),
                d.topup_count.to_string(),
                format!("{:.2}", d.recognized_thb),
                d.new_users.to_string(),
                d.active_users.to_string(),
                d.jobs_count.to_string(),
                d.files_processed.to_string(),
            ]
        })
        .collect();
    output::print_table(
        &["Date", "Topup", "Count", "Recognized", "New", "Active", "Jobs", "Files"],
        &rows,
    );

    println!();
    println!("Totals {from} to {to}");
    println!("  Topup (THB)      {:.2}", report.summary.total_topup_thb);
    println!("  Recognized (THB) {:.2}", report.summary.total_recognized_thb);
    println!("  New users        {}", report.summary.total_new_users);
    println!("  Jobs             {}", report.summary.total_jobs);
    println!("  Files            {}", report.summary.total_files);
    Ok(())
}

async fn monthly(client: &AdminClient, year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| OffsetDateTime::now_utc().year());
    let report = client.finance_monthly(year).await?;

    let rows: Vec<Vec<String>> = report
        .months
        .iter()
        .map(|m| {
            vec![
                m.month.clone(),
                format!("{:.2}", m.topup_thb),
                format!("{:.2}", m.recognized_thb),
                format!("{:.2}", m.deferred_revenue),
                m.new_users.to_string(),
                m.active_users.to_string(),
                m.jobs_count.to_string(),
                format!("{:.2}", m.avg_revenue_per_user),
            ]
        })
        .collect();
    output::print_table(
        &["Month", "Topup", "Recognized", "Deferred", "New", "Active", "Jobs", "ARPU"],
        &rows,
    );

    println!();
    println!("Year to date");
    println!("  Topup (THB)      {:.2}", report.ytd.total_topup_thb);
    println!("  Recognized (THB) {:.2}", report.ytd.total_recognized_thb);
    println!("  Deferred (THB)   {:.2}", report.ytd.total_deferred);
    println!("  Tax base est.    {:.2}", report.ytd.tax_base_estimate);
    Ok(())
}

async fn export(client: &AdminClient, from: &str, to: &str, out: Option<String>) -> Result<()> {
    let from = validate_date(from)?;
    let to = validate_date(to)?;

    let bytes = client.finance_export(&from, &to).await?;
    let path = out
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("bigeye_finance_{from}_{to}.xlsx")));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Reject malformed dates locally instead of sending them to the backend.
fn validate_date(s: &str) -> Result<String> {
    Date::parse(s, DATE_FMT).with_context(|| format!("Invalid date (expected YYYY-MM-DD): {s}"))?;
    Ok(s.to_string())
}
