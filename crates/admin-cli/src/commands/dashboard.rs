//! Dashboard rendering

use anyhow::Result;
use bigeye_client::AdminClient;
use bigeye_shared::ChartPoint;

use crate::output;

pub async fn show(client: &AdminClient, days: u32) -> Result<()> {
    let (stats, charts) = client.dashboard(days).await?;

    println!("Today");
    println!("  Active users     {}", stats.active_users);
    println!("  New users        {}", stats.new_users_today);
    println!("  Top-ups (THB)    {:.2}", stats.topup_thb_today);
    println!("  Recognized (THB) {:.2}", stats.recognized_thb_today);
    println!("  Jobs             {}", stats.jobs_today);
    println!("  Errors           {}", stats.errors_today);
    println!("  Success rate     {:.1}%", stats.success_rate);
    println!();
    println!("Backlog");
    println!("  Pending slips    {}", stats.pending_slips);
    println!("  Stuck jobs       {}", stats.stuck_jobs);
    println!("  Exchange rate    {:.4}", stats.exchange_rate);

    println!();
    println!("Revenue ({days}d)");
    print_series(&charts.revenue);
    println!();
    println!("Signups ({days}d)");
    print_series(&charts.users);
    Ok(())
}

fn print_series(points: &[ChartPoint]) {
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            let values: Vec<String> = p
                .series
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            vec![p.date.clone(), values.join("  ")]
        })
        .collect();
    output::print_table(&["Date", "Values"], &rows);
}
