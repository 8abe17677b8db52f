//! Audit log commands

use anyhow::Result;
use bigeye_client::{AdminClient, AuditPage};
use bigeye_shared::Severity;

use crate::output;

pub async fn run(
    client: &AdminClient,
    severity: Option<Severity>,
    days: u32,
    search: &str,
    page: i64,
    page_size: i64,
) -> Result<()> {
    let mut logs = AuditPage::new(client.clone(), page_size);
    logs.query_mut().set_severity(severity);
    logs.query_mut().set_days(days);
    logs.query_mut().set_search(search);
    logs.query_mut().set_page(page);
    logs.refresh().await?;

    let rows: Vec<Vec<String>> = logs
        .logs()
        .iter()
        .map(|l| {
            let details = match &l.details {
                serde_json::Value::Null => String::new(),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            vec![
                l.created_at.clone(),
                l.severity.clone(),
                l.event_type.clone(),
                l.user_id.clone(),
                details,
            ]
        })
        .collect();
    output::print_table(&["Time", "Severity", "Event", "User", "Details"], &rows);
    output::print_pagination(logs.query().page(), logs.pages(), logs.total());
    Ok(())
}
