//! Audit log endpoints

use bigeye_shared::{AuditLogList, Severity};

use crate::error::ApiResult;
use crate::http::AdminClient;

impl AdminClient {
    pub async fn list_audit_logs(
        &self,
        severity: Option<Severity>,
        days: u32,
        search: &str,
        page: i64,
        limit: i64,
    ) -> ApiResult<AuditLogList> {
        let mut query = vec![
            ("days", days.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(severity) = severity {
            query.push(("severity", severity.to_string()));
        }
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        self.get_json("/admin/audit-logs", &query).await
    }
}
