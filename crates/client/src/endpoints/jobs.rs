//! Job monitoring endpoints

use bigeye_shared::{ActionMessage, JobDetail, JobList, JobStatus};

use crate::error::ApiResult;
use crate::http::AdminClient;

impl AdminClient {
    pub async fn list_jobs(
        &self,
        status: Option<JobStatus>,
        page: i64,
        limit: i64,
    ) -> ApiResult<JobList> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_json("/admin/jobs", &query).await
    }

    pub async fn get_job(&self, id: &str) -> ApiResult<JobDetail> {
        self.get_json(&format!("/admin/jobs/{id}"), &[]).await
    }

    /// Return this job's reserved credits to the user.
    pub async fn force_refund_job(&self, id: &str) -> ApiResult<ActionMessage> {
        self.post_empty(&format!("/admin/jobs/{id}/force-refund"))
            .await
    }

    /// Bulk-refund all stuck jobs.
    pub async fn cleanup_jobs(&self) -> ApiResult<ActionMessage> {
        self.post_empty("/admin/cleanup-jobs").await
    }
}
