//! Payment slip review endpoints

use bigeye_shared::{ActionMessage, SlipDetail, SlipList, SlipStatus};
use serde_json::json;

use crate::error::ApiResult;
use crate::http::AdminClient;

impl AdminClient {
    pub async fn list_slips(
        &self,
        status: Option<SlipStatus>,
        page: i64,
        limit: i64,
    ) -> ApiResult<SlipList> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_json("/admin/slips", &query).await
    }

    pub async fn get_slip(&self, id: &str) -> ApiResult<SlipDetail> {
        self.get_json(&format!("/admin/slips/{id}"), &[]).await
    }

    /// Credit the user the given amount for this slip.
    pub async fn approve_slip(&self, id: &str, credit_amount: f64) -> ApiResult<ActionMessage> {
        self.post_json(
            &format!("/admin/slips/{id}/approve"),
            &json!({ "credit_amount": credit_amount }),
        )
        .await
    }

    pub async fn reject_slip(&self, id: &str, reason: &str) -> ApiResult<ActionMessage> {
        self.post_json(
            &format!("/admin/slips/{id}/reject"),
            &json!({ "reason": reason }),
        )
        .await
    }
}
