//! User management endpoints

use bigeye_shared::{ActionMessage, JobList, TransactionList, UserDetail, UserList};
use serde_json::json;

use crate::error::ApiResult;
use crate::http::AdminClient;

impl AdminClient {
    pub async fn list_users(&self, search: &str, page: i64, limit: i64) -> ApiResult<UserList> {
        self.get_json(
            "/admin/users",
            &[
                ("search", search.to_string()),
                ("page", page.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    pub async fn get_user(&self, uid: &str) -> ApiResult<UserDetail> {
        self.get_json(&format!("/admin/users/{uid}"), &[]).await
    }

    pub async fn user_transactions(&self, uid: &str, limit: i64) -> ApiResult<TransactionList> {
        self.get_json(
            &format!("/admin/users/{uid}/transactions"),
            &[("limit", limit.to_string())],
        )
        .await
    }

    pub async fn user_jobs(&self, uid: &str, limit: i64) -> ApiResult<JobList> {
        self.get_json(
            &format!("/admin/users/{uid}/jobs"),
            &[("limit", limit.to_string())],
        )
        .await
    }

    /// Signed credit adjustment with an operator-supplied reason.
    pub async fn adjust_credits(
        &self,
        uid: &str,
        amount: f64,
        reason: &str,
    ) -> ApiResult<ActionMessage> {
        self.post_json(
            &format!("/admin/users/{uid}/adjust-credits"),
            &json!({ "amount": amount, "reason": reason }),
        )
        .await
    }

    pub async fn suspend_user(&self, uid: &str) -> ApiResult<ActionMessage> {
        self.post_empty(&format!("/admin/users/{uid}/suspend")).await
    }

    pub async fn unsuspend_user(&self, uid: &str) -> ApiResult<ActionMessage> {
        self.post_empty(&format!("/admin/users/{uid}/unsuspend"))
            .await
    }

    pub async fn reset_hardware(&self, uid: &str) -> ApiResult<ActionMessage> {
        self.post_empty(&format!("/admin/users/{uid}/reset-hardware"))
            .await
    }

    pub async fn reset_password(
        &self,
        uid: &str,
        new_password: &str,
        reset_hardware: bool,
    ) -> ApiResult<ActionMessage> {
        self.post_json(
            &format!("/admin/users/{uid}/reset-password"),
            &json!({ "new_password": new_password, "reset_hardware": reset_hardware }),
        )
        .await
    }

    // Deletion is only reachable through the two-step confirmation on the
    // users page loader.
    pub(crate) async fn delete_user(&self, uid: &str) -> ApiResult<ActionMessage> {
        self.delete_json(&format!("/admin/users/{uid}")).await
    }
}
