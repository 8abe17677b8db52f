//! Login endpoint

use bigeye_shared::LoginResponse;
use serde_json::json;

use crate::error::ApiResult;
use crate::http::{AdminClient, LOGIN_PATH};

impl AdminClient {
    /// `POST /admin/login`. A 401 here surfaces the backend's message
    /// (e.g. "Invalid credentials") instead of tearing down the session.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post_json(LOGIN_PATH, &json!({ "email": email, "password": password }))
            .await
    }
}
