//! System configuration endpoints

use bigeye_shared::{ActionMessage, Dictionary, SystemConfig, CONFIG_SECTIONS};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::http::AdminClient;

impl AdminClient {
    pub async fn get_config(&self) -> ApiResult<SystemConfig> {
        self.get_json("/admin/config", &[]).await
    }

    /// Replace one named config section wholesale. Unknown section names are
    /// rejected locally before any request is sent.
    pub async fn update_config_section(
        &self,
        section: &str,
        payload: &Value,
    ) -> ApiResult<ActionMessage> {
        if !CONFIG_SECTIONS.contains(&section) {
            return Err(ApiError::Api {
                status: 400,
                message: format!("Unknown config section: {section}"),
            });
        }
        self.put_json(&format!("/admin/config/{section}"), payload)
            .await
    }

    /// Prompts have per-key updates, unlike the section-wide writes above.
    pub async fn update_prompt(&self, key: &str, content: &str) -> ApiResult<ActionMessage> {
        self.put_json(
            &format!("/admin/config/prompts/{key}"),
            &json!({ "content": content }),
        )
        .await
    }

    pub async fn get_dictionary(&self) -> ApiResult<Dictionary> {
        self.get_json("/admin/config/dictionary", &[]).await
    }

    pub async fn update_dictionary(&self, words: &[String]) -> ApiResult<ActionMessage> {
        self.put_json("/admin/config/dictionary", &json!({ "words": words }))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap() in tests for cleaner test code
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::MemorySessionStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unknown_section_rejected_without_request() {
        // Port 9 is discard; a sent request would hang or fail differently.
        let config =
            ClientConfig::with_api_url("http://localhost:9", std::path::PathBuf::from("/dev/null"));
        let client = AdminClient::with_store(&config, Arc::new(MemorySessionStore::new())).unwrap();

        let err = client
            .update_config_section("nonsense", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown config section: nonsense");
    }
}
