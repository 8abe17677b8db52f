//! Promotion management endpoints

use std::fmt;

use bigeye_shared::{ActionMessage, PromoStats, PromoStatus, Promotion, PromotionList};
use serde_json::Value;

use crate::error::ApiResult;
use crate::http::AdminClient;

/// Lifecycle actions posted to `/admin/promo/{id}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoAction {
    Activate,
    Pause,
    Resume,
    End,
    Cancel,
}

impl PromoAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::End => "end",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for PromoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromoAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activate" => Ok(Self::Activate),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "end" => Ok(Self::End),
            "cancel" => Ok(Self::Cancel),
            _ => Err(format!("Invalid promotion action: {}", s)),
        }
    }
}

impl AdminClient {
    pub async fn list_promotions(&self, status: Option<PromoStatus>) -> ApiResult<PromotionList> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_json("/admin/promo/list", &query).await
    }

    pub async fn get_promotion(&self, id: &str) -> ApiResult<Promotion> {
        self.get_json(&format!("/admin/promo/{id}"), &[]).await
    }

    /// The payload is the promotion definition as the backend expects it;
    /// validation happens server-side.
    pub async fn create_promotion(&self, definition: &Value) -> ApiResult<ActionMessage> {
        self.post_json("/admin/promo/create", definition).await
    }

    pub async fn update_promotion(&self, id: &str, definition: &Value) -> ApiResult<ActionMessage> {
        self.put_json(&format!("/admin/promo/{id}"), definition)
            .await
    }

    pub async fn promotion_action(&self, id: &str, action: PromoAction) -> ApiResult<ActionMessage> {
        self.post_empty(&format!("/admin/promo/{id}/{action}")).await
    }

    pub async fn promotion_stats(&self, id: &str) -> ApiResult<PromoStats> {
        self.get_json(&format!("/admin/promo/{id}/stats"), &[])
            .await
    }
}
