//! Finance reporting endpoints

use bigeye_shared::{FinanceDaily, FinanceMonthly};
use bytes::Bytes;

use crate::error::ApiResult;
use crate::http::AdminClient;

impl AdminClient {
    /// Daily breakdown for an inclusive `YYYY-MM-DD` date range.
    pub async fn finance_daily(&self, from: &str, to: &str) -> ApiResult<FinanceDaily> {
        self.get_json(
            "/admin/finance/daily",
            &[("from", from.to_string()), ("to", to.to_string())],
        )
        .await
    }

    pub async fn finance_monthly(&self, year: i32) -> ApiResult<FinanceMonthly> {
        self.get_json("/admin/finance/monthly", &[("year", year.to_string())])
            .await
    }

    /// Spreadsheet export. The payload is the raw file body, never JSON.
    pub async fn finance_export(&self, from: &str, to: &str) -> ApiResult<Bytes> {
        self.get_bytes(
            "/admin/finance/export",
            &[
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("format", "xlsx".to_string()),
            ],
        )
        .await
    }
}
