//! Dashboard stats and charts

use bigeye_shared::{DashboardCharts, DashboardStats};

use crate::error::ApiResult;
use crate::http::AdminClient;

impl AdminClient {
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get_json("/admin/dashboard/stats", &[]).await
    }

    pub async fn dashboard_charts(&self, days: u32) -> ApiResult<DashboardCharts> {
        self.get_json("/admin/dashboard/charts", &[("days", days.to_string())])
            .await
    }

    /// Stats and charts fetched concurrently and joined before render,
    /// matching how the dashboard page loads.
    pub async fn dashboard(&self, days: u32) -> ApiResult<(DashboardStats, DashboardCharts)> {
        tokio::try_join!(self.dashboard_stats(), self.dashboard_charts(days))
    }
}
