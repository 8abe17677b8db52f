//! Page loaders
//!
//! Each admin page is a thin state holder over the endpoint calls: it keeps
//! the current query, the last fetched rows, and re-fetches explicitly after
//! every mutation instead of patching rows locally. Changing a filter always
//! snaps pagination back to the first page.

use bigeye_shared::{
    ActionMessage, AuditLog, Job, JobStatus, Promotion, PromoStatus, Severity, Slip, SlipStatus,
    UserSummary,
};

use crate::endpoints::PromoAction;
use crate::error::ApiResult;
use crate::http::AdminClient;

pub const DEFAULT_AUDIT_DAYS: u32 = 7;

/// Filter plus pagination for a list page. Setting the filter resets the
/// page to 1 so a narrowed result set is never viewed from a stale offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery<F> {
    filter: Option<F>,
    page: i64,
    limit: i64,
}

impl<F> PageQuery<F> {
    pub fn new(limit: i64) -> Self {
        Self {
            filter: None,
            page: 1,
            limit,
        }
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn set_filter(&mut self, filter: Option<F>) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }
}

/// Audit log query: severity, day window and free-text search all reset
/// pagination when they change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditQuery {
    severity: Option<Severity>,
    days: u32,
    search: String,
    page: i64,
    limit: i64,
}

impl AuditQuery {
    pub fn new(limit: i64) -> Self {
        Self {
            severity: None,
            days: DEFAULT_AUDIT_DAYS,
            search: String::new(),
            page: 1,
            limit,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.severity = severity;
        self.page = 1;
    }

    pub fn set_days(&mut self, days: u32) {
        self.days = days;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }
}

// ===== Users =====

/// Token proving the operator asked to delete a specific user. Deletion
/// fires only when this is passed back to [`UsersPage::confirm_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    uid: String,
    email: String,
}

impl PendingDelete {
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Email shown to (and re-typed by) the operator as the confirmation.
    pub fn email(&self) -> &str {
        &self.email
    }
}

pub struct UsersPage {
    client: AdminClient,
    search: String,
    page: i64,
    limit: i64,
    users: Vec<UserSummary>,
    total: i64,
    pages: i64,
}

impl UsersPage {
    pub fn new(client: AdminClient, limit: i64) -> Self {
        Self {
            client,
            search: String::new(),
            page: 1,
            limit,
            users: Vec::new(),
            total: 0,
            pages: 0,
        }
    }

    pub fn users(&self) -> &[UserSummary] {
        &self.users
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    pub async fn refresh(&mut self) -> ApiResult<()> {
        let res = self
            .client
            .list_users(&self.search, self.page, self.limit)
            .await?;
        self.users = res.users;
        self.total = res.total;
        self.pages = res.pages;
        Ok(())
    }

    pub async fn adjust_credits(
        &mut self,
        uid: &str,
        amount: f64,
        reason: &str,
    ) -> ApiResult<ActionMessage> {
        let res = self.client.adjust_credits(uid, amount, reason).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn suspend(&mut self, uid: &str) -> ApiResult<ActionMessage> {
        let res = self.client.suspend_user(uid).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn unsuspend(&mut self, uid: &str) -> ApiResult<ActionMessage> {
        let res = self.client.unsuspend_user(uid).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn reset_hardware(&mut self, uid: &str) -> ApiResult<ActionMessage> {
        let res = self.client.reset_hardware(uid).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn reset_password(
        &mut self,
        uid: &str,
        new_password: &str,
        reset_hardware: bool,
    ) -> ApiResult<ActionMessage> {
        let res = self
            .client
            .reset_password(uid, new_password, reset_hardware)
            .await?;
        self.refresh().await?;
        Ok(res)
    }

    /// First step of deletion: no request is sent, only a token describing
    /// what would be deleted.
    pub fn request_delete(&self, user: &UserSummary) -> PendingDelete {
        PendingDelete {
            uid: user.uid.clone(),
            email: user.email.clone(),
        }
    }

    /// Second step: the destructive call itself, followed by a re-fetch.
    pub async fn confirm_delete(&mut self, pending: PendingDelete) -> ApiResult<ActionMessage> {
        let res = self.client.delete_user(&pending.uid).await?;
        self.refresh().await?;
        Ok(res)
    }
}

// ===== Slips =====

pub struct SlipsPage {
    client: AdminClient,
    query: PageQuery<SlipStatus>,
    slips: Vec<Slip>,
    total: i64,
    pages: i64,
}

impl SlipsPage {
    pub fn new(client: AdminClient, limit: i64) -> Self {
        Self {
            client,
            query: PageQuery::new(limit),
            slips: Vec::new(),
            total: 0,
            pages: 0,
        }
    }

    pub fn slips(&self) -> &[Slip] {
        &self.slips
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn query(&self) -> &PageQuery<SlipStatus> {
        &self.query
    }

    pub fn set_filter(&mut self, status: Option<SlipStatus>) {
        self.query.set_filter(status);
    }

    pub fn set_page(&mut self, page: i64) {
        self.query.set_page(page);
    }

    pub async fn refresh(&mut self) -> ApiResult<()> {
        let res = self
            .client
            .list_slips(
                self.query.filter().copied(),
                self.query.page(),
                self.query.limit(),
            )
            .await?;
        self.slips = res.slips;
        self.total = res.total;
        self.pages = res.pages;
        Ok(())
    }

    pub async fn approve(&mut self, id: &str, credit_amount: f64) -> ApiResult<ActionMessage> {
        let res = self.client.approve_slip(id, credit_amount).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn reject(&mut self, id: &str, reason: &str) -> ApiResult<ActionMessage> {
        let res = self.client.reject_slip(id, reason).await?;
        self.refresh().await?;
        Ok(res)
    }
}

// ===== Jobs =====

pub struct JobsPage {
    client: AdminClient,
    query: PageQuery<JobStatus>,
    jobs: Vec<Job>,
    total: i64,
    pages: i64,
}

impl JobsPage {
    pub fn new(client: AdminClient, limit: i64) -> Self {
        Self {
            client,
            query: PageQuery::new(limit),
            jobs: Vec::new(),
            total: 0,
            pages: 0,
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn query(&self) -> &PageQuery<JobStatus> {
        &self.query
    }

    pub fn set_filter(&mut self, status: Option<JobStatus>) {
        self.query.set_filter(status);
    }

    pub fn set_page(&mut self, page: i64) {
        self.query.set_page(page);
    }

    pub async fn refresh(&mut self) -> ApiResult<()> {
        let res = self
            .client
            .list_jobs(
                self.query.filter().copied(),
                self.query.page(),
                self.query.limit(),
            )
            .await?;
        self.jobs = res.jobs;
        self.total = res.total;
        self.pages = res.pages;
        Ok(())
    }

    pub async fn force_refund(&mut self, id: &str) -> ApiResult<ActionMessage> {
        let res = self.client.force_refund_job(id).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn cleanup(&mut self) -> ApiResult<ActionMessage> {
        let res = self.client.cleanup_jobs().await?;
        self.refresh().await?;
        Ok(res)
    }
}

// ===== Audit logs =====

pub struct AuditPage {
    client: AdminClient,
    query: AuditQuery,
    logs: Vec<AuditLog>,
    total: i64,
    pages: i64,
}

impl AuditPage {
    pub fn new(client: AdminClient, limit: i64) -> Self {
        Self {
            client,
            query: AuditQuery::new(limit),
            logs: Vec::new(),
            total: 0,
            pages: 0,
        }
    }

    pub fn logs(&self) -> &[AuditLog] {
        &self.logs
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn query(&self) -> &AuditQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut AuditQuery {
        &mut self.query
    }

    pub async fn refresh(&mut self) -> ApiResult<()> {
        let res = self
            .client
            .list_audit_logs(
                self.query.severity(),
                self.query.days(),
                self.query.search(),
                self.query.page(),
                self.query.limit(),
            )
            .await?;
        self.logs = res.logs;
        self.total = res.total;
        self.pages = res.pages;
        Ok(())
    }
}

// ===== Promotions =====

pub struct PromotionsPage {
    client: AdminClient,
    filter: Option<PromoStatus>,
    promotions: Vec<Promotion>,
}

impl PromotionsPage {
    pub fn new(client: AdminClient) -> Self {
        Self {
            client,
            filter: None,
            promotions: Vec::new(),
        }
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    pub fn filter(&self) -> Option<PromoStatus> {
        self.filter
    }

    pub fn set_filter(&mut self, status: Option<PromoStatus>) {
        self.filter = status;
    }

    pub async fn refresh(&mut self) -> ApiResult<()> {
        let res = self.client.list_promotions(self.filter).await?;
        self.promotions = res.promotions;
        Ok(())
    }

    pub async fn create(&mut self, definition: &serde_json::Value) -> ApiResult<ActionMessage> {
        let res = self.client.create_promotion(definition).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn update(
        &mut self,
        id: &str,
        definition: &serde_json::Value,
    ) -> ApiResult<ActionMessage> {
        let res = self.client.update_promotion(id, definition).await?;
        self.refresh().await?;
        Ok(res)
    }

    pub async fn run_action(&mut self, id: &str, action: PromoAction) -> ApiResult<ActionMessage> {
        let res = self.client.promotion_action(id, action).await?;
        self.refresh().await?;
        Ok(res)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap() in tests for cleaner test code
mod tests {
    use super::*;

    #[test]
    fn test_filter_change_resets_page() {
        let mut query: PageQuery<SlipStatus> = PageQuery::new(50);
        query.set_page(4);
        assert_eq!(query.page(), 4);
        query.set_filter(Some(SlipStatus::Pending));
        assert_eq!(query.page(), 1);
        assert_eq!(query.filter(), Some(&SlipStatus::Pending));
    }

    #[test]
    fn test_clearing_filter_also_resets_page() {
        let mut query: PageQuery<JobStatus> = PageQuery::new(50);
        query.set_filter(Some(JobStatus::Expired));
        query.set_page(3);
        query.set_filter(None);
        assert_eq!(query.page(), 1);
        assert_eq!(query.filter(), None);
    }

    #[test]
    fn test_page_floor_is_one() {
        let mut query: PageQuery<SlipStatus> = PageQuery::new(50);
        query.set_page(0);
        assert_eq!(query.page(), 1);
        query.set_page(-3);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_audit_query_resets_page_on_every_filter() {
        let mut query = AuditQuery::new(50);

        query.set_page(5);
        query.set_severity(Some(Severity::Error));
        assert_eq!(query.page(), 1);

        query.set_page(5);
        query.set_days(30);
        assert_eq!(query.page(), 1);

        query.set_page(5);
        query.set_search("login");
        assert_eq!(query.page(), 1);
    }

    // Port 9 is discard; any request would error rather than succeed.
    fn users_page() -> UsersPage {
        use crate::config::ClientConfig;
        use crate::session::MemorySessionStore;
        use std::sync::Arc;

        let config =
            ClientConfig::with_api_url("http://localhost:9", std::path::PathBuf::from("/dev/null"));
        let client =
            AdminClient::with_store(&config, Arc::new(MemorySessionStore::new())).unwrap();
        UsersPage::new(client, 50)
    }

    #[test]
    fn test_user_search_change_resets_page() {
        let mut page = users_page();
        page.set_page(4);
        assert_eq!(page.page(), 4);
        page.set_search("alice");
        assert_eq!(page.page(), 1);

        page.set_page(0);
        assert_eq!(page.page(), 1);
    }

    #[test]
    fn test_request_delete_sends_nothing() {
        let page = users_page();

        let user = UserSummary {
            uid: "u-1".to_string(),
            email: "ops@example.com".to_string(),
            full_name: String::new(),
            credits: 0.0,
            status: "active".to_string(),
            tier: String::new(),
            last_login: String::new(),
            created_at: String::new(),
        };
        let pending = page.request_delete(&user);
        assert_eq!(pending.uid(), "u-1");
        assert_eq!(pending.email(), "ops@example.com");
    }
}
