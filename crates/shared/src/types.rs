//! Common types used across the BigEye admin tooling
//!
//! Shapes mirror what the backend reports. Timestamps stay strings: the
//! admin surface displays them as-is and never does date arithmetic on
//! record fields.

use serde::{Deserialize, Serialize};

// =============================================================================
// Filter Enums
// =============================================================================
//
// These are *query inputs*, not record fields. Record statuses are kept as
// plain strings so an unknown server value renders instead of failing to
// deserialize.

/// Slip verification status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlipStatus {
    Pending,
    Verified,
    Rejected,
}

impl std::fmt::Display for SlipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Verified => write!(f, "VERIFIED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl std::str::FromStr for SlipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "VERIFIED" => Ok(Self::Verified),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(format!("Invalid slip status: {}", s)),
        }
    }
}

/// Job status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Reserved,
    Completed,
    Expired,
    Refunded,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reserved => write!(f, "RESERVED"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Refunded => write!(f, "REFUNDED"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RESERVED" => Ok(Self::Reserved),
            "COMPLETED" => Ok(Self::Completed),
            "EXPIRED" => Ok(Self::Expired),
            "REFUNDED" => Ok(Self::Refunded),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

/// Promotion lifecycle status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PromoStatus {
    Draft,
    Active,
    Paused,
    Cancelled,
    Expired,
}

impl std::fmt::Display for PromoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "DRAFT"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Paused => write!(f, "PAUSED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

impl std::str::FromStr for PromoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "ACTIVE" => Ok(Self::Active),
            "PAUSED" => Ok(Self::Paused),
            "CANCELLED" => Ok(Self::Cancelled),
            "EXPIRED" => Ok(Self::Expired),
            _ => Err(format!("Invalid promotion status: {}", s)),
        }
    }
}

/// Audit log severity filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

// =============================================================================
// Auth
// =============================================================================

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
}

/// Generic mutation acknowledgement (`{"message": ...}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionMessage {
    pub message: String,
}

// =============================================================================
// Dashboard
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active_users: i64,
    pub new_users_today: i64,
    pub topup_thb_today: f64,
    pub recognized_thb_today: f64,
    pub exchange_rate: f64,
    pub jobs_today: i64,
    pub errors_today: i64,
    pub success_rate: f64,
    pub pending_slips: i64,
    pub stuck_jobs: i64,
}

/// One point on a dashboard chart; the server decides which series keys
/// accompany the date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    #[serde(flatten)]
    pub series: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub revenue: Vec<ChartPoint>,
    pub users: Vec<ChartPoint>,
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub credits: f64,
    pub status: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub last_login: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub summary: UserSummary,
    #[serde(default)]
    pub hardware_id: String,
    #[serde(default)]
    pub total_topup_baht: f64,
    #[serde(default)]
    pub total_credits_used: f64,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub os_type: String,
    #[serde(default)]
    pub last_active: String,
}

/// Signed credit ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub balance_after: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

// =============================================================================
// Jobs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub job_token: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub mode: String,
    pub file_count: i64,
    pub status: String,
    pub reserved_credits: f64,
    pub actual_usage: f64,
    #[serde(default)]
    pub refund_amount: f64,
    pub success_count: i64,
    pub failed_count: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub completed_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub keyword_style: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub photo_count: i64,
    #[serde(default)]
    pub video_count: i64,
    #[serde(default)]
    pub photo_rate: f64,
    #[serde(default)]
    pub video_rate: f64,
    #[serde(default)]
    pub version: String,
}

// =============================================================================
// Slips
// =============================================================================

/// Payment slip awaiting (or past) verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slip {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub status: String,
    pub amount_detected: Option<f64>,
    pub amount_credited: Option<f64>,
    #[serde(default)]
    pub bank_ref: String,
    #[serde(default)]
    pub verification_method: String,
    #[serde(default)]
    pub reject_reason: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub verified_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipDetail {
    #[serde(flatten)]
    pub slip: Slip,
    #[serde(default)]
    pub verification_result: serde_json::Value,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

// =============================================================================
// Finance
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceDay {
    pub date: String,
    pub topup_thb: f64,
    pub topup_count: i64,
    pub recognized_thb: f64,
    pub recognized_credits: f64,
    pub new_users: i64,
    pub active_users: i64,
    pub jobs_count: i64,
    pub files_processed: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub total_topup_thb: f64,
    pub total_recognized_thb: f64,
    pub total_new_users: i64,
    pub total_jobs: i64,
    pub total_files: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceDaily {
    pub days: Vec<FinanceDay>,
    pub summary: FinanceSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceMonth {
    pub month: String,
    pub topup_thb: f64,
    pub recognized_thb: f64,
    pub deferred_revenue: f64,
    pub new_users: i64,
    pub active_users: i64,
    pub jobs_count: i64,
    pub avg_revenue_per_user: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceYtd {
    pub total_topup_thb: f64,
    pub total_recognized_thb: f64,
    pub total_deferred: f64,
    pub tax_base_estimate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceMonthly {
    pub months: Vec<FinanceMonth>,
    pub ytd: FinanceYtd,
}

// =============================================================================
// System Config
// =============================================================================

/// Versioned key-value configuration document. Sections the dashboard edits
/// are surfaced as typed accessors; everything else rides in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub exchange_rate: f64,
    #[serde(default)]
    pub credit_rates: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub bank_info: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub maintenance_message: String,
    #[serde(default)]
    pub prompts: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub blacklist: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Known config sections accepted by `PUT /admin/config/{section}`
pub const CONFIG_SECTIONS: &[&str] = &[
    "version",
    "rates",
    "bank",
    "processing",
    "maintenance",
    "blacklist",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    pub words: Vec<String>,
}

// =============================================================================
// Audit Logs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub event_type: String,
    #[serde(default)]
    pub user_id: String,
    pub severity: String,
    #[serde(default)]
    pub details: serde_json::Value,
    #[serde(default)]
    pub created_at: String,
}

// =============================================================================
// Promotions
// =============================================================================

/// Promotion record. Conditions, reward formula and display metadata are
/// server-defined documents the dashboard edits as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub promo_id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub conditions: serde_json::Value,
    #[serde(default)]
    pub reward: serde_json::Value,
    #[serde(default)]
    pub display: serde_json::Value,
    #[serde(default)]
    pub stats: serde_json::Value,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoStats {
    #[serde(default)]
    pub total_used: i64,
    #[serde(default)]
    pub total_bonus_credits: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// Paginated List Responses
// =============================================================================
//
// The backend keys each collection by its resource name, so the list
// envelopes are concrete rather than generic.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<UserSummary>,
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    pub pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobList {
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipList {
    pub slips: Vec<Slip>,
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    pub pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogList {
    pub logs: Vec<AuditLog>,
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    pub pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionList {
    pub promotions: Vec<Promotion>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap() in tests for cleaner test code
mod tests {
    use super::*;

    #[test]
    fn test_slip_status_display_and_parse() {
        assert_eq!(format!("{}", SlipStatus::Pending), "PENDING");
        assert_eq!("verified".parse::<SlipStatus>().unwrap(), SlipStatus::Verified);
        assert!("bogus".parse::<SlipStatus>().is_err());
    }

    #[test]
    fn test_job_status_roundtrip() {
        for s in ["RESERVED", "COMPLETED", "EXPIRED", "REFUNDED"] {
            let parsed: JobStatus = s.parse().unwrap();
            assert_eq!(format!("{}", parsed), s);
        }
    }

    #[test]
    fn test_promo_status_parse_case_insensitive() {
        assert_eq!("paused".parse::<PromoStatus>().unwrap(), PromoStatus::Paused);
        assert_eq!("Cancelled".parse::<PromoStatus>().unwrap(), PromoStatus::Cancelled);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_user_list_deserializes_resource_keyed_envelope() {
        let body = serde_json::json!({
            "users": [{
                "uid": "u1",
                "email": "a@b.c",
                "full_name": "A",
                "credits": 12.5,
                "status": "active",
                "tier": "pro",
                "last_login": "2026-01-01T00:00:00Z",
                "created_at": "2025-01-01T00:00:00Z"
            }],
            "total": 1,
            "page": 1,
            "pages": 1
        });
        let list: UserList = serde_json::from_value(body).unwrap();
        assert_eq!(list.users.len(), 1);
        assert_eq!(list.users[0].uid, "u1");
        assert_eq!(list.total, 1);
    }

    #[test]
    fn test_user_detail_flattens_summary() {
        let body = serde_json::json!({
            "uid": "u1",
            "email": "a@b.c",
            "credits": 0.0,
            "status": "suspended",
            "hardware_id": "hw-123",
            "total_topup_baht": 500.0
        });
        let detail: UserDetail = serde_json::from_value(body).unwrap();
        assert_eq!(detail.summary.status, "suspended");
        assert_eq!(detail.hardware_id, "hw-123");
    }

    #[test]
    fn test_slip_nullable_amounts() {
        let body = serde_json::json!({
            "id": "s1",
            "status": "PENDING",
            "amount_detected": null,
            "amount_credited": null,
            "bank_ref": "KBANK-001"
        });
        let slip: Slip = serde_json::from_value(body).unwrap();
        assert!(slip.amount_detected.is_none());
        assert_eq!(slip.bank_ref, "KBANK-001");
    }

    #[test]
    fn test_chart_point_keeps_server_series() {
        let body = serde_json::json!({
            "date": "2026-08-01",
            "topup_thb": 1200.0,
            "recognized_thb": 800.0
        });
        let point: ChartPoint = serde_json::from_value(body).unwrap();
        assert_eq!(point.date, "2026-08-01");
        assert_eq!(point.series["topup_thb"], 1200.0);
    }

    #[test]
    fn test_system_config_unknown_keys_survive() {
        let body = serde_json::json!({
            "exchange_rate": 4.0,
            "maintenance_mode": false,
            "app_latest_version": "2.1.0"
        });
        let cfg: SystemConfig = serde_json::from_value(body).unwrap();
        assert_eq!(cfg.exchange_rate, 4.0);
        assert_eq!(cfg.extra["app_latest_version"], "2.1.0");
    }

    #[test]
    fn test_promotion_kind_rename() {
        let body = serde_json::json!({
            "promo_id": "p1",
            "name": "Welcome",
            "type": "WELCOME_BONUS",
            "status": "DRAFT"
        });
        let promo: Promotion = serde_json::from_value(body).unwrap();
        assert_eq!(promo.kind, "WELCOME_BONUS");
        assert!(promo.code.is_none());
    }
}
