//! Command-line surface, one subcommand tree per admin page.

use bigeye_client::PromoAction;
use bigeye_shared::{JobStatus, PromoStatus, Severity, SlipStatus};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bigeye-admin")]
#[command(about = "Operator console for the BigEye backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate and persist the session
    Login {
        /// Admin account email
        email: String,
    },
    /// Drop the persisted session
    Logout,
    /// Today's stats plus revenue and signup charts
    Dashboard {
        /// Chart window in days
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// User management
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Payment slip review
    Slips {
        #[command(subcommand)]
        action: SlipsAction,
    },
    /// Job monitoring
    Jobs {
        #[command(subcommand)]
        action: JobsAction,
    },
    /// Finance reports and exports
    Finance {
        #[command(subcommand)]
        action: FinanceAction,
    },
    /// System configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Audit log search
    Audit {
        /// Filter by severity (INFO, WARNING, ERROR)
        #[arg(long)]
        severity: Option<Severity>,
        /// How many days back to search
        #[arg(long, default_value_t = 7)]
        days: u32,
        /// Free-text search
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: i64,
    },
    /// Promotion management
    Promo {
        #[command(subcommand)]
        action: PromoCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List users, newest first
    List {
        /// Match against email, name or uid
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: i64,
    },
    /// Full profile for one user
    Show { uid: String },
    /// Credit ledger for one user
    Transactions {
        uid: String,
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },
    /// Recent jobs for one user
    Jobs {
        uid: String,
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },
    /// Add or remove credits with an audit reason
    AdjustCredits {
        uid: String,
        /// Signed amount; negative removes credits
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,
        #[arg(long)]
        reason: String,
    },
    /// Block the account from logging in
    Suspend { uid: String },
    /// Lift a suspension
    Unsuspend { uid: String },
    /// Clear the hardware binding so a new machine can log in
    ResetHardware { uid: String },
    /// Set a new password
    ResetPassword {
        uid: String,
        #[arg(long)]
        password: String,
        /// Also clear the hardware binding
        #[arg(long)]
        reset_hardware: bool,
    },
    /// Permanently delete the account (asks for confirmation)
    Delete {
        uid: String,
        /// Skip the typed-email confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SlipsAction {
    List {
        /// Filter by status (PENDING, VERIFIED, REJECTED)
        #[arg(long)]
        status: Option<SlipStatus>,
        #[arg(long, default_value_t = 1)]
        page: i64,
    },
    Show {
        id: String,
    },
    /// Credit the user for this slip
    Approve {
        id: String,
        #[arg(long)]
        amount: f64,
    },
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum JobsAction {
    List {
        /// Filter by status (RESERVED, COMPLETED, EXPIRED, REFUNDED)
        #[arg(long)]
        status: Option<JobStatus>,
        #[arg(long, default_value_t = 1)]
        page: i64,
    },
    Show {
        id: String,
    },
    /// Return this job's reserved credits (asks for confirmation)
    Refund {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Bulk-refund all stuck jobs (asks for confirmation)
    Cleanup {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FinanceAction {
    /// Daily breakdown for a date range (defaults to the last 30 days)
    Daily {
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// End date, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
    },
    /// Month-by-month summary for one year
    Monthly {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Download the spreadsheet export for a date range
    Export {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Output file (defaults to bigeye_finance_<from>_<to>.xlsx)
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the full configuration document
    Show,
    /// Replace one section with a JSON payload
    Set {
        /// Section name (version, rates, bank, processing, maintenance,
        /// blacklist)
        section: String,
        /// JSON payload for the section
        #[arg(long)]
        json: String,
    },
    /// Update one prompt template by key
    SetPrompt {
        key: String,
        #[arg(long)]
        content: String,
    },
    /// Custom dictionary words
    Dictionary {
        #[command(subcommand)]
        action: DictionaryAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum DictionaryAction {
    Show,
    /// Replace the word list
    Set {
        /// Comma-separated words
        #[arg(long, value_delimiter = ',')]
        words: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PromoCommand {
    List {
        /// Filter by status (DRAFT, ACTIVE, PAUSED, CANCELLED, EXPIRED)
        #[arg(long)]
        status: Option<PromoStatus>,
    },
    Show {
        id: String,
    },
    /// Create a promotion from a JSON definition
    Create {
        #[arg(long)]
        json: String,
    },
    /// Update a promotion from a JSON definition
    Update {
        id: String,
        #[arg(long)]
        json: String,
    },
    /// Run a lifecycle action (activate, pause, resume, end, cancel)
    Action {
        id: String,
        action: PromoAction,
    },
    /// Usage and redemption stats
    Stats {
        id: String,
    },
}
