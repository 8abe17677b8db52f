//! Payment slip commands

use anyhow::Result;
use bigeye_client::{AdminClient, SlipsPage};
use bigeye_shared::Slip;

use crate::cli::SlipsAction;
use crate::output;

pub async fn run(client: &AdminClient, action: SlipsAction, page_size: i64) -> Result<()> {
    let mut slips = SlipsPage::new(client.clone(), page_size);
    match action {
        SlipsAction::List { status, page } => {
            slips.set_filter(status);
            slips.set_page(page);
            slips.refresh().await?;

            print_slips(slips.slips());
            output::print_pagination(slips.query().page(), slips.pages(), slips.total());
            Ok(())
        }
        SlipsAction::Show { id } => {
            let detail = client.get_slip(&id).await?;
            println!("Slip           {}", detail.slip.id);
            println!("User           {}", detail.slip.user_id);
            println!("Status         {}", detail.slip.status);
            println!("Detected (THB) {}", fmt_amount(detail.slip.amount_detected));
            println!("Credited       {}", fmt_amount(detail.slip.amount_credited));
            println!("Bank ref       {}", detail.slip.bank_ref);
            println!("Method         {}", detail.slip.verification_method);
            if !detail.slip.reject_reason.is_empty() {
                println!("Reject reason  {}", detail.slip.reject_reason);
            }
            println!("Uploaded       {}", detail.slip.created_at);
            if !detail.verification_result.is_null() {
                println!(
                    "Verification   {}",
                    serde_json::to_string_pretty(&detail.verification_result)?
                );
            }
            Ok(())
        }
        SlipsAction::Approve { id, amount } => {
            let res = slips.approve(&id, amount).await?;
            println!("{}", res.message);
            Ok(())
        }
        SlipsAction::Reject { id, reason } => {
            let res = slips.reject(&id, &reason).await?;
            println!("{}", res.message);
            Ok(())
        }
    }
}

fn print_slips(slips: &[Slip]) {
    let rows: Vec<Vec<String>> = slips
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.user_id.clone(),
                s.status.clone(),
                fmt_amount(s.amount_detected),
                fmt_amount(s.amount_credited),
                s.created_at.clone(),
            ]
        })
        .collect();
    output::print_table(
        &["Slip", "User", "Status", "Detected", "Credited", "Uploaded"],
        &rows,
    );
}

fn fmt_amount(amount: Option<f64>) -> String {
    match amount {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}
