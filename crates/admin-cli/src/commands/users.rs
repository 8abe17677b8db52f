//! User management commands

use anyhow::{bail, Result};
use bigeye_client::{AdminClient, UsersPage};

use crate::cli::UsersAction;
use crate::output;

pub async fn run(client: &AdminClient, action: UsersAction, page_size: i64) -> Result<()> {
    // Mutations go through the page loader so the post-mutation re-fetch
    // always runs; reads hit the endpoints directly.
    let mut page = UsersPage::new(client.clone(), page_size);
    match action {
        UsersAction::List { search, page: num } => list(&mut page, &search, num).await,
        UsersAction::Show { uid } => show(client, &uid).await,
        UsersAction::Transactions { uid, limit } => transactions(client, &uid, limit).await,
        UsersAction::Jobs { uid, limit } => jobs(client, &uid, limit).await,
        UsersAction::AdjustCredits {
            uid,
            amount,
            reason,
        } => {
            let res = page.adjust_credits(&uid, amount, &reason).await?;
            println!("{}", res.message);
            Ok(())
        }
        UsersAction::Suspend { uid } => {
            let res = page.suspend(&uid).await?;
            println!("{}", res.message);
            Ok(())
        }
        UsersAction::Unsuspend { uid } => {
            let res = page.unsuspend(&uid).await?;
            println!("{}", res.message);
            Ok(())
        }
        UsersAction::ResetHardware { uid } => {
            let res = page.reset_hardware(&uid).await?;
            println!("{}", res.message);
            Ok(())
        }
        UsersAction::ResetPassword {
            uid,
            password,
            reset_hardware,
        } => {
            let res = page.reset_password(&uid, &password, reset_hardware).await?;
            println!("{}", res.message);
            Ok(())
        }
        UsersAction::Delete { uid, yes } => delete(client, &mut page, &uid, yes).await,
    }
}

async fn list(users: &mut UsersPage, search: &str, page: i64) -> Result<()> {
    users.set_search(search);
    users.set_page(page);
    users.refresh().await?;

    let rows: Vec<Vec<String>> = users
        .users()
        .iter()
        .map(|u| {
            vec![
                u.uid.clone(),
                u.email.clone(),
                u.full_name.clone(),
                format!("{:.2}", u.credits),
                u.status.clone(),
                u.tier.clone(),
                u.last_login.clone(),
            ]
        })
        .collect();
    output::print_table(
        &["UID", "Email", "Name", "Credits", "Status", "Tier", "Last login"],
        &rows,
    );
    output::print_pagination(users.page(), users.pages(), users.total());
    Ok(())
}

async fn show(client: &AdminClient, uid: &str) -> Result<()> {
    let user = client.get_user(uid).await?;
    println!("UID            {}", user.summary.uid);
    println!("Email          {}", user.summary.email);
    println!("Name           {}", user.summary.full_name);
    println!("Status         {}", user.summary.status);
    println!("Tier           {}", user.summary.tier);
    println!("Credits        {:.2}", user.summary.credits);
    println!("Topups (THB)   {:.2}", user.total_topup_baht);
    println!("Credits used   {:.2}", user.total_credits_used);
    println!("Hardware ID    {}", user.hardware_id);
    println!("App version    {}", user.app_version);
    println!("OS             {}", user.os_type);
    println!("Last active    {}", user.last_active);
    println!("Created        {}", user.summary.created_at);
    Ok(())
}

async fn transactions(client: &AdminClient, uid: &str, limit: i64) -> Result<()> {
    let res = client.user_transactions(uid, limit).await?;
    let rows: Vec<Vec<String>> = res
        .transactions
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.kind.clone(),
                format!("{:+.2}", t.amount),
                format!("{:.2}", t.balance_after),
                t.description.clone(),
            ]
        })
        .collect();
    output::print_table(&["Date", "Type", "Amount", "Balance", "Description"], &rows);
    Ok(())
}

async fn jobs(client: &AdminClient, uid: &str, limit: i64) -> Result<()> {
    let res = client.user_jobs(uid, limit).await?;
    let rows: Vec<Vec<String>> = res
        .jobs
        .iter()
        .map(|j| {
            vec![
                j.id.clone(),
                j.status.clone(),
                j.file_count.to_string(),
                format!("{:.2}", j.reserved_credits),
                j.created_at.clone(),
            ]
        })
        .collect();
    output::print_table(&["Job", "Status", "Files", "Reserved", "Created"], &rows);
    Ok(())
}

/// Deletion walks the full two-step path: the operator re-types the account
/// email before the destructive call goes out.
async fn delete(client: &AdminClient, page: &mut UsersPage, uid: &str, yes: bool) -> Result<()> {
    let detail = client.get_user(uid).await?;
    let pending = page.request_delete(&detail.summary);

    if !yes {
        println!(
            "This permanently deletes {} ({}) and all associated data.",
            pending.email(),
            pending.uid()
        );
        let typed = output::prompt_line("Type the account email to confirm")?;
        if typed != pending.email() {
            bail!("Email mismatch; nothing was deleted");
        }
    }

    let res = page.confirm_delete(pending).await?;
    println!("{}", res.message);
    Ok(())
}
