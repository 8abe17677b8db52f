//! Job monitoring commands

use anyhow::{bail, Result};
use bigeye_client::{AdminClient, JobsPage};

use crate::cli::JobsAction;
use crate::output;

pub async fn run(client: &AdminClient, action: JobsAction, page_size: i64) -> Result<()> {
    let mut jobs = JobsPage::new(client.clone(), page_size);
    match action {
        JobsAction::List { status, page } => {
            jobs.set_filter(status);
            jobs.set_page(page);
            jobs.refresh().await?;

            let rows: Vec<Vec<String>> = jobs
                .jobs()
                .iter()
                .map(|j| {
                    vec![
                        j.id.clone(),
                        j.user_id.clone(),
                        j.status.clone(),
                        j.file_count.to_string(),
                        format!("{:.2}", j.reserved_credits),
                        format!("{:.2}", j.actual_usage),
                        j.created_at.clone(),
                    ]
                })
                .collect();
            output::print_table(
                &["Job", "User", "Status", "Files", "Reserved", "Used", "Created"],
                &rows,
            );
            output::print_pagination(jobs.query().page(), jobs.pages(), jobs.total());
            Ok(())
        }
        JobsAction::Show { id } => {
            let detail = client.get_job(&id).await?;
            println!("Job         {}", detail.job.id);
            println!("User        {}", detail.job.user_id);
            println!("Status      {}", detail.job.status);
            println!("Mode        {}", detail.job.mode);
            println!("Model       {}", detail.model);
            println!("Files       {} ({} photos, {} videos)",
                detail.job.file_count, detail.photo_count, detail.video_count);
            println!("Reserved    {:.2}", detail.job.reserved_credits);
            println!("Used        {:.2}", detail.job.actual_usage);
            println!("Refunded    {:.2}", detail.job.refund_amount);
            println!("Succeeded   {}", detail.job.success_count);
            println!("Failed      {}", detail.job.failed_count);
            println!("Created     {}", detail.job.created_at);
            println!("Completed   {}", detail.job.completed_at);
            Ok(())
        }
        JobsAction::Refund { id, yes } => {
            if !yes && !output::confirm(&format!("Force-refund job {id}?"))? {
                bail!("Cancelled");
            }
            let res = jobs.force_refund(&id).await?;
            println!("{}", res.message);
            Ok(())
        }
        JobsAction::Cleanup { yes } => {
            if !yes && !output::confirm("Refund all stuck jobs?")? {
                bail!("Cancelled");
            }
            let res = jobs.cleanup().await?;
            println!("{}", res.message);
            Ok(())
        }
    }
}
