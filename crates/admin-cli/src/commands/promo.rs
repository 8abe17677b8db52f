//! Promotion commands

use anyhow::{Context, Result};
use bigeye_client::{AdminClient, PromotionsPage};

use crate::cli::PromoCommand;
use crate::output;

pub async fn run(client: &AdminClient, action: PromoCommand) -> Result<()> {
    let mut promos = PromotionsPage::new(client.clone());
    match action {
        PromoCommand::List { status } => {
            promos.set_filter(status);
            promos.refresh().await?;

            let rows: Vec<Vec<String>> = promos
                .promotions()
                .iter()
                .map(|p| {
                    vec![
                        p.promo_id.clone(),
                        p.name.clone(),
                        p.code.clone().unwrap_or_default(),
                        p.kind.clone(),
                        p.status.clone(),
                        p.priority.to_string(),
                    ]
                })
                .collect();
            output::print_table(&["ID", "Name", "Code", "Type", "Status", "Priority"], &rows);
            println!();
            match promos.filter() {
                Some(f) => println!("{} promotions ({f})", promos.promotions().len()),
                None => println!("{} promotions", promos.promotions().len()),
            }
            Ok(())
        }
        PromoCommand::Show { id } => {
            let promo = client.get_promotion(&id).await?;
            println!("{}", serde_json::to_string_pretty(&promo)?);
            Ok(())
        }
        PromoCommand::Create { json } => {
            let definition: serde_json::Value =
                serde_json::from_str(&json).context("Definition is not valid JSON")?;
            let res = promos.create(&definition).await?;
            println!("{}", res.message);
            Ok(())
        }
        PromoCommand::Update { id, json } => {
            let definition: serde_json::Value =
                serde_json::from_str(&json).context("Definition is not valid JSON")?;
            let res = promos.update(&id, &definition).await?;
            println!("{}", res.message);
            Ok(())
        }
        PromoCommand::Action { id, action } => {
            let res = promos.run_action(&id, action).await?;
            println!("{}", res.message);
            Ok(())
        }
        PromoCommand::Stats { id } => {
            let stats = client.promotion_stats(&id).await?;
            println!("Used           {}", stats.total_used);
            println!("Bonus credits  {:.2}", stats.total_bonus_credits);
            for (key, value) in &stats.extra {
                println!("{key}  {value}");
            }
            Ok(())
        }
    }
}
