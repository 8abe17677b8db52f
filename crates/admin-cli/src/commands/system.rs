//! System configuration commands

use anyhow::{Context, Result};
use bigeye_client::AdminClient;

use crate::cli::{ConfigAction, DictionaryAction};

pub async fn run(client: &AdminClient, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = client.get_config().await?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Set { section, json } => {
            let payload: serde_json::Value =
                serde_json::from_str(&json).context("Payload is not valid JSON")?;
            let res = client.update_config_section(&section, &payload).await?;
            println!("{}", res.message);
            Ok(())
        }
        ConfigAction::SetPrompt { key, content } => {
            let res = client.update_prompt(&key, &content).await?;
            println!("{}", res.message);
            Ok(())
        }
        ConfigAction::Dictionary { action } => match action {
            DictionaryAction::Show => {
                let dict = client.get_dictionary().await?;
                for word in &dict.words {
                    println!("{word}");
                }
                println!();
                println!("{} words", dict.words.len());
                Ok(())
            }
            DictionaryAction::Set { words } => {
                let res = client.update_dictionary(&words).await?;
                println!("{}", res.message);
                Ok(())
            }
        },
    }
}
