//! Login and logout

use anyhow::Result;
use bigeye_client::Session;

use crate::output;

pub async fn login(session: &mut Session, email: &str) -> Result<()> {
    let password = output::prompt_line("Password")?;
    session.login(email, &password).await?;
    match session.user_id() {
        Some(user_id) => println!("Logged in as {email} ({user_id})"),
        None => println!("Logged in as {email}"),
    }
    Ok(())
}

pub fn logout(session: &mut Session) -> Result<()> {
    session.logout()?;
    println!("Logged out");
    Ok(())
}
