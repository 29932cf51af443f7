use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use gravatar_core::{normalize_email, EmailHash};

#[derive(Debug, Args)]
pub struct HashArgs {
    pub email: Option<String>,
}

pub fn print_hash(json: bool, args: HashArgs) -> Result<()> {
    let normalized = normalize_email(args.email.as_deref());
    let hash = EmailHash::of(&normalized);

    if json {
        print_json(&serde_json::json!({ "email": normalized, "hash": hash }))?;
    } else {
        println!("{}", hash);
    }
    Ok(())
}
