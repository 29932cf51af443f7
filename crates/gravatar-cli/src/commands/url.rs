use crate::commands::{print_json, Context, RequestArgs};
use anyhow::Result;
use clap::Args;
use gravatar_core::avatar_url;
use tracing::debug;

#[derive(Debug, Args)]
pub struct UrlArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

pub fn print_url(ctx: &Context<'_>, args: UrlArgs) -> Result<()> {
    let request = args.request.into_request(ctx.config);
    let url = avatar_url(&request);
    debug!(size = request.size, https = request.prefer_https, "avatar url built");

    if ctx.json {
        print_json(&serde_json::json!({ "url": url }))?;
    } else {
        println!("{}", url);
    }
    Ok(())
}
