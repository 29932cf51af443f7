use anyhow::Result;
use clap::Args;
use gravatar_config::AvatarConfig;
use gravatar_core::AvatarRequest;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod hash;
pub mod img;
pub mod url;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AvatarConfig,
}

/// Per-request overrides layered over the config file.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Email address; omit to render the anonymous avatar
    pub email: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i32>,
    /// Fallback image URL or keyword such as `mp` or `404`
    #[arg(long)]
    pub default_image: Option<String>,
    #[arg(long)]
    pub force_default: bool,
    /// Use plain http and the www host
    #[arg(long)]
    pub http: bool,
}

impl RequestArgs {
    pub fn into_request(self, config: &AvatarConfig) -> AvatarRequest {
        let mut request = config.request_for(self.email.as_deref());
        if let Some(size) = self.size {
            request.size = size;
        }
        if let Some(default_image) = self.default_image {
            request.default_image_url = default_image;
        }
        if self.force_default {
            request.force_default_image = true;
        }
        if self.http {
            request.prefer_https = false;
        }
        request
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
