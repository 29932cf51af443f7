use crate::commands::{print_json, Context, RequestArgs};
use anyhow::{Context as _, Result};
use clap::Args;
use gravatar_core::{process, TagContext, TagOutput};
use serde::Serialize;

const HOST_TAG: &str = "gravatar";

#[derive(Debug, Args)]
pub struct ImgArgs {
    #[command(flatten)]
    pub request: RequestArgs,
    #[arg(long)]
    pub alt: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImgDto<'a> {
    tag: &'a str,
    src: Option<&'a str>,
    alt: Option<&'a str>,
    loading: Option<&'a str>,
}

pub fn print_img(ctx: &Context<'_>, args: ImgArgs) -> Result<()> {
    let mut request = args.request.into_request(ctx.config);
    if let Some(alt) = args.alt {
        request.alt = alt;
    }

    let context = TagContext::new(HOST_TAG, "cli");
    let mut output = TagOutput::new(HOST_TAG);
    process(&request, Some(&context), Some(&mut output)).with_context(|| "render avatar")?;

    if ctx.json {
        print_json(&ImgDto {
            tag: &output.tag_name,
            src: output.attribute("src"),
            alt: output.attribute("alt"),
            loading: output.attribute("loading"),
        })?;
    } else {
        println!("{}", render_markup(&output));
    }
    Ok(())
}

fn render_markup(output: &TagOutput) -> String {
    let mut markup = format!("<{}", output.tag_name);
    for (name, value) in output.attributes() {
        markup.push_str(&format!(" {}=\"{}\"", name, htmlescape::encode_minimal(value)));
    }
    markup.push('>');
    markup
}
