use serde::Serialize;
use tracing::trace;

use crate::domain::{AvatarRequest, EmailHash};
use crate::error::CoreError;
use crate::url::{compose, AvatarUrl};

pub const IMG_TAG: &str = "img";
pub const LOADING_LAZY: &str = "lazy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarAttributes {
    pub alt: String,
    pub loading: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarImage {
    pub url: AvatarUrl,
    pub attributes: AvatarAttributes,
}

pub fn build(request: &AvatarRequest) -> AvatarImage {
    let hash = EmailHash::of(&request.normalized_email());
    build_with_hash(request, &hash)
}

fn build_with_hash(request: &AvatarRequest, hash: &EmailHash) -> AvatarImage {
    AvatarImage {
        url: AvatarUrl(compose(request, hash)),
        attributes: AvatarAttributes {
            alt: request.alt.clone(),
            loading: LOADING_LAZY,
        },
    }
}

/// Rendering context handed over by the host templating layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagContext {
    pub tag_name: String,
    pub unique_id: String,
}

impl TagContext {
    pub fn new(tag_name: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            unique_id: unique_id.into(),
        }
    }
}

/// Element the host turns into markup. Values arrive unescaped.
pub trait AttributeSink {
    fn set_tag_name(&mut self, name: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagOutput {
    pub tag_name: String,
    attributes: Vec<(String, String)>,
}

impl TagOutput {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeSink for TagOutput {
    fn set_tag_name(&mut self, name: &str) {
        self.tag_name = name.to_string();
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }
}

/// Writes `src`, `alt` and `loading` onto `output` and retargets it as `img`.
/// Nothing is written unless both context and output are present.
pub fn process(
    request: &AvatarRequest,
    context: Option<&TagContext>,
    output: Option<&mut dyn AttributeSink>,
) -> Result<(), CoreError> {
    let context = context.ok_or(CoreError::MissingArgument("context"))?;
    let output = output.ok_or(CoreError::MissingArgument("output"))?;

    let hash = EmailHash::of(&request.normalized_email());
    let image = build_with_hash(request, &hash);
    trace!(
        tag = %context.tag_name,
        id = %context.unique_id,
        hash = %hash,
        protocol = request.protocol().scheme(),
        "render avatar"
    );

    output.set_tag_name(IMG_TAG);
    output.set_attribute("src", image.url.as_str());
    output.set_attribute("alt", &image.attributes.alt);
    output.set_attribute("loading", image.attributes.loading);
    Ok(())
}
