use serde::{Deserialize, Serialize};

use crate::domain::email::{normalize_email, NormalizedEmail};
use crate::domain::protocol::Protocol;

pub const DEFAULT_SIZE: i32 = 58;
pub const DEFAULT_ALT: &str = "Gravatar image";

/// Everything needed to render one avatar. Size and default image are passed
/// through to the remote service untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarRequest {
    pub email: Option<String>,
    pub size: i32,
    pub default_image_url: String,
    pub prefer_https: bool,
    pub force_default_image: bool,
    pub alt: String,
}

impl Default for AvatarRequest {
    fn default() -> Self {
        Self {
            email: None,
            size: DEFAULT_SIZE,
            default_image_url: String::new(),
            prefer_https: true,
            force_default_image: false,
            alt: DEFAULT_ALT.to_string(),
        }
    }
}

impl AvatarRequest {
    pub fn for_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    pub fn with_default_image(mut self, url: impl Into<String>) -> Self {
        self.default_image_url = url.into();
        self
    }

    pub fn with_prefer_https(mut self, prefer_https: bool) -> Self {
        self.prefer_https = prefer_https;
        self
    }

    pub fn with_force_default_image(mut self, force: bool) -> Self {
        self.force_default_image = force;
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn normalized_email(&self) -> NormalizedEmail {
        normalize_email(self.email.as_deref())
    }

    pub fn protocol(&self) -> Protocol {
        Protocol::from_prefer_https(self.prefer_https)
    }

    /// Default image with blank values treated as unset.
    pub fn default_image(&self) -> Option<&str> {
        if self.default_image_url.trim().is_empty() {
            None
        } else {
            Some(&self.default_image_url)
        }
    }
}
