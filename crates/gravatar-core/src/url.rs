use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{AvatarRequest, EmailHash};

const GRAVATAR_BASE_URL: &str = "gravatar.com/avatar/";
const DEFAULT_RATING: &str = "g";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarUrl(pub(crate) String);

impl AvatarUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AvatarUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn avatar_url(request: &AvatarRequest) -> AvatarUrl {
    let hash = EmailHash::of(&request.normalized_email());
    AvatarUrl(compose(request, &hash))
}

pub(crate) fn compose(request: &AvatarRequest, hash: &EmailHash) -> String {
    let protocol = request.protocol();
    let mut url = format!(
        "{}://{}.{}{}",
        protocol.scheme(),
        protocol.subdomain(),
        GRAVATAR_BASE_URL,
        hash
    );

    // Parameter order is s, r, d, f; consumers match on prefixes.
    url.push_str(&format!("?s={}", request.size));
    url.push_str(&format!("&r={}", DEFAULT_RATING));
    if let Some(default_image) = request.default_image() {
        url.push_str("&d=");
        url.push_str(&urlencoding::encode(default_image));
    }
    if request.force_default_image {
        url.push_str("&f=y");
    }
    url
}
