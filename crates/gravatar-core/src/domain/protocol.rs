#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Https,
    Http,
}

impl Protocol {
    pub fn from_prefer_https(prefer_https: bool) -> Self {
        if prefer_https {
            Protocol::Https
        } else {
            Protocol::Http
        }
    }

    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        }
    }

    /// Host label in front of `gravatar.com`.
    pub fn subdomain(self) -> &'static str {
        match self {
            Protocol::Https => "secure",
            Protocol::Http => "www",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Protocol;

    #[test]
    fn prefer_https_selects_secure_host() {
        let protocol = Protocol::from_prefer_https(true);
        assert_eq!(protocol.scheme(), "https");
        assert_eq!(protocol.subdomain(), "secure");
    }

    #[test]
    fn plain_http_selects_www_host() {
        let protocol = Protocol::from_prefer_https(false);
        assert_eq!(protocol.scheme(), "http");
        assert_eq!(protocol.subdomain(), "www");
    }
}
