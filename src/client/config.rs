use std::env;

use log::warn;
use url::Url;

/// Backend used when GAPFINDER_API_URL is not set.
pub const DEFAULT_API_URL: &str = "https://backend-fawn-nine-74.vercel.app";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: Url,
    /// Optional startup deep link into a results section (sample data).
    pub start_page: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_base_url: parse_base_url(env::var("GAPFINDER_API_URL").ok().as_deref()),
            start_page: env::var("GAPFINDER_START_PAGE")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> Url {
    let fallback = || Url::parse(DEFAULT_API_URL).expect("default API URL parses");
    match raw {
        Some(raw) => match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => url,
            Ok(url) => {
                warn!(
                    "GAPFINDER_API_URL has unsupported scheme '{}', using default backend",
                    url.scheme()
                );
                fallback()
            }
            Err(e) => {
                warn!("GAPFINDER_API_URL is not a valid URL ({}), using default backend", e);
                fallback()
            }
        },
        None => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_accepts_http_and_https() {
        assert_eq!(
            parse_base_url(Some("http://localhost:3000")).as_str(),
            "http://localhost:3000/"
        );
        assert_eq!(
            parse_base_url(Some("https://api.example.com")).as_str(),
            "https://api.example.com/"
        );
    }

    #[test]
    fn test_parse_base_url_falls_back_on_garbage() {
        assert_eq!(parse_base_url(Some("not a url")).as_str(), format!("{}/", DEFAULT_API_URL));
        assert_eq!(parse_base_url(Some("ftp://example.com")).as_str(), format!("{}/", DEFAULT_API_URL));
    }

    #[test]
    fn test_parse_base_url_defaults_when_unset() {
        assert_eq!(parse_base_url(None).as_str(), format!("{}/", DEFAULT_API_URL));
    }
}
