use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::errors::{describe_error, LookupError};
use crate::parser::{self, classify::Source};
use crate::record::DictionaryRecord;

const BING_BASE: &str = "https://cn.bing.com";
const YOUDAO_BASE: &str = "https://dict.youdao.com";
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

/// Unreserved characters stay as-is, everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub struct FetchConfig {
    pub source: Source,
    /// Overrides the service's scheme + host.
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

/// Join CLI words and collapse whitespace runs to single spaces.
pub fn normalize_query<S: AsRef<str>>(words: &[S]) -> Result<String, LookupError> {
    let joined = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    let query = parser::text::normalize(&joined);
    if query.is_empty() {
        return Err(LookupError::EmptyQuery);
    }
    Ok(query)
}

/// Request URL for `query` on `source`.
pub fn url_for(source: Source, query: &str, endpoint: Option<&str>) -> Result<Url, LookupError> {
    let encoded = utf8_percent_encode(query, COMPONENT);
    let (default_base, path) = match source {
        Source::Bing => (BING_BASE, format!("/dict/search?q={}", encoded)),
        Source::Youdao => (YOUDAO_BASE, format!("/w/{}/", encoded)),
    };
    let base = endpoint.unwrap_or(default_base).trim_end_matches('/');
    Url::parse(&format!("{}{}", base, path))
        .map_err(|e| LookupError::InvalidEndpoint(format!("{}: {}", base, e)))
}

fn build_client(timeout: Duration) -> Result<Client, LookupError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

/// GET `url`, returning the body on success and a described error otherwise.
pub async fn fetch_page(client: &Client, url: Url) -> Result<String, LookupError> {
    info!("GET {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    debug!("Upstream answered {}", status);

    if !status.is_success() {
        // a body we cannot read is treated as empty
        let body = response.text().await.unwrap_or_default();
        let status_text = status.canonical_reason().unwrap_or("request failed");
        return Err(LookupError::Upstream {
            status,
            message: describe_error(&body, status_text),
        });
    }

    Ok(response.text().await?)
}

/// One full lookup: one round trip, then classification and extraction.
pub async fn lookup(config: &FetchConfig, query: &str) -> Result<DictionaryRecord, LookupError> {
    let url = url_for(config.source, query, config.endpoint.as_deref())?;
    let client = build_client(config.timeout)?;
    let body = fetch_page(&client, url).await?;
    Ok(parser::lookup(&body, config.source))
}
