//! Web content fetching with markdown extraction
//!
//! The one service that performs real I/O. HTML responses are reduced
//! to a markdown-like outline (title, headings, paragraphs, list items,
//! block quotes) by a small tag scanner; everything else passes through
//! as text. Content is windowed by character offsets so callers can
//! page through long documents.

use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::error::MapMindError;

/// Tags whose entire subtree is noise for text extraction
const STRIP_ALWAYS: [&str; 4] = ["script", "style", "meta", "link"];
/// Page chrome additionally dropped for markdown conversion
const STRIP_CHROME: [&str; 4] = ["nav", "footer", "header", "aside"];

const BLOCK_TAGS: [&str; 9] = ["h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "blockquote"];

/// Build the shared HTTP client used by all fetch operations
pub fn build_client(timeout_seconds: u64, user_agent: &str) -> Result<reqwest::Client, MapMindError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()
        .map_err(|e| MapMindError::general(format!("Failed to build HTTP client: {e}")))
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

/// Locate `<tag ...>` at or after `from`, case-insensitive, requiring a
/// word boundary after the tag name
fn find_open_tag(lower: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let needle = format!("<{tag}");
    let mut search = from;
    while let Some(rel) = lower[search..].find(&needle) {
        let start = search + rel;
        let after = start + needle.len();
        let boundary = lower[after..]
            .chars()
            .next()
            .is_none_or(|c| c == '>' || c.is_whitespace() || c == '/');
        if boundary {
            if let Some(close_rel) = lower[after..].find('>') {
                return Some((start, after + close_rel + 1));
            }
            return None;
        }
        search = after;
    }
    None
}

/// Remove whole `<tag>...</tag>` subtrees for each listed tag
fn strip_elements(html: &str, tags: &[&str]) -> String {
    let mut result = html.to_string();
    for tag in tags {
        loop {
            // ASCII lowercasing keeps byte offsets valid in `result`.
            let lower = result.to_ascii_lowercase();
            let Some((start, content_start)) = find_open_tag(&lower, tag, 0) else {
                break;
            };
            let closing = format!("</{tag}>");
            let end = match lower[content_start..].find(&closing) {
                Some(rel) => content_start + rel + closing.len(),
                // Unclosed void tags like <meta> drop just the tag itself.
                None => content_start,
            };
            result.replace_range(start..end, "");
        }
    }
    result
}

/// Strip all remaining tags and collapse the text to clean lines
fn inner_text(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    let decoded = decode_entities(&text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Readable text from an HTML document, one block per line
pub fn extract_text(html: &str) -> String {
    let cleaned = strip_elements(html, &STRIP_ALWAYS);
    cleaned
        .lines()
        .map(inner_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn find_block(lower: &str, from: usize) -> Option<(usize, &'static str)> {
    BLOCK_TAGS
        .iter()
        .filter_map(|tag| find_open_tag(lower, tag, from).map(|(start, _)| (start, *tag)))
        .min_by_key(|(start, _)| *start)
}

/// Reduce an HTML document to a markdown-like outline with a trailing
/// source line
pub fn to_markdown(html: &str, url: &str) -> String {
    let cleaned = strip_elements(html, &STRIP_ALWAYS);
    let cleaned = strip_elements(&cleaned, &STRIP_CHROME);
    let lower = cleaned.to_ascii_lowercase();

    let mut markdown = Vec::new();

    if let Some((_, title_start)) = find_open_tag(&lower, "title", 0) {
        if let Some(rel) = lower[title_start..].find("</title>") {
            let title = inner_text(&cleaned[title_start..title_start + rel]);
            if !title.is_empty() {
                markdown.push(format!("# {title}\n"));
            }
        }
    }

    let mut cursor = 0;
    while let Some((start, tag)) = find_block(&lower, cursor) {
        // Re-find for the content start of this specific tag.
        let Some((_, content_start)) = find_open_tag(&lower, tag, start) else {
            break;
        };
        let closing = format!("</{tag}>");
        let (content_end, next) = match lower[content_start..].find(&closing) {
            Some(rel) => (
                content_start + rel,
                content_start + rel + closing.len(),
            ),
            None => (lower.len(), lower.len()),
        };
        let text = inner_text(&cleaned[content_start..content_end]);
        if !text.is_empty() {
            let line = match tag {
                "h1" => format!("\n# {text}\n"),
                "h2" => format!("\n## {text}\n"),
                "h3" => format!("\n### {text}\n"),
                "h4" => format!("\n#### {text}\n"),
                "h5" => format!("\n##### {text}\n"),
                "h6" => format!("\n###### {text}\n"),
                "li" => format!("- {text}"),
                "blockquote" => format!("> {text}\n"),
                _ => format!("{text}\n"),
            };
            markdown.push(line);
        }
        cursor = next;
    }

    let mut result = markdown.join("\n");
    result.push_str(&format!("\n\n---\nSource: {url}\n"));
    result
}

/// Window a document by character offsets
///
/// Returns the slice and whether content remains past its end. A start
/// index at or beyond the end of the document yields an empty,
/// non-truncated slice.
pub fn window(content: &str, start_index: usize, max_length: usize) -> (String, bool) {
    let total = content.chars().count();
    if start_index >= total {
        return (String::new(), false);
    }
    // saturating_add: start_index + max_length can exceed usize::MAX
    // for caller-supplied offsets.
    let end = start_index.saturating_add(max_length).min(total);
    let slice: String = content
        .chars()
        .skip(start_index)
        .take(end - start_index)
        .collect();
    (slice, end < total)
}

/// Caller-tunable fetch behavior, all fields defaulted
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub max_length: usize,
    pub start_index: usize,
    /// Skip markdown conversion and return cleaned plain text
    pub raw: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_length: 5000,
            start_index: 0,
            raw: false,
        }
    }
}

/// Response for a single fetch operation
#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    pub url: String,
    pub content: String,
    pub content_type: String,
    pub status_code: u16,
    pub length: usize,
    pub truncated: bool,
    pub total_length: usize,
}

fn validate_url(url: &str) -> Result<reqwest::Url, MapMindError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|_| MapMindError::fetch("Invalid URL format", url))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(MapMindError::fetch("Invalid URL format", url));
    }
    Ok(parsed)
}

fn request_error(url: &str, error: &reqwest::Error) -> MapMindError {
    if error.is_timeout() {
        MapMindError::fetch("Request timed out", url)
    } else {
        MapMindError::fetch(format!("Request failed: {error}"), url)
    }
}

/// Fetch one URL, extract its content, and window it
#[instrument(skip(client))]
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    options: FetchOptions,
) -> Result<FetchResponse, MapMindError> {
    let parsed = validate_url(url)?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| request_error(url, &e))?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(MapMindError::Fetch {
            message: format!("HTTP error: {}", status.as_u16()),
            url: url.to_string(),
            status_code: Some(status.as_u16()),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();

    let body = response.text().await.map_err(|e| request_error(url, &e))?;
    debug!("Fetched {} bytes from {}", body.len(), url);

    let content = if content_type.contains("text/html") {
        if options.raw {
            extract_text(&body)
        } else {
            to_markdown(&body, url)
        }
    } else {
        body
    };

    let total_length = content.chars().count();
    let (content, truncated) = window(&content, options.start_index, options.max_length);

    Ok(FetchResponse {
        url: url.to_string(),
        length: content.chars().count(),
        content,
        content_type,
        status_code: status.as_u16(),
        truncated,
        total_length,
    })
}

/// Response for the parallel multi-fetch operation
#[derive(Debug, Clone, Serialize)]
pub struct MultiFetchResponse {
    pub total_urls: usize,
    pub successful: usize,
    pub failed: usize,
    /// Per-URL envelopes, success or failure, in request order
    pub results: Vec<Value>,
}

/// Fetch several URLs concurrently; individual failures become failure
/// envelopes instead of failing the batch
#[instrument(skip(client))]
pub async fn fetch_multiple(
    client: &reqwest::Client,
    urls: &[String],
    max_length: usize,
) -> Result<MultiFetchResponse, MapMindError> {
    let options = FetchOptions {
        max_length,
        ..Default::default()
    };
    let outcomes = join_all(urls.iter().map(|url| fetch(client, url, options))).await;

    let mut successful = 0;
    let results: Vec<Value> = outcomes
        .into_iter()
        .map(|outcome| match outcome {
            Ok(response) => {
                successful += 1;
                let mut body = serde_json::to_value(&response).unwrap_or_else(|_| json!({}));
                body["success"] = json!(true);
                body
            }
            Err(error) => error.envelope(),
        })
        .collect();

    Ok(MultiFetchResponse {
        total_urls: urls.len(),
        successful,
        failed: urls.len() - successful,
        results,
    })
}
