//! Article metadata block parsing
//!
//! Each article entry file opens with a metadata block: either YAML between
//! `---` fences or a JSON object at the top of the file. The block is
//! required; a file without one is a malformed article, not an empty one.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata declared by each article in its leading block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub author: String,

    /// ISO-8601 publication date, kept as written; parsed only for ordering
    pub date: String,

    #[serde(rename = "isFeatured")]
    pub is_featured: bool,

    /// Private articles are excluded from the public listing
    #[serde(rename = "isPrivate", default)]
    pub is_private: bool,
}

impl ArticleMetadata {
    /// Parse the metadata block from an article's content.
    /// Returns (metadata, remaining_content).
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        // YAML metadata block (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // JSON metadata block ({"title": ...)
        if content.starts_with('{') {
            return Self::parse_json(content);
        }

        Err(anyhow!("missing metadata block"))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        let end_pos = rest
            .find("\n---")
            .ok_or_else(|| anyhow!("unterminated metadata block"))?;

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        let meta: ArticleMetadata =
            serde_yaml::from_str(yaml_content).context("invalid YAML metadata block")?;

        Ok((meta, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        // Find the matching closing brace
        let mut depth = 0;
        let mut end_pos = 0;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos == 0 {
            return Err(anyhow!("unterminated metadata block"));
        }

        let json_content = &content[..end_pos];
        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);

        let meta: ArticleMetadata =
            serde_json::from_str(json_content).context("invalid JSON metadata block")?;

        Ok((meta, remaining))
    }

    /// Parse the declared date into a sortable value
    pub fn parse_date(&self) -> Result<DateTime<Utc>> {
        parse_date_string(&self.date)
            .ok_or_else(|| anyhow!("unrecognized date format: {}", self.date))
    }
}

/// Parse an ISO-8601 date string in the formats articles commonly use
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // Full RFC 3339 (with offset)
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Date-time without offset, taken as UTC
    let datetime_formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }

    // Date only, taken as midnight UTC
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
    }

    None
}
