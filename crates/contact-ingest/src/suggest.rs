//! Starter configuration from header-name heuristics.

use std::path::Path;

use crate::config::{SourceConfig, SourcesConfig};
use crate::error::Result;

const EMAIL_KEYS: &[&str] = &["email", "emailaddress", "mail"];
const LINKEDIN_KEYS: &[&str] = &["linkedin", "linkedinurl", "linkedinprofile", "profileurl", "url"];
const FIRST_NAME_KEYS: &[&str] = &["firstname", "first", "givenname", "forename"];
const LAST_NAME_KEYS: &[&str] = &["lastname", "last", "surname", "familyname"];
const FULL_NAME_KEYS: &[&str] = &["fullname", "name", "contactname", "displayname"];

/// Lowercases and keeps only ASCII alphanumerics: `"E-mail Address"` -> `"emailaddress"`.
fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn find_column(headers: &[String], keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        headers
            .iter()
            .find(|header| header_key(header) == *key)
            .cloned()
    })
}

/// Finds an email column by exact key first, then by any header mentioning email.
fn find_email_column(headers: &[String]) -> Option<String> {
    find_column(headers, EMAIL_KEYS).or_else(|| {
        headers
            .iter()
            .find(|header| header_key(header).contains("email"))
            .cloned()
    })
}

/// Suggests a mapping for one file from its header names.
///
/// Separate first/last columns win over a full-name column.
pub fn suggest_source_config(path: &Path, header_row: usize, headers: &[String]) -> SourceConfig {
    let first_name = find_column(headers, FIRST_NAME_KEYS);
    let last_name = find_column(headers, LAST_NAME_KEYS);
    let full_name = if first_name.is_none() && last_name.is_none() {
        find_column(headers, FULL_NAME_KEYS)
    } else {
        None
    };
    SourceConfig {
        path: path.to_path_buf(),
        id: None,
        header_row,
        email: find_email_column(headers),
        full_name,
        first_name,
        last_name,
        linkedin: find_column(headers, LINKEDIN_KEYS),
    }
}

/// Renders a configuration as commented TOML for the operator to review.
pub fn render_config_template(config: &SourcesConfig) -> Result<String> {
    let body = toml::to_string_pretty(config)?;
    let mut rendered = String::from(
        "# Contact sources, processed in order (earlier sources win merges).\n\
         # Keys per [[source]]: path, id, header_row (0-based), email,\n\
         # full_name OR first_name/last_name, linkedin.\n\
         # Sources without an email column are skipped.\n\n",
    );
    rendered.push_str(&body);
    Ok(rendered)
}
