//! Display helpers for certificate text: dates, download file names and XML escaping.

use chrono::NaiveDate;

/// Upper bound in bytes for a file stem, leaving room for the extension
/// under the usual 255-byte file name limit.
pub const MAX_FILE_STEM_BYTES: usize = 195;

const FILE_STEM_PREFIX: &str = "certificado-";

/// 巴西格式日期 (dd/mm/yyyy)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Builds the download file stem for a holder name.
///
/// Lowercases the name, joins whitespace runs with `-` and replaces
/// characters that are unsafe in file names with `_`. Long names are cut at a
/// char boundary so the stem never exceeds [`MAX_FILE_STEM_BYTES`].
pub fn certificate_file_stem(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    let sanitized: String = slug
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let budget = MAX_FILE_STEM_BYTES - FILE_STEM_PREFIX.len();
    let truncated = truncate_at_char_boundary(&sanitized, budget).trim_end_matches('-');

    format!("{}{}", FILE_STEM_PREFIX, truncated)
}

fn truncate_at_char_boundary(input: &str, max_bytes: usize) -> &str {
    if input.len() <= max_bytes {
        return input;
    }

    let mut end = max_bytes;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

pub fn xml_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
