//! Parser for the Pocket CSV export format.
//!
//! Header row is `title,url,time_added,tags,status`; `time_added` is Unix
//! seconds; `tags` is pipe-delimited; `status` is ignored. Quoting follows
//! common CSV convention: double-quote delimited fields, doubled-quote
//! escaping, embedded commas and newlines allowed inside quotes.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::types::errors::CsvParseError;
use crate::types::import::ImportRecord;

/// Parses Pocket CSV text into import records.
///
/// The first non-blank logical line is a header; it is discarded without
/// being validated against an expected schema. Returns an empty `Vec` when
/// there is no data beyond the header — callers must treat that as a
/// distinct "nothing to import" condition, not an error. The parser
/// tolerates ragged rows (only the first four columns are read) and
/// currently never fails; the `Result` keeps the boundary guarded against
/// stricter future implementations.
pub fn parse_pocket_csv(text: &str) -> Result<Vec<ImportRecord>, CsvParseError> {
    let lines = split_lines(text);
    if lines.is_empty() {
        return Ok(Vec::new());
    }
    Ok(lines[1..].iter().map(|line| parse_record(line)).collect())
}

/// Splits raw CSV text into logical lines.
///
/// A line break is a record separator only outside a quoted field, so quoted
/// multi-line fields stay on one logical line. Whitespace-only lines are
/// dropped. Quote characters are kept in the line; the field splitter strips
/// them.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '\n' if !in_quotes => {
                if !current.trim().is_empty() {
                    lines.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits one logical line into fields.
///
/// Two consecutive `"` inside a quoted field emit one literal quote. A comma
/// outside quotes ends the current field. The final field is flushed even
/// without a trailing comma.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

/// Builds an import record from one logical line.
///
/// Columns are positional: `title, url, time_added, tags, status`. Missing
/// trailing columns read as empty. `title` falls back to `url` when empty.
fn parse_record(line: &str) -> ImportRecord {
    let fields = split_fields(line);
    let column = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");

    let title = column(0);
    let url = column(1);

    ImportRecord {
        id: None,
        url: url.to_string(),
        title: if title.is_empty() { url } else { title }.to_string(),
        tags: split_tags(column(3)),
        saved_at: parse_epoch_seconds(column(2)),
    }
}

/// Interprets a `time_added` column as Unix epoch seconds and renders it as
/// RFC 3339. Absent or unparsable values yield `None`; the import reducer
/// then defaults the timestamp to the import time.
fn parse_epoch_seconds(raw: &str) -> Option<String> {
    let secs: i64 = raw.trim().parse().ok()?;
    let ts = OffsetDateTime::from_unix_timestamp(secs).ok()?;
    ts.format(&Rfc3339).ok()
}

/// Splits a pipe-delimited tag column, trimming and lowercasing each piece
/// and dropping empties.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}
