//! Java `.properties` reader
//!
//! Supports the line-oriented format of `java.util.Properties.load`:
//!
//! ```text
//! # comment
//! ! also a comment
//! java.util.ArrayList = st
//! java.math.BigInteger: pure, Integer
//! java.io.File io
//! java.util.Locale$Builder = st, \
//!     LocaleBuilder
//! ```
//!
//! A `\u` escape must be followed by four hex digits; anything else is an
//! error, as it is for `Properties.load`.

use crate::error::ConfigError;

/// One `key = value` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Line the entry starts on (1-based)
    pub line: usize,
    /// Unescaped key
    pub key: String,
    /// Unescaped value
    pub value: String,
}

/// Parse properties text into entries, in file order.
///
/// Duplicate keys are all returned; consumers decide which one wins.
pub fn parse(content: &str) -> Result<Vec<Property>, ConfigError> {
    let mut properties = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let start = raw.trim_start_matches(is_blank);
        if start.is_empty() || start.starts_with('#') || start.starts_with('!') {
            continue;
        }

        let mut logical = String::from(start);
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let line = index + 1;
        let (key, value) = split_entry(&logical);
        properties.push(Property {
            line,
            key: unescape(key, line)?,
            value: unescape(value, line)?,
        });
    }
    Ok(properties)
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\x0c'
}

/// An odd number of trailing backslashes joins the next line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split at the first unescaped separator: `=`, `:` or whitespace
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, rest)
}

fn unescape(text: &str, line: usize) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or_else(|| ConfigError::MalformedEscape {
                        line,
                        escape: format!("\\u{}", hex),
                    })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}
