//! SPF include flattening.
//!
//! Expands whitelisted `include:` mechanisms of an SPF TXT value in place,
//! recursively, so the published record needs fewer DNS lookups at
//! evaluation time. Everything else, including non-whitelisted includes,
//! is left untouched.

use std::collections::BTreeSet;

/// Maximum length of a single TXT character-string.
pub const MAX_TXT_STRING_LEN: usize = 255;

/// RFC 7208 caps evaluation at ten DNS-querying mechanisms; nesting deeper
/// than that is never useful and bounds include cycles.
pub const MAX_INCLUDE_DEPTH: usize = 10;

const VERSION_TAG: &str = "v=spf1";
const INCLUDE_PREFIX: &str = "include:";

#[derive(Debug, Clone, Default)]
pub struct SpfFlattener {
    whitelist: BTreeSet<String>,
}

impl SpfFlattener {
    /// Entries may be bare domains or full `include:domain` mechanisms.
    pub fn new<I, S>(whitelist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let whitelist = whitelist
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref().trim();
                entry
                    .strip_prefix(INCLUDE_PREFIX)
                    .unwrap_or(entry)
                    .trim_end_matches('.')
                    .to_lowercase()
            })
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { whitelist }
    }

    pub fn is_whitelisted(&self, domain: &str) -> bool {
        self.whitelist
            .contains(&domain.trim_end_matches('.').to_lowercase())
    }

    /// Whitelisted include targets named directly by `record`.
    pub fn expandable_includes(&self, record: &str) -> Vec<String> {
        record
            .split_whitespace()
            .filter_map(|token| token.strip_prefix(INCLUDE_PREFIX))
            .filter(|domain| self.is_whitelisted(domain))
            .map(|domain| domain.trim_end_matches('.').to_lowercase())
            .collect()
    }

    /// Flattens `record`, resolving include targets through `lookup`.
    ///
    /// `lookup` returns the SPF TXT value of a domain, or `None` when it
    /// cannot be fetched; the include token is then kept as written.
    pub fn flatten<F>(&self, record: &str, mut lookup: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        let terminator = record
            .split_whitespace()
            .rev()
            .find(|token| is_all_mechanism(token));

        let mut tokens = vec![VERSION_TAG.to_string()];
        self.unroll(record, &mut lookup, 0, &mut tokens);
        if let Some(all) = terminator {
            tokens.push(all.to_string());
        }
        tokens.join(" ")
    }

    fn unroll<F>(&self, record: &str, lookup: &mut F, depth: usize, out: &mut Vec<String>)
    where
        F: FnMut(&str) -> Option<String>,
    {
        for token in record.split_whitespace() {
            if token.eq_ignore_ascii_case(VERSION_TAG) || is_all_mechanism(token) {
                continue;
            }

            let expandable = token
                .strip_prefix(INCLUDE_PREFIX)
                .filter(|domain| depth < MAX_INCLUDE_DEPTH && self.is_whitelisted(domain));

            let nested = expandable
                .and_then(|domain| lookup(&domain.trim_end_matches('.').to_lowercase()));

            match nested {
                Some(nested) => self.unroll(&nested, lookup, depth + 1, out),
                None => out.push(token.to_string()),
            }
        }
    }
}

fn is_all_mechanism(token: &str) -> bool {
    let bare = token.trim_start_matches(['+', '-', '~', '?']);
    bare.eq_ignore_ascii_case("all") && bare.len() + 1 >= token.len()
}

/// Cuts a TXT value into character-strings whose concatenation is `value`.
///
/// The first string holds at most `first_limit` bytes (capped at 255), the
/// rest at most 255. Cuts fall before a space where possible.
pub fn split_txt(value: &str, first_limit: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut limit = first_limit.clamp(1, MAX_TXT_STRING_LEN);

    for (i, token) in value.split(' ').enumerate() {
        let piece = if i == 0 {
            token.to_string()
        } else {
            format!(" {}", token)
        };

        if current.len() + piece.len() <= limit {
            current.push_str(&piece);
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            limit = MAX_TXT_STRING_LEN;
        }

        let mut rest = piece.as_str();
        while rest.len() > limit {
            let first_char = rest.chars().next().map_or(1, char::len_utf8);
            let cut = floor_char_boundary(rest, limit).max(first_char);
            chunks.push(rest[..cut].to_string());
            rest = &rest[cut..];
            limit = MAX_TXT_STRING_LEN;
        }
        current.push_str(rest);
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
