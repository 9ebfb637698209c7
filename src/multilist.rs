// Network Manager - Multi-Value List Policy
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Shared add/remove semantics of list-valued properties.
//!
//! Adding splits the text into items and validates every item before the
//! list is touched. Removing accepts either a positional index or a value.

use crate::models::{Error, Result};

/// Separators of plain multi-value lists.
pub const LIST_SEPARATORS: &[char] = &[' ', '\t', ','];

/// Separator of structured lists (addresses, routes, options).
pub const COMMA: &[char] = &[','];

/// How parsed items are merged into the stored list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddPolicy {
    /// Append every item, duplicates included.
    #[default]
    Append,
    /// Append items not already present.
    Unique,
    /// Drop an equal item, then append (keeps the latest position).
    MoveToEnd,
    /// Replace the whole list.
    Replace,
}

/// Split `text` on any of `separators`, dropping empty tokens.
pub fn split_items<'a>(text: &'a str, separators: &[char]) -> Vec<&'a str> {
    text.split(|c| separators.contains(&c))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Match `text` against `allowed`, case-insensitively.
///
/// An exact match wins; otherwise a unique prefix is accepted.
pub fn match_allowed(text: &str, allowed: &[&'static str]) -> Result<&'static str> {
    let input = text.trim();
    if input.is_empty() {
        return Err(Error::invalid(
            text,
            format!("'' not among [{}]", allowed.join(", ")),
        ));
    }

    let lower = input.to_ascii_lowercase();
    let mut candidate: Option<&'static str> = None;
    let mut ambiguous: Option<(&'static str, &'static str)> = None;

    for &value in allowed {
        if !value.to_ascii_lowercase().starts_with(&lower) {
            continue;
        }
        if value.len() == input.len() {
            return Ok(value);
        }
        match candidate {
            None => candidate = Some(value),
            Some(first) if ambiguous.is_none() => ambiguous = Some((first, value)),
            Some(_) => {}
        }
    }

    if let Some((a, b)) = ambiguous {
        return Err(Error::ambiguous(
            input,
            format!("'{}' is ambiguous ({} x {})", input, a, b),
        ));
    }

    candidate.ok_or_else(|| {
        Error::invalid(
            input,
            format!("'{}' not among [{}]", input, allowed.join(", ")),
        )
    })
}

/// Parse every item of `text`; nothing is returned unless all succeed.
pub fn parse_all<T, F>(text: &str, separators: &[char], mut parse: F) -> Result<Vec<T>>
where
    F: FnMut(&str) -> Result<T>,
{
    split_items(text, separators)
        .into_iter()
        .map(|item| parse(item))
        .collect()
}

/// Merge `items` into `list` according to `policy`.
pub fn add_items<T: PartialEq>(list: &mut Vec<T>, items: Vec<T>, policy: AddPolicy) {
    match policy {
        AddPolicy::Append => list.extend(items),
        AddPolicy::Unique => {
            for item in items {
                if !list.contains(&item) {
                    list.push(item);
                }
            }
        }
        AddPolicy::MoveToEnd => {
            for item in items {
                list.retain(|existing| existing != &item);
                list.push(item);
            }
        }
        AddPolicy::Replace => *list = items,
    }
}

/// Interpret `text` as a position in a list of `len` elements.
pub fn parse_index(text: &str, len: usize) -> Option<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().filter(|idx| *idx < len)
}

/// Remove by index when `text` is a valid position, otherwise by value.
///
/// `parse` validates the text the same way adding would. Removing a value
/// that is not present succeeds.
pub fn remove_index_or_value<T, F>(list: &mut Vec<T>, text: &str, parse: F) -> Result<()>
where
    T: PartialEq,
    F: FnOnce(&str) -> Result<T>,
{
    if let Some(idx) = parse_index(text, list.len()) {
        list.remove(idx);
        return Ok(());
    }

    let value = parse(text.trim())?;
    if let Some(pos) = list.iter().position(|item| item == &value) {
        list.remove(pos);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_items() {
        assert_eq!(split_items("a, b\tc,,", LIST_SEPARATORS), vec!["a", "b", "c"]);
        assert_eq!(split_items("a b,c", COMMA), vec!["a b", "c"]);
        assert!(split_items("", LIST_SEPARATORS).is_empty());
    }

    #[test]
    fn test_match_allowed() {
        const METHODS: &[&str] = &["auto", "link-local", "manual", "shared", "disabled"];
        assert_eq!(match_allowed("AUTO", METHODS).unwrap(), "auto");
        assert_eq!(match_allowed("li", METHODS).unwrap(), "link-local");

        let err = match_allowed("x", METHODS).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'x' not among [auto, link-local, manual, shared, disabled]"
        );
    }

    #[test]
    fn test_match_ambiguous() {
        const EAP: &[&str] = &["peap", "pwd", "tls"];
        let err = match_allowed("p", EAP).unwrap_err();
        assert!(matches!(err, Error::AmbiguousToken { .. }));
        assert_eq!(err.to_string(), "'p' is ambiguous (peap x pwd)");
    }

    #[test]
    fn test_exact_beats_prefix() {
        const VALUES: &[&str] = &["ip", "ipv4", "ipv6"];
        assert_eq!(match_allowed("ip", VALUES).unwrap(), "ip");
    }

    #[test]
    fn test_parse_all_is_atomic() {
        let result: Result<Vec<u32>> = parse_all("1,2,x,4", COMMA, |s| {
            s.parse::<u32>().map_err(|_| Error::not_a_number(s))
        });
        assert_eq!(result.unwrap_err().to_string(), "'x' is not a valid number");
    }

    #[test]
    fn test_add_policies() {
        let mut list = strings(&["a", "b"]);
        add_items(&mut list, strings(&["b", "c"]), AddPolicy::Append);
        assert_eq!(list, strings(&["a", "b", "b", "c"]));

        let mut list = strings(&["a", "b"]);
        add_items(&mut list, strings(&["b", "c"]), AddPolicy::Unique);
        assert_eq!(list, strings(&["a", "b", "c"]));

        let mut list = strings(&["a", "b"]);
        add_items(&mut list, strings(&["a"]), AddPolicy::MoveToEnd);
        assert_eq!(list, strings(&["b", "a"]));

        let mut list = strings(&["a", "b"]);
        add_items(&mut list, strings(&["z"]), AddPolicy::Replace);
        assert_eq!(list, strings(&["z"]));
    }

    #[test]
    fn test_remove_by_index() {
        let mut list = strings(&["a", "b", "c"]);
        remove_index_or_value(&mut list, "1", |s| Ok(s.to_string())).unwrap();
        assert_eq!(list, strings(&["a", "c"]));
    }

    #[test]
    fn test_remove_missing_value_succeeds() {
        let mut list = strings(&["a", "b", "c"]);
        remove_index_or_value(&mut list, "z", |s| Ok(s.to_string())).unwrap();
        assert_eq!(list, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_remove_large_index_falls_back_to_value() {
        let mut list = strings(&["a", "7"]);
        remove_index_or_value(&mut list, " 7 ", |s| Ok(s.to_string())).unwrap();
        assert_eq!(list, strings(&["a"]));
    }

    #[test]
    fn test_remove_validates_value() {
        let mut list = strings(&["a"]);
        let err = remove_index_or_value(&mut list, "bad", |s| {
            Err::<String, _>(Error::invalid(s, "nope"))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "nope");
        assert_eq!(list.len(), 1);
    }
}
