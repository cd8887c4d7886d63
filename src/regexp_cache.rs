// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use regex::{Captures, Regex};
use thiserror::Error;

/// Metadata carried a pattern the regex engine refused. This is a
/// data-integrity problem of the metadata, never of the number being checked.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("An error occurred while trying to create regex from `{pattern}`: {source}")]
pub struct InvalidRegexError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl InvalidRegexError {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// A metadata pattern compiled once in the two anchorings the matching code
/// needs. Wrapping the source in a non-capturing group keeps group numbers
/// intact for template substitution.
#[derive(Debug)]
pub struct CompiledPattern {
    full: Regex,
    prefix: Regex,
}

impl CompiledPattern {
    fn new(pattern: &str) -> Result<Self, InvalidRegexError> {
        let compile = |anchored: String| {
            Regex::new(&anchored).map_err(|source| InvalidRegexError {
                pattern: pattern.to_owned(),
                source,
            })
        };
        Ok(Self {
            full: compile(fast_cat::concat_str!("^(?:", pattern, ")$"))?,
            prefix: compile(fast_cat::concat_str!("^(?:", pattern, ")"))?,
        })
    }

    /// Eq of C fullMatch: the pattern has to cover the whole subject.
    pub fn matches(&self, subject: &str) -> bool {
        self.full.is_match(subject)
    }

    /// Length of the match anchored at the start of `subject`, if any.
    pub fn match_length(&self, subject: &str) -> Option<usize> {
        self.prefix.find(subject).map(|found| found.end())
    }

    pub fn matches_start(&self, subject: &str) -> bool {
        self.match_length(subject).is_some()
    }

    pub fn captures<'s>(&self, subject: &'s str) -> Option<Captures<'s>> {
        self.full.captures(subject)
    }

    pub fn captures_start<'s>(&self, subject: &'s str) -> Option<Captures<'s>> {
        self.prefix.captures(subject)
    }
}

pub struct RegexCache {
    cache: DashMap<String, Arc<CompiledPattern>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<CompiledPattern>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .cache
                .entry(pattern.to_string())
                .or_try_insert_with(|| CompiledPattern::new(pattern).map(Arc::new))?;
            Ok(entry.value().clone())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexCache;

    #[test]
    fn memoizes_by_exact_pattern() {
        let cache = RegexCache::new();
        let first = cache.get_regex(r"\d{3}").unwrap();
        let second = cache.get_regex(r"\d{3}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(1, cache.len());

        cache.get_regex(r"\d{4}").unwrap();
        assert_eq!(2, cache.len());
    }

    #[test]
    fn full_match_covers_alternations() {
        let cache = RegexCache::new();
        let pattern = cache.get_regex(r"\d{3}|\d{4}").unwrap();
        assert!(pattern.matches("1234"));
        assert!(pattern.matches("123"));
        assert!(!pattern.matches("12345"));
        assert!(!pattern.matches(""));
    }

    #[test]
    fn match_length_is_anchored_at_start() {
        let cache = RegexCache::new();
        let pattern = cache.get_regex("2[0-4]").unwrap();
        assert_eq!(Some(2), pattern.match_length("2345"));
        assert_eq!(None, pattern.match_length("1234"));
        assert!(!pattern.matches_start("5"));
    }

    #[test]
    fn malformed_pattern_is_reported() {
        let cache = RegexCache::new();
        let err = cache.get_regex("(\\d{3}").unwrap_err();
        assert_eq!("(\\d{3}", err.pattern());
        assert!(cache.is_empty());
    }

    #[test]
    fn capture_groups_keep_their_numbers() {
        let cache = RegexCache::new();
        let pattern = cache.get_regex(r"(\d{3})(\d{4})|(\d{2})").unwrap();
        let captures = pattern.captures("5551234").unwrap();
        assert_eq!("555", &captures[1]);
        assert_eq!("1234", &captures[2]);
        assert!(captures.get(3).is_none());
    }
}
