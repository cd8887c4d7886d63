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
use regex::Captures;

use super::helper_constants::{CARRIER_CODE_TOKEN, FIRST_GROUP_TOKEN, NATIONAL_PREFIX_TOKEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TemplateToken {
    Literal(String),
    /// `$1`..`$9`
    Group(usize),
    /// `$NP`
    NationalPrefix,
    /// `$FG`
    FirstGroup,
    /// `$CC`
    CarrierCode,
}

/// A format, national prefix formatting, carrier code formatting or
/// national prefix transform rule, parsed into literal text and references.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct FormatTemplate {
    tokens: Vec<TemplateToken>,
}

/// Values the non-group tokens expand to.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TemplateValues<'a> {
    pub national_prefix: &'a str,
    pub carrier_code: &'a str,
}

impl FormatTemplate {
    pub fn parse(template: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(pos) = rest.find('$') {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            let (token, consumed) = if tail.starts_with(NATIONAL_PREFIX_TOKEN) {
                (Some(TemplateToken::NationalPrefix), NATIONAL_PREFIX_TOKEN.len())
            } else if tail.starts_with(FIRST_GROUP_TOKEN) {
                (Some(TemplateToken::FirstGroup), FIRST_GROUP_TOKEN.len())
            } else if tail.starts_with(CARRIER_CODE_TOKEN) {
                (Some(TemplateToken::CarrierCode), CARRIER_CODE_TOKEN.len())
            } else {
                // Only a single digit follows the dollar, as in the metadata.
                match tail[1..].chars().next().and_then(|c| c.to_digit(10)) {
                    Some(group) => (Some(TemplateToken::Group(group as usize)), 2),
                    None => (None, 1),
                }
            };

            match token {
                Some(token) => {
                    if !literal.is_empty() {
                        tokens.push(TemplateToken::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(token);
                }
                None => literal.push('$'),
            }
            rest = &tail[consumed..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            tokens.push(TemplateToken::Literal(literal));
        }
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn render(&self, captures: &Captures<'_>, values: TemplateValues<'_>) -> String {
        let mut out = String::new();
        self.render_into(&mut out, captures, values, None);
        out
    }

    /// Renders the template, replacing its first group reference with
    /// `first_group_rule` (a national prefix or carrier code formatting
    /// rule) in which `$FG` stands for that group.
    ///
    /// Returns whether the rule was spliced in.
    pub fn render_with_first_group_rule(
        &self,
        out: &mut String,
        captures: &Captures<'_>,
        values: TemplateValues<'_>,
        first_group_rule: &FormatTemplate,
    ) -> bool {
        self.render_into(out, captures, values, Some(first_group_rule))
    }

    fn render_into(
        &self,
        out: &mut String,
        captures: &Captures<'_>,
        values: TemplateValues<'_>,
        mut first_group_rule: Option<&FormatTemplate>,
    ) -> bool {
        let mut spliced = false;
        for token in &self.tokens {
            match token {
                TemplateToken::Group(group) => match first_group_rule.take() {
                    Some(rule) => {
                        rule.render_rule_into(out, captures, values, *group);
                        spliced = true;
                    }
                    None => push_group(out, captures, *group),
                },
                other => render_plain_token(out, other, captures, values, 1),
            }
        }
        spliced
    }

    fn render_rule_into(
        &self,
        out: &mut String,
        captures: &Captures<'_>,
        values: TemplateValues<'_>,
        first_group: usize,
    ) {
        for token in &self.tokens {
            render_plain_token(out, token, captures, values, first_group);
        }
    }
}

fn render_plain_token(
    out: &mut String,
    token: &TemplateToken,
    captures: &Captures<'_>,
    values: TemplateValues<'_>,
    first_group: usize,
) {
    match token {
        TemplateToken::Literal(text) => out.push_str(text),
        TemplateToken::Group(group) => push_group(out, captures, *group),
        TemplateToken::FirstGroup => push_group(out, captures, first_group),
        TemplateToken::NationalPrefix => out.push_str(values.national_prefix),
        TemplateToken::CarrierCode => out.push_str(values.carrier_code),
    }
}

fn push_group(out: &mut String, captures: &Captures<'_>, group: usize) {
    if let Some(matched) = captures.get(group) {
        out.push_str(matched.as_str());
    }
}

/// Memoizes parsed templates by their source text, like `RegexCache` does
/// for patterns.
pub(crate) struct TemplateCache {
    cache: DashMap<String, Arc<FormatTemplate>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn get_template(&self, template: &str) -> Arc<FormatTemplate> {
        if let Some(parsed) = self.cache.get(template) {
            return parsed.value().clone();
        }
        self.cache
            .entry(template.to_owned())
            .or_insert_with(|| Arc::new(FormatTemplate::parse(template)))
            .value()
            .clone()
    }
}
