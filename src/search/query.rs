//! Search queries and the per-field matcher they compile to.

use regex::{Regex, RegexBuilder};

use crate::error::SearchError;

/// A free-text search expression. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    case_sensitive: bool,
    regular_expression: bool,
}

impl Query {
    pub fn new(text: impl Into<String>, case_sensitive: bool, regular_expression: bool) -> Self {
        Self {
            text: text.into(),
            case_sensitive,
            regular_expression,
        }
    }

    /// Case-insensitive, non-regex query.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    /// Copy of this query with case-sensitive matching.
    pub fn case_sensitive(&self) -> Self {
        Self {
            case_sensitive: true,
            ..self.clone()
        }
    }

    /// Copy of this query interpreted as a regular expression.
    pub fn regular_expression(&self) -> Self {
        Self {
            regular_expression: true,
            ..self.clone()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_regular_expression(&self) -> bool {
        self.regular_expression
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Compile into a field matcher. Fails only on invalid regex syntax.
    pub fn compile(&self) -> Result<Matcher, SearchError> {
        if self.is_blank() {
            return Ok(Matcher {
                kind: MatcherKind::Never,
            });
        }

        if self.regular_expression {
            let regex = RegexBuilder::new(&self.text)
                .case_insensitive(!self.case_sensitive)
                .build()
                .map_err(|e| {
                    SearchError::configuration(format!("Invalid regular expression: {}", self.text))
                        .with_source(e)
                })?;
            return Ok(Matcher {
                kind: MatcherKind::Regex(regex),
            });
        }

        let tokens = tokenize(&self.text, self.case_sensitive);
        let kind = if tokens.is_empty() {
            MatcherKind::Never
        } else {
            MatcherKind::Tokens {
                tokens,
                case_sensitive: self.case_sensitive,
            }
        };
        Ok(Matcher { kind })
    }
}

/// Predicate over a single field value.
#[derive(Debug, Clone)]
pub struct Matcher {
    kind: MatcherKind,
}

#[derive(Debug, Clone)]
enum MatcherKind {
    /// Blank query, or one with no alphanumeric content.
    Never,
    Tokens {
        tokens: Vec<String>,
        case_sensitive: bool,
    },
    Regex(Regex),
}

impl Matcher {
    /// True when the field value satisfies the query.
    ///
    /// Token mode: every query token must be a substring of at least one token
    /// of the value. Regex mode: the pattern must match somewhere in the value.
    pub fn matches(&self, value: &str) -> bool {
        match &self.kind {
            MatcherKind::Never => false,
            MatcherKind::Regex(regex) => regex.is_match(value),
            MatcherKind::Tokens {
                tokens,
                case_sensitive,
            } => {
                let value_tokens = tokenize(value, *case_sensitive);
                tokens
                    .iter()
                    .all(|q| value_tokens.iter().any(|v| v.contains(q.as_str())))
            }
        }
    }

    /// True for a matcher compiled from a blank query.
    pub fn is_never(&self) -> bool {
        matches!(self.kind, MatcherKind::Never)
    }
}

/// Split text into alphanumeric tokens, lower-casing unless `case_sensitive`.
pub fn tokenize(text: &str, case_sensitive: bool) -> Vec<String> {
    let normalized = if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    };
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
