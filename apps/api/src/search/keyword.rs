//! Keyword search over the snake catalogue.
//!
//! A keyword string is split on whitespace and each token becomes one predicate:
//! - `4`, `4m`, `1.5meters` → `length` is exactly "<n> meter" or "<n> meters"
//!   (ASCII case-insensitive). This is a text comparison, "4.0 meter" does not
//!   match token `4`.
//! - `4-6`, `4-6m` → `length` sorts between "<min> meter" and "<max> meter"
//!   inclusive, compared as strings. "10 meter" falls inside `1-2`.
//! - anything else → case-insensitive substring of name, color, pattern or head shape.
//!
//! Predicates are OR-ed: a snake matches when any token matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::AppError;
use crate::models::snake::Snake;

/// Maximum number of snakes returned by a keyword search.
pub const SNAKE_RESULT_LIMIT: usize = 10;

static LENGTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*(?:m|meter|meters)?$").expect("valid length pattern")
});

static LENGTH_RANGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)-([0-9]+(?:\.[0-9]+)?)\s*(?:m|meter|meters)?$")
        .expect("valid length range pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPredicate {
    /// Stored length equals "<number> meter" or "<number> meters".
    LengthExact { number: String },
    /// Stored length within `[lower, upper]` by string ordering.
    LengthRange { lower: String, upper: String },
    /// Lowercased needle searched in name, color, pattern and head shape.
    Text { needle: String },
}

impl TokenPredicate {
    pub fn from_token(token: &str) -> TokenPredicate {
        if let Some(caps) = LENGTH_TOKEN.captures(token) {
            return TokenPredicate::LengthExact {
                number: caps[1].to_string(),
            };
        }
        if let Some(caps) = LENGTH_RANGE_TOKEN.captures(token) {
            return TokenPredicate::LengthRange {
                lower: format!("{} meter", &caps[1]),
                upper: format!("{} meter", &caps[2]),
            };
        }
        TokenPredicate::Text {
            needle: token.to_lowercase(),
        }
    }

    pub fn matches(&self, snake: &Snake) -> bool {
        match self {
            TokenPredicate::LengthExact { number } => {
                snake.length.as_deref().is_some_and(|length| {
                    let singular = format!("{number} meter");
                    let plural = format!("{number} meters");
                    length.eq_ignore_ascii_case(&singular) || length.eq_ignore_ascii_case(&plural)
                })
            }
            TokenPredicate::LengthRange { lower, upper } => snake
                .length
                .as_deref()
                .is_some_and(|length| length >= lower.as_str() && length <= upper.as_str()),
            TokenPredicate::Text { needle } => [
                Some(snake.name.as_str()),
                snake.color.as_deref(),
                snake.pattern.as_deref(),
                snake.head_shape.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}

/// A parsed keyword query: one predicate per token, combined with OR.
#[derive(Debug, Clone)]
pub struct SnakeQuery {
    predicates: Vec<TokenPredicate>,
}

impl SnakeQuery {
    /// Fails with a validation error when the keyword is empty or whitespace-only.
    pub fn parse(keyword: &str) -> Result<Self, AppError> {
        let predicates: Vec<TokenPredicate> = keyword
            .split_whitespace()
            .map(TokenPredicate::from_token)
            .collect();

        if predicates.is_empty() {
            return Err(AppError::Validation("keyword is required".into()));
        }
        Ok(SnakeQuery { predicates })
    }

    pub fn predicates(&self) -> &[TokenPredicate] {
        &self.predicates
    }

    pub fn matches(&self, snake: &Snake) -> bool {
        self.predicates.iter().any(|p| p.matches(snake))
    }

    /// Scans the whole collection in order, keeping at most `limit` matches.
    pub fn execute(&self, snakes: Vec<Snake>, limit: usize) -> Vec<Snake> {
        snakes
            .into_iter()
            .filter(|s| self.matches(s))
            .take(limit)
            .collect()
    }
}
