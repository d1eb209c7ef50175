//! Route template compilation and matching.
//!
//! # Responsibilities
//! - Compile `/products/:id` style templates once, at registration
//! - Match a whole path against a compiled template
//! - Extract named parameters in declaration order
//!
//! # Design Decisions
//! - Literal text is matched literally (no regex metacharacters)
//! - A parameter matches one or more of `[A-Za-z0-9_-]`, so never spans `/`
//! - Anchored at both ends: the template must cover the entire path
//! - Parameters are greedy and backtrack, so `/:a-:b` splits `x-y-z` as `x-y` / `z`

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Error compiling a route template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("template {template:?} declares parameter {name:?} more than once")]
    DuplicateParam { template: String, name: String },
}

/// Named parameters extracted from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(IndexMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in the order the template declares them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    /// Index into `RoutePattern::param_names`.
    Param(usize),
}

/// A compiled route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    tokens: Vec<Token>,
    param_names: Vec<String>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_value_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

impl RoutePattern {
    /// Compile a template such as `/products/:id`.
    ///
    /// A `:` not followed by a name character is kept as literal text.
    pub fn compile(template: impl Into<String>) -> Result<Self, RouteError> {
        let template = template.into();
        let mut tokens = Vec::new();
        let mut param_names: Vec<String> = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != ':' || !chars.peek().is_some_and(|n| is_name_char(*n)) {
                literal.push(c);
                continue;
            }

            let mut name = String::new();
            while let Some(n) = chars.next_if(|n| is_name_char(*n)) {
                name.push(n);
            }

            if param_names.contains(&name) {
                return Err(RouteError::DuplicateParam {
                    template: template.clone(),
                    name,
                });
            }

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Param(param_names.len()));
            param_names.push(name);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self {
            template,
            tokens,
            param_names,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn matches(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }

    /// Match the whole path, returning the extracted parameters.
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        let mut state = MatchState {
            tokens: &self.tokens,
            path,
            spans: vec![(0, 0); self.param_names.len()],
            failed: vec![false; self.tokens.len() * (path.len() + 1)],
        };
        if !state.match_from(0, 0) {
            return None;
        }

        Some(
            self.param_names
                .iter()
                .zip(state.spans)
                .map(|(name, (start, end))| (name.as_str(), &path[start..end]))
                .collect(),
        )
    }
}

/// Scratch state of one match attempt.
///
/// Whether the tokens from `token` on can match the path from `pos` on does not
/// depend on earlier captures, so each `(token, pos)` failure is recorded once
/// and never retried. This bounds the work by `tokens × path length`.
struct MatchState<'a> {
    tokens: &'a [Token],
    path: &'a str,
    spans: Vec<(usize, usize)>,
    failed: Vec<bool>,
}

impl MatchState<'_> {
    fn match_from(&mut self, token: usize, pos: usize) -> bool {
        let tokens = self.tokens;
        let Some(current) = tokens.get(token) else {
            return pos == self.path.len();
        };

        let key = token * (self.path.len() + 1) + pos;
        if self.failed[key] {
            return false;
        }

        let matched = match current {
            Token::Literal(text) => {
                self.path[pos..].starts_with(text.as_str())
                    && self.match_from(token + 1, pos + text.len())
            }
            Token::Param(slot) => {
                let run = self.path.as_bytes()[pos..]
                    .iter()
                    .take_while(|b| is_value_byte(**b))
                    .count();

                (1..=run).rev().any(|len| {
                    self.spans[*slot] = (pos, pos + len);
                    self.match_from(token + 1, pos + len)
                })
            }
        };

        if !matched {
            self.failed[key] = true;
        }
        matched
    }
}
