// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Environment variable interpolation for configuration files.
//!
//! Placeholders are replaced in the raw document text, before any YAML/JSON
//! parsing takes place. Supported forms:
//! - `$VAR_NAME` - bare reference, name made of `[A-Za-z0-9_]`
//! - `${VAR_NAME}` - braced reference
//! - `${VAR_NAME:default}` - braced reference with a default used when the
//!   variable is unset or empty; only the first `:` separates name and default
//! - `$$` - an escaped, literal `$`
//!
//! Names are case-insensitive: `$db_host` looks up `DB_HOST`.
//!
//! Interpolation never fails. A placeholder whose variable is missing and that
//! has no default is replaced with an empty string.
//!
//! A resolved value spanning several lines is emitted as a double-quoted scalar
//! with `\n` escapes so it stays on the line of the placeholder.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use yaml_env_config::config::env_interpolation::expand_with;
//!
//! let env = HashMap::from([("DB_HOST".to_string(), "localhost".to_string())]);
//!
//! let input = r#"
//! host: ${DB_HOST}
//! port: ${DB_PORT:5432}
//! password: pa$$word
//! "#;
//!
//! let result = expand_with(input, &env);
//! assert!(result.contains("host: localhost"));
//! assert!(result.contains("port: 5432"));
//! assert!(result.contains("password: pa$word"));
//! ```

use super::environment::{Environment, ProcessEnv};
use log::debug;

/// A placeholder found in raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The variable name exactly as written.
    pub name: &'a str,
    /// Everything after the first `:` of a braced body.
    pub default: Option<&'a str>,
    /// Whether the placeholder used the `${...}` form.
    pub braced: bool,
    /// The full source span, including `$` and braces.
    pub raw: &'a str,
}

impl Placeholder<'_> {
    /// The name used for the environment lookup.
    pub fn key(&self) -> String {
        self.name.to_uppercase()
    }
}

/// One piece of tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied through unchanged.
    Text(&'a str),
    /// A `$$` pair.
    Escape,
    Placeholder(Placeholder<'a>),
}

/// Split `text` into literal runs, escapes and placeholders.
///
/// The scan is a single left-to-right pass:
/// - `$$` becomes [`Token::Escape`] and is consumed as a pair
/// - a lone `$` directly after a `$` never starts a placeholder
/// - a braced body must close on the same line; braces nest inside it
/// - anything that does not form a placeholder stays literal text
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }

        if bytes.get(i + 1) == Some(&b'$') {
            push_text(&mut tokens, &text[literal_start..i]);
            tokens.push(Token::Escape);
            i += 2;
            literal_start = i;
            continue;
        }

        if i > 0 && bytes[i - 1] == b'$' {
            i += 1;
            continue;
        }

        match scan_placeholder(text, i) {
            Some(placeholder) => {
                push_text(&mut tokens, &text[literal_start..i]);
                i += placeholder.raw.len();
                literal_start = i;
                tokens.push(Token::Placeholder(placeholder));
            }
            None => i += 1,
        }
    }

    push_text(&mut tokens, &text[literal_start..]);
    tokens
}

fn push_text<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Try to read a placeholder starting at the `$` at `start`.
fn scan_placeholder(text: &str, start: usize) -> Option<Placeholder<'_>> {
    let bytes = text.as_bytes();
    let body_start = start + 1;

    match bytes.get(body_start) {
        Some(&b'{') => {
            let mut depth = 0usize;
            let mut end = None;
            for (offset, &b) in bytes[body_start..].iter().enumerate() {
                match b {
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            end = Some(body_start + offset);
                            break;
                        }
                    }
                    b'\n' => break,
                    _ => {}
                }
            }

            let end = end?;
            let body = &text[body_start + 1..end];
            let (name, default) = match body.split_once(':') {
                Some((name, default)) => (name, Some(default)),
                None => (body, None),
            };

            if name.is_empty() {
                return None;
            }

            Some(Placeholder {
                name,
                default,
                braced: true,
                raw: &text[start..=end],
            })
        }
        Some(&b) if is_name_byte(b) => {
            let len = bytes[body_start..]
                .iter()
                .take_while(|&&b| is_name_byte(b))
                .count();
            let end = body_start + len;

            Some(Placeholder {
                name: &text[body_start..end],
                default: None,
                braced: false,
                raw: &text[start..end],
            })
        }
        _ => None,
    }
}

/// Interpolate placeholders using the process environment.
pub fn expand(text: &str) -> String {
    expand_with(text, &ProcessEnv)
}

/// Interpolate placeholders using `env` for lookups.
pub fn expand_with<E: Environment + ?Sized>(text: &str, env: &E) -> String {
    let mut interpolator = Interpolator {
        env,
        resolved: Vec::new(),
    };
    let result = interpolator.render(text);

    // Names only, never values
    if !interpolator.resolved.is_empty() {
        debug!(
            "Interpolated environment variables: {}",
            interpolator.resolved.join(", ")
        );
    }

    result
}

/// Upper-cased names of every placeholder in `text`, in order of first use.
///
/// Braced placeholders inside default values are included; bare ones there
/// are not.
pub fn referenced_variables(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in tokenize(text) {
        let Token::Placeholder(placeholder) = token else {
            continue;
        };
        push_unique(&mut names, placeholder.key());

        let Some(default) = placeholder.default else {
            continue;
        };
        for inner in tokenize(default) {
            if let Token::Placeholder(inner) = inner {
                if inner.braced {
                    push_unique(&mut names, inner.key());
                }
            }
        }
    }
    names
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}

struct Interpolator<'e, E: ?Sized> {
    env: &'e E,
    resolved: Vec<String>,
}

impl<E: Environment + ?Sized> Interpolator<'_, E> {
    fn render(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());

        for token in tokenize(text) {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Escape => out.push('$'),
                Token::Placeholder(placeholder) => {
                    let value = match self.lookup(&placeholder) {
                        Some(value) => value,
                        None => placeholder
                            .default
                            .map(|default| self.render_default(default))
                            .unwrap_or_default(),
                    };
                    out.push_str(&quote_multiline(value));
                }
            }
        }

        out
    }

    /// Resolve braced placeholders inside a default value.
    ///
    /// Bare `$NAME` and `$$` are kept verbatim here, and the defaults of the
    /// inner placeholders are not scanned again.
    fn render_default(&mut self, default: &str) -> String {
        let mut out = String::with_capacity(default.len());

        for token in tokenize(default) {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Escape => out.push_str("$$"),
                Token::Placeholder(placeholder) if placeholder.braced => {
                    match self.lookup(&placeholder) {
                        Some(value) => out.push_str(&value),
                        None => out.push_str(placeholder.default.unwrap_or_default()),
                    }
                }
                Token::Placeholder(placeholder) => out.push_str(placeholder.raw),
            }
        }

        out
    }

    /// The environment value for `placeholder`, if set and non-empty.
    fn lookup(&mut self, placeholder: &Placeholder<'_>) -> Option<String> {
        let key = placeholder.key();
        let value = self.env.get(&key).filter(|value| !value.is_empty())?;
        push_unique(&mut self.resolved, key);
        Some(value)
    }
}

/// Render a multi-line value as a single-line double-quoted scalar.
fn quote_multiline(value: String) -> String {
    if !value.contains('\n') {
        return value;
    }

    let mut quoted = String::with_capacity(value.len() + value.len() / 16 + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
