//! Placeholder tokens and substitution.
//!
//! Source files carry literal sentinel tokens such as `__APP_REF__`.
//! Substitution is a single pass over the text: every token occurrence is
//! replaced and the inserted values are never re-scanned, so a config blob
//! that happens to contain a token string is spliced in verbatim.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::context::BuildContext;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__(APP_REF|APP_SHA|BUILD_TIME|APP_ENV|APP_CONFIG)__").expect("TOKEN_REGEX must compile")
});

/// A placeholder token recognized in source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// `__APP_REF__`
    Ref,
    /// `__APP_SHA__`
    Sha,
    /// `__BUILD_TIME__`
    BuildTime,
    /// `__APP_ENV__`
    Env,
    /// `__APP_CONFIG__`
    Config,
}

impl Placeholder {
    /// Every placeholder, in declaration order.
    pub fn all() -> [Placeholder; 5] {
        [
            Self::Ref,
            Self::Sha,
            Self::BuildTime,
            Self::Env,
            Self::Config,
        ]
    }

    /// The literal token as it appears in source text.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Ref => "__APP_REF__",
            Self::Sha => "__APP_SHA__",
            Self::BuildTime => "__BUILD_TIME__",
            Self::Env => "__APP_ENV__",
            Self::Config => "__APP_CONFIG__",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "APP_REF" => Some(Self::Ref),
            "APP_SHA" => Some(Self::Sha),
            "BUILD_TIME" => Some(Self::BuildTime),
            "APP_ENV" => Some(Self::Env),
            "APP_CONFIG" => Some(Self::Config),
            _ => None,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Resolved values for every placeholder.
#[derive(Debug, Clone)]
pub struct Substitutions {
    values: BTreeMap<Placeholder, String>,
}

impl Substitutions {
    /// Build the substitution table from a context and raw config text.
    pub fn new(context: &BuildContext, config_text: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(Placeholder::Ref, context.git_ref.clone());
        values.insert(Placeholder::Sha, context.sha.clone());
        values.insert(Placeholder::BuildTime, context.build_time_iso());
        values.insert(Placeholder::Env, context.env.clone());
        values.insert(Placeholder::Config, config_text.to_string());
        Self { values }
    }

    /// The value a placeholder resolves to.
    pub fn value(&self, placeholder: Placeholder) -> &str {
        self.values
            .get(&placeholder)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Replace every placeholder occurrence in `text`.
    ///
    /// Returns the substituted text and the number of tokens replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut replaced = 0;
        let output = TOKEN_REGEX.replace_all(text, |caps: &Captures| {
            replaced += 1;
            Placeholder::from_name(&caps[1])
                .map(|p| self.value(p).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        });
        (output.into_owned(), replaced)
    }
}

/// Distinct placeholders present in `text`, in declaration order.
pub fn find_placeholders(text: &str) -> Vec<Placeholder> {
    Placeholder::all()
        .into_iter()
        .filter(|p| text.contains(p.token()))
        .collect()
}
