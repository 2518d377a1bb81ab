//! Base template loading and the two substitution passes.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{Result, ThemeError};

/// Marker class name replaced with the flavor-specific one.
pub const BASE_CLASS_MARKER: &str = "BaseConfig";

/// Line-anchored placeholder assignments: `IDENTIFIER = "<anything>"`.
const PLACEHOLDER_PATTERN: &str = r#"(?m)^([A-Z0-9_]+)[ \t]*=[ \t]*".*?""#;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"))
}

/// The base configuration template, read once per run.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self { text }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ThemeError::TemplateNotFound(path.to_path_buf()))
            }
            Err(e) => Err(ThemeError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder identifiers the template requires, case-folded.
    pub fn required_keys(&self) -> BTreeSet<String> {
        placeholder_regex()
            .captures_iter(&self.text)
            .map(|caps| caps[1].to_lowercase())
            .collect()
    }

    /// Replace every placeholder assignment whose identifier (case-folded)
    /// appears in `colors` with that palette index. Identifiers without an
    /// entry are left untouched; repeated identifiers are substituted on
    /// every occurrence.
    pub fn substitute_colors(&self, colors: &BTreeMap<String, u8>) -> String {
        placeholder_regex()
            .replace_all(&self.text, |caps: &Captures| {
                let key = &caps[1];
                match colors.get(&key.to_lowercase()) {
                    Some(index) => format!("{key} = \"{index}\""),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Color substitution followed by class-marker substitution.
    pub fn render(&self, colors: &BTreeMap<String, u8>, class_name: &str) -> String {
        self.substitute_colors(colors)
            .replace(BASE_CLASS_MARKER, class_name)
    }
}
