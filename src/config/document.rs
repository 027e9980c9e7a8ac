use ini::{Ini, ParseOption};

use crate::error::ParseWarning;

/// A parsed INI-style configuration document.
///
/// Sections keep the order in which they first appear. Keys are
/// case-insensitive; section names are matched exactly.
///
/// Example:
/// ```ini
/// [main]
/// item_label_format = WorkItem Site {site_name}
///
/// [site/Jira]
/// url = https://jira.example.com/browse/{itemId}
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigDocument {
    ini: Ini,
    sections: Vec<String>,
    warnings: Vec<ParseWarning>,
}

impl ConfigDocument {
    /// Parse configuration text. Never fails: text that cannot be parsed
    /// is recorded as a warning and yields an empty document.
    pub fn parse(text: &str) -> Self {
        let opt = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };

        match Ini::load_from_str_opt(text, opt) {
            Ok(ini) => Self::from_ini(ini),
            Err(e) => {
                let warning = ParseWarning {
                    line: e.line,
                    reason: e.msg.to_string(),
                };
                tracing::warn!("Configuration {}", warning);
                Self {
                    warnings: vec![warning],
                    ..Self::default()
                }
            }
        }
    }

    fn from_ini(ini: Ini) -> Self {
        let mut sections: Vec<String> = Vec::new();
        for name in ini.sections().flatten() {
            if !sections.iter().any(|s| s == name) {
                sections.push(name.to_string());
            }
        }

        Self {
            ini,
            sections,
            warnings: Vec::new(),
        }
    }

    /// Section names in document order. A repeated section is listed once.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    /// Value of `key` in `section`, if present. When a section or key
    /// repeats, the last value wins.
    pub fn get(&self, key: &str, section: &str) -> Option<&str> {
        self.ini
            .section_all(Some(section))
            .flat_map(|props| props.iter())
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
            .last()
    }

    /// Trimmed value of `key` in `section`, or `fallback` when absent.
    pub fn get_stripped(&self, key: &str, section: &str, fallback: &str) -> String {
        self.get(key, section).unwrap_or(fallback).trim().to_string()
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }
}
