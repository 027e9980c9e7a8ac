use thiserror::Error;

/// A `site/<label>` section that was rejected while building the registry.
///
/// None of these abort the build: the section is skipped and the next one
/// is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("Ignoring empty site name (section \"{section}\").")]
    EmptySiteName { section: String },

    #[error(
        "Forbidden character(s) found in site name \"{label}\". Forbidden characters list \"{forbidden}\"",
        forbidden = crate::registry::FORBIDDEN_CHARS
    )]
    ForbiddenCharacters { label: String },

    #[error("Ignoring duplicated site \"{label}\" defined in section \"{section}\".")]
    DuplicateSite { label: String, section: String },

    #[error("Ignoring site \"{label}\" defined in section \"{section}\" with empty \"url\".")]
    EmptyUrl { label: String, section: String },

    #[error("Placeholder \"{{itemId}}\" not found in URL of site \"{label}\". Site ignored.")]
    MissingPlaceholder { label: String },
}

/// A line of configuration text that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct ParseWarning {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid item payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("item payload has an empty site key")]
    EmptySite,
}

/// Why a confirmed item could not be resolved to a URL.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("could not decode item \"{label}\": {source}")]
    PayloadDecode {
        label: String,
        #[source]
        source: PayloadError,
    },

    #[error("Could not execute item \"{label}\". Site \"{site}\" not found.")]
    UnknownSite { label: String, site: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_characters_message_lists_set() {
        let warning = ConfigWarning::ForbiddenCharacters {
            label: "Bad/Name".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("Bad/Name"));
        assert!(msg.contains(":;,/|\\"));
    }

    #[test]
    fn test_missing_placeholder_message_shows_braces() {
        let warning = ConfigWarning::MissingPlaceholder {
            label: "Jira".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Placeholder \"{itemId}\" not found in URL of site \"Jira\". Site ignored."
        );
    }

    #[test]
    fn test_unknown_site_names_item_and_key() {
        let err = LookupError::UnknownSite {
            label: "WorkItem Site Jira".to_string(),
            site: "jira".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("WorkItem Site Jira"));
        assert!(msg.contains("\"jira\""));
    }
}
