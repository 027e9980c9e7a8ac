use crate::error::ConfigWarning;

/// Characters a site label may not contain.
pub const FORBIDDEN_CHARS: &str = ":;,/|\\";

/// Check a trimmed site label: non-empty and free of forbidden characters.
pub fn validate_site_label(label: &str, section: &str) -> Result<(), ConfigWarning> {
    if label.is_empty() {
        return Err(ConfigWarning::EmptySiteName {
            section: section.to_string(),
        });
    }

    if label.chars().any(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(ConfigWarning::ForbiddenCharacters {
            label: label.to_string(),
        });
    }

    Ok(())
}
