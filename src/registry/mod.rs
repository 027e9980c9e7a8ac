mod validation;

pub use validation::{validate_site_label, FORBIDDEN_CHARS};

use crate::config::{ConfigDocument, MainSettings};
use crate::error::ConfigWarning;

pub const CONFIG_SECTION_SITE: &str = "site";
pub const ITEM_ID_PLACEHOLDER: &str = "{itemId}";

/// One configured lookup target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDescriptor {
    /// Label as written in the section name, case preserved
    pub display_name: String,
    /// URL containing at least one `{itemId}` placeholder
    pub url_template: String,
    /// Label shown in the launcher catalog
    pub catalog_label: String,
}

impl SiteDescriptor {
    /// Substitute `identifier` for `{itemId}` in the URL template.
    pub fn resolve(&self, identifier: &str) -> String {
        self.url_template.replace(ITEM_ID_PLACEHOLDER, identifier)
    }
}

/// Validated sites keyed by lower-cased label, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRegistry {
    entries: Vec<(String, SiteDescriptor)>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&SiteDescriptor> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, site)| site)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteDescriptor)> {
        self.entries.iter().map(|(k, site)| (k.as_str(), site))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Callers check for duplicates first.
    fn insert(&mut self, key: String, site: SiteDescriptor) {
        debug_assert!(!self.contains_key(&key));
        self.entries.push((key, site));
    }
}

/// Output of a registry build.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuild {
    pub registry: SiteRegistry,
    pub settings: MainSettings,
    /// One entry per rejected `site/` section, in document order
    pub warnings: Vec<ConfigWarning>,
}

/// Build the site registry from a configuration document.
///
/// Never fails. Each invalid `site/<label>` section is reported as a
/// warning and skipped; a document with no valid sites gives an empty
/// registry.
pub fn build_registry(doc: &ConfigDocument, plugin_name: &str) -> RegistryBuild {
    let settings = MainSettings::from_document(doc);
    tracing::debug!("work item url pattern: {:?}", settings.url_pattern);

    let mut registry = SiteRegistry::new();
    let mut warnings = Vec::new();

    for section in doc.sections() {
        let Some(label) = site_label(section) else {
            continue;
        };

        match make_site(doc, section, label, &settings, plugin_name, &registry) {
            Ok(site) => {
                tracing::debug!(
                    "site {:?}: url={:?} item_label={:?}",
                    site.display_name,
                    site.url_template,
                    site.catalog_label
                );
                registry.insert(label.to_lowercase(), site);
            }
            Err(warning) => {
                tracing::warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    RegistryBuild {
        registry,
        settings,
        warnings,
    }
}

/// Candidate label of a `site/<label>` section, trimmed.
/// The `site/` prefix matches case-insensitively.
fn site_label(section: &str) -> Option<&str> {
    let prefix_len = CONFIG_SECTION_SITE.len() + 1;
    let prefix = section.get(..prefix_len)?;
    if prefix.eq_ignore_ascii_case("site/") {
        Some(section[prefix_len..].trim())
    } else {
        None
    }
}

fn make_site(
    doc: &ConfigDocument,
    section: &str,
    label: &str,
    settings: &MainSettings,
    plugin_name: &str,
    registry: &SiteRegistry,
) -> Result<SiteDescriptor, ConfigWarning> {
    validate_site_label(label, section)?;

    if registry.contains_key(&label.to_lowercase()) {
        return Err(ConfigWarning::DuplicateSite {
            label: label.to_string(),
            section: section.to_string(),
        });
    }

    let url = doc.get_stripped("url", section, "");
    if url.is_empty() {
        return Err(ConfigWarning::EmptyUrl {
            label: label.to_string(),
            section: section.to_string(),
        });
    }

    if !url.contains(ITEM_ID_PLACEHOLDER) {
        return Err(ConfigWarning::MissingPlaceholder {
            label: label.to_string(),
        });
    }

    let catalog_label = settings
        .item_label_format
        .replace("{site_name}", label)
        .replace("{plugin_name}", plugin_name);

    Ok(SiteDescriptor {
        display_name: label.to_string(),
        url_template: url,
        catalog_label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> RegistryBuild {
        build_registry(&ConfigDocument::parse(text), "WorkItemLookup")
    }

    #[test]
    fn test_jira_scenario() {
        let result = build("[site/Jira]\nurl = https://jira.example.com/browse/{itemId}\n");

        assert_eq!(result.registry.len(), 1);
        assert!(result.warnings.is_empty());

        let site = result.registry.get("jira").unwrap();
        assert_eq!(site.display_name, "Jira");
        assert_eq!(site.catalog_label, "WorkItem Site Jira");
        assert_eq!(
            site.resolve("ABC-123"),
            "https://jira.example.com/browse/ABC-123"
        );
    }

    #[test]
    fn test_forbidden_character_in_label() {
        let result = build("[site/Bad/Name]\nurl = https://x/{itemId}\n");

        assert!(result.registry.is_empty());
        assert_eq!(
            result.warnings,
            vec![ConfigWarning::ForbiddenCharacters {
                label: "Bad/Name".to_string()
            }]
        );
    }

    #[test]
    fn test_every_forbidden_character_rejected() {
        for c in FORBIDDEN_CHARS.chars() {
            let text = format!("[site/a{}b]\nurl = https://x/{{itemId}}\n", c);
            let result = build(&text);
            assert!(result.registry.is_empty(), "'{}' was accepted", c);
            assert_eq!(result.warnings.len(), 1);
        }
    }

    #[test]
    fn test_duplicate_labels_first_wins() {
        let result = build(
            "[site/Jira]\nurl = https://first/{itemId}\n\n[site/JIRA]\nurl = https://second/{itemId}\n",
        );

        assert_eq!(result.registry.len(), 1);
        let site = result.registry.get("jira").unwrap();
        assert_eq!(site.display_name, "Jira");
        assert_eq!(site.url_template, "https://first/{itemId}");
        assert_eq!(
            result.warnings,
            vec![ConfigWarning::DuplicateSite {
                label: "JIRA".to_string(),
                section: "site/JIRA".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_label() {
        let result = build("[site/   ]\nurl = https://x/{itemId}\n");
        assert!(result.registry.is_empty());
        assert!(matches!(
            result.warnings[0],
            ConfigWarning::EmptySiteName { .. }
        ));
    }

    #[test]
    fn test_empty_and_missing_url() {
        let result = build("[site/A]\nurl =   \n[site/B]\nother = x\n");
        assert!(result.registry.is_empty());
        assert_eq!(result.warnings.len(), 2);
        assert!(result
            .warnings
            .iter()
            .all(|w| matches!(w, ConfigWarning::EmptyUrl { .. })));
    }

    #[test]
    fn test_url_without_placeholder() {
        let result = build("[site/Wiki]\nurl = https://wiki/{itemid}\n");
        assert!(result.registry.is_empty());
        assert_eq!(
            result.warnings,
            vec![ConfigWarning::MissingPlaceholder {
                label: "Wiki".to_string()
            }]
        );
    }

    #[test]
    fn test_invalid_section_does_not_stop_build() {
        let result = build(
            "[site/Bad|One]\nurl = https://x/{itemId}\n[site/Good]\nurl = https://good/{itemId}\n",
        );
        assert_eq!(result.registry.len(), 1);
        assert!(result.registry.contains_key("good"));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_rejected_duplicate_does_not_block_later_valid_label() {
        // The first "Jira" section is invalid, so the second one is not a duplicate.
        let result = build("[site/Jira]\nurl = nope\n[site/jira]\nurl = https://j/{itemId}\n");
        let site = result.registry.get("jira").unwrap();
        assert_eq!(site.display_name, "jira");
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let result = build("[SITE/GitHub]\nurl = https://github.com/o/r/issues/{itemId}\n");
        assert!(result.registry.contains_key("github"));
    }

    #[test]
    fn test_label_is_trimmed() {
        let result = build("[site/  Azure Boards  ]\nurl = https://dev/{itemId}\n");
        let site = result.registry.get("azure boards").unwrap();
        assert_eq!(site.display_name, "Azure Boards");
    }

    #[test]
    fn test_non_site_sections_ignored() {
        let result = build("[main]\nurl = https://legacy/{itemId}\n[sites]\nurl = https://x/{itemId}\n[website/A]\nurl = https://x/{itemId}\n");
        assert!(result.registry.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.settings.url_pattern, "https://legacy/{itemId}");
    }

    #[test]
    fn test_header_with_trailing_comment_keeps_sites_apart() {
        let result = build(
            "[site/Jira]\nurl = https://jira.example.com/browse/{itemId}\n\n[site/GitHub]  # trackers\nurl = https://github.com/o/r/issues/{itemId}\n",
        );
        assert!(result.warnings.is_empty());
        assert_eq!(
            result.registry.get("jira").unwrap().resolve("1"),
            "https://jira.example.com/browse/1"
        );
        assert_eq!(
            result.registry.get("github").unwrap().resolve("1"),
            "https://github.com/o/r/issues/1"
        );
    }

    #[test]
    fn test_custom_item_label_format() {
        let result = build(
            "[main]\nitem_label_format = {plugin_name}: {site_name}\n[site/Jira]\nurl = https://j/{itemId}\n",
        );
        assert_eq!(
            result.registry.get("jira").unwrap().catalog_label,
            "WorkItemLookup: Jira"
        );
    }

    #[test]
    fn test_empty_document() {
        let result = build("");
        assert!(result.registry.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.settings, MainSettings::default());
    }

    #[test]
    fn test_iteration_in_document_order() {
        let result = build(
            "[site/Zeta]\nurl = https://z/{itemId}\n[site/Alpha]\nurl = https://a/{itemId}\n",
        );
        let keys: Vec<_> = result.registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_resolve_replaces_every_placeholder() {
        let site = SiteDescriptor {
            display_name: "X".to_string(),
            url_template: "https://x/{itemId}?ref={itemId}&v={version}".to_string(),
            catalog_label: "X".to_string(),
        };
        assert_eq!(site.resolve("42"), "https://x/42?ref=42&v={version}");
    }
}
