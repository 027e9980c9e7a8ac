use super::ConfigDocument;

pub const CONFIG_SECTION_MAIN: &str = "main";
pub const DEFAULT_URL_PATTERN: &str = "";
pub const DEFAULT_ITEM_LABEL_FORMAT: &str = "WorkItem Site {site_name}";

/// Settings read from the `[main]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainSettings {
    /// Legacy single-site pattern. Only used by the direct-URL suggestion
    /// when no site item is selected.
    pub url_pattern: String,

    /// Catalog label format. Supports `{site_name}` and `{plugin_name}`.
    pub item_label_format: String,
}

impl Default for MainSettings {
    fn default() -> Self {
        Self {
            url_pattern: DEFAULT_URL_PATTERN.to_string(),
            item_label_format: DEFAULT_ITEM_LABEL_FORMAT.to_string(),
        }
    }
}

impl MainSettings {
    pub fn from_document(doc: &ConfigDocument) -> Self {
        Self {
            url_pattern: doc.get_stripped("url", CONFIG_SECTION_MAIN, DEFAULT_URL_PATTERN),
            item_label_format: doc.get_stripped(
                "item_label_format",
                CONFIG_SECTION_MAIN,
                DEFAULT_ITEM_LABEL_FORMAT,
            ),
        }
    }
}
