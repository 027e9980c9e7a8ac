use crate::browser::UrlOpener;
use crate::catalog::{decode_payload, encode_payload, CatalogItem, ItemCategory, ItemPayload};
use crate::config::{ConfigDocument, ConfigSource, MainSettings};
use crate::error::{ConfigWarning, LookupError};
use crate::registry::{build_registry, SiteRegistry, ITEM_ID_PLACEHOLDER};

pub const DEFAULT_PLUGIN_NAME: &str = "WorkItemLookup";

/// Callbacks a launcher host invokes, one at a time, in response to user
/// actions and configuration changes.
pub trait LauncherPlugin {
    /// Rebuild state and return the full catalog.
    fn on_catalog(&mut self) -> Vec<CatalogItem>;

    /// Suggestions for `user_input`, given the items selected so far.
    fn on_suggest(&self, user_input: &str, items_chain: &[CatalogItem]) -> Vec<CatalogItem>;

    /// The user confirmed `item`.
    fn on_execute(&self, item: &CatalogItem);

    /// The configuration changed; returns the rebuilt catalog.
    fn on_config_changed(&mut self) -> Vec<CatalogItem>;
}

/// Opens work-item URLs: pick a site from the catalog, type an
/// identifier, confirm.
pub struct WorkItemLookup<C, O> {
    name: String,
    source: C,
    opener: O,
    settings: MainSettings,
    registry: SiteRegistry,
}

impl<C: ConfigSource, O: UrlOpener> WorkItemLookup<C, O> {
    /// Create the plugin. The registry stays empty until the first
    /// [`LauncherPlugin::on_catalog`].
    pub fn new(source: C, opener: O) -> Self {
        Self {
            name: DEFAULT_PLUGIN_NAME.to_string(),
            source,
            opener,
            settings: MainSettings::default(),
            registry: SiteRegistry::new(),
        }
    }

    /// Override the name substituted for `{plugin_name}` in item labels.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &MainSettings {
        &self.settings
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Re-read the configuration and replace the registry wholesale.
    /// Returns the warnings for the rejected site sections.
    pub fn reload(&mut self) -> Vec<ConfigWarning> {
        let doc = match self.source.load() {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Failed to load configuration: {:#}", e);
                ConfigDocument::default()
            }
        };

        let build = build_registry(&doc, &self.name);
        self.settings = build.settings;
        self.registry = build.registry;
        build.warnings
    }

    /// One reference item per registered site.
    pub fn catalog_items(&self) -> Vec<CatalogItem> {
        self.registry
            .iter()
            .map(|(key, site)| {
                CatalogItem::reference(
                    site.catalog_label.clone(),
                    site.display_name.clone(),
                    encode_payload(&ItemPayload::new(key)),
                )
            })
            .collect()
    }

    /// The URL confirming `item` would open, if any.
    ///
    /// `Ok(None)` means there is nothing to open yet: a reference item
    /// without an identifier, or an empty URL item.
    pub fn resolve(&self, item: &CatalogItem) -> Result<Option<String>, LookupError> {
        match item.category {
            ItemCategory::Url => Ok(Some(item.target.clone()).filter(|url| !url.is_empty())),
            ItemCategory::Reference => {
                let payload =
                    decode_payload(&item.target).map_err(|source| LookupError::PayloadDecode {
                        label: item.label.clone(),
                        source,
                    })?;

                let site = self.registry.get(&payload.site).ok_or_else(|| {
                    LookupError::UnknownSite {
                        label: item.label.clone(),
                        site: payload.site.clone(),
                    }
                })?;

                if item.args.is_empty() {
                    return Ok(None);
                }
                Ok(Some(site.resolve(&item.args)))
            }
        }
    }

    /// Direct-URL suggestion built from the `[main]` `url` pattern.
    fn legacy_suggestion(&self, user_input: &str) -> Option<CatalogItem> {
        let pattern = &self.settings.url_pattern;
        let item_id = user_input.trim();
        if pattern.is_empty() || item_id.is_empty() {
            return None;
        }

        let url = pattern.replace(ITEM_ID_PLACEHOLDER, item_id);
        Some(CatalogItem::url(format!("ID: {}", user_input), url))
    }
}

impl<C: ConfigSource, O: UrlOpener> LauncherPlugin for WorkItemLookup<C, O> {
    fn on_catalog(&mut self) -> Vec<CatalogItem> {
        self.reload();
        self.catalog_items()
    }

    fn on_suggest(&self, user_input: &str, items_chain: &[CatalogItem]) -> Vec<CatalogItem> {
        match items_chain.last() {
            Some(selected) if selected.category == ItemCategory::Reference => {
                vec![selected.clone_with_args(user_input.trim())]
            }
            Some(_) => Vec::new(),
            None => self.legacy_suggestion(user_input).into_iter().collect(),
        }
    }

    fn on_execute(&self, item: &CatalogItem) {
        let url = match self.resolve(item) {
            Ok(Some(url)) => url,
            Ok(None) => return,
            Err(e @ LookupError::PayloadDecode { .. }) => {
                tracing::debug!("{}", e);
                return;
            }
            Err(e @ LookupError::UnknownSite { .. }) => {
                tracing::warn!("{}", e);
                return;
            }
        };

        if let Err(e) = self.opener.open_url(&url, true) {
            tracing::error!("{:#}", e);
        }
    }

    fn on_config_changed(&mut self) -> Vec<CatalogItem> {
        tracing::info!("Configuration changed, rebuilding catalog...");
        self.on_catalog()
    }
}
