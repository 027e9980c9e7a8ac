mod payload;

pub use payload::{decode_payload, encode_payload, ItemPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    /// A site waiting for an identifier
    Reference,
    /// A ready-to-open URL
    Url,
}

/// Whether the host should let the user type arguments after the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsHint {
    Accepted,
    Forbidden,
}

/// How the host should record the item in its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitHint {
    /// Keep the item, drop its arguments
    NoArgs,
    /// Do not record
    Ignore,
}

/// An entry handed to the launcher, either in the catalog or as a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub category: ItemCategory,
    pub label: String,
    pub short_desc: String,
    /// Encoded [`ItemPayload`] for reference items, the URL for URL items
    pub target: String,
    /// Trailing argument typed by the user
    pub args: String,
    pub args_hint: ArgsHint,
    pub hit_hint: HitHint,
}

impl CatalogItem {
    pub fn reference(label: String, short_desc: String, target: String) -> Self {
        Self {
            category: ItemCategory::Reference,
            label,
            short_desc,
            target,
            args: String::new(),
            args_hint: ArgsHint::Accepted,
            hit_hint: HitHint::NoArgs,
        }
    }

    pub fn url(label: String, url: String) -> Self {
        Self {
            category: ItemCategory::Url,
            label,
            short_desc: String::new(),
            target: url,
            args: String::new(),
            args_hint: ArgsHint::Forbidden,
            hit_hint: HitHint::Ignore,
        }
    }

    pub fn clone_with_args(&self, args: impl Into<String>) -> Self {
        Self {
            args: args.into(),
            ..self.clone()
        }
    }
}
