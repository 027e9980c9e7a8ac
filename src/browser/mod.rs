use anyhow::{Context, Result};

/// Outbound "open URL" collaborator.
pub trait UrlOpener {
    /// Open `url`. With `execute` false the request is only recorded, not
    /// carried out.
    fn open_url(&self, url: &str, execute: bool) -> Result<()>;
}

/// Opens URLs in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    /// # Errors
    /// Returns error if browser cannot be opened (e.g., no browser available)
    fn open_url(&self, url: &str, execute: bool) -> Result<()> {
        if !execute {
            tracing::debug!("Not executing browser request for URL: {}", url);
            return Ok(());
        }
        webbrowser::open(url)
            .with_context(|| format!("Failed to open browser for URL: {}", url))?;
        Ok(())
    }
}
