use super::config::SelectorConfig;
use super::error::Result;
use super::host::{StylesheetHost, StylesheetLink};
use super::markers::MarkerScanner;
use super::rules::{derive_flags, select_stylesheet};
use super::types::*;
use rayon::prelude::*;

/// Classifies user agents and picks the stylesheet a page should load.
///
/// Build it once and reuse it: construction compiles the marker automaton,
/// every lookup after that is a single scan of the user agent.
pub struct StylesheetSelector {
    scanner: MarkerScanner,
    config: SelectorConfig,
}

impl StylesheetSelector {
    /// Selector loading stylesheets from [`SelectorConfig::default`].
    pub fn new() -> Result<Self> {
        Self::with_config(SelectorConfig::default())
    }

    pub fn with_config(config: SelectorConfig) -> Result<Self> {
        let scanner = MarkerScanner::build()?;
        tracing::debug!(
            base_url = %config.base_url,
            suffix = %config.suffix,
            "stylesheet selector ready"
        );
        Ok(Self { scanner, config })
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Derive the classification flags for `ua` at `version`.
    pub fn classify(&self, ua: &str, version: impl Into<AppVersion>) -> ClassificationFlags {
        let version = version.into();
        let flags = derive_flags(self.scanner.scan(ua), version);
        tracing::trace!(ua, version = ?version.get(), ?flags, "classified user agent");
        flags
    }

    /// Stylesheet for `ua` at `version`, or `None` when nothing should be loaded.
    pub fn select(&self, ua: &str, version: impl Into<AppVersion>) -> Option<StylesheetChoice> {
        let flags = self.classify(ua, version);
        let choice = select_stylesheet(&flags);
        tracing::debug!(
            family = flags.browser_family().as_str(),
            platform = flags.platform().as_str(),
            choice = choice.map(|c| c.as_str()).unwrap_or("none"),
            "selected stylesheet"
        );
        choice
    }

    /// Like [`select`](Self::select), resolved to the URL to load.
    pub fn link(&self, ua: &str, version: impl Into<AppVersion>) -> Option<StylesheetLink> {
        self.select(ua, version)
            .map(|choice| StylesheetLink::new(choice, &self.config))
    }

    /// Select for many inputs at once. Output order follows input order.
    pub fn select_many<S>(&self, inputs: &[(S, AppVersion)]) -> Vec<Option<StylesheetChoice>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|(ua, version)| self.select(ua.as_ref(), *version))
            .collect()
    }

    /// Select a stylesheet and hand it to `host`.
    ///
    /// The host is called once when a stylesheet is chosen and not at all
    /// otherwise. Only host errors are returned.
    pub fn inject<H>(
        &self,
        host: &mut H,
        ua: &str,
        version: impl Into<AppVersion>,
    ) -> Result<Option<StylesheetChoice>>
    where
        H: StylesheetHost + ?Sized,
    {
        let Some(link) = self.link(ua, version) else {
            return Ok(None);
        };
        host.load_stylesheet(&link)?;
        Ok(Some(link.choice))
    }
}
