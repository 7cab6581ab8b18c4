//! Configuration for the reporting adapter.

use sentry::types::{Dsn, ParseDsnError};
use sentry::{ClientOptions, IntoDsn};

use crate::js::JsObject;

/// The browser build of the reporting library loaded when no other URL is
/// configured.
pub const DEFAULT_JS_SCRIPT_URL: &str = "https://cdn.ravenjs.com/3.26.2/raven.min.js";

/// Configuration for a [`BrowserReporter`](crate::BrowserReporter).
///
/// Server-side and browser-side reporting are configured independently
/// and each is enabled by the presence of its DSN.  The fields are public
/// in the manner of [`ClientOptions`]; the `with_*` methods exist for the
/// common string-based configuration surfaces.
///
/// # Examples
///
/// ```
/// let options = sentry_browser::ReportingOptions::new()
///     .with_dsn("https://public@sentry.example.com/1")?
///     .with_js_dsn("https://public@sentry.example.com/1")?
///     .with_project_url("https://sentry.example.com/org/project");
/// # Ok::<(), sentry::types::ParseDsnError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportingOptions {
    /// DSN for server-side reporting, `None` to disable it.
    pub dsn: Option<Dsn>,
    /// DSN for browser-side reporting, `None` to disable script injection.
    pub js_dsn: Option<Dsn>,
    /// Options forwarded to [`sentry::init`] for the server-side client.
    pub client_options: ClientOptions,
    /// Options inlined into the browser `config(dsn, options)` call.
    pub js_options: JsObject,
    /// The Sentry project URL, used to build event URLs.
    pub project_url: String,
    /// Master switch; when `false` nothing is installed on either side.
    ///
    /// Useful to keep the configuration in place on development or
    /// staging setups that should not report.
    pub enabled: bool,
    /// URL the browser reporting library is loaded from.
    pub js_script_url: String,
}

impl Default for ReportingOptions {
    fn default() -> Self {
        ReportingOptions {
            dsn: None,
            js_dsn: None,
            client_options: ClientOptions::default(),
            js_options: JsObject::new(),
            project_url: String::new(),
            enabled: true,
            js_script_url: DEFAULT_JS_SCRIPT_URL.into(),
        }
    }
}

impl ReportingOptions {
    /// Creates options with both reporting sides disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server-side DSN.
    ///
    /// Accepts anything that converts into a DSN; an empty string counts
    /// as unset and leaves server-side reporting disabled.
    pub fn with_dsn<D: IntoDsn>(mut self, dsn: D) -> Result<Self, ParseDsnError> {
        self.dsn = dsn.into_dsn()?;
        Ok(self)
    }

    /// Sets the browser-side DSN, with the same conversion rules as
    /// [`with_dsn`](Self::with_dsn).
    pub fn with_js_dsn<D: IntoDsn>(mut self, dsn: D) -> Result<Self, ParseDsnError> {
        self.js_dsn = dsn.into_dsn()?;
        Ok(self)
    }

    /// Sets the Sentry project URL.
    pub fn with_project_url(mut self, url: impl Into<String>) -> Self {
        self.project_url = url.into();
        self
    }

    /// Sets the URL the browser reporting library is loaded from.
    pub fn with_js_script_url(mut self, url: impl Into<String>) -> Self {
        self.js_script_url = url.into();
        self
    }
}
