//! Adds Sentry error reporting to server-rendered web pages.
//!
//! This crate bridges a server-rendered web application and Sentry on
//! both sides of the wire.  Server-side it initializes the Sentry client
//! and forwards capture calls to the current [`Hub`](sentry::Hub).
//! Browser-side it injects the `<script>` elements that load and
//! configure the reporting library, so errors in the delivered page are
//! reported as well.  User context set during the request is forwarded to
//! both sides.
//!
//! Each reporting side is enabled by configuring its DSN and is skipped
//! entirely otherwise.
//!
//! # Examples
//!
//! ```no_run
//! use sentry_browser::{BrowserReporter, PageScripts, ReportingOptions, SessionInfo};
//!
//! let options = ReportingOptions::new()
//!     .with_dsn("https://public@sentry.example.com/1")?
//!     .with_js_dsn("https://public@sentry.example.com/1")?
//!     .with_project_url("https://sentry.example.com/org/project");
//!
//! let mut scripts = PageScripts::new();
//! let mut reporter = BrowserReporter::new(options)
//!     .with_session(SessionInfo::new("8f14e45fceea"));
//! reporter.install(&mut scripts);
//!
//! // render `scripts.render_head()` into the page <head>, then:
//! reporter.capture_message("rendering took a fallback path", sentry::Level::Warning);
//! # Ok::<(), sentry::types::ParseDsnError>(())
//! ```
//!
//! Frameworks that keep their own per-request script collection implement
//! [`ScriptRegistry`] instead of rendering through [`PageScripts`].

#![doc(html_favicon_url = "https://sentry-brand.storage.googleapis.com/favicon.ico")]
#![doc(html_logo_url = "https://sentry-brand.storage.googleapis.com/sentry-glyph-black.png")]
#![warn(missing_docs)]

mod js;
mod options;
mod reporter;
mod scripts;
mod session;

pub use crate::js::{JsObject, JsValue};
pub use crate::options::{ReportingOptions, DEFAULT_JS_SCRIPT_URL};
pub use crate::reporter::BrowserReporter;
pub use crate::scripts::{PageScripts, ScriptPosition, ScriptRegistry};
pub use crate::session::SessionInfo;
