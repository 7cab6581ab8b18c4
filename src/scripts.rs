//! Registration and rendering of page `<script>` elements.
//!
//! Server-rendered frameworks usually keep a per-request collection of
//! scripts that the layout flushes into the document.  [`ScriptRegistry`]
//! is the seam a host framework implements to receive the scripts this
//! crate emits; [`PageScripts`] is a standalone implementation for hosts
//! that have no such collection of their own.

use std::fmt::Write;

/// Where in the rendered document a script is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptPosition {
    /// Inside `<head>`.
    Head,
    /// Right after the opening `<body>` tag.
    BodyBegin,
    /// Right before the closing `</body>` tag.
    BodyEnd,
}

/// A per-request sink for `<script>` elements.
///
/// Inline scripts are keyed by an id: registering the same id again
/// replaces the earlier source in place rather than appending a second
/// element.  External files are deduplicated by URL.
pub trait ScriptRegistry {
    /// Registers an external script file.
    ///
    /// `attrs` are additional attributes for the tag, such as
    /// `("crossorigin", "anonymous")`.
    fn register_script_file(&mut self, url: &str, position: ScriptPosition, attrs: &[(&str, &str)]);

    /// Registers an inline script under the given id.
    fn register_script(&mut self, id: &str, source: &str, position: ScriptPosition);
}

#[derive(Debug)]
struct ScriptFile {
    url: String,
    position: ScriptPosition,
    attrs: Vec<(String, String)>,
}

#[derive(Debug)]
struct InlineScript {
    id: String,
    source: String,
    position: ScriptPosition,
}

/// Collects registered scripts and renders them as HTML.
#[derive(Debug, Default)]
pub struct PageScripts {
    files: Vec<ScriptFile>,
    inline: Vec<InlineScript>,
}

impl PageScripts {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.inline.is_empty()
    }

    /// Renders the scripts registered for the given position.
    ///
    /// External files come first, then inline scripts, each in
    /// registration order.  Every element is followed by a newline so the
    /// output can be spliced into a document as-is.
    pub fn render(&self, position: ScriptPosition) -> String {
        let mut out = String::new();
        for file in self.files.iter().filter(|f| f.position == position) {
            out.push_str("<script src=\"");
            out.push_str(&escape_attr(&file.url));
            out.push('"');
            for (name, value) in &file.attrs {
                let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
            }
            out.push_str("></script>\n");
        }
        for script in self.inline.iter().filter(|s| s.position == position) {
            out.push_str("<script>");
            out.push_str(&script.source);
            out.push_str("</script>\n");
        }
        out
    }

    /// Renders the scripts placed inside `<head>`.
    pub fn render_head(&self) -> String {
        self.render(ScriptPosition::Head)
    }
}

impl ScriptRegistry for PageScripts {
    fn register_script_file(&mut self, url: &str, position: ScriptPosition, attrs: &[(&str, &str)]) {
        if self.files.iter().any(|f| f.url == url) {
            return;
        }
        self.files.push(ScriptFile {
            url: url.to_owned(),
            position,
            attrs: attrs
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                .collect(),
        });
    }

    fn register_script(&mut self, id: &str, source: &str, position: ScriptPosition) {
        if let Some(existing) = self.inline.iter_mut().find(|s| s.id == id) {
            existing.source = source.to_owned();
            existing.position = position;
            return;
        }
        self.inline.push(InlineScript {
            id: id.to_owned(),
            source: source.to_owned(),
            position,
        });
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
