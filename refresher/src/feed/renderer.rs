//! Feed renderer
//!
//! Compiles page-supplied Handlebars markup and fills it with the feed
//! payload. Rendering is lenient: a field the payload lacks renders as
//! empty text, and `{{ }}` output is HTML-escaped.

use handlebars::Handlebars;

use crate::domain::entities::EntryCollection;
use crate::error::RefreshError;

const TEMPLATE_NAME: &str = "entries";

/// Compile `template` and render it with `entries` as the only context
pub fn render_entries(template: &str, entries: &EntryCollection) -> Result<String, RefreshError> {
    let mut registry = Handlebars::new();
    registry.register_template_string(TEMPLATE_NAME, template)?;

    let html = registry.render(TEMPLATE_NAME, entries.as_value())?;
    Ok(html)
}
