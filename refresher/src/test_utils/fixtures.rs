//! Test fixtures
//!
//! Pages and templates shaped like the feed reader's front page.

use std::sync::Arc;

use crate::adapters::PageDocument;
use crate::domain::entities::Locator;

/// List template used by the end-to-end scenarios
pub const LIST_TEMPLATE: &str = "<ul>{{#each this}}<li>{{title}}</li>{{/each}}</ul>";

/// Page with the entries template, destination and refresh button
pub fn test_page() -> Arc<PageDocument> {
    Arc::new(PageDocument::new(page_with_template(LIST_TEMPLATE)))
}

/// Page with a custom entries template
pub fn page_with_template(template: &str) -> String {
    format!(
        r#"<html><body>
<script id="entries-template" type="text/x-handlebars-template">{}</script>
<button id="feedRefresh" type="button">Refresh</button>
<div id="entries-table"><p>loading</p></div>
</body></html>"#,
        template
    )
}

/// Page missing the destination element
pub fn page_without_destination() -> Arc<PageDocument> {
    Arc::new(PageDocument::new(format!(
        r#"<html><body>
<script id="entries-template" type="text/x-handlebars-template">{}</script>
</body></html>"#,
        LIST_TEMPLATE
    )))
}

/// Page missing the template element
pub fn page_without_template() -> Arc<PageDocument> {
    Arc::new(PageDocument::new(
        r#"<html><body><div id="entries-table"><p>loading</p></div></body></html>"#,
    ))
}

pub fn locator(s: &str) -> Locator {
    Locator::parse(s).unwrap()
}
