//! In-memory page document
//!
//! Elements are found by their `id` attribute. Content ends at the
//! matching close tag, counting nested elements of the same name, so
//! a `<div id="x">` wrapping other divs is read whole. Void and
//! self-closing elements (`<input id=..>`) exist but have no content.
//!
//! Written markup is spliced in as-is and may be unbalanced, so once an
//! element has been written its content is tracked by the length that
//! was written rather than by counting tags again.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::RwLock;

use regex::Regex;

use crate::domain::entities::Locator;
use crate::domain::ports::Document;
use crate::error::RefreshError;

pub struct PageDocument {
    state: RwLock<PageState>,
}

struct PageState {
    markup: String,
    /// Content length of every element this document wrote, by id
    written: HashMap<String, usize>,
}

struct OpeningTag {
    tag: String,
    start: usize,
    end: usize,
    self_closing: bool,
}

/// Byte offsets of an element inside the page
struct ElementSpan {
    start: usize,
    content: Range<usize>,
}

impl PageDocument {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(PageState {
                markup: markup.into(),
                written: HashMap::new(),
            }),
        }
    }

    /// Current page markup
    pub fn markup(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .markup
            .clone()
    }
}

fn opening_tag(id: &str) -> Option<Regex> {
    let id = regex::escape(id);
    let pattern = format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)[^>]*?\s(?i:id)\s*=\s*(?:"{id}"[^>]*|'{id}'[^>]*|{id}(?:[\s/][^>]*)?)>"#
    );
    Regex::new(&pattern).ok()
}

fn find_opening(markup: &str, id: &str) -> Option<OpeningTag> {
    let caps = opening_tag(id)?.captures(markup)?;
    let whole = caps.get(0)?;
    Some(OpeningTag {
        tag: caps[1].to_string(),
        start: whole.start(),
        end: whole.end(),
        self_closing: whole.as_str().ends_with("/>"),
    })
}

/// End of content at the close tag that balances the opening tag
fn balanced_end(markup: &str, opening: &OpeningTag) -> Option<usize> {
    let pattern = format!(r"(?i)<(/?){}(?:\s[^>]*)?>", regex::escape(&opening.tag));
    let tags = Regex::new(&pattern).ok()?;

    let mut depth = 1usize;
    for caps in tags.captures_iter(&markup[opening.end..]) {
        let m = caps.get(0)?;
        if caps[1].is_empty() {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(opening.end + m.start());
            }
        }
    }

    None
}

impl PageState {
    fn find_element(&self, id: &str) -> Option<ElementSpan> {
        let opening = find_opening(&self.markup, id)?;
        if opening.self_closing {
            return None;
        }

        let end = match self.written.get(id) {
            Some(&len) if opening.end + len <= self.markup.len() => opening.end + len,
            _ => balanced_end(&self.markup, &opening)?,
        };

        Some(ElementSpan {
            start: opening.start,
            content: opening.end..end,
        })
    }

    /// Replacing `replaced` with `new_len` bytes grows or shrinks written
    /// elements around it and drops those inside it.
    fn adjust_written(&mut self, target: &str, replaced: &Range<usize>, new_len: usize) {
        let others: Vec<(String, Option<ElementSpan>)> = self
            .written
            .keys()
            .filter(|id| id.as_str() != target)
            .map(|id| (id.clone(), self.find_element(id)))
            .collect();

        for (id, span) in others {
            match span {
                Some(span) if replaced.contains(&span.start) => {
                    self.written.remove(&id);
                }
                Some(span)
                    if span.content.start <= replaced.start
                        && replaced.end <= span.content.end =>
                {
                    self.written
                        .insert(id, span.content.len() - replaced.len() + new_len);
                }
                Some(_) => {}
                None => {
                    self.written.remove(&id);
                }
            }
        }
    }
}

impl Document for PageDocument {
    fn contains(&self, locator: &Locator) -> bool {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        find_opening(&state.markup, locator.id()).is_some()
    }

    fn inner_html(&self, locator: &Locator) -> Option<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let span = state.find_element(locator.id())?;
        Some(state.markup[span.content].to_string())
    }

    fn set_inner_html(&self, locator: &Locator, html: &str) -> Result<(), RefreshError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let span = state
            .find_element(locator.id())
            .ok_or_else(|| RefreshError::DestinationNotFound(locator.to_string()))?;

        state.adjust_written(locator.id(), &span.content, html.len());
        state.markup.replace_range(span.content, html);
        state.written.insert(locator.id().to_string(), html.len());
        Ok(())
    }
}
