// DOM-backed markup stripping using `scraper`.
//
// Visible text is every text node outside <script> and <style> subtrees.
// Description metadata accepts the three attribute spellings seen in the
// wild: name="description", property="description", itemprop="description".

use anyhow::anyhow;
use scraper::{Html, Selector};

use super::{MarkupParser, PageContent};

/// HTML parser producing the pipeline's view of a page.
pub struct DomParser {
    title: Selector,
    meta: Selector,
}

impl DomParser {
    /// Compile the selectors this parser needs.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            title: Selector::parse("title").map_err(|e| anyhow!("invalid selector: {e:?}"))?,
            meta: Selector::parse("meta").map_err(|e| anyhow!("invalid selector: {e:?}"))?,
        })
    }

    /// Collect text nodes, skipping anything inside script or style tags.
    fn visible_text(document: &Html) -> String {
        let mut out = String::new();
        for node in document.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| matches!(e.name(), "script" | "style"))
            });
            if hidden {
                continue;
            }
            out.push_str(text);
            out.push(' ');
        }
        out
    }
}

impl MarkupParser for DomParser {
    fn parse(&self, html: &str) -> PageContent {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let meta_description: String = document
            .select(&self.meta)
            .filter(|el| {
                let v = el.value();
                [v.attr("name"), v.attr("property"), v.attr("itemprop")]
                    .into_iter()
                    .flatten()
                    .any(|attr| attr == "description")
            })
            .filter_map(|el| el.value().attr("content"))
            .collect::<Vec<_>>()
            .join(" ");

        PageContent {
            body_text: Self::visible_text(&document),
            title,
            meta_description,
        }
    }
}
