// Markup stripping — raw HTML in, visible text and metadata out.

pub mod dom;

/// The parts of a page the pipeline consumes.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Visible body text with script and style content removed.
    pub body_text: String,
    /// The page title, if the document has one.
    pub title: Option<String>,
    /// Concatenated content of the description meta tags.
    pub meta_description: String,
}

impl PageContent {
    /// Title and description joined into one metadata string, ready for
    /// normalization into the keyword set.
    pub fn metadata_text(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}", self.meta_description, title),
            None => self.meta_description.clone(),
        }
    }
}

/// Capability for stripping markup from a fetched page.
pub trait MarkupParser: Send + Sync {
    /// Parse `html` into visible text plus title and meta description.
    fn parse(&self, html: &str) -> PageContent;
}
