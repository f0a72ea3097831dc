//! Document construction helpers.

use genpdf::error::Error;
use genpdf::{self, Margins, PaperSize, SimplePageDecorator};

use crate::fonts;

const DEFAULT_MARGIN_MM: f64 = 20.0;

/// Builder for `genpdf::Document` instances pre-configured with the report
/// defaults: A4 paper, 2cm margins, and the resolved default font family.
#[derive(Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    margins: Option<Margins>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title recorded in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the page margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Builds a fully configured `genpdf::Document` instance.
    pub fn build(self) -> Result<genpdf::Document, Error> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);
        document.set_paper_size(PaperSize::A4);

        if let Some(title) = self.title {
            document.set_title(title);
        }

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins.unwrap_or_else(|| Margins::all(DEFAULT_MARGIN_MM)));
        document.set_page_decorator(decorator);

        Ok(document)
    }
}
