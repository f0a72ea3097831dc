//! The fixed visual style sheet used by the report composer.
//!
//! Sizes and colors mirror the established ministerial report layout; they
//! are not configurable at run time.

use genpdf::style::{Color, Style};

/// Near-black used for the document title.
pub const INK: Color = Color::Rgb(26, 26, 26);
/// Dark gray used for section headers and body text.
pub const SLATE: Color = Color::Rgb(51, 51, 51);
/// Medium gray used for subheaders and table labels.
pub const MUTED: Color = Color::Rgb(102, 102, 102);
/// Light gray used for table gridlines.
pub const GRID: Color = Color::Rgb(224, 224, 224);

const TITLE_SIZE: u8 = 20;
const SECTION_SIZE: u8 = 14;
const SUBHEADER_SIZE: u8 = 12;
const BODY_SIZE: u8 = 10;
const TABLE_SIZE: u8 = 8;

/// The full set of text and line styles used across the document.
#[derive(Clone, Debug)]
pub struct StyleSheet {
    /// 20pt bold near-black, centered by the composer.
    pub title: Style,
    /// 14pt bold dark gray section headers.
    pub section: Style,
    /// 12pt bold medium gray subheaders.
    pub subheader: Style,
    /// 10pt dark gray body text.
    pub body: Style,
    /// Bold medium gray labels in key/value tables.
    pub table_label: Style,
    /// 10pt values in key/value tables.
    pub table_value: Style,
    /// Bold 8pt header row of data tables.
    pub table_header: Style,
    /// 8pt cells of data tables.
    pub table_cell: Style,
    /// Light gray gridline strokes.
    pub grid: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: text_style(TITLE_SIZE, INK, true),
            section: text_style(SECTION_SIZE, SLATE, true),
            subheader: text_style(SUBHEADER_SIZE, MUTED, true),
            body: text_style(BODY_SIZE, SLATE, false),
            table_label: text_style(BODY_SIZE, MUTED, true),
            table_value: text_style(BODY_SIZE, SLATE, false),
            table_header: text_style(TABLE_SIZE, SLATE, true),
            table_cell: text_style(TABLE_SIZE, SLATE, false),
            grid: Style::new().with_color(GRID),
        }
    }
}

fn text_style(font_size: u8, color: Color, bold: bool) -> Style {
    let mut style = Style::new();
    style.set_font_size(font_size);
    style.set_color(color);
    if bold {
        style.set_bold();
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_matches_layout_contract() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.title.font_size(), 20);
        assert_eq!(sheet.section.font_size(), 14);
        assert_eq!(sheet.subheader.font_size(), 12);
        assert_eq!(sheet.body.font_size(), 10);
        assert_eq!(sheet.table_cell.font_size(), 8);
        assert!(sheet.title.is_bold());
        assert!(!sheet.body.is_bold());
        assert_eq!(sheet.body.color(), Some(SLATE));
        assert_eq!(sheet.grid.color(), Some(GRID));
    }
}
