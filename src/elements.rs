//! Table building blocks layered on top of `genpdf` primitives.
//!
//! This module provides the two table shapes used by the report layout (a
//! two-column key/value table and a data table with a header row) together
//! with a custom cell decorator that strokes the light gridlines.  `genpdf`
//! paints cell decorations after the cell content and has no background
//! fill, so rows cannot carry a background tint; the grid alone marks the
//! table structure.

use genpdf::elements::{CellDecorator, Paragraph, TableLayout};
use genpdf::error::Error;
use genpdf::render;
use genpdf::style::Style;
use genpdf::{Element, Margins, Position};

use crate::styles::StyleSheet;

const CELL_PADDING_VERTICAL_MM: f64 = 0.75;
const CELL_PADDING_HORIZONTAL_MM: f64 = 1.0;

fn cell_padding() -> Margins {
    Margins::trbl(
        CELL_PADDING_VERTICAL_MM,
        CELL_PADDING_HORIZONTAL_MM,
        CELL_PADDING_VERTICAL_MM,
        CELL_PADDING_HORIZONTAL_MM,
    )
}

/// Cell decorator that strokes every cell edge in the grid color.
///
/// Shared edges are drawn once: every cell strokes its left and top edges,
/// and only the last column and last row close the outer border.  A row cut
/// off by a page break is closed at the bottom so the table does not hang
/// open at the page edge.
pub struct GridCellDecorator {
    line_style: Style,
    num_columns: usize,
    num_rows: usize,
}

impl GridCellDecorator {
    pub fn new(sheet: &StyleSheet) -> Self {
        Self {
            line_style: sheet.grid.clone(),
            num_columns: 0,
            num_rows: 0,
        }
    }

    fn print_right(&self, column: usize) -> bool {
        column + 1 == self.num_columns
    }

    fn print_bottom(&self, row: usize, has_more: bool) -> bool {
        has_more || row + 1 == self.num_rows
    }
}

impl CellDecorator for GridCellDecorator {
    fn set_table_size(&mut self, num_columns: usize, num_rows: usize) {
        self.num_columns = num_columns;
        self.num_rows = num_rows;
    }

    fn decorate_cell(
        &mut self,
        column: usize,
        row: usize,
        has_more: bool,
        area: render::Area<'_>,
        _style: Style,
    ) {
        let size = area.size();

        area.draw_line(
            vec![Position::default(), Position::new(0, size.height)],
            self.line_style.clone(),
        );
        area.draw_line(
            vec![Position::default(), Position::new(size.width, 0)],
            self.line_style.clone(),
        );
        if self.print_right(column) {
            area.draw_line(
                vec![
                    Position::new(size.width, 0),
                    Position::new(size.width, size.height),
                ],
                self.line_style.clone(),
            );
        }
        if self.print_bottom(row, has_more) {
            area.draw_line(
                vec![
                    Position::new(0, size.height),
                    Position::new(size.width, size.height),
                ],
                self.line_style.clone(),
            );
        }
    }
}

fn cell(text: String, style: Style) -> impl Element {
    Paragraph::new(text).styled(style).padded(cell_padding())
}

/// Builds a two-column key/value table with bold muted labels.
pub fn key_value_table(
    sheet: &StyleSheet,
    weights: Vec<usize>,
    rows: Vec<(String, String)>,
) -> Result<TableLayout, Error> {
    let mut table = TableLayout::new(weights);
    table.set_cell_decorator(GridCellDecorator::new(sheet));

    for (label, value) in rows {
        table
            .row()
            .element(cell(label, sheet.table_label.clone()))
            .element(cell(value, sheet.table_value.clone()))
            .push()?;
    }
    Ok(table)
}

/// Builds a data table with a bold header row.
pub fn data_table(
    sheet: &StyleSheet,
    weights: Vec<usize>,
    headers: &[&str],
    rows: Vec<Vec<String>>,
) -> Result<TableLayout, Error> {
    let mut table = TableLayout::new(weights);
    table.set_cell_decorator(GridCellDecorator::new(sheet));

    let mut header_row = table.row();
    for header in headers {
        header_row = header_row.element(cell((*header).to_owned(), sheet.table_header.clone()));
    }
    header_row.push()?;

    for row in rows {
        let mut table_row = table.row();
        for value in row {
            table_row = table_row.element(cell(value, sheet.table_cell.clone()));
        }
        table_row.push()?;
    }
    Ok(table)
}
