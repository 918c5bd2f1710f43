use unicode_width::UnicodeWidthStr;

use super::{LayoutResult, Rect};
use crate::dom::{Document, Element, Position, Tag};

/// Horizontal padding inside a cell, each side.
pub const CELL_PADDING: u16 = 1;

/// Compute geometry for every element in the document.
///
/// Static roots stack top to bottom at x = 0, each taking its measured
/// height. Fixed roots are out of flow: they measure the same way but are
/// placed at `(left, 0)` in viewport space. Hidden elements measure like
/// visible ones; display is the renderer's concern, not the layout's.
pub fn measure(doc: &Document) -> LayoutResult {
    let mut result = LayoutResult::new();
    let mut y = 0u16;

    for root in doc.roots() {
        match root.position {
            Position::Static => {
                let (_, height) = measure_element(root, 0, y, &mut result);
                y = y.saturating_add(height);
            }
            Position::Fixed => {
                let x = root.left.unwrap_or(0).max(0) as u16;
                measure_element(root, x, 0, &mut result);
            }
        }
    }

    result
}

/// Total document extent: the union of all static roots. Fixed elements
/// live in viewport space and don't contribute.
pub fn document_size(doc: &Document, layout: &LayoutResult) -> (u16, u16) {
    let mut width = 0u16;
    let mut height = 0u16;
    for root in doc.roots() {
        if root.position == Position::Fixed {
            continue;
        }
        if let Some(rect) = layout.get(&root.id) {
            width = width.max(rect.right());
            height = height.max(rect.bottom());
        }
    }
    (width, height)
}

fn measure_element(element: &Element, x: u16, y: u16, result: &mut LayoutResult) -> (u16, u16) {
    match element.tag {
        Tag::Table => measure_table(element, x, y, result),
        _ => {
            let width = element
                .text_content()
                .map_or(0, |text| text.width() as u16)
                .max(element.min_width.unwrap_or(0));
            let height = if element.text_content().is_some() { 1 } else { 0 };
            result.insert(element.id.clone(), Rect::new(x, y, width, height));
            (width, height)
        }
    }
}

fn measure_table(table: &Element, x: u16, y: u16, result: &mut LayoutResult) -> (u16, u16) {
    let columns = column_widths(table);
    let width = table_width(&columns);

    let mut row_y = y;
    for section in table.child_nodes() {
        if !matches!(section.tag, Tag::Head | Tag::Body) {
            continue;
        }
        let section_top = row_y;
        for row in section.child_nodes() {
            if row.tag != Tag::Row {
                continue;
            }
            result.insert(row.id.clone(), Rect::new(x, row_y, width, 1));
            let mut cell_x = x;
            for (cell, col_width) in row.child_nodes().iter().zip(&columns) {
                result
                    .insert(cell.id.clone(), Rect::new(cell_x, row_y, *col_width, 1));
                // One column of separator between adjacent cells.
                cell_x = cell_x.saturating_add(*col_width + 1);
            }
            row_y += 1;
        }
        result.insert(
            section.id.clone(),
            Rect::new(x, section_top, width, row_y - section_top),
        );
    }

    let height = row_y - y;
    result.insert(table.id.clone(), Rect::new(x, y, width, height));
    (width, height)
}

/// Rendered width per column: the widest cell content plus padding, raised
/// to any cell's min-width override. Rows shorter than the widest row simply
/// contribute nothing to the trailing columns.
fn column_widths(table: &Element) -> Vec<u16> {
    let mut columns: Vec<u16> = Vec::new();
    for section in table.child_nodes() {
        if !matches!(section.tag, Tag::Head | Tag::Body) {
            continue;
        }
        for row in section.child_nodes() {
            if row.tag != Tag::Row {
                continue;
            }
            for (i, cell) in row.child_nodes().iter().enumerate() {
                let content = cell.text_content().map_or(0, |text| text.width() as u16);
                let mut cell_width = content + 2 * CELL_PADDING;
                if let Some(min_width) = cell.min_width {
                    cell_width = cell_width.max(min_width);
                }
                if i >= columns.len() {
                    columns.push(cell_width);
                } else {
                    columns[i] = columns[i].max(cell_width);
                }
            }
        }
    }
    columns
}

fn table_width(columns: &[u16]) -> u16 {
    if columns.is_empty() {
        return 0;
    }
    columns.iter().sum::<u16>() + columns.len() as u16 - 1
}
