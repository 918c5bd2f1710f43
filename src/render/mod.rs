use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::dom::{Document, Element, Position, Tag};
use crate::layout::{LayoutResult, Rect, CELL_PADDING};
use crate::style::Rgb;
use crate::viewport::Viewport;

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
const SEPARATOR: char = '│';

/// Paint the document into the buffer: static roots translated by the
/// scroll offset, then fixed roots on top at their own viewport position.
pub fn render_document(
    doc: &Document,
    layout: &LayoutResult,
    viewport: &Viewport,
    buf: &mut Buffer,
) {
    let dx = -(viewport.scroll_x as i32);
    let dy = -(viewport.scroll_y as i32);
    for root in doc.roots() {
        if root.position == Position::Static {
            render_element(root, layout, dx, dy, buf);
        }
    }

    // Fixed elements paint over flow content. Their layout rect clamps a
    // negative left to zero; translating back through element.left restores
    // the true offset and lets the buffer clip it.
    for root in doc.roots() {
        if root.position == Position::Fixed {
            let Some(rect) = layout.get(&root.id) else {
                continue;
            };
            let dx = root.left.unwrap_or(0) - rect.x as i32;
            let dy = -(rect.y as i32);
            render_element(root, layout, dx, dy, buf);
        }
    }
}

fn render_element(element: &Element, layout: &LayoutResult, dx: i32, dy: i32, buf: &mut Buffer) {
    if !element.visible {
        return;
    }
    match element.tag {
        Tag::Text => {
            if let Some(rect) = layout.get(&element.id) {
                paint_background(element, *rect, dx, dy, buf);
                if let Some(text) = element.text_content() {
                    print_clipped(text, *rect, 0, element, dx, dy, buf);
                }
            }
        }
        Tag::Table | Tag::Head | Tag::Body => {
            for child in element.child_nodes() {
                render_element(child, layout, dx, dy, buf);
            }
        }
        Tag::Row => render_row(element, layout, dx, dy, buf),
        Tag::HeaderCell | Tag::Cell => render_cell(element, layout, dx, dy, buf),
    }
}

fn render_row(row: &Element, layout: &LayoutResult, dx: i32, dy: i32, buf: &mut Buffer) {
    let cells = row.child_nodes();
    for cell in cells {
        render_element(cell, layout, dx, dy, buf);
    }
    // Column separators sit in the one-cell gap between adjacent cells.
    for pair in cells.windows(2) {
        if let Some(rect) = layout.get(&pair[0].id) {
            buf.put(
                rect.right() as i32 + dx,
                rect.y as i32 + dy,
                SEPARATOR,
                DEFAULT_FG,
                false,
            );
        }
    }
}

fn render_cell(cell: &Element, layout: &LayoutResult, dx: i32, dy: i32, buf: &mut Buffer) {
    let Some(rect) = layout.get(&cell.id) else {
        return;
    };
    paint_background(cell, *rect, dx, dy, buf);
    if let Some(text) = cell.text_content() {
        print_clipped(text, *rect, CELL_PADDING, cell, dx, dy, buf);
    }
}

fn paint_background(element: &Element, rect: Rect, dx: i32, dy: i32, buf: &mut Buffer) {
    let Some(bg) = &element.style.background else {
        return;
    };
    let bg = bg.to_rgb();
    for y in 0..rect.height {
        for x in 0..rect.width {
            buf.paint_bg(
                (rect.x + x) as i32 + dx,
                (rect.y + y) as i32 + dy,
                bg,
            );
        }
    }
}

fn print_clipped(
    text: &str,
    rect: Rect,
    pad: u16,
    element: &Element,
    dx: i32,
    dy: i32,
    buf: &mut Buffer,
) {
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(DEFAULT_FG);
    let bold = element.style.bold || element.tag == Tag::HeaderCell;

    let right = rect.right().saturating_sub(pad) as i32;
    let mut x = (rect.x + pad) as i32;
    let y = rect.y as i32;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0) as i32;
        if x + ch_width > right {
            break;
        }
        buf.put(x + dx, y + dy, ch, fg, bold);
        x += ch_width;
    }
}
