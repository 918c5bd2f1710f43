use tablehead::{document_size, measure, Document, Element, Position, Rect};

fn two_by_two() -> Element {
    Element::table()
        .id("t")
        .child(
            Element::thead().id("head").child(
                Element::row().id("hrow")
                    .child(Element::th("Name").id("th-0"))
                    .child(Element::th("Qty").id("th-1")),
            ),
        )
        .child(
            Element::tbody().id("body").child(
                Element::row()
                    .child(Element::td("Widget").id("td-0"))
                    .child(Element::td("2").id("td-1")),
            ),
        )
}

// ============================================================================
// Table measurement
// ============================================================================

#[test]
fn test_column_width_is_widest_cell_plus_padding() {
    let mut doc = Document::new();
    doc.push(two_by_two());
    let layout = measure(&doc);

    // col 0: "Widget" (6) + padding, col 1: "Qty" (3) + padding.
    assert_eq!(layout.get("th-0"), Some(&Rect::new(0, 0, 8, 1)));
    assert_eq!(layout.get("td-0"), Some(&Rect::new(0, 1, 8, 1)));
    // Second column starts after the first plus one separator cell.
    assert_eq!(layout.get("th-1"), Some(&Rect::new(9, 0, 5, 1)));
    assert_eq!(layout.get("td-1"), Some(&Rect::new(9, 1, 5, 1)));
}

#[test]
fn test_table_rect_spans_all_sections() {
    let mut doc = Document::new();
    doc.push(two_by_two());
    let layout = measure(&doc);

    // 8 + 5 + 1 separator wide, one header row + one body row tall.
    assert_eq!(layout.get("t"), Some(&Rect::new(0, 0, 14, 2)));
    assert_eq!(layout.get("head"), Some(&Rect::new(0, 0, 14, 1)));
    assert_eq!(layout.get("body"), Some(&Rect::new(0, 1, 14, 1)));
    assert_eq!(layout.get("hrow"), Some(&Rect::new(0, 0, 14, 1)));
}

#[test]
fn test_min_width_raises_column() {
    let mut doc = Document::new();
    doc.push(
        Element::table().id("t").child(
            Element::thead().child(
                Element::row().child(Element::th("A").id("th-0").min_width(20)),
            ),
        ),
    );
    let layout = measure(&doc);

    assert_eq!(layout.get("th-0").unwrap().width, 20, "min-width floor wins");
}

#[test]
fn test_unicode_content_measured_by_display_width() {
    let mut doc = Document::new();
    doc.push(
        Element::table().id("t").child(
            Element::thead().child(
                Element::row().child(Element::th("日本").id("th-0")),
            ),
        ),
    );
    let layout = measure(&doc);

    // Two wide characters occupy four cells, plus padding.
    assert_eq!(layout.get("th-0").unwrap().width, 6);
}

#[test]
fn test_short_rows_leave_trailing_columns_unaffected() {
    let mut doc = Document::new();
    doc.push(
        Element::table()
            .id("t")
            .child(
                Element::thead().child(
                    Element::row()
                        .child(Element::th("A").id("th-0"))
                        .child(Element::th("Long header").id("th-1")),
                ),
            )
            .child(
                Element::tbody().child(Element::row().child(Element::td("only one cell"))),
            ),
    );
    let layout = measure(&doc);

    assert_eq!(layout.get("th-0").unwrap().width, 15, "widened by the body cell");
    assert_eq!(layout.get("th-1").unwrap().width, 13, "untouched by the short row");
}

// ============================================================================
// Document flow
// ============================================================================

#[test]
fn test_static_roots_stack_vertically() {
    let mut doc = Document::new();
    doc.push(Element::text("hello").id("p-0"));
    doc.push(Element::text("").id("p-1"));
    doc.push(two_by_two());
    let layout = measure(&doc);

    assert_eq!(layout.get("p-0"), Some(&Rect::new(0, 0, 5, 1)));
    assert_eq!(layout.get("p-1"), Some(&Rect::new(0, 1, 0, 1)));
    assert_eq!(layout.get("t").unwrap().y, 2, "table starts after the text lines");
}

#[test]
fn test_fixed_elements_leave_flow_untouched() {
    let mut doc = Document::new();
    doc.push(
        Element::table()
            .id("pinned")
            .position(Position::Fixed)
            .left(5)
            .child(Element::thead().child(Element::row().child(Element::th("A")))),
    );
    doc.push(Element::text("first in flow").id("p-0"));
    let layout = measure(&doc);

    let pinned = layout.get("pinned").unwrap();
    assert_eq!((pinned.x, pinned.y), (5, 0), "fixed element at its own offset");
    assert_eq!(layout.get("p-0").unwrap().y, 0, "flow starts at the top");
}

#[test]
fn test_fixed_negative_left_clamps_in_layout_space() {
    let mut doc = Document::new();
    doc.push(
        Element::table()
            .id("pinned")
            .position(Position::Fixed)
            .left(-7)
            .child(Element::thead().child(Element::row().child(Element::th("A")))),
    );
    let layout = measure(&doc);

    // Rects are unsigned; the renderer re-applies the true negative offset.
    assert_eq!(layout.get("pinned").unwrap().x, 0);
}

#[test]
fn test_document_size_ignores_fixed_elements() {
    let mut doc = Document::new();
    doc.push(Element::text("a line of text").id("p-0"));
    doc.push(two_by_two());
    doc.push(
        Element::table()
            .id("pinned")
            .position(Position::Fixed)
            .left(500)
            .child(Element::thead().child(Element::row().child(Element::th("A")))),
    );
    let layout = measure(&doc);

    let (width, height) = document_size(&doc, &layout);
    assert_eq!(width, 14, "widest static root");
    assert_eq!(height, 3, "text line plus two table rows");
}
