use tablehead::{
    Document, Element, HeaderMirror, LayoutResult, Rect, Viewport, Visibility,
};

fn table_with_ids() -> Element {
    Element::table()
        .id("t")
        .child(
            Element::thead().id("t-head").child(
                Element::row()
                    .child(Element::th("A").id("th-0"))
                    .child(Element::th("B").id("th-1"))
                    .child(Element::th("C").id("th-2")),
            ),
        )
        .child(
            Element::tbody().child(
                Element::row()
                    .child(Element::td("1"))
                    .child(Element::td("2"))
                    .child(Element::td("3")),
            ),
        )
}

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

/// Geometry used throughout: table top 500, height 400, header 40.
/// The mirror should be visible for scroll offsets in [500, 860].
fn scenario_layout() -> LayoutResult {
    create_layout(&[
        ("t", Rect::new(0, 500, 352, 400)),
        ("t-head", Rect::new(0, 500, 352, 40)),
        ("th-0", Rect::new(0, 500, 100, 40)),
        ("th-1", Rect::new(101, 500, 200, 40)),
        ("th-2", Rect::new(302, 500, 50, 40)),
    ])
}

fn scrolled(x: u16, y: u16) -> Viewport {
    let mut viewport = Viewport::new(80, 24);
    viewport.scroll_x = x;
    viewport.scroll_y = y;
    viewport
}

fn attach() -> (Document, HeaderMirror) {
    let mut doc = Document::new();
    doc.push(table_with_ids());
    let handle = HeaderMirror::attach(&mut doc, "t").unwrap();
    (doc, handle)
}

// ============================================================================
// Range boundaries
// ============================================================================

#[test]
fn test_initial_state_is_visible() {
    let (doc, handle) = attach();
    assert_eq!(handle.visibility(&doc), Visibility::Visible);
}

#[test]
fn test_hidden_below_range() {
    let (mut doc, handle) = attach();
    let layout = scenario_layout();

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 499));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 0));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);
}

#[test]
fn test_hidden_above_range() {
    let (mut doc, handle) = attach();
    let layout = scenario_layout();

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 861));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 5000));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);
}

#[test]
fn test_visible_at_inclusive_boundaries() {
    let (mut doc, handle) = attach();
    let layout = scenario_layout();

    // Start from Hidden so the show transition is exercised at both ends.
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 0));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 500));
    assert_eq!(handle.visibility(&doc), Visibility::Visible, "top edge is in range");

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 0));
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 860));
    assert_eq!(
        handle.visibility(&doc),
        Visibility::Visible,
        "bottom edge (top + height - header) is in range"
    );
}

#[test]
fn test_in_range_keeps_visible() {
    let (mut doc, handle) = attach();
    let layout = scenario_layout();

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 600));
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 700));
    assert_eq!(handle.visibility(&doc), Visibility::Visible);
}

#[test]
fn test_out_of_range_stays_hidden() {
    let (mut doc, handle) = attach();
    let layout = scenario_layout();

    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 0));
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 100));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);
}

// ============================================================================
// Horizontal position
// ============================================================================

#[test]
fn test_left_offset_tracks_horizontal_scroll() {
    let (mut doc, handle) = attach();
    let layout = create_layout(&[
        ("t", Rect::new(10, 500, 352, 400)),
        ("t-head", Rect::new(10, 500, 352, 40)),
    ]);

    handle.sync_visibility(&mut doc, &layout, &scrolled(4, 600));
    assert_eq!(doc.get(handle.mirror_id()).unwrap().left, Some(6));
}

#[test]
fn test_left_offset_updates_even_while_hidden() {
    let (mut doc, handle) = attach();
    let layout = create_layout(&[
        ("t", Rect::new(10, 500, 352, 400)),
        ("t-head", Rect::new(10, 500, 352, 40)),
    ]);

    // Out of range vertically, scrolled right past the table's left edge.
    handle.sync_visibility(&mut doc, &layout, &scrolled(30, 0));

    let mirror = doc.get(handle.mirror_id()).unwrap();
    assert!(!mirror.visible);
    assert_eq!(mirror.left, Some(-20), "position applied regardless of visibility");
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_scroll_through_table_lifecycle() {
    let (mut doc, handle) = attach();
    let layout = scenario_layout();

    // (a) top of the document: table not yet reached.
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 0));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);

    // (b) table top reaches the viewport top: mirror shows, widths match.
    handle.sync_widths(&mut doc, &layout);
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 500));
    assert_eq!(handle.visibility(&doc), Visibility::Visible);
    let widths: Vec<_> = doc
        .get(handle.mirror_id())
        .unwrap()
        .header_cells()
        .iter()
        .map(|c| c.min_width)
        .collect();
    assert_eq!(widths, [Some(100), Some(200), Some(50)]);

    // (c) last body row still under the header: boundary is inclusive.
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 860));
    assert_eq!(handle.visibility(&doc), Visibility::Visible);

    // (d) one cell further: the table has scrolled past.
    handle.sync_visibility(&mut doc, &layout, &scrolled(0, 861));
    assert_eq!(handle.visibility(&doc), Visibility::Hidden);
}
