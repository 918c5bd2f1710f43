use std::sync::atomic::{AtomicU64, Ordering};

use crate::style::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Node kinds a table document is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Table,
    Head,
    Body,
    Row,
    HeaderCell,
    Cell,
    Text,
}

impl Tag {
    fn id_prefix(self) -> &'static str {
        match self {
            Tag::Table => "table",
            Tag::Head => "thead",
            Tag::Body => "tbody",
            Tag::Row => "tr",
            Tag::HeaderCell => "th",
            Tag::Cell => "td",
            Tag::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// How an element participates in document flow. Fixed elements are
/// positioned in viewport space and never advance the flow cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Fixed,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,
    pub content: Content,

    // Inline layout overrides
    pub min_width: Option<u16>,
    /// Viewport-space horizontal offset for fixed elements. Can go negative
    /// when the viewport has scrolled right past the element's left edge.
    pub left: Option<i32>,
    pub position: Position,

    // Display toggle: a hidden element still measures, it just isn't painted.
    pub visible: bool,

    pub style: Style,
}

impl Element {
    fn with_tag(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.id_prefix()),
            tag,
            classes: Vec::new(),
            content: Content::None,
            min_width: None,
            left: None,
            position: Position::Static,
            visible: true,
            style: Style::default(),
        }
    }

    pub fn table() -> Self {
        Self::with_tag(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::with_tag(Tag::Head)
    }

    pub fn tbody() -> Self {
        Self::with_tag(Tag::Body)
    }

    pub fn row() -> Self {
        Self::with_tag(Tag::Row)
    }

    pub fn th(text: impl Into<String>) -> Self {
        let mut el = Self::with_tag(Tag::HeaderCell);
        el.content = Content::Text(text.into());
        el
    }

    pub fn td(text: impl Into<String>) -> Self {
        let mut el = Self::with_tag(Tag::Cell);
        el.content = Content::Text(text.into());
        el
    }

    pub fn text(text: impl Into<String>) -> Self {
        let mut el = Self::with_tag(Tag::Text);
        el.content = Content::Text(text.into());
        el
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    // Inline layout
    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn left(mut self, left: i32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Drop direct children that fail the predicate. No-op for text content.
    pub fn retain_children(&mut self, pred: impl FnMut(&Element) -> bool) {
        if let Content::Children(children) = &mut self.content {
            children.retain(pred);
        }
    }

    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_nodes_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Re-generate ids for this element and its whole subtree. Cloned
    /// subtrees must call this before insertion so id lookups stay unique.
    pub fn with_fresh_ids(mut self) -> Self {
        self.regenerate_ids();
        self
    }

    fn regenerate_ids(&mut self) {
        self.id = generate_id(self.tag.id_prefix());
        for child in self.child_nodes_mut() {
            child.regenerate_ids();
        }
    }

    // Structural queries (meaningful on Tag::Table elements)

    /// The table's header section, if any.
    pub fn head(&self) -> Option<&Element> {
        self.child_nodes().iter().find(|c| c.tag == Tag::Head)
    }

    pub fn head_mut(&mut self) -> Option<&mut Element> {
        self.child_nodes_mut().iter_mut().find(|c| c.tag == Tag::Head)
    }

    /// The table's body section, if any.
    pub fn body(&self) -> Option<&Element> {
        self.child_nodes().iter().find(|c| c.tag == Tag::Body)
    }

    /// All header cells in document order, recursing through header rows.
    pub fn header_cells(&self) -> Vec<&Element> {
        let mut cells = Vec::new();
        if let Some(head) = self.head() {
            collect_header_cells(head, &mut cells);
        }
        cells
    }

    pub fn header_cells_mut(&mut self) -> Vec<&mut Element> {
        let mut cells = Vec::new();
        if let Some(head) = self.head_mut() {
            collect_header_cells_mut(head, &mut cells);
        }
        cells
    }
}

fn collect_header_cells<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    if element.tag == Tag::HeaderCell {
        out.push(element);
        return;
    }
    for child in element.child_nodes() {
        collect_header_cells(child, out);
    }
}

fn collect_header_cells_mut<'a>(element: &'a mut Element, out: &mut Vec<&'a mut Element>) {
    if element.tag == Tag::HeaderCell {
        out.push(element);
        return;
    }
    for child in element.child_nodes_mut() {
        collect_header_cells_mut(child, out);
    }
}
