use crate::dom::{Document, DomError, Position, Tag};
use crate::event::ViewportEvent;
use crate::layout::{measure, LayoutResult};
use crate::viewport::Viewport;

/// Class applied to every mirror so host styling can recognize it.
pub const MARKER_CLASS: &str = "fixed-header";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// A pinned duplicate of one table's header.
///
/// Attaching clones the table, strips its body, tags the clone with
/// [`MARKER_CLASS`], and inserts it as the table's immediately preceding
/// sibling, fixed in viewport space. Afterwards the mirror is kept in step
/// by two operations: [`sync_widths`](Self::sync_widths) on viewport resize
/// and [`sync_visibility`](Self::sync_visibility) on viewport scroll.
///
/// The instance holds only the two element ids; the document itself is the
/// single source of truth for the mirror's current state, so every call
/// works from the live tree.
#[derive(Debug, Clone)]
pub struct HeaderMirror {
    table_id: String,
    mirror_id: String,
}

impl HeaderMirror {
    /// Clone `table_id`'s header into a fixed-position sibling and run one
    /// width pass. A table without a header section yields a header-less
    /// mirror; that is allowed and every later sync is a no-op for it.
    pub fn attach(doc: &mut Document, table_id: &str) -> Result<Self, DomError> {
        let table = doc
            .get(table_id)
            .ok_or_else(|| DomError::NotFound(table_id.to_string()))?;
        if table.tag != Tag::Table {
            return Err(DomError::NotATable(table_id.to_string()));
        }

        let mut mirror = table.clone().with_fresh_ids();
        mirror.retain_children(|child| child.tag != Tag::Body);
        mirror.classes.push(MARKER_CLASS.to_string());
        mirror.position = Position::Fixed;
        mirror.visible = true;

        let mirror_id = mirror.id.clone();
        doc.insert_before(table_id, mirror)?;

        let instance = Self {
            table_id: table_id.to_string(),
            mirror_id,
        };

        let layout = measure(doc);
        instance.sync_widths(doc, &layout);

        log::debug!(
            "[mirror] attached {} for table {}",
            instance.mirror_id,
            instance.table_id
        );
        Ok(instance)
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn mirror_id(&self) -> &str {
        &self.mirror_id
    }

    /// Copy the source header's rendered cell widths onto the mirror as
    /// per-cell minimum widths, index by index. When the two headers
    /// disagree in cell count only the overlapping range is touched.
    ///
    /// Idempotent: unchanged source widths produce unchanged mirror widths.
    pub fn sync_widths(&self, doc: &mut Document, layout: &LayoutResult) {
        let Some(table) = doc.get(&self.table_id) else {
            return;
        };
        let widths: Vec<Option<u16>> = table
            .header_cells()
            .iter()
            .map(|cell| layout.get(&cell.id).map(|rect| rect.width))
            .collect();

        let Some(mirror) = doc.get_mut(&self.mirror_id) else {
            return;
        };
        for (cell, width) in mirror.header_cells_mut().into_iter().zip(widths) {
            if let Some(width) = width {
                cell.min_width = Some(width);
            }
        }
    }

    /// Re-evaluate whether the mirror should be shown for the current
    /// scroll offset, and always re-align its horizontal position.
    ///
    /// The mirror is in range while `tableTop <= scrollTop <= tableBottom`,
    /// where `tableBottom = tableTop + tableHeight - headerHeight`: the
    /// mirror disappears exactly when the last body row scrolls past it.
    /// The left offset is written unconditionally so a hidden mirror is
    /// already aligned when it next shows.
    pub fn sync_visibility(&self, doc: &mut Document, layout: &LayoutResult, viewport: &Viewport) {
        let Some(table_rect) = layout.get(&self.table_id).copied() else {
            return;
        };
        let header_height = doc
            .get(&self.table_id)
            .and_then(|table| table.head())
            .and_then(|head| layout.get(&head.id))
            .map_or(0, |rect| rect.height);

        let scroll_top = viewport.scroll_y;
        let table_top = table_rect.y;
        let table_bottom = table_top + table_rect.height.saturating_sub(header_height);

        let Some(mirror) = doc.get_mut(&self.mirror_id) else {
            return;
        };

        if scroll_top < table_top || scroll_top > table_bottom {
            if mirror.visible {
                log::debug!("[mirror] hide {} (scroll {} out of range)", mirror.id, scroll_top);
            }
            mirror.visible = false;
        } else if !mirror.visible {
            log::debug!("[mirror] show {} (scroll {} in range)", mirror.id, scroll_top);
            mirror.visible = true;
        }

        mirror.left = Some(table_rect.x as i32 - viewport.scroll_x as i32);
    }

    /// Current state, read from the document. A mirror whose element has
    /// been removed out-of-band reports Hidden.
    pub fn visibility(&self, doc: &Document) -> Visibility {
        match doc.get(&self.mirror_id) {
            Some(mirror) if mirror.visible => Visibility::Visible,
            _ => Visibility::Hidden,
        }
    }

    /// Remove the mirror element from the document.
    pub fn detach(self, doc: &mut Document) -> Result<(), DomError> {
        doc.remove(&self.mirror_id)?;
        log::debug!("[mirror] detached {}", self.mirror_id);
        Ok(())
    }
}

/// The activation surface: attaches mirrors to tables and routes viewport
/// events to every attached instance in registration order.
#[derive(Debug, Default)]
pub struct MirrorSet {
    instances: Vec<HeaderMirror>,
}

impl MirrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a mirror to one table and register it for dispatch. The
    /// returned handle is the caller's key for [`detach`](Self::detach).
    pub fn attach(&mut self, doc: &mut Document, table_id: &str) -> Result<HeaderMirror, DomError> {
        let instance = HeaderMirror::attach(doc, table_id)?;
        self.instances.push(instance.clone());
        Ok(instance)
    }

    /// Attach to each table in order. Stops at the first failure; mirrors
    /// attached before the failure stay attached and registered.
    pub fn attach_all<'a>(
        &mut self,
        doc: &mut Document,
        table_ids: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<HeaderMirror>, DomError> {
        let mut handles = Vec::new();
        for table_id in table_ids {
            handles.push(self.attach(doc, table_id)?);
        }
        Ok(handles)
    }

    /// Route one viewport event to every instance: resize re-synchronizes
    /// widths, scroll re-synchronizes visibility and position. Instances
    /// run in registration order, and each one measures the document at its
    /// own invocation so it sees any writes made by earlier instances.
    pub fn dispatch(&self, doc: &mut Document, viewport: &Viewport, event: ViewportEvent) {
        match event {
            ViewportEvent::Resize { .. } => {
                for instance in &self.instances {
                    let layout = measure(doc);
                    instance.sync_widths(doc, &layout);
                }
            }
            ViewportEvent::Scroll { .. } => {
                for instance in &self.instances {
                    let layout = measure(doc);
                    instance.sync_visibility(doc, &layout, viewport);
                }
            }
        }
    }

    /// Unregister the handle's instance and remove its mirror element.
    pub fn detach(&mut self, doc: &mut Document, handle: HeaderMirror) -> Result<(), DomError> {
        self.instances
            .retain(|instance| instance.mirror_id != handle.mirror_id);
        handle.detach(doc)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
