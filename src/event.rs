use crossterm::event::{Event as CrosstermEvent, MouseEventKind};

/// The two signals the pinned-header machinery reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The viewport changed size.
    Resize { width: u16, height: u16 },
    /// The viewport scrolled by a delta, in cells.
    Scroll { delta_x: i16, delta_y: i16 },
}

impl ViewportEvent {
    /// Map a raw terminal event onto a viewport signal. Input that is
    /// neither a resize nor a wheel scroll maps to nothing; key-driven
    /// scrolling is the application's own policy.
    pub fn from_crossterm(event: &CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(Self::Scroll {
                    delta_x: 0,
                    delta_y: -1,
                }),
                MouseEventKind::ScrollDown => Some(Self::Scroll {
                    delta_x: 0,
                    delta_y: 1,
                }),
                MouseEventKind::ScrollLeft => Some(Self::Scroll {
                    delta_x: -1,
                    delta_y: 0,
                }),
                MouseEventKind::ScrollRight => Some(Self::Scroll {
                    delta_x: 1,
                    delta_y: 0,
                }),
                _ => None,
            },
            _ => None,
        }
    }
}
