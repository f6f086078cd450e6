//! Interactive cropping session state.
//!
//! At most one overlay is open at a time: [`CropEditor`] owns that guard,
//! and a [`CropSession`] holds the selection being edited. Every mutation
//! returns the encoded value the host writes back to the hidden form field
//! — the persisted string is the sole durable representation of the crop,
//! written on every change, not just on close.
//!
//! All computation is synchronous and happens in direct response to host
//! events (open, drag, cancel, close). Closing discards the in-memory
//! state immediately; there is no deferred cleanup.
//!
//! # Example
//!
//! ```
//! use zencrop::{CropEditor, Selection, StyleEffect, StyleSettings};
//!
//! let style = StyleSettings {
//!     label: "Teaser".into(),
//!     effect: StyleEffect::CropAndScale {
//!         width: 300,
//!         height: 200,
//!         respect_minimum: true,
//!     },
//! };
//!
//! let mut editor = CropEditor::new();
//! let session = editor.open(Some(&style), "").expect("no session open yet");
//! assert_eq!(session.constraints().aspect_ratio, Some(1.5));
//!
//! let stored = session.update(Selection::new(10, 10, 600, 400));
//! assert_eq!(stored, "10|10|600|400");
//! assert_eq!(editor.close().as_deref(), Some("10|10|600|400"));
//! ```

use tracing::{debug, trace};

use crate::selection::{self, Selection};
use crate::style::{CropConstraints, StyleSettings};

/// State of one open cropping overlay.
///
/// Created through [`CropEditor::open`]. Holds the constraints the crop
/// tool was opened with, the selection decoded from the persisted field
/// value at open time, and the in-memory selection being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct CropSession {
    constraints: CropConstraints,
    previous: Option<Selection>,
    current: Option<Selection>,
}

impl CropSession {
    fn open(settings: Option<&StyleSettings>, field_value: &str) -> Self {
        let previous = selection::decode(field_value);
        Self {
            constraints: settings
                .map(|s| s.effect.constraints())
                .unwrap_or_default(),
            previous,
            current: previous,
        }
    }

    /// Constraints the crop tool was opened with.
    pub fn constraints(&self) -> CropConstraints {
        self.constraints
    }

    /// Selection decoded from the field value when the session opened.
    pub fn previous(&self) -> Option<Selection> {
        self.previous
    }

    /// Current in-memory selection.
    pub fn selection(&self) -> Option<Selection> {
        self.current
    }

    /// Initial `[x, y, x2, y2]` corners for the crop tool, if a selection
    /// was persisted when the session opened.
    pub fn initial_corners(&self) -> Option<[u32; 4]> {
        self.previous.map(|s| s.corners())
    }

    /// Encoded value for the hidden field, as of the current selection.
    pub fn field_value(&self) -> String {
        selection::encode(self.current)
    }

    /// Record a selection change from the crop tool.
    ///
    /// Returns the value to persist. Called from the tool's select/change
    /// callbacks on every drag step.
    pub fn update(&mut self, sel: Selection) -> String {
        trace!(
            x = sel.x,
            y = sel.y,
            width = sel.width,
            height = sel.height,
            "selection changed"
        );
        self.current = Some(sel);
        self.field_value()
    }

    /// Restore the selection held when the session opened.
    ///
    /// Returns the value to persist — the open-time encoding, or the empty
    /// string when the session opened without a selection.
    pub fn reset(&mut self) -> String {
        self.current = self.previous;
        self.field_value()
    }

    /// Drop the selection entirely. Returns the empty field value.
    pub fn clear(&mut self) -> String {
        self.current = None;
        self.field_value()
    }
}

/// Guard allowing at most one open cropping session.
///
/// One editor exists per field widget. Opening while a session is active
/// is a no-op; the host keeps routing events to the session already open.
#[derive(Debug, Default)]
pub struct CropEditor {
    session: Option<CropSession>,
}

impl CropEditor {
    /// Create an editor with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a style over the persisted field value.
    ///
    /// `settings` is the style's configuration, or `None` for an unknown
    /// style (the tool then opens unconstrained). Returns `None` when a
    /// session is already open.
    pub fn open(
        &mut self,
        settings: Option<&StyleSettings>,
        field_value: &str,
    ) -> Option<&mut CropSession> {
        if self.session.is_some() {
            debug!("crop session already open, ignoring");
            return None;
        }
        debug!(field_value, "opening crop session");
        self.session = Some(CropSession::open(settings, field_value));
        self.session.as_mut()
    }

    /// The open session, if any.
    pub fn session(&mut self) -> Option<&mut CropSession> {
        self.session.as_mut()
    }

    /// Whether a session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Close the session, discarding its state.
    ///
    /// Returns the final field value, or `None` when no session was open.
    pub fn close(&mut self) -> Option<String> {
        let session = self.session.take()?;
        let value = session.field_value();
        debug!(%value, "closing crop session");
        Some(value)
    }

    /// Reset to the open-time selection, then close — the cancel path
    /// (pressing escape in the overlay).
    ///
    /// Returns the value the host writes back, or `None` when no session
    /// was open.
    pub fn cancel(&mut self) -> Option<String> {
        let mut session = self.session.take()?;
        let value = session.reset();
        debug!(%value, "crop session cancelled");
        Some(value)
    }
}
