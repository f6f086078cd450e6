//! Crop selection state, codec, and preview geometry for manual image cropping.
//!
//! Pure computation behind a cropping widget: the selection string persisted
//! in a hidden form field, the constraints an image style imposes on the
//! interactive crop tool, the one-at-a-time editing session, and the
//! geometry for overlay and clipped-thumbnail rendering. No DOM, no pixel
//! operations — the host UI layer owns rendering and event wiring and calls
//! in here.
//!
//! # Modules
//!
//! - [`selection`] — the crop rectangle and its `"x|y|width|height"` codec
//! - [`geometry`] — bound fitting and cropped-preview layout
//! - [`style`] — image style settings and derived crop constraints
//! - [`session`] — editing session over the persisted field value
//! - [`registry`] — widget types eligible for cropping
//!
//! # Example
//!
//! ```
//! use zencrop::{CropEditor, Selection, StyleEffect, StyleSettings, cropped_preview};
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
//! // The editor guards the single overlay session.
//! let mut editor = CropEditor::new();
//! let session = editor.open(Some(&style), "").expect("nothing open yet");
//!
//! // The crop tool reports a drag; the returned string goes into the field.
//! let stored = session.update(Selection::new(10, 10, 600, 400));
//! assert_eq!(stored, "10|10|600|400");
//!
//! // On redisplay, the stored value drives the clipped thumbnail.
//! let selection = session.selection().expect("a selection was made");
//! let preview = cropped_preview(selection, 1200, 800, 200, 200).unwrap();
//! assert_eq!(preview.frame.width, 200);
//!
//! editor.close();
//! ```

#![forbid(unsafe_code)]

pub mod geometry;
pub mod registry;
pub mod selection;
pub mod session;
pub mod style;

// Re-exports: core types from each module
pub use geometry::{GeometryError, PreviewGeometry, Size, cropped_preview, fit_within};
pub use registry::WidgetRegistry;
pub use selection::{Selection, decode, encode};
pub use session::{CropEditor, CropSession};
pub use style::{CropConstraints, StyleEffect, StyleMap, StyleSettings};
