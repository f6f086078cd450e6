//! Registry of field widget types eligible for interactive cropping.
//!
//! The host declares which of its field widgets can carry the cropping
//! behavior, each with a set of capability tags. Other components extend
//! or rework the set through [`WidgetRegistry::alter`], the same contract
//! the host exposes to extension modules.

use std::collections::{BTreeMap, BTreeSet};

/// Capability tag: the widget renders thumbnail previews that can show
/// the cropped region.
pub const THUMBNAILS: &str = "thumbnails";

/// Widget types eligible for cropping, keyed by widget type name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetRegistry {
    widgets: BTreeMap<String, BTreeSet<String>>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the host's stock image field widget pre-registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("image_field", &[THUMBNAILS]);
        registry
    }

    /// Register a widget type with its capability tags.
    ///
    /// Registering an already-known widget replaces its capabilities.
    pub fn register(&mut self, widget: impl Into<String>, capabilities: &[&str]) {
        self.widgets.insert(
            widget.into(),
            capabilities.iter().map(|c| String::from(*c)).collect(),
        );
    }

    /// Hand the underlying map to an extension for in-place alteration —
    /// adding widget types, removing them, or editing capability sets.
    pub fn alter(&mut self, f: impl FnOnce(&mut BTreeMap<String, BTreeSet<String>>)) {
        f(&mut self.widgets);
    }

    /// Whether a widget type is eligible for cropping at all.
    pub fn is_supported(&self, widget: &str) -> bool {
        self.widgets.contains_key(widget)
    }

    /// Whether a widget type declares a capability.
    pub fn supports(&self, widget: &str, capability: &str) -> bool {
        self.widgets
            .get(widget)
            .is_some_and(|caps| caps.contains(capability))
    }

    /// Capability tags for a widget type.
    pub fn capabilities(&self, widget: &str) -> Option<&BTreeSet<String>> {
        self.widgets.get(widget)
    }

    /// Iterate over registered widget type names.
    pub fn widgets(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }
}
