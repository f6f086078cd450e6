//! Image style settings and the crop constraints derived from them.
//!
//! A style is a named image-derivative configuration owned by the host and
//! rendered into the page as read-only data. The client never applies the
//! effect itself — it only derives the options the interactive crop tool
//! opens with: a fixed aspect ratio, a minimum selection size, or nothing.
//!
//! # Example
//!
//! ```
//! use zencrop::style::{CropConstraints, StyleEffect};
//!
//! let effect = StyleEffect::CropAndScale {
//!     width: 400,
//!     height: 300,
//!     respect_minimum: true,
//! };
//! let constraints = effect.constraints();
//! assert_eq!(constraints.aspect_ratio, Some(4.0 / 3.0));
//! assert_eq!(constraints.min_size, Some((400, 300)));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Effect a style applies when the derivative is generated server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum StyleEffect {
    /// No cropping constraints.
    #[default]
    None,

    /// Crop with independent minimum dimensions. Either axis may be
    /// absent, leaving that axis unconstrained.
    Crop {
        #[serde(default)]
        min_width: Option<u32>,
        #[serde(default)]
        min_height: Option<u32>,
    },

    /// Crop to a fixed target aspect ratio, then scale to the target size.
    CropAndScale {
        /// Target derivative width in pixels.
        width: u32,
        /// Target derivative height in pixels.
        height: u32,
        /// Never let the selection go smaller than the target dimensions,
        /// so the derivative is never upscaled.
        #[serde(default)]
        respect_minimum: bool,
    },
}

impl StyleEffect {
    /// Derive the options for the interactive crop tool.
    pub fn constraints(&self) -> CropConstraints {
        match *self {
            StyleEffect::None => CropConstraints::default(),

            StyleEffect::Crop {
                min_width,
                min_height,
            } => {
                let min_size = match (min_width.unwrap_or(0), min_height.unwrap_or(0)) {
                    (0, 0) => None,
                    (w, h) => Some((w, h)),
                };
                CropConstraints {
                    aspect_ratio: None,
                    min_size,
                }
            }

            StyleEffect::CropAndScale {
                width,
                height,
                respect_minimum,
            } => CropConstraints {
                // A zero target height admits no ratio.
                aspect_ratio: (height > 0).then(|| width as f64 / height as f64),
                min_size: respect_minimum.then_some((width, height)),
            },
        }
    }
}

/// Options the interactive crop tool is opened with.
///
/// Derived from a [`StyleEffect`]; both fields absent means the tool opens
/// unconstrained.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CropConstraints {
    /// Fixed width : height ratio the selection must keep.
    pub aspect_ratio: Option<f64>,
    /// Minimum selection size as `(width, height)`; a 0 leaves that axis
    /// free.
    pub min_size: Option<(u32, u32)>,
}

/// One named style as rendered by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    /// Human-readable style name, shown in the overlay header.
    #[serde(default)]
    pub label: String,
    /// Derivative effect, inlined next to the label.
    #[serde(flatten)]
    pub effect: StyleEffect,
}

/// Read-only map from style identifier to settings.
///
/// Supplied by the host (server-rendered configuration). Styles the map
/// does not know resolve to no settings, so the crop tool opens
/// unconstrained for them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    styles: BTreeMap<String, StyleSettings>,
}

impl StyleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a style.
    pub fn insert(&mut self, id: impl Into<String>, settings: StyleSettings) {
        self.styles.insert(id.into(), settings);
    }

    /// Settings for a style identifier.
    pub fn get(&self, id: &str) -> Option<&StyleSettings> {
        self.styles.get(id)
    }

    /// Crop tool options for a style identifier; unconstrained when the
    /// style is unknown.
    pub fn constraints(&self, id: &str) -> CropConstraints {
        self.get(id)
            .map(|s| s.effect.constraints())
            .unwrap_or_default()
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the map holds no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over `(identifier, settings)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleSettings)> {
        self.styles.iter().map(|(id, s)| (id.as_str(), s))
    }
}
