//! Scaled-preview geometry.
//!
//! Two pure computations behind the cropping UI: fitting an image inside a
//! bounding box while preserving aspect ratio (sizing the overlay image to
//! the viewport), and laying out a clipped thumbnail of the cropped region
//! inside a fixed frame — pure client-side geometry, no server-side image
//! processing.
//!
//! Both are stateless functions of their inputs. Degenerate dimensions
//! (zero bounds, zero source) flow through as zero-sized output rather
//! than failing; the one input with no meaningful answer — an empty
//! selection, which admits no scale factor — is rejected up front.

use thiserror::Error;

use crate::selection::Selection;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Geometry computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The selection has zero width or height, so no scale factor exists.
    #[error("cannot lay out a preview for an empty selection")]
    EmptySelection,
}

/// Scale dimensions to fit within `max_w` × `max_h`, preserving aspect
/// ratio. Never upscales: dimensions that already fit come back unchanged.
///
/// The bounds are applied sequentially, width first. An image that is both
/// too wide and too tall is first fit to the width bound, then the scaled
/// height is checked against the height bound. The order is observable
/// whenever the box's aspect ratio differs from the image's, so it is part
/// of the contract.
///
/// # Example
///
/// ```
/// use zencrop::geometry::fit_within;
///
/// // Width bound first, height fits after.
/// assert_eq!(fit_within(800, 600, 400, 400), (400, 300));
/// // Both passes run: width → (400, 533), then height → (300, 400).
/// assert_eq!(fit_within(600, 800, 400, 400), (300, 400));
/// // Already fits.
/// assert_eq!(fit_within(100, 100, 400, 400), (100, 100));
/// ```
pub fn fit_within(source_w: u32, source_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let (mut w, mut h) = (source_w, source_h);
    if w > max_w {
        h = scaled(h, max_w, w);
        w = max_w;
    }
    if h > max_h {
        w = scaled(w, max_h, h);
        h = max_h;
    }
    (w, h)
}

/// Layout for a clipped thumbnail of the cropped region.
///
/// The host renders the *full* image scaled to `image` inside a container
/// of `frame` size with overflow hidden, shifted left and up by `offset`
/// (a negative margin or translation) so the crop region lands at the
/// frame's origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PreviewGeometry {
    /// Clipping viewport: the selection scaled to the preview bounds.
    pub frame: Size,
    /// The full source image scaled by the frame/selection ratio.
    pub image: Size,
    /// Scaled crop origin `(x, y)`, applied as a negative margin.
    pub offset: (u32, u32),
}

/// Compute the layout for a thumbnail showing only the cropped region.
///
/// The frame is the selection scaled to the `max_w` × `max_h` preview
/// bounds, width first; a selection smaller than the bounds is scaled up,
/// so the preview always fills its container (the derivative the preview
/// stands in for is generated at the style's target size, not at selection
/// size). The full `source_w` × `source_h` image is then scaled by the
/// same factors and offset so the crop aligns with the frame origin.
///
/// An empty selection has no scale factor and returns
/// [`GeometryError::EmptySelection`].
///
/// # Example
///
/// ```
/// use zencrop::geometry::{cropped_preview, Size};
/// use zencrop::selection::Selection;
///
/// let layout = cropped_preview(Selection::new(10, 10, 100, 50), 800, 400, 200, 200)
///     .unwrap();
/// assert_eq!(layout.frame, Size::new(200, 100));
/// assert_eq!(layout.image, Size::new(1600, 800));
/// assert_eq!(layout.offset, (20, 20));
/// ```
pub fn cropped_preview(
    selection: Selection,
    source_w: u32,
    source_h: u32,
    max_w: u32,
    max_h: u32,
) -> Result<PreviewGeometry, GeometryError> {
    if selection.is_empty() {
        return Err(GeometryError::EmptySelection);
    }

    let (frame_w, frame_h) = scale_to_bounds(selection.width, selection.height, max_w, max_h);
    let scale_x = frame_w as f64 / selection.width as f64;
    let scale_y = frame_h as f64 / selection.height as f64;

    Ok(PreviewGeometry {
        frame: Size::new(frame_w, frame_h),
        image: Size::new(
            (scale_x * source_w as f64).round() as u32,
            (scale_y * source_h as f64).round() as u32,
        ),
        offset: (
            (scale_x * selection.x as f64).round() as u32,
            (scale_y * selection.y as f64).round() as u32,
        ),
    })
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Scale dimensions to the bounds, width first, in either direction.
/// Unlike [`fit_within`], dimensions smaller than the bounds scale up.
fn scale_to_bounds(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let mut new_w = max_w;
    let mut new_h = scaled(h, max_w, w);
    if new_h > max_h {
        new_w = scaled(new_w, max_h, new_h);
        new_h = max_h;
    }
    (new_w, new_h)
}

/// Floor of `value * num / den`, in u64 so large dimensions cannot overflow.
/// Callers guarantee `den > 0`.
fn scaled(value: u32, num: u32, den: u32) -> u32 {
    (value as u64 * num as u64 / den as u64).min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fit_within ──────────────────────────────────────────────────────

    #[test]
    fn fit_width_bound_first() {
        // 800×600 into 400×400: width pass → (400, 300), height fits.
        assert_eq!(fit_within(800, 600, 400, 400), (400, 300));
    }

    #[test]
    fn fit_both_passes_run() {
        // 600×800 into 400×400: width pass → (400, 533), height pass
        // rescales → (300, 400). The intermediate floor is observable:
        // 400 * 400 / 533 = 300.18… → 300, not 400 * (400/800) = 200.
        assert_eq!(fit_within(600, 800, 400, 400), (300, 400));
    }

    #[test]
    fn fit_noop_when_already_fits() {
        assert_eq!(fit_within(100, 100, 400, 400), (100, 100));
    }

    #[test]
    fn fit_exact_bounds_is_noop() {
        assert_eq!(fit_within(400, 400, 400, 400), (400, 400));
    }

    #[test]
    fn fit_height_only_exceeds() {
        // Width fits, height doesn't: only the second pass runs.
        assert_eq!(fit_within(200, 800, 400, 400), (100, 400));
    }

    #[test]
    fn fit_zero_source_is_noop() {
        // 0×0 "fits" any bounds; nothing to scale.
        assert_eq!(fit_within(0, 0, 400, 400), (0, 0));
    }

    #[test]
    fn fit_zero_bounds_collapse() {
        assert_eq!(fit_within(800, 600, 0, 0), (0, 0));
    }

    #[test]
    fn fit_large_dimensions_no_overflow() {
        let (w, h) = fit_within(u32::MAX, u32::MAX, 100, 100);
        assert_eq!((w, h), (100, 100));
    }

    // ── cropped_preview ─────────────────────────────────────────────────

    #[test]
    fn preview_scales_up_small_selection() {
        // 100×50 crop of an 800×400 image in a 200×200 preview:
        // frame (200, 100), scale ×2, image 1600×800, offset (20, 20).
        let layout = cropped_preview(Selection::new(10, 10, 100, 50), 800, 400, 200, 200)
            .unwrap();
        assert_eq!(layout.frame, Size::new(200, 100));
        assert_eq!(layout.image, Size::new(1600, 800));
        assert_eq!(layout.offset, (20, 20));
    }

    #[test]
    fn preview_scales_down_large_selection() {
        // 400×400 crop into a 200×200 preview: frame (200, 200), scale ×0.5.
        let layout = cropped_preview(Selection::new(100, 60, 400, 400), 800, 600, 200, 200)
            .unwrap();
        assert_eq!(layout.frame, Size::new(200, 200));
        assert_eq!(layout.image, Size::new(400, 300));
        assert_eq!(layout.offset, (50, 30));
    }

    #[test]
    fn preview_tall_selection_height_bound() {
        // 100×400 crop into 200×200: width pass → (200, 800), height pass
        // → (50, 200). scale = 0.5 on both axes.
        let layout = cropped_preview(Selection::new(0, 0, 100, 400), 1000, 500, 200, 200)
            .unwrap();
        assert_eq!(layout.frame, Size::new(50, 200));
        assert_eq!(layout.image, Size::new(500, 250));
    }

    #[test]
    fn preview_offset_rounds() {
        // frame 200×100 over a 150×75 crop → scale 4/3; offset
        // round(10 * 4/3) = round(13.33) = 13.
        let layout = cropped_preview(Selection::new(10, 10, 150, 75), 600, 300, 200, 200)
            .unwrap();
        assert_eq!(layout.frame, Size::new(200, 100));
        assert_eq!(layout.offset, (13, 13));
    }

    #[test]
    fn preview_empty_selection_rejected() {
        assert_eq!(
            cropped_preview(Selection::new(10, 10, 0, 50), 800, 400, 200, 200),
            Err(GeometryError::EmptySelection)
        );
        assert_eq!(
            cropped_preview(Selection::new(10, 10, 50, 0), 800, 400, 200, 200),
            Err(GeometryError::EmptySelection)
        );
    }

    #[test]
    fn preview_zero_bounds_degrade_to_zero() {
        // No panic: everything scales to zero and the host shows nothing.
        let layout = cropped_preview(Selection::new(10, 10, 100, 50), 800, 400, 0, 0)
            .unwrap();
        assert_eq!(layout.frame, Size::new(0, 0));
        assert_eq!(layout.image, Size::new(0, 0));
        assert_eq!(layout.offset, (0, 0));
    }
}
