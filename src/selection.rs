//! Crop selection rectangle and its persisted string form.
//!
//! The host form stores a selection as a single text value,
//! `"x|y|width|height"` — four decimal integers, pipe-delimited, with the
//! empty string meaning "no selection". That string is the sole durable
//! representation of the crop: it is decoded when the overlay opens and
//! re-encoded on every change.
//!
//! Decoding is total. Missing, non-numeric, or negative parts coerce to
//! zero, so a malformed value degrades to an empty selection instead of
//! failing. Semantic validation (the selection lying within the image
//! bounds) is the caller's concern, not the codec's.
//!
//! # Example
//!
//! ```
//! use zencrop::selection::{self, Selection};
//!
//! let sel = Selection::new(10, 20, 300, 150);
//! let stored = selection::encode(Some(sel));
//! assert_eq!(stored, "10|20|300|150");
//! assert_eq!(selection::decode(&stored), Some(sel));
//! ```

/// Rectangular crop region in original-image pixel coordinates.
///
/// A selection with zero width or height is empty — it describes "no crop",
/// and encodes as the empty string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Left edge, pixels from the image's left.
    pub x: u32,
    /// Top edge, pixels from the image's top.
    pub y: u32,
    /// Selection width in pixels.
    pub width: u32,
    /// Selection height in pixels.
    pub height: u32,
}

impl Selection {
    /// Create a new selection.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub const fn x2(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (`y + height`).
    pub const fn y2(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the selection describes no crop at all.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Corner form `[x, y, x2, y2]` — the shape interactive crop tools
    /// take an initial selection in.
    pub const fn corners(&self) -> [u32; 4] {
        [self.x, self.y, self.x2(), self.y2()]
    }
}

/// Delimiter between the four encoded fields.
const DELIMITER: char = '|';

/// Encode a selection for the hidden form field.
///
/// Returns the empty string for `None` or an empty selection — the host
/// stores "no crop" as an empty field value. Inputs are already integral;
/// no rounding happens here.
pub fn encode(selection: Option<Selection>) -> String {
    match selection {
        Some(s) if !s.is_empty() => {
            let Selection {
                x,
                y,
                width,
                height,
            } = s;
            format!("{x}{DELIMITER}{y}{DELIMITER}{width}{DELIMITER}{height}")
        }
        _ => String::new(),
    }
}

/// Decode a persisted field value.
///
/// Returns `None` for an empty value. Otherwise never fails: each of the
/// first four `|`-separated parts is coerced to a non-negative integer
/// (missing or unparseable parts become 0) and surplus parts are ignored.
/// A value in the legacy `;`-delimited form has no `|` separators at all,
/// so every field coerces to 0 and it degrades to an empty selection.
pub fn decode(text: &str) -> Option<Selection> {
    if text.is_empty() {
        return None;
    }
    let mut parts = text.split(DELIMITER);
    let mut field = || coerce(parts.next());
    Some(Selection::new(field(), field(), field(), field()))
}

/// Coerce one encoded field to a pixel value. Missing or unparseable → 0.
fn coerce(part: Option<&str>) -> u32 {
    part.and_then(|p| p.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let sel = Selection::new(10, 20, 30, 40);
        assert_eq!(decode(&encode(Some(sel))), Some(sel));
    }

    #[test]
    fn round_trip_origin() {
        // x and y of 0 are valid coordinates, not "absent".
        let sel = Selection::new(0, 0, 800, 600);
        assert_eq!(encode(Some(sel)), "0|0|800|600");
        assert_eq!(decode("0|0|800|600"), Some(sel));
    }

    #[test]
    fn encode_none_is_empty_string() {
        assert_eq!(encode(None), "");
    }

    #[test]
    fn encode_empty_selection_is_empty_string() {
        assert_eq!(encode(Some(Selection::new(10, 10, 0, 50))), "");
        assert_eq!(encode(Some(Selection::new(10, 10, 50, 0))), "");
    }

    #[test]
    fn decode_empty_is_none() {
        assert_eq!(decode(""), None);
    }

    #[test]
    fn decode_missing_field_coerces_to_zero() {
        // Three parts: height is missing → 0, not an error.
        let sel = decode("10|20|30").unwrap();
        assert_eq!(sel, Selection::new(10, 20, 30, 0));
        assert!(sel.is_empty());
    }

    #[test]
    fn decode_non_numeric_coerces_to_zero() {
        assert_eq!(decode("10|abc|30|40"), Some(Selection::new(10, 0, 30, 40)));
        assert_eq!(decode("garbage"), Some(Selection::new(0, 0, 0, 0)));
    }

    #[test]
    fn decode_negative_coerces_to_zero() {
        assert_eq!(decode("-5|20|30|40"), Some(Selection::new(0, 20, 30, 40)));
    }

    #[test]
    fn decode_fractional_coerces_to_zero() {
        // Stored selections are integral; anything else is unparseable.
        assert_eq!(decode("10.5|20|30|40"), Some(Selection::new(0, 20, 30, 40)));
    }

    #[test]
    fn decode_surplus_parts_ignored() {
        assert_eq!(
            decode("10|20|30|40|99|extra"),
            Some(Selection::new(10, 20, 30, 40))
        );
    }

    #[test]
    fn decode_tolerates_whitespace() {
        assert_eq!(decode(" 10 | 20 |30|40"), Some(Selection::new(10, 20, 30, 40)));
    }

    #[test]
    fn legacy_semicolon_form_degrades_to_empty() {
        // "10;20;30;40" has no '|' separators: one unparseable part, the
        // rest missing. It must never misparse as a real selection.
        let sel = decode("10;20;30;40").unwrap();
        assert_eq!(sel, Selection::new(0, 0, 0, 0));
        assert!(sel.is_empty());
    }

    #[test]
    fn derived_edges() {
        let sel = Selection::new(10, 20, 30, 40);
        assert_eq!(sel.x2(), 40);
        assert_eq!(sel.y2(), 60);
        assert_eq!(sel.corners(), [10, 20, 40, 60]);
    }
}
