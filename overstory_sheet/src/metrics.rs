// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout metrics and resting-offset computation.

use kurbo::Insets;

use crate::SheetPosition;

/// Visual floor for the sheet's top edge while dragging, in logical pixels.
///
/// [`SheetState::display_offset`](crate::SheetState::display_offset) never
/// reports an offset above this value, and downward snap decisions measure
/// from `resting_offset + DRAG_FLOOR`.
pub const DRAG_FLOOR: f64 = 60.0;

/// Header height assumed until the host feeds a measurement.
const DEFAULT_HEADER_HEIGHT: f64 = 80.0;

/// Layout metrics the sheet's offsets are computed from.
///
/// All values live in the host's logical-pixel coordinate space, with offsets
/// measured downward from the top edge of the viewport. Hosts query these
/// from their platform (window bounds, safe-area query, header measurement)
/// and update them whenever they change; offsets are recomputed per query,
/// never cached, so a rotation or keyboard appearance between gestures is
/// picked up by the next decision.
///
/// Negative inputs are clamped to zero; non-finite inputs are caught by debug
/// assertions, as callers are expected to avoid them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetMetrics {
    max_height: f64,
    header_height: f64,
    bottom_padding: f64,
    insets: Insets,
}

impl SheetMetrics {
    /// Creates metrics for a viewport of the given height, with the default
    /// header height, no bottom padding, and zero safe-area insets.
    #[must_use]
    pub fn new(max_height: f64) -> Self {
        Self {
            max_height: max_height.max(0.0),
            header_height: DEFAULT_HEADER_HEIGHT,
            bottom_padding: 0.0,
            insets: Insets::ZERO,
        }
    }

    /// Returns the viewport height.
    #[must_use]
    pub const fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Sets the viewport height.
    pub fn set_max_height(&mut self, max_height: f64) {
        debug_assert!(
            max_height.is_finite(),
            "SheetMetrics heights must be finite; got {max_height:?}"
        );
        self.max_height = max_height.max(0.0);
    }

    /// Returns the header height used for offset computation.
    #[must_use]
    pub const fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Sets the header height.
    pub fn set_header_height(&mut self, header_height: f64) {
        debug_assert!(
            header_height.is_finite(),
            "SheetMetrics heights must be finite; got {header_height:?}"
        );
        self.header_height = header_height.max(0.0);
    }

    /// Returns the fixed padding reserved below the content.
    #[must_use]
    pub const fn bottom_padding(&self) -> f64 {
        self.bottom_padding
    }

    /// Sets the fixed padding reserved below the content.
    pub fn set_bottom_padding(&mut self, bottom_padding: f64) {
        debug_assert!(
            bottom_padding.is_finite(),
            "SheetMetrics heights must be finite; got {bottom_padding:?}"
        );
        self.bottom_padding = bottom_padding.max(0.0);
    }

    /// Returns the safe-area insets.
    #[must_use]
    pub const fn insets(&self) -> Insets {
        self.insets
    }

    /// Sets the safe-area insets. Only the top (`y0`) and bottom (`y1`)
    /// components participate in offset computation.
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    /// Distance from the top of the viewport at which the sheet's top edge
    /// rests for the given position.
    ///
    /// Every visible position floors at the top safe-area inset, so the sheet
    /// never rests inside the status-bar region even when the viewport is
    /// shorter than the header.
    #[must_use]
    pub fn resting_offset(&self, position: SheetPosition) -> f64 {
        let top = self.insets.y0;
        match position {
            SheetPosition::Expanded => top,
            SheetPosition::Collapsed => {
                let offset = self.max_height
                    - self.header_height
                    - self.bottom_padding
                    - self.insets.y1
                    - top;
                offset.max(top)
            }
            SheetPosition::FromTop(top_offset) => {
                let offset = top_offset - self.bottom_padding - self.insets.y1 - top;
                offset.max(top)
            }
            SheetPosition::FromBottom(content_height) => {
                let offset = self.max_height
                    - self.header_height
                    - content_height
                    - self.bottom_padding
                    - self.insets.y1
                    - top;
                offset.max(top)
            }
            SheetPosition::Hidden => self.max_height * 1.5,
        }
    }
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::SheetMetrics;
    use crate::SheetPosition;

    fn metrics() -> SheetMetrics {
        // 800pt viewport, 80pt header, status bar 40pt, home indicator 20pt.
        let mut metrics = SheetMetrics::new(800.0);
        metrics.set_insets(Insets::new(0.0, 40.0, 0.0, 20.0));
        metrics
    }

    #[test]
    fn resting_offsets_follow_metrics() {
        let metrics = metrics();
        assert_eq!(metrics.resting_offset(SheetPosition::Expanded), 40.0);
        // 800 - 80 - 0 - 20 - 40.
        assert_eq!(metrics.resting_offset(SheetPosition::Collapsed), 660.0);
        // 300 - 0 - 20 - 40.
        assert_eq!(metrics.resting_offset(SheetPosition::FromTop(300.0)), 240.0);
        // 800 - 80 - 200 - 0 - 20 - 40.
        assert_eq!(
            metrics.resting_offset(SheetPosition::FromBottom(200.0)),
            460.0
        );
    }

    #[test]
    fn hidden_rests_off_screen() {
        let metrics = metrics();
        assert_eq!(metrics.resting_offset(SheetPosition::Hidden), 1200.0);
    }

    #[test]
    fn offsets_floor_at_top_inset() {
        // A viewport shorter than the header: every visible position pins to
        // the top inset instead of going negative.
        let mut metrics = SheetMetrics::new(60.0);
        metrics.set_insets(Insets::new(0.0, 40.0, 0.0, 20.0));
        assert_eq!(metrics.resting_offset(SheetPosition::Collapsed), 40.0);
        assert_eq!(metrics.resting_offset(SheetPosition::FromTop(10.0)), 40.0);
        assert_eq!(
            metrics.resting_offset(SheetPosition::FromBottom(500.0)),
            40.0
        );
    }

    #[test]
    fn negative_inputs_are_clamped() {
        let mut metrics = SheetMetrics::new(-100.0);
        assert_eq!(metrics.max_height(), 0.0);

        metrics.set_header_height(-5.0);
        assert_eq!(metrics.header_height(), 0.0);

        metrics.set_bottom_padding(-1.0);
        assert_eq!(metrics.bottom_padding(), 0.0);
    }
}
