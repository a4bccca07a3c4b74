// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display positions and drag direction.

/// A named vertical position for the sheet.
///
/// Positions are resolved to concrete top-edge offsets by
/// [`SheetMetrics::resting_offset`](crate::SheetMetrics::resting_offset);
/// the same position can rest at different offsets as metrics change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SheetPosition {
    /// Off-screen below the bottom edge of the viewport.
    Hidden,
    /// Only the header (and drag indicator) peeks above the bottom edge.
    Collapsed,
    /// The top edge of the sheet rests at the top safe-area inset.
    Expanded,
    /// Pinned so the top edge rests near the given distance from the top of
    /// the viewport.
    FromTop(f64),
    /// Pinned so the given content height is exposed above the header.
    FromBottom(f64),
}

impl SheetPosition {
    /// Returns `true` if the sheet has any visible presence at this position.
    ///
    /// Hosts typically map this to the opacity (or presence) of the whole
    /// sheet surface.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Returns `true` if content below the header should be shown.
    ///
    /// At [`Self::Collapsed`] only the header peeks above the bottom edge, so
    /// hosts hide the content region to avoid a sliver of it bleeding through.
    #[must_use]
    pub const fn shows_content(self) -> bool {
        !matches!(self, Self::Collapsed)
    }
}

/// Direction of the last accepted drag movement.
///
/// Tap-to-cycle uses this to decide which way to continue walking the
/// configured positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Toward the top of the viewport (smaller offsets).
    Up,
    /// Toward the bottom of the viewport (larger offsets).
    Down,
}
