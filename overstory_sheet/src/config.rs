// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior configuration: gesture flags, thresholds, and snap steps.

use smallvec::SmallVec;

use crate::SheetPosition;

/// Minimum drag distance before a release triggers a snap decision.
const DEFAULT_DRAG_THRESHOLD: f64 = 30.0;

bitflags::bitflags! {
    /// Flags controlling which gestures may change the sheet's position.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SheetFlags: u8 {
        /// An upward overshoot past the top of the viewport may land on
        /// [`SheetPosition::Expanded`].
        const DRAG_TO_EXPAND = 0b0000_0001;
        /// A downward drag from [`SheetPosition::Collapsed`] hides the sheet.
        const DRAG_TO_HIDE   = 0b0000_0010;
        /// A tap on the drag indicator advances the position.
        const TAP_TO_CYCLE   = 0b0000_0100;
    }
}

impl Default for SheetFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Behavior configuration for a [`SheetState`](crate::SheetState).
///
/// Fields are public so hosts can use struct-update syntax over
/// [`SheetConfig::default`]:
///
/// ```
/// use overstory_sheet::{SheetConfig, SheetFlags, SheetPosition};
///
/// let config = SheetConfig {
///     flags: SheetFlags::all() - SheetFlags::DRAG_TO_HIDE,
///     steps: [SheetPosition::FromBottom(200.0)].into_iter().collect(),
///     ..SheetConfig::default()
/// };
/// assert_eq!(config.drag_threshold, 30.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Which gestures may change the position.
    pub flags: SheetFlags,
    /// Minimum `|translation|`, in logical pixels, before a release triggers
    /// a snap decision. Releases at exactly the threshold do not snap.
    pub drag_threshold: f64,
    /// Overrides the measured header height when set.
    ///
    /// Applied when the host feeds a measurement through
    /// [`SheetState::measure_header`](crate::SheetState::measure_header).
    pub header_height: Option<f64>,
    /// Intermediate pinned positions a drag may snap to, in addition to the
    /// `Collapsed`/`Expanded`/`Hidden` endpoints.
    pub steps: SmallVec<[SheetPosition; 4]>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            flags: SheetFlags::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            header_height: None,
            steps: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SheetConfig, SheetFlags};

    #[test]
    fn defaults_enable_every_gesture() {
        let config = SheetConfig::default();
        assert_eq!(config.flags, SheetFlags::all());
        assert_eq!(config.drag_threshold, 30.0);
        assert!(config.header_height.is_none());
        assert!(config.steps.is_empty());
    }

    #[test]
    fn flags_can_be_cleared_individually() {
        let flags = SheetFlags::default() - SheetFlags::DRAG_TO_HIDE;
        assert!(flags.contains(SheetFlags::DRAG_TO_EXPAND));
        assert!(!flags.contains(SheetFlags::DRAG_TO_HIDE));
        assert!(flags.contains(SheetFlags::TAP_TO_CYCLE));
    }
}
