// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet state machine: drag tracking, snap decisions, and events.

use smallvec::SmallVec;

use crate::{DRAG_FLOOR, Movement, SheetConfig, SheetFlags, SheetMetrics, SheetPosition};

/// A change of resting position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// The position before the change; `None` before the first accepted
    /// decision.
    pub from: Option<SheetPosition>,
    /// The position the sheet should animate toward.
    pub to: SheetPosition,
}

/// What the host should do after an accepted snap decision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SheetEvent {
    /// Trigger impact feedback. Emitted only when the position changed.
    Haptic,
    /// Begin animating the sheet toward its new resting offset.
    SnapStarted(Transition),
    /// The decision is complete; finalize any transition bookkeeping.
    SnapFinished(Transition),
}

/// Events produced by a single operation, in emission order.
pub type SheetEvents = SmallVec<[SheetEvent; 3]>;

/// A draggable bottom sheet, headless.
///
/// This type:
/// - stores the current [`SheetPosition`], the last [`Movement`], and the
///   live drag translation,
/// - owns a [`SheetConfig`] and [`SheetMetrics`],
/// - maps gesture endings and indicator taps to snap decisions,
/// - reports the side effects of each decision as [`SheetEvent`]s.
///
/// It does *not* know about any widget/view system; host frameworks are
/// expected to wrap this, feed it gesture callbacks and metrics, and wire the
/// returned events to their animation and haptic services.
#[derive(Clone, Debug)]
pub struct SheetState {
    config: SheetConfig,
    metrics: SheetMetrics,
    position: SheetPosition,
    last_position: Option<SheetPosition>,
    last_movement: Option<Movement>,
    translation: f64,
}

impl SheetState {
    /// Creates a sheet resting at `position` with default configuration and
    /// empty metrics.
    #[must_use]
    pub fn new(position: SheetPosition) -> Self {
        Self::with_config(position, SheetConfig::default())
    }

    /// Creates a sheet resting at `position` with the given configuration.
    #[must_use]
    pub fn with_config(position: SheetPosition, config: SheetConfig) -> Self {
        Self {
            config,
            metrics: SheetMetrics::default(),
            position,
            last_position: None,
            last_movement: None,
            translation: 0.0,
        }
    }

    /// Returns a shared reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut SheetConfig {
        &mut self.config
    }

    /// Returns a shared reference to the layout metrics.
    #[must_use]
    pub fn metrics(&self) -> &SheetMetrics {
        &self.metrics
    }

    /// Returns a mutable reference to the layout metrics.
    pub fn metrics_mut(&mut self) -> &mut SheetMetrics {
        &mut self.metrics
    }

    /// Feeds a measured header height into the metrics.
    ///
    /// A [`SheetConfig::header_height`] override wins over the measurement.
    pub fn measure_header(&mut self, measured: f64) {
        let header = self.config.header_height.unwrap_or(measured);
        self.metrics.set_header_height(header);
    }

    /// Returns the current resting position.
    #[must_use]
    pub const fn position(&self) -> SheetPosition {
        self.position
    }

    /// Returns the direction of the last accepted drag, if any.
    #[must_use]
    pub const fn last_movement(&self) -> Option<Movement> {
        self.last_movement
    }

    /// Returns the live drag translation (positive is downward).
    #[must_use]
    pub const fn translation(&self) -> f64 {
        self.translation
    }

    /// Returns the offset the sheet rests at for its current position.
    #[must_use]
    pub fn resting_offset(&self) -> f64 {
        self.metrics.resting_offset(self.position)
    }

    /// Returns the offset the host should place the sheet's top edge at right
    /// now: the resting offset plus the live drag translation, floored at
    /// [`DRAG_FLOOR`].
    #[must_use]
    pub fn display_offset(&self) -> f64 {
        (self.resting_offset() + self.translation).max(DRAG_FLOOR)
    }

    /// Returns `true` if the sheet surface should be shown at all.
    #[must_use]
    pub const fn sheet_visible(&self) -> bool {
        self.position.is_visible()
    }

    /// Returns `true` if the content region below the header should be shown.
    #[must_use]
    pub const fn content_visible(&self) -> bool {
        self.position.shows_content()
    }

    /// Records the vertical translation of an in-progress drag.
    ///
    /// This only moves the previewed sheet (see [`Self::display_offset`]);
    /// the resting position never changes before the gesture ends.
    pub fn drag_changed(&mut self, translation: f64) {
        debug_assert!(
            translation.is_finite(),
            "drag translations must be finite; got {translation:?}"
        );
        self.translation = translation;
    }

    /// Ends a drag with the given final translation and decides where to
    /// snap.
    ///
    /// Translations within `±drag_threshold` leave the position unchanged and
    /// return no events; the host animates the sheet back to its resting
    /// offset. Beyond the threshold the sign selects the direction and the
    /// decision snaps to the nearest position in that direction. The live
    /// translation is cleared either way.
    pub fn drag_ended(&mut self, translation: f64) -> SheetEvents {
        debug_assert!(
            translation.is_finite(),
            "drag translations must be finite; got {translation:?}"
        );
        self.translation = 0.0;
        if translation < -self.config.drag_threshold {
            self.decide(Movement::Up, translation)
        } else if translation > self.config.drag_threshold {
            self.decide(Movement::Down, translation)
        } else {
            SheetEvents::new()
        }
    }

    /// Advances the position in response to a tap on the drag indicator.
    ///
    /// Replays a synthetic drag just past the threshold in the direction of
    /// the last movement, reversing at the ends: [`SheetPosition::Expanded`]
    /// bounces down, [`SheetPosition::Collapsed`] bounces up. Does nothing
    /// when [`SheetFlags::TAP_TO_CYCLE`] is cleared or no drag has been
    /// accepted yet.
    pub fn cycle(&mut self) -> SheetEvents {
        if !self.config.flags.contains(SheetFlags::TAP_TO_CYCLE) {
            return SheetEvents::new();
        }
        let nudge = self.config.drag_threshold + 1.0;
        match self.last_movement {
            Some(Movement::Up) => {
                if matches!(self.position, SheetPosition::Expanded) {
                    self.decide(Movement::Down, nudge)
                } else {
                    self.decide(Movement::Up, -nudge)
                }
            }
            Some(Movement::Down) => {
                if matches!(self.position, SheetPosition::Collapsed) {
                    self.decide(Movement::Up, nudge)
                } else {
                    self.decide(Movement::Down, -nudge)
                }
            }
            None => SheetEvents::new(),
        }
    }

    /// Moves the sheet to `position` programmatically, emitting the same
    /// events as a snap decision.
    pub fn set_position(&mut self, position: SheetPosition) -> SheetEvents {
        self.apply(position)
    }

    /// Maps a threshold-crossing drag to the next position, if any.
    fn decide(&mut self, direction: Movement, movement: f64) -> SheetEvents {
        self.last_movement = Some(direction);
        let next = match direction {
            Movement::Up => {
                if self.config.steps.is_empty() {
                    self.config
                        .flags
                        .contains(SheetFlags::DRAG_TO_EXPAND)
                        .then_some(SheetPosition::Expanded)
                } else {
                    self.nearest_up(movement)
                }
            }
            Movement::Down => {
                if matches!(self.position, SheetPosition::Collapsed) {
                    self.config
                        .flags
                        .contains(SheetFlags::DRAG_TO_HIDE)
                        .then_some(SheetPosition::Hidden)
                } else {
                    self.nearest_down(movement)
                }
            }
        };
        match next {
            Some(to) => self.apply(to),
            None => SheetEvents::new(),
        }
    }

    /// Upward decision: project the release point and pick the nearest step
    /// strictly above the current offset, or `Expanded` on an overshoot past
    /// the top of the viewport.
    fn nearest_up(&self, movement: f64) -> Option<SheetPosition> {
        let current = self.metrics.resting_offset(self.position);
        let projected = current + movement;
        if projected <= 0.0 && self.config.flags.contains(SheetFlags::DRAG_TO_EXPAND) {
            return Some(SheetPosition::Expanded);
        }
        self.nearest_step(projected, |offset| offset < current)
    }

    /// Downward decision: measure from `resting + DRAG_FLOOR` and pick the
    /// nearest step strictly below, collapsing on an overshoot past the
    /// bottom of the viewport or when no step lies below.
    ///
    /// Hiding is always a second, separate gesture from `Collapsed`; a single
    /// long downward drag never skips straight to `Hidden`.
    fn nearest_down(&self, movement: f64) -> Option<SheetPosition> {
        let current = self.metrics.resting_offset(self.position) + DRAG_FLOOR;
        let projected = current + movement;
        if projected >= self.metrics.max_height() {
            return Some(SheetPosition::Collapsed);
        }
        if let Some(step) = self.nearest_step(projected, |offset| offset > current) {
            return Some(step);
        }
        Some(SheetPosition::Collapsed)
    }

    /// The configured step nearest to `target` among those whose resting
    /// offset satisfies `filter`. Ties keep the earlier step.
    fn nearest_step(&self, target: f64, filter: impl Fn(f64) -> bool) -> Option<SheetPosition> {
        let mut best: Option<(SheetPosition, f64)> = None;
        for &step in &self.config.steps {
            let offset = self.metrics.resting_offset(step);
            if !filter(offset) {
                continue;
            }
            let distance = if offset > target {
                offset - target
            } else {
                target - offset
            };
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((step, distance));
            }
        }
        best.map(|(step, _)| step)
    }

    /// Commits a decision and reports its side effects.
    fn apply(&mut self, to: SheetPosition) -> SheetEvents {
        let from = self.last_position;
        let changed = from != Some(to);
        let transition = Transition { from, to };
        self.position = to;
        self.last_position = Some(to);

        let mut events = SheetEvents::new();
        if changed {
            events.push(SheetEvent::Haptic);
        }
        events.push(SheetEvent::SnapStarted(transition));
        events.push(SheetEvent::SnapFinished(transition));
        events
    }
}
