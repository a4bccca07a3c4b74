// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_sheet --heading-base-level=0

//! Overstory Sheet: a headless, draggable bottom-sheet state machine.
//!
//! This crate models the interaction logic of a bottom sheet (a panel
//! anchored to the bottom edge of a viewport that can be dragged between
//! discrete display positions) without knowing anything about views,
//! gestures, animation, or haptics. It is intended to be shared across
//! different UI stacks and sheet implementations.
//!
//! The core concepts are:
//!
//! - [`SheetPosition`]: a small closed set of named vertical positions
//!   (hidden, collapsed, expanded, or pinned to custom offsets).
//! - [`SheetMetrics`]: the layout inputs offsets are computed from
//!   (viewport height, header height, bottom padding, and safe-area insets
//!   as [`kurbo::Insets`]), with [`SheetMetrics::resting_offset`] resolving
//!   a position to a concrete top-edge offset.
//! - [`SheetConfig`]: behavior flags ([`SheetFlags`]), the drag threshold,
//!   and the list of intermediate snap steps.
//! - [`SheetState`]: the state machine. Feed it drag translations and
//!   indicator taps; it updates the resting position and returns
//!   [`SheetEvent`]s describing what the host should do (trigger a haptic,
//!   start and finish a snap animation).
//!
//! This crate deliberately does **not** render, recognize gestures, or drive
//! animations. Host frameworks are responsible for:
//!
//! - Owning the sheet, header, and content views, and the drag recognizer.
//! - Feeding platform metrics in (window bounds, safe-area insets, measured
//!   header height) whenever they change.
//! - Positioning the sheet at [`SheetState::display_offset`] during a drag
//!   and animating it to the resting offset after each decision.
//! - Wiring [`SheetEvent`]s to their animation and haptic services.
//!
//! ## Minimal example
//!
//! A collapsed sheet flung upward past the drag threshold:
//!
//! ```rust
//! use overstory_sheet::{SheetEvent, SheetMetrics, SheetPosition, SheetState};
//!
//! let mut sheet = SheetState::new(SheetPosition::Collapsed);
//! *sheet.metrics_mut() = SheetMetrics::new(800.0);
//!
//! // Preview follows the finger…
//! sheet.drag_changed(-40.0);
//! assert_eq!(sheet.position(), SheetPosition::Collapsed);
//!
//! // …and the release snaps. With no steps configured an upward drag
//! // expands the sheet.
//! let events = sheet.drag_ended(-120.0);
//! assert_eq!(sheet.position(), SheetPosition::Expanded);
//! assert_eq!(events[0], SheetEvent::Haptic);
//! ```
//!
//! ## Intermediate steps
//!
//! Pinned positions become snap candidates between collapsed and expanded.
//! The decision projects the release point and picks the nearest step in the
//! drag's direction:
//!
//! ```rust
//! use overstory_sheet::{SheetConfig, SheetMetrics, SheetPosition, SheetState};
//!
//! let config = SheetConfig {
//!     steps: [SheetPosition::FromBottom(200.0)].into_iter().collect(),
//!     ..SheetConfig::default()
//! };
//! let mut sheet = SheetState::with_config(SheetPosition::Collapsed, config);
//! *sheet.metrics_mut() = SheetMetrics::new(800.0);
//!
//! // Collapsed rests at 720; the step rests at 520. A moderate upward drag
//! // lands on the step instead of jumping straight to Expanded.
//! sheet.drag_ended(-150.0);
//! assert_eq!(sheet.position(), SheetPosition::FromBottom(200.0));
//! ```
//!
//! All offsets live in the host's logical-pixel coordinate space, measured
//! downward from the top edge of the viewport, and are expected to be finite.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod metrics;
mod position;
mod sheet;

pub use config::{SheetConfig, SheetFlags};
pub use metrics::{DRAG_FLOOR, SheetMetrics};
pub use position::{Movement, SheetPosition};
pub use sheet::{SheetEvent, SheetEvents, SheetState, Transition};
