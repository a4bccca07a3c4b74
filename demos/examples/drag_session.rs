// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drag session against the sheet state machine.
//!
//! This example stands in for a host UI: it feeds the sheet a sequence of
//! gestures, prints the offsets a view layer would animate between, and shows
//! the events a host would wire to its haptic and animation services.
//!
//! Run:
//! - `cargo run -p overstory_demos --example drag_session`

use kurbo::Insets;
use overstory_sheet::{
    SheetConfig, SheetEvent, SheetEvents, SheetMetrics, SheetPosition, SheetState,
};

fn report(label: &str, sheet: &SheetState, events: &SheetEvents) {
    println!(
        "{label}: now {:?} (offset {:.1})",
        sheet.position(),
        sheet.resting_offset()
    );
    if events.is_empty() {
        println!("  (no change)");
    }
    for event in events {
        match event {
            SheetEvent::Haptic => println!("  haptic pulse"),
            SheetEvent::SnapStarted(t) => println!("  animate {:?} -> {:?}", t.from, t.to),
            SheetEvent::SnapFinished(t) => println!("  settled at {:?}", t.to),
        }
    }
}

fn main() {
    // An 800pt phone viewport with a 40pt status bar, a 20pt home indicator,
    // and two pinned positions between collapsed and expanded.
    let config = SheetConfig {
        steps: [
            SheetPosition::FromTop(300.0),
            SheetPosition::FromBottom(200.0),
        ]
        .into_iter()
        .collect(),
        ..SheetConfig::default()
    };
    let mut sheet = SheetState::with_config(SheetPosition::Collapsed, config);

    let mut metrics = SheetMetrics::new(800.0);
    metrics.set_insets(Insets::new(0.0, 40.0, 0.0, 20.0));
    *sheet.metrics_mut() = metrics;
    // The host measured the header view after layout.
    sheet.measure_header(88.0);

    println!(
        "resting at {:?} (offset {:.1})",
        sheet.position(),
        sheet.resting_offset()
    );

    // Finger tracking: the preview follows the drag without committing.
    for translation in [-40.0, -90.0, -140.0] {
        sheet.drag_changed(translation);
        println!(
            "  dragging {translation:>7.1} -> display offset {:>6.1}",
            sheet.display_offset()
        );
    }

    // Release past the threshold: snap to the nearest step above.
    let events = sheet.drag_ended(-140.0);
    report("flick up", &sheet, &events);

    // Keep walking up with an indicator tap.
    let events = sheet.cycle();
    report("tap indicator", &sheet, &events);

    // A long downward drag collapses again; hiding is a separate gesture.
    let events = sheet.drag_ended(500.0);
    report("long drag down", &sheet, &events);

    // From collapsed, dragging down once more hides the sheet.
    let events = sheet.drag_ended(80.0);
    report("drag down again", &sheet, &events);
    println!("sheet visible: {}", sheet.sheet_visible());

    // Bring it back programmatically, as a host binding would.
    let events = sheet.set_position(SheetPosition::Collapsed);
    report("show again", &sheet, &events);
}
