//! Wires the offset controls to the DOM.
//!
//! Expected elements per axis: `<axis>-inc` and `<axis>-dec` buttons plus a
//! `<axis>-value` readout, with a `save-config` button alongside. Elements
//! that are missing are simply left unwired.

use std::cell::RefCell;
use std::rc::Rc;

use pole_core::{format_axis_value, Axis, OffsetTracker, NUDGE_STEP_M};
use web_sys as web;

use crate::bridge::WebBridge;
use crate::dom;

pub fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let tracker = Rc::new(RefCell::new(OffsetTracker::new()));

    for axis in Axis::ALL {
        dom::set_text(&document, &value_id(axis), &format_axis_value(0.0));
        wire_axis(&document, axis, &tracker);
    }
    wire_save(&document, &tracker);
    Ok(())
}

fn value_id(axis: Axis) -> String {
    format!("{}-value", axis.name())
}

fn wire_axis(document: &web::Document, axis: Axis, tracker: &Rc<RefCell<OffsetTracker>>) {
    for (suffix, delta) in [("inc", NUDGE_STEP_M), ("dec", -NUDGE_STEP_M)] {
        let id = format!("{}-{}", axis.name(), suffix);
        let tracker = tracker.clone();
        let document = document.clone();
        dom::add_click_listener(&document.clone(), &id, move || {
            nudge(&document, &tracker, axis, delta);
        });
    }
}

fn nudge(
    document: &web::Document,
    tracker: &Rc<RefCell<OffsetTracker>>,
    axis: Axis,
    delta: f64,
) {
    match tracker.borrow_mut().nudge(axis, delta, &WebBridge) {
        Ok(adjusted) => {
            dom::set_text(document, &value_id(axis), &format_axis_value(adjusted.value));
        }
        Err(e) => log::error!("[panel] nudge failed: {e}"),
    }
}

fn wire_save(document: &web::Document, tracker: &Rc<RefCell<OffsetTracker>>) {
    let tracker = tracker.clone();
    dom::add_click_listener(document, "save-config", move || {
        if let Err(e) = tracker.borrow().persist(&WebBridge) {
            log::error!("[panel] save failed: {e}");
        }
    });
}
