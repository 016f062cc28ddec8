//! Leptos Sortable
//!
//! Mouse-based reordering for flat lists in Leptos.
//! Uses a movement threshold to distinguish click from drag; a completed
//! drag reports the dragged row's identifier and the slot it was dropped on.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Reorder gesture signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Identifier of the row being dragged, once the threshold is crossed
    pub dragging_id: RwSignal<Option<String>>,
    /// Slot index the pointer is currently over
    pub drop_slot: RwSignal<Option<usize>>,
    /// Briefly true right after a drop, so click handlers can ignore it
    pub drag_just_ended: RwSignal<bool>,
    /// Row id under a pressed mouse button (not yet dragging)
    pending_id: RwSignal<Option<String>>,
    /// Start position for movement detection
    start_x: RwSignal<i32>,
    start_y: RwSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    SortSignals {
        dragging_id: RwSignal::new(None),
        drop_slot: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending_id: RwSignal::new(None),
        start_x: RwSignal::new(0),
        start_y: RwSignal::new(0),
    }
}

/// Reset all gesture state. Call this after the rendered row set changes
/// (e.g. a reload re-rendered the list) so a stale drag cannot complete
/// against rows that no longer exist.
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_id.set(None);
    sort.drop_slot.set(None);
    sort.pending_id.set(None);
    sort.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = sort.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a draggable row.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(sort: SortSignals, row_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            sort.pending_id.set(Some(row_id.clone()));
            sort.start_x.set(ev.client_x());
            sort.start_y.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for the row occupying `slot`
pub fn make_on_slot_mouseenter(sort: SortSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_id.read_untracked().is_some() {
            sort.drop_slot.set(Some(slot));
        }
    }
}

/// Create mouseleave handler for the list container
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_id.read_untracked().is_some() {
            sort.drop_slot.set(None);
        }
    }
}

/// Create mousemove handler for the document - starts dragging once the
/// pointer has moved beyond the threshold
fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_id.get_untracked();

        if pending.is_some() && sort.dragging_id.read_untracked().is_none() {
            let dx = (ev.client_x() - sort.start_x.get_untracked()).abs();
            let dy = (ev.client_y() - sort.start_y.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_id.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind the global mouseup handler for drop detection.
/// `on_drop(row_id, slot)` fires when a drag ends over a slot.
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(String, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = sort.dragging_id.get_untracked();
        let drop_slot = sort.drop_slot.get_untracked();

        sort.pending_id.set(None);

        if let (Some(dragged), Some(slot)) = (dragging_id, drop_slot) {
            end_drag(&sort);
            on_drop(dragged, slot);
        } else {
            // Not dragging, just a click; let it fire naturally
            end_drag(&sort);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(sort);
}

/// Final row sequence after dropping `dragged` on `slot`.
/// Slots index the list as rendered; out-of-range slots clamp to the end.
pub fn apply_reorder(ids: &[String], dragged: &str, slot: usize) -> Vec<String> {
    let mut result: Vec<String> = ids.iter().filter(|id| id.as_str() != dragged).cloned().collect();
    let slot = slot.min(result.len());
    result.insert(slot, dragged.to_string());
    result
}
