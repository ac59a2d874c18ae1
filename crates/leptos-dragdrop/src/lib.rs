//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Generic over the key identifying a draggable element.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
pub struct DndSignals<K: Copy + PartialEq + Send + Sync + 'static> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<K>>,
    pub drop_target_write: WriteSignal<Option<K>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<K: Copy + PartialEq + Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Copy + PartialEq + Send + Sync + 'static> Copy for DndSignals<K> {}

impl<K: Copy + PartialEq + Send + Sync + 'static> DndSignals<K> {
    /// True for a short moment after a drag ends, so the click that follows
    /// the mouseup can be ignored
    pub fn just_ended(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the trailing click is suppressed after a drag
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals<K: Copy + PartialEq + Send + Sync + 'static>() -> DndSignals<K> {
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<K: Copy + PartialEq + Send + Sync + 'static>(dnd: &DndSignals<K>) {
    let was_dragging = dnd.dragging_id_read.get_untracked().is_some();
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K: Copy + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<K>,
    id: K,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag once the pointer moved far enough
fn bind_global_mousemove<K, S>(dnd: DndSignals<K>, on_start: S)
where
    K: Copy + PartialEq + Send + Sync + 'static,
    S: Fn(K) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.get_untracked() else { return };
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(Some(pending));
            on_start(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop targets
pub fn make_on_mouseenter<K: Copy + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<K>,
    id: K,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != id {
                dnd.drop_target_write.set(Some(id));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: Copy + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<K>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind the document-level handlers.
///
/// `on_start` fires when a pending press turns into a drag. `on_finish`
/// fires on mouseup after a real drag with the dragged id and the hovered
/// target, if any; a plain click never reaches it.
pub fn bind_global_handlers<K, S, F>(dnd: DndSignals<K>, on_start: S, on_finish: F)
where
    K: Copy + PartialEq + Send + Sync + 'static,
    S: Fn(K) + 'static,
    F: Fn(K, Option<K>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);
        if let Some(dragged) = dragging_id {
            on_finish(dragged, drop_target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_start);
}
