//! Focus containment for the signup modal.

use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};

pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";

/// Focusable descendants of `root` in document order. With `rendered_only`,
/// elements without an offset parent (`display: none` somewhere up the tree)
/// are skipped.
pub fn focusables(root: &Element, rendered_only: bool) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|el| !rendered_only || el.offset_parent().is_some())
        .collect()
}

/// Where Tab should wrap to, if anywhere.
///
/// `active` is the index of the currently focused element among `count`
/// focusables. Forward Tab on the last wraps to the first, Shift+Tab on the
/// first wraps to the last. `None` leaves focus movement to the browser.
pub fn wrap_target(count: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (active, backwards) {
        (Some(i), false) if i == last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

pub fn active_element() -> Option<HtmlElement> {
    window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Something that can take keyboard focus.
pub trait Focusable {
    fn take_focus(&self) -> bool;
}

impl Focusable for HtmlElement {
    fn take_focus(&self) -> bool {
        self.focus().is_ok()
    }
}

/// Focuses the first of `items`. Returns false when there is none.
pub fn focus_first_of<T: Focusable>(items: &[T]) -> bool {
    items.first().map_or(false, Focusable::take_focus)
}

/// Remembers who had focus before the modal opened and hands it back on close.
pub struct FocusMemory<T: Focusable> {
    previous: Option<T>,
}

impl<T: Focusable> FocusMemory<T> {
    /// Records `previous` and moves focus to the first of `inside`.
    pub fn enter(previous: Option<T>, inside: &[T]) -> Self {
        if !focus_first_of(inside) {
            log::debug!("Nothing focusable inside the modal");
        }
        Self { previous }
    }

    /// Gives focus back. Returns false when nothing was focused before.
    pub fn restore(self) -> bool {
        self.previous.map_or(false, |el| el.take_focus())
    }
}

/// Applies the trap for one Tab press inside `container`. Returns true when
/// focus was moved and the browser default must be suppressed.
pub fn trap_tab(container: &Element, backwards: bool) -> bool {
    let items = focusables(container, true);
    let active = active_element();
    let position = active
        .as_ref()
        .and_then(|current| items.iter().position(|el| el == current));

    match wrap_target(items.len(), position, backwards) {
        Some(target) => {
            let _ = items[target].focus();
            true
        }
        None => false,
    }
}
