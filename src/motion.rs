use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

pub const ENTRANCE_TARGETS: &str = ".hero-card, .feature-list li, .floating-card";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const STAGGER_MS: u32 = 120;

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Start delay of the `index`-th animated element.
pub fn entrance_delay(index: u32) -> u32 {
    STAGGER_MS.saturating_mul(index)
}

/// Fades and lifts the decorative blocks into place one after another.
/// Does nothing when the user asked for reduced motion.
pub fn play_entrance(document: &Document) {
    if prefers_reduced_motion() {
        log::debug!("Reduced motion requested, skipping entrance animation");
        return;
    }
    let Ok(nodes) = document.query_selector_all(ENTRANCE_TARGETS) else {
        return;
    };

    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok());

    for (index, element) in (0u32..).zip(elements) {
        let style = element.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(10px)");

        Timeout::new(entrance_delay(index), move || {
            let style = element.style();
            let _ = style.set_property("transition", "opacity .6s ease,transform .6s ease");
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_per_element() {
        let delays: Vec<u32> = (0..4).map(entrance_delay).collect();
        assert_eq!(delays, vec![0, 120, 240, 360]);
    }

    #[test]
    fn delay_saturates_instead_of_overflowing() {
        assert_eq!(entrance_delay(u32::MAX), u32::MAX);
    }
}
