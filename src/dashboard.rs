//! State behind the dashboard section and its navigation toggle.

use std::rc::Rc;

use yew::Reducible;

use crate::config;

/// The lazily created "Dashboard" navigation button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    /// Carries the `new` highlight class.
    pub fresh: bool,
    /// The section is open because the button opened it.
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub toggle: Option<Toggle>,
    /// Hidden by the toggle even though entries exist.
    pub collapsed: bool,
}

pub enum DashboardAction {
    /// A submission was recorded (or found on load): create or re-highlight the button.
    Announce,
    /// Highlight timer ran out.
    Settle,
    /// Toggle button clicked while the section was hidden.
    Reveal,
    /// Toggle button clicked while the section was showing.
    Hide,
    /// History wiped: drop the button.
    Clear,
}

impl DashboardState {
    pub fn section_visible(&self, count: usize) -> bool {
        count > 0 && !self.collapsed
    }

    /// How long the `new` highlight of an announcement lasts.
    pub fn highlight_ms(&self) -> u32 {
        if self.toggle.is_some() {
            config::TOGGLE_REPLAY_MS
        } else {
            config::TOGGLE_INTRO_MS
        }
    }

    /// What a toggle click does, given the `shown` entries currently rendered.
    pub fn toggle_action(&self, shown: usize) -> DashboardAction {
        if self.section_visible(shown) {
            DashboardAction::Hide
        } else {
            DashboardAction::Reveal
        }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::Announce => {
                let toggle = next.toggle.get_or_insert_with(Toggle::default);
                toggle.fresh = true;
                next.collapsed = false;
            }
            DashboardAction::Settle => {
                if let Some(toggle) = next.toggle.as_mut() {
                    toggle.fresh = false;
                }
            }
            DashboardAction::Reveal | DashboardAction::Hide => {
                let reveal = matches!(action, DashboardAction::Reveal);
                next.collapsed = !reveal;
                if let Some(toggle) = next.toggle.as_mut() {
                    toggle.active = reveal;
                }
            }
            DashboardAction::Clear => {
                next.toggle = None;
                next.collapsed = false;
            }
        }
        next.into()
    }
}

/// Badge text and whether it is hidden.
pub fn badge(count: usize) -> (String, bool) {
    (count.to_string(), count == 0)
}
