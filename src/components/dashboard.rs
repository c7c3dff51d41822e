use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::dashboard::{self, Toggle};
use crate::submissions::{self, Submission};

#[derive(Properties, PartialEq)]
pub struct DashboardButtonProps {
    pub toggle: Toggle,
    pub count: usize,
    pub on_click: Callback<MouseEvent>,
}

/// Navigation button that shows or hides the dashboard, with a count badge.
#[function_component(DashboardButton)]
pub fn dashboard_button(props: &DashboardButtonProps) -> Html {
    let (badge_text, badge_hidden) = dashboard::badge(props.count);

    html! {
        <button
            id="dashboardBtn"
            type="button"
            class={classes!(
                "nav-btn",
                "dashboard",
                props.toggle.fresh.then(|| "new"),
                props.toggle.active.then(|| "active")
            )}
            aria-controls={config::DASHBOARD_SECTION_ID}
            onclick={props.on_click.clone()}
        >
            {"Dashboard"}
            <span class={classes!("nav-badge", badge_hidden.then(|| "hidden"))}>{badge_text}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardSectionProps {
    pub entries: Rc<Vec<Submission>>,
    pub visible: bool,
    pub section_ref: NodeRef,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(DashboardSection)]
pub fn dashboard_section(props: &DashboardSectionProps) -> Html {
    html! {
        <section
            id={config::DASHBOARD_SECTION_ID}
            ref={props.section_ref.clone()}
            class="dashboard-section"
            hidden={!props.visible}
        >
            <div class="dashboard-header">
                <h2>{"Signups"}</h2>
                <button id="clearHistoryBtn" type="button" class="btn secondary" onclick={props.on_clear.clone()}>
                    {"Clear history"}
                </button>
            </div>
            <ul id="dashboardList" class="dashboard-list">
                {
                    props.entries.iter().enumerate().map(|(idx, entry)| {
                        html! {
                            <li key={format!("{}-{}", entry.time, idx)}>
                                {format!("{}. {}", idx + 1, submissions::display_name(entry))}
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </section>
    }
}
