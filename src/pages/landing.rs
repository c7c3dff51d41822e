use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{
    window, Element, HtmlButtonElement, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::components::dashboard::{DashboardButton, DashboardSection};
use crate::components::signup_modal::SignupModal;
use crate::components::toast::Toast;
use crate::config;
use crate::dashboard::{DashboardAction, DashboardState};
use crate::form;
use crate::motion;
use crate::submissions;

/// Shows `text` in the toast and hides it again after a fixed delay.
/// Earlier timers are not cancelled, so a quick series of messages may disappear early.
fn show_toast(message: &UseStateHandle<AttrValue>, visible: &UseStateHandle<bool>, text: String) {
    message.set(text.into());
    visible.set(true);
    let hide = visible.setter();
    Timeout::new(config::TOAST_DISMISS_MS, move || hide.set(false)).forget();
}

/// Creates the dashboard button, or re-highlights it when it already exists.
fn announce(dashboard: &UseReducerHandle<DashboardState>) {
    let highlight_ms = dashboard.highlight_ms();
    dashboard.dispatch(DashboardAction::Announce);
    let dispatcher = dashboard.dispatcher();
    Timeout::new(highlight_ms, move || dispatcher.dispatch(DashboardAction::Settle)).forget();
}

fn scroll_to_section(section_ref: NodeRef) {
    // Deferred so the section is no longer `hidden` when we scroll.
    Timeout::new(0, move || {
        if let Some(section) = section_ref.cast::<Element>() {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            options.block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
    .forget();
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);
    let cta_clicked = use_state(|| false);
    let entries = use_state(|| Rc::new(submissions::load()));
    let dashboard = use_reducer(DashboardState::default);
    let toast_message = use_state(AttrValue::default);
    let toast_visible = use_state(|| false);

    let form_ref = use_node_ref();
    let submit_ref = use_node_ref();
    let section_ref = use_node_ref();

    // On first mount: bring back the dashboard button for stored history and play the entrance.
    {
        let dashboard = dashboard.clone();
        let stored = entries.len();
        use_effect_with_deps(
            move |_| {
                if stored > 0 {
                    log::debug!("Restoring dashboard with {} stored signups", stored);
                    announce(&dashboard);
                }
                if let Some(document) = window().and_then(|w| w.document()) {
                    motion::play_entrance(&document);
                }
                || ()
            },
            (),
        );
    }

    let on_cta = {
        let modal_open = modal_open.clone();
        let cta_clicked = cta_clicked.clone();
        Callback::from(move |_: MouseEvent| {
            cta_clicked.set(true);
            let release = cta_clicked.setter();
            Timeout::new(config::CTA_PULSE_MS, move || release.set(false)).forget();
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let on_submit = {
        let modal_open = modal_open.clone();
        let entries = entries.clone();
        let dashboard = dashboard.clone();
        let toast_message = toast_message.clone();
        let toast_visible = toast_visible.clone();
        let form_ref = form_ref.clone();
        let submit_ref = submit_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let submit_button = submit_ref.cast::<HtmlButtonElement>();
            if let Some(button) = &submit_button {
                button.set_disabled(true);
            }

            // Storage is the source of truth; another tab may have written since the last render.
            let outcome = submissions::read().map(|history| {
                submissions::record(&history, &form::read_name(&form), submissions::now_millis())
            });
            match outcome {
                Ok(Ok(history)) => match submissions::commit(history, submissions::save) {
                    Ok(history) => {
                        modal_open.set(false);
                        log::info!("Recorded signup #{}", history.len());
                        let name = history
                            .last()
                            .map(|entry| entry.name.clone())
                            .unwrap_or_default();
                        announce(&dashboard);
                        entries.set(Rc::new(history));
                        show_toast(
                            &toast_message,
                            &toast_visible,
                            format!("Thanks, {} — you were added to the dashboard.", name),
                        );
                        form.reset();
                    }
                    Err(e) => {
                        log::warn!("Could not persist signup: {:?}", e);
                        show_toast(&toast_message, &toast_visible, e.to_string());
                    }
                },
                Ok(Err(reason)) => {
                    log::debug!("Signup rejected: {:?}", reason);
                    show_toast(&toast_message, &toast_visible, reason.to_string());
                }
                Err(e) => {
                    log::warn!("Refusing to write over stored signups: {:?}", e);
                    show_toast(&toast_message, &toast_visible, e.to_string());
                }
            }

            if let Some(button) = submit_button {
                button.set_disabled(false);
            }
        })
    };

    let on_toggle_dashboard = {
        let entries = entries.clone();
        let dashboard = dashboard.clone();
        let section_ref = section_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let action = dashboard.toggle_action(entries.len());
            if matches!(action, DashboardAction::Reveal) {
                entries.set(Rc::new(submissions::load()));
                scroll_to_section(section_ref.clone());
            }
            dashboard.dispatch(action);
        })
    };

    let on_clear = {
        let entries = entries.clone();
        let dashboard = dashboard.clone();
        Callback::from(move |_: MouseEvent| {
            submissions::clear();
            entries.set(Rc::new(submissions::load()));
            dashboard.dispatch(DashboardAction::Clear);
            gloo_console::log!("Signup history cleared");
        })
    };

    let count = entries.len();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #f5f5f5;
                        background: radial-gradient(circle at top, #1d2b4a 0%, #0d0d12 60%);
                    }
                    .main-nav {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1.5rem 2rem;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.3rem;
                        letter-spacing: 0.02em;
                    }
                    .nav-btn {
                        position: relative;
                        background: rgba(30, 144, 255, 0.12);
                        border: 1px solid rgba(30, 144, 255, 0.4);
                        color: #fff;
                        border-radius: 999px;
                        padding: 0.5rem 1.1rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .nav-btn.active {
                        background: rgba(30, 144, 255, 0.35);
                    }
                    .nav-btn.new {
                        animation: popIn 0.9s ease-out;
                    }
                    .nav-badge {
                        display: inline-block;
                        margin-left: 0.5rem;
                        min-width: 1.4rem;
                        padding: 0 0.35rem;
                        border-radius: 999px;
                        background: #1e90ff;
                        font-size: 0.8rem;
                        text-align: center;
                    }
                    .nav-badge.hidden {
                        display: none;
                    }
                    @keyframes popIn {
                        0% { transform: scale(0.6); opacity: 0; }
                        60% { transform: scale(1.08); opacity: 1; }
                        100% { transform: scale(1); }
                    }
                    .hero {
                        display: grid;
                        grid-template-columns: 1.3fr 1fr;
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 3rem auto;
                        padding: 0 2rem;
                        align-items: center;
                    }
                    .hero-card, .floating-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2.5rem;
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    }
                    .hero-card h1 {
                        font-size: 2.6rem;
                        margin: 0 0 1rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .feature-list {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0;
                    }
                    .feature-list li {
                        padding: 0.4rem 0;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .cta {
                        background: #1e90ff;
                        color: #fff;
                        border: none;
                        border-radius: 12px;
                        padding: 0.9rem 2rem;
                        font-size: 1.1rem;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .cta:hover {
                        box-shadow: 0 0 24px rgba(30, 144, 255, 0.5);
                    }
                    .cta.clicked {
                        transform: scale(0.95);
                    }
                    .floating-card {
                        animation: float 6s ease-in-out infinite;
                    }
                    @keyframes float {
                        0%, 100% { translate: 0 0; }
                        50% { translate: 0 -8px; }
                    }
                    .dashboard-section {
                        max-width: 1100px;
                        margin: 2rem auto;
                        padding: 0 2rem;
                    }
                    .dashboard-section[hidden] {
                        display: none;
                    }
                    .dashboard-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .dashboard-list {
                        list-style: none;
                        padding: 0;
                    }
                    .dashboard-list li {
                        padding: 0.6rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        display: none;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.6);
                        z-index: 20;
                    }
                    .modal-backdrop.active {
                        display: flex;
                    }
                    .modal {
                        position: relative;
                        width: 100%;
                        max-width: 440px;
                        background: #1a1a1a;
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .modal form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .modal input {
                        padding: 0.7rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: #111;
                        color: #fff;
                    }
                    .modal input:focus {
                        outline: 2px solid #1e90ff;
                    }
                    .modal-close {
                        position: absolute;
                        top: 0.8rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #aaa;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .modal-actions {
                        display: flex;
                        justify-content: flex-end;
                        gap: 0.75rem;
                        margin-top: 1rem;
                    }
                    .btn {
                        border-radius: 8px;
                        padding: 0.6rem 1.2rem;
                        cursor: pointer;
                        border: 1px solid transparent;
                    }
                    .btn.primary {
                        background: #1e90ff;
                        color: #fff;
                    }
                    .btn.primary:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                    .btn.secondary {
                        background: transparent;
                        color: #ddd;
                        border-color: rgba(255, 255, 255, 0.2);
                    }
                    .toast {
                        position: fixed;
                        left: 50%;
                        bottom: 2rem;
                        transform: translate(-50%, 150%);
                        background: #222;
                        border: 1px solid rgba(30, 144, 255, 0.3);
                        border-radius: 12px;
                        padding: 0.9rem 1.4rem;
                        opacity: 0;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                        z-index: 30;
                    }
                    .toast.show {
                        transform: translate(-50%, 0);
                        opacity: 1;
                    }
                    @media (max-width: 800px) {
                        .hero {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .floating-card, .nav-btn.new {
                            animation: none;
                        }
                    }
                "#}
            </style>

            <nav id="mainNav" class="main-nav">
                <span class="nav-logo">{"Founders Circle"}</span>
                if let Some(toggle) = dashboard.toggle {
                    <DashboardButton toggle={toggle} count={count} on_click={on_toggle_dashboard} />
                }
            </nav>

            <header class="hero">
                <div class="hero-card">
                    <h1>{"Get in before the doors open"}</h1>
                    <p>{"Founding members shape the product, get early builds and keep their price for life."}</p>
                    <ul class="feature-list">
                        <li>{"Early access to every release"}</li>
                        <li>{"A direct line to the people building it"}</li>
                        <li>{"Founding price, locked in"}</li>
                    </ul>
                    <button
                        id="cta"
                        type="button"
                        class={classes!("cta", (*cta_clicked).then(|| "clicked"))}
                        onclick={on_cta}
                    >
                        {"Join the founding list"}
                    </button>
                </div>
                <div class="floating-card">
                    <h3>{"No spam"}</h3>
                    <p>{"We only write when there is something to try. Your name stays in this browser."}</p>
                </div>
            </header>

            <DashboardSection
                entries={(*entries).clone()}
                visible={dashboard.section_visible(count)}
                section_ref={section_ref}
                on_clear={on_clear}
            />

            <SignupModal
                open={*modal_open}
                on_close={on_close}
                on_submit={on_submit}
                form_ref={form_ref}
                submit_ref={submit_ref}
            />

            <Toast message={(*toast_message).clone()} visible={*toast_visible} />
        </div>
    }
}
