use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};
use yew::prelude::*;

use crate::focus::{self, FocusMemory};

#[derive(Properties, PartialEq)]
pub struct SignupModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<SubmitEvent>,
    pub form_ref: NodeRef,
    pub submit_ref: NodeRef,
}

#[function_component(SignupModal)]
pub fn signup_modal(props: &SignupModalProps) -> Html {
    let backdrop_ref = use_node_ref();
    let dialog_ref = use_node_ref();

    // While open: remember who had focus, move it inside, trap Tab and listen for Escape.
    // The teardown runs when the modal closes and hands focus back.
    {
        let backdrop_ref = backdrop_ref.clone();
        let dialog_ref = dialog_ref.clone();
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let document = window().and_then(|w| w.document());
                let teardown: Box<dyn FnOnce()> = match document {
                    Some(document) if *open => {
                        let inside = backdrop_ref
                            .cast::<Element>()
                            .map(|backdrop| focus::focusables(&backdrop, false))
                            .unwrap_or_default();
                        let memory = FocusMemory::enter(focus::active_element(), &inside);

                        let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            match e.key().as_str() {
                                "Escape" => on_close.emit(()),
                                "Tab" => {
                                    if let Some(dialog) = dialog_ref.cast::<Element>() {
                                        if focus::trap_tab(&dialog, e.shift_key()) {
                                            e.prevent_default();
                                        }
                                    }
                                }
                                _ => {}
                            }
                        });
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );

                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            );
                            memory.restore();
                        })
                    }
                    _ => Box::new(|| ()),
                };
                teardown
            },
            props.open,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Only clicks landing on the backdrop itself close; clicks inside the dialog bubble up here too.
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            if target.is_some() && target == backdrop_ref.cast::<Element>() {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            id="modalBackdrop"
            ref={backdrop_ref}
            class={classes!("modal-backdrop", props.open.then(|| "active"))}
            aria-hidden={if props.open { "false" } else { "true" }}
            onclick={on_backdrop_click}
        >
            <div
                class="modal"
                ref={dialog_ref}
                role="dialog"
                aria-modal="true"
                aria-labelledby="modalTitle"
            >
                <button id="modalClose" type="button" class="modal-close" aria-label="Close" onclick={close.clone()}>
                    {"×"}
                </button>
                <h2 id="modalTitle">{"Become a founding member"}</h2>
                <p class="modal-lead">{"Leave your name and we'll put you on the list."}</p>
                <form id="signupForm" ref={props.form_ref.clone()} onsubmit={props.on_submit.clone()}>
                    <label for="signupName">{"Name"}</label>
                    <input
                        id="signupName"
                        name="name"
                        type="text"
                        placeholder="Your name"
                        autocomplete="name"
                    />
                    <label for="signupEmail">{"Email (optional)"}</label>
                    <input
                        id="signupEmail"
                        name="email"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                    />
                    <div class="modal-actions">
                        <button id="modalCancel" type="button" class="btn secondary" onclick={close}>
                            {"Cancel"}
                        </button>
                        <button type="submit" ref={props.submit_ref.clone()} class="btn primary">
                            {"Sign me up"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
