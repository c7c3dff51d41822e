use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
    pub visible: bool,
}

/// Bottom-of-page notice. Visibility is driven by the page, which hides it on a timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div
            id="toast"
            class={classes!("toast", props.visible.then(|| "show"))}
            role="status"
            aria-live="polite"
        >
            { props.message.clone() }
        </div>
    }
}
