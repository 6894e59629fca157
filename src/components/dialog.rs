use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Modal with an overlay. Closes on overlay click, the close button or Escape.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    {
        let open = props.open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_button = close_overlay.clone();
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-overlay" onclick={close_overlay}>
            <div class="dialog-content" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="dialog-close" aria-label="Fechar" onclick={close_button}>{"×"}</button>
                <div class="dialog-header">
                    <h2 class="dialog-title">{ props.title.clone() }</h2>
                    if let Some(description) = props.description.clone() {
                        <p class="dialog-description">{ description }</p>
                    }
                </div>
                { props.children.clone() }
            </div>
            <style>
                {r#"
                .dialog-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 900;
                }
                .dialog-content {
                    position: relative;
                    width: 90vw;
                    max-width: 24rem;
                    background: #ffffff;
                    color: #111827;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.25);
                    text-align: left;
                }
                .dialog-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    line-height: 1;
                    color: #6b7280;
                    cursor: pointer;
                }
                .dialog-header { padding-bottom: 0.5rem; }
                .dialog-title { font-size: 1.125rem; margin: 0 0 0.25rem; }
                .dialog-description { font-size: 0.875rem; color: #6b7280; margin: 0; }
                "#}
            </style>
        </div>
    }
}
