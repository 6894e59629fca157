use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::toast::use_toaster;
use crate::messages;
use crate::registration::state::{RegistrationAction, RegistrationDialogState};
use crate::registration::{settle, submit_registration, Notice};

/// "Fazer Pré-Cadastro" button and the dialog it opens.
#[function_component(PreRegistration)]
pub fn pre_registration() -> Html {
    let state = use_reducer(RegistrationDialogState::default);
    let toaster = use_toaster();

    let open_dialog = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RegistrationAction::Open))
    };

    let close_dialog = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(RegistrationAction::Close))
    };

    let on_email = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(RegistrationAction::SetEmail(input.value()));
        })
    };

    let on_full_name = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(RegistrationAction::SetFullName(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = state.begin_submission() else {
                return;
            };

            state.dispatch(RegistrationAction::SubmitStarted);
            let dispatcher = state.dispatcher();
            let toaster = toaster.clone();
            spawn_local(async move {
                let result = submit_registration(form).await;
                if let Err(e) = &result {
                    gloo_console::error!("Pre-registration error:", e.to_string());
                }

                let settlement = settle(&result);
                match settlement.notice {
                    Notice::Success(message) => toaster.success(message),
                    Notice::Failure(message) => toaster.error(message),
                }
                dispatcher.dispatch(settlement.action);
            });
        })
    };

    let submit_label = if state.loading {
        messages::SUBMIT_LOADING
    } else {
        messages::SUBMIT_IDLE
    };

    html! {
        <>
            <button class="cta-button" onclick={open_dialog}>
                {"Fazer Pré-Cadastro"}
            </button>
            <Dialog
                open={state.open}
                title="Pré-Cadastro BemLidos"
                description={Some(AttrValue::from("Faça seu pré-cadastro e seja um dos primeiros a usar o BemLidos!"))}
                on_close={close_dialog}
            >
                <form class="pre-registration-form" {onsubmit}>
                    <div class="form-field">
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="seu.email@example.com"
                            value={state.form.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label for="fullName">{"Nome Completo"}</label>
                        <input
                            id="fullName"
                            type="text"
                            placeholder="João da Silva"
                            value={state.form.full_name.clone()}
                            oninput={on_full_name}
                            required=true
                        />
                    </div>
                    <button type="submit" class="form-submit" disabled={state.loading}>
                        { submit_label }
                    </button>
                </form>
            </Dialog>
            <style>
                {r#"
                .pre-registration-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 0.5rem 0;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .form-field label {
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .form-field input {
                    height: 2.25rem;
                    padding: 0 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 0.9rem;
                }
                .form-field input:focus {
                    outline: 2px solid #c4b5fd;
                    border-color: #7c3aed;
                }
                .form-submit {
                    height: 2.25rem;
                    border: none;
                    border-radius: 8px;
                    background: #111827;
                    color: #ffffff;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .form-submit:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </>
    }
}
