use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::{
    validate, validate_email, validate_message, validate_name, validate_organization,
    ContactPayload, SubmitState,
};

/// How long the success banner shows before the form returns to idle.
const RESET_MS: u32 = 4_000;
/// Simulated latency of the stub transport.
const STUB_LATENCY_MS: u32 = 1_200;

type TransportFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Injected submit function. The form only cares that it eventually reports
/// success or failure; how the payload travels is the caller's business.
#[derive(Clone)]
pub struct ContactTransport(pub Rc<dyn Fn(ContactPayload) -> TransportFuture>);

impl PartialEq for ContactTransport {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ContactTransport {
    /// Stub transport: logs the payload, waits, succeeds. No network.
    fn default() -> Self {
        Self(Rc::new(|payload: ContactPayload| {
            Box::pin(async move {
                let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
                log!("contact submission (stub), endpoint:", config::get_contact_endpoint());
                log!(body);
                TimeoutFuture::new(STUB_LATENCY_MS).await;
                Ok(())
            }) as TransportFuture
        }))
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub transport: ContactTransport,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let organization = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(HashMap::<&'static str, String>::new);
    let submit_state = use_state(|| SubmitState::Idle);

    let payload = ContactPayload {
        name: (*name).clone(),
        email: (*email).clone(),
        organization: if organization.trim().is_empty() {
            None
        } else {
            Some((*organization).clone())
        },
        message: (*message).clone(),
    };

    // Blur handlers re-check a single field and keep the rest untouched.
    let blur_field = |field: &'static str,
                      check: fn(&str) -> Option<String>,
                      value: UseStateHandle<String>| {
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            match check(&value) {
                Some(msg) => {
                    next.insert(field, msg);
                }
                None => {
                    next.remove(field);
                }
            }
            errors.set(next);
        })
    };

    let on_name_blur = blur_field("name", validate_name, name.clone());
    let on_email_blur = blur_field("email", validate_email, email.clone());
    let on_organization_blur = blur_field("organization", validate_organization, organization.clone());
    let on_message_blur = blur_field("message", validate_message, message.clone());

    let input_setter = |value: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let on_submit = {
        let errors = errors.clone();
        let submit_state = submit_state.clone();
        let transport = props.transport.clone();
        let payload = payload.clone();
        let name = name.clone();
        let email = email.clone();
        let organization = organization.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !submit_state.can_submit() {
                // Submitting or showing success; the button is disabled, but
                // an Enter keypress still lands here.
                return;
            }

            let found = validate(&payload);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(HashMap::new());
            submit_state.set(submit_state.begin());

            let submit_state = submit_state.clone();
            let transport = transport.clone();
            let payload = payload.clone();
            let name = name.clone();
            let email = email.clone();
            let organization = organization.clone();
            let message = message.clone();
            spawn_local(async move {
                let result = (transport.0)(payload).await;
                match result {
                    Ok(()) => {
                        submit_state.set(SubmitState::Submitting.finish(true));
                        TimeoutFuture::new(RESET_MS).await;
                        name.set(String::new());
                        email.set(String::new());
                        organization.set(String::new());
                        message.set(String::new());
                        submit_state.set(SubmitState::Success.reset());
                    }
                    Err(reason) => {
                        log!("contact submission failed:", reason);
                        submit_state.set(SubmitState::Submitting.finish(false));
                    }
                }
            });
        })
    };

    let field_error = |field: &str| {
        errors.get(field).map(|msg| {
            html! { <span class="field-error">{msg.clone()}</span> }
        })
    };

    let submitting = *submit_state == SubmitState::Submitting;

    html! {
        <section class="contact" id="contact">
            <style>
                {r#"
                    .contact {
                        padding: 6rem 1.5rem;
                        background: #0c0c0e;
                        color: #f5f2ea;
                        display: flex;
                        justify-content: center;
                    }
                    .contact-card {
                        width: min(560px, 100%);
                        padding: 3rem;
                        border-radius: 20px;
                        background: rgba(30, 30, 34, 0.7);
                        border: 1px solid rgba(245, 242, 234, 0.1);
                    }
                    .contact-card h2 { font-size: 2rem; margin-bottom: 0.5rem; }
                    .contact-card > p { color: rgba(245, 242, 234, 0.6); margin-bottom: 2rem; }
                    .contact-card label {
                        display: block;
                        margin: 1.2rem 0 0.4rem;
                        font-size: 0.9rem;
                        color: rgba(245, 242, 234, 0.8);
                    }
                    .contact-card input, .contact-card textarea {
                        width: 100%;
                        padding: 0.8rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(245, 242, 234, 0.15);
                        background: rgba(12, 12, 14, 0.8);
                        color: #f5f2ea;
                        font-size: 1rem;
                    }
                    .contact-card textarea { min-height: 8rem; resize: vertical; }
                    .field-error {
                        display: block;
                        margin-top: 0.4rem;
                        color: #ff8c7a;
                        font-size: 0.85rem;
                    }
                    .contact-submit {
                        margin-top: 2rem;
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 999px;
                        background: #e8ff63;
                        color: #0c0c0e;
                        font-size: 1.05rem;
                        cursor: pointer;
                    }
                    .contact-submit:disabled { opacity: 0.6; cursor: wait; }
                    .contact-banner {
                        margin-top: 1.2rem;
                        padding: 0.9rem 1.2rem;
                        border-radius: 10px;
                        text-align: center;
                    }
                    .contact-banner.success { background: rgba(116, 255, 143, 0.12); color: #74ff8f; }
                    .contact-banner.failure { background: rgba(255, 140, 122, 0.12); color: #ff8c7a; }
                "#}
            </style>
            <div class="contact-card">
                <h2>{"Start a project"}</h2>
                <p>{"Tell us what should move. We reply within two working days."}</p>
                <form onsubmit={on_submit}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        value={(*name).clone()}
                        oninput={input_setter(name.clone())}
                        onblur={on_name_blur}
                        disabled={submitting}
                    />
                    { for field_error("name") }

                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        value={(*email).clone()}
                        oninput={input_setter(email.clone())}
                        onblur={on_email_blur}
                        disabled={submitting}
                    />
                    { for field_error("email") }

                    <label for="contact-organization">{"Organization (optional)"}</label>
                    <input
                        id="contact-organization"
                        type="text"
                        value={(*organization).clone()}
                        oninput={input_setter(organization.clone())}
                        onblur={on_organization_blur}
                        disabled={submitting}
                    />
                    { for field_error("organization") }

                    <label for="contact-message">{"Project"}</label>
                    <textarea
                        id="contact-message"
                        value={(*message).clone()}
                        oninput={on_message_input}
                        onblur={on_message_blur}
                        disabled={submitting}
                    />
                    { for field_error("message") }

                    <button class="contact-submit" type="submit" disabled={!submit_state.can_submit()}>
                        {
                            match *submit_state {
                                SubmitState::Submitting => "Sending...",
                                SubmitState::Success => "Sent",
                                _ => "Send it over",
                            }
                        }
                    </button>
                </form>
                {
                    match *submit_state {
                        SubmitState::Success => html! {
                            <div class="contact-banner success">
                                {"Thanks! Your brief is in our inbox."}
                            </div>
                        },
                        SubmitState::Failure => html! {
                            <div class="contact-banner failure">
                                {"Something went wrong on the way out. Please try again."}
                            </div>
                        },
                        _ => html! {},
                    }
                }
            </div>
        </section>
    }
}
