//! Sign-in page: phone number + OTP flow

use dioxus::prelude::*;

use crate::api::AuthClient;
use crate::auth::use_session;
use crate::components::LoadingDots;
use crate::device::get_or_create_device_id;
use crate::state::{AuthFlow, AuthStep};

/// Sign-in page - exchanges a verified phone number for a session token
#[component]
pub fn SignIn() -> Element {
    let mut flow = use_signal(AuthFlow::default);
    let mut session = use_session();

    let handle_request_otp = move |_| {
        if !flow.write().begin_request() {
            return;
        }
        let phone = flow.peek().phone.clone();

        spawn(async move {
            let device_id = get_or_create_device_id();
            match AuthClient::from_config().request_otp(&phone, &device_id).await {
                Ok(_) => flow.write().otp_sent(),
                Err(e) => {
                    tracing::warn!("OTP request failed");
                    flow.write().failed(e.to_string());
                }
            }
        });
    };

    let handle_verify = move |_| {
        if !flow.write().begin_verify() {
            return;
        }
        let phone = flow.peek().phone.clone();
        let code = flow.peek().code.clone();

        spawn(async move {
            let device_id = get_or_create_device_id();
            match AuthClient::from_config()
                .verify_otp(&phone, &code, &device_id)
                .await
            {
                Ok(res) => {
                    session.sign_in(res.token.clone());
                    flow.write().verified(res.token);
                }
                Err(e) => {
                    tracing::warn!("OTP verification failed");
                    flow.write().failed(e.to_string());
                }
            }
        });
    };

    // Snapshot for this render; handlers mutate the signal directly
    let current = flow.read().clone();

    rsx! {
        main {
            class: "container-prose auth-page",
            div {
                class: "card auth-card",
                h1 { class: "auth-title", "Start your order" }
                p { class: "auth-subtitle", "Sign in with your phone number." }

                match current.step {
                    AuthStep::Phone => rsx! {
                        form {
                            class: "auth-form",
                            onsubmit: handle_request_otp,
                            input {
                                r#type: "tel",
                                placeholder: "Phone number",
                                class: "field",
                                value: "{current.phone}",
                                oninput: move |e| flow.write().phone = e.value(),
                                disabled: current.loading,
                            }
                            button {
                                r#type: "submit",
                                class: "btn-primary btn-block",
                                disabled: !current.can_request_otp(),
                                if current.loading {
                                    "Sending"
                                    LoadingDots {}
                                } else {
                                    "Send OTP"
                                }
                            }
                        }
                    },
                    AuthStep::Otp => rsx! {
                        form {
                            class: "auth-form",
                            onsubmit: handle_verify,
                            input {
                                r#type: "text",
                                placeholder: "Enter OTP",
                                class: "field field-code",
                                value: "{current.code}",
                                oninput: move |e| flow.write().code = e.value(),
                                disabled: current.loading,
                            }
                            button {
                                r#type: "submit",
                                class: "btn-primary btn-block",
                                disabled: !current.can_verify(),
                                if current.loading {
                                    "Verifying"
                                    LoadingDots {}
                                } else {
                                    "Verify"
                                }
                            }
                            button {
                                r#type: "button",
                                class: "btn-quiet btn-block",
                                onclick: move |_| flow.write().use_different_number(),
                                "Use a different number"
                            }
                        }
                    },
                    AuthStep::Done => rsx! {
                        div {
                            class: "auth-done",
                            p { class: "auth-done-lead", "You are signed in." }
                            div {
                                class: "auth-token",
                                "Token: {current.token}"
                            }
                            div {
                                class: "auth-done-grid",
                                div { class: "card", "Your orders will appear here." }
                                div { class: "card", "Explore the menu and add items." }
                            }
                        }
                    },
                }

                if let Some(err) = current.error {
                    p { class: "auth-error", "{err}" }
                }
            }
        }
    }
}
