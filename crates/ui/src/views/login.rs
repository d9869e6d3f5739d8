use dioxus::prelude::*;

use crate::context::{AppContext, use_ui_session};
use crate::vm::{LoginResult, submit_login};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_ui_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut pending = use_signal(|| false);
    let credentials = ctx.credentials();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let credentials = credentials.clone();
        let name = username();
        let secret = password();
        pending.set(true);
        spawn(async move {
            match submit_login(&credentials, &name, &secret).await {
                LoginResult::LoggedIn(user) => {
                    if let Err(err) = session.state.write().login(user) {
                        tracing::warn!(error = %err, "login ignored");
                    }
                    password.set(String::new());
                    error.set(None);
                }
                LoginResult::Rejected(message) => error.set(Some(message)),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "login",
            h2 { class: "login-title", "🇩🇪 Login to Dein Deutschlehrer" }
            form { class: "login-form", onsubmit: on_submit,
                label { r#for: "login-user", "Username" }
                input {
                    id: "login-user",
                    r#type: "text",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { r#for: "login-pass", "Password" }
                input {
                    id: "login-pass",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "primary", r#type: "submit", disabled: pending(), "Login" }
            }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
        }
    }
}
