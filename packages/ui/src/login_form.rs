use dioxus::prelude::*;
use store::Role;

use crate::provider::{use_auth, use_session};

/// Email + password sign-in form.
///
/// The submit button is disabled while the session is loading, and a failed
/// attempt leaves the form filled in with the error shown above it.
#[component]
pub fn LoginForm(on_signed_in: EventHandler<Role>) -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            match session.store().authenticate(&email(), &password()).await {
                Ok(identity) => {
                    auth.set(session.store().snapshot());
                    on_signed_in.call(identity.role);
                }
                Err(e) => {
                    tracing::debug!("sign-in failed: {e}");
                    auth.set(session.store().snapshot());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let loading = auth().loading;

    rsx! {
        form {
            class: "login-form",
            onsubmit: handle_login,

            if let Some(err) = error() {
                div { class: "login-error", "{err}" }
            }

            label { r#for: "login-email", "Email" }
            input {
                id: "login-email",
                r#type: "email",
                placeholder: "you@example.com",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            label { r#for: "login-password", "Password" }
            input {
                id: "login-password",
                r#type: "password",
                placeholder: "Password",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                class: "login-submit",
                r#type: "submit",
                disabled: loading,
                if loading { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

/// Button that signs the current identity out.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let session = use_session();

    let onclick = move |_| {
        session.store().sign_out();
        auth.set(session.store().snapshot());
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
