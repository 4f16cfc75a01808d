//! Auth Panel Component
//!
//! Sign-in form with a password recovery mode.

use leptos::prelude::*;
use log::info;

use crate::store::{store_sign_in, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Reset,
}

#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_app_store();
    let (mode, set_mode) = signal(AuthMode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (message, set_message) = signal(None::<String>);

    let switch_mode = move |next: AuthMode| {
        set_mode.set(next);
        set_error.set(None);
        set_message.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_message.set(None);
        let typed = email.get_untracked();
        match mode.get_untracked() {
            AuthMode::Login => {
                let result = store
                    .users()
                    .with_untracked(|users| users.authenticate(&typed, &password.get_untracked()).map(|u| u.email.clone()));
                match result {
                    Ok(account_email) => {
                        info!("[APP] Signed in as {}", account_email);
                        set_password.set(String::new());
                        store_sign_in(&store, account_email);
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            }
            AuthMode::Reset => {
                let result = store.users().with_untracked(|users| users.recover(&typed).map(|u| u.email.clone()));
                match result {
                    Ok(account_email) => {
                        set_message.set(Some(format!(
                            "Te enviamos un enlace de recuperacion a {}. Revisa tu bandeja de entrada o spam.",
                            account_email
                        )));
                        set_mode.set(AuthMode::Login);
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            }
        }
    };

    view! {
        <div class="auth-screen">
            <form class="auth-panel" on:submit=on_submit>
                <h1>{move || if mode.get() == AuthMode::Login { "Iniciar sesion" } else { "Recuperar contrasena" }}</h1>
                <input
                    type="email"
                    placeholder="correo@empresa.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <Show when=move || mode.get() == AuthMode::Login>
                    <input
                        type="password"
                        placeholder="Contrasena"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </Show>
                {move || error.get().map(|e| view! { <p class="auth-error">{e}</p> })}
                {move || message.get().map(|m| view! { <p class="auth-message">{m}</p> })}
                <button type="submit" class="auth-submit">
                    {move || if mode.get() == AuthMode::Login { "Entrar" } else { "Enviar enlace" }}
                </button>
                {move || if mode.get() == AuthMode::Login {
                    view! {
                        <button type="button" class="link-btn" on:click=move |_| switch_mode(AuthMode::Reset)>
                            "¿Olvidaste tu contrasena?"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button type="button" class="link-btn" on:click=move |_| switch_mode(AuthMode::Login)>
                            "Volver"
                        </button>
                    }.into_any()
                }}
            </form>
        </div>
    }
}
