use contracts::system::auth::AuthInput;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance, Input, InputType};

use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::store::use_store;
use crate::system::auth::{api, context};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log in to your account",
            AuthMode::Signup => "Create your account",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log in",
            AuthMode::Signup => "Sign up",
        }
    }

    fn fallback_error(&self) -> &'static str {
        match self {
            AuthMode::Login => "Invalid credentials",
            AuthMode::Signup => "Registration failed",
        }
    }
}

/// Login or signup dialog. `mode` set to `None` closes it.
#[component]
pub fn AuthModal(mode: RwSignal<Option<AuthMode>>) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    let current = move || mode.get().unwrap_or(AuthMode::Login);
    let credentials = move || AuthInput {
        email: email.get(),
        password: password.get(),
    };

    let submit = move |_| {
        let input = credentials();
        if !input.is_complete() || is_loading.get_untracked() {
            return;
        }
        let auth_mode = current();
        let toast = toast.clone();
        let navigate = navigate.clone();
        is_loading.set(true);

        spawn_local(async move {
            let result = match auth_mode {
                AuthMode::Login => api::login(input).await,
                AuthMode::Signup => api::register(input).await,
            };
            is_loading.set(false);

            match result {
                Ok(payload) if context::apply_auth_payload(store, payload.clone()) => {
                    mode.set(None);
                    navigate("/dashboard", Default::default());
                }
                Ok(_) => {
                    toast.error(auth_mode.fallback_error());
                }
                Err(e) => {
                    log::error!("{:?} failed: {}", auth_mode, e);
                    toast.error(e.server_message().unwrap_or(auth_mode.fallback_error()));
                }
            }
        });
    };

    view! {
        <Modal title=current().title() on_close=Callback::new(move |_| mode.set(None)) class="modal--narrow">
            <div class="form-group">
                <label>"Email"</label>
                <Input value=email placeholder="Enter email" />
            </div>
            <div class="form-group">
                <label>"Password"</label>
                <Input value=password input_type=InputType::Password placeholder="Enter password" />
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || is_loading.get() || !credentials().is_complete())
                >
                    {move || if is_loading.get() { "Please wait..." } else { current().submit_label() }}
                </Button>
            </div>
            <div class="auth-switch">
                {move || match current() {
                    AuthMode::Login => view! {
                        <span>"Don't have an account? "</span>
                        <a class="link" on:click=move |_| mode.set(Some(AuthMode::Signup))>"Sign up"</a>
                    }.into_any(),
                    AuthMode::Signup => view! {
                        <span>"Already have an account? "</span>
                        <a class="link" on:click=move |_| mode.set(Some(AuthMode::Login))>"Log in"</a>
                    }.into_any(),
                }}
            </div>
        </Modal>
    }
}
