use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::HttpClient;
use crate::shared::components::form_controls::{FormField, TextInput};
use crate::system::auth::{api, context};

/// Message for an incomplete form, checked before any request goes out.
fn missing_credentials(email: &str, password: &str) -> Option<&'static str> {
    match (email.trim().is_empty(), password.is_empty()) {
        (true, true) => Some("Email and password are required"),
        (true, false) => Some("Email is required"),
        (false, true) => Some("Password is required"),
        (false, false) => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let (_, set_auth_state) = context::use_auth();
    let http = use_context::<HttpClient>().expect("HttpClient not found");

    let submit = move || {
        let (email_val, password_val) = (email.get_untracked(), password.get_untracked());
        if let Some(message) = missing_credentials(&email_val, &password_val) {
            error.set(Some(message.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);

        spawn_local(async move {
            match api::login(http, email_val, password_val).await {
                Ok(data) => {
                    log::info!("signed in");
                    context::complete_login(set_auth_state, data);
                }
                Err(e) => {
                    log::warn!("sign-in rejected: {}", e);
                    error.set(Some(api::login_error_message(&e)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login">
            <Card class="login__card">
                <h1 class="login__title">"Inventory Console"</h1>
                <form
                    class="details-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <FormField label="Email">
                        <TextInput
                            input_type="email"
                            value=email
                            on_input=Callback::new(move |v| email.set(v))
                            disabled=busy
                        />
                    </FormField>
                    <FormField label="Password">
                        <TextInput
                            input_type="password"
                            value=password
                            on_input=Callback::new(move |v| password.set(v))
                            disabled=busy
                        />
                    </FormField>

                    {move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })}

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_named() {
        assert_eq!(missing_credentials(" ", "x"), Some("Email is required"));
        assert_eq!(missing_credentials("a@b.co", ""), Some("Password is required"));
        assert_eq!(missing_credentials("a@b.co", "secret"), None);
    }
}
