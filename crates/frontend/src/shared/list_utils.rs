//! Helpers shared by the list screens and their editors.

use std::future::Future;

use contracts::shared::api::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::modal::ModalService;
use crate::shared::notify::NotificationService;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Notification texts for one mutation.
#[derive(Clone, Copy, Debug)]
pub struct Outcome {
    pub success: &'static str,
    pub failure: &'static str,
    /// Show the server's own success message when it sends one.
    pub server_message: bool,
}

impl Outcome {
    pub const fn fixed(success: &'static str, failure: &'static str) -> Self {
        Self {
            success,
            failure,
            server_message: false,
        }
    }

    pub const fn from_server(success: &'static str, failure: &'static str) -> Self {
        Self {
            success,
            failure,
            server_message: true,
        }
    }

    fn success_text(&self, server: Option<String>) -> String {
        match server {
            Some(msg) if self.server_message && !msg.trim().is_empty() => msg,
            _ => self.success.to_string(),
        }
    }
}

/// Runs a create/update/delete call. `busy` is true while the call is in
/// flight; `on_ok` runs after a success notification.
pub fn run_mutation<Fut, F>(
    notify: NotificationService,
    busy: Option<RwSignal<bool>>,
    outcome: Outcome,
    call: Fut,
    on_ok: F,
) where
    Fut: Future<Output = Result<Option<String>, ApiError>> + 'static,
    F: FnOnce() + 'static,
{
    if let Some(busy) = busy {
        busy.set(true);
    }
    spawn_local(async move {
        let result = call.await;
        if let Some(busy) = busy {
            busy.set(false);
        }
        match result {
            Ok(message) => {
                notify.success(outcome.success_text(message));
                on_ok();
            }
            Err(e) => {
                log::error!("{}: {}", outcome.failure, e);
                notify.error(e.user_message(outcome.failure));
            }
        }
    });
}

/// Asks `question` in the confirm dialog and deletes on confirmation.
pub fn confirm_delete<F, Fut>(
    modal: ModalService,
    notify: NotificationService,
    question: &'static str,
    outcome: Outcome,
    call: F,
    on_done: Callback<()>,
) where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<String>, ApiError>> + 'static,
{
    modal.confirm(question, move || {
        run_mutation(notify, None, outcome, call(), move || on_done.run(()));
    });
}

/// Text search box; `on_change` fires once typing pauses.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() { "Search..." } else { placeholder };
    let input_value = RwSignal::new(value.get_untracked());
    // each keystroke bumps the generation; only the latest one fires
    let generation = StoredValue::new(0u64);

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.with(|v| v.trim().is_empty())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || (!input_value.with(String::is_empty)).then(|| view! {
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

/// Edit / delete icon buttons for one table row. Either may be omitted.
#[component]
pub fn RowActions(
    #[prop(optional)] on_edit: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="row-actions">
            {children.map(|c| c())}
            {on_edit.map(|cb| view! {
                <button class="button button--icon" title="Edit" on:click=move |_| cb.run(())>
                    {icon("edit")}
                </button>
            })}
            {on_delete.map(|cb| view! {
                <button class="button button--icon button--danger" title="Delete" on:click=move |_| cb.run(())>
                    {icon("trash")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_text_prefers_server_only_when_asked() {
        let fixed = Outcome::fixed("Category deleted successfully", "Failed to delete category");
        assert_eq!(
            fixed.success_text(Some("Deleted".into())),
            "Category deleted successfully"
        );
        let server = Outcome::from_server("Category saved", "Operation failed");
        assert_eq!(server.success_text(Some("Category updated".into())), "Category updated");
        assert_eq!(server.success_text(Some("  ".into())), "Category saved");
        assert_eq!(server.success_text(None), "Category saved");
    }
}
