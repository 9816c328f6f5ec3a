//! Small form helpers shared by the editors.

use contracts::domain::common::RecordStatus;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Inline error under a field; empty while the field is valid.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|msg| {
            view! { <div class="form__error">{msg}</div> }
        })
    }
}

/// Label, control and inline error for one form field.
#[component]
pub fn FormField(
    label: &'static str,
    /// Key into `errors`; leave empty for fields without validation.
    #[prop(optional)]
    field: &'static str,
    #[prop(optional)] errors: Option<RwSignal<FieldErrors>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {children()}
            {errors.filter(|_| !field.is_empty()).map(|errors| view! { <FieldError errors=errors field=field /> })}
        </div>
    }
}

/// Plain `<input>` bound to a form string.
#[component]
pub fn TextInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// `text` when empty.
    #[prop(optional)]
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    view! {
        <input
            type=input_type
            class="form__input"
            placeholder=placeholder
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// `A` / `I` select for editors.
#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<RecordStatus>,
    on_change: Callback<RecordStatus>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get().code()
            on:change=move |ev| {
                if let Some(status) = RecordStatus::from_code(&event_target_value(&ev)) {
                    on_change.run(status);
                }
            }
        >
            {RecordStatus::ALL
                .into_iter()
                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                .collect_view()}
        </select>
    }
}

/// Status filter for search panels; `""` means all.
#[component]
pub fn StatusFilter(value: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value="">"All"</option>
            {RecordStatus::ALL
                .into_iter()
                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                .collect_view()}
        </select>
    }
}

/// Parses a `<select>` value into an id.
pub fn select_id(ev: &leptos::ev::Event) -> Option<i64> {
    contracts::domain::common::parse_id(&event_target_value(ev))
}
