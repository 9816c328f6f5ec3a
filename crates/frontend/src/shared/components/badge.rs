use contracts::domain::common::RecordStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", anything else is neutral
    #[prop(optional)]
    variant: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! { <span class=variant_class>{children()}</span> }
}

#[component]
pub fn StatusBadge(status: RecordStatus) -> impl IntoView {
    let variant = match status {
        RecordStatus::Active => "success",
        RecordStatus::Inactive => "neutral",
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }
}
