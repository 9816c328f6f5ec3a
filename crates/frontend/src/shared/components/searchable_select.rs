//! Select box with a type-to-filter input, used for product and customer
//! pickers.

use contracts::domain::common::{EntityId, LookupOption};
use leptos::prelude::*;

pub type SelectOption = (EntityId, String);

pub fn to_options<T: LookupOption>(items: &[T]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|i| (i.option_id(), i.option_label()))
        .collect()
}

/// Case-insensitive substring match; an empty query keeps everything.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|(_, label)| label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn label_for(options: &[SelectOption], id: Option<EntityId>) -> String {
    id.and_then(|id| options.iter().find(|(o, _)| *o == id))
        .map(|(_, label)| label.clone())
        .unwrap_or_default()
}

#[component]
pub fn SearchableSelect(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Option<EntityId>>,
    on_change: Callback<Option<EntityId>>,
    #[prop(optional)] placeholder: &'static str,
    /// Offer an empty choice that clears the selection.
    #[prop(optional)]
    allow_clear: bool,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let open = RwSignal::new(false);

    let visible = Memo::new(move |_| options.with(|o| filter_options(o, &query.get())));
    let shown_text = move || {
        if open.get() {
            query.get()
        } else {
            options.with(|o| label_for(o, selected.get()))
        }
    };

    let pick = move |id: Option<EntityId>| {
        on_change.run(id);
        query.set(String::new());
        open.set(false);
    };

    view! {
        <div class="searchable-select">
            <input
                type="text"
                class="searchable-select__input"
                placeholder=placeholder
                prop:value=shown_text
                on:focus=move |_| open.set(true)
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    open.set(true);
                }
                on:blur=move |_| {
                    // let a click on an option land before the list closes
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(150).await;
                        open.set(false);
                    });
                }
            />
            <Show when=move || open.get()>
                <ul class="searchable-select__options">
                    {allow_clear.then(|| view! {
                        <li class="searchable-select__option" on:mousedown=move |_| pick(None)>
                            "-- None --"
                        </li>
                    })}
                    <For
                        each=move || visible.get()
                        key=|(id, _)| *id
                        children=move |(id, label)| {
                            view! {
                                <li
                                    class="searchable-select__option"
                                    class:searchable-select__option--selected=move || selected.get() == Some(id)
                                    on:mousedown=move |_| pick(Some(id))
                                >
                                    {label}
                                </li>
                            }
                        }
                    />
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <li class="searchable-select__empty">"No matches"</li>
                    </Show>
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<SelectOption> {
        vec![
            (1, "Steel Rod (Metals)".to_string()),
            (2, "Copper Pipe (Metals)".to_string()),
            (3, "PVC Sheet (Plastics)".to_string()),
        ]
    }

    #[test]
    fn filter_is_case_insensitive() {
        let hits = filter_options(&opts(), "  pipe ");
        assert_eq!(hits, vec![(2, "Copper Pipe (Metals)".to_string())]);
        assert_eq!(filter_options(&opts(), "metals").len(), 2);
    }

    #[test]
    fn empty_query_keeps_all() {
        assert_eq!(filter_options(&opts(), "").len(), 3);
        assert!(filter_options(&opts(), "wood").is_empty());
    }

    #[test]
    fn label_of_unknown_id_is_blank() {
        assert_eq!(label_for(&opts(), Some(3)), "PVC Sheet (Plastics)");
        assert_eq!(label_for(&opts(), Some(9)), "");
        assert_eq!(label_for(&opts(), None), "");
    }
}
