use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// PaginationControls component - reusable pagination controls
///
/// Shows the visible row range, up to five page buttons around the current
/// page and a page size selector. Page indices passed to the callbacks are
/// 0-based.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    window: Signal<PageWindow>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    #[prop(into)]
    page_size_options: Signal<Vec<usize>>,
) -> impl IntoView {
    let current = move || window.get().index;

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let w = window.get();
                    let (start, end) = w.display_range();
                    format!("Showing {} to {} of {} entries", start, end, w.total_elements)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || !window.get().has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || !window.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                window
                    .get()
                    .page_numbers()
                    .into_iter()
                    .map(|number| {
                        let index = number - 1;
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || current() == index
                                on:click=move |_| on_page_change.run(index)
                            >
                                {number}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current() + 1)
                disabled=move || !window.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(window.get().last_index())
                disabled=move || !window.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || window.get().size.to_string()
            >
                {move || {
                    page_size_options
                        .get()
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option value=size.to_string() selected=move || window.get().size == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
