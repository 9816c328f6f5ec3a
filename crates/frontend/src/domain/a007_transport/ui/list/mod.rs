use crate::domain::a007_transport::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_label, transport_edit_key, TRANSPORT_NEW};
use crate::shared::api_utils::HttpClient;
use crate::shared::components::badge::Badge;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_datetime, format_quantity};
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, Outcome, RowActions, SearchInput};
use crate::shared::modal::use_modal;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::search_list::SearchList;
use contracts::domain::a007_transport::aggregate::{TransportRow, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::date_format::DateBound;
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery, SortSpec};
use leptos::prelude::*;
use thaw::*;

const DELETE: Outcome = Outcome::fixed("Transport deleted successfully", "Failed to delete transport");

/// Transports filter to the last millisecond of the end day.
fn search_query(search: String, from: String, to: String) -> SearchQuery {
    SearchQuery::new()
        .text("search", search)
        .date_range(from, to, DateBound::EndOfDayMillis)
}

#[component]
pub fn TransportList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let http = use_context::<HttpClient>().expect("HttpClient not found");
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal = use_modal();
    let notify = use_notify();

    let list = SearchList::<TransportRow>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::CurrentPage)
            .page_size(config.default_page_size)
            .sorted(SortSpec::id_desc()),
        "Failed to load transports",
    );
    list.init();

    let search = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let is_filter_expanded = RwSignal::new(true);

    let apply = move || {
        list.set_filter(search_query(
            search.get_untracked(),
            date_from.get_untracked(),
            date_to.get_untracked(),
        ))
    };
    Effect::new(move |prev: Option<(String, String)>| {
        let current = (date_from.get(), date_to.get());
        if prev.is_some_and(|p| p != current) {
            list.change_filter(search_query(
                search.get_untracked(),
                current.0.clone(),
                current.1.clone(),
            ));
        }
        current
    });

    let open_edit = move |row: TransportRow| {
        let name = row
            .customer_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("#{}", row.id));
        tabs.open_tab(&transport_edit_key(row.id), &detail_tab_label("Transport", &name));
    };
    let handle_delete = move |id: EntityId| {
        confirm_delete(
            modal,
            notify,
            "Are you sure you want to delete this transport?",
            DELETE,
            move || api::delete(http, id),
            Callback::new(move |_| list.refresh()),
        );
    };

    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let page_size_options = config.page_size_options.clone();

    view! {
        <PageFrame page_id="a007_transport--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Transport"</h1>
                    <Badge variant="primary">
                        {move || list.window().get().total_elements.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs.open_screen(TRANSPORT_NEW)
                    >
                        {icon("plus")}
                        " New Transport"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refresh()
                        disabled=list.loading()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    pagination_controls=move || view! {
                        <PaginationControls
                            window=list.window()
                            on_page_change=Callback::new(move |page| list.go_to_page(page))
                            on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                            page_size_options=page_size_options.clone()
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <SearchInput
                                    value=search
                                    on_change=Callback::new(move |text| {
                                        search.set(text);
                                        apply();
                                    })
                                    placeholder="Customer..."
                                />
                            </Flex>
                            <DateRangePicker date_from=date_from date_to=date_to label="Created" />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search.set(String::new());
                                    date_from.set(String::new());
                                    date_to.set(String::new());
                                    list.reset();
                                }
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"#"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Bags"</TableHeaderCell>
                                <TableHeaderCell>"Weight (kg)"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|r| (r.id, r.total_bags, r.total_weight.map(f64::to_bits))
                                children=move |row: TransportRow| {
                                    let id = row.id;
                                    let for_edit = row.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{id}</TableCell>
                                            <TableCell>{row.customer_name.clone().unwrap_or_default()}</TableCell>
                                            <TableCell class="text-right">{row.total_bags.unwrap_or(0)}</TableCell>
                                            <TableCell class="text-right">
                                                {row.total_weight.map(format_quantity).unwrap_or_else(|| "-".into())}
                                            </TableCell>
                                            <TableCell>{row.status.clone().unwrap_or_default()}</TableCell>
                                            <TableCell>{format_datetime(row.created_at.as_deref())}</TableCell>
                                            <TableCell>
                                                <RowActions
                                                    on_edit=Callback::new(move |_| open_edit(for_edit.clone()))
                                                    on_delete=Callback::new(move |_| handle_delete(id))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || list.loaded_empty().get().then(|| view! {
                        <div class="table__empty">"No transports found"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_bound_keeps_milliseconds() {
        let fields = search_query(String::new(), "2024-01-01".into(), "2024-01-31".into()).to_fields();
        assert_eq!(fields["startDate"], serde_json::json!("01-01-2024 00:00:00"));
        assert_eq!(fields["endDate"], serde_json::json!("31-01-2024 23:59:59.999"));
    }

    #[test]
    fn cleared_dates_match_reset_query() {
        let reset = ListConfig::new(PagingKeys::CurrentPage).default_query;
        assert!(search_query(String::new(), String::new(), String::new()).same_filters(&reset));
    }
}
