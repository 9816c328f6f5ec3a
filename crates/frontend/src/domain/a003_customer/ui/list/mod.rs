use crate::domain::a003_customer::ui::details::CustomerModal;
use crate::shared::components::badge::{Badge, StatusBadge};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_amount, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{RowActions, SearchInput};
use crate::shared::modal::{use_modal, ModalData, ModalKind};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::search_list::SearchList;
use contracts::domain::a003_customer::aggregate::{Customer, RESOURCE};
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery};
use leptos::prelude::*;
use thaw::*;

fn search_query(text: String) -> SearchQuery {
    SearchQuery::new().text("search", text)
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let modal = use_modal();

    let list = SearchList::<Customer>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::CurrentPage).page_size(config.default_page_size),
        "Failed to load customers",
    );
    list.init();

    let search = RwSignal::new(String::new());
    let is_filter_expanded = RwSignal::new(true);
    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let page_size_options = config.page_size_options.clone();

    let open_editor = move |customer: Option<Customer>| {
        modal.open(ModalKind::CustomerEditor, customer.map(ModalData::Customer));
    };

    view! {
        <PageFrame page_id="a003_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <Badge variant="primary">
                        {move || list.window().get().total_elements.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_editor(None)>
                        {icon("plus")}
                        " New Customer"
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
                                    on_change=Callback::new(move |text: String| {
                                        search.set(text.clone());
                                        list.set_filter(search_query(text));
                                    })
                                    placeholder="Name, mobile or email..."
                                />
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search.set(String::new());
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
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Mobile"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"GST"</TableHeaderCell>
                                <TableHeaderCell>"Balance"</TableHeaderCell>
                                <TableHeaderCell>"Next action"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|c| (c.id, c.name.clone(), c.mobile.clone(), c.remaining_payment_amount.to_bits(), c.status)
                                children=move |customer: Customer| {
                                    let for_edit = customer.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{customer.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{customer.mobile.clone()}</TableCell>
                                            <TableCell>{customer.email.clone()}</TableCell>
                                            <TableCell>{customer.gst.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                            <TableCell class="text-right">
                                                {format_amount(customer.remaining_payment_amount)}
                                            </TableCell>
                                            <TableCell>{format_datetime(customer.next_action_date.as_deref())}</TableCell>
                                            <TableCell>
                                                <StatusBadge status=customer.status />
                                            </TableCell>
                                            <TableCell>
                                                <RowActions
                                                    on_edit=Callback::new(move |_| open_editor(Some(for_edit.clone())))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || list.loaded_empty().get().then(|| view! {
                        <div class="table__empty">"No customers found"</div>
                    })}
                </div>
            </div>

            <CustomerModal on_saved=Callback::new(move |_| list.refresh()) />
        </PageFrame>
    }
}
