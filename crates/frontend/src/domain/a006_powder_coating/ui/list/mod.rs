use crate::domain::a006_powder_coating::api;
use crate::domain::a006_powder_coating::ui::details::{ProcessDetails, ProcessDetailsViewModel};
use crate::domain::a006_powder_coating::ui::return_modal::ReturnModal;
use crate::shared::api_utils::HttpClient;
use crate::shared::components::badge::{Badge, StatusBadge};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::searchable_select::{to_options, SearchableSelect};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_datetime, format_quantity};
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, Outcome, RowActions, SearchInput};
use crate::shared::modal::{use_modal, ModalData, ModalKind};
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::ref_data::{load_customers, load_products, use_ref_data};
use crate::shared::search_list::SearchList;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a006_powder_coating::aggregate::{PowderCoatingProcess, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery, SortSpec};
use leptos::prelude::*;
use thaw::*;

const DELETE: Outcome = Outcome::fixed("Process deleted successfully", "Failed to delete process");

#[derive(Debug, Clone, Default, PartialEq)]
struct ProcessFilter {
    search: String,
    product_id: Option<EntityId>,
    customer_id: Option<EntityId>,
}

impl ProcessFilter {
    fn to_query(&self) -> SearchQuery {
        SearchQuery::new()
            .text("search", self.search.clone())
            .id("productId", self.product_id)
            .id("customerId", self.customer_id)
    }
}

#[component]
pub fn PowderCoatingList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let http = use_context::<HttpClient>().expect("HttpClient not found");
    let refs = use_ref_data();
    let modal = use_modal();
    let notify = use_notify();

    let list = SearchList::<PowderCoatingProcess>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::CurrentPage)
            .page_size(config.default_page_size)
            .sorted(SortSpec::id_desc()),
        "Failed to load processes",
    );
    list.init();

    let products = RwSignal::new(Vec::<Product>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    load_products(refs, notify, products, false);
    load_customers(refs, notify, customers, false);
    let product_options = Signal::derive(move || products.with(|p| to_options(p)));
    let customer_options = Signal::derive(move || customers.with(|c| to_options(c)));

    let filter = RwSignal::new(ProcessFilter::default());
    let apply = move |f: ProcessFilter| {
        list.set_filter(f.to_query());
        filter.set(f);
    };
    let is_filter_expanded = RwSignal::new(true);

    let vm = ProcessDetailsViewModel::new(products, customers);
    let editor_open = RwSignal::new(false);
    let on_saved = Callback::new(move |_| {
        editor_open.set(false);
        list.refresh();
    });
    let on_cancel = Callback::new(move |_| editor_open.set(false));

    let handle_edit = move |id: EntityId| vm.edit(id, Callback::new(move |_| editor_open.set(true)));
    let handle_delete = move |id: EntityId| {
        confirm_delete(
            modal,
            notify,
            "Are you sure you want to delete this process?",
            DELETE,
            move || api::delete(http, id),
            Callback::new(move |_| list.refresh()),
        );
    };
    let open_return = move |process: PowderCoatingProcess| {
        modal.open(ModalKind::PowderReturn, Some(ModalData::Process(process)));
    };

    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let page_size_options = config.page_size_options.clone();

    view! {
        <PageFrame page_id="a006_powder_coating--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Powder Coating"</h1>
                    <Badge variant="primary">
                        {move || list.window().get().total_elements.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            vm.reset();
                            editor_open.set(true);
                        }
                    >
                        {icon("plus")}
                        " New Process"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_products(refs, notify, products, true);
                            load_customers(refs, notify, customers, true);
                        }
                    >
                        {icon("refresh")}
                        " Refresh lookups"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor_open.get()>
                    <ProcessDetails vm=vm on_saved=on_saved on_cancel=on_cancel />
                </Show>

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
                                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                                    on_change=Callback::new(move |text| {
                                        apply(ProcessFilter { search: text, ..filter.get_untracked() })
                                    })
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Product"</Label>
                                <SearchableSelect
                                    options=product_options
                                    selected=Signal::derive(move || filter.with(|f| f.product_id))
                                    on_change=Callback::new(move |id| {
                                        apply(ProcessFilter { product_id: id, ..filter.get_untracked() })
                                    })
                                    placeholder="All products"
                                    allow_clear=true
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Customer"</Label>
                                <SearchableSelect
                                    options=customer_options
                                    selected=Signal::derive(move || filter.with(|f| f.customer_id))
                                    on_change=Callback::new(move |id| {
                                        apply(ProcessFilter { customer_id: id, ..filter.get_untracked() })
                                    })
                                    placeholder="All customers"
                                    allow_clear=true
                                />
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    filter.set(ProcessFilter::default());
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
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Outstanding"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|p| (p.id, p.remaining_quantity.to_bits(), p.quantity.to_bits(), p.status)
                                children=move |process: PowderCoatingProcess| {
                                    let id = process.id;
                                    let returnable = process.returnable_quantity() > 0;
                                    let for_return = process.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{id}</TableCell>
                                            <TableCell>{process.customer_name.clone()}</TableCell>
                                            <TableCell>{process.product_name.clone()}</TableCell>
                                            <TableCell class="text-right">{format_quantity(process.quantity)}</TableCell>
                                            <TableCell class="text-right">{format_quantity(process.remaining_quantity)}</TableCell>
                                            <TableCell>
                                                <StatusBadge status=process.status />
                                            </TableCell>
                                            <TableCell>{format_datetime(process.created_at.as_deref())}</TableCell>
                                            <TableCell>
                                                <RowActions
                                                    on_edit=Callback::new(move |_| handle_edit(id))
                                                    on_delete=Callback::new(move |_| handle_delete(id))
                                                >
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Primary
                                                        disabled=!returnable
                                                        on_click=move |_| open_return(for_return.clone())
                                                    >
                                                        "Return"
                                                    </Button>
                                                </RowActions>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || list.loaded_empty().get().then(|| view! {
                        <div class="table__empty">"No processes found"</div>
                    })}
                </div>
            </div>

            <ReturnModal on_saved=Callback::new(move |_| list.refresh()) />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_ids_only_when_chosen() {
        let f = ProcessFilter {
            customer_id: Some(9),
            ..Default::default()
        };
        let fields = f.to_query().to_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["customerId"], serde_json::json!(9));
    }
}
