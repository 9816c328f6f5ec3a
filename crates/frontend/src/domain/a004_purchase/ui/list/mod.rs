use crate::domain::a004_purchase::api;
use crate::domain::a005_sale::ui::details::SaleModal;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::PURCHASE_NEW;
use crate::shared::api_utils::HttpClient;
use crate::shared::components::badge::Badge;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::searchable_select::{to_options, SearchableSelect};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_amount, format_datetime, format_quantity};
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, Outcome, RowActions, SearchInput};
use crate::shared::modal::{use_modal, ModalData, ModalKind};
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::ref_data::{load_products, use_ref_data};
use crate::shared::search_list::SearchList;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_purchase::aggregate::{Purchase, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::date_format::DateBound;
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery};
use leptos::prelude::*;
use thaw::*;

const DELETE: Outcome = Outcome::fixed("Purchase deleted successfully", "Failed to delete purchase");

#[derive(Debug, Clone, Default, PartialEq)]
struct PurchaseFilter {
    search: String,
    product_id: Option<EntityId>,
    date_from: String,
    date_to: String,
}

impl PurchaseFilter {
    fn to_query(&self) -> SearchQuery {
        SearchQuery::new()
            .text("search", self.search.clone())
            .id("productId", self.product_id)
            .date_range(self.date_from.clone(), self.date_to.clone(), DateBound::EndOfDay)
    }
}

#[component]
pub fn PurchaseList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let http = use_context::<HttpClient>().expect("HttpClient not found");
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let refs = use_ref_data();
    let modal = use_modal();
    let notify = use_notify();

    let list = SearchList::<Purchase>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::CurrentPage).page_size(config.default_page_size),
        "Failed to load purchases",
    );
    list.init();

    let products = RwSignal::new(Vec::<Product>::new());
    load_products(refs, notify, products, false);
    let product_options = Signal::derive(move || products.with(|p| to_options(p)));

    let search = RwSignal::new(String::new());
    let product_id = RwSignal::new(None::<EntityId>);
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let is_filter_expanded = RwSignal::new(true);

    let current_filter = move || PurchaseFilter {
        search: search.get_untracked(),
        product_id: product_id.get_untracked(),
        date_from: date_from.get_untracked(),
        date_to: date_to.get_untracked(),
    };
    let apply = move || list.set_filter(current_filter().to_query());

    // select and date changes search immediately; a reset already fetched
    Effect::new(move |prev: Option<(Option<EntityId>, String, String)>| {
        let current = (product_id.get(), date_from.get(), date_to.get());
        if prev.is_some_and(|p| p != current) {
            list.change_filter(current_filter().to_query());
        }
        current
    });

    let reset_filters = move |_| {
        search.set(String::new());
        product_id.set(None);
        date_from.set(String::new());
        date_to.set(String::new());
        list.reset();
    };

    let handle_delete = move |id: EntityId| {
        confirm_delete(
            modal,
            notify,
            "Are you sure you want to delete this purchase? This action cannot be undone.",
            DELETE,
            move || api::delete(http, id),
            Callback::new(move |_| list.refresh()),
        );
    };
    let open_sale = move |purchase: Purchase| {
        modal.open(ModalKind::SaleFromPurchase, Some(ModalData::Purchase(purchase)));
    };

    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let page_size_options = config.page_size_options.clone();

    view! {
        <PageFrame page_id="a004_purchase--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Purchases"</h1>
                    <Badge variant="primary">
                        {move || list.window().get().total_elements.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs.open_screen(PURCHASE_NEW)
                    >
                        {icon("plus")}
                        " Add Purchase"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_products(refs, notify, products, true)
                    >
                        {icon("refresh")}
                        " Refresh products"
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
                                    placeholder="Invoice or product..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Product"</Label>
                                <SearchableSelect
                                    options=product_options
                                    selected=product_id
                                    on_change=Callback::new(move |id| product_id.set(id))
                                    placeholder="All products"
                                    allow_clear=true
                                />
                            </Flex>
                            <DateRangePicker date_from=date_from date_to=date_to label="Purchase date" />
                            <Button appearance=ButtonAppearance::Secondary on_click=reset_filters>
                                "Reset"
                            </Button>
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Invoice"</TableHeaderCell>
                                <TableHeaderCell>"Qty"</TableHeaderCell>
                                <TableHeaderCell>"Remaining"</TableHeaderCell>
                                <TableHeaderCell>"Unit price"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|p| (p.id, p.remaining_quantity.map(f64::to_bits))
                                children=move |purchase: Purchase| {
                                    let id = purchase.id;
                                    let sellable = purchase.sellable_quantity() > 0;
                                    let total = purchase
                                        .total_amount
                                        .unwrap_or(purchase.quantity * purchase.unit_price);
                                    let for_sale = purchase.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{format_datetime(Some(&purchase.purchase_date))}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {purchase.product_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{purchase.category_name.clone().unwrap_or_default()}</TableCell>
                                            <TableCell>{purchase.invoice_number.clone().unwrap_or_default()}</TableCell>
                                            <TableCell class="text-right">{format_quantity(purchase.quantity)}</TableCell>
                                            <TableCell class="text-right">
                                                {format_quantity(purchase.remaining_quantity.unwrap_or(purchase.quantity))}
                                            </TableCell>
                                            <TableCell class="text-right">{format_amount(purchase.unit_price)}</TableCell>
                                            <TableCell class="text-right">{format_amount(total)}</TableCell>
                                            <TableCell>
                                                <RowActions on_delete=Callback::new(move |_| handle_delete(id))>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Primary
                                                        disabled=!sellable
                                                        on_click=move |_| open_sale(for_sale.clone())
                                                    >
                                                        "Sell"
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
                        <div class="table__empty">"No purchases found"</div>
                    })}
                </div>
            </div>

            <SaleModal on_saved=Callback::new(move |_| list.refresh()) />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_sends_nothing() {
        assert!(PurchaseFilter::default().to_query().to_fields().is_empty());
    }

    #[test]
    fn date_range_uses_day_bounds() {
        let f = PurchaseFilter {
            date_from: "2024-01-01".into(),
            date_to: "2024-01-31".into(),
            ..Default::default()
        };
        let fields = f.to_query().to_fields();
        assert_eq!(fields["startDate"], serde_json::json!("01-01-2024 00:00:00"));
        assert_eq!(fields["endDate"], serde_json::json!("31-01-2024 23:59:59"));
    }

    #[test]
    fn cleared_filter_matches_reset_query() {
        let reset = ListConfig::new(PagingKeys::CurrentPage).default_query;
        assert!(PurchaseFilter::default().to_query().same_filters(&reset));
        let picked = PurchaseFilter {
            product_id: Some(2),
            ..Default::default()
        };
        assert!(!picked.to_query().same_filters(&reset));
    }
}
