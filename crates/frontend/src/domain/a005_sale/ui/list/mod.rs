use crate::shared::components::badge::Badge;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_amount, format_datetime, format_quantity};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::search_list::SearchList;
use contracts::domain::a005_sale::aggregate::{Sale, RESOURCE};
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery};
use leptos::prelude::*;
use thaw::*;

/// Sale total as sent by the server, or quantity × price.
fn sale_total(sale: &Sale) -> f64 {
    sale.total_amount
        .unwrap_or(sale.quantity * sale.unit_price)
}

#[component]
pub fn SaleList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");

    let list = SearchList::<Sale>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::CurrentPage).page_size(config.default_page_size),
        "Failed to load sales",
    );
    list.init();

    let search = RwSignal::new(String::new());
    let is_filter_expanded = RwSignal::new(false);
    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let page_total = Signal::derive(move || {
        list.state.with(|s| s.items.iter().map(sale_total).sum::<f64>())
    });
    let page_size_options = config.page_size_options.clone();

    view! {
        <PageFrame page_id="a005_sale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sales"</h1>
                    <Badge variant="primary">
                        {move || list.window().get().total_elements.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
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
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Search"</Label>
                            <SearchInput
                                value=search
                                on_change=Callback::new(move |text: String| {
                                    search.set(text.clone());
                                    list.set_filter(SearchQuery::new().text("search", text));
                                })
                                placeholder="Invoice or product..."
                            />
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Invoice"</TableHeaderCell>
                                <TableHeaderCell>"Qty"</TableHeaderCell>
                                <TableHeaderCell>"Unit price"</TableHeaderCell>
                                <TableHeaderCell>"Expenses"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|s| s.id
                                children=move |sale: Sale| {
                                    let total = sale_total(&sale);
                                    view! {
                                        <TableRow>
                                            <TableCell>{format_datetime(Some(&sale.sale_date))}</TableCell>
                                            <TableCell>{sale.product_name.clone().unwrap_or_default()}</TableCell>
                                            <TableCell>{sale.invoice_number.clone().unwrap_or_default()}</TableCell>
                                            <TableCell class="text-right">{format_quantity(sale.quantity)}</TableCell>
                                            <TableCell class="text-right">{format_amount(sale.unit_price)}</TableCell>
                                            <TableCell class="text-right">
                                                {format_amount(sale.other_expenses.unwrap_or_default())}
                                            </TableCell>
                                            <TableCell class="text-right">{format_amount(total)}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || !list.items().with(Vec::is_empty)>
                                <TableRow class="table__totals-row">
                                    <TableCell attr:colspan="6">"Page total"</TableCell>
                                    <TableCell class="text-right">{move || format_amount(page_total.get())}</TableCell>
                                </TableRow>
                            </Show>
                        </TableBody>
                    </Table>
                    {move || list.loaded_empty().get().then(|| view! {
                        <div class="table__empty">"No sales found"</div>
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
    fn total_falls_back_to_quantity_times_price() {
        let mut sale = Sale {
            id: 1,
            purchase_id: Some(2),
            product_name: None,
            quantity: 4.0,
            unit_price: 2.5,
            total_amount: None,
            sale_date: String::new(),
            invoice_number: None,
            other_expenses: None,
        };
        assert_eq!(sale_total(&sale), 10.0);
        sale.total_amount = Some(12.0);
        assert_eq!(sale_total(&sale), 12.0);
    }
}
