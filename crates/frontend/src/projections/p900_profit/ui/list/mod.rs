//! Profit report: one row per sale with its purchase cost and expenses.

use crate::shared::components::badge::Badge;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_amount, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use crate::shared::search_list::SearchList;
use contracts::projections::p900_profit::dto::{ProfitRow, ProfitTotals, DEFAULT_PAGE_SIZE, RESOURCE};
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery};
use leptos::prelude::*;
use thaw::*;

/// Configured page sizes plus the report's own default, ascending.
fn page_sizes(configured: &[usize]) -> Vec<usize> {
    let mut sizes = configured.to_vec();
    if !sizes.contains(&DEFAULT_PAGE_SIZE) {
        sizes.push(DEFAULT_PAGE_SIZE);
        sizes.sort_unstable();
    }
    sizes
}

fn amount_class(value: f64) -> &'static str {
    if value < 0.0 {
        "text-right text-danger"
    } else {
        "text-right"
    }
}

#[component]
pub fn ProfitList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");

    let list = SearchList::<ProfitRow>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::PageSize).page_size(DEFAULT_PAGE_SIZE),
        "Failed to load profit report",
    );
    list.init();

    let search = RwSignal::new(String::new());
    let is_filter_expanded = RwSignal::new(true);
    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let totals = Memo::new(move |_| list.state.with(|s| ProfitTotals::of(&s.items)));
    let page_size_options = page_sizes(&config.page_size_options);

    view! {
        <PageFrame page_id="p900_profit--report" category=PAGE_CAT_REPORT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Profit Report"</h1>
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
                                placeholder="Product or invoice..."
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
                                <TableHeaderCell>"Sale"</TableHeaderCell>
                                <TableHeaderCell>"Purchase"</TableHeaderCell>
                                <TableHeaderCell>"Expenses"</TableHeaderCell>
                                <TableHeaderCell>"Gross profit"</TableHeaderCell>
                                <TableHeaderCell>"Net profit"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|r| r.id
                                children=move |row: ProfitRow| {
                                    view! {
                                        <TableRow class=if row.is_loss() { "table__row--loss" } else { "" }>
                                            <TableCell>{format_datetime(row.profit_date.as_deref())}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.product_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{row.sale_invoice.clone().unwrap_or_default()}</TableCell>
                                            <TableCell class="text-right">{format_amount(row.sale_amount)}</TableCell>
                                            <TableCell class="text-right">{format_amount(row.purchase_amount)}</TableCell>
                                            <TableCell class="text-right">{format_amount(row.other_expenses)}</TableCell>
                                            <TableCell class=amount_class(row.gross_profit)>{format_amount(row.gross_profit)}</TableCell>
                                            <TableCell class=amount_class(row.net_profit)>{format_amount(row.net_profit)}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || !list.items().with(Vec::is_empty)>
                                <TableRow class="table__totals-row">
                                    <TableCell attr:colspan="3">"Page total"</TableCell>
                                    <TableCell class="text-right">{move || format_amount(totals.get().sale_amount)}</TableCell>
                                    <TableCell class="text-right">{move || format_amount(totals.get().purchase_amount)}</TableCell>
                                    <TableCell class="text-right">{move || format_amount(totals.get().other_expenses)}</TableCell>
                                    <TableCell class=Signal::derive(move || amount_class(totals.get().gross_profit).to_string())>
                                        {move || format_amount(totals.get().gross_profit)}
                                    </TableCell>
                                    <TableCell class=Signal::derive(move || amount_class(totals.get().net_profit).to_string())>
                                        {move || format_amount(totals.get().net_profit)}
                                    </TableCell>
                                </TableRow>
                            </Show>
                        </TableBody>
                    </Table>
                    {move || list.loaded_empty().get().then(|| view! {
                        <div class="table__empty">"No profit records found"</div>
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
    fn report_page_size_always_offered() {
        assert_eq!(page_sizes(&[10, 20, 50]), vec![5, 10, 20, 50]);
        assert_eq!(page_sizes(&[5, 10]), vec![5, 10]);
    }

    #[test]
    fn losses_are_highlighted() {
        assert_eq!(amount_class(-0.5), "text-right text-danger");
        assert_eq!(amount_class(0.0), "text-right");
    }
}
