use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::details::{ProductDetails, ProductDetailsViewModel};
use crate::shared::api_utils::HttpClient;
use crate::shared::components::badge::{Badge, StatusBadge};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::form_controls::StatusFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::searchable_select::{to_options, SearchableSelect};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::format_quantity;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, Outcome, RowActions, SearchInput};
use crate::shared::modal::use_modal;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::ref_data::use_ref_data;
use crate::shared::search_list::SearchList;
use contracts::domain::a002_product::aggregate::{Product, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery};
use leptos::prelude::*;
use thaw::*;

const DEFAULT_STATUS: &str = "A";
const DELETE: Outcome = Outcome::fixed("Product deleted successfully", "Failed to delete product");

#[derive(Debug, Clone, PartialEq)]
struct ProductFilter {
    search: String,
    category_id: Option<EntityId>,
    status: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category_id: None,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl ProductFilter {
    fn to_query(&self) -> SearchQuery {
        SearchQuery::new()
            .text("search", self.search.clone())
            .id("categoryId", self.category_id)
            .status("status", self.status.clone())
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let http = use_context::<HttpClient>().expect("HttpClient not found");
    let refs = use_ref_data();
    let modal = use_modal();
    let notify = use_notify();

    let list = SearchList::<Product>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::PageSize)
            .page_size(config.default_page_size)
            .query(ProductFilter::default().to_query()),
        "Failed to load products",
    );
    list.init();

    let filter = RwSignal::new(ProductFilter::default());
    let status = RwSignal::new(DEFAULT_STATUS.to_string());
    let is_filter_expanded = RwSignal::new(true);

    let apply = move |f: ProductFilter| {
        list.set_filter(f.to_query());
        filter.set(f);
    };
    Effect::new(move |prev: Option<String>| {
        let current = status.get();
        if prev.is_some_and(|p| p != current) {
            let mut f = filter.get_untracked();
            f.status = current.clone();
            list.change_filter(f.to_query());
            filter.set(f);
        }
        current
    });

    let vm = ProductDetailsViewModel::new();
    vm.load_categories();
    let editor_open = RwSignal::new(false);
    let on_saved = Callback::new(move |_| {
        editor_open.set(false);
        list.refresh();
    });
    let on_cancel = Callback::new(move |_| editor_open.set(false));

    let handle_edit = move |product: Product| {
        vm.edit(&product);
        editor_open.set(true);
    };
    let handle_delete = move |id: EntityId| {
        confirm_delete(
            modal,
            notify,
            "Are you sure you want to delete this product?",
            DELETE,
            move || api::delete(http, refs, id),
            Callback::new(move |_| list.refresh()),
        );
    };

    let category_options = Signal::derive(move || vm.categories.with(|c| to_options(c)));
    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let page_size_options = config.page_size_options.clone();

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
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
                        " New Product"
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
                <Show when=move || editor_open.get()>
                    <ProductDetails vm=vm on_saved=on_saved on_cancel=on_cancel />
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
                                        let mut f = filter.get_untracked();
                                        f.search = text;
                                        apply(f);
                                    })
                                    placeholder="Product name..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Category"</Label>
                                <SearchableSelect
                                    options=category_options
                                    selected=Signal::derive(move || filter.with(|f| f.category_id))
                                    on_change=Callback::new(move |id| {
                                        let mut f = filter.get_untracked();
                                        f.category_id = id;
                                        apply(f);
                                    })
                                    placeholder="All categories"
                                    allow_clear=true
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status"</Label>
                                <StatusFilter value=status />
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    filter.set(ProductFilter::default());
                                    status.set(DEFAULT_STATUS.to_string());
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
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Min. stock"</TableHeaderCell>
                                <TableHeaderCell>"In stock"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|p| (p.id, p.name.clone(), p.status, p.remaining_quantity.map(f64::to_bits))
                                children=move |product: Product| {
                                    let for_edit = product.clone();
                                    let id = product.id;
                                    let low = product.is_low_stock();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{product.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{product.category_name.clone().unwrap_or_default()}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{product.description.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--number">{format_quantity(product.minimum_stock)}</TableCell>
                                            <TableCell class="table__cell--number">
                                                {product.remaining_quantity.map(format_quantity).unwrap_or_else(|| "-".into())}
                                                {low.then(|| view! { <Badge variant="error">"Low"</Badge> })}
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge status=product.status />
                                            </TableCell>
                                            <TableCell>
                                                <RowActions
                                                    on_edit=Callback::new(move |_| handle_edit(for_edit.clone()))
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
                        <div class="table__empty">"No products found"</div>
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
    fn default_filter_counts_only_status() {
        assert_eq!(ProductFilter::default().to_query().active_count(), 1);
    }

    #[test]
    fn category_filter_sent_as_id() {
        let f = ProductFilter {
            search: "bolt".into(),
            category_id: Some(4),
            status: String::new(),
        };
        let fields = f.to_query().to_fields();
        assert_eq!(fields["categoryId"], serde_json::json!(4));
        assert_eq!(fields["search"], serde_json::json!("bolt"));
        assert!(!fields.contains_key("status"));
    }
}
