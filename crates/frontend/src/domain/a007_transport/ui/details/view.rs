use super::view_model::{form_totals, TransportDetailsViewModel};
use crate::shared::components::searchable_select::{to_options, SearchableSelect, SelectOption};
use crate::shared::date_utils::{format_datetime, format_quantity};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a007_transport::form::{ItemForm, TransportAction};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TransportDetails(id: Option<EntityId>, on_close: Callback<()>) -> impl IntoView {
    let vm = TransportDetailsViewModel::new(id);
    vm.init();

    let customer_options = Signal::derive(move || vm.customers.with(|c| to_options(c)));
    let product_options = Signal::derive(move || vm.products.with(|p| to_options(p)));
    let bag_count = move || vm.form.with(|f| f.bags.len());
    let totals = Memo::new(move |_| vm.form.with(form_totals));
    let title = if vm.is_edit_mode() { "Edit Transport" } else { "New Transport" };

    view! {
        <PageFrame page_id="a007_transport--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    {move || {
                        let (bags, weight) = totals.get();
                        view! {
                            <span class="page__subtitle">
                                {format!("{} bag(s), {} kg", bags, format_quantity(weight))}
                            </span>
                        }
                    }}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                        on_click=move |_| vm.save_command(on_close)
                    >
                        {icon("save")}
                        {move || match (vm.saving.get(), vm.is_edit_mode()) {
                            (true, _) => " Saving...",
                            (false, true) => " Update",
                            (false, false) => " Save",
                        }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.loading.get()>
                    <div class="page__loading">
                        <Spinner />
                        " Loading transport..."
                    </div>
                </Show>

                <Show when=move || vm.form.with(|f| f.touched) && !vm.errors.with(Vec::is_empty)>
                    <ul class="form__error-list">
                        {move || vm.errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </Show>

                <Card>
                    <div class="form__group">
                        <label class="form__label">"Customer"</label>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <SearchableSelect
                                options=customer_options
                                selected=Signal::derive(move || vm.form.with(|f| f.customer_id))
                                on_change=Callback::new(move |id| vm.select_customer(id))
                                placeholder="Select customer"
                            />
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| vm.refresh_customers()
                            >
                                {icon("refresh")}
                            </Button>
                        </Flex>
                    </div>
                    <CustomerHistory vm=vm />
                </Card>

                <For
                    each=move || 0..bag_count()
                    key=|bag| *bag
                    children=move |bag| view! { <BagCard vm=vm bag=bag products=product_options /> }
                />

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.dispatch(TransportAction::AddBag)
                    >
                        {icon("plus")}
                        " Add bag"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.refresh_products()
                    >
                        {icon("refresh")}
                        " Refresh products"
                    </Button>
                </Flex>
            </div>
        </PageFrame>
    }
}

#[component]
fn CustomerHistory(vm: TransportDetailsViewModel) -> impl IntoView {
    move || {
        let rows = vm.history.get();
        if rows.is_empty() {
            return ().into_any();
        }
        view! {
            <div class="transport__history">
                <span class="transport__history-title">
                    {format!("{} earlier transport(s) for this customer", rows.len())}
                </span>
                <ul>
                    {rows
                        .into_iter()
                        .take(5)
                        .map(|r| {
                            view! {
                                <li>
                                    {format!(
                                        "#{} · {} · {} bag(s)",
                                        r.id,
                                        format_datetime(r.created_at.as_deref()),
                                        r.total_bags.unwrap_or(0),
                                    )}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any()
    }
}

#[component]
fn BagCard(vm: TransportDetailsViewModel, bag: usize, products: Signal<Vec<SelectOption>>) -> impl IntoView {
    let item_count = move || vm.form.with(|f| f.bags.get(bag).map(|b| b.items.len()).unwrap_or(0));
    let weight = Signal::derive(move || {
        vm.form.with(|f| f.bags.get(bag).map(|b| b.weight.clone()).unwrap_or_default())
    });
    let weight_missing = move || vm.form.with(|f| f.touched) && weight.with(|w| w.trim().is_empty());

    view! {
        <Card class="transport__bag">
            <div class="transport__bag-header">
                <h3>{format!("Bag #{}", bag + 1)}</h3>
                <div class="form__group form__group--inline">
                    <label class="form__label">"Weight (kg)"</label>
                    <input
                        type="number"
                        step="0.01"
                        class="form__input"
                        class:form__input--invalid=weight_missing
                        prop:value=move || weight.get()
                        on:input=move |ev| vm.dispatch(TransportAction::SetBagWeight {
                            bag,
                            weight: event_target_value(&ev),
                        })
                    />
                </div>
                <button
                    class="button button--icon button--danger"
                    title="Remove bag"
                    on:click=move |_| vm.remove_bag(bag)
                >
                    {icon("trash")}
                </button>
            </div>

            <table class="transport__items">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Product"</th>
                        <th>"Quantity"</th>
                        <th>"Remarks"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || 0..item_count()
                        key=|item| *item
                        children=move |item| view! { <ItemRow vm=vm bag=bag item=item products=products /> }
                    />
                </tbody>
            </table>

            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.dispatch(TransportAction::AddItem(bag))
            >
                {icon("plus")}
                " Add item"
            </Button>
        </Card>
    }
}

#[component]
fn ItemRow(
    vm: TransportDetailsViewModel,
    bag: usize,
    item: usize,
    products: Signal<Vec<SelectOption>>,
) -> impl IntoView {
    let field = move |get: fn(&ItemForm) -> String| {
        Signal::derive(move || {
            vm.form.with(|f| {
                f.bags
                    .get(bag)
                    .and_then(|b| b.items.get(item))
                    .map(get)
                    .unwrap_or_default()
            })
        })
    };
    let quantity = field(|i| i.quantity.clone());
    let remarks = field(|i| i.remarks.clone());
    let product_id = Signal::derive(move || {
        vm.form.with(|f| f.bags.get(bag).and_then(|b| b.items.get(item)).and_then(|i| i.product_id))
    });

    view! {
        <tr>
            <td>{item + 1}</td>
            <td>
                <SearchableSelect
                    options=products
                    selected=product_id
                    on_change=Callback::new(move |product_id| {
                        vm.dispatch(TransportAction::SetItemProduct { bag, item, product_id })
                    })
                    placeholder="Select product"
                />
            </td>
            <td>
                <input
                    type="number"
                    class="form__input"
                    prop:value=move || quantity.get()
                    on:input=move |ev| vm.dispatch(TransportAction::SetItemQuantity {
                        bag,
                        item,
                        quantity: event_target_value(&ev),
                    })
                />
            </td>
            <td>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || remarks.get()
                    on:input=move |ev| vm.dispatch(TransportAction::SetItemRemarks {
                        bag,
                        item,
                        remarks: event_target_value(&ev),
                    })
                />
            </td>
            <td>
                <button
                    class="button button--icon"
                    title="Remove item"
                    on:click=move |_| vm.remove_item(bag, item)
                >
                    {icon("x")}
                </button>
            </td>
        </tr>
    }
}
