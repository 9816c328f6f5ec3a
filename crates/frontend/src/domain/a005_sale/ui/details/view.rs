use super::view_model::SaleDetailsViewModel;
use crate::shared::components::form_controls::{FormField, TextInput};
use crate::shared::date_utils::{format_amount, format_quantity};
use crate::shared::modal::{use_modal, Modal, ModalData, ModalKind};
use contracts::domain::a004_purchase::aggregate::Purchase;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SaleModal(on_saved: Callback<()>) -> impl IntoView {
    let modal = use_modal();

    move || match modal.data_for(ModalKind::SaleFromPurchase) {
        Some(ModalData::Purchase(purchase)) => {
            let vm = SaleDetailsViewModel::for_purchase(&purchase);
            view! { <SaleForm vm=vm purchase=purchase on_saved=on_saved /> }.into_any()
        }
        _ => ().into_any(),
    }
}

#[component]
fn SaleForm(vm: SaleDetailsViewModel, purchase: Purchase, on_saved: Callback<()>) -> impl IntoView {
    let max = vm.form.with_untracked(|f| f.max_quantity);
    let title = format!(
        "Sell {}",
        purchase.product_name.clone().unwrap_or_else(|| format!("purchase #{}", purchase.id))
    );

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close())>
            <div class="sale-modal__summary">
                <span>{format!("Available: {}", max)}</span>
                <span>{format!("Bought at: {}", format_amount(purchase.unit_price))}</span>
                <span>{format!("Purchased: {}", format_quantity(purchase.quantity))}</span>
            </div>

            <div class="details-form details-form--grid">
                <FormField label="Quantity" field="quantity" errors=vm.errors>
                    <TextInput
                        input_type="number"
                        value=Signal::derive(move || vm.form.with(|f| f.quantity.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.quantity = v))
                    />
                </FormField>
                <FormField label="Unit price" field="unitPrice" errors=vm.errors>
                    <TextInput
                        input_type="number"
                        value=Signal::derive(move || vm.form.with(|f| f.unit_price.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.unit_price = v))
                    />
                </FormField>
                <FormField label="Sale date" field="saleDate" errors=vm.errors>
                    <TextInput
                        input_type="datetime-local"
                        value=Signal::derive(move || vm.form.with(|f| f.sale_date.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.sale_date = v))
                    />
                </FormField>
                <FormField label="Invoice number" field="invoiceNumber" errors=vm.errors>
                    <TextInput
                        value=Signal::derive(move || vm.form.with(|f| f.invoice_number.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.invoice_number = v))
                    />
                </FormField>
                <FormField label="Other expenses" field="otherExpenses" errors=vm.errors>
                    <TextInput
                        input_type="number"
                        value=Signal::derive(move || vm.form.with(|f| f.other_expenses.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.other_expenses = v))
                    />
                </FormField>
            </div>

            <Flex justify=FlexJustify::End gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close()>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.saving
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Create sale" }}
                </Button>
            </Flex>
        </Modal>
    }
}
