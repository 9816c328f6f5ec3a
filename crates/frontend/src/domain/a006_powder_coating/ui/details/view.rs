use super::view_model::ProcessDetailsViewModel;
use crate::shared::components::form_controls::{FormField, StatusSelect, TextInput};
use crate::shared::components::searchable_select::{to_options, SearchableSelect};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProcessDetails(
    vm: ProcessDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let customer_options = Signal::derive(move || vm.customers.with(|c| to_options(c)));
    let product_options = Signal::derive(move || vm.products.with(|p| to_options(p)));

    view! {
        <Card>
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Process" } else { "New Process" }}</h3>
            </div>

            <div class="details-form details-form--grid">
                <FormField label="Customer" field="customerId" errors=vm.errors>
                    <SearchableSelect
                        options=customer_options
                        selected=Signal::derive(move || vm.form.with(|f| f.customer_id))
                        on_change=Callback::new(move |id| vm.form.update(|f| f.customer_id = id))
                        placeholder="Select customer"
                    />
                </FormField>
                <FormField label="Product" field="productId" errors=vm.errors>
                    <SearchableSelect
                        options=product_options
                        selected=Signal::derive(move || vm.form.with(|f| f.product_id))
                        on_change=Callback::new(move |id| vm.form.update(|f| f.product_id = id))
                        placeholder="Select product"
                    />
                </FormField>
                <FormField label="Quantity" field="quantity" errors=vm.errors>
                    <TextInput
                        input_type="number"
                        value=Signal::derive(move || vm.form.with(|f| f.quantity.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.quantity = v))
                    />
                </FormField>
                <FormField label="Status">
                    <StatusSelect
                        value=Signal::derive(move || vm.form.with(|f| f.status))
                        on_change=Callback::new(move |status| vm.form.update(|f| f.status = status))
                    />
                </FormField>
            </div>

            <Flex justify=FlexJustify::End gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        vm.reset();
                        on_cancel.run(());
                    }
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.saving
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { " Update" } else { " Save" }}
                </Button>
            </Flex>
        </Card>
    }
}
