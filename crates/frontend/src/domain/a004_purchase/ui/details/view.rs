use super::view_model::AddPurchaseViewModel;
use crate::shared::components::form_controls::{FormField, TextInput};
use crate::shared::components::searchable_select::{to_options, SearchableSelect};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_purchase::form::PurchaseForm;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddPurchase(on_close: Callback<()>) -> impl IntoView {
    let vm = AddPurchaseViewModel::new();
    vm.load_products(false);

    let product_options = Signal::derive(move || vm.products.with(|p| to_options(p)));
    let field = move |get: fn(&PurchaseForm) -> String| {
        Signal::derive(move || vm.form.with(get))
    };

    view! {
        <PageFrame page_id="a004_purchase--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Add Purchase"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Card>
                    <div class="details-form details-form--grid">
                        <FormField label="Product" field="productId" errors=vm.errors>
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <SearchableSelect
                                    options=product_options
                                    selected=Signal::derive(move || vm.form.with(|f| f.product_id))
                                    on_change=Callback::new(move |id| vm.form.update(|f| f.product_id = id))
                                    placeholder="Select product"
                                />
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| vm.load_products(true)
                                >
                                    {icon("refresh")}
                                </Button>
                            </Flex>
                        </FormField>
                        <FormField label="Quantity" field="quantity" errors=vm.errors>
                            <TextInput
                                input_type="number"
                                value=field(|f| f.quantity.clone())
                                on_input=Callback::new(move |v| vm.form.update(|f| f.quantity = v))
                            />
                        </FormField>
                        <FormField label="Unit price" field="unitPrice" errors=vm.errors>
                            <TextInput
                                input_type="number"
                                value=field(|f| f.unit_price.clone())
                                on_input=Callback::new(move |v| vm.form.update(|f| f.unit_price = v))
                            />
                        </FormField>
                        <FormField label="Purchase date" field="purchaseDate" errors=vm.errors>
                            <TextInput
                                input_type="datetime-local"
                                value=field(|f| f.purchase_date.clone())
                                on_input=Callback::new(move |v| vm.form.update(|f| f.purchase_date = v))
                            />
                        </FormField>
                        <FormField label="Invoice number" field="invoiceNumber" errors=vm.errors>
                            <TextInput
                                value=field(|f| f.invoice_number.clone())
                                on_input=Callback::new(move |v| vm.form.update(|f| f.invoice_number = v))
                            />
                        </FormField>
                        <FormField label="Other expenses" field="otherExpenses" errors=vm.errors>
                            <TextInput
                                input_type="number"
                                value=field(|f| f.other_expenses.clone())
                                on_input=Callback::new(move |v| vm.form.update(|f| f.other_expenses = v))
                            />
                        </FormField>
                    </div>

                    <Flex justify=FlexJustify::End gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reset()>
                            "Reset"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=vm.saving
                            on_click=move |_| vm.save_command()
                        >
                            {icon("save")}
                            {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                        </Button>
                    </Flex>
                </Card>
            </div>
        </PageFrame>
    }
}
