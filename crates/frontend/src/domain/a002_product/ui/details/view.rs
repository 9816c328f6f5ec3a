use super::view_model::ProductDetailsViewModel;
use crate::shared::components::form_controls::{FormField, StatusSelect, TextInput};
use crate::shared::components::searchable_select::{to_options, SearchableSelect};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    vm: ProductDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let category_options = Signal::derive(move || vm.categories.with(|c| to_options(c)));

    view! {
        <Card>
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Product" } else { "New Product" }}</h3>
            </div>

            <div class="details-form details-form--grid">
                <FormField label="Name" field="name" errors=vm.errors>
                    <TextInput
                        value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
                        placeholder="Product name"
                    />
                </FormField>

                <FormField label="Category" field="categoryId" errors=vm.errors>
                    <SearchableSelect
                        options=category_options
                        selected=Signal::derive(move || vm.form.with(|f| f.category_id))
                        on_change=Callback::new(move |id| vm.form.update(|f| f.category_id = id))
                        placeholder="Select category"
                    />
                </FormField>

                <FormField label="Minimum stock" field="minimumStock" errors=vm.errors>
                    <TextInput
                        input_type="number"
                        value=Signal::derive(move || vm.form.with(|f| f.minimum_stock.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.minimum_stock = v))
                    />
                </FormField>

                <FormField label="Status">
                    <StatusSelect
                        value=Signal::derive(move || vm.form.with(|f| f.status))
                        on_change=Callback::new(move |status| vm.form.update(|f| f.status = status))
                    />
                </FormField>

                <FormField label="Description" field="description" errors=vm.errors>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.form.update(|f| f.description = v);
                        }
                    ></textarea>
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
