use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::form_controls::{FormField, StatusSelect, TextInput};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(
    vm: CategoryDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Card>
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Category" } else { "New Category" }}</h3>
            </div>

            <div class="details-form">
                <FormField label="Name" field="name" errors=vm.errors>
                    <TextInput
                        value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
                        placeholder="Category name"
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
