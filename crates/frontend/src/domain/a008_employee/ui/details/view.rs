use super::view_model::EmployeeDetailsViewModel;
use crate::shared::components::form_controls::{FormField, StatusSelect, TextInput};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EmployeeDetails(
    vm: EmployeeDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = vm.text(|f| &f.name, |f, v| f.name = v);
    let (mobile, set_mobile) = vm.text(|f| &f.mobile_number, |f, v| f.mobile_number = v);
    let (email, set_email) = vm.text(|f| &f.email, |f, v| f.email = v);
    let (address, set_address) = vm.text(|f| &f.address, |f, v| f.address = v);
    let (designation, set_designation) = vm.text(|f| &f.designation, |f, v| f.designation = v);
    let (department, set_department) = vm.text(|f| &f.department, |f, v| f.department = v);
    let (joining_date, set_joining_date) = vm.text(|f| &f.joining_date, |f, v| f.joining_date = v);

    view! {
        <Card>
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Employee" } else { "New Employee" }}</h3>
            </div>

            <div class="details-form details-form--grid">
                <FormField label="Name" field="name" errors=vm.errors>
                    <TextInput value=name on_input=set_name placeholder="Full name" />
                </FormField>
                <FormField label="Mobile number" field="mobileNumber" errors=vm.errors>
                    <TextInput value=mobile on_input=set_mobile input_type="tel" placeholder="10 digits" />
                </FormField>
                <FormField label="Email" field="email" errors=vm.errors>
                    <TextInput value=email on_input=set_email input_type="email" />
                </FormField>
                <FormField label="Address" field="address" errors=vm.errors>
                    <TextInput value=address on_input=set_address />
                </FormField>
                <FormField label="Designation" field="designation" errors=vm.errors>
                    <TextInput value=designation on_input=set_designation />
                </FormField>
                <FormField label="Department" field="department" errors=vm.errors>
                    <TextInput value=department on_input=set_department />
                </FormField>
                <FormField label="Joining date" field="joiningDate" errors=vm.errors>
                    <TextInput value=joining_date on_input=set_joining_date input_type="date" />
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
