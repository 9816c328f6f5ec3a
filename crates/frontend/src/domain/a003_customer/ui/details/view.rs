use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::form_controls::{FormField, StatusSelect, TextInput};
use crate::shared::modal::{use_modal, Modal, ModalData, ModalKind};
use leptos::prelude::*;
use thaw::*;

macro_rules! bind {
    ($vm:ident, $field:ident) => {
        (
            Signal::derive(move || $vm.form.with(|f| f.$field.clone())),
            Callback::new(move |v: String| $vm.form.update(|f| f.$field = v)),
        )
    };
}

/// Renders only while the customer editor is the open modal.
#[component]
pub fn CustomerModal(on_saved: Callback<()>) -> impl IntoView {
    let modal = use_modal();

    move || {
        if !modal.is_visible(ModalKind::CustomerEditor) {
            return ().into_any();
        }
        let customer = match modal.data_for(ModalKind::CustomerEditor) {
            Some(ModalData::Customer(c)) => Some(c),
            _ => None,
        };
        let vm = CustomerDetailsViewModel::new(customer.as_ref());
        view! { <CustomerForm vm=vm on_saved=on_saved /> }.into_any()
    }
}

#[component]
fn CustomerForm(vm: CustomerDetailsViewModel, on_saved: Callback<()>) -> impl IntoView {
    let title = Signal::derive(move || {
        if vm.is_edit_mode() { "Edit Customer" } else { "New Customer" }.to_string()
    });
    let (name, set_name) = bind!(vm, name);
    let (mobile, set_mobile) = bind!(vm, mobile);
    let (email, set_email) = bind!(vm, email);
    let (gst, set_gst) = bind!(vm, gst);
    let (address, set_address) = bind!(vm, address);
    let (remaining, set_remaining) = bind!(vm, remaining_payment_amount);
    let (next_action, set_next_action) = bind!(vm, next_action_date);
    let (remarks, set_remarks) = bind!(vm, remarks);

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close())>
            <div class="details-form details-form--grid">
                <FormField label="Name" field="name" errors=vm.errors>
                    <TextInput value=name on_input=set_name />
                </FormField>
                <FormField label="Mobile" field="mobile" errors=vm.errors>
                    <TextInput value=mobile on_input=set_mobile input_type="tel" placeholder="10 digits" />
                </FormField>
                <FormField label="Email" field="email" errors=vm.errors>
                    <TextInput value=email on_input=set_email input_type="email" />
                </FormField>
                <FormField label="GST number" field="gst" errors=vm.errors>
                    <TextInput value=gst on_input=set_gst placeholder="Optional" />
                </FormField>
                <FormField label="Address" field="address" errors=vm.errors>
                    <TextInput value=address on_input=set_address />
                </FormField>
                <FormField label="Remaining payment" field="remainingPaymentAmount" errors=vm.errors>
                    <TextInput value=remaining on_input=set_remaining input_type="number" />
                </FormField>
                <FormField label="Next action date">
                    <TextInput value=next_action on_input=set_next_action input_type="datetime-local" />
                </FormField>
                <FormField label="Status">
                    <StatusSelect
                        value=Signal::derive(move || vm.form.with(|f| f.status))
                        on_change=Callback::new(move |status| vm.form.update(|f| f.status = status))
                    />
                </FormField>
                <FormField label="Remarks">
                    <TextInput value=remarks on_input=set_remarks />
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
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </Flex>
        </Modal>
    }
}
