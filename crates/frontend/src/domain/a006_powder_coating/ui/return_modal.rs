//! Return of coated items, shown under `ModalKind::PowderReturn`.

use contracts::domain::a006_powder_coating::aggregate::PowderCoatingProcess;
use contracts::domain::a006_powder_coating::form::ReturnForm;
use contracts::shared::date_format::local_input_now;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_powder_coating::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::components::form_controls::{FormField, TextInput};
use crate::shared::date_utils::format_quantity;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::modal::{use_modal, Modal, ModalData, ModalKind};
use crate::shared::notify::use_notify;

const RETURN: Outcome = Outcome::fixed("Return created successfully", "Failed to create return");

#[component]
pub fn ReturnModal(on_saved: Callback<()>) -> impl IntoView {
    let modal = use_modal();

    move || match modal.data_for(ModalKind::PowderReturn) {
        Some(ModalData::Process(process)) => {
            view! { <ReturnFormView process=process on_saved=on_saved /> }.into_any()
        }
        _ => ().into_any(),
    }
}

#[component]
fn ReturnFormView(process: PowderCoatingProcess, on_saved: Callback<()>) -> impl IntoView {
    let http = use_context::<HttpClient>().expect("HttpClient not found");
    let modal = use_modal();
    let notify = use_notify();

    let form = RwSignal::new(ReturnForm::for_process(&process, local_input_now()));
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);

    let submit = move |_| {
        let payload = match form.with_untracked(ReturnForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        run_mutation(
            notify,
            Some(saving),
            RETURN,
            api::create_return(http, payload),
            move || {
                modal.close();
                on_saved.run(());
            },
        );
    };

    let title = format!("Return: {} / {}", process.customer_name, process.product_name);

    view! {
        <Modal title=title on_close=Callback::new(move |_| modal.close())>
            <p class="return-modal__hint">
                {format!("Outstanding quantity: {}", format_quantity(process.remaining_quantity))}
            </p>
            <div class="details-form">
                <FormField label="Return quantity" field="returnQuantity" errors=errors>
                    <TextInput
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.return_quantity.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.return_quantity = v))
                    />
                </FormField>
                <FormField label="Return date">
                    <TextInput
                        input_type="datetime-local"
                        value=Signal::derive(move || form.with(|f| f.return_date.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.return_date = v))
                    />
                </FormField>
            </div>
            <Flex justify=FlexJustify::End gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| modal.close()>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary disabled=saving on_click=submit>
                    {move || if saving.get() { "Saving..." } else { "Create return" }}
                </Button>
            </Flex>
        </Modal>
    }
}
