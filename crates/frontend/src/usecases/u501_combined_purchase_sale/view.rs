use super::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::components::form_controls::{FormField, TextInput};
use crate::shared::components::searchable_select::{to_options, SearchableSelect};
use crate::shared::date_utils::format_amount;
use crate::shared::icons::icon;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::notify::NotificationService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::ref_data::{load_products, use_ref_data};
use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::date_format::local_input_now;
use contracts::shared::validation::FieldErrors;
use contracts::usecases::u501_combined_purchase_sale::request::CombinedForm;
use leptos::prelude::*;
use thaw::*;

const SUBMIT: Outcome = Outcome::fixed(
    "Combined purchase and sale created successfully",
    "Failed to create combined purchase and sale",
);

type Getter = fn(&CombinedForm) -> String;
type Setter = fn(&mut CombinedForm, String);

/// One bound input of the form: label, error key, input type and accessors.
struct Input {
    label: &'static str,
    field: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
}

static PURCHASE_INPUTS: [Input; 4] = [
    Input {
        label: "Unit price",
        field: "purchaseUnitPrice",
        input_type: "number",
        get: |f| f.purchase_unit_price.clone(),
        set: |f, v| f.purchase_unit_price = v,
    },
    Input {
        label: "Purchase date",
        field: "purchaseDate",
        input_type: "datetime-local",
        get: |f| f.purchase_date.clone(),
        set: |f, v| f.purchase_date = v,
    },
    Input {
        label: "Invoice number",
        field: "purchaseInvoiceNumber",
        input_type: "text",
        get: |f| f.purchase_invoice_number.clone(),
        set: |f, v| f.purchase_invoice_number = v,
    },
    Input {
        label: "Other expenses",
        field: "purchaseOtherExpenses",
        input_type: "number",
        get: |f| f.purchase_other_expenses.clone(),
        set: |f, v| f.purchase_other_expenses = v,
    },
];

static SALE_INPUTS: [Input; 4] = [
    Input {
        label: "Unit price",
        field: "saleUnitPrice",
        input_type: "number",
        get: |f| f.sale_unit_price.clone(),
        set: |f, v| f.sale_unit_price = v,
    },
    Input {
        label: "Sale date",
        field: "saleDate",
        input_type: "datetime-local",
        get: |f| f.sale_date.clone(),
        set: |f, v| f.sale_date = v,
    },
    Input {
        label: "Invoice number",
        field: "saleInvoiceNumber",
        input_type: "text",
        get: |f| f.sale_invoice_number.clone(),
        set: |f, v| f.sale_invoice_number = v,
    },
    Input {
        label: "Other expenses",
        field: "saleOtherExpenses",
        input_type: "number",
        get: |f| f.sale_other_expenses.clone(),
        set: |f, v| f.sale_other_expenses = v,
    },
];

fn margin_text(margin: Option<f64>) -> String {
    margin.map(format_amount).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn CombinedPurchaseSaleView(on_close: Callback<()>) -> impl IntoView {
    let http = use_context::<HttpClient>().expect("HttpClient not found");
    let notify = use_context::<NotificationService>().expect("NotificationService not found");
    let refs = use_ref_data();

    let form = RwSignal::new(CombinedForm::new(local_input_now()));
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);
    let products = RwSignal::new(Vec::<Product>::new());
    load_products(refs, notify, products, false);

    let product_options = Signal::derive(move || products.with(|p| to_options(p)));
    let margin = Signal::derive(move || form.with(CombinedForm::expected_margin));

    let reset = move || {
        form.set(CombinedForm::new(local_input_now()));
        errors.set(FieldErrors::new());
    };
    let submit = move || {
        let request = match form.with_untracked(CombinedForm::validate) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        run_mutation(notify, Some(saving), SUBMIT, api::submit(http, request), reset);
    };

    let render_inputs = move |inputs: &'static [Input]| {
        inputs
            .iter()
            .map(|input| {
                let (get, set) = (input.get, input.set);
                view! {
                    <FormField label=input.label field=input.field errors=errors>
                        <TextInput
                            input_type=input.input_type
                            value=Signal::derive(move || form.with(get))
                            on_input=Callback::new(move |v| form.update(|f| set(f, v)))
                        />
                    </FormField>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="u501_combined_purchase_sale--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Purchase & Sale"</h1>
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
                        <FormField label="Product" field="productId" errors=errors>
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <SearchableSelect
                                    options=product_options
                                    selected=Signal::derive(move || form.with(|f| f.product_id))
                                    on_change=Callback::new(move |id| form.update(|f| f.product_id = id))
                                    placeholder="Select product"
                                />
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| load_products(refs, notify, products, true)
                                >
                                    {icon("refresh")}
                                </Button>
                            </Flex>
                        </FormField>
                        <FormField label="Quantity" field="quantity" errors=errors>
                            <TextInput
                                input_type="number"
                                value=Signal::derive(move || form.with(|f| f.quantity.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.quantity = v))
                            />
                        </FormField>
                    </div>
                </Card>

                <Flex gap=FlexGap::Medium align=FlexAlign::Start>
                    <Card class="usecase__half">
                        <h3>"Purchase"</h3>
                        <div class="details-form">{render_inputs(&PURCHASE_INPUTS)}</div>
                    </Card>
                    <Card class="usecase__half">
                        <h3>"Sale"</h3>
                        <div class="details-form">{render_inputs(&SALE_INPUTS)}</div>
                    </Card>
                </Flex>

                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <div class="usecase__summary">
                        "Expected margin before expenses: "
                        <strong>{move || margin_text(margin.get())}</strong>
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset()>
                            "Reset"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=move |_| submit()
                        >
                            {icon("save")}
                            {move || if saving.get() { " Saving..." } else { " Save" }}
                        </Button>
                    </Flex>
                </Flex>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_cover_both_halves() {
        let mut form = CombinedForm::default();
        for (input, value) in PURCHASE_INPUTS.iter().zip(["20", "2024-04-01T10:00", "P-1", "5"]) {
            (input.set)(&mut form, value.to_string());
        }
        for (input, value) in SALE_INPUTS.iter().zip(["26", "2024-04-02T10:00", "S-1", "0"]) {
            (input.set)(&mut form, value.to_string());
        }
        assert_eq!((SALE_INPUTS[2].get)(&form), "S-1");
        assert_eq!(form.purchase_other_expenses, "5");
        assert_eq!(form.sale_date, "2024-04-02T10:00");
    }

    #[test]
    fn margin_placeholder_when_incomplete() {
        assert_eq!(margin_text(None), "-");
    }
}
