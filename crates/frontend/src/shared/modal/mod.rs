//! Shared modal state and the modal frame.
//!
//! One [`ModalService`] per application holds "which modal is open, with
//! what payload". Modal hosts render only while their kind is the open one;
//! opening a second modal replaces the first.

use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a004_purchase::aggregate::Purchase;
use contracts::domain::a006_powder_coating::aggregate::PowderCoatingProcess;
use contracts::shared::modal::{ModalAction, ModalState};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    CustomerEditor,
    SaleFromPurchase,
    PowderReturn,
    ConfirmDelete,
}

/// Payload handed to the open modal.
#[derive(Clone)]
pub enum ModalData {
    Customer(Customer),
    Purchase(Purchase),
    Process(PowderCoatingProcess),
    Confirm(ConfirmRequest),
}

#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
}

#[derive(Clone, Copy)]
pub struct ModalService {
    state: RwSignal<ModalState<ModalKind, ModalData>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::default()),
        }
    }

    pub fn open(&self, kind: ModalKind, data: Option<ModalData>) {
        log::debug!("modal open: {:?}", kind);
        self.state
            .update(|s| *s = std::mem::take(s).reduce(ModalAction::Open { kind, data }));
    }

    pub fn close(&self) {
        self.state
            .update(|s| *s = std::mem::take(s).reduce(ModalAction::Close));
    }

    /// Reactive.
    pub fn is_visible(&self, kind: ModalKind) -> bool {
        self.state.with(|s| s.is_visible(&kind))
    }

    /// Reactive; `None` unless `kind` is the open modal.
    pub fn data_for(&self, kind: ModalKind) -> Option<ModalData> {
        self.state.with(|s| s.data_for(&kind).cloned())
    }

    /// Ask before a destructive action.
    pub fn confirm(&self, message: impl Into<String>, on_confirm: impl Fn() + Send + Sync + 'static) {
        self.open(
            ModalKind::ConfirmDelete,
            Some(ModalData::Confirm(ConfirmRequest {
                message: message.into(),
                on_confirm: Callback::new(move |_| on_confirm()),
            })),
        );
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Host for [`ModalKind::ConfirmDelete`]; mounted once in the main layout.
#[component]
pub fn ConfirmDialogHost() -> impl IntoView {
    let modal = use_modal();

    move || {
        let Some(ModalData::Confirm(request)) = modal.data_for(ModalKind::ConfirmDelete) else {
            return ().into_any();
        };
        let on_confirm = request.on_confirm;
        view! {
            <Modal title="Please confirm".to_string() on_close=Callback::new(move |_| modal.close())>
                <p class="confirm__message">{request.message}</p>
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| modal.close()>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            modal.close();
                            on_confirm.run(());
                        }
                    >
                        "Confirm"
                    </Button>
                </Flex>
            </Modal>
        }
        .into_any()
    }
}
