//! Sale entry against one purchase, shown in the shared modal slot under
//! `ModalKind::SaleFromPurchase`.

mod view;
mod view_model;

pub use view::SaleModal;
pub use view_model::SaleDetailsViewModel;
