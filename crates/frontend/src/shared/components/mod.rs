pub mod badge;
pub mod date_range_picker;
pub mod filter_panel;
pub mod form_controls;
pub mod pagination_controls;
pub mod searchable_select;
