//! Wire types, form rules and the pure state machines shared by the
//! inventory console UI.
//!
//! Nothing in this crate touches the DOM or the network, so every reducer
//! and validator here is exercised by plain `cargo test`.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;
