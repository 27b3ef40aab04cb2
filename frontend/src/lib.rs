//! Browser client for the order service.
//!
//! The interesting logic is the form-resource synchronization: validating
//! form state before a request is dispatched ([`validate`]), projecting the
//! service's response shapes onto the form and tables ([`envelope`]), the
//! fetch-then-merge order update ([`api::orders`]), and the auto-dismissing
//! status banner ([`status`]). Those modules are plain Rust with no DOM
//! dependency; the Yew components in [`components`] wire them to the page.

pub mod api;
pub mod app;
pub mod components;
pub mod envelope;
pub mod forms;
pub mod status;
pub mod validate;
