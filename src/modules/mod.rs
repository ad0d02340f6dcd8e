//! Feature modules.
//!
//! Each module has a `controller.rs` with the HTTP handlers, a `service.rs`
//! holding the SQL, and a `router.rs` that wires the two together.

pub mod auth;
pub mod customers;
pub mod events;
pub mod partners;
