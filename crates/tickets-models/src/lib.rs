//! # Tickets Models
//!
//! Domain entities, request DTOs and response shapes for the Tickets API.
//!
//! - [`users`]: the login identity shared by partners and customers
//! - [`partners`]: partner profiles and partner registration
//! - [`customers`]: customer profiles and customer registration
//! - [`events`]: events created by partners
//! - [`auth`]: login request/response
//! - [`validation`]: custom field rules used by the DTOs
//!
//! Entities derive [`sqlx::FromRow`] so services can map rows directly, and
//! [`utoipa::ToSchema`] so they appear in the OpenAPI document.

pub mod auth;
pub mod customers;
pub mod events;
pub mod partners;
pub mod users;
pub mod validation;

pub use auth::{LoginRequest, LoginResponse, MessageResponse};
pub use customers::{Customer, CustomerRegistered, RegisterCustomerDto};
pub use events::{CreateEventDto, Event};
pub use partners::{Partner, PartnerRegistered, RegisterPartnerDto};
pub use users::{User, UserIdentity};
