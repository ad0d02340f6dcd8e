use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use tickets_models::{
    CreateEventDto, CustomerRegistered, Event, LoginRequest, LoginResponse, MessageResponse,
    PartnerRegistered, RegisterCustomerDto, RegisterPartnerDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::partners::controller::register_partner,
        crate::modules::partners::controller::create_event,
        crate::modules::partners::controller::get_my_events,
        crate::modules::partners::controller::get_my_event,
        crate::modules::customers::controller::register_customer,
        crate::modules::events::controller::get_events,
        crate::modules::events::controller::get_event,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            MessageResponse,
            RegisterPartnerDto,
            PartnerRegistered,
            RegisterCustomerDto,
            CustomerRegistered,
            CreateEventDto,
            Event,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Password login"),
        (name = "Partners", description = "Partner registration and partner-owned events"),
        (name = "Customers", description = "Customer registration"),
        (name = "Events", description = "Public event browsing")
    ),
    info(
        title = "Tickets API",
        version = "0.1.0",
        description = "Event ticketing REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
