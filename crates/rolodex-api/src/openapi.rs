use rolodex_core::Contact;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::{contacts, health};
use crate::schemas::{ContactCreate, ContactUpdate, HealthResponse};

/// OpenAPI document served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rolodex Contacts API",
        description = "Contacts directory with substring search and upcoming birthdays"
    ),
    paths(
        health::healthchecker,
        contacts::list_contacts,
        contacts::get_contact,
        contacts::upcoming_birthdays,
        contacts::create_contact,
        contacts::update_contact,
        contacts::delete_contact,
    ),
    components(schemas(Contact, ContactCreate, ContactUpdate, HealthResponse, ErrorBody)),
    tags(
        (name = "contacts", description = "Contact CRUD and birthday queries"),
        (name = "default", description = "Health checks")
    )
)]
pub struct ApiDoc;
