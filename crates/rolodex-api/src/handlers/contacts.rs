//! Contact CRUD and birthday query handlers.
//!
//! Extractor rejections are taken as `Result` so that malformed paths,
//! queries and bodies answer with the same `{"error": ...}` body as every
//! other failure.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rolodex_core::defaults::BIRTHDAY_WINDOW_MIN_DAYS;
use rolodex_core::{Contact, ContactRepository};

use crate::schemas::{ContactCreate, ContactUpdate, ListContactsQuery};
use crate::{ApiError, AppState};

fn not_found(contact_id: i64) -> ApiError {
    ApiError::NotFound(format!("Contact with id={contact_id} not found"))
}

/// Narrow a path id to the `SERIAL` column type. Ids outside it cannot exist.
fn stored_id(contact_id: i64) -> Result<i32, ApiError> {
    i32::try_from(contact_id).map_err(|_| not_found(contact_id))
}

/// List contacts with pagination and substring filters.
#[utoipa::path(get, path = "/contacts/", tag = "contacts",
    params(ListContactsQuery),
    responses(
        (status = 200, description = "Contacts ordered by id", body = [Contact]),
        (status = 422, description = "Invalid query", body = crate::error::ErrorBody),
    ))]
pub async fn list_contacts(
    State(state): State<AppState>,
    query: Result<Query<ListContactsQuery>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let Query(query) = query?;
    let req = query.validate()?;
    let contacts = state.db.contacts.list(req).await?;
    Ok(Json(contacts))
}

/// Fetch one contact.
#[utoipa::path(get, path = "/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = Contact),
        (status = 404, description = "No such contact", body = crate::error::ErrorBody),
    ))]
pub async fn get_contact(
    State(state): State<AppState>,
    contact_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Path(contact_id) = contact_id?;
    state
        .db
        .contacts
        .get(stored_id(contact_id)?)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(contact_id))
}

/// Contacts whose birthday falls within the next `days_number` days.
///
/// The window compares zero-padded `MM-DD` strings, so a window that crosses
/// New Year matches nothing.
#[utoipa::path(get, path = "/contacts/birthday/{days_number}", tag = "contacts",
    params(("days_number" = i64, Path, description = "Days ahead, at least 7")),
    responses(
        (status = 200, description = "Contacts with upcoming birthdays", body = [Contact]),
        (status = 422, description = "days_number below 7", body = crate::error::ErrorBody),
    ))]
pub async fn upcoming_birthdays(
    State(state): State<AppState>,
    days_number: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let Path(days_number) = days_number?;
    if days_number < BIRTHDAY_WINDOW_MIN_DAYS {
        return Err(ApiError::Validation(format!(
            "days_number must be greater than or equal to {BIRTHDAY_WINDOW_MIN_DAYS}"
        )));
    }
    let contacts = state.db.contacts.upcoming_birthdays(days_number).await?;
    Ok(Json(contacts))
}

/// Create a contact.
#[utoipa::path(post, path = "/contacts/", tag = "contacts",
    request_body = ContactCreate,
    responses(
        (status = 200, description = "Created contact", body = Contact),
        (status = 409, description = "Email already in use", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid body", body = crate::error::ErrorBody),
    ))]
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactCreate>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Json(body) = body?;
    let req = body.validate()?;
    let contact = state.db.contacts.create(req).await?;
    Ok(Json(contact))
}

/// Partially update a contact.
#[utoipa::path(put, path = "/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i64, Path, description = "Contact id, at least 1")),
    request_body = ContactUpdate,
    responses(
        (status = 200, description = "Updated contact", body = Contact),
        (status = 404, description = "No such contact", body = crate::error::ErrorBody),
        (status = 409, description = "Email already in use", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid id or body", body = crate::error::ErrorBody),
    ))]
pub async fn update_contact(
    State(state): State<AppState>,
    contact_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ContactUpdate>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Path(contact_id) = contact_id?;
    if contact_id < 1 {
        return Err(ApiError::Validation(
            "contact_id must be greater than or equal to 1".to_string(),
        ));
    }
    let Json(body) = body?;
    let patch = body.validate()?;
    state
        .db
        .contacts
        .update(stored_id(contact_id)?, patch)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(contact_id))
}

/// Delete a contact.
#[utoipa::path(delete, path = "/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i64, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such contact", body = crate::error::ErrorBody),
    ))]
pub async fn delete_contact(
    State(state): State<AppState>,
    contact_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(contact_id) = contact_id?;
    match state.db.contacts.delete(stored_id(contact_id)?).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(not_found(contact_id)),
    }
}
