//! Request and response bodies for the contacts routes.
//!
//! Wire types stay loose (plain strings, double options) so that validation
//! failures surface as 422 with a field-specific message instead of a serde
//! error. Each schema converts into the validated `rolodex_core` request.

use chrono::NaiveDate;
use rolodex_core::defaults::{PAGE_LIMIT, PAGE_OFFSET, SHORT_FIELD_MAX_LEN};
use rolodex_core::{ContactPatch, CreateContactRequest, EmailAddress, ListContactsRequest};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// Body for `POST /contacts/`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactCreate {
    #[schema(example = "Ada", max_length = 50)]
    pub first_name: String,
    #[schema(example = "Lovelace", max_length = 50)]
    pub last_name: String,
    #[schema(example = "ada@example.com", max_length = 50)]
    pub email: String,
    #[schema(example = "+44 20 7946 0000", max_length = 50)]
    pub phone: String,
    #[schema(example = "1815-12-10")]
    pub birthday: NaiveDate,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl ContactCreate {
    pub fn validate(self) -> Result<CreateContactRequest, ApiError> {
        Ok(CreateContactRequest {
            first_name: short_field("first_name", self.first_name)?,
            last_name: short_field("last_name", self.last_name)?,
            email: email_field(self.email)?,
            phone: short_field("phone", self.phone)?,
            birthday: self.birthday,
            additional_info: self.additional_info,
        })
    }
}

/// Body for `PUT /contacts/{contact_id}`.
///
/// Omitted fields keep their stored value. An explicit `null` clears
/// `additional_info` and is rejected for every other field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactUpdate {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, max_length = 50)]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, max_length = 50)]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, max_length = 50)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, max_length = 50)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, format = Date)]
    pub birthday: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub additional_info: Option<Option<String>>,
}

impl ContactUpdate {
    pub fn validate(self) -> Result<ContactPatch, ApiError> {
        let Self {
            first_name,
            last_name,
            email,
            phone,
            birthday,
            additional_info,
        } = self;

        Ok(ContactPatch {
            first_name: required("first_name", first_name)?
                .map(|v| short_field("first_name", v))
                .transpose()?,
            last_name: required("last_name", last_name)?
                .map(|v| short_field("last_name", v))
                .transpose()?,
            email: required("email", email)?.map(email_field).transpose()?,
            phone: required("phone", phone)?
                .map(|v| short_field("phone", v))
                .transpose()?,
            birthday: required("birthday", birthday)?,
            additional_info,
        })
    }
}

/// Query string for `GET /contacts/`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContactsQuery {
    /// Maximum contacts to return.
    #[serde(default = "default_limit")]
    #[param(default = 100, minimum = 0)]
    pub limit: i64,
    /// Contacts to skip.
    #[serde(default = "default_offset")]
    #[param(default = 0, minimum = 0)]
    pub offset: i64,
    /// Case-insensitive substring of the first name.
    pub first_name: Option<String>,
    /// Case-insensitive substring of the last name.
    pub last_name: Option<String>,
    /// Case-insensitive substring of the email.
    pub email: Option<String>,
}

impl Default for ListContactsQuery {
    fn default() -> Self {
        Self {
            limit: PAGE_LIMIT,
            offset: PAGE_OFFSET,
            first_name: None,
            last_name: None,
            email: None,
        }
    }
}

impl ListContactsQuery {
    pub fn validate(self) -> Result<ListContactsRequest, ApiError> {
        if self.limit < 0 {
            return Err(ApiError::Validation("limit must be non-negative".to_string()));
        }
        if self.offset < 0 {
            return Err(ApiError::Validation("offset must be non-negative".to_string()));
        }
        Ok(ListContactsRequest {
            offset: self.offset,
            limit: self.limit,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "The API is up and running!")]
    pub message: String,
}

fn default_limit() -> i64 {
    PAGE_LIMIT
}

fn default_offset() -> i64 {
    PAGE_OFFSET
}

/// Distinguish an explicit `null` (`Some(None)`) from an omitted field (`None`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn required<T>(field: &str, value: Option<Option<T>>) -> Result<Option<T>, ApiError> {
    match value {
        Some(None) => Err(ApiError::Validation(format!("{field} may not be null"))),
        Some(Some(v)) => Ok(Some(v)),
        None => Ok(None),
    }
}

fn short_field(field: &str, value: String) -> Result<String, ApiError> {
    if value.chars().count() > SHORT_FIELD_MAX_LEN {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {SHORT_FIELD_MAX_LEN} characters"
        )));
    }
    Ok(value)
}

fn email_field(value: String) -> Result<EmailAddress, ApiError> {
    let value = short_field("email", value)?;
    EmailAddress::parse(&value).map_err(|e| ApiError::Validation(format!("email: {e}")))
}
