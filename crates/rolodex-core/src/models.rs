//! Contact model and the request types the repository accepts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::defaults::{PAGE_LIMIT, PAGE_OFFSET};
use crate::email::EmailAddress;

// =============================================================================
// CONTACT
// =============================================================================

/// A person's directory entry, as persisted in the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Contact {
    /// System-assigned primary key.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Calendar date of birth (ISO 8601).
    pub birthday: NaiveDate,
    /// Free-text notes.
    pub additional_info: Option<String>,
}

impl Contact {
    /// Unique index that keeps emails distinct across contacts.
    pub const EMAIL_UNIQUE_INDEX: &'static str = "ix_contacts_email";
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Validated input for creating a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub birthday: NaiveDate,
    pub additional_info: Option<String>,
}

/// Partial update for a contact.
///
/// `None` leaves the stored value untouched. For `additional_info`,
/// `Some(None)` clears the note while `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub additional_info: Option<Option<String>>,
}

impl ContactPatch {
    /// True when the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the supplied fields into `contact`, field by field.
    ///
    /// Returns the names of the fields that were supplied. `id` is never
    /// touched.
    pub fn apply_to(self, contact: &mut Contact) -> Vec<&'static str> {
        let ContactPatch {
            first_name,
            last_name,
            email,
            phone,
            birthday,
            additional_info,
        } = self;

        let mut applied = Vec::new();
        if let Some(first_name) = first_name {
            contact.first_name = first_name;
            applied.push("first_name");
        }
        if let Some(last_name) = last_name {
            contact.last_name = last_name;
            applied.push("last_name");
        }
        if let Some(email) = email {
            contact.email = email.into_inner();
            applied.push("email");
        }
        if let Some(phone) = phone {
            contact.phone = phone;
            applied.push("phone");
        }
        if let Some(birthday) = birthday {
            contact.birthday = birthday;
            applied.push("birthday");
        }
        if let Some(additional_info) = additional_info {
            contact.additional_info = additional_info;
            applied.push("additional_info");
        }
        applied
    }
}

/// Request for listing contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContactsRequest {
    /// Rows to skip from the start of the id ordering.
    pub offset: i64,
    /// Maximum rows to return.
    pub limit: i64,
    /// Case-insensitive substring filter on `first_name`.
    pub first_name: Option<String>,
    /// Case-insensitive substring filter on `last_name`.
    pub last_name: Option<String>,
    /// Case-insensitive substring filter on `email`.
    pub email: Option<String>,
}

impl Default for ListContactsRequest {
    fn default() -> Self {
        Self {
            offset: PAGE_OFFSET,
            limit: PAGE_LIMIT,
            first_name: None,
            last_name: None,
            email: None,
        }
    }
}

impl ListContactsRequest {
    /// Filters that actually constrain the query, as `(column, needle)` pairs.
    ///
    /// Empty strings are ignored.
    pub fn active_filters(&self) -> Vec<(&'static str, &str)> {
        [
            ("first_name", self.first_name.as_deref()),
            ("last_name", self.last_name.as_deref()),
            ("email", self.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| match value {
            Some(v) if !v.is_empty() => Some((column, v)),
            _ => None,
        })
        .collect()
    }
}
