//! Core traits for rolodex abstractions.
//!
//! These traits define the interfaces that storage backends must satisfy,
//! keeping the HTTP layer independent of PostgreSQL.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::models::{Contact, ContactPatch, CreateContactRequest, ListContactsRequest};

// =============================================================================
// CONTACT REPOSITORY TRAITS
// =============================================================================

/// Repository for contact CRUD and query operations.
///
/// Every mutating call commits before returning. Absence is reported as
/// `Ok(None)`, never as an error.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// List contacts ordered by id, with pagination and substring filters.
    async fn list(&self, req: ListContactsRequest) -> Result<Vec<Contact>>;

    /// Fetch a contact by id.
    async fn get(&self, id: i32) -> Result<Option<Contact>>;

    /// Contacts whose birthday month/day falls in the window starting `today`.
    async fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days_ahead: i64,
    ) -> Result<Vec<Contact>>;

    /// Contacts with a birthday in the next `days_ahead` days, local time.
    async fn upcoming_birthdays(&self, days_ahead: i64) -> Result<Vec<Contact>> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days_ahead)
            .await
    }

    /// Insert a new contact and return it with its assigned id.
    async fn create(&self, req: CreateContactRequest) -> Result<Contact>;

    /// Apply a partial update. Returns `None` if the contact does not exist.
    async fn update(&self, id: i32, patch: ContactPatch) -> Result<Option<Contact>>;

    /// Hard-delete a contact, returning the removed row.
    async fn delete(&self, id: i32) -> Result<Option<Contact>>;
}
