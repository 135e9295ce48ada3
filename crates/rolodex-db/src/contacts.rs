//! Contact repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use tracing::{debug, error, info, warn};

use rolodex_core::defaults::MONTH_DAY_SQL_PATTERN;
use rolodex_core::{
    BirthdayWindow, Contact, ContactPatch, ContactRepository, CreateContactRequest, Error,
    ListContactsRequest, Result,
};

use crate::escape_like;

/// Column list shared by every query that returns whole contacts.
const CONTACT_COLUMNS: &str =
    "id, first_name, last_name, email, phone, birthday, additional_info";

/// PostgreSQL implementation of ContactRepository.
#[derive(Clone)]
pub struct PgContactRepository {
    pool: Pool<Postgres>,
}

impl PgContactRepository {
    /// Create a new PgContactRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn contact_from_row(r: &PgRow) -> Contact {
    Contact {
        id: r.get("id"),
        first_name: r.get("first_name"),
        last_name: r.get("last_name"),
        email: r.get("email"),
        phone: r.get("phone"),
        birthday: r.get("birthday"),
        additional_info: r.get("additional_info"),
    }
}

/// Log a store failure and convert it into the rolodex taxonomy.
fn store_error(op: &'static str, err: sqlx::Error) -> Error {
    let err = Error::from_store(err);
    match &err {
        Error::UniqueViolation { .. } => warn!(
            subsystem = "db",
            component = "contacts",
            op,
            error = %err,
            "Contact write rejected by unique constraint"
        ),
        _ => error!(
            subsystem = "db",
            component = "contacts",
            op,
            error = %err,
            "Contact query failed"
        ),
    }
    err
}

/// Build the list query for the active filters.
///
/// Filter needles are bound as `$1..$n`, followed by `LIMIT` and `OFFSET`.
fn list_query(filters: &[(&'static str, &str)]) -> String {
    let mut query = format!("SELECT {} FROM contacts", CONTACT_COLUMNS);

    if !filters.is_empty() {
        let clauses: Vec<String> = filters
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} ILIKE ${}", column, i + 1))
            .collect();
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }

    let limit_param = filters.len() + 1;
    query.push_str(&format!(
        " ORDER BY id LIMIT ${} OFFSET ${}",
        limit_param,
        limit_param + 1
    ));
    query
}

fn birthday_query() -> String {
    format!(
        "SELECT {} FROM contacts \
         WHERE to_char(birthday, '{}') COLLATE \"C\" BETWEEN $1 AND $2 \
         ORDER BY id",
        CONTACT_COLUMNS, MONTH_DAY_SQL_PATTERN
    )
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn list(&self, req: ListContactsRequest) -> Result<Vec<Contact>> {
        let start = Instant::now();
        let filters = req.active_filters();
        let query = list_query(&filters);

        let mut q = sqlx::query(&query);
        for (_, needle) in &filters {
            q = q.bind(format!("%{}%", escape_like(needle)));
        }

        let rows = q
            .bind(req.limit)
            .bind(req.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("list", e))?;

        debug!(
            subsystem = "db",
            component = "contacts",
            op = "list",
            offset = req.offset,
            limit = req.limit,
            filter_count = filters.len(),
            result_count = rows.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Listed contacts"
        );

        Ok(rows.iter().map(contact_from_row).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Contact>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM contacts WHERE id = $1",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("get", e))?;

        Ok(row.as_ref().map(contact_from_row))
    }

    async fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days_ahead: i64,
    ) -> Result<Vec<Contact>> {
        let window = BirthdayWindow::starting(today, days_ahead)?;

        debug!(
            subsystem = "db",
            component = "contacts",
            op = "upcoming_birthdays",
            %today,
            days_ahead,
            window_start = %window.start,
            window_end = %window.end,
            "Searching for birthdays"
        );
        if window.wraps_year() {
            warn!(
                subsystem = "db",
                component = "contacts",
                op = "upcoming_birthdays",
                window_start = %window.start,
                window_end = %window.end,
                "Birthday window crosses the year boundary and matches no month/day"
            );
        }

        let rows = sqlx::query(&birthday_query())
            .bind(&window.start)
            .bind(&window.end)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("upcoming_birthdays", e))?;

        Ok(rows.iter().map(contact_from_row).collect())
    }

    async fn create(&self, req: CreateContactRequest) -> Result<Contact> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone, birthday, additional_info)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.email.as_str())
        .bind(&req.phone)
        .bind(req.birthday)
        .bind(&req.additional_info)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("create", e))?;

        let contact = contact_from_row(&row);
        info!(
            subsystem = "db",
            component = "contacts",
            op = "create",
            contact_id = contact.id,
            "Contact created"
        );
        Ok(contact)
    }

    async fn update(&self, id: i32, patch: ContactPatch) -> Result<Option<Contact>> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| store_error("update", e))?;

        let row = sqlx::query(&format!(
            "SELECT {} FROM contacts WHERE id = $1 FOR UPDATE",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| store_error("update", e))?;

        // Dropping the transaction rolls it back.
        let Some(row) = row else {
            return Ok(None);
        };

        let mut contact = contact_from_row(&row);
        let applied = patch.apply_to(&mut contact);

        let row = sqlx::query(&format!(
            r#"
            UPDATE contacts
            SET first_name = $1, last_name = $2, email = $3, phone = $4,
                birthday = $5, additional_info = $6
            WHERE id = $7
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.birthday)
        .bind(&contact.additional_info)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| store_error("update", e))?;
        let contact = contact_from_row(&row);

        tx.commit().await.map_err(|e| store_error("update", e))?;

        info!(
            subsystem = "db",
            component = "contacts",
            op = "update",
            contact_id = id,
            fields = ?applied,
            "Contact updated"
        );
        Ok(Some(contact))
    }

    async fn delete(&self, id: i32) -> Result<Option<Contact>> {
        let row = sqlx::query(&format!(
            "DELETE FROM contacts WHERE id = $1 RETURNING {}",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("delete", e))?;

        let deleted = row.as_ref().map(contact_from_row);
        if deleted.is_some() {
            info!(
                subsystem = "db",
                component = "contacts",
                op = "delete",
                contact_id = id,
                "Contact deleted"
            );
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_without_filters() {
        assert_eq!(
            list_query(&[]),
            "SELECT id, first_name, last_name, email, phone, birthday, additional_info \
             FROM contacts ORDER BY id LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_list_query_numbers_filter_params_first() {
        let query = list_query(&[("first_name", "ada"), ("email", "x.com")]);
        assert!(query.contains("WHERE first_name ILIKE $1 AND email ILIKE $2"));
        assert!(query.ends_with("ORDER BY id LIMIT $3 OFFSET $4"));
    }

    #[test]
    fn test_birthday_query_compares_month_day_bytewise() {
        let query = birthday_query();
        assert!(query.contains("to_char(birthday, 'MM-DD') COLLATE \"C\" BETWEEN $1 AND $2"));
        assert!(query.ends_with("ORDER BY id"));
    }
}
