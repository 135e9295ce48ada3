//! Centralized default constants for the rolodex service.
//!
//! Every crate references these constants instead of defining its own magic
//! numbers.

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for the contact list endpoint.
pub const PAGE_LIMIT: i64 = 100;

/// Default page offset.
pub const PAGE_OFFSET: i64 = 0;

// =============================================================================
// CONTACT FIELDS
// =============================================================================

/// Maximum characters for the short string columns (names, email, phone).
///
/// Matches the `VARCHAR(50)` columns in the `contacts` table.
pub const SHORT_FIELD_MAX_LEN: usize = 50;

// =============================================================================
// BIRTHDAYS
// =============================================================================

/// Smallest window accepted by the upcoming-birthdays endpoint.
pub const BIRTHDAY_WINDOW_MIN_DAYS: i64 = 7;

/// `chrono` format used to reduce a date to its month and day.
pub const MONTH_DAY_FORMAT: &str = "%m-%d";

/// PostgreSQL `to_char` pattern equivalent to [`MONTH_DAY_FORMAT`].
pub const MONTH_DAY_SQL_PATTERN: &str = "MM-DD";
