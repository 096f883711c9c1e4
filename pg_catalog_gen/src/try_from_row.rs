pub use tokio_postgres::{Error as SqlError, Row};

/// Converts from a [`tokio_postgres::Row`]
///
/// Normally derived with `#[derive(TryFromRow)]`, which reads each field by position. Keep field order in step with
/// the select list of the statement the struct decodes.
///
/// [`tokio_postgres::Row`]: https://docs.rs/tokio-postgres/0.7/tokio_postgres/row/struct.Row.html
pub trait TryFromRow: Sized {
	fn from_row(row: &Row) -> Result<Self, SqlError>;
}
