use sqlx::postgres::PgRow;
use std::error::Error;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Converts every row, failing on the first row that does not decode.
pub fn try_from_rows<T: TryFromRow<PgRow>>(
    rows: &[PgRow],
) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
    rows.iter().map(T::try_from_row).collect()
}
