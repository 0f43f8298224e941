//! Helpers shared by every collection of the entity store.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, prelude::DateTimeWithTimeZone,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Ids are time-ordered, so sorting by id yields insertion order.
pub fn fresh_id() -> Uuid {
    Uuid::now_v7()
}

pub fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

/// Ids are opaque to clients. Anything that does not parse cannot name a
/// stored record, so it is reported the same way as an unknown id.
pub fn parse_id(raw: &str, missing: &'static str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound(missing))
}

pub fn found<T>(record: Option<T>, missing: &'static str) -> AppResult<T> {
    record.ok_or(AppError::NotFound(missing))
}

/// Predicate update: set `column` to `to` on every record of `E` whose
/// `column` equals `from` exactly. Returns the number of records modified;
/// zero matches is not an error. Equal values modify nothing.
pub async fn update_matching<E, C>(
    db: &C,
    column: E::Column,
    from: &str,
    to: &str,
) -> Result<u64, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if from == to {
        return Ok(0);
    }
    let result = E::update_many()
        .col_expr(column, Expr::value(to))
        .filter(column.eq(from))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_reads_as_missing() {
        let err = parse_id("not-an-id", "Product not found").unwrap_err();
        assert!(matches!(err, AppError::NotFound("Product not found")));
    }

    #[test]
    fn fresh_ids_are_increasing() {
        let ids: Vec<Uuid> = (0..64).map(|_| fresh_id()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
