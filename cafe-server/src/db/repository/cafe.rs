//! Cafe Repository
//!
//! Column lists and bind order come from [`CafeField::ALL`].

use std::sync::LazyLock;

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeField, CafeFields, FieldValue};
use sqlx::query_builder::Separated;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// `name, map_url, ...` in schema order
static COLUMNS: LazyLock<String> = LazyLock::new(|| {
    CafeField::ALL
        .iter()
        .map(|field| field.column())
        .collect::<Vec<_>>()
        .join(", ")
});

static SELECT_CAFE: LazyLock<String> =
    LazyLock::new(|| format!("SELECT id, {} FROM cafe", COLUMNS.as_str()));

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let sql = format!("{} ORDER BY id", SELECT_CAFE.as_str());
    let cafes = sqlx::query_as::<_, Cafe>(&sql).fetch_all(pool).await?;
    Ok(cafes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let sql = format!("{} WHERE id = ?", SELECT_CAFE.as_str());
    let cafe = sqlx::query_as::<_, Cafe>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

/// Cafes whose name or location contains `key`
///
/// Case-sensitive; `%` and `_` are literal. An empty key matches everything.
pub async fn search(pool: &SqlitePool, key: &str) -> RepoResult<Vec<Cafe>> {
    let sql = format!(
        "{} WHERE instr(name, ?1) > 0 OR instr(location, ?1) > 0 ORDER BY id",
        SELECT_CAFE.as_str()
    );
    let cafes = sqlx::query_as::<_, Cafe>(&sql)
        .bind(key)
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cafe")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Insert a cafe; a taken name or map link yields [`RepoError::Duplicate`]
pub async fn create(pool: &SqlitePool, data: CafeFields) -> RepoResult<Cafe> {
    let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO cafe (");
    builder.push(COLUMNS.as_str());
    builder.push(") VALUES (");
    {
        let mut values = builder.separated(", ");
        for field in CafeField::ALL {
            push_value(&mut values, data.value(field));
        }
    }
    builder.push(") RETURNING id");

    let id: i64 = builder.build_query_scalar().fetch_one(pool).await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cafe".into()))
}

/// Overwrite every mutable field of a cafe
pub async fn update(pool: &SqlitePool, id: i64, data: CafeFields) -> RepoResult<Cafe> {
    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE cafe SET ");
    {
        let mut assignments = builder.separated(", ");
        for field in CafeField::ALL {
            assignments.push(format!("{} = ", field.column()));
            match data.value(field) {
                FieldValue::Text(text) => assignments.push_bind_unseparated(text.to_owned()),
                FieldValue::Flag(flag) => assignments.push_bind_unseparated(flag),
            };
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let rows = builder.build().execute(pool).await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Cafe {id} not found")))
}

/// Hard delete; `Ok(false)` when the cafe was already gone
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

fn push_value(values: &mut Separated<'_, '_, Sqlite, &'static str>, value: FieldValue<'_>) {
    match value {
        FieldValue::Text(text) => values.push_bind(text.to_owned()),
        FieldValue::Flag(flag) => values.push_bind(flag),
    };
}
