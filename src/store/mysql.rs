//! MySQL-backed product store

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::mysql::{MySqlColumn, MySqlConnectOptions, MySqlRow};
use sqlx::{Column, ConnectOptions, Connection, Row, TypeInfo, ValueRef};

use crate::config::DatabaseConfig;
use crate::types::{FieldValue, ProductRecord};
use crate::{Error, Result};

use super::ProductStore;

/// The one query this service runs; the column list is whatever the table
/// currently defines.
const LIST_PRODUCTS_SQL: &str = "SELECT * FROM products";

/// MySQL-backed store opening one session per call.
///
/// There is deliberately no pool: every call connects fresh and closes the
/// session before returning, so concurrent requests never share connection
/// state.
pub struct MySqlStore {
    options: MySqlConnectOptions,
}

impl MySqlStore {
    /// Build a store from the database section resolved at startup.
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            options: config.connect_options(),
        }
    }
}

#[async_trait]
impl ProductStore for MySqlStore {
    async fn list_products(&self) -> Result<Vec<ProductRecord>> {
        let mut conn = self.options.connect().await.map_err(Error::Connection)?;

        let result = sqlx::query(LIST_PRODUCTS_SQL).fetch_all(&mut conn).await;

        // End the session before inspecting the outcome so both the success
        // and the failure path release the connection.
        if let Err(err) = conn.close().await {
            tracing::warn!(error = %err, "mysql session did not close cleanly");
        }

        let rows = result.map_err(Error::Query)?;
        rows.iter().map(record_from_row).collect()
    }
}

fn record_from_row(row: &MySqlRow) -> Result<ProductRecord> {
    let mut record = ProductRecord::with_capacity(row.columns().len());
    for column in row.columns() {
        record.push(column.name(), decode_field(row, column)?);
    }
    Ok(record)
}

/// Decode one cell into the JSON-scalar union, dispatching on the column's
/// MySQL type name.
fn decode_field(row: &MySqlRow, column: &MySqlColumn) -> Result<FieldValue> {
    let index = column.ordinal();

    let raw = row.try_get_raw(index).map_err(Error::Query)?;
    if raw.is_null() {
        return Ok(FieldValue::Null);
    }

    let value = match column.type_info().name() {
        "BOOLEAN" => FieldValue::Boolean(row.try_get(index).map_err(Error::Query)?),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            FieldValue::Integer(row.try_get(index).map_err(Error::Query)?)
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" | "YEAR" => {
            FieldValue::Unsigned(row.try_get(index).map_err(Error::Query)?)
        }
        "FLOAT" => {
            let single: f32 = row.try_get(index).map_err(Error::Query)?;
            FieldValue::Float(f64::from(single))
        }
        "DOUBLE" => FieldValue::Float(row.try_get(index).map_err(Error::Query)?),
        "DECIMAL" => decimal_value(row.try_get(index).map_err(Error::Query)?),
        "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" | "SET" => {
            FieldValue::Text(row.try_get(index).map_err(Error::Query)?)
        }
        "DATE" => {
            let date: chrono::NaiveDate = row.try_get(index).map_err(Error::Query)?;
            FieldValue::Text(date.to_string())
        }
        "TIME" => {
            let time: chrono::NaiveTime = row.try_get(index).map_err(Error::Query)?;
            FieldValue::Text(time.to_string())
        }
        "DATETIME" => {
            let datetime: chrono::NaiveDateTime = row.try_get(index).map_err(Error::Query)?;
            FieldValue::Text(datetime.to_string())
        }
        "TIMESTAMP" => {
            let timestamp: chrono::DateTime<chrono::Utc> =
                row.try_get(index).map_err(Error::Query)?;
            FieldValue::Text(timestamp.to_rfc3339())
        }
        other => {
            return Err(Error::UnsupportedColumn {
                column: column.name().to_string(),
                ty: other.to_string(),
            })
        }
    };

    Ok(value)
}

/// `DECIMAL` columns (the usual type for prices) surface as JSON numbers,
/// rounded to the nearest `f64` when the exact value does not fit. The
/// textual arm satisfies the `ToPrimitive` contract; `rust_decimal`
/// converts every representable value, so it is not reached in practice.
fn decimal_value(decimal: Decimal) -> FieldValue {
    match decimal.to_f64() {
        Some(float) => FieldValue::Float(float),
        None => FieldValue::Text(decimal.to_string()),
    }
}
