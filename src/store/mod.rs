/// Data store access for the site and the admin panel.
///
/// Rows are plain JSON objects living in named tables. The `DataStore` trait
/// exposes the handful of operations the site needs (filtered/ordered select,
/// count, insert, update and delete by id); `records` layers the typed
/// queries for each collection on top.
///
/// # Backends
///
/// - `RestStore` - PostgREST-style REST API (the format Supabase serves)
/// - `MemoryStore` - in-process tables, seeded with demo content
mod memory;
mod records;
mod rest;

pub use memory::{MemoryStore, demo_tables};
pub use records::{
    delete_record, fetch_categories, fetch_category_distribution, fetch_contact_info,
    fetch_destinations, fetch_products, fetch_village_history, fetch_village_info,
    fetch_weekly_visitors, join_categories, save_record,
};
pub use rest::RestStore;

use async_trait::async_trait;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("data store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode rows: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("row payload must be a JSON object")]
    InvalidPayload,

    #[error("in-memory table lock poisoned")]
    Poisoned,

    #[error("{0} is not set")]
    NotConfigured(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub type Row = Map<String, Value>;

#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Eq(String, String),
    In(String, Vec<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// A select over one table.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub table: String,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push(Filter::Eq(column.to_string(), value.to_string()));
        self
    }

    pub fn is_in(mut self, column: &str, values: &[&str]) -> Self {
        self.filters.push(Filter::In(
            column.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataStore: Send + Sync {
    async fn select(&self, query: &Query) -> StoreResult<Vec<Row>>;

    /// Number of rows the query would return.
    async fn count(&self, query: &Query) -> StoreResult<u64>;

    async fn insert(&self, table: &str, row: Row) -> StoreResult<()>;

    async fn update(&self, table: &str, id: &str, row: Row) -> StoreResult<()>;

    async fn delete(&self, table: &str, id: &str) -> StoreResult<()>;
}

/// Turn a `serde_json::Value` payload into a row, rejecting non-objects.
pub fn into_row(value: Value) -> StoreResult<Row> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::InvalidPayload),
    }
}

/// Read paths on the landing page never surface errors: log and fall back.
pub fn or_log_default<T: Default>(result: StoreResult<T>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "error fetching {what}");
            T::default()
        }
    }
}
