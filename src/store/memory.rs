use super::{DataStore, Filter, Query, Row, StoreError, StoreResult, into_row};
use crate::types::{
    TABLE_CATEGORIES, TABLE_DESTINATIONS, TABLE_PRODUCTS, TABLE_VILLAGE_INFO, TABLE_VISITORS,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Tables kept in process memory. Same filter and ordering rules as the REST
/// backend, minus the network.
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Row>>>,
    next_id: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn with_tables(tables: HashMap<String, Vec<Row>>) -> Self {
        Self {
            tables: Mutex::new(tables),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store preloaded with the village's demo content.
    pub fn seeded() -> Self {
        Self::with_tables(demo_tables())
    }

    fn fresh_id(&self) -> String {
        format!("mem-{}", self.next_id.fetch_add(1, AtomicOrdering::Relaxed))
    }

    fn run(&self, query: &Query) -> StoreResult<Vec<Row>> {
        let tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        let mut rows = tables
            .get(&query.table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filters.iter().all(|f| row_matches(row, f)))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.column), b.get(&order.column));
                if order.ascending { ord } else { ord.reverse() }
            });
        }
        Ok(rows)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataStore for MemoryStore {
    async fn select(&self, query: &Query) -> StoreResult<Vec<Row>> {
        self.run(query)
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        Ok(self.run(query)?.len() as u64)
    }

    async fn insert(&self, table: &str, mut row: Row) -> StoreResult<()> {
        if !matches!(row.get("id"), Some(Value::String(id)) if !id.is_empty()) {
            row.insert("id".to_string(), Value::String(self.fresh_id()));
        }
        let mut tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        tables.entry(table.to_string()).or_default().push(row);
        Ok(())
    }

    async fn update(&self, table: &str, id: &str, row: Row) -> StoreResult<()> {
        let mut tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        if let Some(rows) = tables.get_mut(table) {
            for existing in rows.iter_mut().filter(|r| value_matches(r.get("id"), id)) {
                for (column, value) in row.iter().filter(|(column, _)| *column != "id") {
                    existing.insert(column.clone(), value.clone());
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, table: &str, id: &str) -> StoreResult<()> {
        let mut tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|row| !value_matches(row.get("id"), id));
        }
        Ok(())
    }
}

fn row_matches(row: &Row, filter: &Filter) -> bool {
    match filter {
        Filter::Eq(column, expected) => value_matches(row.get(column), expected),
        Filter::In(column, options) => options
            .iter()
            .any(|expected| value_matches(row.get(column), expected)),
    }
}

fn value_matches(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        _ => false,
    }
}

/// Nulls and missing columns sort last, as in an ascending SQL order.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

fn rows(values: Vec<Value>) -> Vec<Row> {
    values.into_iter().filter_map(|v| into_row(v).ok()).collect()
}

pub fn demo_tables() -> HashMap<String, Vec<Row>> {
    let mut tables = HashMap::new();

    tables.insert(
        TABLE_CATEGORIES.to_string(),
        rows(vec![
            json!({ "id": "cat-kuliner", "name": "Kuliner", "color": "#F59E0B" }),
            json!({ "id": "cat-kerajinan", "name": "Kerajinan", "color": "#8B5CF6" }),
            json!({ "id": "cat-pertanian", "name": "Pertanian", "color": "#10B981" }),
        ]),
    );

    tables.insert(
        TABLE_DESTINATIONS.to_string(),
        rows(vec![
            json!({
                "id": "dest-nglinggo",
                "name": "Kebun Teh Nglinggo",
                "description": "Kebun teh dengan pemandangan indah dan udara sejuk. Cocok untuk wisata keluarga dan fotografi.",
                "maps_url": "https://www.google.com/maps/search/?api=1&query=-7.9344,110.4578",
                "image_url": null
            }),
            json!({
                "id": "dest-giriloyo",
                "name": "Sentra Batik Giriloyo",
                "description": "Kampung batik tulis tempat pengunjung bisa belajar membatik langsung bersama pengrajin.",
                "maps_url": "https://www.google.com/maps/search/?api=1&query=Batik+Giriloyo",
                "image_url": null
            }),
            json!({
                "id": "dest-becici",
                "name": "Puncak Becici",
                "description": "Hutan pinus dengan gardu pandang untuk menikmati matahari terbenam di atas Yogyakarta.",
                "maps_url": null,
                "image_url": null
            }),
            json!({
                "id": "dest-imogiri",
                "name": "Makam Raja-Raja Imogiri",
                "description": "Kompleks makam raja Mataram di atas bukit dengan ratusan anak tangga.",
                "maps_url": "https://www.google.com/maps/search/?api=1&query=Makam+Imogiri",
                "image_url": null
            }),
        ]),
    );

    tables.insert(
        TABLE_PRODUCTS.to_string(),
        rows(vec![
            json!({
                "id": "prod-batik", "name": "Batik Tulis Giriloyo",
                "description": "Kain batik tulis motif klasik, dikerjakan tangan oleh ibu-ibu pengrajin.",
                "price": 350000, "image_url": null, "whatsapp_number": "6281234567890",
                "category_id": "cat-kerajinan"
            }),
            json!({
                "id": "prod-wedang", "name": "Wedang Uwuh",
                "description": "Minuman rempah khas Imogiri dalam kemasan siap seduh.",
                "price": 15000, "image_url": null, "whatsapp_number": "6281234567891",
                "category_id": "cat-kuliner"
            }),
            json!({
                "id": "prod-madu", "name": "Madu Hutan",
                "description": "Madu murni dari peternak lebah di lereng bukit Wukirsari.",
                "price": 85000, "image_url": null, "whatsapp_number": "6281234567892",
                "category_id": "cat-pertanian"
            }),
            json!({
                "id": "prod-keripik", "name": "Keripik Tempe",
                "description": "Keripik tempe renyah, oleh-oleh favorit wisatawan.",
                "price": 20000, "image_url": null, "whatsapp_number": "6281234567891",
                "category_id": "cat-kuliner"
            }),
        ]),
    );

    tables.insert(
        TABLE_VISITORS.to_string(),
        rows(vec![
            json!({ "id": "week-1", "week_start": "2024-05-06", "visitor_count": 420 }),
            json!({ "id": "week-2", "week_start": "2024-05-13", "visitor_count": 515 }),
            json!({ "id": "week-3", "week_start": "2024-05-20", "visitor_count": 480 }),
            json!({ "id": "week-4", "week_start": "2024-05-27", "visitor_count": 610 }),
            json!({ "id": "week-5", "week_start": "2024-06-03", "visitor_count": 745 }),
            json!({ "id": "week-6", "week_start": "2024-06-10", "visitor_count": 690 }),
        ]),
    );

    tables.insert(
        TABLE_VILLAGE_INFO.to_string(),
        rows(vec![
            json!({
                "id": "info-history", "key": "history",
                "value": "Desa Wukirsari terletak di Kecamatan Imogiri, Kabupaten Bantul. Nama Wukirsari berarti gunung yang indah. Desa ini dikenal sebagai sentra batik tulis Giriloyo sejak masa Kerajaan Mataram, ketika para abdi dalem yang menjaga makam raja belajar membatik. Kini Wukirsari diakui UNWTO sebagai salah satu Best Tourism Villages."
            }),
            json!({ "id": "info-phone", "key": "contact_phone", "value": "+62 274 123456" }),
            json!({ "id": "info-email", "key": "contact_email", "value": "info@wukirsari.desa.id" }),
            json!({ "id": "info-address", "key": "address", "value": "Wukirsari, Imogiri, Bantul, Yogyakarta" }),
            json!({ "id": "info-instagram", "key": "instagram", "value": "@desawisatawukirsari" }),
            json!({ "id": "info-facebook", "key": "facebook", "value": "desawisatawukirsari" }),
        ]),
    );

    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_sort_last() {
        let a = json!(null);
        let b = json!("a");
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Greater);
        assert_eq!(compare_values(None, Some(&b)), Ordering::Greater);
        assert_eq!(compare_values(Some(&b), None), Ordering::Less);
    }

    #[test]
    fn numbers_compare_numerically() {
        let nine = json!(9);
        let ten = json!(10);
        assert_eq!(compare_values(Some(&nine), Some(&ten)), Ordering::Less);
    }

    #[test]
    fn numeric_columns_match_string_filters() {
        assert!(value_matches(Some(&json!(42)), "42"));
        assert!(!value_matches(Some(&json!(null)), "null"));
    }

    #[test]
    fn demo_tables_cover_every_collection() {
        let tables = demo_tables();
        for table in [
            TABLE_CATEGORIES,
            TABLE_DESTINATIONS,
            TABLE_PRODUCTS,
            TABLE_VISITORS,
            TABLE_VILLAGE_INFO,
        ] {
            assert!(tables.get(table).is_some_and(|rows| !rows.is_empty()));
        }
    }
}
