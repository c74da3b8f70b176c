use super::{DataStore, Query, Row, StoreResult};
use crate::theme::{CHART_FALLBACK_COLOR, UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME};
use crate::types::{
    Category, CategoryShare, ContactInfo, Destination, Product, ProductListing, TABLE_CATEGORIES,
    TABLE_DESTINATIONS, TABLE_PRODUCTS, TABLE_VILLAGE_INFO, TABLE_VISITORS, VillageInfo,
    WeeklyVisitors,
};
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

fn decode<T: DeserializeOwned>(rows: Vec<Row>) -> StoreResult<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(Into::into))
        .collect()
}

async fn select_as<T: DeserializeOwned>(store: &dyn DataStore, query: Query) -> StoreResult<Vec<T>> {
    decode(store.select(&query).await?)
}

pub async fn fetch_destinations(store: &dyn DataStore) -> StoreResult<Vec<Destination>> {
    select_as(store, Query::table(TABLE_DESTINATIONS).order("name", true)).await
}

pub async fn fetch_categories(store: &dyn DataStore) -> StoreResult<Vec<Category>> {
    select_as(store, Query::table(TABLE_CATEGORIES).order("name", true)).await
}

/// Products ordered by name, each paired with its category.
pub async fn fetch_products(store: &dyn DataStore) -> StoreResult<Vec<ProductListing>> {
    let products: Vec<Product> =
        select_as(store, Query::table(TABLE_PRODUCTS).order("name", true)).await?;
    let categories: Vec<Category> = select_as(store, Query::table(TABLE_CATEGORIES)).await?;
    Ok(join_categories(products, &categories))
}

pub fn join_categories(products: Vec<Product>, categories: &[Category]) -> Vec<ProductListing> {
    let by_id = categories
        .iter()
        .map(|c| (c.id.as_str(), c))
        .collect::<HashMap<_, _>>();
    products
        .into_iter()
        .map(|product| {
            let category = product
                .category_id
                .as_deref()
                .and_then(|id| by_id.get(id).copied());
            let category_name = category
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNCATEGORIZED_NAME.to_string());
            let category_color = category
                .and_then(|c| c.color.clone())
                .unwrap_or_else(|| UNCATEGORIZED_COLOR.to_string());
            ProductListing {
                product,
                category_name,
                category_color,
            }
        })
        .collect()
}

/// Product count per category, one count query per category.
pub async fn fetch_category_distribution(store: &dyn DataStore) -> StoreResult<Vec<CategoryShare>> {
    let categories: Vec<Category> = select_as(store, Query::table(TABLE_CATEGORIES)).await?;
    let counts = try_join_all(categories.iter().map(|category| {
        let query = Query::table(TABLE_PRODUCTS).eq("category_id", &category.id);
        async move { store.count(&query).await }
    }))
    .await?;

    Ok(categories
        .into_iter()
        .zip(counts)
        .map(|(category, count)| CategoryShare {
            id: category.id,
            name: category.name,
            color: category
                .color
                .unwrap_or_else(|| CHART_FALLBACK_COLOR.to_string()),
            count,
        })
        .collect())
}

pub async fn fetch_weekly_visitors(
    store: &dyn DataStore,
    ascending: bool,
) -> StoreResult<Vec<WeeklyVisitors>> {
    select_as(
        store,
        Query::table(TABLE_VISITORS).order("week_start", ascending),
    )
    .await
}

pub async fn fetch_village_info(store: &dyn DataStore) -> StoreResult<Vec<VillageInfo>> {
    select_as(store, Query::table(TABLE_VILLAGE_INFO).order("key", true)).await
}

/// The `history` entry of `village_info`, if present and non-null.
pub async fn fetch_village_history(store: &dyn DataStore) -> StoreResult<Option<String>> {
    let rows: Vec<VillageInfo> = select_as(
        store,
        Query::table(TABLE_VILLAGE_INFO).eq("key", "history"),
    )
    .await?;
    Ok(rows.into_iter().next().and_then(|row| row.value))
}

pub async fn fetch_contact_info(store: &dyn DataStore) -> StoreResult<ContactInfo> {
    let rows: Vec<VillageInfo> = select_as(
        store,
        Query::table(TABLE_VILLAGE_INFO).is_in("key", &ContactInfo::KEYS),
    )
    .await?;
    Ok(ContactInfo::from_rows(&rows))
}

/// Insert when `id` is `None`, otherwise update the row with that id.
pub async fn save_record(
    store: &dyn DataStore,
    table: &str,
    id: Option<&str>,
    payload: Row,
) -> StoreResult<()> {
    match id {
        Some(id) => {
            tracing::info!(table, id, "updating record");
            store.update(table, id, payload).await
        }
        None => {
            tracing::info!(table, "inserting record");
            store.insert(table, payload).await
        }
    }
}

pub async fn delete_record(store: &dyn DataStore, table: &str, id: &str) -> StoreResult<()> {
    tracing::info!(table, id, "deleting record");
    store.delete(table, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_without_category_get_fallback() {
        let products = vec![
            Product {
                id: "p1".into(),
                name: "Gerabah".into(),
                category_id: Some("c1".into()),
                ..Default::default()
            },
            Product {
                id: "p2".into(),
                name: "Jamu".into(),
                category_id: None,
                ..Default::default()
            },
            Product {
                id: "p3".into(),
                name: "Topeng".into(),
                category_id: Some("missing".into()),
                ..Default::default()
            },
        ];
        let categories = vec![Category {
            id: "c1".into(),
            name: "Kerajinan".into(),
            color: None,
        }];

        let listings = join_categories(products, &categories);
        assert_eq!(listings[0].category_name, "Kerajinan");
        assert_eq!(listings[0].category_color, UNCATEGORIZED_COLOR);
        assert_eq!(listings[1].category_name, UNCATEGORIZED_NAME);
        assert_eq!(listings[2].category_name, UNCATEGORIZED_NAME);
    }
}
