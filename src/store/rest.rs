use super::{DataStore, Filter, Query, Row, StoreError, StoreResult};
use async_trait::async_trait;
use reqwest::RequestBuilder;

/// Client for a PostgREST-compatible endpoint (`{base}/rest/v1/{table}`).
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check(response: reqwest::Response) -> StoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Query-string pairs for a select, e.g. `key=eq.history`, `order=name.asc`.
pub fn query_params(query: &Query, select: &str) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), select.to_string())];
    for filter in &query.filters {
        match filter {
            Filter::Eq(column, value) => params.push((column.clone(), format!("eq.{value}"))),
            Filter::In(column, values) => {
                let quoted = values
                    .iter()
                    .map(|v| format!("\"{}\"", v.replace('"', "\\\"")))
                    .collect::<Vec<_>>()
                    .join(",");
                params.push((column.clone(), format!("in.({quoted})")));
            }
        }
    }
    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }
    params
}

/// Total from a `Content-Range` header such as `0-9/42` or `*/0`.
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataStore for RestStore {
    async fn select(&self, query: &Query) -> StoreResult<Vec<Row>> {
        let request = self
            .client
            .get(self.table_url(&query.table))
            .query(&query_params(query, "*"));
        let response = Self::check(self.authorized(request).send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        let request = self
            .client
            .head(self.table_url(&query.table))
            .query(&query_params(query, "id"))
            .header("Prefer", "count=exact");
        let response = Self::check(self.authorized(request).send().await?).await?;
        let total = response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total);
        match total {
            Some(total) => Ok(total),
            None => {
                tracing::warn!(table = %query.table, "count response without content-range");
                Ok(0)
            }
        }
    }

    async fn insert(&self, table: &str, row: Row) -> StoreResult<()> {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(&[row]);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }

    async fn update(&self, table: &str, id: &str, row: Row) -> StoreResult<()> {
        let request = self
            .client
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&row);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, table: &str, id: &str) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))]);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_encode_filters_and_order() {
        let query = Query::table("village_info")
            .eq("key", "history")
            .is_in("key", &["address", "facebook"])
            .order("key", false);
        let params = query_params(&query, "*");
        assert_eq!(
            params,
            vec![
                ("select".to_string(), "*".to_string()),
                ("key".to_string(), "eq.history".to_string()),
                ("key".to_string(), "in.(\"address\",\"facebook\")".to_string()),
                ("order".to_string(), "key.desc".to_string()),
            ]
        );
    }

    #[test]
    fn content_range_total() {
        assert_eq!(parse_content_range_total("0-9/42"), Some(42));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("*/*"), None);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let store = RestStore::new("https://example.supabase.co/", "key");
        assert_eq!(
            store.table_url("umkm_products"),
            "https://example.supabase.co/rest/v1/umkm_products"
        );
    }
}
