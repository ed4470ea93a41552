//! The `suppliers` skill: supplier listing and purchase-order operations.
//!
//! Endpoints, all scoped under `/shops/{SHOP_ID}`:
//!
//! - `list`            → GET  `/suppliers`
//! - `purchases`       → GET  `/purchases`
//! - `update-purchase` → PUT  `/purchases/{id}`       (write-guarded)
//! - `split-purchase`  → POST `/purchases/separate`   (write-guarded)

use pancake_client::{ApiRequest, PosClient, Transport};

use super::{dispatch, read_stdin_body};

pub async fn list<T: Transport>(
    client: &PosClient<T>,
    query: Option<String>,
) -> anyhow::Result<()> {
    let request = ApiRequest::get(client.shop_path("/suppliers")).with_query(query);
    dispatch(client, request).await
}

pub async fn purchases<T: Transport>(
    client: &PosClient<T>,
    query: Option<String>,
) -> anyhow::Result<()> {
    let request = ApiRequest::get(client.shop_path("/purchases")).with_query(query);
    dispatch(client, request).await
}

pub async fn update_purchase<T: Transport>(client: &PosClient<T>, id: &str) -> anyhow::Result<()> {
    let body = read_stdin_body()?;
    let request = ApiRequest::put(client.shop_path(&format!("/purchases/{id}")), body);
    dispatch(client, request).await
}

pub async fn split_purchase<T: Transport>(client: &PosClient<T>) -> anyhow::Result<()> {
    let body = read_stdin_body()?;
    let request = ApiRequest::post(client.shop_path("/purchases/separate"), body);
    dispatch(client, request).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{CapturingTransport, test_client};

    #[tokio::test]
    async fn list_hits_suppliers_endpoint() {
        let transport = CapturingTransport::default();
        let client = test_client(transport.clone());
        list(&client, None).await.unwrap();
        assert_eq!(
            transport.urls(),
            vec!["https://pos.pages.fm/api/v1/shops/123/suppliers?api_key=abc"]
        );
    }

    #[tokio::test]
    async fn purchases_forwards_query_verbatim() {
        let transport = CapturingTransport::default();
        let client = test_client(transport.clone());
        purchases(&client, Some("?status=1&page=2".into()))
            .await
            .unwrap();
        assert_eq!(
            transport.urls(),
            vec!["https://pos.pages.fm/api/v1/shops/123/purchases?status=1&page=2&api_key=abc"]
        );
    }
}
