//! The `employees` skill: employee account operations.
//!
//! Endpoints, scoped under `/shops/{SHOP_ID}`:
//!
//! - `list`   → GET `/users`
//! - `update` → PUT `/users/{id}`   (write-guarded)

use pancake_client::{ApiRequest, PosClient, Transport};

use super::{dispatch, read_stdin_body};

pub async fn list<T: Transport>(
    client: &PosClient<T>,
    query: Option<String>,
) -> anyhow::Result<()> {
    let request = ApiRequest::get(client.shop_path("/users")).with_query(query);
    dispatch(client, request).await
}

pub async fn update<T: Transport>(client: &PosClient<T>, id: &str) -> anyhow::Result<()> {
    let body = read_stdin_body()?;
    let request = ApiRequest::put(client.shop_path(&format!("/users/{id}")), body);
    dispatch(client, request).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
