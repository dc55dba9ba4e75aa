use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use tokio::time::sleep;

use crate::error::{AppError, AppResult};

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(200);

/// Query document sent to the remote endpoint for the product listing.
pub const ALL_PRODUCTS_QUERY: &str = "\
query allProducts {
  allProducts {
    id
    sku
    name
    stock
  }
}";

/// Thin client for the remote graph-query backend.
#[derive(Clone)]
pub struct GraphqlClient {
    http: Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Forward the product listing and return the remote `allProducts`
    /// array verbatim.
    pub async fn all_products(&self) -> AppResult<Value> {
        let body = self.execute(ALL_PRODUCTS_QUERY).await?;
        extract_all_products(body)
    }

    async fn execute(&self, query: &str) -> AppResult<Value> {
        let payload = json!({ "query": query });
        let mut retries = 0;
        loop {
            let sent = self
                .http
                .post(&self.endpoint)
                .json(&payload)
                .send()
                .await
                .and_then(|resp| resp.error_for_status());
            match sent {
                Ok(resp) => return Ok(resp.json::<Value>().await?),
                Err(err) => {
                    if retries >= MAX_RETRIES {
                        return Err(AppError::Upstream(err));
                    }
                    retries += 1;
                    tracing::warn!(
                        retry = retries,
                        error = %err,
                        "graphql request failed, retrying"
                    );
                    sleep(RETRY_DELAY).await;
                }
            }
        }
    }
}

/// Pull `data.allProducts` out of a GraphQL response body.
pub fn extract_all_products(mut body: Value) -> AppResult<Value> {
    match body.get_mut("data").and_then(|data| data.get_mut("allProducts")) {
        Some(products) => Ok(products.take()),
        None => Err(AppError::Internal(anyhow::anyhow!(
            "graphql response missing data.allProducts"
        ))),
    }
}
