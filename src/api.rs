//! Thin client for the retail backend.
//!
//! Every call resolves to `Result<_, ApiError>`: send failures become
//! `ApiError::Transport`, non-2xx answers become `ApiError::Rejected` carrying the
//! backend's `error` text. Controllers are written against the small backend traits
//! below so their call sequencing can be exercised without a browser.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::{
    Analytics, DemandPrediction, InventoryBatch, InvoiceRequest, NewBatch, Product,
    ReduceRequest, Scheme,
};

#[allow(async_fn_in_trait)]
pub trait InventoryBackend {
    async fn list_inventory(&self) -> Result<Vec<InventoryBatch>, ApiError>;
    async fn add_inventory(&self, batch: &NewBatch) -> Result<(), ApiError>;
    async fn reduce_inventory(&self, request: &ReduceRequest) -> Result<(), ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait InvoiceBackend {
    async fn create_invoice(&self, request: &InvoiceRequest) -> Result<(), ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait DemandBackend {
    async fn predict_demand(
        &self,
        product_id: i64,
        month: u32,
        week: u32,
    ) -> Result<DemandPrediction, ApiError>;
}

#[derive(Clone, PartialEq, Debug)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub async fn fetch_schemes(&self) -> Result<Vec<Scheme>, ApiError> {
        self.get_json("/schemes").await
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products").await
    }

    pub async fn fetch_analytics(&self) -> Result<Analytics, ApiError> {
        self.get_json("/analytics").await
    }

    /// Sends the file as the multipart field `file`.
    pub async fn upload_inventory_csv(&self, file: &web_sys::File) -> Result<(), ApiError> {
        let form = web_sys::FormData::new().map_err(js_failure)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_failure)?;

        let url = self.config.endpoint("/inventory/upload_csv");
        let resp = Request::post(&url).body(form)?.send().await?;
        expect_ok(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let resp = Request::get(&url).send().await?;
        read_json(resp).await
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        let resp = Request::post(&url).json(body)?.send().await?;
        expect_ok(resp).await
    }
}

impl InventoryBackend for ApiClient {
    async fn list_inventory(&self) -> Result<Vec<InventoryBatch>, ApiError> {
        self.get_json("/inventory").await
    }

    async fn add_inventory(&self, batch: &NewBatch) -> Result<(), ApiError> {
        self.post_json("/inventory", batch).await
    }

    async fn reduce_inventory(&self, request: &ReduceRequest) -> Result<(), ApiError> {
        self.post_json("/inventory/reduce", request).await
    }
}

impl InvoiceBackend for ApiClient {
    async fn create_invoice(&self, request: &InvoiceRequest) -> Result<(), ApiError> {
        self.post_json("/create-invoice", request).await
    }
}

impl DemandBackend for ApiClient {
    async fn predict_demand(
        &self,
        product_id: i64,
        month: u32,
        week: u32,
    ) -> Result<DemandPrediction, ApiError> {
        let url = self.config.endpoint("/predict_demand");
        let product_id = product_id.to_string();
        let month = month.to_string();
        let week = week.to_string();
        let resp = Request::get(&url)
            .query([
                ("product_id", product_id.as_str()),
                ("month", month.as_str()),
                ("week", week.as_str()),
            ])
            .send()
            .await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Success bodies of mutations carry nothing the UI needs.
async fn expect_ok(resp: Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(rejection(resp).await)
    }
}

async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Rejected {
        status,
        message: rejection_message(status, &body),
    }
}

fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.as_str())
                .map(|e| e.to_string())
        })
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

fn js_failure(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}
