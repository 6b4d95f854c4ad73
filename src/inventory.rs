//! Inventory batches: adding, reducing and refreshing the listing.
//!
//! Nothing here adjusts the local listing after a mutation. Every successful
//! write is followed by a full refetch, so the table only ever shows what the
//! backend last returned.

use chrono::{DateTime, NaiveDate};

use crate::api::InventoryBackend;
use crate::error::{AppError, ValidationError};
use crate::invoice::parse_quantity;
use crate::model::{InventoryBatch, NewBatch, ReduceRequest};

/// Validates a reduce-by amount: present, numeric and above zero.
pub fn parse_reduce_quantity(raw: Option<&str>) -> Result<i64, ValidationError> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(ValidationError::MissingValue { field: "quantity" });
    }
    let quantity = parse_quantity(raw)?;
    if quantity <= 0 {
        return Err(ValidationError::NotPositive { field: "quantity" });
    }
    Ok(quantity)
}

/// Listing fetched after a write that the backend already accepted. `None`
/// means the write stands but the refetch failed; the failure is logged.
pub type Refreshed = Option<Vec<InventoryBatch>>;

async fn refresh<B: InventoryBackend>(backend: &B) -> Refreshed {
    match backend.list_inventory().await {
        Ok(list) => Some(list),
        Err(err) => {
            log::error!("Failed to refresh inventory: {}", err);
            None
        }
    }
}

pub async fn reduce_and_refresh<B: InventoryBackend>(
    backend: &B,
    batch_id: i64,
    raw_quantity: Option<&str>,
) -> Result<Refreshed, AppError> {
    let quantity = parse_reduce_quantity(raw_quantity)?;
    backend
        .reduce_inventory(&ReduceRequest {
            inventory_id: batch_id,
            quantity,
        })
        .await?;
    log::info!("reduced batch {} by {}", batch_id, quantity);
    Ok(refresh(backend).await)
}

pub async fn add_and_refresh<B: InventoryBackend>(
    backend: &B,
    form: &NewBatchForm,
) -> Result<Refreshed, AppError> {
    let batch = form.to_request()?;
    backend.add_inventory(&batch).await?;
    log::info!("added batch of {} for product {}", batch.quantity, batch.product_id);
    Ok(refresh(backend).await)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BatchField {
    ProductId,
    Quantity,
    ExpiryDate,
    SupplierName,
    OrderDate,
    DeliveryDate,
}

impl BatchField {
    pub const ALL: [BatchField; 6] = [
        BatchField::ProductId,
        BatchField::Quantity,
        BatchField::ExpiryDate,
        BatchField::SupplierName,
        BatchField::OrderDate,
        BatchField::DeliveryDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BatchField::ProductId => "Product ID",
            BatchField::Quantity => "Quantity",
            BatchField::ExpiryDate => "Expiry Date",
            BatchField::SupplierName => "Supplier",
            BatchField::OrderDate => "Order Date",
            BatchField::DeliveryDate => "Delivery Date",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            BatchField::ExpiryDate | BatchField::OrderDate | BatchField::DeliveryDate => "date",
            _ => "text",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct NewBatchForm {
    pub product_id: String,
    pub quantity: String,
    pub expiry_date: String,
    pub supplier_name: String,
    pub order_date: String,
    pub delivery_date: String,
}

impl NewBatchForm {
    pub fn get(&self, field: BatchField) -> &str {
        match field {
            BatchField::ProductId => &self.product_id,
            BatchField::Quantity => &self.quantity,
            BatchField::ExpiryDate => &self.expiry_date,
            BatchField::SupplierName => &self.supplier_name,
            BatchField::OrderDate => &self.order_date,
            BatchField::DeliveryDate => &self.delivery_date,
        }
    }

    pub fn with(mut self, field: BatchField, value: String) -> Self {
        match field {
            BatchField::ProductId => self.product_id = value,
            BatchField::Quantity => self.quantity = value,
            BatchField::ExpiryDate => self.expiry_date = value,
            BatchField::SupplierName => self.supplier_name = value,
            BatchField::OrderDate => self.order_date = value,
            BatchField::DeliveryDate => self.delivery_date = value,
        }
        self
    }

    /// Coerces the numeric fields; the rest are sent as typed.
    pub fn to_request(&self) -> Result<NewBatch, ValidationError> {
        Ok(NewBatch {
            product_id: parse_integer("product_id", &self.product_id)?,
            quantity: parse_integer("quantity", &self.quantity)?,
            expiry_date: self.expiry_date.trim().to_string(),
            supplier_name: self.supplier_name.trim().to_string(),
            order_date: self.order_date.trim().to_string(),
            delivery_date: self.delivery_date.trim().to_string(),
        })
    }
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingValue { field });
    }
    raw.parse::<i64>().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Backend dates come as `YYYY-MM-DD` or as an HTTP date; both show as `YYYY-MM-DD`.
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return String::new();
    };
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    match DateTime::parse_from_rfc2822(raw) {
        Ok(dt) => dt.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
