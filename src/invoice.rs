//! Sales entry: invoice line items, running total and submission.

use std::rc::Rc;

use yew::Reducible;

use crate::api::InvoiceBackend;
use crate::error::{AppError, ValidationError};
use crate::model::{InvoiceItem, InvoiceRequest, Product};

/// Read-only facts copied from the selected product.
#[derive(Clone, PartialEq, Debug)]
pub struct ProductDetails {
    pub name: String,
    pub category: String,
    pub available_quantity: i64,
}

impl From<&Product> for ProductDetails {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone().unwrap_or_default(),
            available_quantity: product.inventory.unwrap_or(0),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LineItem {
    pub product_id: Option<i64>,
    pub quantity: String,
    pub details: Option<ProductDetails>,
}

impl LineItem {
    pub fn name(&self) -> &str {
        self.details.as_ref().map(|d| d.name.as_str()).unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.details.as_ref().map(|d| d.category.as_str()).unwrap_or("")
    }

    pub fn available_quantity(&self) -> String {
        self.details
            .as_ref()
            .map(|d| d.available_quantity.to_string())
            .unwrap_or_default()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(t) | StatusMessage::Error(t) => t,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct InvoiceForm {
    pub products: Vec<Product>,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub status: Option<StatusMessage>,
    pub submitting: bool,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            items: vec![LineItem::default()],
            total: 0.0,
            status: None,
            submitting: false,
        }
    }
}

pub enum InvoiceAction {
    ProductsLoaded(Vec<Product>),
    AddLine,
    SelectProduct { index: usize, raw: String },
    SetQuantity { index: usize, raw: String },
    CalculateTotal,
    Rejected(String),
    Submitting,
    Submitted,
    SubmitFailed(String),
}

impl InvoiceForm {
    pub fn apply(mut self, action: InvoiceAction) -> Self {
        match action {
            InvoiceAction::ProductsLoaded(products) => self.products = products,
            InvoiceAction::AddLine => self.items.push(LineItem::default()),
            InvoiceAction::SelectProduct { index, raw } => {
                self.items = select_product(&self.items, index, &raw, &self.products);
            }
            InvoiceAction::SetQuantity { index, raw } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity = raw;
                }
            }
            InvoiceAction::CalculateTotal => self.total = total_quantity(&self.items),
            InvoiceAction::Rejected(message) => {
                self.status = Some(StatusMessage::Error(message));
            }
            InvoiceAction::Submitting => {
                self.submitting = true;
                self.status = None;
            }
            InvoiceAction::Submitted => {
                self.items = vec![LineItem::default()];
                self.total = 0.0;
                self.submitting = false;
                self.status = Some(StatusMessage::Success(
                    "Invoice created successfully!".to_string(),
                ));
            }
            InvoiceAction::SubmitFailed(message) => {
                self.submitting = false;
                self.status = Some(StatusMessage::Error(message));
            }
        }
        self
    }
}

impl Reducible for InvoiceForm {
    type Action = InvoiceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// Points line `index` at the product named by `raw` (a select value). Unknown or
/// cleared selections drop the copied details. Other lines are untouched.
pub fn select_product(
    items: &[LineItem],
    index: usize,
    raw: &str,
    products: &[Product],
) -> Vec<LineItem> {
    let mut next = items.to_vec();
    if let Some(item) = next.get_mut(index) {
        let product_id = raw.trim().parse::<i64>().ok();
        item.product_id = product_id;
        item.details = product_id
            .and_then(|id| products.iter().find(|p| p.id == id))
            .map(ProductDetails::from);
    }
    next
}

pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer form of a quantity field; fractional input is truncated. Values that
/// do not fit an `i64` are rejected rather than clamped.
pub fn parse_quantity(raw: &str) -> Result<i64, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingValue { field: "quantity" });
    }
    parse_number(raw)
        .map(f64::trunc)
        .filter(|v| *v >= i64::MIN as f64 && *v < i64::MAX as f64)
        .map(|v| v as i64)
        .ok_or_else(|| ValidationError::NotANumber {
            field: "quantity",
            value: raw.trim().to_string(),
        })
}

/// Sum of every numeric quantity; blank or non-numeric entries are skipped.
pub fn total_quantity(items: &[LineItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| parse_number(&item.quantity))
        .sum()
}

/// Lines with a product and a numeric quantity, coerced for the wire.
pub fn build_invoice(user_id: i64, items: &[LineItem]) -> Result<InvoiceRequest, ValidationError> {
    let items: Vec<InvoiceItem> = items
        .iter()
        .filter_map(|item| {
            let product_id = item.product_id?;
            let quantity = parse_quantity(&item.quantity).ok()?;
            Some(InvoiceItem {
                product_id,
                quantity,
            })
        })
        .collect();

    if items.is_empty() {
        return Err(ValidationError::EmptyInvoice);
    }
    Ok(InvoiceRequest { user_id, items })
}

/// Validates, then sends. Nothing reaches the backend when no line qualifies.
pub async fn submit_invoice<B: InvoiceBackend>(
    backend: &B,
    user_id: i64,
    items: &[LineItem],
) -> Result<(), AppError> {
    let request = build_invoice(user_id, items)?;
    log::debug!("submitting invoice with {} item(s)", request.items.len());
    backend.create_invoice(&request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Basmati Rice".to_string(),
                category: Some("Grains".to_string()),
                inventory: Some(40),
            },
            Product {
                id: 2,
                name: "Toor Dal".to_string(),
                category: Some("Pulses".to_string()),
                inventory: None,
            },
        ]
    }

    fn line(product_id: Option<i64>, quantity: &str) -> LineItem {
        LineItem {
            product_id,
            quantity: quantity.to_string(),
            details: None,
        }
    }

    #[derive(Default)]
    struct RecordingBackend {
        sent: RefCell<Vec<InvoiceRequest>>,
        reject_with: Option<String>,
    }

    impl InvoiceBackend for RecordingBackend {
        async fn create_invoice(&self, request: &InvoiceRequest) -> Result<(), ApiError> {
            self.sent.borrow_mut().push(request.clone());
            match &self.reject_with {
                Some(message) => Err(ApiError::Rejected {
                    status: 400,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn selecting_a_product_copies_its_details() {
        let items = vec![LineItem::default()];
        let next = select_product(&items, 0, "1", &products());
        assert_eq!(next[0].product_id, Some(1));
        assert_eq!(
            next[0].details,
            Some(ProductDetails {
                name: "Basmati Rice".to_string(),
                category: "Grains".to_string(),
                available_quantity: 40,
            })
        );
    }

    #[test]
    fn missing_inventory_counts_as_zero() {
        let next = select_product(&[LineItem::default()], 0, "2", &products());
        assert_eq!(next[0].available_quantity(), "0");
        assert_eq!(next[0].category(), "Pulses");
    }

    #[rstest]
    #[case("")]
    #[case("99")]
    #[case("rice")]
    fn unknown_or_cleared_selection_resets_details(#[case] raw: &str) {
        let selected = select_product(&[LineItem::default()], 0, "1", &products());
        let next = select_product(&selected, 0, raw, &products());
        assert_eq!(next[0].details, None);
        assert_eq!(next[0].category(), "");
        assert_eq!(next[0].available_quantity(), "");
    }

    #[test]
    fn changing_one_line_leaves_siblings_alone() {
        let items = vec![
            select_product(&[LineItem::default()], 0, "2", &products()).remove(0),
            line(None, "3"),
            line(Some(1), "x"),
        ];
        let next = select_product(&items, 1, "1", &products());
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
        assert_eq!(next[1].product_id, Some(1));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let items = vec![line(Some(1), "2")];
        assert_eq!(select_product(&items, 5, "2", &products()), items);
    }

    #[test]
    fn total_skips_blank_and_non_numeric() {
        let items = vec![line(Some(1), "2"), line(None, ""), line(Some(2), "abc"), line(Some(2), "1.5")];
        assert_eq!(total_quantity(&items), 3.5);
    }

    #[test]
    fn build_invoice_keeps_only_complete_lines() {
        let items = vec![line(Some(1), "2"), line(None, "5"), line(Some(2), ""), line(Some(2), "3.9")];
        let request = build_invoice(7, &items).unwrap();
        assert_eq!(
            request,
            InvoiceRequest {
                user_id: 7,
                items: vec![
                    InvoiceItem { product_id: 1, quantity: 2 },
                    InvoiceItem { product_id: 2, quantity: 3 },
                ],
            }
        );
    }

    #[rstest]
    #[case("1e30")]
    #[case("-1e19")]
    #[case("9223372036854775808")]
    fn out_of_range_quantity_is_not_clamped(#[case] raw: &str) {
        assert_eq!(
            parse_quantity(raw),
            Err(ValidationError::NotANumber { field: "quantity", value: raw.to_string() })
        );
        assert_eq!(
            build_invoice(1, &[line(Some(1), raw)]),
            Err(ValidationError::EmptyInvoice)
        );
    }

    #[test]
    fn empty_invoice_is_rejected_without_a_call() {
        let backend = RecordingBackend::default();
        let result = block_on(submit_invoice(&backend, 1, &[line(None, "5")]));
        assert_eq!(result, Err(AppError::Validation(ValidationError::EmptyInvoice)));
        assert!(backend.sent.borrow().is_empty());
    }

    #[test]
    fn backend_rejection_is_passed_through() {
        let backend = RecordingBackend {
            reject_with: Some("Insufficient stock for product ID 1".to_string()),
            ..RecordingBackend::default()
        };
        let result = block_on(submit_invoice(&backend, 1, &[line(Some(1), "500")]));
        assert_eq!(
            result.map_err(|e| e.user_message()),
            Err("Insufficient stock for product ID 1".to_string())
        );
        assert_eq!(backend.sent.borrow().len(), 1);
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let form = InvoiceForm::default()
            .apply(InvoiceAction::ProductsLoaded(products()))
            .apply(InvoiceAction::SelectProduct { index: 0, raw: "1".to_string() })
            .apply(InvoiceAction::SetQuantity { index: 0, raw: "4".to_string() })
            .apply(InvoiceAction::AddLine)
            .apply(InvoiceAction::SetQuantity { index: 1, raw: "2".to_string() })
            .apply(InvoiceAction::CalculateTotal);
        assert_eq!(form.total, 6.0);
        assert_eq!(form.items.len(), 2);

        let done = form.apply(InvoiceAction::Submitting).apply(InvoiceAction::Submitted);
        assert_eq!(done.items, vec![LineItem::default()]);
        assert_eq!(done.total, 0.0);
        assert!(!done.submitting);
        assert_eq!(
            done.status,
            Some(StatusMessage::Success("Invoice created successfully!".to_string()))
        );
    }

    #[test]
    fn resubmitting_clears_the_previous_status() {
        let form = InvoiceForm::default()
            .apply(InvoiceAction::Submitting)
            .apply(InvoiceAction::Submitted)
            .apply(InvoiceAction::Submitting);
        assert!(form.submitting);
        assert_eq!(form.status, None);
    }

    #[test]
    fn failed_submission_keeps_lines() {
        let form = InvoiceForm::default()
            .apply(InvoiceAction::SetQuantity { index: 0, raw: "4".to_string() })
            .apply(InvoiceAction::Submitting)
            .apply(InvoiceAction::SubmitFailed("Error creating invoice.".to_string()));
        assert_eq!(form.items[0].quantity, "4");
        assert!(!form.submitting);
        assert_eq!(form.status.as_ref().map(|s| s.text()), Some("Error creating invoice."));
    }
}
