//! Add-shortage screen state

use std::sync::Arc;

use shared::models::{ShortageCreate, Unit};
use souq_client::ApiClient;

/// Feedback surfaced after a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

/// Add-shortage form state.
///
/// Quantity is kept as the raw input string and parsed on submit; invalid
/// input never reaches the network.
#[derive(Debug)]
pub struct AddShortageScreen {
    api: Arc<ApiClient>,
    pub product_name: String,
    pub quantity: String,
    pub unit: Unit,
    pub notes: String,
    feedback: Option<Feedback>,
    busy: bool,
}

impl AddShortageScreen {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            product_name: String::new(),
            quantity: String::new(),
            unit: Unit::default(),
            notes: String::new(),
            feedback: None,
            busy: false,
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Validate the form into a create payload without touching the network.
    fn validate(&self) -> Result<ShortageCreate, String> {
        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            return Err("product name is required".to_string());
        }

        let quantity: f64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "quantity must be a positive number".to_string())?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err("quantity must be a positive number".to_string());
        }

        let notes = self.notes.trim();
        Ok(ShortageCreate {
            product_name: product_name.to_string(),
            quantity,
            unit: self.unit,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    /// Submit the form.
    ///
    /// Success clears the fields and surfaces a success message; failure
    /// keeps the fields for retry and surfaces the failure text.
    pub async fn submit(&mut self) -> bool {
        self.feedback = None;

        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(message) => {
                self.feedback = Some(Feedback::Error(message));
                return false;
            }
        };

        self.busy = true;
        let result = self.api.create_shortage(&payload).await;
        self.busy = false;

        match result {
            Ok(created) => {
                self.product_name.clear();
                self.quantity.clear();
                self.notes.clear();
                self.feedback = Some(Feedback::Success(format!(
                    "shortage \"{}\" reported",
                    created.product_name
                )));
                true
            }
            Err(e) => {
                self.feedback = Some(Feedback::Error(e.message()));
                false
            }
        }
    }
}
