//! Shortage Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed unit vocabulary for shortage quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Kilogram,
    Liter,
    Piece,
    Carton,
    Box,
    Bag,
    Pack,
    Dozen,
}

impl Unit {
    /// All units, in form-selection order.
    pub const ALL: [Unit; 8] = [
        Unit::Kilogram,
        Unit::Liter,
        Unit::Piece,
        Unit::Carton,
        Unit::Box,
        Unit::Bag,
        Unit::Pack,
        Unit::Dozen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kilogram",
            Unit::Liter => "liter",
            Unit::Piece => "piece",
            Unit::Carton => "carton",
            Unit::Box => "box",
            Unit::Bag => "bag",
            Unit::Pack => "pack",
            Unit::Dozen => "dozen",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reported missing product a store wants other stores to supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shortage {
    pub id: i64,
    pub product_name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub notes: Option<String>,
    /// Owning store. The owner never appears as a responder to its own record.
    pub store_id: i64,
    pub store_name: String,
    pub timestamp: DateTime<Utc>,
    pub is_fulfilled: bool,
    /// Server-assigned ordering, preserved as received.
    #[serde(default)]
    pub responses: Vec<ShortageResponse>,
}

/// A reply from one store to another's shortage, offering to help.
///
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortageResponse {
    pub id: i64,
    pub store_id: i64,
    pub store_name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Create shortage payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortageCreate {
    pub product_name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub notes: Option<String>,
}
