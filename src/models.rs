//! Frontend Models
//!
//! Data structures matching backend entities and response payloads.

use serde::Deserialize;

/// Shopping-list item (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub item_name: String,
    pub category: String,
    /// Remaining purchasable stock
    pub quantity: i32,
    pub price: Option<f64>,
}

/// One cart entry; its id is independent of the underlying item
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartLine {
    pub id: u32,
    pub item_name: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    pub fn display_name(&self) -> &str {
        self.item_name.as_deref().unwrap_or("Unknown Item")
    }

    /// Label shown in the cart list, e.g. `Pliers (x2)`
    pub fn label(&self) -> String {
        format!("{} (x{})", self.display_name(), self.quantity)
    }
}

/// Response to add/delete cart mutations.
///
/// `status` is present on add, absent on delete (delete is unconditional).
/// `item_id` + `stock` together patch one item's stock display.
#[derive(Debug, Clone, Deserialize)]
pub struct CartMutation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub item_id: Option<u32>,
    #[serde(default)]
    pub stock: Option<i32>,
}

impl CartMutation {
    /// A missing `status` field counts as success (delete responses omit it)
    pub fn is_success(&self) -> bool {
        self.status.as_deref().map_or(true, |s| s == "success")
    }

    pub fn stock_patch(&self) -> Option<(u32, i32)> {
        Some((self.item_id?, self.stock?))
    }
}

/// Response to GET /get-cart
#[derive(Debug, Clone, Deserialize)]
pub struct CartSnapshot {
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

/// Response to PUT /edit-item/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct EditStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl EditStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Shape of the edit-item payload, which differs between backend deployments:
/// one variant prepends a space to every field value, one includes a price
/// field. Values are always sent as strings, verbatim from the inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditContract {
    pub pad_fields: bool,
    pub include_price: bool,
}

impl Default for EditContract {
    fn default() -> Self {
        // Matches the deployed backend: padded fields, no price
        Self { pad_fields: true, include_price: false }
    }
}

impl EditContract {
    /// Format one field value for submission; the static display is patched
    /// with the same string on success
    pub fn format_field(&self, value: &str) -> String {
        if self.pad_fields {
            format!(" {}", value)
        } else {
            value.to_string()
        }
    }
}

/// Uncommitted field values while a row is in edit mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub item_name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

impl EditDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_name: item.item_name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
            price: item.price.map(|p| format!("{:.2}", p)).unwrap_or_default(),
        }
    }

    /// Build the PUT body per the contract. No validation or normalization:
    /// the backend owns both.
    pub fn to_payload(&self, contract: &EditContract) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "itemName": contract.format_field(&self.item_name),
            "category": contract.format_field(&self.category),
            "quantity": contract.format_field(&self.quantity),
        });
        if contract.include_price {
            payload["price"] = serde_json::Value::String(contract.format_field(&self.price));
        }
        payload
    }
}
