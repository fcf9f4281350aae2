use serde::{Deserialize, Serialize};
use validator::Validate;

/// Edits for one line item coming from the order editor.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default, PartialEq)]
pub struct OrderItemToSave {
    pub id: Option<i32>,

    #[serde(rename = "status_id")]
    pub status_id: i32,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = 0))]
    pub quantity: i32,

    #[serde(rename = "replacement_good_id")]
    pub replacement_good_id: Option<i32>,

    #[serde(rename = "weight_calc")]
    pub weight_calc: Option<f64>,

    #[serde(rename = "is_canceled", default)]
    pub is_canceled: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default, PartialEq)]
pub struct OrderToSave {
    pub id: Option<i32>,

    #[serde(rename = "currency_id")]
    pub currency_id: i32,

    #[serde(rename = "status_id")]
    pub status_id: i32,

    #[validate(nested)]
    pub items: Vec<OrderItemToSave>,
}
