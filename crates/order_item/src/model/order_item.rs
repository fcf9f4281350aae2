use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: Option<i32>,
    pub order_id: i32,
    pub order_seq_id: i32,
    pub good_id: i32,
    pub good_price_id: i32,
    pub part_number: String,
    pub name: String,
    pub price: f64,
    pub price_no_discount: f64,
    pub site_id: i32,
    pub customer_id: i32,
    pub quantity_init: i32,
    pub quantity_final: i32,
    pub delivery_id: i32,
    pub status_id: i32,
    pub replacement_good_id: Option<i32>,
    pub calc_weight: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Field overrides applied on top of an existing [`OrderItem`].
///
/// `None` leaves a field untouched. Nullable columns take a nested option so
/// an override can also clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItemChanges {
    pub price: Option<f64>,
    pub status_id: Option<i32>,
    pub quantity_final: Option<i32>,
    pub replacement_good_id: Option<Option<i32>>,
    pub calc_weight: Option<Option<f64>>,
}

impl OrderItem {
    pub fn with_changes(&self, changes: OrderItemChanges) -> OrderItem {
        let OrderItemChanges {
            price,
            status_id,
            quantity_final,
            replacement_good_id,
            calc_weight,
        } = changes;

        OrderItem {
            price: price.unwrap_or(self.price),
            status_id: status_id.unwrap_or(self.status_id),
            quantity_final: quantity_final.unwrap_or(self.quantity_final),
            replacement_good_id: replacement_good_id.unwrap_or(self.replacement_good_id),
            calc_weight: calc_weight.unwrap_or(self.calc_weight),
            ..self.clone()
        }
    }
}
