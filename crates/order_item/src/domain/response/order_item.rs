use crate::model::order_item::OrderItem as OrderItemModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItemResponse {
    pub id: Option<i32>,
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
    pub delivery_id: i32,
    pub quantity_init: i32,
    pub quantity_final: i32,
    pub status_id: i32,
    pub replacement_good_id: Option<i32>,
    pub calc_weight: Option<f64>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

// model to response
impl From<OrderItemModel> for OrderItemResponse {
    fn from(value: OrderItemModel) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            order_id: value.order_id,
            order_seq_id: value.order_seq_id,
            good_id: value.good_id,
            good_price_id: value.good_price_id,
            part_number: value.part_number,
            name: value.name,
            price: value.price,
            price_no_discount: value.price_no_discount,
            site_id: value.site_id,
            customer_id: value.customer_id,
            delivery_id: value.delivery_id,
            quantity_init: value.quantity_init,
            quantity_final: value.quantity_final,
            status_id: value.status_id,
            replacement_good_id: value.replacement_good_id,
            calc_weight: value.calc_weight,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
