use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct DiscountedPrice {
    pub price: f64,
    pub price_without_discount: f64,
}
