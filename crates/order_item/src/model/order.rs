use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub region_id: i32,
}

/// Order context an item is attached to. Read-only for this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub seq_id: i32,
    pub currency_id: i32,
    pub customer_id: i32,
    pub status_id: i32,
    pub shipping_address: Option<ShippingAddress>,
}

impl Order {
    /// Shipping region used for discount lookups, `0` when the order has no address.
    pub fn region_id(&self) -> i32 {
        self.shipping_address
            .as_ref()
            .map(|address| address.region_id)
            .unwrap_or(0)
    }
}
