use crate::domain::response::pricing::DiscountedPrice;
use async_trait::async_trait;
use shared::errors::ClientError;
use std::{collections::HashMap, sync::Arc};

pub type DynPricingClient = Arc<dyn PricingClientTrait + Send + Sync>;

#[async_trait]
pub trait PricingClientTrait {
    /// Discounted prices keyed by good price id.
    async fn get_goods_prices_with_discounts(
        &self,
        good_price_ids: &[i32],
        currency_id: i32,
        customer_id: i32,
        region_id: i32,
    ) -> Result<HashMap<i32, DiscountedPrice>, ClientError>;
}
