use crate::{
    domain::response::catalog::{DetailGoodPriceData, GoodAttribute},
    model::language::Language,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::{collections::HashMap, sync::Arc};

pub type DynSearchClient = Arc<dyn SearchClientTrait + Send + Sync>;
pub type DynGoodAttributeClient = Arc<dyn GoodAttributeClientTrait + Send + Sync>;
pub type DynGoodClient = Arc<dyn GoodClientTrait + Send + Sync>;

#[async_trait]
pub trait SearchClientTrait {
    /// Detailed catalog records keyed by good price id.
    async fn get_detail_goods_prices_data(
        &self,
        good_price_ids: &[i32],
        lang: Language,
    ) -> Result<HashMap<i32, DetailGoodPriceData>, ClientError>;
}

#[async_trait]
pub trait GoodAttributeClientTrait {
    async fn get_attributes(
        &self,
        good_id: i32,
        lang: Language,
    ) -> Result<Vec<GoodAttribute>, ClientError>;
}

#[async_trait]
pub trait GoodClientTrait {
    async fn get_good_manufacturer_name_by_id(&self, good_id: i32)
    -> Result<String, ClientError>;
}
