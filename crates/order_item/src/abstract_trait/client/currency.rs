use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynCurrencyClient = Arc<dyn CurrencyClientTrait + Send + Sync>;

#[async_trait]
pub trait CurrencyClientTrait {
    async fn round_currency(&self, amount: f64, currency_id: i32) -> Result<f64, ClientError>;
}
