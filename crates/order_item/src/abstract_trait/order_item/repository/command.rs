use crate::model::order_item::OrderItem as OrderItemModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderItemCommandRepository = Arc<dyn OrderItemCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemCommandRepositoryTrait {
    async fn create_order_item(
        &self,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError>;

    async fn update_order_item(
        &self,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError>;
}
