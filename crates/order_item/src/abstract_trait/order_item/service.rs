use crate::{
    domain::{
        requests::order_item::{OrderItemToSave, OrderToSave},
        response::{api::ApiResponse, order_item::OrderItemResponse},
    },
    model::{language::Language, order::Order, order_item::OrderItem},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderItemService = Arc<dyn OrderItemServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemServiceTrait {
    async fn add_item_to_order(
        &self,
        order: &Order,
        good_price_id: i32,
        quantity: i32,
        price: f64,
        lang: Language,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;

    async fn update_item(
        &self,
        item_to_save: &OrderItemToSave,
        order_to_save: &OrderToSave,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;

    /// Derives a fresh, unpersisted item from catalog, pricing and attribute data.
    async fn build_order_item_by_good_price_id(
        &self,
        order: &Order,
        good_price_id: i32,
        quantity: i32,
        lang: Language,
    ) -> Result<OrderItem, ServiceError>;

    async fn count_total_by_items_to_save(
        &self,
        items_to_save: &[OrderItemToSave],
        currency_id: i32,
    ) -> Result<f64, ServiceError>;
}
