use crate::{
    abstract_trait::order_item::repository::OrderItemQueryRepositoryTrait,
    model::order_item::OrderItem as OrderItemModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderItemQueryRepository {
    db: ConnectionPool,
}

impl OrderItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for OrderItemQueryRepository {
    async fn find_by_id(
        &self,
        order_item_id: i32,
    ) -> Result<Option<OrderItemModel>, RepositoryError> {
        info!("📦 Fetching order item {}", order_item_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let row = sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT
                order_item_id, order_id, order_seq_id, good_id, good_price_id,
                part_number, name, price, price_no_discount, site_id, customer_id,
                quantity_init, quantity_final, delivery_id, status_id,
                replacement_good_id, calc_weight, created_at, updated_at
            FROM order_items
            WHERE order_item_id = $1
            "#,
        )
        .bind(order_item_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order item {}: {:?}", order_item_id, e);
            RepositoryError::from(e)
        })?;

        Ok(row)
    }
}
