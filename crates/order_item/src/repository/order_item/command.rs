use crate::{
    abstract_trait::order_item::repository::OrderItemCommandRepositoryTrait,
    model::order_item::OrderItem as OrderItemModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderItemCommandRepository {
    db: ConnectionPool,
}

impl OrderItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemCommandRepositoryTrait for OrderItemCommandRepository {
    async fn create_order_item(
        &self,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderItemModel>(
            r#"
            INSERT INTO order_items (
                order_id, order_seq_id, good_id, good_price_id, part_number, name,
                price, price_no_discount, site_id, customer_id, quantity_init,
                quantity_final, delivery_id, status_id, replacement_good_id, calc_weight,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    current_timestamp, current_timestamp)
            RETURNING
                order_item_id, order_id, order_seq_id, good_id, good_price_id,
                part_number, name, price, price_no_discount, site_id, customer_id,
                quantity_init, quantity_final, delivery_id, status_id,
                replacement_good_id, calc_weight, created_at, updated_at
            "#,
        )
        .bind(item.order_id)
        .bind(item.order_seq_id)
        .bind(item.good_id)
        .bind(item.good_price_id)
        .bind(&item.part_number)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.price_no_discount)
        .bind(item.site_id)
        .bind(item.customer_id)
        .bind(item.quantity_init)
        .bind(item.quantity_final)
        .bind(item.delivery_id)
        .bind(item.status_id)
        .bind(item.replacement_good_id)
        .bind(item.calc_weight)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order item for order {}: {:?}",
                item.order_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order item {:?} for order {}",
            result.order_item_id, result.order_id
        );
        Ok(result)
    }

    async fn update_order_item(
        &self,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError> {
        let order_item_id = item.order_item_id.ok_or_else(|| {
            RepositoryError::MissingId(format!(
                "order item for order {} has no order_item_id",
                item.order_id
            ))
        })?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderItemModel>(
            r#"
            UPDATE order_items
            SET status_id           = $2,
                price               = $3,
                quantity_final      = $4,
                replacement_good_id = $5,
                calc_weight         = $6,
                name                = $7,
                price_no_discount   = $8,
                updated_at          = current_timestamp
            WHERE order_item_id = $1
            RETURNING
                order_item_id, order_id, order_seq_id, good_id, good_price_id,
                part_number, name, price, price_no_discount, site_id, customer_id,
                quantity_init, quantity_final, delivery_id, status_id,
                replacement_good_id, calc_weight, created_at, updated_at
            "#,
        )
        .bind(order_item_id)
        .bind(item.status_id)
        .bind(item.price)
        .bind(item.quantity_final)
        .bind(item.replacement_good_id)
        .bind(item.calc_weight)
        .bind(&item.name)
        .bind(item.price_no_discount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order item {}: {:?}", order_item_id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated order item {}", order_item_id);
        Ok(result)
    }
}
