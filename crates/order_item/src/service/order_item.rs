use crate::{
    abstract_trait::{
        client::{
            DynCurrencyClient, DynGoodAttributeClient, DynGoodClient, DynPricingClient,
            DynSearchClient,
        },
        order_item::{
            repository::{DynOrderItemCommandRepository, DynOrderItemQueryRepository},
            service::OrderItemServiceTrait,
        },
    },
    domain::{
        requests::order_item::{OrderItemToSave, OrderToSave},
        response::{api::ApiResponse, order_item::OrderItemResponse, pricing::DiscountedPrice},
    },
    model::{
        language::Language,
        order::Order,
        order_item::{OrderItem, OrderItemChanges},
    },
    utils::{compose_item_name, good_name},
};
use anyhow::Result;
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct OrderItemServiceDeps {
    pub query: DynOrderItemQueryRepository,
    pub command: DynOrderItemCommandRepository,
    pub search_client: DynSearchClient,
    pub attribute_client: DynGoodAttributeClient,
    pub pricing_client: DynPricingClient,
    pub good_client: DynGoodClient,
    pub currency_client: DynCurrencyClient,
}

#[derive(Clone)]
pub struct OrderItemService {
    query: DynOrderItemQueryRepository,
    command: DynOrderItemCommandRepository,
    search_client: DynSearchClient,
    attribute_client: DynGoodAttributeClient,
    pricing_client: DynPricingClient,
    good_client: DynGoodClient,
    currency_client: DynCurrencyClient,
    metrics: Metrics,
}

impl OrderItemService {
    pub fn new(deps: OrderItemServiceDeps, registry: &mut Registry) -> Result<Self> {
        let OrderItemServiceDeps {
            query,
            command,
            search_client,
            attribute_client,
            pricing_client,
            good_client,
            currency_client,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "order_item_service", "OrderItemService");

        Ok(Self {
            query,
            command,
            search_client,
            attribute_client,
            pricing_client,
            good_client,
            currency_client,
            metrics,
        })
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("order-item-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, false, message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let (status_str, status) = if is_success {
            ("SUCCESS", StatusUtils::Success)
        } else {
            ("ERROR", StatusUtils::Error)
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    /// Discount pricing for one good price, keyed by id or else the first entry.
    /// A pricing failure or an empty answer yields a zero price.
    async fn discounted_price(&self, order: &Order, good_price_id: i32) -> DiscountedPrice {
        let region_id = order.region_id();

        match self
            .pricing_client
            .get_goods_prices_with_discounts(
                &[good_price_id],
                order.currency_id,
                order.customer_id,
                region_id,
            )
            .await
        {
            Ok(mut prices) => match prices
                .remove(&good_price_id)
                .or_else(|| prices.into_values().next())
            {
                Some(price) => price,
                None => {
                    warn!(
                        "⚠️ No discounted price for good price {good_price_id} (currency {}, region {region_id}), using zero price",
                        order.currency_id
                    );
                    DiscountedPrice::default()
                }
            },
            Err(e) => {
                warn!(
                    "⚠️ Pricing unavailable for good price {good_price_id}, using zero price: {e}"
                );
                DiscountedPrice::default()
            }
        }
    }

    async fn derive_order_item(
        &self,
        order: &Order,
        good_price_id: i32,
        quantity: i32,
        lang: Language,
    ) -> Result<OrderItem, ServiceError> {
        let mut goods_data = self
            .search_client
            .get_detail_goods_prices_data(&[good_price_id], lang)
            .await?;

        let data = goods_data
            .remove(&good_price_id)
            .or_else(|| goods_data.into_values().next())
            .ok_or(ServiceError::GoodPriceNotFound(good_price_id))?;

        let good_id = data.good_id;
        let prices = self.discounted_price(order, good_price_id).await;

        let attributes = self.attribute_client.get_attributes(good_id, lang).await?;
        let title_en = good_name(&data.name_en, &attributes);
        let title_ru = good_name(&data.name_ru, &attributes);
        let title = if lang == Language::Russian && !title_ru.is_empty() {
            title_ru
        } else {
            title_en
        };

        let manufacturer = self
            .good_client
            .get_good_manufacturer_name_by_id(good_id)
            .await?;

        Ok(OrderItem {
            order_item_id: None,
            order_id: order.id,
            order_seq_id: order.seq_id,
            good_id,
            good_price_id,
            name: compose_item_name(&manufacturer, &data.catalog_num, &title),
            part_number: data.catalog_num,
            price: prices.price,
            price_no_discount: prices.price_without_discount,
            site_id: data.site_id,
            customer_id: order.customer_id,
            quantity_init: quantity,
            quantity_final: quantity,
            delivery_id: data.delivery_id,
            status_id: order.status_id,
            replacement_good_id: None,
            calc_weight: None,
            created_at: None,
            updated_at: None,
        })
    }
}

#[async_trait]
impl OrderItemServiceTrait for OrderItemService {
    async fn add_item_to_order(
        &self,
        order: &Order,
        good_price_id: i32,
        quantity: i32,
        price: f64,
        lang: Language,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        info!(
            "🛒 Adding good price {good_price_id} x{quantity} to order {} at {price}",
            order.id
        );

        let method = Method::Post;
        let tracing_ctx = self.start_tracing(
            "add_item_to_order",
            vec![
                KeyValue::new("order_id", order.id.to_string()),
                KeyValue::new("good_price_id", good_price_id.to_string()),
                KeyValue::new("quantity", quantity.to_string()),
            ],
        );

        let built = match self
            .derive_order_item(order, good_price_id, quantity, lang)
            .await
        {
            Ok(item) => item,
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to build order item: {e}"),
                );
                return Err(e);
            }
        };

        let item = built.with_changes(OrderItemChanges {
            price: Some(price),
            ..Default::default()
        });

        let created = match self.command.create_order_item(&item).await {
            Ok(created) => created,
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to create order item: {e:?}"),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        self.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Order item {:?} added to order {}", created.order_item_id, order.id),
        );

        Ok(ApiResponse::success(
            "Order item created successfully",
            OrderItemResponse::from(created),
        ))
    }

    async fn update_item(
        &self,
        item_to_save: &OrderItemToSave,
        // Order-level edits are not applied to items; kept until product confirms intent.
        _order_to_save: &OrderToSave,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        let method = Method::Put;
        let tracing_ctx = self.start_tracing(
            "update_item",
            vec![KeyValue::new(
                "order_item_id",
                item_to_save
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            )],
        );

        let Some(order_item_id) = item_to_save.id.filter(|id| *id > 0) else {
            self.complete_tracing_error(&tracing_ctx, method, "No ID is given");
            return Err(ServiceError::MissingId);
        };

        info!("🔄 Updating order item {order_item_id}");

        if let Err(e) = item_to_save.validate() {
            let err = ServiceError::from(e);
            self.complete_tracing_error(&tracing_ctx, method, &err.to_string());
            return Err(err);
        }

        let current = match self.query.find_by_id(order_item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Order item {order_item_id} was not found"),
                );
                return Err(ServiceError::OrderItemNotFound(order_item_id));
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to load order item {order_item_id}: {e:?}"),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let item = current.with_changes(OrderItemChanges {
            status_id: Some(item_to_save.status_id),
            price: Some(item_to_save.price),
            quantity_final: Some(item_to_save.quantity),
            replacement_good_id: Some(item_to_save.replacement_good_id),
            calc_weight: Some(item_to_save.weight_calc),
        });

        let updated = match self.command.update_order_item(&item).await {
            Ok(updated) => updated,
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to update order item {order_item_id}: {e:?}"),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        self.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Order item {order_item_id} updated"),
        );

        Ok(ApiResponse::success(
            "Order item updated successfully",
            OrderItemResponse::from(updated),
        ))
    }

    async fn build_order_item_by_good_price_id(
        &self,
        order: &Order,
        good_price_id: i32,
        quantity: i32,
        lang: Language,
    ) -> Result<OrderItem, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.start_tracing(
            "build_order_item_by_good_price_id",
            vec![
                KeyValue::new("order_id", order.id.to_string()),
                KeyValue::new("good_price_id", good_price_id.to_string()),
                KeyValue::new("lang", lang.as_str()),
            ],
        );

        let result = self
            .derive_order_item(order, good_price_id, quantity, lang)
            .await;

        match &result {
            Ok(item) => self.complete_tracing_success(
                &tracing_ctx,
                method,
                &format!("Built order item '{}'", item.name),
            ),
            Err(e) => self.complete_tracing_error(
                &tracing_ctx,
                method,
                &format!("Failed to build order item for good price {good_price_id}: {e}"),
            ),
        }

        result
    }

    async fn count_total_by_items_to_save(
        &self,
        items_to_save: &[OrderItemToSave],
        currency_id: i32,
    ) -> Result<f64, ServiceError> {
        if items_to_save.is_empty() {
            return Ok(0.0);
        }

        let method = Method::Get;
        let tracing_ctx = self.start_tracing(
            "count_total_by_items_to_save",
            vec![
                KeyValue::new("items", items_to_save.len().to_string()),
                KeyValue::new("currency_id", currency_id.to_string()),
            ],
        );

        let total: f64 = items_to_save
            .iter()
            .filter(|item| !item.is_canceled)
            .map(|item| item.price * f64::from(item.quantity))
            .sum();

        match self.currency_client.round_currency(total, currency_id).await {
            Ok(rounded) => {
                self.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    &format!("Order total {rounded} in currency {currency_id}"),
                );
                Ok(rounded)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to round total {total}: {e}"),
                );
                Err(ServiceError::Client(e))
            }
        }
    }
}
