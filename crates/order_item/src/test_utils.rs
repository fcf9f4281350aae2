//! In-memory collaborators for service tests.

use crate::{
    abstract_trait::{
        client::{
            CurrencyClientTrait, GoodAttributeClientTrait, GoodClientTrait, PricingClientTrait,
            SearchClientTrait,
        },
        order_item::repository::{
            OrderItemCommandRepositoryTrait, OrderItemQueryRepositoryTrait,
        },
    },
    domain::response::{
        catalog::{DetailGoodPriceData, GoodAttribute},
        pricing::DiscountedPrice,
    },
    model::{
        language::Language,
        order::{Order, ShippingAddress},
        order_item::OrderItem,
    },
    service::{OrderItemService, OrderItemServiceDeps},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::errors::{ClientError, RepositoryError};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

#[derive(Default)]
pub struct MockOrderItemRepository {
    items: Mutex<HashMap<i32, OrderItem>>,
    created: Mutex<Vec<OrderItem>>,
    updated: Mutex<Vec<OrderItem>>,
    lookups: AtomicUsize,
    fail_creates: bool,
}

impl MockOrderItemRepository {
    pub fn with_item(item: OrderItem) -> Self {
        let repo = Self::default();
        if let Some(id) = item.order_item_id {
            repo.items.lock().unwrap().insert(id, item);
        }
        repo
    }

    pub fn failing_creates() -> Self {
        Self {
            fail_creates: true,
            ..Default::default()
        }
    }

    pub fn created(&self) -> Vec<OrderItem> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<OrderItem> {
        self.updated.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for MockOrderItemRepository {
    async fn find_by_id(&self, order_item_id: i32) -> Result<Option<OrderItem>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.lock().unwrap().get(&order_item_id).cloned())
    }
}

#[async_trait]
impl OrderItemCommandRepositoryTrait for MockOrderItemRepository {
    async fn create_order_item(&self, item: &OrderItem) -> Result<OrderItem, RepositoryError> {
        if self.fail_creates {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        }

        let mut items = self.items.lock().unwrap();
        let id = items.keys().max().copied().unwrap_or(0) + 1;
        let stored = OrderItem {
            order_item_id: Some(id),
            ..item.clone()
        };
        items.insert(id, stored.clone());
        self.created.lock().unwrap().push(item.clone());
        Ok(stored)
    }

    async fn update_order_item(&self, item: &OrderItem) -> Result<OrderItem, RepositoryError> {
        let id = item
            .order_item_id
            .ok_or_else(|| RepositoryError::MissingId("no order_item_id".into()))?;
        self.items.lock().unwrap().insert(id, item.clone());
        self.updated.lock().unwrap().push(item.clone());
        Ok(item.clone())
    }
}

#[derive(Default)]
pub struct MockSearchClient {
    pub records: HashMap<i32, DetailGoodPriceData>,
    pub fail: bool,
}

#[async_trait]
impl SearchClientTrait for MockSearchClient {
    async fn get_detail_goods_prices_data(
        &self,
        good_price_ids: &[i32],
        _lang: Language,
    ) -> Result<HashMap<i32, DetailGoodPriceData>, ClientError> {
        if self.fail {
            return Err(ClientError::Unavailable("search is down".into()));
        }

        Ok(good_price_ids
            .iter()
            .filter_map(|id| self.records.get(id).map(|record| (*id, record.clone())))
            .collect())
    }
}

#[derive(Default)]
pub struct MockAttributeClient {
    pub attributes: Vec<GoodAttribute>,
    pub fail: bool,
}

#[async_trait]
impl GoodAttributeClientTrait for MockAttributeClient {
    async fn get_attributes(
        &self,
        _good_id: i32,
        _lang: Language,
    ) -> Result<Vec<GoodAttribute>, ClientError> {
        if self.fail {
            return Err(ClientError::Unavailable("attributes are down".into()));
        }

        Ok(self.attributes.clone())
    }
}

/// (good price ids, currency id, customer id, region id)
pub type PricingCall = (Vec<i32>, i32, i32, i32);

#[derive(Default)]
pub struct MockPricingClient {
    pub prices: HashMap<i32, DiscountedPrice>,
    pub fail: bool,
    calls: Mutex<Vec<PricingCall>>,
}

impl MockPricingClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<PricingCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PricingClientTrait for MockPricingClient {
    async fn get_goods_prices_with_discounts(
        &self,
        good_price_ids: &[i32],
        currency_id: i32,
        customer_id: i32,
        region_id: i32,
    ) -> Result<HashMap<i32, DiscountedPrice>, ClientError> {
        self.calls.lock().unwrap().push((
            good_price_ids.to_vec(),
            currency_id,
            customer_id,
            region_id,
        ));

        if self.fail {
            return Err(ClientError::Unavailable("pricing is down".into()));
        }

        Ok(self.prices.clone())
    }
}

pub struct MockGoodClient {
    pub manufacturer: String,
    pub fail: bool,
}

#[async_trait]
impl GoodClientTrait for MockGoodClient {
    async fn get_good_manufacturer_name_by_id(
        &self,
        good_id: i32,
    ) -> Result<String, ClientError> {
        if self.fail {
            return Err(ClientError::NotFound(format!("good {good_id}")));
        }

        Ok(self.manufacturer.clone())
    }
}

/// Rounds to two decimals and remembers every call.
#[derive(Default)]
pub struct MockCurrencyClient {
    pub fail: bool,
    calls: Mutex<Vec<(f64, i32)>>,
}

impl MockCurrencyClient {
    pub fn calls(&self) -> Vec<(f64, i32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CurrencyClientTrait for MockCurrencyClient {
    async fn round_currency(&self, amount: f64, currency_id: i32) -> Result<f64, ClientError> {
        self.calls.lock().unwrap().push((amount, currency_id));

        if self.fail {
            return Err(ClientError::InvalidResponse("no rounding rule".into()));
        }

        Ok((amount * 100.0).round() / 100.0)
    }
}

pub struct Harness {
    pub repo: Arc<MockOrderItemRepository>,
    pub pricing: Arc<MockPricingClient>,
    pub currency: Arc<MockCurrencyClient>,
    pub service: OrderItemService,
}

pub struct HarnessBuilder {
    repo: MockOrderItemRepository,
    search: MockSearchClient,
    attributes: MockAttributeClient,
    pricing: MockPricingClient,
    good: MockGoodClient,
    currency: MockCurrencyClient,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        let mut search = MockSearchClient::default();
        search.records.insert(42, catalog_record("Red", ""));

        let mut pricing = MockPricingClient::default();
        pricing.prices.insert(
            42,
            DiscountedPrice {
                price: 90.0,
                price_without_discount: 100.0,
            },
        );

        Self {
            repo: MockOrderItemRepository::default(),
            search,
            attributes: MockAttributeClient::default(),
            pricing,
            good: MockGoodClient {
                manufacturer: "Acme".into(),
                fail: false,
            },
            currency: MockCurrencyClient::default(),
        }
    }
}

impl HarnessBuilder {
    pub fn repo(mut self, repo: MockOrderItemRepository) -> Self {
        self.repo = repo;
        self
    }

    pub fn catalog(mut self, good_price_id: i32, record: Option<DetailGoodPriceData>) -> Self {
        match record {
            Some(record) => {
                self.search.records.insert(good_price_id, record);
            }
            None => {
                self.search.records.remove(&good_price_id);
            }
        }
        self
    }

    pub fn attributes(mut self, attributes: Vec<GoodAttribute>) -> Self {
        self.attributes.attributes = attributes;
        self
    }

    pub fn pricing(mut self, pricing: MockPricingClient) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.search.fail = true;
        self
    }

    pub fn failing_attributes(mut self) -> Self {
        self.attributes.fail = true;
        self
    }

    pub fn failing_manufacturer(mut self) -> Self {
        self.good.fail = true;
        self
    }

    pub fn failing_currency(mut self) -> Self {
        self.currency.fail = true;
        self
    }

    pub fn build(self) -> Harness {
        let repo = Arc::new(self.repo);
        let pricing = Arc::new(self.pricing);
        let currency = Arc::new(self.currency);

        let deps = OrderItemServiceDeps {
            query: repo.clone(),
            command: repo.clone(),
            search_client: Arc::new(self.search),
            attribute_client: Arc::new(self.attributes),
            pricing_client: pricing.clone(),
            good_client: Arc::new(self.good),
            currency_client: currency.clone(),
        };

        let mut registry = Registry::default();
        let service = OrderItemService::new(deps, &mut registry).expect("service");

        Harness {
            repo,
            pricing,
            currency,
            service,
        }
    }
}

pub fn catalog_record(name_en: &str, name_ru: &str) -> DetailGoodPriceData {
    DetailGoodPriceData {
        good_id: 7,
        name_en: name_en.into(),
        name_ru: name_ru.into(),
        catalog_num: "X1".into(),
        site_id: 3,
        delivery_id: 4,
    }
}

pub fn order_without_address() -> Order {
    Order {
        id: 100,
        seq_id: 5,
        currency_id: 1,
        customer_id: 7,
        status_id: 2,
        shipping_address: None,
    }
}

pub fn order_with_region(region_id: i32) -> Order {
    Order {
        shipping_address: Some(ShippingAddress { region_id }),
        ..order_without_address()
    }
}
