use crate::{
    abstract_trait::{
        client::{
            DynCurrencyClient, DynGoodAttributeClient, DynGoodClient, DynPricingClient,
            DynSearchClient,
        },
        order_item::service::DynOrderItemService,
    },
    repository::order_item::{OrderItemCommandRepository, OrderItemQueryRepository},
    service::{OrderItemService, OrderItemServiceDeps},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Upstream services the order item service depends on.
#[derive(Clone)]
pub struct Collaborators {
    pub search: DynSearchClient,
    pub attributes: DynGoodAttributeClient,
    pub pricing: DynPricingClient,
    pub goods: DynGoodClient,
    pub currency: DynCurrencyClient,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_item: DynOrderItemService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_item", &"OrderItemService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub collaborators: Collaborators,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            collaborators,
        } = deps;

        let query = Arc::new(OrderItemQueryRepository::new(pool.clone()));
        let command = Arc::new(OrderItemCommandRepository::new(pool));

        let service_deps = OrderItemServiceDeps {
            query,
            command,
            search_client: collaborators.search,
            attribute_client: collaborators.attributes,
            pricing_client: collaborators.pricing,
            good_client: collaborators.goods,
            currency_client: collaborators.currency,
        };

        let order_item = Arc::new(
            OrderItemService::new(service_deps, registry)
                .context("failed initialize order item service")?,
        ) as DynOrderItemService;

        Ok(Self { order_item })
    }
}
