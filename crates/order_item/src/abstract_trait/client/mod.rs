mod catalog;
mod currency;
mod pricing;

pub use self::catalog::{
    DynGoodAttributeClient, DynGoodClient, DynSearchClient, GoodAttributeClientTrait,
    GoodClientTrait, SearchClientTrait,
};
pub use self::currency::{CurrencyClientTrait, DynCurrencyClient};
pub use self::pricing::{DynPricingClient, PricingClientTrait};
