pub mod api;
pub mod catalog;
pub mod order_item;
pub mod pricing;
