pub mod client;
pub mod order_item;
