pub mod order_item;
