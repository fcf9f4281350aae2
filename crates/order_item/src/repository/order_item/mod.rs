pub mod command;
pub mod query;

pub use self::command::OrderItemCommandRepository;
pub use self::query::OrderItemQueryRepository;
