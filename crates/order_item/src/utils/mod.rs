mod good_name;

pub use self::good_name::{compose_item_name, good_name};
