use serde::{Deserialize, Serialize};

/// Catalog search record for one good price.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DetailGoodPriceData {
    pub good_id: i32,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ru: String,
    pub catalog_num: String,
    pub site_id: i32,
    pub delivery_id: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GoodAttribute {
    pub name: String,
    pub value: String,
}
