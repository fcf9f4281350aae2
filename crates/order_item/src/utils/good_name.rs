use crate::domain::response::catalog::GoodAttribute;

/// Localized good title: the base name followed by non-empty attribute values,
/// e.g. `"T-shirt (red, XL)"`. A blank base name yields an empty title.
pub fn good_name(base_name: &str, attributes: &[GoodAttribute]) -> String {
    let base_name = base_name.trim();
    if base_name.is_empty() {
        return String::new();
    }

    let values: Vec<&str> = attributes
        .iter()
        .map(|attribute| attribute.value.trim())
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        base_name.to_string()
    } else {
        format!("{base_name} ({})", values.join(", "))
    }
}

/// `"<manufacturer> <part number>"` with `" - <title>"` appended when the title is set.
pub fn compose_item_name(manufacturer: &str, part_number: &str, title: &str) -> String {
    if title.is_empty() {
        format!("{manufacturer} {part_number}")
    } else {
        format!("{manufacturer} {part_number} - {title}")
    }
}
