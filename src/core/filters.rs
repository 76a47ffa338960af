use crate::models::{Category, Destination};

/// Check whether a destination belongs to the category named by `label`
///
/// Labels compare case-insensitively; an unknown label matches nothing.
#[inline]
pub fn matches_category(destination: &Destination, label: &str) -> bool {
    Category::parse(label).map_or(false, |category| destination.category == category)
}

/// Filter a destination list down to one category label
pub fn filter_by_category<'a>(
    destinations: &'a [Destination],
    label: &str,
) -> Vec<&'a Destination> {
    destinations
        .iter()
        .filter(|d| matches_category(d, label))
        .collect()
}
