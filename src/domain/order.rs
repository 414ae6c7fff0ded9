use super::amount::Amount;
use super::catalog::{self, CatalogItem, ServiceCategory};
use super::selection::Selection;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct OrderLine {
    pub item: &'static CatalogItem,
    pub amount: Amount,
}

/// Read-only recap of what is being paid for.
///
/// Derived from the session on demand and never stored.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Order {
    pub category: ServiceCategory,
    pub lines: Vec<OrderLine>,
    pub description: String,
    pub total: Amount,
}

impl Order {
    /// Builds the recap with lines in catalog display order.
    pub fn derive(category: ServiceCategory, selection: &Selection, description: &str) -> Self {
        let lines = catalog::items_for(category)
            .iter()
            .filter_map(|item| {
                selection
                    .amount_of(item.id)
                    .map(|amount| OrderLine { item, amount })
            })
            .collect();

        Self {
            category,
            lines,
            description: description.trim().to_string(),
            total: selection.total(),
        }
    }
}
