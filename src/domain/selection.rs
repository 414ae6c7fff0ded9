use super::amount::{Amount, DEFAULT_CUSTOM_AMOUNT};
use super::catalog::CatalogItem;
use crate::error::{CheckoutError, Result};
use std::collections::HashMap;

/// The items picked for the current order together with the custom-amount
/// drafts typed so far.
///
/// Drafts outlive deselection: unticking a custom item and ticking it again
/// brings back the last amount entered for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashMap<&'static str, Amount>,
    drafts: HashMap<&'static str, Amount>,
    total: Amount,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the item if absent, deselects it otherwise.
    pub fn toggle(&mut self, item: &'static CatalogItem) {
        if self.selected.remove(item.id).is_none() {
            let amount = if item.is_custom_amount {
                *self.drafts.entry(item.id).or_insert(DEFAULT_CUSTOM_AMOUNT)
            } else {
                Amount(item.unit_price)
            };
            self.selected.insert(item.id, amount);
        }
        self.recompute_total();
    }

    /// Records a custom amount; applies it to the selection if the item is
    /// currently selected.
    pub fn set_custom_amount(&mut self, item: &'static CatalogItem, amount: Amount) -> Result<()> {
        if !item.is_custom_amount {
            return Err(CheckoutError::NotCustomAmount(item.id));
        }
        self.drafts.insert(item.id, amount);
        if let Some(selected) = self.selected.get_mut(item.id) {
            *selected = amount;
        }
        self.recompute_total();
        Ok(())
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains_key(id)
    }

    pub fn amount_of(&self, id: &str) -> Option<Amount> {
        self.selected.get(id).copied()
    }

    pub fn draft_of(&self, id: &str) -> Option<Amount> {
        self.drafts.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Amount)> + '_ {
        self.selected.iter().map(|(id, amount)| (*id, *amount))
    }

    /// Drops every selection and draft.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.drafts.clear();
        self.total = Amount::ZERO;
    }

    fn recompute_total(&mut self) {
        self.total = self.selected.values().sum();
    }
}
