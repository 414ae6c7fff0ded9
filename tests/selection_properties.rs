use campus_pay::domain::amount::Amount;
use campus_pay::domain::catalog::{self, ServiceCategory};
use campus_pay::domain::selection::Selection;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

#[test]
fn test_total_matches_stored_values_for_random_sequences() {
    let mut rng = StdRng::seed_from_u64(190);

    for category in ServiceCategory::ALL {
        let items = catalog::items_for(category);
        let mut selection = Selection::new();
        let mut expected: HashMap<&str, u64> = HashMap::new();
        let mut drafts: HashMap<&str, u64> = HashMap::new();

        for _ in 0..2_000 {
            let item = &items[rng.gen_range(0..items.len())];
            if item.is_custom_amount && rng.gen_bool(0.3) {
                let amount = rng.gen_range(0..20_000);
                selection.set_custom_amount(item, Amount(amount)).unwrap();
                drafts.insert(item.id, amount);
                if let Some(value) = expected.get_mut(item.id) {
                    *value = amount;
                }
            } else {
                selection.toggle(item);
                if expected.remove(item.id).is_none() {
                    let value = if item.is_custom_amount {
                        *drafts.entry(item.id).or_insert(1_000)
                    } else {
                        item.unit_price
                    };
                    expected.insert(item.id, value);
                }
            }

            let stored: Amount = selection.iter().map(|(_, amount)| amount).sum();
            assert_eq!(selection.total(), stored);
            assert_eq!(selection.total(), Amount(expected.values().sum()));
            assert_eq!(selection.len(), expected.len());
        }
    }
}

#[test]
fn test_double_toggle_restores_selection_and_drafts() {
    let mut rng = StdRng::seed_from_u64(42);
    let items = catalog::items_for(ServiceCategory::Fees);

    let mut selection = Selection::new();
    for _ in 0..50 {
        selection.toggle(&items[rng.gen_range(0..items.len())]);
    }
    let custom = catalog::find(ServiceCategory::Fees, "custom-fee").unwrap();
    selection.set_custom_amount(custom, Amount(4_321)).unwrap();

    for item in items {
        let before = selection.clone();
        selection.toggle(item);
        selection.toggle(item);
        assert_eq!(selection.total(), before.total(), "{}", item.id);
        assert_eq!(selection.amount_of(item.id), before.amount_of(item.id));
        assert_eq!(selection.draft_of(custom.id), Some(Amount(4_321)));
    }
}

#[test]
fn test_draft_for_unselected_item_is_used_on_selection() {
    let custom = catalog::find(ServiceCategory::Cafeteria, "custom-meal").unwrap();
    let mut selection = Selection::new();

    selection.set_custom_amount(custom, Amount(300)).unwrap();
    selection.set_custom_amount(custom, Amount(650)).unwrap();
    assert_eq!(selection.total(), Amount::ZERO);

    selection.toggle(custom);
    assert_eq!(selection.amount_of("custom-meal"), Some(Amount(650)));
    assert_eq!(selection.total(), Amount(650));
}

#[test]
fn test_breakfast_and_lunch() {
    let breakfast = catalog::find(ServiceCategory::Cafeteria, "breakfast").unwrap();
    let lunch = catalog::find(ServiceCategory::Cafeteria, "lunch").unwrap();
    let mut selection = Selection::new();

    selection.toggle(breakfast);
    selection.toggle(lunch);
    assert_eq!(selection.total(), Amount(400));

    selection.toggle(lunch);
    assert_eq!(selection.total(), Amount(150));
}
