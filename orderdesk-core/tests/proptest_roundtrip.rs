use orderdesk_core::persist::{load, save};
use orderdesk_core::{FieldSpec, FieldValue, ItemKind, OrderPanel};
use proptest::prelude::*;
use tempfile::tempdir;

// One generated item: type index plus a list of (field index, step) edits
fn arb_items() -> impl Strategy<Value = Vec<(usize, Vec<(usize, i64)>)>> {
    prop::collection::vec(
        (
            0..ItemKind::ALL.len(),
            prop::collection::vec((0usize..5, -300i64..300), 0..8),
        ),
        0..12,
    )
}

fn build_panel(items: &[(usize, Vec<(usize, i64)>)]) -> OrderPanel {
    let mut panel = OrderPanel::new();
    for (index, (kind, edits)) in items.iter().enumerate() {
        panel.add(ItemKind::ALL[*kind]).unwrap();
        let form = panel.get_mut(index).unwrap();
        for (field, step) in edits {
            form.adjust(*field, *step);
        }
    }
    panel
}

proptest! {
    /// Property: whatever the controls can reach survives save then load
    #[test]
    fn prop_save_load_round_trip(items in arb_items()) {
        let panel = build_panel(&items);
        let order = panel.snapshot();

        let dir = tempdir().unwrap();
        let path = dir.path().join("order.yml");
        save(&path, &order).unwrap();
        let loaded = load(&path).unwrap();

        prop_assert_eq!(&loaded, &order);

        // Rebuilding the panel from the file shows the same values again
        let mut rebuilt = OrderPanel::new();
        rebuilt.repopulate(&loaded).unwrap();
        prop_assert_eq!(rebuilt.snapshot(), order);
    }

    /// Property: removal drops exactly the removed record, order otherwise kept
    #[test]
    fn prop_remove_preserves_order(items in arb_items(), victim in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let mut panel = build_panel(&items);
        let before = panel.snapshot();
        let victim = victim.index(before.len());

        let (id, _) = panel.get(victim).unwrap();
        panel.remove(id).unwrap();
        panel.add(ItemKind::Door).unwrap();

        let after = panel.snapshot();
        let mut expected = before.clone();
        expected.remove(victim);
        prop_assert_eq!(&after[..after.len() - 1], &expected[..]);
    }

    /// Property: integer fields stay within their bounds under any edit
    #[test]
    fn prop_quantity_in_bounds(items in arb_items()) {
        let panel = build_panel(&items);
        for record in panel.snapshot() {
            let qty = record.get("qty").and_then(FieldValue::as_integer).unwrap();
            prop_assert!((1..=255).contains(&qty));
        }
    }
}

#[test]
fn test_fresh_forms_collect_declared_defaults() {
    for kind in ItemKind::ALL {
        let mut panel = OrderPanel::new();
        panel.add(kind).unwrap();
        let record = &panel.snapshot()[0];

        for spec in kind.fields() {
            match *spec {
                FieldSpec::Choice { label, options, default } => {
                    // Only the last field with a given label survives collection
                    let last = kind
                        .fields()
                        .iter()
                        .rev()
                        .find(|f| f.label() == label)
                        .unwrap();
                    if std::ptr::eq(last, spec) {
                        let expected = default.unwrap_or(options[0]);
                        assert_eq!(
                            record.get(&label.to_lowercase()),
                            Some(&FieldValue::from(expected)),
                            "{} {}",
                            kind,
                            label
                        );
                    }
                }
                FieldSpec::Integer { min, default, .. } => {
                    assert_eq!(
                        record.get("qty"),
                        Some(&FieldValue::Integer(default.unwrap_or(min)))
                    );
                }
                FieldSpec::Flag { label, default } => {
                    if default {
                        assert_eq!(
                            record.get("type"),
                            Some(&FieldValue::from(label.to_lowercase()))
                        );
                    }
                }
            }
        }
    }
}
