use partsbin::{
    component::ComponentDraft,
    inventory::{Inventory, InventoryError},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn draft(id: i32, name: &str, price: Decimal, quantity: u32) -> ComponentDraft {
    ComponentDraft {
        id,
        name: name.to_string(),
        price,
        quantity,
        description: format!("{name} stock"),
    }
}

fn drain_ids(inv: &Inventory) -> Vec<i32> {
    let mut queue = inv.ordered_queue();
    let mut ids = Vec::new();
    while let Some(rec) = queue.dequeue() {
        ids.push(rec.id);
    }
    ids
}

#[test]
fn resistor_capacitor_walkthrough() {
    let mut inv = Inventory::new();
    inv.add(draft(1, "Resistor", dec!(0.50), 100)).unwrap();
    inv.add(draft(2, "Capacitor", dec!(1.20), 50)).unwrap();

    assert_eq!(inv.ordered_ids(), vec![2, 1]);
    assert_eq!(drain_ids(&inv), vec![1, 2]);
    assert_eq!(inv.ordered_ids(), vec![2, 1]);

    let removed = inv.remove_last().unwrap();
    assert_eq!(removed.id, 2);
    assert_eq!(inv.ordered_ids(), vec![1]);

    let removed = inv.remove_last().unwrap();
    assert_eq!(removed.id, 1);
    assert!(inv.is_empty());

    assert_eq!(inv.remove_last(), Err(InventoryError::EmptyStack));
}

#[test]
fn duplicate_id_keeps_original_record() {
    let mut inv = Inventory::new();
    inv.add(draft(5, "Transistor", dec!(0.35), 10)).unwrap();

    let err = inv.add(draft(5, "Inductor", dec!(0.80), 3)).unwrap_err();
    assert_eq!(err, InventoryError::DuplicateId(5));
    assert_eq!(err.to_string(), "Error: Component with ID 5 already exists.");

    assert_eq!(inv.len(), 1);
    assert_eq!(inv.get(5).map(|r| r.name.as_str()), Some("Transistor"));
    assert_eq!(inv.last_added(), Some(5));
}

#[test]
fn remove_last_on_fresh_inventory_is_noop() {
    let mut inv = Inventory::new();
    let err = inv.remove_last().unwrap_err();
    assert_eq!(err.to_string(), "Stack is empty. No component to remove.");
    assert!(inv.is_empty());
}

#[test]
fn id_can_be_reused_after_removal() {
    let mut inv = Inventory::new();
    inv.add(draft(3, "Fuse", dec!(0.25), 20)).unwrap();
    inv.remove_last().unwrap();
    inv.add(draft(3, "Relay", dec!(2.10), 4)).unwrap();

    assert_eq!(inv.get(3).map(|r| r.name.as_str()), Some("Relay"));
    assert_eq!(inv.len(), 1);
}

#[test]
fn stale_stack_entry_reports_not_found() {
    let mut inv = Inventory::new();
    inv.add(draft(1, "Resistor", dec!(0.50), 100)).unwrap();
    inv.add(draft(2, "Capacitor", dec!(1.20), 50)).unwrap();

    let (store, _) = inv.parts_mut();
    store.remove_record(2).unwrap();

    let err = inv.remove_last().unwrap_err();
    assert_eq!(err, InventoryError::RecordNotFound(2));
    assert_eq!(err.to_string(), "Error: Component not found in inventory!");

    assert_eq!(inv.ordered_ids(), vec![1]);
    assert_eq!(inv.remove_last().map(|r| r.id), Ok(1));
}
