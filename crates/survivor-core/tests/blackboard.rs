use survivor_core::{BbKey, Blackboard, Vec2};

const TARGET: BbKey<Vec2> = BbKey::new(1, "target");
const LABEL: BbKey<String> = BbKey::new(2, "label");
const FLAG: BbKey<bool> = BbKey::new(3, "flag");

#[test]
fn blackboard_set_get_remove_roundtrip() {
    let mut bb = Blackboard::new();
    assert!(!bb.contains(TARGET));
    assert!(bb.is_empty());

    bb.set(TARGET, Vec2::new(1.0, 2.0));
    bb.set(LABEL, "house".to_string());

    assert_eq!(bb.get_copied(TARGET), Some(Vec2::new(1.0, 2.0)));
    assert_eq!(bb.get(LABEL).map(|s| s.as_str()), Some("house"));
    assert_eq!(bb.len(), 2);

    assert_eq!(bb.remove(TARGET), Some(Vec2::new(1.0, 2.0)));
    assert_eq!(bb.get(TARGET), None);
}

#[test]
fn later_writes_replace_earlier_ones() {
    let mut bb = Blackboard::new();
    bb.set(FLAG, false);
    if let Some(flag) = bb.get_mut(FLAG) {
        *flag = true;
    }
    assert_eq!(bb.get_copied(FLAG), Some(true));

    bb.set(FLAG, false);
    assert_eq!(bb.get_copied(FLAG), Some(false));

    bb.clear();
    assert!(!bb.contains(FLAG));
}

#[test]
#[should_panic(expected = "blackboard type mismatch for key 1:flag")]
fn blackboard_type_mismatch_panics() {
    let mut bb = Blackboard::new();
    bb.set(BbKey::<u32>::new(1, "count"), 1u32);
    let _ = bb.get(BbKey::<bool>::new(1, "flag"));
}
