use super::*;

#[test]
fn load_visits_every_role_once() {
    let mut seen = Vec::new();
    let registry = CursorRegistry::load(|role| {
        seen.push(role);
        format!("{role:?}")
    });
    assert_eq!(seen, CursorRole::ALL.to_vec());
    assert_eq!(registry.get(CursorRole::GrabHand).map(String::as_str), Some("GrabHand"));
}

#[test]
fn roles_are_distinct() {
    for (i, a) in CursorRole::ALL.iter().enumerate() {
        for (j, b) in CursorRole::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}
