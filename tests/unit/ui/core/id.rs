use super::*;

#[test]
fn element_ids_follow_names() {
    assert_eq!(element_id("ok"), element_id("ok"));
    assert_ne!(element_id("ok"), element_id("cancel"));
    assert_ne!(element_id(""), element_id("ok"));
}

#[test]
fn element_ids_are_stable_across_runs() {
    // FNV-1a of b"element\xff".
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in b"element\xff" {
        h = (h ^ u64::from(b)).wrapping_mul(0x100_0000_01b3);
    }
    assert_eq!(element_id(""), Id::raw(h));
}
