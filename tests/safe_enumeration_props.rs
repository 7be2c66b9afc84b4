use proptest::prelude::*;
use cursor_keeper::{safe_copy, safe_keys, safe_values, CursorHash, CursorMap, SnapshotStore};

#[derive(Debug, Clone, Copy)]
enum Op {
    Step,
    Keys,
    Values,
    Copy,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Step), Just(Op::Keys), Just(Op::Values), Just(Op::Copy)]
}

fn build(entries: &[(u16, u32)]) -> CursorHash<u16, u32> {
    entries.iter().copied().collect()
}

proptest! {
    #[test]
    fn safe_calls_are_invisible_to_the_walk(
        entries in proptest::collection::vec((any::<u16>(), any::<u32>()), 0..64),
        ops in proptest::collection::vec(op(), 0..128),
    ) {
        let mut store = SnapshotStore::new();
        let mut observed = build(&entries);
        let mut reference = observed.clone();

        for op in ops {
            match op {
                Op::Step => prop_assert_eq!(observed.next_entry(), reference.next_entry()),
                Op::Keys => { safe_keys(&mut store, Some(&mut observed)); }
                Op::Values => { safe_values(&mut store, Some(&mut observed)); }
                Op::Copy => { safe_copy(&mut store, Some(&mut observed)); }
            }
            prop_assert_eq!(observed.cursor(), reference.cursor());
        }
        prop_assert_eq!(store.outstanding(), 0);
    }

    #[test]
    fn safe_results_agree_with_native_enumeration(
        entries in proptest::collection::vec((any::<u16>(), any::<u32>()), 0..64),
        steps in 0usize..16,
    ) {
        let mut store = SnapshotStore::new();
        let mut map = build(&entries);
        let native_keys = map.keys();
        let native_values = map.values();
        for _ in 0..steps {
            map.next_entry();
        }
        let cursor = map.cursor();

        let keys = safe_keys(&mut store, Some(&mut map));
        let values = safe_values(&mut store, Some(&mut map));
        let copy = safe_copy(&mut store, Some(&mut map));

        prop_assert_eq!(&keys, &native_keys);
        prop_assert_eq!(&values, &native_values);
        for (key, value) in keys.iter().zip(&values) {
            prop_assert_eq!(map.get(key), Some(value));
        }
        let zipped: Vec<_> = keys.into_iter().zip(values).collect();
        prop_assert_eq!(copy, zipped);

        // Repeating the calls gives the same answer and leaves the cursor alone.
        prop_assert_eq!(safe_keys(&mut store, Some(&mut map)), native_keys);
        prop_assert_eq!(map.cursor(), cursor);
    }
}
