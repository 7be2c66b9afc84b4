#![allow(dead_code)]

use std::sync::Once;

use cursor_keeper::{CursorHash, CursorMap};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route store diagnostics to the test harness; filter with `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn abc() -> CursorHash<String, i32> {
    [("a", 1), ("b", 2), ("c", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Remaining entries of a cursor walk, stopping at the end marker
pub fn drain<M: CursorMap>(map: &mut M) -> Vec<(M::Key, M::Value)> {
    std::iter::from_fn(|| map.next_entry()).collect()
}
