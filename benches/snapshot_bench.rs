//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cursor_keeper::*;

fn benchmark_save_restore(c: &mut Criterion) {
    let mut store = SnapshotStore::new();
    let mut map: CursorHash<u64, u64> = (0..1_000).map(|i| (i, i)).collect();
    map.next_entry();

    c.bench_function("save_restore", |b| {
        b.iter(|| {
            let handle = store.save(Some(&mut map));
            store.restore(Some(&mut map), black_box(handle));
        });
    });
}

fn benchmark_safe_keys(c: &mut Criterion) {
    let mut store = SnapshotStore::new();
    let mut map: CursorHash<u64, u64> = (0..1_000).map(|i| (i, i)).collect();

    c.bench_function("safe_keys_n=1000", |b| {
        b.iter(|| black_box(safe_keys(&mut store, Some(&mut map))));
    });
    c.bench_function("safe_copy_n=1000", |b| {
        b.iter(|| black_box(safe_copy(&mut store, Some(&mut map))));
    });
}

criterion_group!(benches, benchmark_save_restore, benchmark_safe_keys);
criterion_main!(benches);
