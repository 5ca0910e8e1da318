use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use partsbin::{component::ComponentDraft, inventory::Inventory};
use rust_decimal::Decimal;

fn draft(id: i32) -> ComponentDraft {
    ComponentDraft {
        id,
        name: format!("part-{id}"),
        price: Decimal::new(i64::from(id) * 7, 2),
        quantity: 10,
        description: String::new(),
    }
}

fn filled(n: i32) -> Inventory {
    let mut inv = Inventory::new();
    for id in 0..n {
        inv.add(draft(id)).expect("add");
    }
    inv
}

fn bench_adds(c: &mut Criterion) {
    c.bench_function("inventory_add_2k", |b| {
        b.iter(|| filled(2_000));
    });
}

fn bench_remove_last(c: &mut Criterion) {
    c.bench_function("inventory_remove_last_2k", |b| {
        b.iter_with_setup(
            || filled(2_000),
            |mut inv| {
                while inv.remove_last().is_ok() {}
            },
        );
    });
}

fn bench_ordered_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_queue_drain");
    for size in [100, 1_000, 10_000] {
        let inv = filled(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &inv, |b, inv| {
            b.iter(|| {
                let mut queue = inv.ordered_queue();
                let mut n = 0usize;
                while queue.dequeue().is_some() {
                    n += 1;
                }
                n
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adds, bench_remove_last, bench_ordered_walk);
criterion_main!(benches);
