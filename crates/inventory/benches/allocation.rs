use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use skumap_core::{Msku, WarehouseId};
use skumap_inventory::InventoryLedger;

fn seeded_ledger(warehouses: usize, per_warehouse: i64) -> InventoryLedger {
    let mut ledger = InventoryLedger::new();
    let item = Msku::parse("BENCH_ITEM").unwrap();
    for i in 0..warehouses {
        let wh = WarehouseId::parse(format!("WH-{i:03}")).unwrap();
        ledger.set_opening_stock(&wh, item.clone(), per_warehouse);
    }
    ledger
}

fn bench_single_warehouse_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_single");
    let item = Msku::parse("BENCH_ITEM").unwrap();

    for warehouses in [1usize, 8, 64] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(warehouses),
            &warehouses,
            |b, &warehouses| {
                b.iter_batched(
                    || seeded_ledger(warehouses, 1_000),
                    |mut ledger| {
                        // Always satisfiable from the first warehouse.
                        black_box(ledger.allocate(&item, 10).unwrap())
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_split_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_split");
    let item = Msku::parse("BENCH_ITEM").unwrap();

    for warehouses in [8usize, 64] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(warehouses),
            &warehouses,
            |b, &warehouses| {
                b.iter_batched(
                    || seeded_ledger(warehouses, 10),
                    |mut ledger| {
                        // Forces the greedy split across most warehouses.
                        let quantity = 10 * warehouses as i64 - 5;
                        black_box(ledger.allocate(&item, quantity).unwrap())
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_warehouse_allocation,
    bench_split_allocation
);
criterion_main!(benches);
