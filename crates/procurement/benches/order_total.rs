use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use acme_core::Decimal;
use acme_procurement::{ProductId, PurchaseOrder};
use acme_scm::SupplierId;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn order_with_lines(lines: usize) -> PurchaseOrder {
    let mut rng = StdRng::seed_from_u64(lines as u64);
    let supplier_id = SupplierId::new("SUP123").unwrap();
    let mut order = PurchaseOrder::new("PO-BENCH", supplier_id, Utc::now(), "USD").unwrap();
    for i in 0..lines {
        let quantity = (i % 50 + 1) as i64;
        order
            .add_item(ProductId::generate(&mut rng), quantity, Decimal::new(1550, 2))
            .unwrap();
    }
    order
}

fn bench_add_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_item");

    for lines in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("fill_order", lines), &lines, |b, &lines| {
            b.iter(|| black_box(order_with_lines(lines)));
        });
    }

    group.finish();
}

fn bench_calculate_order_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_order_total");

    for lines in [10usize, 100, 1_000] {
        let order = order_with_lines(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("fold_lines", lines), &order, |b, order| {
            b.iter(|| black_box(order.calculate_order_total()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_item, bench_calculate_order_total);
criterion_main!(benches);
