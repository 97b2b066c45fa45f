use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use menuorder_menu::{Drink, DrinkName, Hamburger, MenuPosition, Salad, SaladName, Size, Stuffing};
use menuorder_orders::Order;

fn sample_items(count: usize) -> Vec<MenuPosition> {
    (0..count)
        .map(|i| match i % 3 {
            0 => Drink::new(DrinkName::Coffee).into(),
            1 => Hamburger::new(Size::Large, Stuffing::Cheese).into(),
            _ => Salad::new(SaladName::Olivie, 120.0)
                .expect("120g Olivie is on the menu")
                .into(),
        })
        .collect()
}

fn bench_count_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_order");

    for size in [10usize, 100, 1_000] {
        let order = Order::new(sample_items(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &order, |b, order| {
            b.iter(|| black_box(order.count_order()))
        });
    }

    group.finish();
}

fn bench_fill_and_pay(c: &mut Criterion) {
    let items = sample_items(100);

    c.bench_function("fill_and_pay_100", |b| {
        b.iter(|| {
            let mut order = Order::default();
            for item in &items {
                order.add_item(item.clone()).expect("open order accepts items");
            }
            order.pay().expect("open order can be paid");
            black_box(order.count_order())
        })
    });
}

criterion_group!(benches, bench_count_order, bench_fill_and_pay);
criterion_main!(benches);
