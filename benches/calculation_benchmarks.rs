//! Performance benchmarks for the capacity planner.
//!
//! Covers the three costs a request can incur:
//! - Resolving a work calendar (one holiday lookup per weekday)
//! - Reducing a resolved calendar with a growing list of deduction items
//! - A full POST /calculate round trip with a warm calendar cache
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use capacity_planner::api::{AppState, create_router};
use capacity_planner::calculation::reduce;
use capacity_planner::calendar::{GermanHolidays, resolve_work_calendar};
use capacity_planner::config::{ConfigLoader, PlanningProfile};
use capacity_planner::models::{CalculationInput, DeductionItem, DeductionUnit, Region};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with the shipped planning profile.
fn create_test_state() -> AppState {
    let config =
        ConfigLoader::load("./config/default_profile.yaml").expect("Failed to load config");
    AppState::new(config)
}

/// Creates an input with `item_count` deduction items cycling through all units.
fn create_input_with_items(item_count: usize) -> CalculationInput {
    let units = [
        DeductionUnit::YearlyHours,
        DeductionUnit::WeeklyHours,
        DeductionUnit::PercentOfBase,
    ];

    let mut input = PlanningProfile::default().to_input(2026);
    input.additional_deductions = (0..item_count)
        .map(|i| {
            DeductionItem::new(
                format!("Item {}", i % 8),
                Decimal::new(1 + (i as i64 % 5), 0),
                units[i % units.len()],
            )
        })
        .collect();
    input
}

/// Benchmark: Resolving one year for one state.
fn bench_resolve_calendar(c: &mut Criterion) {
    c.bench_function("resolve_calendar_nw_2026", |b| {
        b.iter(|| {
            black_box(resolve_work_calendar(
                black_box(2026),
                black_box(Region::NordrheinWestfalen),
                &GermanHolidays,
            ))
        })
    });
}

/// Benchmark: Reduction with a growing number of deduction items.
fn bench_reduce_scaling(c: &mut Criterion) {
    let calendar = resolve_work_calendar(2026, Region::NordrheinWestfalen, &GermanHolidays);

    let mut group = c.benchmark_group("reduce");

    for item_count in [0, 5, 20, 100].iter() {
        let input = create_input_with_items(*item_count);

        group.throughput(Throughput::Elements(*item_count as u64));
        group.bench_with_input(BenchmarkId::new("items", item_count), item_count, |b, _| {
            b.iter(|| black_box(reduce(black_box(&calendar), black_box(&input))))
        });
    }

    group.finish();
}

/// Benchmark: Full API round trip.
fn bench_api_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "year": 2026,
        "region": "BY",
        "additional_deductions": [
            { "name": "Training", "value": 40, "unit": "yearly_hours" },
            { "name": "On-call", "value": 2, "unit": "weekly_hours" }
        ]
    })
    .to_string();

    c.bench_function("api_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_calendar,
    bench_reduce_scaling,
    bench_api_calculate,
);
criterion_main!(benches);
