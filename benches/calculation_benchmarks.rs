//! Performance benchmarks for the payroll engine.
//!
//! Covers the pure calculation path and the HTTP path:
//! - Single employee withholding (library call and `/withholding` request)
//! - Roster withholding rollups of 100 and 1000 employees
//! - Roster totals scaling with roster size
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, WithholdingRequest, create_router};
use payroll_engine::calculation::{aggregate, compute_withholding, summarize_withholding};
use payroll_engine::config::{FederalTaxConfig, TaxYearConfig};
use payroll_engine::models::{Employee, FilingStatus, PayFrequency, Role, TimeFrame};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a mixed roster of FOH servers, BOH cooks and salaried chefs.
fn create_roster(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| {
            let mut employee = Employee::new(format!("emp_{:04}", i), format!("Employee {}", i));
            employee.hourly_wage = Decimal::new(1500 + (i as i64 % 20) * 50, 2);
            employee.hours_worked = Decimal::new(300 + (i as i64 % 10) * 10, 1);
            employee.overtime_hours = Decimal::new(i as i64 % 8, 0);
            employee.tips = Decimal::new(15_000 + (i as i64 % 7) * 1_000, 2);
            employee.filing_status = Some(FilingStatus::ALL[i % 3]);
            employee.multiple_jobs = i % 5 == 0;
            employee.dependent_amount_usd = Decimal::from((i % 3) as u32 * 2000);
            match i % 3 {
                1 => employee.role = Role::Boh,
                2 => {
                    employee.role = Role::Boh;
                    employee.salary = Decimal::new(200_000 + (i as i64 % 5) * 10_000, 2);
                }
                _ => {}
            }
            employee.is_active = i % 10 != 9;
            employee
        })
        .collect()
}

/// Benchmark: Single employee withholding as a library call.
fn bench_single_withholding(c: &mut Criterion) {
    let tax_year = TaxYearConfig::tax_year_2024();
    let employee = create_roster(1).remove(0);

    c.bench_function("single_withholding", |b| {
        b.iter(|| {
            compute_withholding(
                black_box(&employee),
                black_box(Decimal::new(115_000, 2)),
                PayFrequency::Biweekly,
                true,
                &tax_year,
            )
        })
    });
}

/// Benchmark: Single employee withholding through the router.
fn bench_single_withholding_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(FederalTaxConfig::builtin()));
    let request = WithholdingRequest {
        employee: create_roster(1).remove(0),
        frequency: PayFrequency::Biweekly,
        include_futa: true,
        gross_pay: None,
        pay_date: None,
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("single_withholding_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/withholding")
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

/// Benchmark: Withholding rollups of 100 and 1000 employees.
fn bench_roster_withholding(c: &mut Criterion) {
    let tax_year = TaxYearConfig::tax_year_2024();

    let mut group = c.benchmark_group("roster_withholding");
    for size in [100usize, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        if size >= 1000 {
            group.sample_size(20);
        }
        group.bench_with_input(BenchmarkId::new("employees", size), &roster, |b, roster| {
            b.iter(|| summarize_withholding(black_box(roster), PayFrequency::Weekly, true, &tax_year))
        });
    }
    group.finish();
}

/// Benchmark: Roster totals at various roster sizes.
fn bench_aggregate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for size in [10usize, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), &roster, |b, roster| {
            b.iter(|| aggregate(black_box(roster), TimeFrame::Week))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_withholding,
    bench_single_withholding_request,
    bench_roster_withholding,
    bench_aggregate_scaling,
);
criterion_main!(benches);
