//! Performance benchmarks for the SAC Calculation Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single bonus determination (pure): < 10μs mean
//! - Single bonus request over HTTP: < 1ms mean
//! - Roster batch of 100 employees: < 100ms mean
//! - Salary-for-period resolution (pure): < 10μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use sac_engine::api::create_router;
use sac_engine::calculation::{
    InMemoryEmployeeSource, InMemoryPayrollSource, InMemorySalaryHistorySource, calculate_bonus,
    resolve_salary_for_period,
};
use sac_engine::models::{EmployeeSnapshot, PayrollRecord, Period, SalaryHistoryRecord};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_employee(id: &str) -> EmployeeSnapshot {
    EmployeeSnapshot {
        id: id.to_string(),
        start_date: NaiveDate::from_ymd_opt(2020, 5, 10).unwrap(),
        base_wage: Some(Decimal::from(100_000)),
        deposit_wage: Decimal::from(70_000),
        cash_wage: Decimal::from(20_000),
        presentismo: Decimal::from(5_000),
    }
}

/// Creates a year of settlements for one employee.
fn create_payroll_history(employee_id: &str) -> Vec<PayrollRecord> {
    (1..=12)
        .map(|month| PayrollRecord {
            employee_id: employee_id.to_string(),
            period: format!("2024-{:02}", month).parse().unwrap(),
            deposit_amount: Decimal::from(80_000 + month * 500),
            cash_amount: Decimal::from(30_000),
            overtime_amount: Decimal::from(5_000),
            holiday_bonus: Decimal::ZERO,
            presentismo_amount: Decimal::from(4_000),
            bonus_amount: Decimal::ZERO,
            aguinaldo: Decimal::ZERO,
            advances: Decimal::ZERO,
            discounts: Decimal::ZERO,
        })
        .collect()
}

fn create_salary_history(employee_id: &str) -> Vec<SalaryHistoryRecord> {
    [(2u32, 85_000i64), (6, 95_000), (10, 110_000)]
        .iter()
        .map(|&(month, deposit)| SalaryHistoryRecord {
            employee_id: employee_id.to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            impact_period: None,
            deposit_wage: Decimal::from(deposit),
            cash_wage: Decimal::from(30_000),
            presentismo: Decimal::from(4_000),
            previous_deposit_wage: Some(Decimal::from(deposit - 10_000)),
            previous_cash_wage: Some(Decimal::from(28_000)),
            previous_presentismo: None,
            created_at: Utc.with_ymd_and_hms(2024, month, 1, 9, 0, 0).unwrap(),
        })
        .collect()
}

fn create_bonus_request_body(employee_id: &str) -> String {
    let body = serde_json::json!({
        "employee": {
            "id": employee_id,
            "start_date": "2020-05-10",
            "base_wage": "100000"
        },
        "semester": "2024-1",
        "payroll_history": create_payroll_history(employee_id)
    });
    serde_json::to_string(&body).expect("Failed to create request")
}

/// Benchmark: Single bonus determination, no HTTP.
///
/// Target: < 10μs mean
fn bench_bonus_calculation(c: &mut Criterion) {
    let employee = create_employee("emp_bench_001");
    let history = create_payroll_history("emp_bench_001");

    c.bench_function("bonus_calculation", |b| {
        b.iter(|| black_box(calculate_bonus(&employee, "2024-1", &history)))
    });
}

/// Benchmark: Single bonus request over the HTTP surface.
///
/// Target: < 1ms mean
fn bench_bonus_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router();
    let body = create_bonus_request_body("emp_bench_001");

    c.bench_function("bonus_http", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/bonus")
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

/// Benchmark: Roster batch of 100 employees.
///
/// Target: < 100ms mean
fn bench_roster_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let requests: Vec<String> = (0..100)
        .map(|i| create_bonus_request_body(&format!("emp_batch_{:03}", i)))
        .collect();

    let mut group = c.benchmark_group("roster_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("roster_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/bonus")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Salary-for-period resolution, no HTTP.
///
/// Target: < 10μs mean
fn bench_salary_resolution(c: &mut Criterion) {
    let history = create_salary_history("emp_bench_001");
    let payroll = create_payroll_history("emp_bench_001");
    let employees = [create_employee("emp_bench_001")];
    let period: Period = "2024-07".parse().unwrap();

    let history_source = InMemorySalaryHistorySource::new(&history);
    let payroll_source = InMemoryPayrollSource::new(&payroll);
    let employee_source = InMemoryEmployeeSource::new(&employees);

    c.bench_function("salary_resolution", |b| {
        b.iter(|| {
            black_box(resolve_salary_for_period(
                "emp_bench_001",
                &period,
                &history_source,
                &payroll_source,
                &employee_source,
            ))
        })
    });
}

/// Benchmark: Various history sizes to understand scaling behavior.
fn bench_history_scaling(c: &mut Criterion) {
    let employee = create_employee("emp_bench_001");

    let mut group = c.benchmark_group("history_scaling");

    for record_count in [12, 24, 60, 120].iter() {
        let history: Vec<PayrollRecord> = (0..*record_count)
            .map(|i| PayrollRecord {
                employee_id: "emp_bench_001".to_string(),
                period: format!("{}-{:02}", 2015 + i / 12, 1 + i % 12).parse().unwrap(),
                deposit_amount: Decimal::from(80_000 + i * 100),
                cash_amount: Decimal::from(30_000),
                overtime_amount: Decimal::ZERO,
                holiday_bonus: Decimal::ZERO,
                presentismo_amount: Decimal::ZERO,
                bonus_amount: Decimal::ZERO,
                aguinaldo: Decimal::ZERO,
                advances: Decimal::ZERO,
                discounts: Decimal::ZERO,
            })
            .collect();

        group.throughput(Throughput::Elements(*record_count as u64));
        group.bench_with_input(
            BenchmarkId::new("records", record_count),
            record_count,
            |b, _| b.iter(|| black_box(calculate_bonus(&employee, "2024-1", &history))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bonus_calculation,
    bench_bonus_http,
    bench_roster_batch_100,
    bench_salary_resolution,
    bench_history_scaling,
);
criterion_main!(benches);
