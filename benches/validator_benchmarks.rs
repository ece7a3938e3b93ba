use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use logward::{
    meta::{self, AccessEventMeta, AuthenticationEventMeta},
    record::LogRecord,
    validator::{self, SecurityValidator},
};
use serde_json::json;

fn shape_check_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_checks");

    let valid = serde_json::Value::from(AccessEventMeta::new(
        "abc123",
        "my-app",
        "access medical-portal-db",
        "123.456.789.100",
    ));
    let invalid = json!({ "thisIs": "wrong" });

    for (name, payload) in [("valid", &valid), ("invalid", &invalid)] {
        group.bench_with_input(
            BenchmarkId::new("access_event", name),
            payload,
            |b, payload| b.iter(|| meta::is_access_event_meta(payload)),
        );
    }

    let valid = serde_json::Value::from(AuthenticationEventMeta::new(
        "abc123",
        "cognito",
        "my-app",
        "authenticate to medical portal",
        "123.456.789.100",
    ));

    group.bench_function("authentication_event/valid", |b| {
        b.iter(|| meta::is_authentication_event_meta(&valid))
    });

    group.finish();
}

fn listener_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("listener");

    let security = LogRecord::new("Accessing HIPAA protected data.")
        .meta(
            "accessEvent",
            AccessEventMeta::new(
                "abc123",
                "my-app",
                "access medical-portal-db",
                "123.456.789.100",
            ),
        )
        .timestamped();
    let plain = LogRecord::new("Nothing compliance-relevant here.");

    for (name, record) in [("security_event", &security), ("plain_log", &plain)] {
        group.bench_with_input(BenchmarkId::new("inspect", name), record, |b, record| {
            let mut validator = SecurityValidator::new();
            b.iter(|| validator.inspect(record, None));
        });
    }

    group.bench_function("validate_access_event", |b| {
        b.iter(|| validator::validate_access_event(&security))
    });

    group.finish();
}

criterion_group!(benches, shape_check_benchmarks, listener_benchmarks);
criterion_main!(benches);
