//! Performance benchmarks for display name generation
//!
//! Run with: cargo bench --bench naming_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use display_name_mcp::config::resolver::StrategyResolver;
use display_name_mcp::config::GenerationConfig;
use display_name_mcp::entity::{ClassInfo, MethodInfo};
use display_name_mcp::naming::rules::split_camel_case_boundaries;
use display_name_mcp::naming::{DisplayNames, Style};

fn sample_method() -> MethodInfo {
    let class = ClassInfo::from_chain(&[
        "com.example.integration.HTTPClientTests",
        "WhenConnectionPoolIsExhausted",
        "after_retrying_three_times",
    ])
    .expect("non-empty chain");
    MethodInfo::new("shouldFailWithTimeoutException", class)
        .with_parameters(["Duration", "RetryPolicy", "int"])
}

fn bench_method_name_by_style(c: &mut Criterion) {
    let mut group = c.benchmark_group("method_name_by_style");
    let method = sample_method();

    for style in Style::ALL {
        let names = DisplayNames::new(style);
        group.bench_with_input(BenchmarkId::from_parameter(style.id()), &method, |b, m| {
            b.iter(|| names.method_name(black_box(m)));
        });
    }

    group.finish();
}

fn bench_camel_case_split_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("camel_case_split_by_length");

    let test_cases = vec![
        ("short", "fooBar".to_string()),
        ("medium", "shouldParseXMLDocumentWith42Elements".to_string()),
        ("long", "whenTheHTTPServerReturns503".repeat(20)),
    ];

    for (label, input) in test_cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, s| {
            b.iter(|| split_camel_case_boundaries(black_box(s)));
        });
    }

    group.finish();
}

fn bench_resolution_depth(c: &mut Criterion) {
    let config = GenerationConfig::default()
        .declare("com.example.integration.HTTPClientTests", Style::Sentences);
    let resolver = StrategyResolver::new(config);
    let method = sample_method();

    c.bench_function("resolve_and_name_nested_method", |b| {
        b.iter(|| resolver.method_name(black_box(&method)));
    });
}

criterion_group!(
    benches,
    bench_method_name_by_style,
    bench_camel_case_split_by_length,
    bench_resolution_depth
);
criterion_main!(benches);
