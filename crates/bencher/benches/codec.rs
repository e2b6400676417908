use bencher::{TestCase, TestFile};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use micro_http_util::codec::{get_query_params, get_query_params_collapsed, parse_headers};
use std::hint::black_box;

static SMALL_RESPONSE: TestFile = TestFile::new("small.txt", include_str!("../resources/response/small.txt"));
static LARGE_RESPONSE: TestFile = TestFile::new("large.txt", include_str!("../resources/response/large.txt"));

static SHORT_QUERY: TestFile = TestFile::new("short.txt", include_str!("../resources/query/short.txt"));
static LONG_QUERY: TestFile = TestFile::new("long.txt", include_str!("../resources/query/long.txt"));

fn header_cases() -> Vec<TestCase> {
    vec![TestCase::headers("small_response_headers", SMALL_RESPONSE), TestCase::headers("large_response_headers", LARGE_RESPONSE)]
}

fn query_cases() -> Vec<TestCase> {
    vec![TestCase::query("short_query", SHORT_QUERY, &[]), TestCase::query("long_query", LONG_QUERY, &["tag"])]
}

fn benchmark_parse_headers(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("parse_headers");

    for case in header_cases() {
        group.throughput(Throughput::Bytes(case.file().content().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter(|| {
                let headers = parse_headers(case.file().content()).expect("fixture should be a valid header block");
                black_box(headers);
            });
        });
    }

    group.finish();
}

fn benchmark_query_decoders(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("query_decoders");

    for case in query_cases() {
        group.throughput(Throughput::Bytes(case.file().content().len() as u64));

        group.bench_with_input(BenchmarkId::new("array_first", case.name()), &case, |b, case| {
            b.iter(|| {
                let params = get_query_params(case.file().content(), &[]).expect("nothing collapsed, nothing to conflict");
                black_box(params);
            });
        });

        group.bench_with_input(BenchmarkId::new("scalar_first", case.name()), &case, |b, case| {
            b.iter(|| {
                let params = get_query_params_collapsed(case.file().content(), case.listed()).expect("only listed names repeat");
                black_box(params);
            });
        });
    }

    group.finish();
}

criterion_group!(codec, benchmark_parse_headers, benchmark_query_decoders);
criterion_main!(codec);
