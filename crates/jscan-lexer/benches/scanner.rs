//! Benchmarks for the scanner.
//!
//! Run with `cargo bench -p jscan-lexer`. Groups:
//!
//! | Benchmark                 | Input                                   |
//! |---------------------------|-----------------------------------------|
//! | scanner/small             | A handful of declarations               |
//! | scanner/medium            | Operator and number heavy code          |
//! | scanner/large_100_funcs   | 100 generated functions                 |
//! | scanner_throughput/N      | N generated functions, bytes/s          |
//! | numbers/*                 | One literal form repeated               |
//! | reader_source             | `medium` decoded through `BufRead`      |

use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jscan_lexer::{Scanner, tokenize};

const SMALL_CODE: &str = r#"
const answer = 42;
let name = value ?? fallback;
var total = a + b * c;
"#;

const MEDIUM_CODE: &str = r#"
function fib(n) {
    if (n <= 1) { return n; }
    return fib(n - 1) + fib(n - 2);
}

const mask = 0xFF_FF & ~0b1010 | 0o777 ^ 017;
let ratio = 1.5e-3 * .25 / 1_000_000;
x >>>= 2; y **= 3; z ??= w?.v;
const arrow = (a, b) => a === b && a !== null || !b;
for (let i = 0; i < 10; i++) { total += i % 3; }
class Point extends Base { static origin = [0, 0]; }
"#;

fn generate_large_code(num_functions: usize) -> String {
    let mut code = String::with_capacity(num_functions * 160);

    for i in 0..num_functions {
        code.push_str(&format!(
            r#"
function func_{i}(x, y) {{
    const a = x + y * {i};
    let b = a >> 2 | 0x{i:x};
    return b > 100 ? b - 50.5 : b + 1e3;
}}
"#
        ));
    }

    code
}

fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    group.throughput(Throughput::Bytes(SMALL_CODE.len() as u64));
    group.bench_function("small", |b| b.iter(|| black_box(tokenize(black_box(SMALL_CODE)))));

    group.throughput(Throughput::Bytes(MEDIUM_CODE.len() as u64));
    group.bench_function("medium", |b| {
        b.iter(|| black_box(tokenize(black_box(MEDIUM_CODE))))
    });

    let large_code = generate_large_code(100);
    group.throughput(Throughput::Bytes(large_code.len() as u64));
    group.bench_function("large_100_funcs", |b| {
        b.iter(|| black_box(tokenize(black_box(&large_code))))
    });

    group.finish();
}

fn bench_scanner_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_throughput");

    for size in [10, 100, 1000] {
        let code = generate_large_code(size);
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &code, |b, code| {
            b.iter(|| black_box(tokenize(black_box(code))))
        });
    }

    group.finish();
}

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    let forms = [
        ("decimal", "1234567 "),
        ("fraction", "3.14159e-2 "),
        ("hex", "0xDEAD_BEEF "),
        ("binary", "0b1010_1010 "),
        ("legacy_octal", "01234567 "),
    ];

    for (name, literal) in forms {
        let code = literal.repeat(200);
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &code, |b, code| {
            b.iter(|| black_box(tokenize(black_box(code))))
        });
    }

    group.finish();
}

fn bench_reader_source(c: &mut Criterion) {
    c.bench_function("reader_source", |b| {
        b.iter(|| {
            let scanner = Scanner::from_reader(Cursor::new(black_box(MEDIUM_CODE.as_bytes())));
            black_box(scanner.collect::<Result<Vec<_>, _>>())
        })
    });
}

criterion_group!(
    benches,
    bench_scanner,
    bench_scanner_throughput,
    bench_numbers,
    bench_reader_source
);
criterion_main!(benches);
