//! Benchmarks for card_input.
//!
//! Form validation runs on every keystroke, so everything here should stay
//! well under a microsecond.
//!
//! Run with: cargo bench

use card_input::{
    classify_brand, format_card_number, luhn, sanitize, validate_at, validate_card_number,
    CardData, FormConfig,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4532015112830366";
const VISA_16_FORMATTED: &str = "4532 0151 1283 0366";
const MASTERCARD: &str = "5500000000000004";
const AMEX: &str = "378282246310005";

const VISA_DIGITS: [u8; 16] = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];

fn complete_form() -> CardData {
    CardData::new()
        .with_card_number(VISA_16_FORMATTED)
        .with_cardholder_name("Ana Gomez")
        .with_expiration("12", "2030")
        .with_security_code("123")
}

/// Benchmark card number validation
fn bench_card_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_number");

    group.bench_function("visa_16_raw", |b| {
        b.iter(|| validate_card_number(black_box(VISA_16)))
    });

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| validate_card_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("mastercard", |b| {
        b.iter(|| validate_card_number(black_box(MASTERCARD)))
    });

    group.bench_function("amex_15", |b| {
        b.iter(|| validate_card_number(black_box(AMEX)))
    });

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("validate_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::generate_check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.finish();
}

/// Benchmark whole-form validation
fn bench_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");
    let data = complete_form();

    group.bench_function("default_config", |b| {
        let config = FormConfig::default();
        b.iter(|| validate_at(black_box(&data), &config, 2026))
    });

    group.bench_function("all_fields", |b| {
        let config = FormConfig::new().identification(true);
        let data = complete_form().with_identification("DNI", "12345678");
        b.iter(|| validate_at(black_box(&data), &config, 2026))
    });

    group.bench_function("empty_form", |b| {
        let empty = CardData::new();
        let config = FormConfig::default();
        b.iter(|| validate_at(black_box(&empty), &config, 2026))
    });

    group.finish();
}

/// Benchmark per-keystroke work: classify, sanitize and reformat
fn bench_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke");

    for len in [4usize, 8, 12, 16] {
        let partial = &VISA_16[..len];
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("classify", len), partial, |b, input| {
            b.iter(|| classify_brand(black_box(input)))
        });

        group.bench_with_input(BenchmarkId::new("format", len), partial, |b, input| {
            b.iter(|| format_card_number(black_box(input)))
        });
    }

    group.bench_function("sanitize_month", |b| {
        b.iter(|| sanitize::month(black_box("1a")))
    });

    group.finish();
}

criterion_group!(benches, bench_card_number, bench_luhn, bench_form, bench_keystroke);

criterion_main!(benches);
