use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kansuji::{
    kanji_to_biguint, kanji_to_number, number_to_kanji, number_to_kanji_with_options,
    FormatOptions, Register, Style,
};
use num_bigint::BigUint;

fn benchmark_format_simple(c: &mut Criterion) {
    c.bench_function("format_u64", |b| {
        b.iter(|| number_to_kanji(black_box(123_456_789u64)))
    });
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let kanji = "九千九百九十九万九千九百九十九";

    c.bench_function("parse_myriad", |b| b.iter(|| kanji_to_number(black_box(kanji))));
}

fn benchmark_format_registers(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_register");

    for register in [Register::Standard, Register::Financial, Register::Archaic] {
        let options = FormatOptions::new().with_register(register);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", register)),
            &options,
            |b, options| b.iter(|| number_to_kanji_with_options(black_box(987_654_321u64), options)),
        );
    }
    group.finish();
}

fn benchmark_big_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_numbers");

    for digits in [8u32, 24, 48, 72] {
        let value = BigUint::from(10u32).pow(digits) - 1u32;
        let kanji = number_to_kanji(&value).unwrap();

        group.bench_with_input(BenchmarkId::new("format", digits), &value, |b, value| {
            b.iter(|| number_to_kanji(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("parse", digits), &kanji, |b, kanji| {
            b.iter(|| kanji_to_biguint(black_box(kanji)))
        });
    }
    group.finish();
}

fn benchmark_plain_style(c: &mut Criterion) {
    let options = FormatOptions::new().with_style(Style::Plain);

    c.bench_function("format_plain", |b| {
        b.iter(|| number_to_kanji_with_options(black_box(20_240_401u64), &options))
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_u64", |b| {
        b.iter(|| {
            let kanji = number_to_kanji(black_box(u64::MAX)).unwrap();
            let _back = kanji_to_number(black_box(&kanji)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_format_simple,
    benchmark_parse_simple,
    benchmark_format_registers,
    benchmark_big_numbers,
    benchmark_plain_style,
    benchmark_roundtrip
);
criterion_main!(benches);
