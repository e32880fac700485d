use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pyakkadein_core::{
    MonthOfYear, MyanmarMonth, astrological_flags, calendar_day_from_jdn, jdn_to_myanmar,
    myanmar_to_julian, observances, year_info,
};

fn conversion_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.bench_function("jdn_to_myanmar", |b| {
        b.iter(|| jdn_to_myanmar(black_box(2_460_418)))
    });
    let kason = MonthOfYear::regular(MyanmarMonth::Kason);
    group.bench_function("myanmar_to_julian", |b| {
        b.iter(|| myanmar_to_julian(black_box(1386), black_box(kason), black_box(15)))
    });
    group.bench_function("year_info", |b| b.iter(|| year_info(black_box(1385))));
    group.finish();
}

fn attribute_bench(c: &mut Criterion) {
    let day = calendar_day_from_jdn(2_460_453);
    let mut group = c.benchmark_group("attributes");
    group.bench_function("astrological_flags", |b| {
        b.iter(|| astrological_flags(black_box(&day)))
    });
    group.bench_function("observances", |b| b.iter(|| observances(black_box(&day))));
    group.bench_function("calendar_day_year_sweep", |b| {
        b.iter(|| {
            (2_460_410..2_460_764)
                .map(calendar_day_from_jdn)
                .filter(|d| astrological_flags(d).is_sabbath())
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, conversion_bench, attribute_bench);
criterion_main!(benches);
