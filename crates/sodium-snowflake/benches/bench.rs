use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sodium_snowflake::{GenerateOptions, Snowflake, TimeSource};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let snowflake = Snowflake::with_clock(
        sodium_snowflake::DISCORD_EPOCH,
        FixedMockTime {
            millis: 1_768_617_781_186,
        },
    );
    group.bench_function(format!("mock_clock/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(snowflake.generate(GenerateOptions::new()).unwrap());
            }
        });
    });

    let snowflake = Snowflake::discord();
    group.bench_function(format!("system_clock/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(snowflake.generate(GenerateOptions::new()).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let snowflake = Snowflake::discord();
    let id = 1_461_913_675_098_095_707_u64;
    let text = id.to_string();

    let mut group = c.benchmark_group("decode");
    group.bench_function("deconstruct/numeric", |b| {
        b.iter(|| black_box(snowflake.deconstruct(black_box(id)).unwrap()));
    });
    group.bench_function("deconstruct/string", |b| {
        b.iter(|| black_box(snowflake.deconstruct(black_box(text.as_str())).unwrap()));
    });
    group.bench_function("timestamp_from/numeric", |b| {
        b.iter(|| black_box(snowflake.timestamp_from(black_box(id)).unwrap()));
    });
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let a = "737141877803057244";
    let b = "1056191128120082432";
    let c_id = "737141877803057245";

    let mut group = c.benchmark_group("compare");
    group.bench_function("strings/different_length", |bench| {
        bench.iter(|| black_box(Snowflake::compare(black_box(a), black_box(b)).unwrap()));
    });
    group.bench_function("strings/same_length", |bench| {
        bench.iter(|| black_box(Snowflake::compare(black_box(a), black_box(c_id)).unwrap()));
    });
    group.bench_function("mixed", |bench| {
        let numeric = 1_056_191_128_120_082_432_u64;
        bench.iter(|| black_box(Snowflake::compare(black_box(a), black_box(numeric)).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_decode, bench_compare);
criterion_main!(benches);
