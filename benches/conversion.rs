use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subtitle_style::color::{ColorCodec, ColorFormat};

fn conversion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for &(format, raw) in &[
        (ColorFormat::Name, "teal"),
        (ColorFormat::SsaHex, "&H0080FF"),
        (ColorFormat::AssHex, "&H00FF8040"),
        (ColorFormat::DecimalSsa, "16711680"),
        (ColorFormat::DecimalAss, "4278190335"),
    ] {
        for codec in &[ColorCodec::default(), ColorCodec::legacy()] {
            let id = format!("{}/{:?}", format, codec.compatibility);
            group.bench_function(id, |b| {
                b.iter(|| codec.convert(black_box(format), black_box(raw)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
