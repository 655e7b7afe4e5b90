use criterion::{Criterion, black_box, criterion_group, criterion_main};
use frost_panel::{ClipRect, PixelImage, Rgb, SlideLimits, compose_into};

fn bench_compose_frame(c: &mut Criterion) {
    let limits = SlideLimits::default();
    let background = PixelImage::filled(
        limits.panel_width,
        limits.panel_height,
        Rgb {
            r: 30,
            g: 60,
            b: 120,
        },
    );
    let frost = PixelImage::filled(
        limits.panel_width,
        limits.panel_height,
        Rgb {
            r: 220,
            g: 235,
            b: 240,
        },
    );
    let clip = ClipRect::vertical_band(
        limits.upper_position,
        limits.panel_width,
        limits.panel_height,
    );
    let mut out = background.clone();

    c.bench_function("compose_into_shown_panel", |b| {
        b.iter(|| {
            compose_into(
                black_box(&background),
                black_box(&frost),
                clip,
                black_box(&mut out),
            )
            .expect("layers share dimensions")
        })
    });
}

criterion_group!(benches, bench_compose_frame);
criterion_main!(benches);
