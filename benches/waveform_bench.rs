//! Performance benchmarks for waveform rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kurbo::Rect;
use waverender::{render_waveform, DownsampleStrategy, PathStyle, RenderConfig};

fn bench_render_waveform(c: &mut Criterion) {
    // Generate synthetic audio (30 seconds at 44.1kHz)
    let samples: Vec<f32> = (0..44100 * 30)
        .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.5)
        .collect();

    let bounds = Rect::new(0.0, 0.0, 1024.0, 256.0);

    let mut group = c.benchmark_group("render_waveform_30s");
    for strategy in [
        DownsampleStrategy::MaxValue,
        DownsampleStrategy::AvgValue,
        DownsampleStrategy::SampleValue,
    ] {
        let config = RenderConfig {
            strategy,
            ..RenderConfig::default()
        };
        group.bench_function(format!("{:?}", strategy), |b| {
            b.iter(|| {
                let _ = render_waveform(
                    black_box(&samples),
                    black_box(&samples),
                    black_box(bounds),
                    black_box(1024),
                    black_box(&config),
                );
            });
        });
    }
    group.finish();

    let parallel_config = RenderConfig {
        parallel: true,
        style: PathStyle::Outline,
        ..RenderConfig::default()
    };
    c.bench_function("render_waveform_30s_parallel", |b| {
        b.iter(|| {
            let _ = render_waveform(
                black_box(&samples),
                black_box(&samples),
                black_box(bounds),
                black_box(1024),
                black_box(&parallel_config),
            );
        });
    });
}

criterion_group!(benches, bench_render_waveform);
criterion_main!(benches);
