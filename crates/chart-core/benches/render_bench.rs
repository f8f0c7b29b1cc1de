use stockline_core::sample::weather_dataset;
use stockline_core::{ChartResult, LineChart, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let chart = LineChart::new(weather_dataset(1_700_000_000_000));
    for &progress in &[0.5f64, 1.0f64] {
        group.bench_function(format!("weather_p{progress}"), |b| {
            let opts = RenderOptions {
                width: 800,
                height: 500,
                draw_labels: false,
                progress,
                indicator_x: Some(200.0),
                ..RenderOptions::default()
            };
            b.iter(|| -> ChartResult<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
