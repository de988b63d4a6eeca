use anyhow::Result;
use chart_core::{Axis, Chart, Marker, RenderOptions, ScaleKind, Series, Ticks};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(points: usize, y_kind: ScaleKind) -> Chart {
    let sizes: Vec<f64> = (1..=points).map(|i| (i * 100_000) as f64).collect();
    let mut ch = Chart::new().with_title("Tempo Total (ns)");
    ch.x_axis = Axis::new("N", 0.0, 1.0).with_ticks(Ticks::Fixed(sizes.clone()));
    ch.y_axis = Axis::new("Tempo Total (ns)", 0.0, 1.0).with_kind(y_kind);
    for (label, factor) in [("AVL", 15.0), ("RB", 13.0), ("SkipList", 12.0)] {
        let data = sizes.iter().map(|&n| (n, n * factor)).collect();
        ch.add_series(Series::line(label, data).with_marker(Marker::Circle));
    }
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for (name, kind) in [("linear", ScaleKind::Linear), ("log10", ScaleKind::Log10)] {
        group.bench_function(format!("metric_chart_{name}"), |b| {
            let ch = build_chart(20, kind);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
