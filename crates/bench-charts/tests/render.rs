// File: crates/bench-charts/tests/render.rs
// Purpose: Metric chart construction (series, legend, axes) and PNG output.

mod common;

use bench_charts::render::plotted_structures;
use bench_charts::{build_metric_chart, x_axis_values, ChartRenderer, Dataset, Error, Metric, RenderMode, Structure};
use chart_core::ScaleKind;

fn dataset() -> Dataset {
    Dataset::from_reader(common::three_sizes_csv().as_bytes(), "fixture.csv").expect("fixture loads")
}

#[test]
fn renders_non_empty_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grafico_total.png");

    ChartRenderer::default()
        .render_metric_chart(&dataset(), Metric::Total, "Tempo Total (ns)", &out, &[], &RenderMode::standard())
        .expect("render");

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");
    std::fs::write(&out, b"stale").unwrap();

    ChartRenderer::default()
        .render_metric_chart(&dataset(), Metric::SearchRemoval, "busca", &out, &[], &RenderMode::standard())
        .expect("render");

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn one_series_per_structure_in_fixed_order() {
    let chart = build_metric_chart(&dataset(), Metric::Total, "Tempo Total (ns)", &[], &RenderMode::standard());
    assert_eq!(chart.legend_labels(), vec!["AVL", "RB", "SkipList"]);
    assert_eq!(chart.title, "Tempo Total (ns)");
    assert_eq!(chart.y_axis.label, "Tempo Total (ns)");
    assert_eq!(chart.x_axis.label, "N");
    assert_eq!(chart.series[1].data_xy, vec![(100.0, 1300.0), (200.0, 2600.0), (300.0, 3900.0)]);
}

#[test]
fn excluded_structure_leaves_two_series() {
    let chart = build_metric_chart(
        &dataset(),
        Metric::Balancing,
        "Tempo Balanceamento (ns)",
        &[Structure::SkipList],
        &RenderMode::standard(),
    );
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.legend_labels(), vec!["AVL", "RB"]);
}

#[test]
fn plotted_structures_skip_exclusions() {
    assert_eq!(plotted_structures(&[Structure::Rb]), vec![Structure::Avl, Structure::SkipList]);
}

#[test]
fn standard_mode_uses_distinct_sizes_of_plotted_structures() {
    let csv = format!(
        "{}\nAVL,300,1,1,2\nAVL,100,1,1,2\nRB,200,1,1,2\nRB,100,1,1,2\nSkipList,900,1,0,1\n",
        common::HEADER
    );
    let ds = Dataset::from_reader(csv.as_bytes(), "x.csv").unwrap();
    let mode = RenderMode::standard();

    assert_eq!(x_axis_values(&ds, &[], &mode), vec![100, 200, 300, 900]);
    assert_eq!(x_axis_values(&ds, &[Structure::SkipList], &mode), vec![100, 200, 300]);

    let chart = build_metric_chart(&ds, Metric::Balancing, "b", &[Structure::SkipList], &mode);
    assert_eq!(chart.x_axis.tick_values(), vec![100.0, 200.0, 300.0]);
    assert_eq!(chart.y_axis.kind, ScaleKind::Linear);
    assert_eq!(chart.x_axis.tick_rotation, 0.0);
}

#[test]
fn dense_mode_uses_exactly_the_given_sizes() {
    let mode = RenderMode::dense_sampling([300, 100, 250, 1000, 100]);
    let ds = dataset();

    assert_eq!(x_axis_values(&ds, &[], &mode), vec![100, 250, 300, 1000]);

    let chart = build_metric_chart(&ds, Metric::Total, "Tempo Total (ns)", &[], &mode);
    assert_eq!(chart.x_axis.tick_values(), vec![100.0, 250.0, 300.0, 1000.0]);
    assert_eq!(chart.y_axis.kind, ScaleKind::Log10);
    assert_eq!(chart.x_axis.tick_rotation, 45.0);
    // N = 200 is not in the list; 250 and 1000 have no rows and get no points.
    assert_eq!(chart.series[0].data_xy, vec![(100.0, 1500.0), (300.0, 4500.0)]);
    // The axis spans the whole list even where there is no data.
    assert!(chart.x_axis.min <= 100.0 && chart.x_axis.max >= 1000.0);
}

#[test]
fn dense_mode_renders_with_zero_values_on_log_axis() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grafico_balanceamento.png");

    // SkipList balancing is all zeros; on a log axis those points are simply not drawn.
    ChartRenderer::default()
        .render_metric_chart(&dataset(), Metric::Balancing, "b", &out, &[], &RenderMode::dense_sampling([100, 200, 300]))
        .expect("render");
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn empty_dataset_gives_chart_without_series() {
    let ds = Dataset::from_reader(format!("{}\n", common::HEADER).as_bytes(), "empty.csv").unwrap();
    let chart = build_metric_chart(&ds, Metric::Total, "t", &[], &RenderMode::standard());
    assert!(chart.series.is_empty());
    assert!(chart.legend_labels().is_empty());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.png");
    ChartRenderer::default()
        .render_metric_chart(&ds, Metric::Total, "t", &out, &[], &RenderMode::standard())
        .expect("empty dataset still renders");
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn missing_output_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("does-not-exist").join("chart.png");

    let err = ChartRenderer::default()
        .render_metric_chart(&dataset(), Metric::Total, "t", &out, &[], &RenderMode::standard())
        .unwrap_err();
    match err {
        Error::Io { path, .. } => assert_eq!(path, out),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn only_dense_mode_grows_margins_for_labels() {
    let renderer = ChartRenderer::default();
    assert!(renderer.render_options(&RenderMode::dense_sampling([3_000_000, 3_500_000])).auto_layout);
    assert!(!renderer.render_options(&RenderMode::standard()).auto_layout);
}
