// File: crates/bench-charts/tests/dataset.rs
// Purpose: Loading the results CSV into a dataset, and the failures that stop a run.

mod common;

use bench_charts::{DataLoadError, Dataset, Metric, Structure};

#[test]
fn loads_rows_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_csv(dir.path(), &common::three_sizes_csv());

    let ds = Dataset::load(&path).expect("load");
    assert_eq!(ds.len(), 9);
    let first = &ds.rows()[0];
    assert_eq!(first.structure, Structure::Avl);
    assert_eq!(first.n, 100);
    assert_eq!(first.metric(Metric::SearchRemoval), 1000.0);
    assert_eq!(first.metric(Metric::Balancing), 500.0);
    assert_eq!(first.metric(Metric::Total), 1500.0);
    assert_eq!(ds.rows()[2].structure, Structure::SkipList);
}

#[test]
fn extra_columns_and_column_order_do_not_matter() {
    let csv = "N,Extra,TempoTotal(ns),Estrutura,TempoBalanceamento(ns),TempoBuscaRemocao(ns)\n\
               100,x,15.5,RB,4,9\n";
    let ds = Dataset::from_reader(csv.as_bytes(), "inline.csv").expect("load");
    assert_eq!(ds.rows()[0].structure, Structure::Rb);
    assert_eq!(ds.rows()[0].total_ns, 15.5);
}

#[test]
fn headers_only_is_an_empty_dataset() {
    let ds = Dataset::from_reader(format!("{}\n", common::HEADER).as_bytes(), "empty.csv").expect("load");
    assert!(ds.is_empty());
    assert!(ds.distinct_sizes(&Structure::ALL).is_empty());
}

#[test]
fn missing_structure_column_is_a_load_error() {
    let csv = "N,TempoBuscaRemocao(ns),TempoBalanceamento(ns),TempoTotal(ns)\n100,1,2,3\n";
    let err = Dataset::from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
    match err {
        DataLoadError::MissingColumn { column, .. } => assert_eq!(column, "Estrutura"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn column_names_must_match_exactly() {
    let csv = "Estrutura,N,TempoBuscaRemocao,TempoBalanceamento(ns),TempoTotal(ns)\nAVL,100,1,2,3\n";
    let err = Dataset::from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
    assert!(matches!(err, DataLoadError::MissingColumn { column: "TempoBuscaRemocao(ns)", .. }));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DataLoadError::Open { .. }));
}

#[test]
fn malformed_values_are_load_errors() {
    for body in [
        "AVL,100,abc,2,3\n",      // non-numeric timing
        "AVL,-5,1,2,3\n",         // negative size
        "BTree,100,1,2,3\n",      // unknown structure
        "AVL,100,1,2\n",          // short record
    ] {
        let csv = format!("{}\n{}", common::HEADER, body);
        let err = Dataset::from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { .. }), "{body:?} gave {err:?}");
    }
}

#[test]
fn distinct_sizes_respect_structure_filter() {
    let csv = format!("{}\nAVL,300,1,1,2\nAVL,100,1,1,2\nRB,100,1,1,2\nSkipList,700,1,0,1\n", common::HEADER);
    let ds = Dataset::from_reader(csv.as_bytes(), "x.csv").unwrap();
    assert_eq!(ds.distinct_sizes(&Structure::ALL), vec![100, 300, 700]);
    assert_eq!(ds.distinct_sizes(&[Structure::Avl, Structure::Rb]), vec![100, 300]);
}

#[test]
fn points_are_sorted_and_filtered() {
    let csv = format!("{}\nAVL,300,3,0,0\nAVL,100,1,0,0\nAVL,200,2,0,0\nRB,100,9,0,0\n", common::HEADER);
    let ds = Dataset::from_reader(csv.as_bytes(), "x.csv").unwrap();

    assert_eq!(
        ds.points(Structure::Avl, Metric::SearchRemoval, None),
        vec![(100, 1.0), (200, 2.0), (300, 3.0)]
    );
    assert_eq!(
        ds.points(Structure::Avl, Metric::SearchRemoval, Some(&[300, 100, 999])),
        vec![(100, 1.0), (300, 3.0)]
    );
    assert!(ds.points(Structure::SkipList, Metric::Total, None).is_empty());
}
