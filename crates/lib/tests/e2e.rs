use crs_tools::{
    generate, run_program, AveragePolicy, Connection, GeneratorConfig, ProcessLauncher, RunConfig,
    SamplingStrategy,
};
use csv::{ReaderBuilder, StringRecord};
use eyre::{ensure, eyre, Result, WrapErr};
use std::{collections::HashSet, path::Path};

struct Document {
    header: [u64; 3],
    rows: Vec<(u32, u32, u32)>,
}

fn field<T: std::str::FromStr>(record: &StringRecord, idx: usize) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    record
        .get(idx)
        .ok_or_else(|| eyre!("missing field {idx} in {record:?}"))?
        .parse()
        .wrap_err_with(|| format!("field {idx} of {record:?}"))
}

fn read_document(path: &Path) -> Result<Document> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)?;
    let mut records = reader.records();

    let header = records.next().ok_or_else(|| eyre!("empty document"))??;
    let header = [field(&header, 0)?, field(&header, 1)?, field(&header, 2)?];

    let rows = records
        .map(|record| -> Result<(u32, u32, u32)> {
            let record = record?;
            Ok((field(&record, 0)?, field(&record, 1)?, field(&record, 2)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Document { header, rows })
}

fn check_invariants(path: &Path, size: u32, connections: u64) -> Result<()> {
    let doc = read_document(path)?;
    ensure!(
        doc.header == [u64::from(size), u64::from(size), connections],
        "header {:?} for size {size} and {connections} connections",
        doc.header
    );
    ensure!(doc.rows.len() as u64 == connections, "body line count");

    let mut seen = HashSet::new();
    for &(row, col, value) in &doc.rows {
        ensure!(
            (1..=size).contains(&row) && (1..=size).contains(&col),
            "({row}, {col}) out of bounds"
        );
        ensure!(value == 1, "value {value}");
        ensure!(seen.insert(Connection::new(row, col)), "duplicate ({row}, {col})");
    }

    let mut sorted = doc.rows.clone();
    sorted.sort_unstable();
    ensure!(sorted == doc.rows, "rows are not in row-then-column order");
    Ok(())
}

#[test]
fn generated_documents_hold_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [(1, 1), (10, 0), (10, 100), (64, 2_000), (5_000, 20_000)];

    for strategy in [SamplingStrategy::Rejection, SamplingStrategy::Shuffle] {
        for (seed, (size, connections)) in cases.into_iter().enumerate() {
            let config =
                GeneratorConfig::new(size, connections, seed as u64).with_strategy(strategy);
            let path = generate(&config, dir.path()).unwrap();
            check_invariants(&path, size, connections)
                .wrap_err_with(|| format!("{path:?} ({strategy})"))
                .unwrap();
        }
    }
}

#[test]
fn regenerating_from_seed_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(2_000, 5_000, 424_242);

    let a = generate(&config, first.path()).unwrap();
    let b = generate(&config, second.path()).unwrap();

    assert_eq!(a.file_name(), b.file_name());
    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn oversized_request_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(generate(&GeneratorConfig::new(10, 101, 1), dir.path()).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn benchmarks_real_processes() {
    let dir = tempfile::tempdir().unwrap();
    let matrix = generate(&GeneratorConfig::new(100, 50, 3), dir.path()).unwrap();

    let ok = RunConfig::new("true", &matrix, "1", 3).unwrap();
    let report = run_program(&ok, &mut ProcessLauncher, AveragePolicy::Requested).unwrap();
    assert_eq!(report.successful, 3);
    assert!(report.average_ms > 0.0);

    let failing = RunConfig::new("false", &matrix, "1", 2).unwrap();
    let report = run_program(&failing, &mut ProcessLauncher, AveragePolicy::Requested).unwrap();
    assert_eq!(report.successful, 0);
    assert_eq!(report.average_ms, 0.0);
}
