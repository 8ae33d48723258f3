use pirate_log::aggregator::Dump;
use pirate_log::output::{column_labels, render_dump, render_header, validate_path, write_dump};
use pirate_log::parser::{perf_header, PerfCtrInfo, PerfCtrSample, PerfHeader};
use pretty_assertions::assert_eq;
use std::path::Path;

fn counters(names: &[&str]) -> Vec<PerfCtrInfo> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| PerfCtrInfo {
            id: i as i32,
            name: name.to_string(),
            ..Default::default()
        })
        .collect()
}

fn header(target: &[&str], pirate: &[&str]) -> PerfHeader {
    PerfHeader {
        t_setup: Some(perf_header::TargetSetup {
            ctr: counters(target),
            n_ctrs: target.len() as i32,
            ..Default::default()
        }),
        p_setup: Some(perf_header::PirateSetup {
            ctr: counters(pirate),
            n_ctrs: pirate.len() as i32,
            cpu: vec![2, 4, 6],
            ..Default::default()
        }),
        reference: Some(PerfCtrSample {
            size: 1024,
            ctr: vec![11, 22, 33],
        }),
        no_reference: false,
    }
}

/// Pull the leading field number out of a `"\t\t N: name"` style line
fn field_number(line: &str) -> Option<usize> {
    let body = line.trim_start_matches('#').trim_start();
    let (num, _) = body.split_once(':')?;
    num.trim().parse().ok()
}

#[test]
fn test_render_dump_exact() {
    let dump = Dump::new(64, vec![10, 20].into(), vec![vec![1, 2, 3].into()]);
    assert_eq!(render_dump(&dump, ","), "64,10,20,1,2,3");
}

#[test]
fn test_render_dump_multiple_pirates_default_separator() {
    let dump = Dump::new(
        512,
        vec![100].into(),
        vec![vec![1, 2].into(), vec![3, 4].into()],
    );
    assert_eq!(render_dump(&dump, " "), "512 100 1 2 3 4");
}

#[test]
fn test_render_dump_multichar_separator() {
    let dump = Dump::new(1, vec![2].into(), vec![vec![3].into()]);
    assert_eq!(render_dump(&dump, ", "), "1, 2, 3");
}

#[test]
fn test_header_field_numbering() {
    let lines = render_header(&header(&["t0", "t1"], &["p0", "p1", "p2"]), "#", 1);

    let numbers: Vec<usize> = lines.iter().filter_map(|l| field_number(l)).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);

    assert_eq!(lines[0], "# 1: Target cache size");
    assert!(lines.contains(&"# \t\t 2: t0".to_string()));
    assert!(lines.contains(&"# \t\t 6: p2".to_string()));
}

#[test]
fn test_header_numbering_matches_columns() {
    let h = header(&["a", "b", "c"], &["x"]);
    let labels = column_labels(&h, 1);

    let dump = Dump::new(8, vec![1, 2, 3].into(), vec![vec![4].into()]);
    let row = render_dump(&dump, ",");

    assert_eq!(labels.len(), row.split(',').count());
    assert_eq!(labels.last().unwrap(), &(5, "x".to_string()));
}

#[test]
fn test_header_geometry_lines() {
    let lines = render_header(&header(&[], &[]), "#", 1);

    assert!(lines.contains(&"# \tCPU: 2,4,6".to_string()));
    assert!(lines.contains(&"# \tReference size:\t1024".to_string()));
    assert_eq!(lines.last().unwrap(), "# \tReference:\t11 22 33");
}

#[test]
fn test_write_dump_appends_newline() {
    let mut buf = Vec::new();
    let dump = Dump::new(2, vec![5].into(), vec![]);
    write_dump(&mut buf, &dump, " ").unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "2 5\n");
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}
