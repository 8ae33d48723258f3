//! CSV rows and the descriptive header comment.
//!
//! A row is the sample size, every target counter, then every pirate's
//! counters in pirate order. The header comment numbers the columns so the
//! field numbers line up with the rows that follow.

use crate::aggregator::Dump;
use crate::parser::schema::PerfHeader;
use std::io::Write;

/// Render one sample (raw or aggregated) as a single CSV line
///
/// **Public** - main entry point for row output
///
/// # Example
/// ```
/// use pirate_log::aggregator::Dump;
/// use pirate_log::output::render_dump;
///
/// let dump = Dump::new(64, vec![10, 20].into(), vec![vec![1, 2, 3].into()]);
/// assert_eq!(render_dump(&dump, ","), "64,10,20,1,2,3");
/// ```
pub fn render_dump(dump: &Dump, separator: &str) -> String {
    let counters = dump
        .target
        .values()
        .iter()
        .chain(dump.pirates.iter().flat_map(|p| p.values()));

    std::iter::once(dump.size.to_string())
        .chain(counters.map(u64::to_string))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Numbered column descriptions: cache size, target counters, pirate counters
///
/// **Public** - numbering starts at `first_field` and is contiguous
pub fn column_labels(header: &PerfHeader, first_field: usize) -> Vec<(usize, String)> {
    let target = header.target();
    let pirate = header.pirate();

    std::iter::once("Target cache size".to_string())
        .chain(target.ctr.iter().map(|c| c.name.clone()))
        .chain(pirate.ctr.iter().map(|c| c.name.clone()))
        .enumerate()
        .map(|(i, label)| (first_field + i, label))
        .collect()
}

/// Render the header as comment lines describing the run and the columns
///
/// **Public** - printed before the CSV rows unless disabled
///
/// # Arguments
/// * `header` - Decoded log header
/// * `comment` - Prefix for every line (e.g. `#`)
/// * `first_field` - Column number of the size field
pub fn render_header(header: &PerfHeader, comment: &str, first_field: usize) -> Vec<String> {
    let target = header.target();
    let pirate = header.pirate();
    let reference = header.reference.clone().unwrap_or_default();

    let labels = column_labels(header, first_field);
    let (size_field, counters) = labels.split_at(1);
    let (target_fields, pirate_fields) = counters.split_at(target.ctr.len());

    let mut lines = vec![
        format!("{}: {}", size_field[0].0, size_field[0].1),
        String::new(),
        "Target:".to_string(),
        format!("\tCommand: {}", target.command),
        format!("\tCPU: {}", target.cpu),
        format!("\tSample period: {}", target.sample_period),
        "\tCounters:".to_string(),
    ];
    lines.extend(counter_lines(target_fields));

    lines.extend([
        "Pirate:".to_string(),
        format!("\tWays: {}", pirate.ways),
        format!("\tCache size: {}", pirate.cache_size),
        format!("\tWay size: {}", pirate.way_size),
        format!("\tStride: {}", pirate.stride),
        format!("\tCPU: {}", join_values(&pirate.cpu, ",")),
        "\tCounters:".to_string(),
    ]);
    lines.extend(counter_lines(pirate_fields));

    lines.extend([
        format!("\tReference size:\t{}", reference.size),
        format!("\tReference:\t{}", join_values(&reference.ctr, " ")),
    ]);

    lines
        .into_iter()
        .map(|line| format!("{} {}", comment, line))
        .collect()
}

/// Write header lines, one per line
pub fn write_header<W: Write + ?Sized>(
    writer: &mut W,
    header: &PerfHeader,
    comment: &str,
    first_field: usize,
) -> std::io::Result<()> {
    for line in render_header(header, comment, first_field) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Write one CSV row
pub fn write_dump<W: Write + ?Sized>(
    writer: &mut W,
    dump: &Dump,
    separator: &str,
) -> std::io::Result<()> {
    writeln!(writer, "{}", render_dump(dump, separator))
}

fn counter_lines(fields: &[(usize, String)]) -> impl Iterator<Item = String> + '_ {
    fields
        .iter()
        .map(|(n, name)| format!("\t\t {}: {}", n, name))
}

fn join_values<T: ToString>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
