//! Human-readable rendering of raw log records.
//!
//! Layout follows protobuf text format: `field: value` lines, nested messages
//! as `name {` ... `}` blocks, repeated fields as one line per element.

use crate::parser::schema::{perf_header, PerfCtrDump, PerfCtrInfo, PerfCtrSample, PerfHeader};

const INDENT: &str = "  ";

/// Line-oriented builder with nesting
#[derive(Debug, Default)]
struct TextBuilder {
    out: String,
    depth: usize,
}

impl TextBuilder {
    fn field(&mut self, name: &str, value: impl std::fmt::Display) {
        self.line(&format!("{}: {}", name, value));
    }

    fn string(&mut self, name: &str, value: &str) {
        self.field(name, format_args!("\"{}\"", escape_text(value)));
    }

    fn open(&mut self, name: &str) {
        self.line(&format!("{} {{", name));
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Render the header record
///
/// **Public** - first block of the raw dump
pub fn format_header(header: &PerfHeader) -> String {
    let mut b = TextBuilder::default();

    if let Some(t) = &header.t_setup {
        b.open("t_setup");
        target_setup(&mut b, t);
        b.close();
    }
    if let Some(p) = &header.p_setup {
        b.open("p_setup");
        pirate_setup(&mut b, p);
        b.close();
    }
    if let Some(r) = &header.reference {
        b.open("reference");
        sample(&mut b, r);
        b.close();
    }
    b.field("no_reference", header.no_reference);

    b.finish()
}

/// Render one sample record
///
/// **Public** - one block per sample in the raw dump
pub fn format_dump(dump: &PerfCtrDump) -> String {
    let mut b = TextBuilder::default();

    if let Some(t) = &dump.t_sample {
        b.open("t_sample");
        sample(&mut b, t);
        b.close();
    }
    for p in &dump.p_sample {
        b.open("p_sample");
        sample(&mut b, p);
        b.close();
    }

    b.finish()
}

fn target_setup(b: &mut TextBuilder, t: &perf_header::TargetSetup) {
    b.field("cpu", t.cpu);
    b.field("sample_period", t.sample_period);
    b.string("command", &t.command);
    b.field("n_ctrs", t.n_ctrs);
    for c in &t.ctr {
        counter_info(b, c);
    }
}

fn pirate_setup(b: &mut TextBuilder, p: &perf_header::PirateSetup) {
    b.field("ways", p.ways);
    b.field("cache_size", p.cache_size);
    b.field("way_size", p.way_size);
    b.field("stride", p.stride);
    b.field("no_sweep", p.no_sweep);
    b.field("n_pirates", p.n_pirates);
    b.field("n_ctrs", p.n_ctrs);
    for c in &p.ctr {
        counter_info(b, c);
    }
    for cpu in &p.cpu {
        b.field("cpu", cpu);
    }
}

fn counter_info(b: &mut TextBuilder, c: &PerfCtrInfo) {
    b.open("ctr");
    b.field("id", c.id);
    b.string("name", &c.name);
    b.field("type", c.r#type);
    b.field("config", c.config);
    b.field("config1", c.config1);
    b.field("config2", c.config2);
    b.close();
}

/// Escape a string the way protobuf text format does
///
/// **Private** - printable ASCII passes through, everything else is written
/// byte by byte as a three-digit octal escape
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        match byte {
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'"' => out.push_str("\\\""),
            b'\'' => out.push_str("\\'"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03o}", byte)),
        }
    }
    out
}

fn sample(b: &mut TextBuilder, s: &PerfCtrSample) {
    b.field("size", s.size);
    for v in &s.ctr {
        b.field("ctr", v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_dump() {
        let dump = PerfCtrDump {
            t_sample: Some(PerfCtrSample {
                size: 64,
                ctr: vec![10, 20],
            }),
            p_sample: vec![PerfCtrSample {
                size: 32,
                ctr: vec![1],
            }],
        };

        let expected = "\
t_sample {
  size: 64
  ctr: 10
  ctr: 20
}
p_sample {
  size: 32
  ctr: 1
}
";
        assert_eq!(format_dump(&dump), expected);
    }

    #[test]
    fn test_format_header_nested_counter() {
        let header = PerfHeader {
            t_setup: Some(perf_header::TargetSetup {
                command: "ls \"-l\"".to_string(),
                ctr: vec![PerfCtrInfo {
                    id: 0,
                    name: "cycles".to_string(),
                    ..Default::default()
                }],
                n_ctrs: 1,
                ..Default::default()
            }),
            ..Default::default()
        };

        let text = format_header(&header);
        assert!(text.starts_with("t_setup {\n  cpu: 0\n"));
        assert!(text.contains("  command: \"ls \\\"-l\\\"\"\n"));
        assert!(text.contains("  ctr {\n    id: 0\n    name: \"cycles\"\n"));
        assert!(text.ends_with("}\nno_reference: false\n"));
        assert!(!text.contains("p_setup"));
    }

    #[test]
    fn test_string_escapes_like_protobuf() {
        assert_eq!(escape_text("caf\u{e9} \u{1}x"), "caf\\303\\251 \\001x");
        assert_eq!(escape_text("a\tb\n'c'\\"), "a\\tb\\n\\'c\\'\\\\");

        let header = PerfHeader {
            t_setup: Some(perf_header::TargetSetup {
                command: "./run\u{7f}".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(format_header(&header).contains("  command: \"./run\\177\"\n"));
    }
}
