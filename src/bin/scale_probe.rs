//! Runs the linear pass over growing inputs and checks it against the
//! quadratic baseline.
//!
//! `cargo run --release --bin scale_probe -- --format=table --verify-limit=512`

use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use manacher_step::utils::naive_longest;
use manacher_step::{Longest, Stepper};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];

const SCENARIOS: &[(&str, fn(usize) -> String)] = &[
    ("binary_random", binary_text),
    ("uniform", uniform_text),
    ("nested", nested_text),
];

const USAGE: &str = "\
Usage: scale_probe [--format=csv|table|json] [--verify-limit=N]

  --format=FMT        output format (default: csv)
  --verify-limit=N    largest input checked against the baseline (default: 2048)
  -h, --help          print this message
";

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("scale_probe: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut rows = Vec::new();
    for &(name, make) in SCENARIOS {
        eprintln!("scenario {name}");
        for &len in SIZES {
            let row = measure(name, len, make(len), &options, &mut sys);
            eprintln!(
                "  len={:>8} longest={:>8} expansions={:>8} {:.4}s {}",
                row.len,
                row.longest,
                row.expansions,
                row.wall_s,
                row.verdict.label()
            );
            rows.push(row);
        }
    }

    summarize(&rows);
    match options.format {
        Format::Csv => write_csv(&rows),
        Format::Table => write_table(&rows),
        Format::Json => write_json(&rows),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Table,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    format: Format,
    verify_limit: usize,
}

impl Options {
    /// `Ok(None)` means help was requested.
    fn parse<I>(args: I) -> Result<Option<Self>, String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut options = Options {
            format: Format::Csv,
            verify_limit: 2048,
        };
        for arg in args {
            let arg = arg.as_ref();
            if arg == "-h" || arg == "--help" {
                return Ok(None);
            }
            match arg.split_once('=') {
                Some(("--format", "csv")) => options.format = Format::Csv,
                Some(("--format", "table")) => options.format = Format::Table,
                Some(("--format", "json")) => options.format = Format::Json,
                Some(("--format", other)) => return Err(format!("unknown format '{other}'")),
                Some(("--verify-limit", n)) => {
                    options.verify_limit = n
                        .parse()
                        .map_err(|_| format!("bad verify limit '{n}'"))?;
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }
        Ok(Some(options))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Verdict {
    Skipped,
    Match,
    Mismatch(String),
}

impl Verdict {
    fn label(&self) -> &'static str {
        match self {
            Verdict::Skipped => "not_checked",
            Verdict::Match => "passed",
            Verdict::Mismatch(_) => "failed",
        }
    }

    fn detail(&self) -> &str {
        match self {
            Verdict::Mismatch(detail) => detail,
            _ => "",
        }
    }
}

struct Row {
    scenario: &'static str,
    len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    longest: usize,
    expansions: usize,
    verdict: Verdict,
}

fn measure(
    scenario: &'static str,
    len: usize,
    input: String,
    options: &Options,
    sys: &mut System,
) -> Row {
    let before = rss_kib(sys);
    let start = Instant::now();
    let done = Stepper::for_input(&input).map(Stepper::run_to_completion);
    let wall_s = start.elapsed().as_secs_f64();
    let rss_delta_kib = rss_kib(sys).saturating_sub(before);

    let (longest, expansions, verdict) = match done {
        Ok(done) if len <= options.verify_limit => {
            let verdict = compare(&done.longest, &naive_longest(&input));
            (done.longest.len, done.stats.total_expansions, verdict)
        }
        Ok(done) => (done.longest.len, done.stats.total_expansions, Verdict::Skipped),
        Err(err) => (0, 0, Verdict::Mismatch(err.to_string())),
    };

    Row {
        scenario,
        len,
        wall_s,
        rss_delta_kib,
        longest,
        expansions,
        verdict,
    }
}

fn compare(got: &Longest, baseline: &Longest) -> Verdict {
    if got == baseline {
        Verdict::Match
    } else {
        Verdict::Mismatch(format!(
            "baseline start={} len={}, linear start={} len={}",
            baseline.start, baseline.len, got.start, got.len
        ))
    }
}

/// Per-scenario verdict counts and ns/char spread on stderr.
fn summarize(rows: &[Row]) {
    let mut by_scenario: BTreeMap<&str, Vec<&Row>> = BTreeMap::new();
    for row in rows {
        by_scenario.entry(row.scenario).or_default().push(row);
    }
    eprintln!();
    for (scenario, rows) in by_scenario {
        let failed = rows
            .iter()
            .filter(|r| matches!(r.verdict, Verdict::Mismatch(_)))
            .count();
        let ns: Vec<f64> = rows
            .iter()
            .map(|r| r.wall_s * 1e9 / r.len.max(1) as f64)
            .collect();
        let lo = ns.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = ns.iter().copied().fold(0.0, f64::max);
        eprintln!("{scenario}: failed={failed} ns/char {lo:.1}..{hi:.1}");
        for row in rows.iter().filter(|r| !r.verdict.detail().is_empty()) {
            eprintln!("  len={}: {}", row.len, row.verdict.detail());
        }
    }
}

const COLUMNS: [&str; 7] = [
    "scenario",
    "len",
    "wall_s",
    "rss_delta_kib",
    "longest",
    "expansions",
    "status",
];

fn cells(row: &Row) -> [String; 7] {
    [
        row.scenario.to_string(),
        row.len.to_string(),
        format!("{:.4}", row.wall_s),
        row.rss_delta_kib.to_string(),
        row.longest.to_string(),
        row.expansions.to_string(),
        row.verdict.label().to_string(),
    ]
}

fn write_csv(rows: &[Row]) {
    println!("{},detail", COLUMNS.join(","));
    for row in rows {
        let detail = row.verdict.detail().replace('"', "'");
        println!("{},\"{detail}\"", cells(row).join(","));
    }
}

fn write_table(rows: &[Row]) {
    let all: Vec<[String; 7]> = rows.iter().map(cells).collect();
    let widths: Vec<usize> = (0..COLUMNS.len())
        .map(|c| all.iter().map(|r| r[c].len()).fold(COLUMNS[c].len(), usize::max))
        .collect();
    let line = |fields: &[String]| {
        fields
            .iter()
            .zip(&widths)
            .map(|(f, &w)| format!("{f:>w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };
    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    println!("{}", line(&header));
    for (fields, row) in all.iter().zip(rows) {
        println!("{}  {}", line(fields), row.verdict.detail());
    }
}

fn write_json(rows: &[Row]) {
    let objects: Vec<String> = rows
        .iter()
        .map(|row| {
            let detail = match &row.verdict {
                Verdict::Mismatch(d) => format!("\"{}\"", d.replace('"', "'")),
                _ => "null".to_string(),
            };
            format!(
                "  {{\"scenario\":\"{}\",\"len\":{},\"wall_s\":{:.4},\"rss_delta_kib\":{},\
                 \"longest\":{},\"expansions\":{},\"status\":\"{}\",\"detail\":{detail}}}",
                row.scenario,
                row.len,
                row.wall_s,
                row.rss_delta_kib,
                row.longest,
                row.expansions,
                row.verdict.label()
            )
        })
        .collect();
    println!("[\n{}\n]", objects.join(",\n"));
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

/// Seeded random `a`/`b` text, identical on every run.
fn binary_text(len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(0x2545_F491_4F6C_DD1D);
    (0..len)
        .map(|_| if rng.gen_range(0..2) == 0 { 'a' } else { 'b' })
        .collect()
}

fn uniform_text(len: usize) -> String {
    "a".repeat(len)
}

/// `a b a c a b a d …`: every prefix of length 2^k - 1 is a palindrome.
fn nested_text(len: usize) -> String {
    (1..=len)
        .map(|i| char::from(b'a' + (i.trailing_zeros() % 26) as u8))
        .collect()
}
