use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use era_convert::sanity::{self, TableCheck};
use era_convert::{
    CivilCalendar, CivilDate, Converter, EraSegment, MentionFinder, Registry, Sexagenary,
    scanner, sexagenary,
};
use era_types::{Conversion, Rendering, SegmentRecord, SuggestionRecord, TableCheckRecord};

type CliResult = Result<(), Box<dyn StdError>>;

#[derive(Parser)]
#[command(
    name = "era_convert",
    about = "Convert between Chinese era dates and civil dates"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert era dates to civil dates, e.g. "漢平帝元始元年正月朔"
    ToDate {
        #[arg(required = true)]
        dates: Vec<String>,
    },
    /// Render a civil date in every era current on it, e.g. "237年4月13日"
    FromDate { date: String },
    /// Number of days in the month of an era date
    MonthLength { date: String },
    /// Sexagenary label of the year of an era date
    YearSexagenary { date: String },
    /// List consecutive sexagenary labels
    Sexagenaries {
        #[arg(default_value = "甲子")]
        start: String,
        #[arg(short, long, default_value_t = 60)]
        count: usize,
    },
    /// List era segments, optionally for one regime (e.g. "魏")
    Segments {
        #[arg(long)]
        regime: Option<String>,
    },
    /// Admissible day names for the month of an era date
    Suggest { date: String },
    /// Verify the year tables against their month lengths
    Check,
    /// Find and convert era dates in a directory of .txt files
    Scan {
        /// Path to corpus root directory
        #[arg(default_value = ".")]
        corpus: PathBuf,
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> CliResult {
    let registry = Registry::new()?;
    let converter = Converter::new(&registry);

    match command {
        Command::ToDate { dates } => {
            let out = dates
                .iter()
                .map(|d| to_date(&converter, d))
                .collect::<Result<Vec<_>, _>>()?;
            print_json(&out)
        }
        Command::FromDate { date } => {
            let date: CivilDate = date.parse()?;
            print_json(&Rendering {
                civil: date.to_string(),
                iso: date.iso(),
                day_label: day_label(&registry, date),
                renderings: converter.from_date(date),
            })
        }
        Command::MonthLength { date } => print_json(&converter.month_length_str(&date)?),
        Command::YearSexagenary { date } => {
            let parsed = converter.parse(&date)?;
            print_json(&converter.year_sexagenary(&parsed)?.to_string())
        }
        Command::Sexagenaries { start, count } => {
            let start: Sexagenary = start.parse()?;
            let labels: Vec<String> = sexagenary::sequence(start, count)
                .iter()
                .map(Sexagenary::to_string)
                .collect();
            print_json(&labels)
        }
        Command::Segments { regime } => {
            let out: Vec<SegmentRecord> = registry
                .segments()
                .iter()
                .filter(|s| regime.as_deref().is_none_or(|r| s.regime.as_chinese() == r))
                .map(segment_record)
                .collect();
            print_json(&out)
        }
        Command::Suggest { date } => {
            let parsed = converter.parse(&date)?;
            let days = converter.suggest_days(&parsed)?;
            print_json(&SuggestionRecord {
                month: parsed.to_string(),
                length: days.ordinal.len() as u32,
                ordinal: days.ordinal.iter().map(|d| d.to_string()).collect(),
                sexagenary: days.sexagenary.iter().map(Sexagenary::to_string).collect(),
            })
        }
        Command::Check => {
            let checks = sanity::check_all(&registry);
            let out: Vec<TableCheckRecord> = checks.iter().map(check_record).collect();
            print_json(&out)?;
            if checks.iter().all(|c| c.ok) {
                Ok(())
            } else {
                Err("year table check failed".into())
            }
        }
        Command::Scan { corpus, output } => run_scan(&registry, &corpus, output.as_deref()),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn print_json<T: serde::Serialize>(data: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> CliResult {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, &json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    eprintln!("  {} ({} bytes)", path.display(), json.len());
    Ok(())
}

fn day_label(registry: &Registry, date: CivilDate) -> String {
    Sexagenary::of_day(registry.calendar().to_ordinal_day(date)).to_string()
}

fn to_date(converter: &Converter<'_>, input: &str) -> era_convert::Result<Conversion> {
    let parsed = converter.parse(input)?;
    let date = converter.to_date(&parsed)?;
    Ok(Conversion {
        input: input.to_string(),
        normalized: parsed.to_string(),
        civil: date.to_string(),
        iso: date.iso(),
        day_label: day_label(converter.registry(), date),
    })
}

fn segment_record(s: &EraSegment) -> SegmentRecord {
    SegmentRecord {
        era: s.era.clone(),
        regime: s.regime.as_chinese().to_string(),
        start: s.start.to_string(),
        start_day: s.start_day.to_string(),
        end_day: s.end_day.to_string(),
        previous: s.previous.clone(),
        next: s.next.clone(),
    }
}

fn check_record(c: &TableCheck) -> TableCheckRecord {
    let conflict = c.conflict.as_ref();
    TableCheckRecord {
        table: c.table.to_string(),
        ok: c.ok,
        years_checked: c.years_checked,
        year: conflict.map(|x| x.year),
        stored: conflict.map(|x| x.stored.to_string()),
        calculated: conflict.and_then(|x| x.calculated).map(|d| d.to_string()),
        detail: conflict.map(|x| x.detail.clone()),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  SCAN MODE: era dates in a text corpus
// ═══════════════════════════════════════════════════════════════════════

fn run_scan(registry: &Registry, root: &Path, output: Option<&Path>) -> CliResult {
    eprintln!("Scanning corpus at: {}", root.display());
    let finder = MentionFinder::new(registry)?;
    let out = scanner::scan_mentions(&finder, root);
    eprintln!(
        "Found {} era dates in {} files ({} converted)",
        out.mentions.len(),
        out.files,
        out.converted()
    );
    match output {
        Some(path) => write_json(path, &out),
        None => print_json(&out),
    }
}
