use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tracesift::patterns::{PatternSet, Role, DEFAULT_DISPATCH_MARKER};
use tracesift::report;
use tracesift::session::{Session, TraceLog};

#[derive(Parser, Debug)]
#[command(name = "tracesift", version, about = "Trace log segmentation and correlation")]
struct Cli {
    /// Input trace log (`-` for stdin)
    input: String,

    /// Extraction role: sql | dispatch | error | custom
    #[arg(long, default_value = "sql")]
    role: String,

    /// Pattern for `--role custom`
    #[arg(long)]
    pattern: Option<String>,

    /// Marker literal opening a dispatch block
    #[arg(long, default_value = DEFAULT_DISPATCH_MARKER)]
    dispatch_marker: String,

    /// Minimum correlation-id token length
    #[arg(long, default_value_t = 1)]
    id_min: usize,
    /// Maximum correlation-id token length
    #[arg(long, default_value_t = 16)]
    id_max: usize,

    /// Emit correlation groups instead of segments
    #[arg(long, default_value_t = false)]
    group: bool,

    /// Emit per-segment frequency counts instead of segments
    #[arg(long, default_value_t = false)]
    freq: bool,

    /// Output format: text | json | csv (csv applies to --freq)
    #[arg(long, default_value = "text")]
    format: String,

    /// Write output to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_role(s: &str) -> anyhow::Result<Role> {
    match s.to_ascii_lowercase().as_str() {
        "sql" => Ok(Role::Sql),
        "dispatch" | "dsc" => Ok(Role::ContextDispatch),
        "error" | "err" => Ok(Role::Error),
        "custom" | "cus" => Ok(Role::Custom),
        other => anyhow::bail!("unknown role: {other} (expected sql|dispatch|error|custom)"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let role = parse_role(&cli.role)?;

    let log = if cli.input == "-" {
        let mut stdin = io::stdin().lock();
        TraceLog::from_reader(&mut stdin)?
    } else {
        TraceLog::from_path(&cli.input).with_context(|| format!("reading {}", cli.input))?
    };
    tracing::info!(lines = log.lines().len(), "loaded trace log");

    let patterns = PatternSet::configured((cli.id_min, cli.id_max), &cli.dispatch_marker);
    let mut session = Session::with_patterns(log, patterns);
    if let Some(p) = &cli.pattern {
        session.set_custom_pattern(p.clone());
    }

    let mut out: Box<dyn Write> = match &cli.out {
        Some(path) => {
            let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(io::stdout().lock()),
    };

    if cli.group {
        let groups = session.group();
        tracing::info!(groups = groups.len(), "grouped correlation ids");
        if cli.format == "json" {
            writeln!(out, "{}", report::groups_to_json(&groups)?)?;
        } else {
            for g in &groups {
                writeln!(out, "{}\t{}", g.first_line, g.id)?;
            }
        }
    } else if cli.freq {
        let table = session.frequencies(role)?;
        match cli.format.as_str() {
            "json" => writeln!(out, "{}", report::frequencies_to_json(&table)?)?,
            "csv" => report::write_frequency_csv(&mut out, &table)?,
            _ => {
                if cli.out.is_none() && atty::is(atty::Stream::Stdout) {
                    writeln!(out, "{:>8}  segment", "count")?;
                }
                for row in report::frequency_rows(&table) {
                    // Multi-line segments show their first line only in
                    // the human table; json/csv carry the full text.
                    let head = row.segment.lines().next().unwrap_or("");
                    writeln!(out, "{:>8}  {}", row.count, head)?;
                }
            }
        }
    } else {
        let segments = session.extract(role)?;
        tracing::info!(segments = segments.len(), "extracted segments");
        report::write_segments(&mut out, &segments)?;
    }

    out.flush()?;
    Ok(())
}
