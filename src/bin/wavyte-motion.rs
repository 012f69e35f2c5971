use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavyte_motion::{AlertConfig, AlertPipeline};

#[derive(Parser, Debug)]
#[command(name = "wavyte-motion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check an alert config and print every issue.
    Validate(ValidateArgs),
    /// Evaluate an alert at a fixed frame rate and dump the frames as JSON.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input alert JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input alert JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frames per second.
    #[arg(long)]
    fps: f64,

    /// Seconds to evaluate. Defaults to the alert duration.
    #[arg(long)]
    seconds: Option<f64>,

    /// Output JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_alert_json(path: &Path) -> anyhow::Result<AlertConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read alert config '{}'", path.display()))?;
    let config = AlertConfig::from_json(&s)
        .with_context(|| format!("parse alert config '{}'", path.display()))?;
    Ok(config)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let config = read_alert_json(&args.in_path)?;
    let report = config.validation();
    for issue in &report.warnings {
        println!("warning: {issue}");
    }
    for issue in &report.errors {
        println!("error: {issue}");
    }
    if !report.valid {
        anyhow::bail!(
            "'{}' has {} validation error(s)",
            args.in_path.display(),
            report.errors.len()
        );
    }
    eprintln!("{} is valid", args.in_path.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let config = read_alert_json(&args.in_path)?;
    let seconds = args.seconds.unwrap_or(config.duration_ms / 1000.0);
    let mut pipeline = AlertPipeline::new(config);
    let frames = pipeline
        .render_frames(args.fps, seconds)
        .context("evaluate frames")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &frames)
                .with_context(|| format!("write frames '{}'", out.display()))?;
            w.flush()
                .with_context(|| format!("flush '{}'", out.display()))?;
            eprintln!("wrote {} frames to {}", frames.len(), out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &frames).context("write frames to stdout")?;
            writeln!(w).context("write frames to stdout")?;
        }
    }
    Ok(())
}
