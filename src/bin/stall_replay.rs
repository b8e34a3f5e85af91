//! stall_replay - run recorded tracker output through a stall qualifier

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use stallstate_rs::{JsonLinesSource, QualifierConfig, StallPipeline, StateLabel, TrackId};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the qualifier TOML config.
    #[arg(long, env = "STALL_CONFIG")]
    config: PathBuf,
    /// JSON-lines tracker log; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Serialize)]
struct FrameStates<'a> {
    frame: u64,
    states: &'a BTreeMap<TrackId, StateLabel>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = QualifierConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    log::info!(
        "monitoring region {:?}, leaver memory {} ticks ({:?})",
        config.monitored_region,
        config.left_tracking_iterations,
        config.countdown
    );

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut pipeline = StallPipeline::new(JsonLinesSource::new(reader), config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while let Some(states) = pipeline.process_frame()? {
        let record = FrameStates {
            frame: pipeline.monitor().frame_id(),
            states: &states,
        };
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }

    log::info!(
        "replayed {} frames, occupant at end: {:?}",
        pipeline.monitor().frame_id(),
        pipeline.monitor().qualifier().occupant()
    );
    Ok(())
}
