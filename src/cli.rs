use clap::Parser;
use std::path::PathBuf;

use crate::waveform::summary::Mode;

#[derive(Parser, Debug)]
#[command(name = "wavetrace", about = "Generate scalable SVG waveform previews from audio files")]
pub struct Cli {
    /// Input audio file, or a directory to process in batch
    pub input: PathBuf,

    /// Output directory for generated SVG files (created if absent)
    #[arg(short, long, default_value = "waveforms")]
    pub out_dir: PathBuf,

    /// Waveform style
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of bars (bars mode) or envelope points (envelope mode).
    /// Must be given together with --aspect-ratio.
    #[arg(short, long)]
    pub resolution: Option<usize>,

    /// Canvas width:height ratio. Must be given together with --resolution.
    #[arg(short, long)]
    pub aspect_ratio: Option<f32>,

    /// Worker threads for batch mode (0 = one per CPU core)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Config file path (default: ./wavetrace.toml or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
