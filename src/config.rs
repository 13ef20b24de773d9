use serde::Deserialize;
use std::path::PathBuf;

use crate::waveform::summary::Mode;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub waveform: WaveformConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct WaveformConfig {
    #[serde(default)]
    pub mode: Mode,
    /// Segment count; falls back to the mode's default when absent
    pub resolution: Option<usize>,
    pub aspect_ratio: Option<f32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
        }
    }
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("waveforms")
}

pub fn load_config(path: &PathBuf) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}
