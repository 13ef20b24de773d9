use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::audio::decode;
use crate::error::WavetraceError;
use crate::waveform::{self, Options};

/// Extensions considered audio input when scanning a directory.
const AUDIO_EXTENSIONS: &[&str] = &["m4a", "mp3", "wav", "flac", "ogg", "aac"];

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub generated: usize,
    pub failed: usize,
}

/// Audio files in `dir`, matched by extension and sorted by name so a
/// batch run visits files in a stable order.
pub fn collect_audio_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Run one file through the pipeline and write its SVG next to the
/// other outputs. Decode and write failures come back to the caller;
/// nothing here touches state shared with other files.
pub fn process_file(
    input: &Path,
    out_dir: &Path,
    opts: &Options,
) -> Result<PathBuf, WavetraceError> {
    let audio = decode::decode(input)?;
    log::debug!(
        "Decoded {}: {} samples, {}Hz, {:.1}s",
        input.display(),
        audio.samples.len(),
        audio.sample_rate,
        audio.samples.len() as f32 / audio.sample_rate as f32
    );
    let svg = waveform::render_svg(&audio.samples, opts);

    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let out_path = out_dir.join(format!("{}.svg", stem.to_string_lossy()));
    std::fs::write(&out_path, svg)?;
    Ok(out_path)
}

/// Process every file, in parallel, isolating per-file failures: a file
/// that will not decode is logged with its cause and counted, and the
/// rest of the batch carries on.
pub fn run(files: &[PathBuf], out_dir: &Path, opts: &Options) -> BatchSummary {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files ({eta} remaining)")
            .unwrap()
            .progress_chars("=>-"),
    );

    let outcomes: Vec<Result<PathBuf, WavetraceError>> = files
        .par_iter()
        .map(|file| {
            let outcome = process_file(file, out_dir, opts);
            match &outcome {
                Ok(out_path) => log::debug!(
                    "{} -> {}",
                    file.display(),
                    out_path.display()
                ),
                Err(err) => log::error!("{err}"),
            }
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    let generated = outcomes.iter().filter(|o| o.is_ok()).count();
    BatchSummary {
        generated,
        failed: outcomes.len() - generated,
    }
}
