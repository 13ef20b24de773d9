mod audio;
mod batch;
mod cli;
mod config;
mod error;
mod render;
mod waveform;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use error::WavetraceError;
use waveform::summary::Mode;
use waveform::Options;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    // Load config: explicit --config path, or auto-detect wavetrace.toml / global config
    let config_path = cli.config.clone().or_else(|| {
        let local = std::path::PathBuf::from("wavetrace.toml");
        if local.exists() {
            return Some(local);
        }
        if let Some(home) = dirs::home_dir() {
            let xdg = home.join(".config").join("wavetrace").join("config.toml");
            if xdg.exists() {
                return Some(xdg);
            }
        }
        if let Some(config_dir) = dirs::config_dir() {
            let platform = config_dir.join("wavetrace").join("config.toml");
            if platform.exists() {
                return Some(platform);
            }
        }
        None
    });
    let cfg = match config_path {
        Some(ref path) => match config::load_config(path) {
            Some(cfg) => {
                log::info!("Loaded config from {}", path.display());
                cfg
            }
            None => {
                log::warn!("Failed to load config from {}", path.display());
                config::Config::default()
            }
        },
        None => config::Config::default(),
    };

    // Resolution and aspect ratio define a canvas together; a lone
    // override would silently pair with an unrelated default.
    if cli.resolution.is_some() != cli.aspect_ratio.is_some() {
        return Err(WavetraceError::InvalidConfig(
            "--resolution and --aspect-ratio must be given together".into(),
        )
        .into());
    }

    // Merge: config values apply only when the CLI flag is absent
    let mode: Mode = cli.mode.unwrap_or(cfg.waveform.mode);
    let resolution = cli
        .resolution
        .or(cfg.waveform.resolution)
        .unwrap_or_else(|| mode.default_resolution());
    let aspect_ratio = cli
        .aspect_ratio
        .or(cfg.waveform.aspect_ratio)
        .unwrap_or(10.0);
    let out_dir = if cli.out_dir == config::default_out_dir() {
        cfg.output.dir
    } else {
        cli.out_dir
    };

    let opts = Options {
        mode,
        resolution,
        aspect_ratio,
    };
    opts.validate()?;

    if cli.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.jobs)
            .build_global()
            .context("Failed to configure worker pool")?;
    }

    if !cli.input.exists() {
        return Err(WavetraceError::InputNotFound(cli.input).into());
    }

    // No output is possible if the output directory cannot exist
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    log::info!(
        "Mode: {:?}, resolution: {}, aspect ratio: {}:1",
        opts.mode,
        opts.resolution,
        opts.aspect_ratio
    );

    if cli.input.is_dir() {
        let files = batch::collect_audio_files(&cli.input)?;
        if files.is_empty() {
            log::info!("No audio files found in {}, nothing to do", cli.input.display());
            return Ok(());
        }
        log::info!("Found {} audio files", files.len());

        let summary = batch::run(&files, &out_dir, &opts);
        log::info!(
            "{} generated, {} failed, SVGs in {}",
            summary.generated,
            summary.failed,
            out_dir.display()
        );
        if summary.failed > 0 {
            anyhow::bail!("{} of {} files failed", summary.failed, files.len());
        }
    } else {
        let out_path = batch::process_file(&cli.input, &out_dir, &opts)?;
        log::info!("Wrote {}", out_path.display());
    }

    Ok(())
}
