//! Surface Baker: bakes a rotating surface into OLED animation frames
//!
//! Modes:
//! - `table` (default): packed frames as C arrays, to stdout or `--out`
//! - `ascii`: live shaded preview in the terminal
//! - `bitmap`: live dithered preview in the terminal
//! - `png`: all dithered frames as one sprite sheet (`--out` required)

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use surface_baker::animation::{play, FixedDelay, FrameSequencer};
use surface_baker::config::{load_config, save_config, Config};
use surface_baker::output::{
    pack_bitmap, render_ascii, render_bitmap_ascii, save_sprite_sheet, write_frame_table, CLEAR_SCREEN,
};
use surface_baker::rasterizer::{BuiltinSurface, Surface, SurfaceKind};
use surface_baker::VERSION;

/// Bakes a rotating parametric surface into monochrome OLED animation frames
#[derive(Parser, Debug)]
#[command(name = "surface-baker", version, about)]
struct Cli {
    /// What to produce
    #[arg(value_enum, default_value_t = Mode::Table)]
    mode: Mode,

    /// Surface to render, overriding the config
    #[arg(long, value_enum)]
    surface: Option<SurfaceArg>,

    /// RON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (stdout for `table` when omitted)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the effective config to this file and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Packed frames as C arrays
    Table,
    /// Live shaded preview
    Ascii,
    /// Live dithered preview
    Bitmap,
    /// Sprite sheet of dithered frames
    Png,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceArg {
    Strip,
    Torus,
}

impl From<SurfaceArg> for SurfaceKind {
    fn from(arg: SurfaceArg) -> Self {
        match arg {
            SurfaceArg::Strip => SurfaceKind::TwistedStrip,
            SurfaceArg::Torus => SurfaceKind::Torus,
        }
    }
}

impl Cli {
    /// Cross-argument rules clap cannot express on its own
    fn check(&self) -> anyhow::Result<()> {
        if self.mode == Mode::Png && self.out.is_none() && self.dump_config.is_none() {
            bail!("png mode needs --out FILE");
        }
        Ok(())
    }
}

fn progress_bar(len: usize) -> anyhow::Result<ProgressBar> {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} baking [{bar:32}] {pos}/{len} frames")?.progress_chars("=> "),
    );
    Ok(bar)
}

/// Write every frame as a firmware table
fn bake_table(config: &Config, surface: &BuiltinSurface, out: Option<&Path>) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let progress = progress_bar(config.render.frame_count)?;
    for frame in FrameSequencer::new(&config.render, surface) {
        let bytes = pack_bitmap(&frame.bitmap);
        write_frame_table(
            &mut writer,
            &config.output.table_name,
            frame.index,
            &bytes,
            config.output.table_row_len,
        )
        .context("Failed to write frame table")?;
        progress.inc(1);
    }
    writer.flush().context("Failed to flush frame table")?;
    progress.finish_and_clear();

    if let Some(path) = out {
        info!("Wrote {} frames to {}", config.render.frame_count, path.display());
    }
    Ok(())
}

/// Animate in the terminal, one screen per frame
fn preview(config: &Config, surface: &BuiltinSurface, dithered: bool) -> anyhow::Result<()> {
    let mut pacing = FixedDelay(Duration::from_millis(config.output.frame_delay_ms));
    let stdout = io::stdout();
    play(&config.render, surface, &mut pacing, |frame| -> io::Result<()> {
        let text = if dithered {
            render_bitmap_ascii(&frame.bitmap)
        } else {
            render_ascii(&frame.framebuffer, &config.output.shade_ramp)
        };
        let mut out = stdout.lock();
        write!(out, "{}{}", CLEAR_SCREEN, text)?;
        out.flush()
    })
    .context("Failed to write preview")?;
    Ok(())
}

/// Bake all frames into one PNG
fn export_png(config: &Config, surface: &BuiltinSurface, path: &Path) -> anyhow::Result<()> {
    let progress = progress_bar(config.render.frame_count)?;
    let bitmaps: Vec<_> = FrameSequencer::new(&config.render, surface)
        .map(|frame| {
            progress.inc(1);
            frame.bitmap
        })
        .collect();
    progress.finish_and_clear();

    save_sprite_sheet(&bitmaps, path).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} frames to {}", bitmaps.len(), path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries frames only
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    cli.check()?;
    info!("=== Surface Baker v{} ===", VERSION);

    let mut config = match &cli.config {
        Some(path) => {
            let config = load_config(path).with_context(|| format!("Failed to load config {}", path.display()))?;
            info!("Loaded config from {}", path.display());
            config
        }
        None => Config::default(),
    };
    if let Some(arg) = cli.surface {
        config.render.surface = arg.into();
    }

    if let Some(path) = &cli.dump_config {
        save_config(&config, path).with_context(|| format!("Failed to save config {}", path.display()))?;
        info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let surface = config.render.surface();
    info!(
        "Rendering {} frames of the {} at {}x{}",
        config.render.frame_count,
        surface.name(),
        config.render.width,
        config.render.height
    );

    match cli.mode {
        Mode::Table => bake_table(&config, &surface, cli.out.as_deref()),
        Mode::Ascii => preview(&config, &surface, false),
        Mode::Bitmap => preview(&config, &surface, true),
        Mode::Png => match cli.out.as_deref() {
            Some(path) => export_png(&config, &surface, path),
            None => bail!("png mode needs --out FILE"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_table() {
        let cli = Cli::try_parse_from(["surface-baker"]).unwrap();
        assert_eq!(cli.mode, Mode::Table);
        assert_eq!(cli.surface, None);
        assert!(cli.out.is_none());
        assert!(cli.check().is_ok());
    }

    #[test]
    fn test_parses_mode_and_flags() {
        let cli = Cli::try_parse_from([
            "surface-baker", "ascii", "--surface", "torus", "--config", "anim.ron",
        ])
        .unwrap();
        assert_eq!(cli.mode, Mode::Ascii);
        assert_eq!(cli.surface.map(SurfaceKind::from), Some(SurfaceKind::Torus));
        assert_eq!(cli.config, Some(PathBuf::from("anim.ron")));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["surface-baker", "--surface", "cube"]).is_err());
        assert!(Cli::try_parse_from(["surface-baker", "--out"]).is_err());
        assert!(Cli::try_parse_from(["surface-baker", "gif"]).is_err());
    }

    #[test]
    fn test_png_needs_out() {
        let cli = Cli::try_parse_from(["surface-baker", "png"]).unwrap();
        assert!(cli.check().is_err());
        let cli = Cli::try_parse_from(["surface-baker", "png", "--out", "frames.png"]).unwrap();
        assert!(cli.check().is_ok());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
