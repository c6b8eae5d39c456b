//! xtask render — turn a screen definition and a state fixture into a frame.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use clap::Args;
use colored::Colorize;
use display_canvas::DEFAULT_JPEG_QUALITY;
use renderer::{Renderer, Screen, ScreenConfig, StaticStates};

#[derive(Args)]
pub struct RenderArgs {
    /// Screen definition (JSON)
    #[arg(long)]
    pub screen: PathBuf,
    /// Entity states and history (JSON); everything is missing when omitted
    #[arg(long)]
    pub states: Option<PathBuf>,
    /// Output file; `.jpg`/`.jpeg` selects JPEG, anything else PNG
    #[arg(long, default_value = "frame.png")]
    pub out: PathBuf,
    /// Render time as `YYYY-MM-DDTHH:MM:SS`; current UTC time when omitted
    #[arg(long)]
    pub time: Option<String>,
    /// Canvas width
    #[arg(long, default_value_t = 240)]
    pub width: u32,
    /// Canvas height
    #[arg(long, default_value_t = 240)]
    pub height: u32,
    /// JPEG quality (1-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,
}

/// Output encoding picked from the file extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Format {
    Png,
    Jpeg,
}

impl Format {
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("jpg" | "jpeg") => Format::Jpeg,
            _ => Format::Png,
        }
    }
}

pub(crate) fn parse_time(time: Option<&str>) -> Result<NaiveDateTime> {
    match time {
        Some(t) => NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S")
            .with_context(|| format!("invalid --time `{t}`, expected YYYY-MM-DDTHH:MM:SS")),
        None => Ok(Utc::now().naive_utc()),
    }
}

pub(crate) fn load_states(path: Option<&Path>) -> Result<StaticStates> {
    let Some(path) = path else {
        return Ok(StaticStates::new());
    };
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.screen).with_context(|| format!("reading {}", args.screen.display()))?;
    let config = ScreenConfig::from_json(&json).with_context(|| format!("parsing {}", args.screen.display()))?;
    let states = load_states(args.states.as_deref())?;
    let now = parse_time(args.time.as_deref())?;

    let screen = Screen::from_config(&config, args.width, args.height);
    let renderer = Renderer::new();
    let bytes = match Format::from_path(&args.out) {
        Format::Png => renderer.render_png(&screen, &states, now)?,
        Format::Jpeg => renderer.render_jpeg(&screen, &states, now, args.quality)?,
    };
    std::fs::write(&args.out, &bytes).with_context(|| format!("writing {}", args.out.display()))?;

    println!(
        "{}",
        format!("✓ Rendered {} ({} bytes)", args.out.display(), bytes.len()).green()
    );
    Ok(())
}
