use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::error::WmError;
use crate::event_loop::frame_interval;
use crate::theme::Theme;
use crate::ui::CellMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "panel-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating panel desktop for the terminal"
)]
pub struct Cli {
    /// Theme applied at startup.
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,

    /// Animation frames per second.
    #[arg(long, value_name = "FPS", default_value_t = 60)]
    pub fps: u32,

    /// Width of one terminal cell in document pixels.
    #[arg(long = "cell-width", value_name = "PX", default_value_t = 8.0)]
    pub cell_width: f64,

    /// Height of one terminal cell in document pixels.
    #[arg(long = "cell-height", value_name = "PX", default_value_t = 16.0)]
    pub cell_height: f64,

    /// Append debug logs to this file. Logging is off without it.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Window to open at startup. May be repeated.
    #[arg(long = "open", value_name = "ID")]
    pub open: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub fps: u32,
    pub frame_interval: Duration,
    pub metrics: CellMetrics,
    pub log_file: Option<PathBuf>,
    pub open: Vec<String>,
}

impl TryFrom<&Cli> for Config {
    type Error = WmError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !(1..=240).contains(&cli.fps) {
            return Err(WmError::InvalidConfig(
                "fps must be between 1 and 240".to_string(),
            ));
        }
        for (name, value) in [("cell-width", cli.cell_width), ("cell-height", cli.cell_height)] {
            if !value.is_finite() || !(1.0..=256.0).contains(&value) {
                return Err(WmError::InvalidConfig(format!(
                    "{name} must be between 1 and 256 pixels"
                )));
            }
        }
        if cli.open.iter().any(String::is_empty) {
            return Err(WmError::InvalidConfig(
                "--open needs a window id".to_string(),
            ));
        }
        Ok(Self {
            theme: cli.theme.into(),
            fps: cli.fps,
            frame_interval: frame_interval(cli.fps),
            metrics: CellMetrics::new(cli.cell_width, cli.cell_height),
            log_file: cli.log_file.clone(),
            open: cli.open.clone(),
        })
    }
}
