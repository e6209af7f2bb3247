use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use domain::color::Background;
use domain::size::Size;
use ico_to_svg_application::config::{APP_NAME, ConversionMode, VERSION};
use ico_to_svg_application::error::AppResult;
use ico_to_svg_application::infrastructure_config::ConversionConfig;
use ico_to_svg_application::ports::incoming::{convert::ConvertRequest, info::InfoRequest};

#[derive(Debug, Parser)]
#[command(
    name = APP_NAME,
    version = VERSION,
    about = "Convert ICO to SVG (raster embed or naive vector)"
)]
pub struct Cli {
    /// Additional TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert an ICO to SVG
    Convert(ConvertArgs),
    /// List available sizes in an ICO
    Info(InfoArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Raster,
    Vector,
}

impl From<ModeArg> for ConversionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Raster => ConversionMode::Raster,
            ModeArg::Vector => ConversionMode::Vector,
        }
    }
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input .ico file
    pub input: PathBuf,

    /// Output .svg file
    pub output: PathBuf,

    /// Conversion mode (default: raster)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Vector mode: minimum alpha to treat pixel as solid (default: 16)
    #[arg(long, value_name = "N")]
    pub alpha_threshold: Option<u8>,

    /// Background color (CSS color) or "transparent" (default: transparent)
    #[arg(long, value_name = "COLOR")]
    pub background: Option<String>,

    /// Desired icon size (e.g., 256 or 256x256)
    #[arg(long, value_name = "SIZE", allow_hyphen_values = true)]
    pub size: Option<String>,
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Input .ico file
    pub input: PathBuf,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by size (e.g., 256 or 256x256)
    #[arg(long, value_name = "SIZE", allow_hyphen_values = true)]
    pub size: Option<String>,
}

fn parse_size(size: Option<&str>) -> AppResult<Option<Size>> {
    Ok(size.map(str::parse::<Size>).transpose()?)
}

impl ConvertArgs {
    /// Fills unset flags from `defaults`.
    pub fn to_request(&self, defaults: &ConversionConfig) -> AppResult<ConvertRequest> {
        let background = match &self.background {
            Some(css) => css.parse::<Background>()?,
            None => defaults.background()?,
        };

        Ok(ConvertRequest {
            input: self.input.clone(),
            output: self.output.clone(),
            mode: self.mode.map_or(defaults.mode, ConversionMode::from),
            alpha_threshold: self.alpha_threshold.unwrap_or(defaults.alpha_threshold),
            background,
            size: parse_size(self.size.as_deref())?,
        })
    }
}

impl InfoArgs {
    pub fn to_request(&self) -> AppResult<InfoRequest> {
        Ok(InfoRequest {
            input: self.input.clone(),
            size: parse_size(self.size.as_deref())?,
        })
    }
}
