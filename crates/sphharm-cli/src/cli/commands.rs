use super::CliError;
use anyhow::Context;
use sphharm_core::serialization::{render_json, render_text_table, write_text_artifact};
use sphharm_core::{
    QuantumNumbers, RadialProfile, RenderConfig, SphError, VisualizationMode, load_render_config,
    render_surface,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum ProfileArg {
    /// Sigmoid-compressed |Re Y| normalized to the largest lobe
    Compressed,
    /// Plain |Y|
    Raw,
}

impl From<ProfileArg> for RadialProfile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Compressed => Self::CompressedMagnitude,
            ProfileArg::Raw => Self::RawMagnitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum ModeArg {
    Markers,
    Surface,
    Wireframe,
    Contour,
}

impl From<ModeArg> for VisualizationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Markers => Self::Markers,
            ModeArg::Surface => Self::Surface,
            ModeArg::Wireframe => Self::Wireframe,
            ModeArg::Contour => Self::Contour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    Json,
    Text,
}

#[derive(clap::Args)]
pub(super) struct GenerateArgs {
    /// Render config JSON file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Degree l of the harmonic
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    degree: Option<i32>,

    /// Order m of the harmonic, |m| <= l
    #[arg(long, short = 'm', allow_negative_numbers = true)]
    order: Option<i32>,

    /// Polar sample count; the azimuth gets twice as many
    #[arg(long, short = 'r')]
    resolution: Option<usize>,

    /// Radial profile applied to the harmonic magnitude
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,

    /// Visualization mode the export is laid out for
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Export format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Output path (stdout when omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct CheckArgs {
    /// Degree l of the harmonic
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    degree: i32,

    /// Order m of the harmonic
    #[arg(long, short = 'm', allow_negative_numbers = true)]
    order: i32,
}

impl GenerateArgs {
    fn resolve_config(&self) -> Result<RenderConfig, SphError> {
        let mut config = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading render config");
                load_render_config(path)?
            }
            None => RenderConfig::default(),
        };

        if let Some(degree) = self.degree {
            config.degree = degree;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if let Some(profile) = self.profile {
            config.profile = profile.into();
        }
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }

        Ok(config)
    }
}

pub(super) fn run_generate_command(args: GenerateArgs) -> Result<i32, CliError> {
    let config = args.resolve_config()?;
    info!(
        degree = config.degree,
        order = config.order,
        resolution = config.resolution,
        profile = %config.profile,
        mode = %config.mode,
        "generating surface"
    );

    let field = render_surface(&config).map_err(SphError::from)?;
    let content = match args.format {
        OutputFormat::Json => render_json(&field).context("failed to serialize surface field")?,
        OutputFormat::Text => render_text_table(&field, config.mode),
    };

    match &args.output {
        Some(path) => {
            write_text_artifact(path, &content).map_err(|source| {
                SphError::io_system(
                    "IO.OUTPUT_WRITE",
                    format!("failed to write surface output '{}': {source}", path.display()),
                )
            })?;
            info!(
                path = %path.display(),
                points = field.len(),
                "wrote surface"
            );
        }
        None => print!("{}", content),
    }

    Ok(0)
}

pub(super) fn run_check_command(args: CheckArgs) -> Result<i32, CliError> {
    let quantum_numbers = QuantumNumbers::new(args.degree, args.order).map_err(SphError::from)?;
    println!("{} is a valid spherical harmonic.", quantum_numbers);
    Ok(0)
}
