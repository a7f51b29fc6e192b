use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use mandala_chart::{
    DesignTimeConfig, MandalaParams, map_to_gate_line, solve_design_time, zodiac_position,
};
use mandala_config::{Canon, Settings, load_case};
use mandala_engine::{compute_case, emit_golden};
use mandala_ephem::{Ephemeris, EphemerisConfig, EphemerisError};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "mandala", version, about = "Birth chart engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Canon location overrides. Relative file names resolve against the
/// canon directory.
#[derive(Args, Debug, Default)]
struct CanonArgs {
    /// Directory holding the canon JSON files
    #[arg(long)]
    canon_directory: Option<PathBuf>,
    /// Gate sequence file
    #[arg(long)]
    gate_sequence_file: Option<PathBuf>,
    /// Mandala constants file
    #[arg(long)]
    mandala_constants_file: Option<PathBuf>,
    /// Node policy file
    #[arg(long)]
    node_policy_file: Option<PathBuf>,
}

impl CanonArgs {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.canon_directory {
            settings.canon_dir = dir.clone();
        }
        if let Some(f) = &self.gate_sequence_file {
            settings.gate_sequence_file = Some(f.clone());
        }
        if let Some(f) = &self.mandala_constants_file {
            settings.mandala_constants_file = Some(f.clone());
        }
        if let Some(f) = &self.node_policy_file {
            settings.node_policy_file = Some(f.clone());
        }
        settings
    }

    fn load(&self, settings: Settings) -> Result<Canon> {
        let settings = self.apply(settings);
        let paths = settings
            .canon_paths()
            .with_context(|| format!("resolving canon files in {}", settings.canon_dir.display()))?;
        Canon::load(&paths).context("loading canon")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the charts for a case file and write the golden document
    Chart {
        #[command(flatten)]
        canon: CanonArgs,
        /// Case input JSON
        input: PathBuf,
        /// Output path
        output: PathBuf,
    },
    /// Zodiac sign and degree/minute of a tropical longitude
    Zodiac {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Gate and line of a tropical longitude
    Gate {
        #[command(flatten)]
        canon: CanonArgs,
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Instant before `jd` at which the Sun was `offset` degrees behind
    DesignTime {
        /// Julian Day (UTC)
        #[arg(long)]
        jd: f64,
        /// Solar arc in degrees
        #[arg(long, default_value = "88")]
        offset: f64,
    },
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// The process-wide resolver, created on first use.
fn ephemeris() -> Result<&'static Ephemeris> {
    match mandala_ephem::init(EphemerisConfig::default()) {
        Ok(()) | Err(EphemerisError::AlreadyInitialized) => {}
        Err(e) => return Err(e).context("initializing ephemeris"),
    }
    Ok(mandala_ephem::engine()?)
}

/// Compute a case and write the golden document. Nothing is written on error.
fn run_chart(canon: &CanonArgs, input: &Path, output: &Path, settings: Settings) -> Result<()> {
    let canon = canon.load(settings)?;
    let case = load_case(input, &canon)
        .with_context(|| format!("reading case {}", input.display()))?;
    let report = compute_case(&case, &canon.gate_sequence, ephemeris()?)
        .with_context(|| format!("computing chart for {}", input.display()))?;
    fs::write(output, emit_golden(&report))
        .with_context(|| format!("writing {}", output.display()))?;
    info!(output = %output.display(), "chart written");
    Ok(())
}

fn format_zodiac(lon: f64) -> String {
    let p = zodiac_position(lon);
    format!("{} {}°{:02}'", p.sign, p.deg, p.min)
}

fn format_gate(lon: f64, canon: &Canon) -> Result<String> {
    let params = MandalaParams {
        start_deg: canon.mandala.start_longitude_deg,
        gate_width_deg: canon.mandala.gate_width_deg,
        line_width_deg: canon.mandala.line_width_deg,
    };
    params.validate()?;
    Ok(map_to_gate_line(lon, &params, &canon.gate_sequence).to_string())
}

fn run(cli: Cli, settings: Settings) -> Result<()> {
    match cli.command {
        Commands::Chart {
            canon,
            input,
            output,
        } => run_chart(&canon, &input, &output, settings)?,

        Commands::Zodiac { lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite, got {lon}");
            }
            println!("{}", format_zodiac(lon));
        }

        Commands::Gate { canon, lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite, got {lon}");
            }
            let canon = canon.load(settings)?;
            println!("{}", format_gate(lon, &canon)?);
        }

        Commands::DesignTime { jd, offset } => {
            let cfg = DesignTimeConfig {
                sun_offset_deg: offset,
                ..DesignTimeConfig::default()
            };
            let dt = solve_design_time(ephemeris()?, jd, &cfg)?;
            println!("Design JD: {:.6}", dt.jd);
            println!("Days before: {:.4}", jd - dt.jd);
            println!("Sun: {:.6} deg (target {:.6})", dt.sun_longitude_deg, dt.target_deg);
            println!("Residual: {:.2e} deg", dt.residual_deg);
            println!("Widenings: {}, bisections: {}", dt.widenings, dt.iterations);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("loading settings")?;
    init_logging(&settings.log_filter);
    run(cli, settings)
}
