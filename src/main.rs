//! Transit Sim entry point
//!
//! Native command-line front-end: collects parameters, runs the engine and
//! prints the light curve for an external plotter.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use transit_sim::settings::OutputFormat;
    use transit_sim::sim::{self, LightCurve, LightCurvePoint};
    use transit_sim::{SimulationParameters, TransitError, TransitResult, ViewSettings};

    #[derive(Parser)]
    #[command(name = "transit-sim")]
    #[command(about = "Simulate the light curve of a planet transiting its star")]
    #[command(version)]
    pub struct Cli {
        /// JSON file with simulation parameters (flags override its values)
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// JSON file with view settings
        #[arg(long)]
        pub settings: Option<PathBuf>,

        /// Stellar radius (reference length unit)
        #[arg(long)]
        pub star_radius: Option<f64>,

        /// Planet radius / star radius, in (0, 1)
        #[arg(short = 'r', long)]
        pub radius_ratio: Option<f64>,

        /// Orbital radius / star radius, at least 1
        #[arg(short = 'a', long)]
        pub orbital_radius_ratio: Option<f64>,

        /// Inclination in degrees, [-90, 90]; 0 is edge-on
        #[arg(short = 'i', long, allow_hyphen_values = true)]
        pub inclination: Option<f64>,

        /// Phase samples per orbit
        #[arg(short = 'n', long)]
        pub steps: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Evaluate frames on all cores
        #[arg(long)]
        pub parallel: bool,

        /// Print the history an animation shows at this frame (frames 0..=N)
        #[arg(long)]
        pub frame: Option<u32>,
    }

    impl Cli {
        fn parameters(&self) -> TransitResult<SimulationParameters> {
            let mut params = match &self.config {
                Some(path) => SimulationParameters::from_json_file(path)?,
                None => SimulationParameters::default(),
            };
            if let Some(v) = self.star_radius {
                params = params.with_star_radius(v);
            }
            if let Some(v) = self.radius_ratio {
                params = params.with_radius_ratio(v);
            }
            if let Some(v) = self.orbital_radius_ratio {
                params = params.with_orbital_radius_ratio(v);
            }
            if let Some(v) = self.inclination {
                params = params.with_inclination_deg(v);
            }
            if let Some(v) = self.steps {
                params = params.with_step_count(v);
            }
            params.validate()?;
            Ok(params)
        }

        fn view_settings(&self) -> ViewSettings {
            let mut settings = match &self.settings {
                Some(path) => ViewSettings::load_or_default(path),
                None => ViewSettings::default(),
            };
            if let Some(format) = self.format {
                settings.format = format;
            }
            settings
        }
    }

    fn print_table(curve: &[LightCurvePoint], settings: &ViewSettings) {
        println!("{:>6}  {:>12}  {:>10}  {:>10}", "frame", "brightness %", "x", "y");
        for p in curve {
            println!(
                "{:>6}  {:>12.prec$}  {:>10.3}  {:>10.3}",
                p.frame,
                p.brightness,
                p.x,
                p.y,
                prec = settings.precision
            );
        }
    }

    /// Samples to print: the whole curve, or its history up to `frame`
    fn select_points(curve: &LightCurve, frame: Option<u32>) -> TransitResult<&[LightCurvePoint]> {
        match frame {
            Some(f) => curve.history(f),
            None => Ok(curve.points()),
        }
    }

    fn emit(curve: &LightCurve, frame: Option<u32>, settings: &ViewSettings) -> TransitResult<()> {
        let points = select_points(curve, frame)?;

        match settings.format {
            OutputFormat::Table => print_table(points, settings),
            OutputFormat::Csv => print!("{}", sim::points_to_csv(points)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(points)?),
        }
        Ok(())
    }

    fn run(cli: &Cli) -> TransitResult<()> {
        let params = cli.parameters()?;
        let settings = cli.view_settings();

        if settings.show_info {
            eprintln!(
                "Tip: pipe `--format csv` into a plotting tool to chart brightness against frame"
            );
        }

        log::info!(
            "Simulating Rp/Rs={} a/Rs={} i={}° over {} steps",
            params.radius_ratio,
            params.orbital_radius_ratio,
            params.inclination_deg,
            params.step_count
        );
        if !params.within_reference_ranges() {
            log::debug!("Parameters lie outside the reference slider ranges");
        }
        if !params.transit_possible() {
            log::info!(
                "Impact parameter {:.3} exceeds the stellar limb, no transit expected",
                params.impact_parameter()
            );
        }

        let curve = if cli.parallel {
            sim::generate_parallel(&params)?
        } else {
            sim::generate(&params)?
        };

        emit(&curve, cli.frame, &settings)?;
        log::info!("Transit depth: {:.4}%", curve.transit_depth());
        Ok(())
    }

    pub fn main() -> ExitCode {
        env_logger::init();
        let cli = Cli::parse();

        match run(&cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e}");
                eprintln!("error: {e}");
                if matches!(e, TransitError::FrameOutOfRange { .. }) || e.is_configuration() {
                    ExitCode::from(2)
                } else {
                    ExitCode::FAILURE
                }
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is transit_sim::web::start, this is just to satisfy the compiler
}
