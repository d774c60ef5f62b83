use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use wf_app::{
    AppError, AppResult, CurveRecord, CurveRequest, CurveTiming, RunOptions, WellService,
    curve_service, project_service,
};
use wf_well::RateGrid;

#[derive(Parser)]
#[command(name = "wellflow")]
#[command(about = "WellFlow CLI - oil well vertical lift performance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a well input file
    Validate {
        /// Path to the well JSON or YAML file
        input_path: PathBuf,
    },
    /// Bottomhole pressure at one liquid rate
    Pwf {
        /// Path to the well JSON or YAML file
        input_path: PathBuf,
        /// Liquid rate, m3/day
        #[arg(long)]
        rate: f64,
    },
    /// Compute (or load) the VLP curve
    Vlp {
        /// Path to the well JSON or YAML file
        input_path: PathBuf,
        /// Skip the curve store and force a recompute
        #[arg(long)]
        no_cache: bool,
        /// Evaluate rate points in parallel
        #[arg(long)]
        parallel: bool,
        /// Number of rate points
        #[arg(long, default_value_t = 20)]
        points: usize,
        /// Highest liquid rate, m3/day
        #[arg(long, default_value_t = 400.0)]
        max_rate: f64,
        /// Write the curve as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the curve as JSON ({"q_liq": [...], "p_wf": [...]})
        #[arg(long)]
        json: bool,
    },
    /// List stored curves for an input file
    Curves {
        /// Path to the well JSON or YAML file
        input_path: PathBuf,
    },
    /// Show a stored curve
    ShowCurve {
        /// Path to the well JSON or YAML file
        input_path: PathBuf,
        /// Curve ID to display
        curve_id: String,
        /// Print the curve as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a stored curve
    DeleteCurve {
        /// Path to the well JSON or YAML file
        input_path: PathBuf,
        /// Curve ID to delete
        curve_id: String,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input_path } => cmd_validate(&input_path),
        Commands::Pwf { input_path, rate } => cmd_pwf(&input_path, rate),
        Commands::Vlp {
            input_path,
            no_cache,
            parallel,
            points,
            max_rate,
            output,
            json,
        } => cmd_vlp(
            &input_path,
            RunOptions {
                use_cache: !no_cache,
                parallel,
                grid: RateGrid::new(RateGrid::default().start, max_rate, points)
                    .map_err(|e| AppError::InvalidInput(e.to_string()))?,
                ..RunOptions::default()
            },
            output.as_deref(),
            json,
        ),
        Commands::Curves { input_path } => cmd_curves(&input_path),
        Commands::ShowCurve {
            input_path,
            curve_id,
            json,
        } => cmd_show_curve(&input_path, &curve_id, json),
        Commands::DeleteCurve {
            input_path,
            curve_id,
        } => cmd_delete_curve(&input_path, &curve_id),
    }
}

fn cmd_validate(input_path: &Path) -> AppResult<()> {
    println!("Validating well input: {}", input_path.display());
    let well = project_service::load_well(input_path)?;
    let summary = project_service::summarize(&project_service::well_name(input_path), &well);
    println!("✓ Input is valid");
    println!(
        "  Survey: {} stations, MD {:.1} m, TVD {:.1} m",
        summary.survey_stations, summary.total_md_m, summary.total_tvd_m
    );
    println!(
        "  Tubing shoe: {:.1} m MD, perforation: {:.1} m MD",
        summary.tubing_shoe_md_m, summary.perforation_md_m
    );
    println!("  Wellhead pressure: {:.2} atm", summary.wellhead_pressure_atm);
    Ok(())
}

fn cmd_pwf(input_path: &Path, rate: f64) -> AppResult<()> {
    let well = project_service::load_well(input_path)?;
    let service = WellService::new();
    let profile = service.bottomhole_pressure(&well, rate, Default::default())?;

    println!("Liquid rate:  {:.3} m3/day", profile.liquid_rate_m3_day);
    println!("Wellhead:     {:.3} atm", profile.wellhead_pressure_atm);
    println!("Intake:       {:.3} atm", profile.intake_pressure_atm);
    println!("Bottomhole:   {:.3} atm", profile.bottomhole_pressure_atm);
    debug!(
        tubing_steps = profile.tubing.accepted_steps,
        casing_steps = profile.casing.accepted_steps,
        "integration steps"
    );
    Ok(())
}

fn cmd_vlp(
    input_path: &Path,
    options: RunOptions,
    output: Option<&Path>,
    json: bool,
) -> AppResult<()> {
    let service = WellService::new();
    let response = service.ensure_curve(&CurveRequest {
        input_path,
        options,
    })?;

    if json {
        println!("{}", to_json(&response.curve)?);
        return Ok(());
    }

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.curve_id);
    } else {
        println!("✓ Curve computed: {}", response.curve_id);
    }
    print_timing_summary(&response.timing);

    if let Some(path) = output {
        let csv = curve_csv(&response.curve);
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} points to {}",
            response.curve.len(),
            path.display()
        );
    } else {
        print_curve(&response.curve);
    }
    Ok(())
}

fn cmd_curves(input_path: &Path) -> AppResult<()> {
    let curves = curve_service::list_curves(input_path)?;
    if curves.is_empty() {
        println!("No stored curves for {}", input_path.display());
        return Ok(());
    }

    println!("Stored curves for {}:", input_path.display());
    for m in curves {
        println!(
            "  {}  {}  {} pts [{} .. {}] m3/day  solver {}",
            m.curve_id, m.timestamp, m.grid.points, m.grid.start, m.grid.end, m.solver_version
        );
    }
    Ok(())
}

fn cmd_show_curve(input_path: &Path, curve_id: &str, json: bool) -> AppResult<()> {
    let (manifest, curve) = curve_service::load_curve(input_path, curve_id)?;

    if json {
        println!("{}", to_json(&curve)?);
        return Ok(());
    }

    println!("Curve: {}", manifest.curve_id);
    println!("  Well: {}", manifest.well_name);
    println!("  Timestamp: {}", manifest.timestamp);
    println!("  Solver version: {}", manifest.solver_version);
    println!(
        "  Integration: rtol {:e}, atol {:e}, roughness {}",
        manifest.solver.rtol, manifest.solver.atol, manifest.solver.relative_roughness
    );
    println!("  Compute time: {:.3}s", manifest.compute_time_s);
    print_curve(&curve);
    Ok(())
}

fn cmd_delete_curve(input_path: &Path, curve_id: &str) -> AppResult<()> {
    curve_service::delete_curve(input_path, curve_id)?;
    println!("✓ Deleted curve {}", curve_id);
    Ok(())
}

fn to_json(curve: &CurveRecord) -> AppResult<String> {
    serde_json::to_string_pretty(curve).map_err(|e| AppError::Results(e.to_string()))
}

fn curve_csv(curve: &CurveRecord) -> String {
    let mut csv = String::from("q_liq,p_wf\n");
    for (q, p) in curve.pairs() {
        csv.push_str(&format!("{},{}\n", q, p));
    }
    csv
}

fn print_curve(curve: &CurveRecord) {
    println!("\n  {:>12}  {:>10}", "q_liq m3/d", "p_wf atm");
    for (q, p) in curve.pairs() {
        println!("  {:>12.3}  {:>10.3}", q, p);
    }
}

fn print_timing_summary(timing: &CurveTiming) {
    println!("\nTiming summary:");
    if timing.load_cache_time_s > 0.0 {
        println!("  Cache load: {:.3}s", timing.load_cache_time_s);
    } else {
        println!("  Compute: {:.3}s", timing.compute_time_s);
        println!("  Save:    {:.3}s", timing.save_time_s);
    }
    println!("  Total:   {:.3}s", timing.total_time_s);
}
