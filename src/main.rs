use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use log::{error, info};

use kelpie_nav_planner::hangar::{get_hangar_path, load_hangar};
use kelpie_nav_planner::model::{Aircraft, FlightPlan};
use kelpie_nav_planner::preference::{AIRCRAFT_CALLSIGN, UNITS};
use kelpie_nav_planner::util::nav_log::nav_log;
use kelpie_nav_planner::util::plan_reader::read_plan;
use kelpie_nav_planner::util::Logger;
use kelpie_nav_planner::{PerformanceError, Result};

#[derive(Parser)]
#[command(name = "kelpie_nav_planner")]
#[command(version)]
#[command(about = "Dead-reckoning nav log for a VFR flight plan", long_about = None)]
struct Cli {
    /// Flight plan file
    plan: PathBuf,

    /// Callsign of the aircraft to fly the plan with
    #[arg(short, long)]
    aircraft: Option<String>,

    /// Aircraft definitions (yaml)
    #[arg(long)]
    hangar: Option<PathBuf>,

    /// Distance units: Nm, Mi or Km
    #[arg(short, long)]
    units: Option<String>,
}

fn main() -> ExitCode {
    let _logger = Logger::new();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(log) => {
            println!("{}", log);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let pref = kelpie_nav_planner::preference::manager();

    let hangar_path = cli.hangar.clone().unwrap_or_else(get_hangar_path);
    let hangar = load_hangar(&hangar_path)?;

    let document = read_plan(&cli.plan)?;

    let callsign = cli
        .aircraft
        .clone()
        .or(document.aircraft)
        .or_else(|| pref.get::<String>(AIRCRAFT_CALLSIGN));
    let aircraft: Arc<Aircraft> = match callsign {
        Some(callsign) => hangar.get(&callsign).ok_or_else(|| {
            PerformanceError::Configuration(format!("Aircraft {} is not in the hangar", callsign))
        })?,
        None => hangar.get_default_aircraft().ok_or_else(|| {
            PerformanceError::Configuration("The hangar has no aircraft".to_string())
        })?,
    };
    info!("Planning with {}", aircraft.get_callsign());

    let mut plan = FlightPlan::new(document.legs, aircraft)?;
    plan.evaluate()?;

    let units = cli
        .units
        .clone()
        .or_else(|| pref.get::<String>(UNITS))
        .unwrap_or("Nm".to_string());
    let log = nav_log(&plan, &units)?;
    Ok(format!(
        "Nav log for {} generated {}\n{}",
        cli.plan.display(),
        Local::now().format("%Y-%m-%d %H:%M"),
        log
    ))
}
