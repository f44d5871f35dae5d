use orbitsim::{ScenarioConfig, Scenario};
use orbitsim::run_2d;
use orbitsim::bench_step;

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Newtonian N-body simulation with orbit trails")]
struct Args {
    /// Scenario YAML file, either a path or a name under `scenarios/`.
    /// Without it the built-in sun/earth pair is used.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Run without a window and print the final state
    #[arg(long)]
    headless: bool,

    /// Number of ticks for a headless run
    #[arg(short = 'n', long, default_value_t = 1000)]
    steps: u64,

    /// Time `step()` for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &Path) -> Result<ScenarioConfig> {
    let config_path = if path.exists() {
        path.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(path)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, steps: u64) {
    let g = scenario.parameters.G;
    let e0 = scenario.system.total_energy(g);
    let p0 = scenario.system.total_momentum();
    let l0 = scenario.system.angular_momentum();
    let c0 = scenario.system.center_of_mass();

    let mut degenerate = 0;
    for _ in 0..steps {
        degenerate += scenario.step().degenerate_pairs;
    }

    let sys = &scenario.system;
    log::info!(
        "{} ticks, t = {}: energy drift {:.3e}, momentum drift {:.3e}, angular momentum drift {:.3e}, centre of mass moved {:.3e}, {} degenerate pairs",
        sys.ticks,
        sys.t,
        sys.total_energy(g) - e0,
        (sys.total_momentum() - p0).norm(),
        sys.angular_momentum() - l0,
        (sys.center_of_mass() - c0).norm(),
        degenerate
    );

    println!("body,x,y,vx,vy,mass,trail_len");
    for (i, b) in sys.iter().enumerate() {
        println!(
            "{},{},{},{},{},{},{}",
            i,
            b.x.x,
            b.x.y,
            b.v.x,
            b.v.y,
            b.mass(),
            b.trail().map_or(0, |t| t.len())
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The viewer logs through bevy's LogPlugin instead
    if args.headless || args.bench {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario = match &args.scenario {
        Some(path) => {
            let cfg = load_scenario_from_yaml(path)?;
            Scenario::build(cfg).context("invalid scenario")?
        }
        None => Scenario::sun_earth()?,
    };

    if args.headless {
        run_headless(scenario, args.steps);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
