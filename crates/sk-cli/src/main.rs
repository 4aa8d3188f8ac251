//! sidiskit CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sk_acceptance::read_correction_file;
use sk_pid::PidTable;

mod count;
mod inspect;

#[derive(Parser)]
#[command(name = "sidiskit")]
#[command(about = "sidiskit - CLAS12 SIDIS acceptance correction")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count thrown and simulated events into a 5D correction table
    Count {
        /// Q2 bin edges (GeV^2)
        #[arg(long, num_args = 2.., allow_negative_numbers = true, required = true)]
        q2: Vec<f64>,

        /// nu bin edges (GeV)
        #[arg(long, num_args = 2.., allow_negative_numbers = true, required = true)]
        nu: Vec<f64>,

        /// z_h bin edges
        #[arg(long, num_args = 2.., allow_negative_numbers = true, required = true)]
        zh: Vec<f64>,

        /// P_T^2 bin edges (GeV^2)
        #[arg(long, num_args = 2.., allow_negative_numbers = true, required = true)]
        pt2: Vec<f64>,

        /// phi_PQ bin edges, in degrees within [-180, 180]
        #[arg(long, num_args = 2.., allow_negative_numbers = true, required = true)]
        phi: Vec<f64>,

        /// Thrown (generator-level) events, one JSON record per line
        #[arg(short = 't', long)]
        thrown: PathBuf,

        /// Simulated (reconstructed) events, one JSON record per line
        #[arg(short = 's', long)]
        simulated: PathBuf,

        /// Output correction file; must not exist yet
        #[arg(short, long)]
        output: PathBuf,

        /// Count every in-range event, skipping the Q2 and W/W2 cuts
        #[arg(long)]
        no_dis_cuts: bool,
    },

    /// Summarize a correction file as JSON
    Inspect {
        /// Correction file produced by `count`
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the summary (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up the correction factor of one bin
    Factor {
        /// Correction file produced by `count`
        #[arg(short, long)]
        input: PathBuf,

        /// PID to look up (LUND convention)
        #[arg(long, allow_negative_numbers = true)]
        pid: i32,

        /// Flat bin index
        #[arg(long, conflicts_with = "values")]
        bin: Option<usize>,

        /// Kinematic tuple Q2 nu z_h P_T^2 phi_PQ (phi in radians)
        #[arg(long, num_args = 5, allow_negative_numbers = true)]
        values: Option<Vec<f64>>,
    },

    /// Print the known PIDs and their names
    Pids,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Count { q2, nu, zh, pt2, phi, thrown, simulated, output, no_dis_cuts } => {
            count::cmd_count(
                [q2, nu, zh, pt2, phi],
                &thrown,
                &simulated,
                &output,
                no_dis_cuts,
            )
        }
        Commands::Inspect { input, output } => inspect::cmd_inspect(&input, output.as_deref()),
        Commands::Factor { input, pid, bin, values } => {
            cmd_factor(&input, pid, bin, values.as_deref())
        }
        Commands::Pids => cmd_pids(),
    }
}

fn cmd_factor(input: &std::path::Path, pid: i32, bin: Option<usize>, values: Option<&[f64]>) -> Result<()> {
    let table = read_correction_file(input)
        .with_context(|| format!("failed to read correction file {}", input.display()))?;

    let bin = match (bin, values) {
        (Some(bin), None) => bin,
        (None, Some(values)) => {
            let tuple: [f64; 5] = values.try_into().expect("clap enforces 5 values");
            table
                .grid()
                .find_bin(&tuple)
                .context("kinematic tuple falls outside the binning")?
        }
        _ => anyhow::bail!("exactly one of --bin or --values is required"),
    };

    let result = serde_json::json!({
        "pid": pid,
        "bin": bin,
        "label": table.grid().label(bin)?,
        "thrown": table.thrown(pid)?[bin],
        "simulated": table.simulated(pid)?[bin],
        "factor": table.factor(pid, bin)?,
        "acceptance": table.acceptance(pid, bin)?,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn cmd_pids() -> Result<()> {
    let table = PidTable::new();
    for (pid, info) in table.iter() {
        println!("  * {pid:5} ({}).", info.name);
    }
    Ok(())
}
