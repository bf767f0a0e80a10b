//! Command implementations for the HDS CLI.
//!
//! `status` and `simulate` talk to the backend; `gauge` and `duration` run
//! the banding and state-duration logic offline on local input.

use clap::Subcommand;
use hds_core::endpoints::API_BASE_URL_ENV;

pub mod duration;
pub mod gauge;
pub mod simulate;
pub mod status;

#[derive(Subcommand)]
pub enum Command {
    /// Show the drought status of a reservoir: volume, gauge bands and time in state
    Status {
        /// Reservoir id
        #[arg(short = 'r', long)]
        reservoir: i64,

        /// Backend base URL
        #[arg(long, env = API_BASE_URL_ENV)]
        api_base_url: String,

        /// Reference day for the day count (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Compute gauge bands offline from three targets and a current value
    Gauge {
        #[arg(long, default_value_t = 0.0)]
        meta1: f64,

        #[arg(long, default_value_t = 0.0)]
        meta2: f64,

        #[arg(long, default_value_t = 0.0)]
        meta3: f64,

        /// Targets are fractions (0-1) rather than percentages
        #[arg(long)]
        fractions: bool,

        /// Current fill level in percent
        #[arg(short = 'c', long, allow_negative_numbers = true)]
        current: f64,

        /// Write a standalone SVG gauge to this path
        #[arg(long)]
        svg: Option<String>,
    },

    /// Resolve the time in the current state from a saved history JSON payload
    Duration {
        /// Path to a history JSON array
        #[arg(long)]
        history: String,

        /// Reference day for the day count (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Run a water-balance simulation on the backend and report failed months
    Simulate {
        /// Path to a simulation request JSON body
        #[arg(long)]
        request: String,

        /// Constant demand in m³/s used to flag failed months
        #[arg(short = 'd', long)]
        demand: f64,

        /// Write the full result table to this CSV path
        #[arg(long)]
        csv: Option<String>,

        /// Backend base URL
        #[arg(long, env = API_BASE_URL_ENV)]
        api_base_url: String,
    },
}

/// Reference day for day counts: the given ISO date, or the local date.
pub(crate) fn reference_day(today: Option<&str>) -> anyhow::Result<chrono::NaiveDate> {
    match today {
        Some(s) => hds_utils::dates::parse_iso_date(s),
        None => Ok(chrono::Local::now().naive_local().date()),
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Status {
            reservoir,
            api_base_url,
            today,
        } => status::run_status(&api_base_url, reservoir, today.as_deref()).await,
        Command::Gauge {
            meta1,
            meta2,
            meta3,
            fractions,
            current,
            svg,
        } => gauge::run_gauge([meta1, meta2, meta3], fractions, current, svg.as_deref()),
        Command::Duration { history, today } => {
            duration::run_duration(&history, today.as_deref())
        }
        Command::Simulate {
            request,
            demand,
            csv,
            api_base_url,
        } => simulate::run_simulate(&api_base_url, &request, demand, csv.as_deref()).await,
    }
}
