use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tt
#[derive(Parser)]
#[command(
    name = "tt",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking tool: log hours per project, chart them later",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Standalone reporter (`tt-report`)
#[derive(Parser)]
#[command(
    name = "tt-report",
    version = env!("CARGO_PKG_VERSION"),
    about = "Visualize tracked time.",
    long_about = None
)]
pub struct ReportCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Override the data file path (useful for tests or a second ledger)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// CSV delimiter (default: config file, else ",")
    #[arg(global = true, long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Read configuration from this file instead of the per-user one
    #[arg(global = true, long = "config-file", value_name = "FILE", hide = true)]
    pub config_file: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Start of the range (inclusive): 'now' or ISO-8601
    #[arg(long = "from-date", default_value = "now", help = "from datetime")]
    pub from_date: String,

    /// End of the range (inclusive): 'now' or ISO-8601
    #[arg(long = "to-date", default_value = "now", help = "to datetime")]
    pub to_date: String,

    /// Output directory for total.png and daily.png (default: "report")
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Track spent hours
    #[command(visible_alias = "t")]
    Track {
        /// Hours spent (decimal, e.g. 1.5)
        #[arg(allow_negative_numbers = true, value_parser = parse_hours)]
        hours: f64,

        #[arg(short = 'p', long = "project", help = "project")]
        project: Option<String>,

        #[arg(short = 'm', long = "message", help = "descriptive message")]
        message: Option<String>,

        #[arg(
            short = 't',
            long = "time",
            default_value = "now",
            help = "datetime in isoformat"
        )]
        time: String,
    },

    /// Visualize spent hours (total.png and daily.png)
    Report(ReportArgs),

    /// Open the data file for manual editing
    Open {
        #[arg(
            long = "with",
            value_name = "PROGRAM",
            help = "Program to open the file with (default: platform launcher)"
        )]
        with: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}

/// Any sign or size is accepted, but `inf`/`NaN` cannot be charted.
fn parse_hours(raw: &str) -> Result<f64, String> {
    let hours: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if hours.is_finite() {
        Ok(hours)
    } else {
        Err(format!("'{raw}' is not a finite number of hours"))
    }
}
