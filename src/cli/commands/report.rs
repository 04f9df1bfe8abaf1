use crate::cli::parser::{Commands, ReportArgs};
use crate::config::Config;
use crate::core::report::{ReportLogic, ReportOptions};
use crate::errors::AppResult;
use crate::report::DateRange;
use crate::store::DataFile;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report(args) = cmd {
        handle_args(args, cfg)?;
    }
    Ok(())
}

/// Shared by `tt report` and the standalone `tt-report`.
pub fn handle_args(args: &ReportArgs, cfg: &Config) -> AppResult<()> {
    let range = DateRange::parse(&args.from_date, &args.to_date)?;
    let store = DataFile::from_config(cfg)?;

    let output_dir = expand_tilde(args.output.as_deref().unwrap_or(&cfg.output_dir));

    ReportLogic::run(
        &store,
        &range,
        &ReportOptions {
            output_dir: &output_dir,
            workday_hours: cfg.workday_hours,
            font: cfg.font.as_deref(),
        },
    )?;

    Ok(())
}
