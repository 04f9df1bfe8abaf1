use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::errors::AppResult;
use crate::store::DataFile;

/// Append one record to the data file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track {
        hours,
        project,
        message,
        time,
    } = cmd
    {
        //
        // 1. Parse datetime first: a bad value must not touch the file
        //
        let record = TrackLogic::build(*hours, project.as_deref(), message.as_deref(), time)?;

        //
        // 2. Append
        //
        let store = DataFile::from_config(cfg)?;
        TrackLogic::apply(&store, &record)?;
    }

    Ok(())
}
