use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open::{Launcher, OpenLogic};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open { with } = cmd {
        let launcher = Launcher::resolve(with.as_deref(), cfg.opener.as_deref());
        OpenLogic::open(&cfg.data_path(), &launcher)?;
    }
    Ok(())
}
