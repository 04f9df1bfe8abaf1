use crate::errors::AppResult;
use crate::models::TimeRecord;
use crate::store::DataFile;
use crate::ui::messages::{info, success};
use crate::utils::date::{format_minutes, parse_datetime};

/// High-level business logic for the `track` command.
pub struct TrackLogic;

impl TrackLogic {
    /// Build the record from raw CLI input. Nothing is written if `time` is malformed.
    pub fn build(
        hours: f64,
        project: Option<&str>,
        message: Option<&str>,
        time: &str,
    ) -> AppResult<TimeRecord> {
        let datetime = parse_datetime(time)?;
        Ok(TimeRecord::new(
            datetime,
            hours,
            project.map(str::to_string),
            message.map(str::to_string),
        ))
    }

    pub fn apply(store: &DataFile, record: &TimeRecord) -> AppResult<()> {
        let created = store.append(record)?;

        if created {
            info(format!("Created data file {}", store.path().display()));
        }

        let project = record
            .project
            .as_deref()
            .map(|p| format!(" on '{p}'"))
            .unwrap_or_default();
        success(format!(
            "Tracked {}h{} at {}",
            record.hours,
            project,
            format_minutes(&record.datetime)
        ));

        Ok(())
    }
}
