//! Append-only delimited data file holding every tracked record.
//!
//! The file handle lives only for the duration of one append or one load.
//! There is no locking: two concurrent `track` invocations race.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use crate::models::record::HEADER;
use crate::utils::path::ensure_parent_dir;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
    delimiter: u8,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::new(cfg.data_path(), cfg.delimiter_byte()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first if the file is new.
    ///
    /// Returns `true` when the file was created by this call.
    pub fn append(&self, record: &TimeRecord) -> AppResult<bool> {
        ensure_parent_dir(&self.path)?;

        let created = !self.path.exists();

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        // a manually edited file may have lost its trailing newline
        if !created && !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(file);

        if created {
            wtr.write_record(HEADER)?;
        }
        wtr.serialize(record)?;
        wtr.flush()?;

        Ok(created)
    }

    /// Load every record in file order. The file is never created here.
    pub fn load(&self) -> AppResult<Vec<TimeRecord>> {
        if !self.path.exists() {
            return Err(AppError::DataFileMissing(self.path.clone()));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::Headers)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in rdr.deserialize::<TimeRecord>() {
            records.push(row?);
        }

        Ok(records)
    }
}

fn ends_with_newline(file: &mut File) -> AppResult<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::env;
    use std::fs;

    fn temp_data(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("tt_store_{name}"));
        fs::remove_dir_all(&dir).ok();
        dir.join("nested").join("time.csv")
    }

    fn record(ts: &str, hours: f64, project: Option<&str>, message: Option<&str>) -> TimeRecord {
        TimeRecord::new(
            NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M").unwrap(),
            hours,
            project.map(String::from),
            message.map(String::from),
        )
    }

    #[test]
    fn first_append_creates_file_with_header() {
        let path = temp_data("first_append");
        let store = DataFile::new(&path, b',');

        let created = store
            .append(&record("2024-01-10T09:00", 2.5, Some("acme"), None))
            .unwrap();
        assert!(created);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "datetime,hours,project,message\n2024-01-10T09:00,2.5,acme,\n"
        );
    }

    #[test]
    fn header_written_once_and_rows_keep_order() {
        let path = temp_data("order");
        let store = DataFile::new(&path, b',');

        let written: Vec<TimeRecord> = (0..5)
            .map(|i| {
                record(
                    &format!("2024-02-0{}T08:30", i + 1),
                    i as f64 + 0.5,
                    Some("p"),
                    Some("m"),
                )
            })
            .collect();

        for (i, r) in written.iter().enumerate() {
            assert_eq!(store.append(r).unwrap(), i == 0);
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 6);
        assert_eq!(content.matches("datetime,hours").count(), 1);

        assert_eq!(store.load().unwrap(), written);
    }

    #[test]
    fn custom_delimiter_and_quoting() {
        let path = temp_data("delimiter");
        let store = DataFile::new(&path, b';');

        let r = record("2024-01-10T09:00", 1.0, Some("a;b"), Some("fix \"bug\""));
        store.append(&r).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("datetime;hours;project;message\n"));
        assert!(content.contains("\"a;b\""));

        assert_eq!(store.load().unwrap(), vec![r]);
    }

    #[test]
    fn append_repairs_missing_trailing_newline() {
        let path = temp_data("newline");
        ensure_parent_dir(&path).unwrap();
        fs::write(&path, "datetime,hours,project,message\n2024-01-01T10:00,1.0,x,").unwrap();

        let store = DataFile::new(&path, b',');
        assert!(!store.append(&record("2024-01-02T10:00", 2.0, None, None)).unwrap());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].project, None);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let path = temp_data("missing");
        let err = DataFile::new(&path, b',').load().unwrap_err();
        assert!(matches!(err, AppError::DataFileMissing(_)));
        assert!(!path.exists());
    }

    #[test]
    fn load_keeps_label_whitespace_but_tolerates_padded_numbers() {
        let path = temp_data("padding");
        ensure_parent_dir(&path).unwrap();
        fs::write(
            &path,
            "datetime , hours,project,message\n 2024-01-10T09:00, 1.5 , acme,\n2024-01-10T10:00,2,acme,\n",
        )
        .unwrap();

        let loaded = DataFile::new(&path, b',').load().unwrap();
        assert_eq!(loaded[0].hours, 1.5);
        assert_eq!(loaded[0].project.as_deref(), Some(" acme"));
        assert_eq!(loaded[1].project.as_deref(), Some("acme"));
        assert_ne!(loaded[0].project_key(), loaded[1].project_key());
    }

    #[test]
    fn load_rejects_malformed_datetime() {
        let path = temp_data("malformed");
        ensure_parent_dir(&path).unwrap();
        fs::write(
            &path,
            "datetime,hours,project,message\nnot-a-date,1.0,x,\n",
        )
        .unwrap();

        let err = DataFile::new(&path, b',').load().unwrap_err();
        assert!(matches!(err, AppError::Csv(_)));
    }
}
