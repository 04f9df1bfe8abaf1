pub mod record;

pub use record::TimeRecord;
