pub mod master;
pub mod schedule;

pub use master::PgMasterDirectory;
pub use schedule::PgScheduleStore;
