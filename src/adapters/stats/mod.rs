pub mod procfs;

pub use procfs::ProcfsStats;
