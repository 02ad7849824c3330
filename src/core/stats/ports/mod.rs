pub mod stats_source;
