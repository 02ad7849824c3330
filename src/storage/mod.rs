pub mod market_file;

pub use market_file::JsonFileMarketProvider;
