pub mod jikan;

pub use jikan::JikanClient;
