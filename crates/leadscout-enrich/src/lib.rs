pub mod classify;
pub mod error;
pub mod fetch;
pub mod runner;
pub mod score;
pub mod signals;

pub use classify::classify_ownership;
pub use error::FetchError;
pub use fetch::{FetchedPage, SiteFetcher};
pub use runner::{enrich_all, enrich_business};
pub use score::score_signals;
pub use signals::extract_signals;
