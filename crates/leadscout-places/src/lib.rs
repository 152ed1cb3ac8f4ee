pub mod client;
pub mod discover;
pub mod error;
pub mod types;

pub use client::PlacesClient;
pub use discover::{discover, DiscoverOptions};
pub use error::PlacesError;
pub use types::{PlaceDetails, PlaceResult};
