// Analysis cache module
// Author: kelexine (https://github.com/kelexine)

pub mod clock;
pub mod manager;
pub mod models;

pub use clock::{Clock, SystemClock};
pub use manager::{AnalysisCache, KeyHasher, Sha256KeyHasher};
pub use models::{CacheConfig, CacheStats};
