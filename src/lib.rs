//! Client for the [Marvel Rivals API](https://marvelrivalsapi.com): heroes,
//! hero stats, leaderboards, costumes, achievements, items, battle passes and maps.
//!
//! Two clients expose the same operations. [`RivalsClient`] is async and
//! implements [`RivalsApi`]; [`BlockingRivalsClient`] blocks the calling thread.
//!
//! Every operation returns `Result<Option<T>, Error>`. A negative answer from
//! the API (not found, or any other non-2xx status) becomes `Ok(None)` under
//! [`ErrorMode::Suppress`], the default, and an [`Error`] carrying the status
//! and endpoint under [`ErrorMode::Raise`]. Transport and decode failures are
//! always errors.
//!
//! ```no_run
//! use rivalsapi::{ErrorMode, HeroName, RivalsApi, RivalsClient};
//!
//! # async fn run() -> Result<(), rivalsapi::Error> {
//! let client = RivalsClient::new("your-api-key")?;
//!
//! if let Some(hero) = client.hero(HeroName::JeffTheLandShark.as_str()).await? {
//!     println!("{}", hero.lore);
//! }
//!
//! // raise on failure for this call only
//! let spider = client
//!     .with_error_mode(ErrorMode::Raise)
//!     .hero(HeroName::SpiderMan.as_str())
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api_client;
pub mod blocking;
mod client;
mod endpoint;
mod error;
mod heroes;
pub mod types;

pub use api_client::RivalsClient;
pub use blocking::BlockingRivalsClient;
pub use client::{ClientConfig, ErrorMode, RivalsApi, API_KEY_VAR, RAISE_ERRORS_VAR};
pub use endpoint::{image_url, ListQuery, Platform, SeasonKey, BASE_URL};
pub use error::{ApiError, EnvVarError, Error, JSONError};
pub use heroes::HeroName;
pub use types::*;
