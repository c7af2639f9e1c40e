//! RajHub Content Core
//!
//! Everything the site needs that does not touch the browser:
//! - models + static catalogue (blog posts, channels, stats)
//! - content filtering
//! - animation state machines (counter, hero rotation)
//! - contact form state machine
//! - routes, config, formatting

pub mod chart;
pub mod config;
pub mod contact;
pub mod counter;
pub mod data;
mod error;
pub mod filter;
pub mod format;
pub mod hero;
pub mod models;
pub mod routes;
pub mod scroll;

pub use config::SiteConfig;
pub use counter::{AnimatedCounter, CounterPhase, StartOutcome};
pub use error::{ContentError, ContentResult};
pub use filter::{filter, filter_channels, partition, Partitioned};
pub use hero::HeroRotation;
pub use models::{Category, CategoryFilter, ContentItem};
pub use routes::Route;
