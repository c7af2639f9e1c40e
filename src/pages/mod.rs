//! Pages
//!
//! One component per route.

mod about;
mod blog_details;
mod blogs;
mod channel_stats;
mod channels;
mod contact;
mod home;
mod not_found;

pub use about::AboutPage;
pub use blog_details::BlogDetailsPage;
pub use blogs::BlogsPage;
pub use channel_stats::ChannelStatsPage;
pub use channels::ChannelsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
