//! UI Components
//!
//! Reusable Leptos components.

mod blog_card;
mod charts;
mod footer;
mod hero;
mod mobile_nav;
mod sidebar;
mod stats_counter;
mod toast;
mod video_carousel;

pub use blog_card::BlogCard;
pub use charts::{EngagementChart, SubscriberChart, ViewsChart};
pub use footer::Footer;
pub use hero::CinematicHero;
pub use mobile_nav::{MobileHeader, MobileNav};
pub use sidebar::Sidebar;
pub use stats_counter::StatsCounter;
pub use toast::{use_toaster, ToastHost, Toaster};
pub use video_carousel::FeaturedCarousel;
