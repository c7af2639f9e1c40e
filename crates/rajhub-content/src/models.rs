//! Content Models
//!
//! Data structures shared by the catalogue, the filters and the UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the three RajHub brands. Blog posts, videos and channels are all
/// tagged with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    CodeDecode,
    GameChanger,
    #[serde(rename = "Horror Night")]
    HorrorNight,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::CodeDecode, Category::GameChanger, Category::HorrorNight];

    /// Display label, also the value used by category filters
    pub fn label(self) -> &'static str {
        match self {
            Category::CodeDecode => "CodeDecode",
            Category::GameChanger => "GameChanger",
            Category::HorrorNight => "Horror Night",
        }
    }

    /// Key used for CSS theme classes (`bg-gradient-codedecode`, ...)
    pub fn theme_key(self) -> &'static str {
        match self {
            Category::CodeDecode => "codedecode",
            Category::GameChanger => "gamechanger",
            Category::HorrorNight => "horror",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::CodeDecode => "</>",
            Category::GameChanger => "🎮",
            Category::HorrorNight => "👻",
        }
    }
}

/// Category selector: the "All" sentinel or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::CodeDecode),
        CategoryFilter::Only(Category::GameChanger),
        CategoryFilter::Only(Category::HorrorNight),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// A listable content entry (blog post summary)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique slug, also the article route segment
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(default)]
    pub read_time_minutes: u32,
    #[serde(default)]
    pub published: NaiveDate,
    #[serde(default)]
    pub image: String,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            category,
            tags: Vec::new(),
            featured: false,
            read_time_minutes: 0,
            published: NaiveDate::default(),
            image: String::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time_minutes = minutes;
        self
    }

    pub fn with_published(mut self, published: NaiveDate) -> Self {
        self.published = published;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Full article shown on the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub summary: ContentItem,
    /// Tags shown on the detail page (superset of the summary tags)
    pub tags: Vec<String>,
    /// Markdown body
    pub body: String,
}

/// Headline numbers for a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelStatsSummary {
    pub subscribers: String,
    pub videos: String,
    pub views: String,
    pub avg_views: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub title: String,
    pub views: String,
    pub duration: String,
}

/// Section shown inside a channel card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelTab {
    #[default]
    Latest,
    Playlists,
    About,
}

impl ChannelTab {
    pub const ALL: [ChannelTab; 3] = [ChannelTab::Latest, ChannelTab::Playlists, ChannelTab::About];

    pub fn label(self) -> &'static str {
        match self {
            ChannelTab::Latest => "Latest",
            ChannelTab::Playlists => "Playlists",
            ChannelTab::About => "About",
        }
    }
}

/// Channel card on the channels page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelProfile {
    pub category: Category,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub stats: ChannelStatsSummary,
    pub playlists: Vec<String>,
    pub latest_videos: Vec<VideoSummary>,
}

/// One slide of the home page hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroChannel {
    pub category: Category,
    pub name: String,
    pub tagline: String,
    pub subtitle: String,
    pub subscribers: String,
    pub views: String,
    pub videos: String,
    pub cta: String,
}

/// Video in the horizontal "featured" carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCard {
    pub id: u32,
    pub title: String,
    pub thumbnail: String,
    pub category: Category,
    pub views: String,
    pub duration: String,
}

/// Big animated number on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatHighlight {
    pub label: String,
    pub value: u64,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: String,
    pub change: String,
    pub trending_up: bool,
}

/// Per-channel metric block on the stats page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelMetrics {
    pub category: Category,
    pub name: String,
    /// Chart colour (hex)
    pub color: String,
    pub subscribers: MetricValue,
    pub views: MetricValue,
    pub watch_time: MetricValue,
    pub avg_views: MetricValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscriberPoint {
    pub month: &'static str,
    pub codedecode: u64,
    pub gamechanger: u64,
    pub horror: u64,
}

impl SubscriberPoint {
    pub fn for_category(&self, category: Category) -> u64 {
        match category {
            Category::CodeDecode => self.codedecode,
            Category::GameChanger => self.gamechanger,
            Category::HorrorNight => self.horror,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewsPoint {
    pub month: &'static str,
    pub views: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementPoint {
    pub metric: &'static str,
    pub codedecode: u64,
    pub gamechanger: u64,
    pub horror: u64,
}

impl EngagementPoint {
    pub fn for_category(&self, category: Category) -> u64 {
        match category {
            Category::CodeDecode => self.codedecode,
            Category::GameChanger => self.gamechanger,
            Category::HorrorNight => self.horror,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub title: String,
    pub value: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_tab_default_is_latest() {
        assert_eq!(ChannelTab::default(), ChannelTab::Latest);
        assert_eq!(ChannelTab::ALL.map(ChannelTab::label), ["Latest", "Playlists", "About"]);
    }

    #[test]
    fn test_category_filter_accepts() {
        assert!(CategoryFilter::All.accepts(Category::GameChanger));
        assert!(CategoryFilter::Only(Category::GameChanger).accepts(Category::GameChanger));
        assert!(!CategoryFilter::Only(Category::CodeDecode).accepts(Category::HorrorNight));
    }
}
