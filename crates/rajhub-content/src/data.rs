//! Content Catalogue
//!
//! Static mock data for every page. Built once, lazily.

use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::models::{
    Article, Category, ChannelMetrics, ChannelProfile, ChannelStatsSummary, ContactDetail, ContentItem,
    EngagementPoint, HeroChannel, MetricValue, Milestone, StatHighlight, SubscriberPoint, VideoCard,
    VideoSummary, ViewsPoint,
};

static BLOG_POSTS: OnceLock<Vec<ContentItem>> = OnceLock::new();
static ARTICLES: OnceLock<Vec<Article>> = OnceLock::new();
static CHANNEL_PROFILES: OnceLock<Vec<ChannelProfile>> = OnceLock::new();

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ========================
// Blog
// ========================

/// Blog post summaries, newest first
pub fn blog_posts() -> &'static [ContentItem] {
    BLOG_POSTS.get_or_init(|| {
        vec![
            ContentItem::new(
                "react-server-components-guide",
                "The Complete Guide to React Server Components",
                Category::CodeDecode,
            )
            .with_excerpt("Dive deep into React Server Components and learn how they change the way we build modern web applications.")
            .with_tags(["React", "TypeScript", "Web Dev"])
            .with_read_time(12)
            .with_published(date(2024, 12, 8))
            .with_image("https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=450&fit=crop")
            .with_featured(true),
            ContentItem::new("gaming-setup-2024", "Ultimate Gaming Setup Guide for 2024", Category::GameChanger)
                .with_excerpt("Build the perfect gaming battlestation with our comprehensive guide covering everything from monitors to peripherals.")
                .with_tags(["Gaming", "Setup", "Hardware"])
                .with_read_time(8)
                .with_published(date(2024, 12, 5))
                .with_image("https://images.unsplash.com/photo-1598550476439-6847785fcea6?w=800&h=450&fit=crop")
                .with_featured(true),
            ContentItem::new(
                "writing-horror-stories",
                "The Art of Writing Spine-Chilling Horror Stories",
                Category::HorrorNight,
            )
            .with_excerpt("Learn the techniques behind crafting horror narratives that keep your audience on the edge of their seats.")
            .with_tags(["Writing", "Horror", "Storytelling"])
            .with_read_time(10)
            .with_published(date(2024, 12, 2))
            .with_image("https://images.unsplash.com/photo-1512805121331-92b37f7ecd36?w=800&h=450&fit=crop")
            .with_featured(true),
            ContentItem::new("typescript-best-practices", "TypeScript Best Practices for 2024", Category::CodeDecode)
                .with_excerpt("Master TypeScript with these essential best practices that will make your code more robust and maintainable.")
                .with_tags(["TypeScript", "Best Practices"])
                .with_read_time(15)
                .with_published(date(2024, 11, 28))
                .with_image("https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=450&fit=crop"),
            ContentItem::new("boss-battle-strategies", "Mastering Boss Battles: Pro Strategies", Category::GameChanger)
                .with_excerpt("From Dark Souls to Elden Ring, learn the universal strategies that will help you defeat any boss.")
                .with_tags(["Gaming", "Strategy", "Tips"])
                .with_read_time(7)
                .with_published(date(2024, 11, 25))
                .with_image("https://images.unsplash.com/photo-1542751371-adc38448a05e?w=800&h=450&fit=crop"),
            ContentItem::new(
                "urban-legends-explored",
                "10 Urban Legends That Turned Out to Be True",
                Category::HorrorNight,
            )
            .with_excerpt("Sometimes the scariest stories are the ones that actually happened. Explore these terrifying true tales.")
            .with_tags(["Horror", "True Stories"])
            .with_read_time(14)
            .with_published(date(2024, 11, 20))
            .with_image("https://images.unsplash.com/photo-1518709268805-4e9042af9f23?w=800&h=450&fit=crop"),
        ]
    })
}

pub fn blog_post(slug: &str) -> Option<&'static ContentItem> {
    blog_posts().iter().find(|post| post.id == slug)
}

/// Full article for a slug. Only some posts have a body yet.
pub fn article(slug: &str) -> Option<&'static Article> {
    articles().iter().find(|a| a.summary.id == slug)
}

fn articles() -> &'static [Article] {
    ARTICLES.get_or_init(|| {
        let bodies: [(&str, &[&str], &str); 3] = [
            (
                "react-server-components-guide",
                &["React", "TypeScript", "Web Dev", "Server Components"],
                RSC_BODY,
            ),
            (
                "gaming-setup-2024",
                &["Gaming", "Setup", "Hardware", "Reviews"],
                GAMING_SETUP_BODY,
            ),
            (
                "writing-horror-stories",
                &["Writing", "Horror", "Storytelling", "Creative"],
                HORROR_WRITING_BODY,
            ),
        ];

        bodies
            .into_iter()
            .filter_map(|(slug, tags, body)| {
                let summary = blog_post(slug)?.clone();
                Some(Article {
                    summary,
                    tags: strings(tags),
                    body: body.trim().to_string(),
                })
            })
            .collect()
    })
}

/// Other posts worth reading after `slug`: most shared tags first, then newest.
pub fn related_posts(slug: &str, limit: usize) -> Vec<&'static ContentItem> {
    let own_tags: Vec<String> = article(slug)
        .map(|a| a.tags.clone())
        .or_else(|| blog_post(slug).map(|p| p.tags.clone()))
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect();

    let mut candidates: Vec<(usize, &ContentItem)> = blog_posts()
        .iter()
        .filter(|post| post.id != slug)
        .map(|post| {
            let shared = post
                .tags
                .iter()
                .filter(|t| own_tags.contains(&t.to_lowercase()))
                .count();
            (shared, post)
        })
        .collect();

    candidates.sort_by(|(shared_a, a), (shared_b, b)| {
        shared_b.cmp(shared_a).then_with(|| b.published.cmp(&a.published))
    });
    candidates.into_iter().take(limit).map(|(_, post)| post).collect()
}

const RSC_BODY: &str = r#"
## Introduction

React Server Components (RSC) represent a paradigm shift in how we think about building React applications. By enabling components to run exclusively on the server, RSC opens up new possibilities for performance optimization and data fetching.

## What Are Server Components?

Server Components are a new type of React component that runs only on the server. Unlike traditional React components that execute in the browser, Server Components:

- **Never ship to the client** - Their code stays on the server
- **Can directly access backend resources** - Databases, file systems, internal APIs
- **Have zero impact on bundle size** - Dependencies stay server-side
- **Enable streaming** - Content renders progressively

```typescript
// This is a Server Component
async function BlogPost({ id }: { id: string }) {
  const post = await db.posts.findUnique({ where: { id } });

  return (
    <article>
      <h1>{post.title}</h1>
      <p>{post.content}</p>
    </article>
  );
}
```

## Benefits of Server Components

### 1. Improved Performance

Server Components eliminate the need to send component code to the client, reducing JavaScript bundle sizes significantly.

### 2. Direct Backend Access

You can query databases, read files, or call internal APIs directly in your components without building separate API routes.

### 3. Better SEO

Content rendered by Server Components is immediately available in the HTML, improving search engine indexing.

## When to Use Server Components

- Data fetching
- Accessing backend resources
- Large dependency usage
- Sensitive operations

## Conclusion

React Server Components are transforming how we build web applications. By understanding when and how to use them, you can create faster, more efficient React applications.
"#;

const GAMING_SETUP_BODY: &str = r#"
## Building Your Dream Setup

Creating the ultimate gaming setup is about more than just having the best hardware. It's about creating an environment where you can perform at your best while enjoying every moment.

## Essential Components

### Monitor Selection

For competitive gaming, consider:
- **Response Time**: 1ms or lower
- **Refresh Rate**: 144Hz minimum, 240Hz for competitive
- **Resolution**: 1440p offers the best balance

### Keyboard & Mouse

Your input devices are crucial:
- Mechanical keyboards with linear switches for gaming
- Lightweight mice with good sensors
- Large mousepad for low sensitivity players

## Cable Management

Nothing ruins a setup like messy cables:
- Use cable trays under your desk
- Velcro straps for bundling
- Color-matched cables for aesthetics

## Lighting

RGB isn't just about looks:
- Bias lighting reduces eye strain
- Sync your lights with games
- Use warm white for streaming

## Conclusion

Your gaming setup should reflect your personality while providing the performance you need. Start with the essentials and upgrade over time.
"#;

const HORROR_WRITING_BODY: &str = r#"
## The Psychology of Fear

Horror works because it taps into our primal fears. Understanding what scares people is the first step to writing effective horror.

## Building Tension

The best horror isn't about jump scares. It's about sustained dread:

### Pacing
- Start slow, build gradually
- Use quiet moments to amplify loud ones
- Never rush the reveal

### Atmosphere
- Engage all senses in your descriptions
- Use weather and environment
- Create isolation

## Common Horror Tropes

While tropes exist for a reason, subverting them creates memorable stories:

- The haunted house
- The monster in the dark
- The unreliable narrator
- Body horror
- Psychological terror

## Writing Exercise

Try this: write a scene where the horror comes from something completely ordinary. A child's toy. A phone notification. A familiar song playing at the wrong time.

## Conclusion

Horror is about more than monsters and gore. It's about understanding human psychology and using narrative craft to create an emotional experience your audience won't forget.
"#;

// ========================
// Channels
// ========================

pub fn channel_profiles() -> &'static [ChannelProfile] {
    CHANNEL_PROFILES.get_or_init(|| {
        let video = |title: &str, views: &str, duration: &str| VideoSummary {
            title: title.to_string(),
            views: views.to_string(),
            duration: duration.to_string(),
        };
        let stats = |subscribers: &str, videos: &str, views: &str, avg_views: &str| ChannelStatsSummary {
            subscribers: subscribers.to_string(),
            videos: videos.to_string(),
            views: views.to_string(),
            avg_views: avg_views.to_string(),
        };

        vec![
            ChannelProfile {
                category: Category::CodeDecode,
                name: "CodeDecode".to_string(),
                tagline: "Decode the Future — Learn Practical Code in Minutes".to_string(),
                description: "Master programming with bite-sized tutorials covering web development, algorithms, and modern tech stacks. Perfect for beginners and experienced developers alike.".to_string(),
                stats: stats("180K", "450", "20M", "44K"),
                playlists: strings(&["React Mastery", "TypeScript Deep Dive", "System Design", "DSA Bootcamp"]),
                latest_videos: vec![
                    video("Building a Full-Stack App", "125K", "32:15"),
                    video("Master TypeScript in 2024", "98K", "55:20"),
                    video("React Server Components", "76K", "28:40"),
                ],
            },
            ChannelProfile {
                category: Category::GameChanger,
                name: "GameChanger".to_string(),
                tagline: "Play Fearlessly — Next-Gen Gaming Guides & Highlights".to_string(),
                description: "Epic gameplay, in-depth reviews, and pro tips for the latest games. Level up your gaming experience with guides, walkthroughs, and entertainment.".to_string(),
                stats: stats("220K", "380", "18M", "47K"),
                playlists: strings(&["Boss Battles", "Game Reviews", "Speedruns", "Let's Play"]),
                latest_videos: vec![
                    video("Epic Boss Battle: Shadow King", "89K", "18:42"),
                    video("Stellar Odyssey Review", "156K", "24:18"),
                    video("100% Completion Guide", "134K", "1:12:30"),
                ],
            },
            ChannelProfile {
                category: Category::HorrorNight,
                name: "Horror Night With Raj".to_string(),
                tagline: "Lights. Silence. Story. Welcome to the Dark.".to_string(),
                description: "Spine-chilling stories told in the dead of night. Original horror tales, urban legends, and true scary stories that will keep you awake.".to_string(),
                stats: stats("150K", "200", "12M", "60K"),
                playlists: strings(&["Original Stories", "True Horror", "Urban Legends", "Creepypasta"]),
                latest_videos: vec![
                    video("The Abandoned Hospital", "210K", "45:30"),
                    video("3AM Challenge Gone Wrong", "185K", "38:15"),
                    video("The Faceless Stranger", "142K", "52:00"),
                ],
            },
        ]
    })
}

pub fn channel_profile(category: Category) -> Option<&'static ChannelProfile> {
    channel_profiles().iter().find(|p| p.category == category)
}

/// Slides of the home page hero, in rotation order
pub fn hero_channels() -> Vec<HeroChannel> {
    let slide = |category, name: &str, tagline: &str, subtitle: &str, stats: (&str, &str, &str), cta: &str| HeroChannel {
        category,
        name: name.to_string(),
        tagline: tagline.to_string(),
        subtitle: subtitle.to_string(),
        subscribers: stats.0.to_string(),
        views: stats.1.to_string(),
        videos: stats.2.to_string(),
        cta: cta.to_string(),
    };

    vec![
        slide(
            Category::CodeDecode,
            "CodeDecode",
            "Decode the Future",
            "Learn Practical Code in Minutes",
            ("245K", "12M", "342"),
            "Start Learning",
        ),
        slide(
            Category::GameChanger,
            "GameChanger",
            "Play Fearlessly",
            "Next-Gen Gaming Guides & Highlights",
            ("189K", "8.5M", "215"),
            "Watch Now",
        ),
        slide(
            Category::HorrorNight,
            "Horror Night With Raj",
            "Welcome to the Dark",
            "Lights. Silence. Story.",
            ("312K", "18M", "178"),
            "Enter the Dark",
        ),
    ]
}

pub fn featured_videos() -> Vec<VideoCard> {
    let card = |id, title: &str, thumbnail: &str, category, views: &str, duration: &str| VideoCard {
        id,
        title: title.to_string(),
        thumbnail: thumbnail.to_string(),
        category,
        views: views.to_string(),
        duration: duration.to_string(),
    };

    vec![
        card(
            1,
            "Building a Full-Stack App with React & Node.js",
            "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800&h=450&fit=crop",
            Category::CodeDecode,
            "125K",
            "32:15",
        ),
        card(
            2,
            "Epic Boss Battle: Defeating the Shadow King",
            "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=800&h=450&fit=crop",
            Category::GameChanger,
            "89K",
            "18:42",
        ),
        card(
            3,
            "The Abandoned Hospital - A True Horror Story",
            "https://images.unsplash.com/photo-1509248961895-40e8d9e0bd2c?w=800&h=450&fit=crop",
            Category::HorrorNight,
            "210K",
            "45:30",
        ),
        card(
            4,
            "Master TypeScript in 2024 - Complete Guide",
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=450&fit=crop",
            Category::CodeDecode,
            "98K",
            "55:20",
        ),
        card(
            5,
            "New Game Review: Stellar Odyssey",
            "https://images.unsplash.com/photo-1552820728-8b83bb6b2b0e?w=800&h=450&fit=crop",
            Category::GameChanger,
            "156K",
            "24:18",
        ),
    ]
}

// ========================
// Stats
// ========================

/// Animated totals on the home page
pub fn home_stats() -> Vec<StatHighlight> {
    [
        ("Total Subscribers", 746_000, "+"),
        ("Total Views", 38_500_000, "+"),
        ("Videos Published", 735, ""),
        ("Awards & Features", 24, ""),
    ]
    .into_iter()
    .map(|(label, value, suffix)| StatHighlight {
        label: label.to_string(),
        value,
        suffix: suffix.to_string(),
    })
    .collect()
}

pub fn channel_metrics() -> Vec<ChannelMetrics> {
    let metric = |value: &str, change: &str, trending_up| MetricValue {
        value: value.to_string(),
        change: change.to_string(),
        trending_up,
    };

    vec![
        ChannelMetrics {
            category: Category::CodeDecode,
            name: "CodeDecode".to_string(),
            color: "#00d4ff".to_string(),
            subscribers: metric("180K", "+8.5%", true),
            views: metric("20M", "+12.3%", true),
            watch_time: metric("2.5M hrs", "+5.2%", true),
            avg_views: metric("44K", "-2.1%", false),
        },
        ChannelMetrics {
            category: Category::GameChanger,
            name: "GameChanger".to_string(),
            color: "#e11d48".to_string(),
            subscribers: metric("220K", "+10.2%", true),
            views: metric("18M", "+8.7%", true),
            watch_time: metric("1.8M hrs", "+6.8%", true),
            avg_views: metric("47K", "+3.5%", true),
        },
        ChannelMetrics {
            category: Category::HorrorNight,
            name: "Horror Night".to_string(),
            color: "#dc2626".to_string(),
            subscribers: metric("150K", "+15.4%", true),
            views: metric("12M", "+18.2%", true),
            watch_time: metric("1.2M hrs", "+22.1%", true),
            avg_views: metric("60K", "+8.9%", true),
        },
    ]
}

pub const SUBSCRIBER_GROWTH: [SubscriberPoint; 7] = [
    SubscriberPoint { month: "Jan", codedecode: 145_000, gamechanger: 180_000, horror: 120_000 },
    SubscriberPoint { month: "Feb", codedecode: 150_000, gamechanger: 188_000, horror: 125_000 },
    SubscriberPoint { month: "Mar", codedecode: 158_000, gamechanger: 195_000, horror: 130_000 },
    SubscriberPoint { month: "Apr", codedecode: 162_000, gamechanger: 200_000, horror: 135_000 },
    SubscriberPoint { month: "May", codedecode: 168_000, gamechanger: 208_000, horror: 140_000 },
    SubscriberPoint { month: "Jun", codedecode: 175_000, gamechanger: 215_000, horror: 145_000 },
    SubscriberPoint { month: "Jul", codedecode: 180_000, gamechanger: 220_000, horror: 150_000 },
];

pub const MONTHLY_VIEWS: [ViewsPoint; 7] = [
    ViewsPoint { month: "Jan", views: 2_500_000 },
    ViewsPoint { month: "Feb", views: 2_800_000 },
    ViewsPoint { month: "Mar", views: 3_200_000 },
    ViewsPoint { month: "Apr", views: 3_000_000 },
    ViewsPoint { month: "May", views: 3_500_000 },
    ViewsPoint { month: "Jun", views: 3_800_000 },
    ViewsPoint { month: "Jul", views: 4_200_000 },
];

pub const ENGAGEMENT: [EngagementPoint; 3] = [
    EngagementPoint { metric: "Likes", codedecode: 850_000, gamechanger: 920_000, horror: 780_000 },
    EngagementPoint { metric: "Comments", codedecode: 125_000, gamechanger: 145_000, horror: 180_000 },
    EngagementPoint { metric: "Shares", codedecode: 45_000, gamechanger: 52_000, horror: 38_000 },
];

/// Subscriber series for one channel, in month order
pub fn subscriber_series(category: Category) -> Vec<u64> {
    SUBSCRIBER_GROWTH.iter().map(|p| p.for_category(category)).collect()
}

// ========================
// About / Contact
// ========================

pub fn milestones() -> Vec<Milestone> {
    [
        ("2019", "CodeDecode Launch", "Started sharing coding tutorials"),
        ("2020", "100K Subscribers", "CodeDecode hits first milestone"),
        ("2021", "GameChanger Born", "Expanded into gaming content"),
        ("2022", "Horror Night Debut", "First horror story uploaded"),
        ("2023", "500K Combined", "Half million across all channels"),
        ("2024", "The Journey Continues", "New content, new horizons"),
    ]
    .into_iter()
    .map(|(year, title, description)| Milestone {
        year: year.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn contact_details() -> Vec<ContactDetail> {
    [
        ("Email", "hello@rajhub.com", "For business inquiries"),
        ("Discord", "RajHub Community", "Join the community"),
        ("Response Time", "24-48 hours", "Usually faster"),
    ]
    .into_iter()
    .map(|(title, value, description)| ContactDetail {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Social profiles shown in the footer, about and contact pages
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("YouTube", "https://youtube.com/@rajhub"),
    ("Twitter", "https://twitter.com/rajhub"),
    ("Instagram", "https://instagram.com/rajhub"),
    ("GitHub", "https://github.com/rajhub"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_blog_ids_unique() {
        let ids: HashSet<&str> = blog_posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), blog_posts().len());
    }

    #[test]
    fn test_articles_resolve() {
        let setup = article("gaming-setup-2024").unwrap();
        assert_eq!(setup.summary.category, Category::GameChanger);
        assert!(setup.body.starts_with("## Building Your Dream Setup"));
        assert!(setup.tags.contains(&"Reviews".to_string()));
        assert!(article("typescript-best-practices").is_none());
        assert!(article("missing").is_none());
    }

    #[test]
    fn test_related_posts() {
        let related = related_posts("react-server-components-guide", 3);
        assert_eq!(related.len(), 3);
        // shares the TypeScript tag
        assert_eq!(related[0].id, "typescript-best-practices");
        assert!(related.iter().all(|p| p.id != "react-server-components-guide"));
    }

    #[test]
    fn test_every_category_has_a_channel() {
        for category in Category::ALL {
            assert!(channel_profile(category).is_some());
        }
        assert_eq!(hero_channels().len(), 3);
    }

    #[test]
    fn test_subscriber_series() {
        let series = subscriber_series(Category::HorrorNight);
        assert_eq!(series.len(), 7);
        assert_eq!(series.first(), Some(&120_000));
        assert_eq!(series.last(), Some(&150_000));
    }
}
