//! Content Filter
//!
//! Category + free-text filtering over an immutable list of content items.

use crate::models::{CategoryFilter, ChannelProfile, ContentItem};

/// Filtered items split for display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned<'a> {
    pub featured: Vec<&'a ContentItem>,
    pub regular: Vec<&'a ContentItem>,
}

impl Partitioned<'_> {
    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }
}

/// Return the items accepted by `category` whose title, excerpt or any tag
/// contains `query` (case-insensitive). Relative order is preserved.
///
/// The query is trimmed first, so a whitespace-only query matches everything.
pub fn filter<'a>(items: &'a [ContentItem], category: CategoryFilter, query: &str) -> Vec<&'a ContentItem> {
    let needle = query.trim().to_lowercase();

    let matched: Vec<&ContentItem> = items
        .iter()
        .filter(|item| category.accepts(item.category))
        .filter(|item| needle.is_empty() || matches_query(item, &needle))
        .collect();

    log::trace!(
        "filter category={} query={:?}: {}/{} items",
        category.label(),
        needle,
        matched.len(),
        items.len()
    );
    matched
}

/// `needle` must already be lowercase
fn matches_query(item: &ContentItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.excerpt.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Split by the `featured` flag, keeping relative order on both sides
pub fn partition(matching: Vec<&ContentItem>) -> Partitioned<'_> {
    let (featured, regular) = matching.into_iter().partition(|item| item.featured);
    Partitioned { featured, regular }
}

/// Channel cards accepted by `category`, in catalogue order
pub fn filter_channels(profiles: &[ChannelProfile], category: CategoryFilter) -> Vec<&ChannelProfile> {
    profiles.iter().filter(|p| category.accepts(p.category)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn scenario() -> Vec<ContentItem> {
        vec![
            ContentItem::new("a", "TypeScript Guide", Category::CodeDecode)
                .with_tags(["TypeScript"])
                .with_featured(true),
            ContentItem::new("b", "Boss Battles", Category::GameChanger)
                .with_tags(["Gaming"]),
        ]
    }

    fn ids(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_category_only() {
        let items = scenario();
        let result = filter(&items, CategoryFilter::Only(Category::CodeDecode), "");
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_query_matches_tag() {
        let items = scenario();
        let result = filter(&items, CategoryFilter::All, "gaming");
        assert_eq!(ids(&result), vec!["b"]);
    }

    #[test]
    fn test_no_match() {
        let items = scenario();
        assert!(filter(&items, CategoryFilter::All, "zzz").is_empty());
    }

    #[test]
    fn test_empty_items() {
        assert!(filter(&[], CategoryFilter::All, "").is_empty());
        assert!(filter(&[], CategoryFilter::Only(Category::HorrorNight), "x").is_empty());
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let items = scenario();
        let result = filter(&items, CategoryFilter::All, "   \t ");
        assert_eq!(ids(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let items = scenario();
        let result = filter(&items, CategoryFilter::All, "  boss ");
        assert_eq!(ids(&result), vec!["b"]);
    }

    #[test]
    fn test_excerpt_match() {
        let items = vec![ContentItem::new("c", "Title", Category::HorrorNight).with_excerpt("A haunted hospital")];
        assert_eq!(filter(&items, CategoryFilter::All, "HAUNTED").len(), 1);
    }

    #[test]
    fn test_partition_preserves_order() {
        let items = vec![
            ContentItem::new("1", "one", Category::CodeDecode).with_featured(true),
            ContentItem::new("2", "two", Category::CodeDecode),
            ContentItem::new("3", "three", Category::CodeDecode).with_featured(true),
            ContentItem::new("4", "four", Category::CodeDecode),
        ];
        let parts = partition(filter(&items, CategoryFilter::All, ""));
        assert_eq!(ids(&parts.featured), vec!["1", "3"]);
        assert_eq!(ids(&parts.regular), vec!["2", "4"]);
        assert_eq!(parts.len(), 4);
    }

    #[test]
    fn test_filter_channels() {
        let profiles = crate::data::channel_profiles();
        assert_eq!(filter_channels(profiles, CategoryFilter::All).len(), 3);

        let horror = filter_channels(profiles, CategoryFilter::Only(Category::HorrorNight));
        assert_eq!(horror.len(), 1);
        assert_eq!(horror[0].category, Category::HorrorNight);

        assert!(filter_channels(&[], CategoryFilter::Only(Category::CodeDecode)).is_empty());
    }

    #[test]
    fn test_filter_channels_keeps_order() {
        let profiles = crate::data::channel_profiles();
        let order: Vec<Category> = filter_channels(profiles, CategoryFilter::All).iter().map(|p| p.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_partition_empty() {
        let parts = partition(Vec::new());
        assert!(parts.is_empty());
    }
}
