use rajhub_content::data::blog_posts;
use rajhub_content::{filter, partition, Category, CategoryFilter, ContentItem};

fn ids<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn all_and_empty_query_returns_everything_in_order() {
    let posts = blog_posts();
    let result = filter(posts, CategoryFilter::All, "");
    let expected: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids(&result), expected);
}

#[test]
fn other_categories_are_excluded() {
    let posts = blog_posts();
    for category in Category::ALL {
        for query in ["", "the", "gaming", "typescript"] {
            let result = filter(posts, CategoryFilter::Only(category), query);
            assert!(result.iter().all(|p| p.category == category));
        }
    }
}

#[test]
fn query_is_case_insensitive() {
    let posts = blog_posts();
    assert_eq!(
        filter(posts, CategoryFilter::All, "REACT"),
        filter(posts, CategoryFilter::All, "react")
    );
    assert!(!filter(posts, CategoryFilter::All, "react").is_empty());
}

#[test]
fn tag_only_match_is_included() {
    // "Strategy" appears only in the tags of the boss battle post
    let result = filter(blog_posts(), CategoryFilter::All, "strategy");
    assert_eq!(ids(&result), vec!["boss-battle-strategies"]);
}

#[test]
fn partition_is_a_total_disjoint_split() {
    let posts = blog_posts();
    for option in CategoryFilter::OPTIONS {
        for query in ["", "horror", "zzz", "  "] {
            let matching = filter(posts, option, query);
            let total = matching.len();
            let parts = partition(matching);
            assert_eq!(parts.featured.len() + parts.regular.len(), total);
            assert!(parts.featured.iter().all(|p| p.featured));
            assert!(parts.regular.iter().all(|p| !p.featured));
            assert!(parts
                .featured
                .iter()
                .all(|f| !parts.regular.iter().any(|r| r.id == f.id)));
        }
    }
}

#[test]
fn catalogue_featured_split() {
    let parts = partition(filter(blog_posts(), CategoryFilter::Only(Category::HorrorNight), ""));
    assert_eq!(ids(&parts.featured), vec!["writing-horror-stories"]);
    assert_eq!(ids(&parts.regular), vec!["urban-legends-explored"]);
}
