//! Routes
//!
//! Path <-> page mapping for the client-side router.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Channels,
    ChannelStats,
    Blogs,
    /// `/blogs/:slug`
    BlogPost(String),
    Contact,
    /// Anything else; keeps the requested path for the 404 page
    NotFound(String),
}

/// Sidebar / mobile navigation entries
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Channels", "/channels"),
    ("Stats", "/channels/stats"),
    ("Blogs", "/blogs"),
    ("Contact", "/contact"),
];

impl Route {
    /// Parse a location path. Query string, fragment and a trailing slash
    /// are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["channels"] => Route::Channels,
            ["channels", "stats"] => Route::ChannelStats,
            ["blogs"] => Route::Blogs,
            ["blogs", slug] => Route::BlogPost((*slug).to_string()),
            ["contact"] => Route::Contact,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Channels => "/channels".to_string(),
            Route::ChannelStats => "/channels/stats".to_string(),
            Route::Blogs => "/blogs".to_string(),
            Route::BlogPost(slug) => format!("/blogs/{slug}"),
            Route::Contact => "/contact".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Document title for the page
    pub fn title(&self) -> String {
        match self {
            Route::Home => "RajHub - Three Channels, One Creator | CodeDecode, GameChanger, Horror Night".to_string(),
            Route::About => "About | RajHub".to_string(),
            Route::Channels => "Channels | RajHub".to_string(),
            Route::ChannelStats => "Channel Statistics | RajHub".to_string(),
            Route::Blogs => "Blog & Articles | RajHub".to_string(),
            Route::BlogPost(_) => "Article | RajHub".to_string(),
            Route::Contact => "Contact | RajHub".to_string(),
            Route::NotFound(_) => "Page Not Found | RajHub".to_string(),
        }
    }

    /// Whether the nav entry for `nav_path` should be highlighted
    pub fn is_under(&self, nav_path: &str) -> bool {
        match nav_path {
            "/" => *self == Route::Home,
            "/channels" => *self == Route::Channels,
            other => {
                let own = self.path();
                own == other || own.starts_with(&format!("{other}/"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/channels/"), Route::Channels);
        assert_eq!(Route::parse("/channels/stats"), Route::ChannelStats);
        assert_eq!(Route::parse("/blogs?tag=x"), Route::Blogs);
        assert_eq!(Route::parse("/blogs/gaming-setup-2024"), Route::BlogPost("gaming-setup-2024".into()));
        assert_eq!(Route::parse("/contact#form"), Route::Contact);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".into()));
        assert_eq!(Route::parse("/blogs/a/b"), Route::NotFound("/blogs/a/b".into()));
        assert_eq!(Route::parse("/channels/other"), Route::NotFound("/channels/other".into()));
    }

    #[test]
    fn test_path_round_trip() {
        for (_, path) in NAV_ITEMS {
            assert_eq!(Route::parse(path).path(), *path);
        }
        let post = Route::BlogPost("urban-legends-explored".into());
        assert_eq!(Route::parse(&post.path()), post);
    }

    #[test]
    fn test_nav_highlight() {
        assert!(Route::BlogPost("x".into()).is_under("/blogs"));
        assert!(Route::ChannelStats.is_under("/channels/stats"));
        assert!(!Route::ChannelStats.is_under("/channels"));
        assert!(!Route::About.is_under("/"));
        assert!(Route::Home.is_under("/"));
    }
}
