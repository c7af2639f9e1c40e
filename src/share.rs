//! Share Links
//!
//! Social share URLs for blog posts.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept as-is in query values (RFC 3986 unreserved)
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    Facebook,
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::Twitter, ShareTarget::Facebook, ShareTarget::LinkedIn];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::LinkedIn => "LinkedIn",
        }
    }

    pub fn url(self, page_url: &str, title: &str) -> String {
        let page = encode(page_url);
        match self {
            ShareTarget::Twitter => format!("https://twitter.com/intent/tweet?url={}&text={}", page, encode(title)),
            ShareTarget::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", page),
            ShareTarget::LinkedIn => format!("https://www.linkedin.com/sharing/share-offsite/?url={}", page),
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

/// Absolute URL of the current page
pub fn current_url() -> String {
    web_sys::window()
        .and_then(|win| win.location().href().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twitter_url() {
        let url = ShareTarget::Twitter.url("https://rajhub.com/blogs/a-b", "Hi & bye");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Frajhub.com%2Fblogs%2Fa-b&text=Hi%20%26%20bye"
        );
    }

    #[test]
    fn test_linkedin_url() {
        assert_eq!(
            ShareTarget::LinkedIn.url("https://x.io/?q=1", "ignored"),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fx.io%2F%3Fq%3D1"
        );
    }
}
