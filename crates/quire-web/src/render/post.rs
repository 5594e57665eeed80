//! Single post page and the metadata derived from a post.

use maud::{Markup, html};

use super::components::{PageMeta, head_chars, page_shell};
use quire_core::Post;

/// Maximum length of the meta description, in characters.
pub const DESCRIPTION_CHARS: usize = 150;

/// Keywords appended to every post's own keywords.
const SITE_KEYWORDS: &str = "blog, articles";

/// Search metadata derived from a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    /// `"{title} | {site_name}"`.
    pub page_title: String,
    /// The first [`DESCRIPTION_CHARS`] characters of the body.
    pub description: String,
    /// Title words joined by `", "`, followed by the site keywords.
    pub keywords: String,
}

impl PostMeta {
    pub fn derive(post: &Post, site_name: &str) -> Self {
        let page_title = format!("{} | {site_name}", post.title);
        let description = head_chars(&post.detail, DESCRIPTION_CHARS).to_string();

        let mut words: Vec<&str> = post.title.split_whitespace().collect();
        words.push(SITE_KEYWORDS);
        let keywords = words.join(", ");

        Self {
            page_title,
            description,
            keywords,
        }
    }
}

/// Render a post detail page.
pub fn render(post: &Post, site_name: &str) -> Markup {
    let meta = PostMeta::derive(post, site_name);

    let body = html! {
        article {
            h1 class="post-title" { (post.title) }
            div class="post-body" { (post.detail) }
        }
    };

    page_shell(
        PageMeta {
            title: &meta.page_title,
            description: &meta.description,
            keywords: Some(&meta.keywords),
        },
        body,
        site_name,
    )
}
