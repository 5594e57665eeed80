//! Listing page: every post with a short excerpt.

use maud::{Markup, html};

use super::components::{PageMeta, page_shell, truncate};
use quire_core::Post;

/// Intro paragraph shown above the post list.
pub const HOME_INTRO: &str = "Lacus vel facilisis volutpat est velit egestas dui id ornare. Semper auctor neque vitae tempus quam. Sit amet cursus sit amet dictum sit amet justo.";

/// Excerpt length on the listing page, in bytes.
const EXCERPT_LEN: usize = 100;

/// Render the listing page.
pub fn render(posts: &[Post], site_name: &str) -> Markup {
    let body = html! {
        p class="intro" { (HOME_INTRO) }

        @if posts.is_empty() {
            p class="empty" { "No posts yet. " a href="/compose" { "Write the first one." } }
        } @else {
            div class="post-list" {
                @for post in posts {
                    (summary(post))
                }
            }
        }
    };

    page_shell(
        PageMeta {
            title: site_name,
            description: HOME_INTRO,
            keywords: None,
        },
        body,
        site_name,
    )
}

fn summary(post: &Post) -> Markup {
    let href = format!("/posts/{}", post.slug);
    html! {
        article class="post-summary" {
            h2 { a href=(href) { (post.title) } }
            p class="post-excerpt" {
                (truncate(&post.detail, EXCERPT_LEN))
                " "
                a class="read-more" href=(href) { "Read More" }
            }
        }
    }
}
