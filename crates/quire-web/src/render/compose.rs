//! Submission form for new posts.

use maud::{Markup, html};

use super::components::{PageMeta, page_shell};

/// Render the empty compose form.
///
/// Field names `item` and `postText` are what `POST /compose` expects.
pub fn render(site_name: &str) -> Markup {
    let body = html! {
        h1 class="post-title" { "Compose" }
        form class="compose" method="post" action="/compose" {
            label for="item" { "Title" }
            input id="item" type="text" name="item" required autocomplete="off";
            label for="postText" { "Post" }
            textarea id="postText" name="postText" rows="10" {}
            button type="submit" { "Publish" }
        }
    };

    page_shell(
        PageMeta {
            title: &format!("Compose | {site_name}"),
            description: "Write a new post.",
            keywords: None,
        },
        body,
        site_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_posts_expected_fields() {
        let html = render("My Blog").into_string();
        assert!(html.contains(r#"action="/compose""#));
        assert!(html.contains(r#"name="item""#));
        assert!(html.contains(r#"name="postText""#));
    }
}
