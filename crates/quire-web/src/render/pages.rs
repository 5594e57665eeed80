//! Fixed informational pages.

use maud::{Markup, html};

use super::components::{PageMeta, page_shell};

pub const ABOUT_CONTENT: &str = "Hac habitasse platea dictumst vestibulum rhoncus est pellentesque. Dictumst vestibulum rhoncus est pellentesque elit ullamcorper.";

pub const CONTACT_CONTENT: &str = "Scelerisque eleifend donec pretium vulputate sapien. Rhoncus urna neque viverra justo nec ultrices.";

pub fn about(site_name: &str) -> Markup {
    static_page("About", ABOUT_CONTENT, site_name)
}

pub fn contact(site_name: &str) -> Markup {
    static_page("Contact", CONTACT_CONTENT, site_name)
}

fn static_page(heading: &str, content: &str, site_name: &str) -> Markup {
    let body = html! {
        h1 class="post-title" { (heading) }
        p class="post-body" { (content) }
    };

    page_shell(
        PageMeta {
            title: &format!("{heading} | {site_name}"),
            description: content,
            keywords: None,
        },
        body,
        site_name,
    )
}
