//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Plain reading layout; a site stylesheet under `/css/styles.css` can
/// override any of it.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#1f6feb;--accent-hover:#1858c0;--border:rgba(31,111,235,.15);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.site-header{max-width:680px;width:100%;display:flex;align-items:baseline;justify-content:space-between;gap:1rem;margin-bottom:2rem;padding-bottom:.75rem;border-bottom:1px solid var(--border)}
.site-name{font-weight:800;font-size:1.25rem;letter-spacing:-.02em;color:var(--fg)}
.site-nav{display:flex;gap:1.25rem;font-size:.95rem}

.intro{color:var(--fg2);margin-bottom:2rem;font-size:1.05rem}
.post-list{display:flex;flex-direction:column;gap:1.75rem}
.post-summary h2{font-size:1.35rem;letter-spacing:-.01em;line-height:1.3}
.post-summary h2 a{color:var(--fg)}
.post-excerpt{color:var(--fg2);margin-top:.35rem}
.read-more{font-size:.9rem}
.empty{color:var(--fg3);font-style:italic}

.post-title{font-size:2rem;font-weight:700;letter-spacing:-.02em;line-height:1.25;margin-bottom:1rem}
.post-body{white-space:pre-wrap;word-break:break-word;font-size:1.05rem;line-height:1.75}

.compose{display:flex;flex-direction:column;gap:1rem}
.compose label{font-weight:600;font-size:.95rem}
.compose input,.compose textarea{width:100%;font:inherit;padding:.55rem .75rem;border:1px solid var(--border);border-radius:6px;background:#fff;color:var(--fg)}
.compose textarea{min-height:14rem;resize:vertical}
.compose button{align-self:flex-start;padding:.55rem 1.1rem;background:var(--accent);color:#fff;border:none;border-radius:6px;font-size:.95rem;font-weight:500;cursor:pointer}
.compose button:hover{background:var(--accent-hover)}

.footer{text-align:center;margin-top:2rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:680px}

@media(prefers-color-scheme:dark){
:root{--bg:#0d1117;--fg:#e6edf3;--fg2:#a0a8b0;--fg3:#6e7681;--accent:#58a6ff;--accent-hover:#79b8ff;--border:rgba(88,166,255,.2)}
.compose input,.compose textarea{background:#161b22}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#1a1a2e;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#1f6feb}
@media(prefers-color-scheme:dark){
body{background:#0d1117;color:#e6edf3}
.error-page p{color:#aaa}
.error-page a{color:#58a6ff}
}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles and same-origin stylesheets/images only. No scripts. Forms
/// may only post back to this origin.
pub const CSP_HEADER: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' https: data:; script-src 'none'; form-action 'self'; frame-ancestors 'none'; base-uri 'self'";

/// Head metadata for a page.
pub struct PageMeta<'a> {
    /// `<title>` text.
    pub title: &'a str,
    /// `<meta name="description">`.
    pub description: &'a str,
    /// `<meta name="keywords">`, omitted when `None`.
    pub keywords: Option<&'a str>,
}

/// Render the full HTML page shell with `<head>`, site header, and footer.
pub fn page_shell(meta: PageMeta<'_>, body_content: Markup, site_name: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @if let Some(keywords) = meta.keywords {
                    meta name="keywords" content=(keywords);
                }
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:site_name" content=(site_name);
                style { (PreEscaped(PAGE_CSS)) }
                link rel="stylesheet" href="/css/styles.css";
            }
            body {
                (site_header(site_name))
                main { (body_content) }
                footer class="footer" {
                    (site_name)
                }
            }
        }
    }
}

/// Site name plus the navigation links shown on every page.
fn site_header(site_name: &str) -> Markup {
    html! {
        header class="site-header" {
            a class="site-name" href="/" { (site_name) }
            nav class="site-nav" {
                a href="/" { "Home" }
                a href="/about" { "About" }
                a href="/contact" { "Contact" }
                a href="/compose" { "Compose" }
            }
        }
    }
}

/// Truncate a string to a maximum byte length, appending "..." if truncated.
///
/// Backs off to the previous character boundary so multi-byte characters
/// are never split.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// The first `max_chars` characters of `s`, with no ellipsis.
pub fn head_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
