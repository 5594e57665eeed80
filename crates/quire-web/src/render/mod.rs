//! HTML rendering for Quire pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).
//! Renderers are pure functions of their inputs; handlers fetch from the
//! store and pass the results in.

pub mod components;
pub mod compose;
pub mod home;
pub mod pages;
pub mod post;
