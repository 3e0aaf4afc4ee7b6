//! Rendering outside of a router, for static site generators and tests.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::layout::AboutView;
use crate::resume::About;

/// Renders a view to HTML under a fresh reactive owner. Nothing in the layout
/// reads the clock or a counter, so the same input always gives the same
/// string.
pub fn render_to_string<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

pub fn render_about(about: About) -> String {
    render_to_string(move || view! { <AboutView about=about /> })
}
