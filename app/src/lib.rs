pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod layout;
pub mod pages;
pub mod render;
pub mod resume;
#[cfg(feature = "ssr")]
pub mod store;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="About me: work experience, projects, activities and education."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="#top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from("About")
            } else {
                format!("About - {}", text)
            }
        }/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // The content is static, render it fully on the server.
                <Route
                    path=StaticSegment("")
                    view=pages::about::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
