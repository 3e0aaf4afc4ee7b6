use leptos::prelude::*;
use leptos_meta::Title;

use crate::layout::AboutView;
use crate::resume::About;

#[component]
pub fn Index() -> impl IntoView {
    let about = Resource::new_blocking(|| (), move |_| async { get_about().await });

    view! {
        {move || match about.get() {
            None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
            Some(Ok(about)) => leptos::either::EitherOf3::B(view! {
                <Title text=about.resume.author.name.clone() />
                <AboutView about=about />
            }.into_view()),
            Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                <p>{format!("Could not load the about page: {}", err)}</p>
            }.into_view()),
        }}
    }
}

#[server(GetAbout, "/api", "GetJson", "about")]
pub async fn get_about() -> Result<About, ServerFnError> {
    let Some(store) = use_context::<crate::store::Store>() else {
        return Err(ServerFnError::new("the content store is not in the context"));
    };
    store.about().map_err(|error| ServerFnError::new(error))
}
