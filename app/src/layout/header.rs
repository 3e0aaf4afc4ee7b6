use leptos::prelude::*;

use crate::components::{Image, Link, SocialIcon, SocialKind};
use crate::resume::AuthorProfile;

/// Width and height of the avatar, in CSS pixels.
pub const AVATAR_SIZE: u32 = 192;

#[component]
pub fn ProfileHeader(
    profile: AuthorProfile,
    greeting: Vec<String>,
    #[prop(into)] avatar_alt: String,
    #[prop(into)] blog_label: String,
) -> impl IntoView {
    let AuthorProfile {
        avatar,
        email,
        linkedin,
        github,
        blog,
        ..
    } = profile;

    view! {
        <header class="profile-header">
            <Image
                src=avatar
                alt=avatar_alt
                width=AVATAR_SIZE
                height=AVATAR_SIZE
                class_name="avatar"
            />
            <div class="profile-intro">
                <h1 class="greeting">
                    {greeting
                        .into_iter()
                        .map(|line| view! { <span class="greeting-line">{line}</span> })
                        .collect_view()}
                </h1>
                <div class="social-links">
                    <SocialIcon kind=SocialKind::Mail href=format!("mailto:{email}") />
                    <SocialIcon kind=SocialKind::Github href=github />
                    <SocialIcon kind=SocialKind::Linkedin href=linkedin />
                    <Link href=blog target="_blank" class_name="blog-link">
                        {blog_label}
                    </Link>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn BodyContent(children: Children) -> impl IntoView {
    view! { <section class="body-content">{children()}</section> }
}
