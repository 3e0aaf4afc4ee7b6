mod entries;
mod header;
mod timeline;

pub use entries::{EducationBlock, EntrySection};
pub use header::{BodyContent, ProfileHeader, AVATAR_SIZE};
pub use timeline::{BulletList, ExperienceTimeline};

use leptos::prelude::*;

use crate::resume::{About, LayoutConfig, Resume};

/// The whole about page: identity header, body content, then the
/// experience, project, activity and education timelines.
#[component]
pub fn AuthorLayout(resume: Resume, children: Children) -> impl IntoView {
    let Resume {
        author,
        layout: LayoutConfig { density, labels },
        experience,
        projects,
        activities,
        education,
    } = resume;

    view! {
        <main class=format!("author-layout {}", density.class())>
            <ProfileHeader
                profile=author
                greeting=labels.greeting
                avatar_alt=labels.avatar_alt
                blog_label=labels.blog
            />
            <BodyContent>{children()}</BodyContent>
            <ExperienceTimeline heading=labels.experience entries=experience density=density />
            <EntrySection heading=labels.projects entries=projects density=density />
            <EntrySection heading=labels.activities entries=activities density=density />
            <EducationBlock heading=labels.education records=education />
        </main>
    }
}

#[component]
pub fn AboutView(about: About) -> impl IntoView {
    let About { resume, body_html } = about;

    view! {
        <AuthorLayout resume=resume>
            <div class="prose" inner_html=body_html></div>
        </AuthorLayout>
    }
}
