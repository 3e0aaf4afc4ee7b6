use leptos::either::Either;
use leptos::prelude::*;

use crate::resume::{Bullet, ExperienceEntry, ExperienceSection, LayoutDensity};

#[component]
pub fn ExperienceTimeline(
    #[prop(into)] heading: String,
    entries: Vec<ExperienceEntry>,
    density: LayoutDensity,
) -> impl IntoView {
    view! {
        <section class="timeline experience">
            <h2 class="timeline-heading">{heading}</h2>
            {entries
                .into_iter()
                .map(|entry| view! { <ExperienceBlock entry=entry density=density /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn ExperienceBlock(entry: ExperienceEntry, density: LayoutDensity) -> impl IntoView {
    let ExperienceEntry {
        organization,
        role,
        period,
        highlight_summary,
        tech_stack,
        sections,
    } = entry;

    let summary = highlight_summary.map(|summary| match density {
        LayoutDensity::Boxed => Either::Left(view! {
            <div class="highlight-box">
                <p class="highlight" inner_html=summary></p>
            </div>
        }),
        LayoutDensity::Compact => Either::Right(view! {
            <p class="summary" inner_html=summary></p>
        }),
    });
    let (inline_stack, boxed_stack) = match density {
        _ if tech_stack.is_empty() => (None, None),
        LayoutDensity::Compact => (
            Some(view! { <p class="tech-stack-inline">{tech_stack.join(" · ")}</p> }),
            None,
        ),
        LayoutDensity::Boxed => (
            None,
            Some(view! {
                <div class="tech-stack">
                    {tech_stack
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect_view()}
                </div>
            }),
        ),
    };

    view! {
        <article class="entry">
            <div class="entry-label">
                <p class="organization">{organization}</p>
                <p class="role">{role}</p>
                <p class="period">{period}</p>
                {inline_stack}
            </div>
            <div class="entry-content">
                {summary}
                {boxed_stack}
                {sections
                    .into_iter()
                    .map(|section| view! { <SectionBlock section=section /> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn SectionBlock(section: ExperienceSection) -> impl IntoView {
    let ExperienceSection { heading, bullets } = section;

    view! {
        <section class="entry-section">
            <h3 class="section-heading" inner_html=heading></h3>
            <BulletList bullets=bullets />
        </section>
    }
}

/// Renders nothing for an empty list, nested lists go inside their parent's
/// `<li>`.
#[component]
pub fn BulletList(bullets: Vec<Bullet>) -> impl IntoView {
    bullet_list(bullets, 0)
}

fn bullet_list(bullets: Vec<Bullet>, depth: usize) -> AnyView {
    if bullets.is_empty() {
        return ().into_any();
    }

    view! {
        <ul class=format!("bullets depth-{depth}")>
            {bullets
                .into_iter()
                .map(|Bullet { text, sub_bullets }| {
                    view! {
                        <li>
                            <span class="bullet-text" inner_html=text></span>
                            {bullet_list(sub_bullets, depth + 1)}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
