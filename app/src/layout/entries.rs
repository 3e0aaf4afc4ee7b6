use leptos::either::Either;
use leptos::prelude::*;

use crate::resume::{EducationRecord, LayoutDensity, TimelineEntry};

/// Projects and activities share this block.
#[component]
pub fn EntrySection(
    #[prop(into)] heading: String,
    entries: Vec<TimelineEntry>,
    density: LayoutDensity,
) -> impl IntoView {
    view! {
        <section class="timeline entries">
            <h2 class="timeline-heading">{heading}</h2>
            {entries
                .into_iter()
                .map(|entry| view! { <EntryBlock entry=entry density=density /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn EntryBlock(entry: TimelineEntry, density: LayoutDensity) -> impl IntoView {
    let TimelineEntry {
        title,
        period,
        summary,
        bullets,
    } = entry;

    let summary = summary.map(|summary| match density {
        LayoutDensity::Boxed => Either::Left(view! { <p class="summary-box" inner_html=summary></p> }),
        LayoutDensity::Compact => Either::Right(view! { <p class="summary" inner_html=summary></p> }),
    });
    let bullets = (!bullets.is_empty()).then(move || {
        view! {
            <ul class="bullets depth-0">
                {bullets
                    .into_iter()
                    .map(|bullet| view! { <li inner_html=bullet></li> })
                    .collect_view()}
            </ul>
        }
    });

    view! {
        <article class="entry">
            <div class="entry-label">
                <p class="title">{title}</p>
                <p class="period">{period}</p>
            </div>
            <div class="entry-content">
                {summary}
                {bullets}
            </div>
        </article>
    }
}

#[component]
pub fn EducationBlock(#[prop(into)] heading: String, records: Vec<EducationRecord>) -> impl IntoView {
    view! {
        <section class="education">
            <h2 class="timeline-heading">{heading}</h2>
            {records
                .into_iter()
                .map(|EducationRecord { institution, period, degree }| {
                    view! {
                        <div class="education-record">
                            <p class="institution">{institution}</p>
                            <p class="period">{period}</p>
                            <p class="degree">{degree}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
