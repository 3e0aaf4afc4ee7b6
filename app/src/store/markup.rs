use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::{escape_href, escape_html};
use std::collections::HashSet;

use crate::resume::{Bullet, Resume};

/// Converts every inline text field of the resume from markdown to HTML.
pub fn render_resume(resume: &mut Resume) {
    for entry in resume.experience.iter_mut() {
        render_optional(&mut entry.highlight_summary);
        for section in entry.sections.iter_mut() {
            section.heading = render_inline(&section.heading);
            render_bullets(&mut section.bullets);
        }
    }
    for entry in resume
        .projects
        .iter_mut()
        .chain(resume.activities.iter_mut())
    {
        render_optional(&mut entry.summary);
        for bullet in entry.bullets.iter_mut() {
            *bullet = render_inline(bullet);
        }
    }
}

fn render_optional(text: &mut Option<String>) {
    if let Some(text) = text {
        *text = render_inline(text);
    }
}

fn render_bullets(bullets: &mut [Bullet]) {
    for bullet in bullets {
        bullet.text = render_inline(&bullet.text);
        render_bullets(&mut bullet.sub_bullets);
    }
}

/// Renders markdown meant to sit inside another element: paragraph wrappers
/// are dropped and links open in a new browsing context.
pub fn render_inline(source: &str) -> String {
    let events = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH)
        .filter(|event| {
            !matches!(
                event,
                Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
            )
        })
        .map(|event| match event {
            Event::Start(Tag::Link {
                dest_url, title, ..
            }) => Event::InlineHtml(CowStr::from(link_start(&dest_url, &title))),
            Event::SoftBreak => Event::Text(CowStr::Borrowed(" ")),
            event => event,
        });

    let mut html = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events);
    html.truncate(html.trim_end().len());
    html
}

/// Renders the page body. Headings get an id and a trailing anchor link.
pub fn render_body(source: &str) -> String {
    let events: Vec<Event> = Parser::new_ext(source, Options::all()).collect();
    let mut names = heading_names(&events).into_iter();
    // Explicit ids are taken first so that generated ones never reuse them.
    let mut used: HashSet<String> = events
        .iter()
        .filter_map(|event| match event {
            Event::Start(Tag::Heading { id: Some(id), .. }) => Some(String::from(&**id)),
            _ => None,
        })
        .collect();

    let mut events_with_ids = Vec::with_capacity(events.len());
    let mut anchor: Option<String> = None;
    for event in events {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                let id = match id {
                    Some(id) => String::from(&*id),
                    None => unique_id(&mut used, &names.next().unwrap_or_default()),
                };
                anchor = Some(id.clone());
                events_with_ids.push(Event::Start(Tag::Heading {
                    level,
                    id: Some(CowStr::from(id)),
                    classes,
                    attrs,
                }));
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some(id) = anchor.take() {
                    events_with_ids.push(Event::Text(CowStr::Borrowed(" ")));
                    let mut link = String::from("<a href=\"#");
                    escape_href(&mut link, &id).expect("writing to a String cannot fail");
                    link.push_str("\"><span class=\"heading-anchor\">#</span></a>");
                    events_with_ids.push(Event::InlineHtml(CowStr::from(link)));
                }
                events_with_ids.push(Event::End(TagEnd::Heading(level)));
            }
            event => events_with_ids.push(event),
        }
    }

    let mut html = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events_with_ids.into_iter());
    html
}

/// Text of every heading without an explicit id, in document order.
fn heading_names(events: &[Event]) -> Vec<String> {
    let mut names = vec![];
    let mut current: Option<Vec<&str>> = None;
    for event in events {
        match event {
            Event::Start(Tag::Heading { id: None, .. }) => current = Some(vec![]),
            Event::End(TagEnd::Heading(_)) => {
                if let Some(parts) = current.take() {
                    names.push(parts.join(" "));
                }
            }
            Event::Text(value) | Event::Code(value) => {
                if let Some(parts) = current.as_mut() {
                    parts.push(&**value);
                }
            }
            Event::Start(Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. })
            | Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link) => (),
            _ => {
                if current.is_some() {
                    log::warn!("Unsupported event while collecting heading name: {event:?}");
                }
            }
        }
    }
    names
}

fn unique_id(used: &mut HashSet<String>, name: &str) -> String {
    let base = slug::slugify(name);
    let mut id = base.clone();
    let mut suffix = 0;
    while !used.insert(id.clone()) {
        suffix += 1;
        id = format!("{}-{}", base, suffix);
    }
    id
}

fn link_start(dest_url: &str, title: &str) -> String {
    let mut tag = String::from("<a href=\"");
    escape_href(&mut tag, dest_url).expect("writing to a String cannot fail");
    if !title.is_empty() {
        tag.push_str("\" title=\"");
        escape_html(&mut tag, title).expect("writing to a String cannot fail");
    }
    tag.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
    tag
}
