use app::layout::{
    AboutView, AuthorLayout, BulletList, EntrySection, ExperienceTimeline, ProfileHeader,
};
use app::render::{render_about, render_to_string};
use app::resume::{
    About, AuthorProfile, Bullet, EducationRecord, ExperienceEntry, ExperienceSection,
    LayoutConfig, LayoutDensity, ProjectEntry, Resume,
};
use leptos::prelude::*;

fn profile(avatar: Option<&str>) -> AuthorProfile {
    AuthorProfile {
        name: String::from("Test"),
        avatar: avatar.map(String::from),
        email: String::from("a@b.com"),
        linkedin: String::from("li"),
        github: String::from("gh"),
        blog: String::from("bl"),
    }
}

fn render_header(profile: AuthorProfile) -> String {
    render_to_string(move || {
        view! {
            <ProfileHeader
                profile=profile
                greeting=vec![String::from("Hello."), String::from("I am Test.")]
                avatar_alt="avatar"
                blog_label="Blog"
            />
        }
    })
}

fn entry(organization: &str, sections: Vec<ExperienceSection>) -> ExperienceEntry {
    ExperienceEntry {
        organization: String::from(organization),
        role: String::from("Engineer"),
        period: String::from("2024 ~ now"),
        sections,
        ..Default::default()
    }
}

fn render_timeline(entries: Vec<ExperienceEntry>, density: LayoutDensity) -> String {
    render_to_string(move || {
        view! { <ExperienceTimeline heading="Work Experience" entries=entries density=density /> }
    })
}

fn render_bullets(bullets: Vec<Bullet>) -> String {
    render_to_string(move || view! { <BulletList bullets=bullets /> })
}

/// A chain of bullets, each holding the next one as its only sub-bullet.
fn nested(depth: usize) -> Bullet {
    (0..depth).fold(Bullet::new(format!("level {depth}")), |child, level| {
        Bullet::new(format!("level {level}")).with_sub_bullets(vec![child])
    })
}

/// Deepest `<ul>` nesting, or `None` if the tags are unbalanced.
fn max_list_depth(html: &str) -> Option<usize> {
    let mut depth: usize = 0;
    let mut max = 0;
    let mut rest = html;
    loop {
        match (rest.find("<ul"), rest.find("</ul>")) {
            (Some(open), Some(close)) if open < close => {
                depth += 1;
                max = max.max(depth);
                rest = &rest[open + 3..];
            }
            (_, Some(close)) => {
                depth = depth.checked_sub(1)?;
                rest = &rest[close + 5..];
            }
            (Some(_), None) => return None,
            (None, None) => break,
        }
    }
    (depth == 0).then_some(max)
}

fn resume() -> Resume {
    Resume {
        author: profile(Some("/avatar.png")),
        layout: LayoutConfig::default(),
        experience: vec![entry(
            "Acme",
            vec![ExperienceSection {
                heading: String::from("Shipping"),
                bullets: vec![Bullet::new("fast builds")],
            }],
        )],
        projects: vec![ProjectEntry {
            title: String::from("Side project"),
            period: String::from("2023"),
            summary: Some(String::from("A tool.")),
            bullets: vec![String::from("Wrote it.")],
        }],
        activities: vec![],
        education: vec![EducationRecord {
            institution: String::from("University"),
            period: String::from("2017 ~ 2021"),
            degree: String::from("B.S."),
        }],
    }
}

#[test]
fn header_without_avatar_has_no_image() {
    let html = render_header(profile(None));
    assert_eq!(0, html.matches("<img").count(), "{html}");
    assert!(html.contains("Hello."), "{html}");
    assert!(html.contains("I am Test."), "{html}");
}

#[test]
fn header_with_blank_avatar_has_no_image() {
    for avatar in ["", "   "] {
        let html = render_header(profile(Some(avatar)));
        assert_eq!(0, html.matches("<img").count(), "{html}");
        assert_eq!(4, html.matches("<a ").count(), "{html}");
    }
}

#[test]
fn header_with_avatar_has_one_image() {
    let html = render_header(profile(Some("/avatar.png")));
    assert_eq!(1, html.matches("<img").count(), "{html}");
    assert!(html.contains("src=\"/avatar.png\""), "{html}");
    assert!(html.contains("width=\"192\""), "{html}");
    assert!(html.contains("height=\"192\""), "{html}");
}

#[test]
fn header_links_in_fixed_order() {
    let html = render_header(profile(None));
    let positions: Vec<usize> = [
        "href=\"mailto:a@b.com\"",
        "href=\"gh\"",
        "href=\"li\"",
        "href=\"bl\"",
    ]
    .iter()
    .map(|href| html.find(href).unwrap_or_else(|| panic!("{href} missing from {html}")))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
    assert_eq!(4, html.matches("<a ").count(), "{html}");
    assert_eq!(0, html.matches("<img").count(), "{html}");
    assert!(html.contains("target=\"_blank\""), "{html}");
}

#[test]
fn header_links_render_when_empty() {
    let html = render_header(AuthorProfile::default());
    assert_eq!(4, html.matches("<a ").count(), "{html}");
    assert!(html.contains("href=\"mailto:\""), "{html}");
}

#[test]
fn timeline_preserves_order() {
    let html = render_timeline(
        vec![entry("Org A", vec![]), entry("Org B", vec![]), entry("Org C", vec![])],
        LayoutDensity::Boxed,
    );
    let a = html.find("Org A").unwrap();
    let b = html.find("Org B").unwrap();
    let c = html.find("Org C").unwrap();
    assert!(a < b && b < c, "{html}");
    assert_eq!(3, html.matches("class=\"entry-label\"").count(), "{html}");
}

#[test]
fn entry_without_sections_keeps_its_label() {
    let html = render_timeline(vec![entry("Lonely", vec![])], LayoutDensity::Boxed);
    assert!(html.contains("Lonely"), "{html}");
    assert!(html.contains("Engineer"), "{html}");
    assert!(html.contains("2024 ~ now"), "{html}");
    assert!(html.contains("class=\"entry-content\""), "{html}");
    assert_eq!(0, html.matches("<h3").count(), "{html}");
}

#[test]
fn one_entry_two_sections() {
    let html = render_timeline(
        vec![entry(
            "Acme",
            vec![
                ExperienceSection {
                    heading: String::from("First"),
                    bullets: vec![Bullet::new("top")
                        .with_sub_bullets(vec![Bullet::new("one"), Bullet::new("two")])],
                },
                ExperienceSection {
                    heading: String::from("Second"),
                    bullets: vec![],
                },
            ],
        )],
        LayoutDensity::Boxed,
    );
    assert_eq!(1, html.matches("class=\"entry-label\"").count(), "{html}");
    assert_eq!(2, html.matches("<h3").count(), "{html}");
    assert_eq!(1, html.matches("class=\"bullets depth-0\"").count(), "{html}");
    assert_eq!(1, html.matches("class=\"bullets depth-1\"").count(), "{html}");
    assert_eq!(3, html.matches("<li").count(), "{html}");

    // Both nested bullets sit between the parent's text and its closing tag.
    let top = html.find(">top<").unwrap();
    let one = html.find(">one<").unwrap();
    let two = html.find(">two<").unwrap();
    let parent_end = html[top..].rfind("</li>").unwrap() + top;
    assert!(top < one && one < two && two < parent_end, "{html}");
}

#[test]
fn bullets_nest_to_any_depth() {
    for depth in 0..=3 {
        let html = render_bullets(vec![nested(depth)]);
        assert_eq!(Some(depth + 1), max_list_depth(&html), "depth {depth}: {html}");
        assert_eq!(depth + 1, html.matches("<li").count(), "depth {depth}: {html}");
        for level in 0..=depth {
            assert!(html.contains(&format!("class=\"bullets depth-{level}\"")), "{html}");
        }
    }
}

#[test]
fn empty_bullets_render_nothing() {
    let html = render_bullets(vec![]);
    assert_eq!(0, html.matches("<ul").count(), "{html}");
}

#[test]
fn bullet_text_is_inline_markup() {
    let html = render_bullets(vec![Bullet::new("cut CI to <strong>90s</strong>")]);
    assert!(html.contains("<strong>90s</strong>"), "{html}");
}

#[test]
fn empty_projects_render_heading_only() {
    let html = render_to_string(|| {
        view! { <EntrySection heading="Project" entries=vec![] density=LayoutDensity::Boxed /> }
    });
    assert!(html.contains("Project"), "{html}");
    assert_eq!(0, html.matches("class=\"entry\"").count(), "{html}");
    assert_eq!(0, html.matches("<li").count(), "{html}");
}

#[test]
fn boxed_preset() {
    let mut acme = entry("Acme", vec![]);
    acme.highlight_summary = Some(String::from("Growth <em>product</em>"));
    acme.tech_stack = vec![String::from("Rust"), String::from("Leptos")];
    let html = render_timeline(vec![acme], LayoutDensity::Boxed);
    assert!(html.contains("class=\"highlight-box\""), "{html}");
    assert!(html.contains("Growth <em>product</em>"), "{html}");
    assert_eq!(2, html.matches("class=\"tag\"").count(), "{html}");
    assert!(!html.contains("tech-stack-inline"), "{html}");
}

#[test]
fn compact_preset() {
    let mut acme = entry("Acme", vec![]);
    acme.highlight_summary = Some(String::from("Growth product"));
    acme.tech_stack = vec![String::from("Rust"), String::from("Leptos")];
    let html = render_timeline(vec![acme], LayoutDensity::Compact);
    assert!(!html.contains("highlight-box"), "{html}");
    assert!(html.contains("class=\"summary\""), "{html}");
    assert!(html.contains("Rust · Leptos"), "{html}");
    assert_eq!(0, html.matches("class=\"tag\"").count(), "{html}");
}

#[test]
fn no_tech_stack_no_block() {
    for density in [LayoutDensity::Boxed, LayoutDensity::Compact] {
        let html = render_timeline(vec![entry("Acme", vec![])], density);
        assert!(!html.contains("tech-stack"), "{html}");
        assert!(!html.contains("summary"), "{html}");
    }
}

#[test]
fn layout_renders_every_part_in_order() {
    let html = render_to_string(|| {
        view! {
            <AuthorLayout resume=resume()>
                <p class="body-marker">"body"</p>
            </AuthorLayout>
        }
    });
    assert!(html.contains("class=\"author-layout boxed\""), "{html}");
    let positions: Vec<usize> = [
        "class=\"profile-header\"",
        "class=\"body-marker\"",
        "Work Experience",
        "Acme",
        ">Project<",
        "Side project",
        ">Activity<",
        ">Education<",
        "University",
    ]
    .iter()
    .map(|needle| html.find(needle).unwrap_or_else(|| panic!("{needle} missing from {html}")))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
    assert_eq!(1, html.matches("class=\"education-record\"").count(), "{html}");
}

#[test]
fn education_repeats_per_record() {
    let mut resume = resume();
    resume.education.clear();
    let html = render_about(About {
        resume: resume.clone(),
        body_html: String::new(),
    });
    assert_eq!(0, html.matches("class=\"education-record\"").count(), "{html}");

    resume.education = vec![EducationRecord::default(); 3];
    let html = render_about(About {
        resume,
        body_html: String::new(),
    });
    assert_eq!(3, html.matches("class=\"education-record\"").count(), "{html}");
}

#[test]
fn about_view_places_body_in_slot() {
    let about = About {
        resume: resume(),
        body_html: String::from("<h2 id=\"intro\">Intro</h2>"),
    };
    let html = render_to_string(move || view! { <AboutView about=about /> });
    let slot = html.find("class=\"body-content\"").unwrap();
    let body = html.find("<h2 id=\"intro\">Intro</h2>").unwrap();
    let experience = html.find("Work Experience").unwrap();
    assert!(slot < body && body < experience, "{html}");
}

#[test]
fn rendering_is_idempotent() {
    let about = About {
        resume: resume(),
        body_html: String::from("<p>body</p>"),
    };
    assert_eq!(render_about(about.clone()), render_about(about));
}
