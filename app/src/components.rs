use leptos::prelude::*;

/// Renders nothing when `src` is `None` or blank.
#[component]
pub fn Image(
    src: Option<String>,
    #[prop(into)] alt: String,
    width: u32,
    height: u32,
    #[prop(optional, into)] class_name: String,
) -> impl IntoView {
    src.filter(|src| !src.trim().is_empty()).map(|src| {
        view! {
            <img
                src=src
                alt=alt
                width=width.to_string()
                height=height.to_string()
                class=class_name
            />
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    Mail,
    Github,
    Linkedin,
}

impl SocialKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Mail => "mail",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Mail => "Mail",
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
        }
    }
}

#[component]
pub fn SocialIcon(kind: SocialKind, #[prop(into)] href: String) -> impl IntoView {
    view! {
        <a
            class=format!("social-icon social-icon-{}", kind.name())
            href=href
            target="_blank"
            rel="noopener noreferrer"
        >
            <span class="sr-only">{kind.label()}</span>
            <i class=format!("icon-{}", kind.name()) aria-hidden="true"></i>
        </a>
    }
}

#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] target: Option<String>,
    #[prop(optional, into)] class_name: String,
    children: Children,
) -> impl IntoView {
    let rel = target
        .as_deref()
        .filter(|target| *target == "_blank")
        .map(|_| "noopener noreferrer");

    view! {
        <a href=href target=target rel=rel class=class_name>
            {children()}
        </a>
    }
}
