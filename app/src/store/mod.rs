pub mod errors;
mod front_matter;
mod markup;

pub use errors::{Error, Result};
pub use front_matter::Document;
pub use markup::{render_body, render_inline};

use crate::resume::{About, Resume};

/// Reads the about page from a markdown file with a YAML front matter. The
/// file is read again on every call so that edits show up without a restart.
#[derive(Clone, Debug)]
pub struct Store {
    path: std::path::PathBuf,
}

impl Store {
    pub fn open(path: std::path::PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        self.path.as_path()
    }

    pub fn about(&self) -> Result<About> {
        let Document {
            front_matter: mut resume,
            body,
        } = front_matter::read::<Resume>(&self.path)?;
        // A blank avatar is as good as none.
        resume.author.avatar = resume
            .author
            .avatar
            .take()
            .filter(|avatar| !avatar.trim().is_empty());
        markup::render_resume(&mut resume);
        let body_html = markup::render_body(&body);

        log::info!(
            "Loaded the about page of \"{}\" from {:?}: {} experience entries, {} projects, {} activities",
            resume.author.name,
            self.path,
            resume.experience.len(),
            resume.projects.len(),
            resume.activities.len(),
        );
        if resume.author.avatar.is_none() {
            log::debug!("No avatar in {:?}, the header will render without one", self.path);
        }

        Ok(About { resume, body_html })
    }
}
