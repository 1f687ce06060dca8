//! Read-only typed access to the site content document.

mod types;

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;

use crate::reveal::CounterSpec;

pub use types::*;

static EMBEDDED: OnceLock<Arc<SiteContent>> = OnceLock::new();

const EMBEDDED_JSON: &str =
    include_str!("../../net.techpotato.stats.sdPlugin/content/site_content.json");

/// The document compiled into the plugin.
pub fn embedded() -> Arc<SiteContent> {
    let content = EMBEDDED.get_or_init(|| {
        Arc::new(SiteContent::from_json(EMBEDDED_JSON).expect("embedded site content must parse"))
    });
    Arc::clone(content)
}

/// Where an action reads its content from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl ContentSource {
    /// `None` or a blank path means the embedded document.
    pub fn from_setting(path: Option<&str>) -> Self {
        match path.map(str::trim) {
            Some(p) if !p.is_empty() => ContentSource::File(PathBuf::from(p)),
            _ => ContentSource::Embedded,
        }
    }

    pub fn load(&self) -> anyhow::Result<Arc<SiteContent>> {
        match self {
            ContentSource::Embedded => Ok(embedded()),
            ContentSource::File(path) => SiteContent::from_path(path).map(Arc::new),
        }
    }
}

/// Sections that carry headline numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatSection {
    #[default]
    Hero,
    About,
    Testimonials,
}

impl StatSection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Some(StatSection::Hero),
            "about" => Some(StatSection::About),
            "testimonials" => Some(StatSection::Testimonials),
            _ => None,
        }
    }
}

/// Sections a showcase key can cycle through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListSection {
    #[default]
    Testimonials,
    Services,
    Portfolio,
    Team,
    Clients,
    Partners,
    Blog,
    Faq,
}

impl ListSection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testimonials" => Some(ListSection::Testimonials),
            "services" => Some(ListSection::Services),
            "portfolio" => Some(ListSection::Portfolio),
            "team" => Some(ListSection::Team),
            "clients" => Some(ListSection::Clients),
            "partners" => Some(ListSection::Partners),
            "blog" => Some(ListSection::Blog),
            "faq" => Some(ListSection::Faq),
            _ => None,
        }
    }
}

impl SiteContent {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parse site content")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read site content from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("load {}", path.display()))
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn hero(&self) -> &HeroContent {
        &self.hero
    }

    pub fn about(&self) -> &AboutContent {
        &self.about
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.about.team
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn portfolio(&self) -> &[Project] {
        &self.portfolio
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn testimonial_stats(&self) -> &[Stat] {
        &self.testimonial_stats
    }

    pub fn blog(&self) -> &[BlogPost] {
        &self.blog
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn social(&self) -> &SocialLinks {
        &self.social
    }

    pub fn faq(&self) -> &[Faq] {
        &self.faq
    }

    pub fn careers(&self) -> &Careers {
        &self.careers
    }

    pub fn footer(&self) -> &FooterContent {
        &self.footer
    }

    pub fn service_by_title(&self, title: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.title == title)
    }

    pub fn featured_post(&self) -> Option<&BlogPost> {
        self.blog.iter().find(|p| p.featured)
    }

    pub fn blog_by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a BlogPost> {
        self.blog.iter().filter(move |p| p.category == category)
    }

    pub fn stats(&self, section: StatSection) -> &[Stat] {
        match section {
            StatSection::Hero => &self.hero.stats,
            StatSection::About => &self.about.stats,
            StatSection::Testimonials => &self.testimonial_stats,
        }
    }

    pub fn stat(&self, section: StatSection, index: usize) -> Option<&Stat> {
        self.stats(section).get(index)
    }

    /// One short line of text per item, in document order.
    pub fn captions(&self, section: ListSection) -> Vec<String> {
        match section {
            ListSection::Testimonials => self
                .testimonials
                .iter()
                .map(|t| format!("{}, {}", t.name, t.company))
                .collect(),
            ListSection::Services => self.services.iter().map(|s| s.title.clone()).collect(),
            ListSection::Portfolio => self.portfolio.iter().map(|p| p.title.clone()).collect(),
            ListSection::Team => self.about.team.iter().map(|m| m.name.clone()).collect(),
            ListSection::Clients => self.clients.iter().map(|c| c.name.clone()).collect(),
            ListSection::Partners => self.partners.iter().map(|p| p.name.clone()).collect(),
            ListSection::Blog => self.blog.iter().map(|p| p.title.clone()).collect(),
            ListSection::Faq => self.faq.iter().map(|f| f.question.clone()).collect(),
        }
    }
}

impl Stat {
    pub fn counter_spec(&self, duration_ms: i64) -> CounterSpec {
        let mut spec = CounterSpec::new(self.value).duration_ms(duration_ms);
        if let Some(prefix) = &self.prefix {
            spec = spec.prefix(prefix.as_str());
        }
        if let Some(suffix) = &self.suffix {
            spec = spec.suffix(suffix.as_str());
        }
        if let Some(literal) = &self.display_value {
            spec = spec.literal(literal.as_str());
        }
        spec
    }
}
