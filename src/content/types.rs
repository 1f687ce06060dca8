use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Secondary,
    Accent,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub legal_name: String,
    pub tagline: String,
    pub description: String,
    pub founded: String,
    pub location: String,
    pub work_mode: String,
}

/// A headline number. Feeds a [`crate::reveal::CounterSpec`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: i64,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub display_value: Option<String>,
    pub label: String,
    #[serde(default)]
    pub color: Option<Accent>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CallToAction {
    pub primary: String,
    pub secondary: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub headline_gradient: String,
    pub subtitle: String,
    pub cta: CallToAction,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    pub bio: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CompanyValue {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: Accent,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub title: String,
    pub title_highlight: String,
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub badge: String,
    pub title: String,
    pub title_gradient: String,
    pub subtitle: String,
    pub story: Story,
    pub highlights: Vec<String>,
    pub stats: Vec<Stat>,
    pub values: Vec<CompanyValue>,
    pub team: Vec<TeamMember>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub color: Accent,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub results: Vec<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    pub color: Accent,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub image: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Partner {
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Client {
    pub name: String,
    pub logo: String,
    pub industry: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub hours: String,
    pub response_time: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub x: String,
    pub facebook: String,
    pub instagram: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JobOpening {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub experience: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Careers {
    pub is_hiring: bool,
    pub headline: String,
    pub description: String,
    pub email: String,
    pub perks: Vec<String>,
    pub openings: Vec<JobOpening>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FooterLink {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub description: String,
    pub quick_links: Vec<FooterLink>,
    pub legal: Vec<FooterLink>,
}

/// The whole content document.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub company: Company,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: Vec<Service>,
    pub portfolio: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub testimonial_stats: Vec<Stat>,
    pub blog: Vec<BlogPost>,
    pub partners: Vec<Partner>,
    pub clients: Vec<Client>,
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub faq: Vec<Faq>,
    pub careers: Careers,
    pub footer: FooterContent,
}
