//! Portfolio page rendering.
//!
//! Every visible string comes from a [`Translator`]; the page itself holds
//! only markup, contact data from [`Profile`] and asset paths.

use crate::i18n::{Language, TextKey, Translator};

const EMAIL_ICON: &str = "M12 13.065L.015 6h23.97L12 13.065zM0 7.5v10.5h24V7.5l-12 6.75L0 7.5z";
const PHONE_ICON: &str = "M6.62 10.79a15.093 15.093 0 006.59 6.59l2.2-2.2a1 1 0 011.01-.24c1.12.37 2.33.57 3.58.57.55 0 1 .45 1 1V20c0 .55-.45 1-1 1C10.07 21 3 13.93 3 5c0-.55.45-1 1-1h3.5c.55 0 1 .45 1 1 0 1.25.2 2.46.57 3.58.11.33.03.7-.24 1.01l-2.21 2.2z";
const LINKEDIN_ICON: &str = "M22.225 0H1.771C.792 0 0 .771 0 1.723v20.554C0 23.228.792 24 1.771 24h20.451C23.2 24 24 23.228 24 22.277V1.723C24 .771 23.2 0 22.225 0zM7.114 20.452H3.56V9h3.554v11.452zM5.337 7.433A2.07 2.07 0 013.27 5.366c0-1.142.924-2.066 2.067-2.066 1.14 0 2.066.924 2.066 2.066 0 1.141-.926 2.067-2.066 2.067zm15.11 13.019h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.049c.476-.9 1.637-1.852 3.37-1.852 3.601 0 4.268 2.37 4.268 5.455v6.288z";

/// Contact details and asset paths shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub linkedin_label: String,
    pub cv_path: String,
    pub photo_path: String,
    /// PDF linked from the green airport project
    pub report_path: String,
    pub stylesheet: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            email: "contact@example.com".to_string(),
            phone: "+33 6 00 00 00 00".to_string(),
            linkedin_url: "https://www.linkedin.com/in/your-profile".to_string(),
            linkedin_label: "linkedin.com/in/your-profile".to_string(),
            cv_path: "/cv.pdf".to_string(),
            photo_path: "/moi.jpg".to_string(),
            report_path: "/aeroport_vert.pdf".to_string(),
            stylesheet: "/styles.css".to_string(),
        }
    }
}

impl Profile {
    fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }
}

/// Render the complete HTML document for the translator's language.
pub fn render_page(t: &Translator, profile: &Profile) -> String {
    let sections = [
        render_hero(t, profile),
        render_about(t, profile),
        render_experience(t),
        render_education(t),
        render_skills(t),
        render_projects(t, profile),
        render_contact_form(t),
    ];

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="stylesheet" href="{stylesheet}">
</head>
<body>
{nav}
<main>
{sections}
</main>
</body>
</html>
"#,
        lang = t.language().code(),
        title = escape_html(t.text(TextKey::MetaTitle)),
        description = escape_html(t.text(TextKey::MetaDescription)),
        stylesheet = escape_html(&profile.stylesheet),
        nav = render_language_nav(t),
        sections = sections.join("\n"),
    )
}

/// Links to every localized copy of the page, current one marked.
fn render_language_nav(t: &Translator) -> String {
    let links: Vec<String> = Language::ALL
        .iter()
        .map(|language| {
            let current = if *language == t.language() {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="/{code}/" hreflang="{code}" data-lang="{code}"{current}>{name}</a>"#,
                code = language.code(),
                current = current,
                name = escape_html(language.native_name()),
            )
        })
        .collect();

    format!(
        r#"<nav class="lang-switch" aria-label="{label}">{links}</nav>"#,
        label = escape_html(t.text(TextKey::NavLanguage)),
        links = links.join(""),
    )
}

fn icon(path: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true"><path d="{}"/></svg>"#,
        path
    )
}

fn render_hero(t: &Translator, profile: &Profile) -> String {
    format!(
        r#"<section class="hero">
<div class="wrap">
<div class="avatar-rect"><img src="{photo}" alt="{name}"></div>
<div>
<span class="small">{status}</span>
<h1><span class="accent">{name}</span></h1>
<p class="lead">{lead}</p>
<div class="socials">
<a href="{mailto}" class="icon-link" target="_blank" rel="noreferrer">{email_icon}{email}</a>
<a href="{tel}" class="icon-link">{phone_icon}{phone}</a>
<a href="{linkedin_url}" class="icon-link" target="_blank" rel="noreferrer">{linkedin_icon}{linkedin}</a>
<a class="btn" href="{cv_path}" target="_blank" rel="noreferrer">{cv}</a>
</div>
</div>
</div>
</section>"#,
        photo = escape_html(&profile.photo_path),
        name = escape_html(t.text(TextKey::HeroName)),
        status = escape_html(t.text(TextKey::HeroStatus)),
        lead = escape_html(t.text(TextKey::HeroLead)),
        mailto = escape_html(&profile.mailto()),
        email_icon = icon(EMAIL_ICON),
        email = escape_html(t.text(TextKey::ContactEmail)),
        tel = escape_html(&profile.tel()),
        phone_icon = icon(PHONE_ICON),
        phone = escape_html(t.text(TextKey::ContactPhone)),
        linkedin_url = escape_html(&profile.linkedin_url),
        linkedin_icon = icon(LINKEDIN_ICON),
        linkedin = escape_html(t.text(TextKey::ContactLinkedin)),
        cv_path = escape_html(&profile.cv_path),
        cv = escape_html(t.text(TextKey::ContactCv)),
    )
}

fn render_about(t: &Translator, profile: &Profile) -> String {
    format!(
        r#"<section id="about">
<div class="wrap grid grid-2">
<div class="card">
<h2>{about_title}</h2>
<p>{about_text}</p>
</div>
<div class="card" id="contact-details">
<h2>{contact_title}</h2>
<div class="stack">
<a href="{mailto}" class="icon-link">{email_icon}{email}</a>
<a href="{tel}" class="icon-link">{phone_icon}{phone}</a>
<a href="{linkedin_url}" class="icon-link" target="_blank" rel="noreferrer">{linkedin_icon}{linkedin_label}</a>
</div>
</div>
</div>
</section>"#,
        about_title = escape_html(t.text(TextKey::AboutTitle)),
        about_text = escape_html(t.text(TextKey::AboutText)),
        contact_title = escape_html(t.text(TextKey::ContactTitle)),
        mailto = escape_html(&profile.mailto()),
        email_icon = icon(EMAIL_ICON),
        email = escape_html(&profile.email),
        tel = escape_html(&profile.tel()),
        phone_icon = icon(PHONE_ICON),
        phone = escape_html(&profile.phone),
        linkedin_url = escape_html(&profile.linkedin_url),
        linkedin_icon = icon(LINKEDIN_ICON),
        linkedin_label = escape_html(&profile.linkedin_label),
    )
}

/// A card with a heading and one paragraph per body key.
fn card(t: &Translator, title: TextKey, body: &[TextKey]) -> String {
    let paragraphs: String = body
        .iter()
        .map(|key| format!("<p>{}</p>", escape_html(t.text(*key))))
        .collect();
    format!(
        r#"<article class="card"><h3>{}</h3>{}</article>"#,
        escape_html(t.text(title)),
        paragraphs
    )
}

fn list(t: &Translator, items: &[TextKey]) -> String {
    let items: String = items
        .iter()
        .map(|key| format!("<li>{}</li>", escape_html(t.text(*key))))
        .collect();
    format!(r#"<ul class="list">{}</ul>"#, items)
}

fn render_experience(t: &Translator) -> String {
    let cards = [
        card(t, TextKey::ExperienceEsa, &[TextKey::ExperienceEsaDesc]),
        card(
            t,
            TextKey::ExperienceIpsaF1,
            &[TextKey::ExperienceIpsaF1Desc1, TextKey::ExperienceIpsaF1Desc2],
        ),
        card(t, TextKey::ExperienceSchneider, &[TextKey::ExperienceSchneiderDesc]),
        card(t, TextKey::ExperienceMeteo, &[TextKey::ExperienceMeteoDesc]),
    ];

    format!(
        r#"<section id="experience">
<div class="wrap">
<h2>{}</h2>
<div class="grid grid-2">{}</div>
</div>
</section>"#,
        escape_html(t.text(TextKey::ExperienceTitle)),
        cards.join("")
    )
}

fn render_education(t: &Translator) -> String {
    format!(
        r#"<section id="education">
<div class="wrap">
<h2>{}</h2>
{}
</div>
</section>"#,
        escape_html(t.text(TextKey::EducationTitle)),
        list(t, &[TextKey::EducationIpsa, TextKey::EducationLycee])
    )
}

fn render_skills(t: &Translator) -> String {
    format!(
        r#"<section id="skills">
<div class="wrap grid grid-2">
<div class="card"><h3>{}</h3>{}</div>
<div class="card"><h3>{}</h3>{}</div>
</div>
</section>"#,
        escape_html(t.text(TextKey::SkillsTechniques)),
        list(t, &[TextKey::SkillsTechList1, TextKey::SkillsTechList2]),
        escape_html(t.text(TextKey::SkillsLanguages)),
        list(
            t,
            &[
                TextKey::SkillsLangList1,
                TextKey::SkillsLangList2,
                TextKey::SkillsLangList3
            ]
        ),
    )
}

fn project(t: &Translator, image: &str, title: TextKey, body: &[TextKey], extra: &str) -> String {
    let paragraphs: String = body
        .iter()
        .map(|key| format!("<p>{}</p>", escape_html(t.text(*key))))
        .collect();
    let title = escape_html(t.text(title));
    format!(
        r#"<article class="card"><img src="{image}" alt="{title}" class="project-img"><h3>{title}</h3>{paragraphs}{extra}</article>"#,
        image = escape_html(image),
        title = title,
        paragraphs = paragraphs,
        extra = extra,
    )
}

fn render_projects(t: &Translator, profile: &Profile) -> String {
    let report_link = format!(
        r#"<a href="{}" target="_blank" rel="noreferrer" class="btn">{}</a>"#,
        escape_html(&profile.report_path),
        escape_html(t.text(TextKey::ProjectsAeroportCta))
    );

    let projects = [
        project(
            t,
            "/esa.png",
            TextKey::ProjectsEsa,
            &[TextKey::ProjectsEsaDesc1, TextKey::ProjectsEsaDesc2],
            "",
        ),
        project(
            t,
            "/f1.png",
            TextKey::ProjectsIpsaF1,
            &[TextKey::ProjectsIpsaF1Desc1, TextKey::ProjectsIpsaF1Desc2],
            "",
        ),
        project(
            t,
            "/aero.png",
            TextKey::ProjectsAeroport,
            &[TextKey::ProjectsAeroportDesc1, TextKey::ProjectsAeroportDesc2],
            &report_link,
        ),
    ];

    format!(
        r#"<section id="projects">
<div class="wrap">
<h2>{}</h2>
<div class="projects-grid">{}</div>
</div>
</section>"#,
        escape_html(t.text(TextKey::ProjectsTitle)),
        projects.join("")
    )
}

/// Contact form markup. Submission is not handled by this site.
fn render_contact_form(t: &Translator) -> String {
    format!(
        r#"<section id="contact">
<div class="wrap">
<h2>{title}</h2>
<form class="card" action="{action}" method="POST">
<input class="input" name="name" placeholder="{name}" required>
<input class="input" name="email" type="email" placeholder="{email}" required>
<textarea class="textarea" name="message" placeholder="{message}" required></textarea>
<button class="btn" type="submit">{send}</button>
<span class="small">{alt}</span>
</form>
</div>
</section>"#,
        title = escape_html(t.text(TextKey::ContactTitle)),
        action = escape_html(t.text(TextKey::ContactFormActionHint)),
        name = escape_html(t.text(TextKey::ContactFormName)),
        email = escape_html(t.text(TextKey::ContactFormEmail)),
        message = escape_html(t.text(TextKey::ContactFormMessage)),
        send = escape_html(t.text(TextKey::ContactSend)),
        alt = escape_html(t.text(TextKey::ContactAlt)),
    )
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
