//! Typed keys for every string the page renders.
//!
//! Page sections look text up through [`TextKey`] rather than raw dotted
//! strings; the validator checks every variant against every locale.

use std::fmt;

macro_rules! text_keys {
    ($($variant:ident => $path:literal,)+) => {
        /// A translation key used by the page.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($variant,)+
        }

        impl TextKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)+];

            /// The dotted path of this key in a translation document.
            pub fn path(&self) -> &'static str {
                match self {
                    $(TextKey::$variant => $path,)+
                }
            }
        }
    };
}

text_keys! {
    MetaTitle => "meta.title",
    MetaDescription => "meta.description",
    NavLanguage => "nav.language",

    HeroName => "hero.name",
    HeroStatus => "hero.status",
    HeroLead => "hero.lead",

    AboutTitle => "about.title",
    AboutText => "about.text",

    ExperienceTitle => "experience.title",
    ExperienceEsa => "experience.esa",
    ExperienceEsaDesc => "experience.esaDesc",
    ExperienceIpsaF1 => "experience.ipsaF1",
    ExperienceIpsaF1Desc1 => "experience.ipsaF1Desc1",
    ExperienceIpsaF1Desc2 => "experience.ipsaF1Desc2",
    ExperienceSchneider => "experience.schneider",
    ExperienceSchneiderDesc => "experience.schneiderDesc",
    ExperienceMeteo => "experience.meteo",
    ExperienceMeteoDesc => "experience.meteoDesc",

    EducationTitle => "education.title",
    EducationIpsa => "education.ipsa",
    EducationLycee => "education.lycee",

    SkillsTechniques => "skills.techniques",
    SkillsTechList1 => "skills.techList1",
    SkillsTechList2 => "skills.techList2",
    SkillsLanguages => "skills.languages",
    SkillsLangList1 => "skills.langList1",
    SkillsLangList2 => "skills.langList2",
    SkillsLangList3 => "skills.langList3",

    ProjectsTitle => "projects.title",
    ProjectsEsa => "projects.esa",
    ProjectsEsaDesc1 => "projects.esaDesc1",
    ProjectsEsaDesc2 => "projects.esaDesc2",
    ProjectsIpsaF1 => "projects.ipsaF1",
    ProjectsIpsaF1Desc1 => "projects.ipsaF1Desc1",
    ProjectsIpsaF1Desc2 => "projects.ipsaF1Desc2",
    ProjectsAeroport => "projects.aeroport",
    ProjectsAeroportDesc1 => "projects.aeroportDesc1",
    ProjectsAeroportDesc2 => "projects.aeroportDesc2",
    ProjectsAeroportCta => "projects.aeroportCta",

    ContactTitle => "contact.title",
    ContactEmail => "contact.email",
    ContactPhone => "contact.phone",
    ContactLinkedin => "contact.linkedin",
    ContactCv => "contact.cv",
    ContactFormActionHint => "contact.formActionHint",
    ContactFormName => "contact.formName",
    ContactFormEmail => "contact.formEmail",
    ContactFormMessage => "contact.formMessage",
    ContactSend => "contact.send",
    ContactAlt => "contact.alt",
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = TextKey::ALL.iter().map(|k| k.path()).collect();
        assert_eq!(paths.len(), TextKey::ALL.len());
    }

    #[test]
    fn test_paths_have_section_and_name() {
        for key in TextKey::ALL {
            let segments: Vec<&str> = key.path().split('.').collect();
            assert_eq!(segments.len(), 2, "{} should be section.name", key);
            assert!(segments.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(TextKey::HeroName.to_string(), "hero.name");
    }
}
