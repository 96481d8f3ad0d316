//! vCard 3.0 contact card export.

use crate::profile::Profile;

pub const VCARD_MIME: &str = "text/vcard";

/// A contact card built from a [`Profile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactCard<'a> {
    profile: &'a Profile,
}

impl<'a> ContactCard<'a> {
    pub fn from_profile(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn file_name(&self) -> String {
        format!("{}.vcf", self.profile.file_stem())
    }

    /// Render the fixed-schema record, one property per line.
    pub fn render(&self) -> String {
        let p = self.profile;
        let a = &p.address;
        let adr = [&a.street, &a.locality, &a.region, &a.postal_code, &a.country]
            .map(|part| escape(part))
            .join(";");

        [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", escape(&p.name)),
            format!("ORG:{}", escape(&p.organization)),
            format!("TITLE:{}", escape(&p.title)),
            format!("EMAIL:{}", escape(&p.email)),
            format!("TEL:{}", escape(&p.phone)),
            format!("URL:{}", p.url),
            format!("ADR:;;{}", adr),
            format!("NOTE:{}", escape(&p.note)),
            "END:VCARD".to_string(),
        ]
        .join("\n")
    }
}

/// Escape a text value (RFC 2426 section 4).
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_renders_reference_card() {
        let profile = Profile::default();
        let card = ContactCard::from_profile(&profile).render();
        let expected = "BEGIN:VCARD
VERSION:3.0
FN:Kelvin Developer
ORG:Freelance Developer
TITLE:Front-end Developer
EMAIL:kevrith@gmail.com
TEL:+254 718 864 578
URL:https://kelvindeveloper.portfolio.com
ADR:;;Nairobi;Nairobi County;;00100;Kenya
NOTE:Front-end Developer specializing in web development and software development
END:VCARD";
        assert_eq!(card, expected);
    }

    #[test]
    fn special_characters_are_escaped() {
        let profile = Profile {
            organization: "Acme, Inc; R&D".to_string(),
            note: "line one\nline two".to_string(),
            ..Profile::default()
        };
        let card = ContactCard::from_profile(&profile).render();
        assert!(card.contains("ORG:Acme\\, Inc\\; R&D\n"));
        assert!(card.contains("NOTE:line one\\nline two\n"));
        assert_eq!(card.lines().count(), 11);
    }

    #[test]
    fn file_name_uses_stem() {
        let profile = Profile::default();
        assert_eq!(ContactCard::from_profile(&profile).file_name(), "Kelvin_Developer.vcf");
    }
}
