//! Contact affordance shown after an out-of-scope or failed answer

use crate::config::ContactInfo;

/// A single contact button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: String,
    /// Opens in a new tab
    pub external: bool,
}

/// Links in display order: email, X, LinkedIn, then the document if any
pub fn contact_links(info: &ContactInfo) -> Vec<ContactLink> {
    let mut links = vec![
        ContactLink {
            label: "Email",
            href: format!("mailto:{}", info.email),
            external: false,
        },
        ContactLink {
            label: "X (Twitter)",
            href: info.twitter.clone(),
            external: true,
        },
        ContactLink {
            label: "LinkedIn",
            href: info.linkedin.clone(),
            external: true,
        },
    ];

    if let Some(document) = &info.document {
        links.push(ContactLink {
            label: "CV",
            href: document.clone(),
            external: true,
        });
    }

    links
}
