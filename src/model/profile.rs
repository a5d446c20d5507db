use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub contact: Contact,
}

impl Profile {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<Link>,
}

impl Contact {
    /// `(label, value)` rows in display order, skipping absent fields.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        if let Some(email) = &self.email {
            rows.push(("Email", email.clone()));
        }
        if let Some(phone) = &self.phone {
            rows.push(("Phone", phone.clone()));
        }
        if let Some(location) = &self.location {
            rows.push(("Location", location.clone()));
        }
        if let Some(link) = &self.linkedin {
            rows.push(("LinkedIn", format!("{} <{}>", link.label, link.url)));
        }
        rows
    }

    /// Phone number with whitespace stripped, as used for `tel:` links.
    pub fn dial_number(&self) -> Option<String> {
        self.phone
            .as_ref()
            .map(|p| p.chars().filter(|c| !c.is_whitespace()).collect())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub url: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    #[serde(default)]
    pub content: String,
}
