//! Home page content
//!
//! Profile, learning journey, career stations and skills shown around the
//! project list.

use serde::{Deserialize, Serialize};

use super::error::{RegistryError, RegistryResult};

/// Everything on the home page except the project cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub profile: Profile,
    /// Disclaimer printed under the project grid
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub learning: Vec<LearningEntry>,
    #[serde(default)]
    pub experience: Vec<Station>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Sentence printed under the skills badges
    #[serde(default)]
    pub skills_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub tagline: String,
    /// `mailto:` link
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub links: ProfileLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// One step of the learning timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LearningEntry {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub details: String,
}

/// One career station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Station {
    pub role: String,
    pub place: String,
}

impl SiteContent {
    /// Parse and validate a site document
    pub fn from_toml_str(input: &str, document: &str) -> RegistryResult<Self> {
        let site: SiteContent = toml::from_str(input).map_err(|e| RegistryError::Parse {
            document: document.to_string(),
            message: e.to_string(),
        })?;
        site.validate()?;
        Ok(site)
    }

    fn validate(&self) -> RegistryResult<()> {
        if self.profile.name.trim().is_empty() {
            return Err(RegistryError::EmptySiteField("profile name"));
        }
        if self.profile.title.trim().is_empty() {
            return Err(RegistryError::EmptySiteField("profile title"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [profile]
        name = "Ada"
        title = "Data Engineer"
    "#;

    #[test]
    fn test_minimal_site() {
        let site = SiteContent::from_toml_str(MINIMAL, "site.toml").unwrap();
        assert_eq!(site.profile.name, "Ada");
        assert!(site.learning.is_empty());
        assert_eq!(site.profile.links, ProfileLinks::default());
    }

    #[test]
    fn test_blank_name_rejected() {
        let input = MINIMAL.replace("\"Ada\"", "\"  \"");
        let err = SiteContent::from_toml_str(&input, "site.toml").unwrap_err();
        assert!(matches!(err, RegistryError::EmptySiteField("profile name")));
    }

    #[test]
    fn test_missing_profile_rejected() {
        let err = SiteContent::from_toml_str("skills = [\"SQL\"]", "site.toml").unwrap_err();
        match err {
            RegistryError::Parse { document, .. } => assert_eq!(document, "site.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
