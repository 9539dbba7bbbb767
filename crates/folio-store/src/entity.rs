//! The persisted entity types.
//!
//! These mirror the portfolio's data model: a list of projects plus
//! three singleton records (about page, contact details, site
//! settings). All of them serialize as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug. Unique among all projects.
    pub slug: String,
    /// Short description shown in listings.
    pub description: String,
    /// Rich-text body, stored as editor JSON.
    pub content: String,
    /// Cover image URL, if one was uploaded.
    pub image: Option<String>,
    /// Live demo URL.
    pub demo_url: Option<String>,
    /// Source repository URL.
    pub github_url: Option<String>,
    /// Whether the project is featured on the landing page.
    pub featured: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or updating a project.
///
/// An absent `id` means create; a present `id` means update. Timestamps
/// are managed by the store, never by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    /// Identifier of the project to update, or `None` to create.
    #[serde(default)]
    pub id: Option<String>,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Short description.
    pub description: String,
    /// Rich-text body.
    pub content: String,
    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Live demo URL.
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Source repository URL.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Whether the project is featured.
    #[serde(default)]
    pub featured: bool,
}

impl ProjectDraft {
    /// Materializes a new project from this draft.
    pub(crate) fn into_project(self, now: DateTime<Utc>) -> Project {
        Project {
            id: self.id.unwrap_or_else(new_id),
            title: self.title,
            slug: self.slug,
            description: self.description,
            content: self.content,
            image: self.image,
            demo_url: self.demo_url,
            github_url: self.github_url,
            featured: self.featured,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copies the draft's fields onto an existing project, refreshing
    /// the update timestamp and preserving identity and creation time.
    pub(crate) fn apply_to(self, project: &mut Project, now: DateTime<Utc>) {
        project.title = self.title;
        project.slug = self.slug;
        project.description = self.description;
        project.content = self.content;
        project.image = self.image;
        project.demo_url = self.demo_url;
        project.github_url = self.github_url;
        project.featured = self.featured;
        project.updated_at = now;
    }
}

/// The singleton about page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    /// Page title.
    pub title: String,
    /// Rich-text body.
    pub content: String,
}

/// The singleton contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact e-mail address.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// GitHub profile URL.
    #[serde(default)]
    pub github: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Twitter profile URL.
    #[serde(default)]
    pub twitter: Option<String>,
    /// Rich-text body shown on the contact page.
    pub content: String,
}

/// Site-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Site title shown in the admin header.
    pub site_title: String,
    /// Default rows per page in list views.
    pub page_size: usize,
    /// Whether the public site shows a maintenance notice.
    pub maintenance: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_title: "Portfolio".into(),
            page_size: 10,
            maintenance: false,
        }
    }
}

/// Generates a fresh entity identifier.
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: "My Project".into(),
            slug: "my-project".into(),
            description: "desc".into(),
            content: "{}".into(),
            ..ProjectDraft::default()
        }
    }

    #[test]
    fn draft_creates_project_with_fresh_id() {
        let now = Utc::now();
        let project = draft().into_project(now);
        assert!(!project.id.is_empty());
        assert_eq!(project.created_at, now);
        assert_eq!(project.updated_at, now);
        assert!(!project.featured);
    }

    #[test]
    fn draft_update_preserves_identity() {
        let created = Utc::now();
        let mut project = draft().into_project(created);
        let id = project.id.clone();

        let later = created + chrono::Duration::seconds(5);
        let mut update = draft();
        update.title = "Renamed".into();
        update.apply_to(&mut project, later);

        assert_eq!(project.id, id);
        assert_eq!(project.created_at, created);
        assert_eq!(project.updated_at, later);
        assert_eq!(project.title, "Renamed");
    }

    #[test]
    fn project_json_uses_camel_case() {
        let project = draft().into_project(Utc::now());
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("demoUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("demo_url").is_none());
    }
}
