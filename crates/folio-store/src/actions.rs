//! Authorization-guarded CRUD actions.
//!
//! Every action follows the same safe-action shape: check the session
//! role, validate the input, then run the mutation. Failures come back
//! as values rather than panics, so the caller can render them inline.

use tracing::error;

use crate::{
    entity::{About, Contact, Project, ProjectDraft, Settings},
    session::Session,
    store::Store,
    validate::{FieldErrors, validate_contact, validate_project, validate_text_page},
};

/// The uniform error string returned for non-admin mutation attempts.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// The result of a guarded action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    /// The action succeeded.
    Data(T),
    /// Validation rejected the input; messages are keyed by field.
    Invalid(FieldErrors),
    /// The action failed outright (authorization or persistence).
    Failed(String),
}

impl<T> ActionOutcome<T> {
    /// Returns true when the action succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Returns true when the failure was an authorization refusal.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Failed(message) if message == UNAUTHORIZED)
    }

    /// Builds a single-field validation failure.
    fn field_error(field: &'static str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field, vec![message.to_string()]);
        Self::Invalid(errors)
    }
}

/// Creates or updates a project.
///
/// A draft without an id creates; with an id it updates that project.
/// The slug must be unique among all projects; on a collision nothing
/// is written and the caller gets a field-scoped error on `slug`.
pub fn upsert_project(
    store: &mut Store,
    session: &Session,
    draft: ProjectDraft,
) -> ActionOutcome<Project> {
    if !session.is_admin() {
        return ActionOutcome::Failed(UNAUTHORIZED.into());
    }

    let errors = validate_project(&draft);
    if !errors.is_empty() {
        return ActionOutcome::Invalid(errors);
    }

    // Uniqueness: a colliding slug on another project blocks the write.
    if let Some(existing) = store.project_by_slug(&draft.slug)
        && draft.id.as_deref() != Some(existing.id.as_str())
    {
        return ActionOutcome::field_error("slug", "Slug is already in use");
    }

    let now = chrono::Utc::now();
    let saved = match &draft.id {
        Some(id) => {
            let Some(mut project) = store.project_by_id(id).cloned() else {
                return ActionOutcome::Failed(format!("No project with id {id}"));
            };
            draft.apply_to(&mut project, now);
            store.update_project(project.clone()).map(|()| project)
        }
        None => {
            let project = draft.into_project(now);
            store.insert_project(project.clone()).map(|()| project)
        }
    };

    match saved {
        Ok(project) => ActionOutcome::Data(project),
        Err(err) => {
            error!(%err, "failed to save project");
            ActionOutcome::Failed("Failed to save project".into())
        }
    }
}

/// Deletes the projects with the given ids, returning how many rows
/// were removed. Unknown ids are skipped silently.
pub fn delete_projects(
    store: &mut Store,
    session: &Session,
    ids: &[String],
) -> ActionOutcome<usize> {
    if !session.is_admin() {
        return ActionOutcome::Failed(UNAUTHORIZED.into());
    }

    match store.remove_projects(ids) {
        Ok(removed) => ActionOutcome::Data(removed),
        Err(err) => {
            error!(%err, "failed to delete projects");
            ActionOutcome::Failed("Failed to delete project".into())
        }
    }
}

/// Replaces the about page.
pub fn update_about(store: &mut Store, session: &Session, about: About) -> ActionOutcome<About> {
    if !session.is_admin() {
        return ActionOutcome::Failed(UNAUTHORIZED.into());
    }

    let errors = validate_text_page(&about.title, &about.content);
    if !errors.is_empty() {
        return ActionOutcome::Invalid(errors);
    }

    match store.set_about(about.clone()) {
        Ok(()) => ActionOutcome::Data(about),
        Err(err) => {
            error!(%err, "failed to save about page");
            ActionOutcome::Failed("Failed to save about".into())
        }
    }
}

/// Replaces the contact record.
pub fn update_contact(
    store: &mut Store,
    session: &Session,
    contact: Contact,
) -> ActionOutcome<Contact> {
    if !session.is_admin() {
        return ActionOutcome::Failed(UNAUTHORIZED.into());
    }

    let errors = validate_contact(&contact);
    if !errors.is_empty() {
        return ActionOutcome::Invalid(errors);
    }

    match store.set_contact(contact.clone()) {
        Ok(()) => ActionOutcome::Data(contact),
        Err(err) => {
            error!(%err, "failed to save contact");
            ActionOutcome::Failed("Failed to save contact".into())
        }
    }
}

/// Replaces the site settings.
pub fn update_settings(
    store: &mut Store,
    session: &Session,
    settings: Settings,
) -> ActionOutcome<Settings> {
    if !session.is_admin() {
        return ActionOutcome::Failed(UNAUTHORIZED.into());
    }

    if settings.page_size == 0 {
        return ActionOutcome::field_error("pageSize", "Page size must be at least 1");
    }
    if settings.site_title.trim().is_empty() {
        return ActionOutcome::field_error("siteTitle", "Site title is required");
    }

    match store.set_settings(settings.clone()) {
        Ok(()) => ActionOutcome::Data(settings),
        Err(err) => {
            error!(%err, "failed to save settings");
            ActionOutcome::Failed("Failed to save settings".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("data.json")).unwrap();
        (dir, store)
    }

    fn draft(slug: &str) -> ProjectDraft {
        ProjectDraft {
            title: "Title".into(),
            slug: slug.into(),
            description: "desc".into(),
            content: "{}".into(),
            ..ProjectDraft::default()
        }
    }

    #[test]
    fn viewer_mutations_are_unauthorized() {
        let (_dir, mut store) = temp_store();
        let viewer = Session::viewer("v@example.com");

        let outcome = upsert_project(&mut store, &viewer, draft("p"));
        assert!(outcome.is_unauthorized());
        assert!(store.projects().is_empty());

        let outcome = delete_projects(&mut store, &viewer, &["x".into()]);
        assert!(outcome.is_unauthorized());

        let outcome = update_settings(&mut store, &viewer, Settings::default());
        assert!(outcome.is_unauthorized());
    }

    #[test]
    fn create_then_update_project() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        let ActionOutcome::Data(created) = upsert_project(&mut store, &admin, draft("my-project"))
        else {
            panic!("create failed");
        };

        let mut update = draft("my-project");
        update.id = Some(created.id.clone());
        update.title = "Renamed".into();
        let ActionOutcome::Data(updated) = upsert_project(&mut store, &admin, update) else {
            panic!("update failed");
        };

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn slug_collision_on_create() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        assert!(upsert_project(&mut store, &admin, draft("my-project")).is_success());
        let outcome = upsert_project(&mut store, &admin, draft("my-project"));

        let ActionOutcome::Invalid(errors) = outcome else {
            panic!("expected field errors");
        };
        assert_eq!(errors["slug"], vec!["Slug is already in use"]);
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn slug_collision_on_update_excludes_self() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        let ActionOutcome::Data(first) = upsert_project(&mut store, &admin, draft("first")) else {
            panic!("create failed");
        };
        assert!(upsert_project(&mut store, &admin, draft("second")).is_success());

        // Keeping its own slug is fine.
        let mut same = draft("first");
        same.id = Some(first.id.clone());
        assert!(upsert_project(&mut store, &admin, same).is_success());

        // Taking the other project's slug is not.
        let mut stolen = draft("second");
        stolen.id = Some(first.id);
        let outcome = upsert_project(&mut store, &admin, stolen);
        assert!(matches!(outcome, ActionOutcome::Invalid(_)));
    }

    #[test]
    fn invalid_draft_reports_field_errors() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        let outcome = upsert_project(&mut store, &admin, ProjectDraft::default());
        let ActionOutcome::Invalid(errors) = outcome else {
            panic!("expected field errors");
        };
        assert!(errors.contains_key("title"));
        assert!(store.projects().is_empty());
    }

    #[test]
    fn update_missing_project_fails() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        let mut update = draft("ghost");
        update.id = Some("no-such-id".into());
        let outcome = upsert_project(&mut store, &admin, update);
        assert!(matches!(outcome, ActionOutcome::Failed(_)));
        assert!(!outcome.is_unauthorized());
    }

    #[test]
    fn delete_reports_removed_count() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        let ActionOutcome::Data(p) = upsert_project(&mut store, &admin, draft("one")) else {
            panic!("create failed");
        };
        let outcome = delete_projects(&mut store, &admin, &[p.id, "missing".into()]);
        assert_eq!(outcome, ActionOutcome::Data(1));
    }

    #[test]
    fn settings_validation() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        let bad = Settings {
            page_size: 0,
            ..Settings::default()
        };
        let outcome = update_settings(&mut store, &admin, bad);
        assert!(matches!(outcome, ActionOutcome::Invalid(_)));

        let good = Settings {
            page_size: 25,
            ..Settings::default()
        };
        assert!(update_settings(&mut store, &admin, good).is_success());
        assert_eq!(store.settings().page_size, 25);
    }

    #[test]
    fn about_requires_title_and_content() {
        let (_dir, mut store) = temp_store();
        let admin = Session::admin("a@example.com");

        let outcome = update_about(&mut store, &admin, About::default());
        assert!(matches!(outcome, ActionOutcome::Invalid(_)));

        let outcome = update_about(&mut store, &admin, About {
            title: "About".into(),
            content: "{}".into(),
        });
        assert!(outcome.is_success());
    }
}
