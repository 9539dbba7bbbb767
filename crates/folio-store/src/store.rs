//! Whole-file JSON persistence for the portfolio's entities.
//!
//! The dataset is a personal portfolio: a handful of projects and three
//! singleton records. The store loads the entire data file at open,
//! mutates in memory, and writes the whole file back after each change.
//! List reads go back to disk so they always see the latest saved
//! state, and degrade to an empty page when the file is unreadable.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    cache::QueryCache,
    entity::{About, Contact, Project, Settings},
    error::StoreError,
    query::{ListQuery, ListResult, run_query},
};

/// The on-disk shape of the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataFile {
    /// All projects, unordered.
    #[serde(default)]
    projects: Vec<Project>,
    /// The about page.
    #[serde(default)]
    about: About,
    /// Contact details.
    #[serde(default)]
    contact: Contact,
    /// Site settings.
    #[serde(default)]
    settings: Settings,
}

/// The entity store.
#[derive(Debug)]
pub struct Store {
    /// Path of the JSON data file.
    path: PathBuf,
    /// In-memory copy of the data file.
    data: DataFile,
    /// Memoized list-query results.
    cache: QueryCache,
}

impl Store {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first save. A present but unreadable or malformed file is an
    /// error, since silently starting empty would risk overwriting data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = if path.exists() {
            read_data(&path)?
        } else {
            DataFile::default()
        };
        Ok(Self {
            path,
            data,
            cache: QueryCache::default(),
        })
    }

    /// Returns the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all projects, unordered.
    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    /// Looks up a project by id.
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.data.projects.iter().find(|p| p.id == id)
    }

    /// Looks up a project by slug.
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.data.projects.iter().find(|p| p.slug == slug)
    }

    /// Returns the about page.
    pub fn about(&self) -> &About {
        &self.data.about
    }

    /// Returns the contact record.
    pub fn contact(&self) -> &Contact {
        &self.data.contact
    }

    /// Returns the site settings.
    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    /// Runs a list query against the saved project list.
    ///
    /// Results are memoized per serialized query for a few seconds to
    /// absorb duplicate requests. A read failure is logged for
    /// operators and produces an empty result with `page_count = 0`,
    /// keeping the caller in a valid (if empty) state.
    pub fn list_projects(&self, query: &ListQuery) -> ListResult {
        let key = query.cache_key();
        if let Some(result) = self.cache.get(&key) {
            return result;
        }

        let projects = if self.path.exists() {
            match read_data(&self.path) {
                Ok(data) => data.projects,
                Err(err) => {
                    error!(path = %self.path.display(), %err, "list query failed");
                    return ListResult::default();
                }
            }
        } else {
            // Nothing saved yet; query what is in memory.
            self.data.projects.clone()
        };

        let result = run_query(&projects, query);
        self.cache.put(key, result.clone());
        result
    }

    /// Adds a project and saves.
    pub(crate) fn insert_project(&mut self, project: Project) -> Result<(), StoreError> {
        self.data.projects.push(project);
        self.save()
    }

    /// Replaces the project with the same id and saves.
    pub(crate) fn update_project(&mut self, project: Project) -> Result<(), StoreError> {
        if let Some(existing) = self.data.projects.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
        }
        self.save()
    }

    /// Removes every project whose id is in `ids`, returning how many
    /// were removed.
    pub(crate) fn remove_projects(&mut self, ids: &[String]) -> Result<usize, StoreError> {
        let before = self.data.projects.len();
        self.data.projects.retain(|p| !ids.contains(&p.id));
        let removed = before - self.data.projects.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Replaces the about page and saves.
    pub(crate) fn set_about(&mut self, about: About) -> Result<(), StoreError> {
        self.data.about = about;
        self.save()
    }

    /// Replaces the contact record and saves.
    pub(crate) fn set_contact(&mut self, contact: Contact) -> Result<(), StoreError> {
        self.data.contact = contact;
        self.save()
    }

    /// Replaces the site settings and saves.
    pub(crate) fn set_settings(&mut self, settings: Settings) -> Result<(), StoreError> {
        self.data.settings = settings;
        self.save()
    }

    /// Writes the whole data file and drops memoized list results.
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.cache.invalidate();
        Ok(())
    }
}

/// Reads and parses the data file.
fn read_data(path: &Path) -> Result<DataFile, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;

    use super::*;
    use crate::entity::ProjectDraft;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("data.json")).unwrap();
        (dir, store)
    }

    fn sample_project(slug: &str) -> Project {
        ProjectDraft {
            title: slug.to_uppercase(),
            slug: slug.into(),
            description: "desc".into(),
            content: "{}".into(),
            ..ProjectDraft::default()
        }
        .into_project(Utc::now())
    }

    #[test]
    fn open_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.projects().is_empty());
        assert_eq!(store.settings().page_size, 10);
    }

    #[test]
    fn save_and_reopen_round_trips() {
        let (_dir, mut store) = temp_store();
        store.insert_project(sample_project("one")).unwrap();
        store.insert_project(sample_project("two")).unwrap();

        let reopened = Store::open(store.path()).unwrap();
        assert_eq!(reopened.projects().len(), 2);
        assert!(reopened.project_by_slug("one").is_some());
    }

    #[test]
    fn open_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Store::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn list_sees_saved_projects() {
        let (_dir, mut store) = temp_store();
        store.insert_project(sample_project("one")).unwrap();
        let result = store.list_projects(&ListQuery::default());
        assert_eq!(result.total, 1);
        assert_eq!(result.page_count, 1);
    }

    #[test]
    fn list_degrades_to_empty_on_unreadable_data() {
        let (_dir, mut store) = temp_store();
        store.insert_project(sample_project("one")).unwrap();

        // Corrupt the file behind the store's back.
        fs::write(store.path(), "{ not json").unwrap();

        let result = store.list_projects(&ListQuery::default());
        assert!(result.rows.is_empty());
        assert_eq!(result.page_count, 0);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn remove_projects_counts_removals() {
        let (_dir, mut store) = temp_store();
        let one = sample_project("one");
        let id = one.id.clone();
        store.insert_project(one).unwrap();
        store.insert_project(sample_project("two")).unwrap();

        let removed = store
            .remove_projects(&[id, "missing-id".to_string()])
            .unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn singletons_persist() {
        let (_dir, mut store) = temp_store();
        store
            .set_about(About {
                title: "About Me".into(),
                content: "{}".into(),
            })
            .unwrap();

        let reopened = Store::open(store.path()).unwrap();
        assert_eq!(reopened.about().title, "About Me");
    }
}
