//! The list-query builder: filter, sort, and paginate projects.
//!
//! A [`ListQuery`] is constructed per incoming list request, run against
//! the project list, and discarded after producing a [`ListResult`].
//! Filters AND together; the sort is a priority-ordered sequence
//! falling back to newest-first.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entity::Project;

/// Which project field a filter inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    /// The project title.
    Title,
    /// The project slug.
    Slug,
    /// The short description.
    Description,
    /// The featured flag.
    Featured,
}

/// How a filter compares its value against the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOp {
    /// Case-insensitive equality.
    Eq,
    /// Case-insensitive substring containment.
    Contains,
}

/// One filter condition. All of a query's filters must hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// The field to inspect.
    pub field: FilterField,
    /// The comparison to apply.
    pub op: FilterOp,
    /// The value to compare with. For [`FilterField::Featured`] the
    /// accepted values are `"true"` and `"false"`.
    pub value: String,
}

impl Filter {
    /// Returns true when the project satisfies this condition.
    fn matches(&self, project: &Project) -> bool {
        match self.field {
            FilterField::Title => text_matches(&project.title, self.op, &self.value),
            FilterField::Slug => text_matches(&project.slug, self.op, &self.value),
            FilterField::Description => text_matches(&project.description, self.op, &self.value),
            FilterField::Featured => match self.value.parse::<bool>() {
                Ok(flag) => project.featured == flag,
                Err(_) => false,
            },
        }
    }
}

/// Applies a text comparison case-insensitively.
fn text_matches(field: &str, op: FilterOp, value: &str) -> bool {
    let field = field.to_lowercase();
    let value = value.to_lowercase();
    match op {
        FilterOp::Eq => field == value,
        FilterOp::Contains => field.contains(&value),
    }
}

/// Which project field a sort orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// The project title.
    Title,
    /// The project slug.
    Slug,
    /// The featured flag.
    Featured,
    /// Creation time.
    CreatedAt,
    /// Last-update time.
    UpdatedAt,
}

/// One sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// The field to order by.
    pub field: SortField,
    /// Descending rather than ascending.
    pub descending: bool,
}

/// Compares two projects on a single sort field, ascending.
fn compare_on(field: SortField, a: &Project, b: &Project) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Slug => a.slug.cmp(&b.slug),
        SortField::Featured => a.featured.cmp(&b.featured),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// A paged list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// One-based page number. Values below 1 are treated as 1.
    #[serde(default = "default_page")]
    pub page: usize,
    /// Rows per page. Values below 1 are treated as 1.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    /// AND-combined filter conditions. Empty means no filtering.
    #[serde(default)]
    pub filters: Vec<Filter>,
    /// Priority-ordered sort. Empty means newest-first by creation time.
    #[serde(default)]
    pub sort: Vec<Sort>,
}

/// Default page number.
fn default_page() -> usize {
    1
}

/// Default page size.
fn default_per_page() -> usize {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            filters: Vec::new(),
            sort: Vec::new(),
        }
    }
}

impl ListQuery {
    /// Serializes the query into a stable cache key.
    pub fn cache_key(&self) -> String {
        // Field order in the derive is fixed, so the JSON is stable.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// One page of results plus the page count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult {
    /// The rows on the requested page, in sort order.
    pub rows: Vec<Project>,
    /// Total pages for the filtered set.
    pub page_count: usize,
    /// Total rows matching the filters, across all pages.
    pub total: usize,
}

/// Runs a list query against the full project list.
///
/// `offset = (page - 1) * per_page`; `page_count` is the ceiling of
/// total matching rows over the page size. A page past the end yields
/// an empty row set with the true page count.
pub fn run_query(projects: &[Project], query: &ListQuery) -> ListResult {
    let mut rows: Vec<Project> = projects
        .iter()
        .filter(|project| query.filters.iter().all(|f| f.matches(project)))
        .cloned()
        .collect();

    let default_sort = [Sort {
        field: SortField::CreatedAt,
        descending: true,
    }];
    let sort: &[Sort] = if query.sort.is_empty() {
        &default_sort
    } else {
        &query.sort
    };

    rows.sort_by(|a, b| {
        for criterion in sort {
            let mut ordering = compare_on(criterion.field, a, b);
            if criterion.descending {
                ordering = ordering.reverse();
            }
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        // Stable tiebreak so pagination never straddles duplicates.
        a.id.cmp(&b.id)
    });

    let total = rows.len();
    let per_page = query.per_page.max(1);
    let page = query.page.max(1);
    let page_count = total.div_ceil(per_page);
    let offset = (page - 1) * per_page;

    let rows = if offset >= total {
        Vec::new()
    } else {
        rows.into_iter().skip(offset).take(per_page).collect()
    };

    ListResult {
        rows,
        page_count,
        total,
    }
}
