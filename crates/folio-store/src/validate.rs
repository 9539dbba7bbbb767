//! Field-scoped validation.
//!
//! Validation never throws: each check accumulates messages under the
//! offending field name, and callers render them inline next to the
//! form field. The checks mirror what the admin forms enforce.

use std::collections::BTreeMap;

use crate::entity::{Contact, ProjectDraft};

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// Validates a project draft.
///
/// Title, slug, description, and content are required; the slug must be
/// in canonical form (what [`slugify`] would produce). Slug *uniqueness*
/// is checked by the store, which owns the project list.
pub fn validate_project(draft: &ProjectDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "title", &draft.title, "Title is required");
    require(&mut errors, "slug", &draft.slug, "Slug is required");
    require(
        &mut errors,
        "description",
        &draft.description,
        "Description is required",
    );
    require(&mut errors, "content", &draft.content, "Content is required");

    if !draft.slug.trim().is_empty() && draft.slug != slugify(&draft.slug) {
        push(
            &mut errors,
            "slug",
            "Slug may only contain lowercase letters, digits, and hyphens",
        );
    }

    for (field, value) in [
        ("demoUrl", &draft.demo_url),
        ("githubUrl", &draft.github_url),
    ] {
        if let Some(url) = value
            && !url.is_empty()
            && !is_url(url)
        {
            push(&mut errors, field, "Must be a valid URL");
        }
    }

    errors
}

/// Validates the contact record.
pub fn validate_contact(contact: &Contact) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !is_email(&contact.email) {
        push(&mut errors, "email", "Invalid email address");
    }
    require(&mut errors, "content", &contact.content, "Content is required");

    for (field, value) in [
        ("github", &contact.github),
        ("linkedin", &contact.linkedin),
        ("twitter", &contact.twitter),
    ] {
        if let Some(url) = value
            && !url.is_empty()
            && !is_url(url)
        {
            push(&mut errors, field, "Must be a valid URL");
        }
    }

    errors
}

/// Validates a titled rich-text page (the about page).
pub fn validate_text_page(title: &str, content: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "title", title, "Title is required");
    require(&mut errors, "content", content, "Content is required");
    errors
}

/// Converts free text into a canonical slug.
///
/// Lowercases, trims, turns whitespace runs into single hyphens, spells
/// out ampersands, and drops anything that is not a word character or
/// hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_hyphen = true;
    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !last_hyphen {
                slug.push('-');
                last_hyphen = true;
            }
        } else if c == '&' {
            if !last_hyphen {
                slug.push('-');
            }
            slug.push_str("and-");
            last_hyphen = true;
        } else if c.is_alphanumeric() || c == '_' {
            slug.push(c);
            last_hyphen = false;
        }
    }
    slug.trim_matches('-').to_string()
}

/// Adds a required-field error when the value is blank.
fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        push(errors, field, message);
    }
}

/// Appends a message under a field key.
fn push(errors: &mut FieldErrors, field: &'static str, message: &str) {
    errors.entry(field).or_default().push(message.to_string());
}

/// Shallow e-mail shape check: one `@` with something on both sides and
/// a dot in the domain.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Shallow URL shape check: http or https scheme with a non-empty rest.
fn is_url(value: &str) -> bool {
    value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}
