//! Implementation of the `folio project` subcommands.

use std::process::ExitCode;

use folio_document::Document;
use folio_store::{
    Filter, FilterField, FilterOp, ListQuery, ProjectDraft, Sort, SortField, slugify,
    upsert_project,
};

use super::shared::{document_json, resolve_content, resolve_project_id};
use crate::cli::{
    args::{
        ProjectAction, ProjectAddCommand, ProjectEditCommand, ProjectListCommand,
        ProjectRmCommand, ProjectShowCommand,
    },
    context::CommandContext,
    output::{print_json, project_table, report_outcome},
};

/// Dispatches a project action.
pub fn run(ctx: &mut CommandContext, action: ProjectAction) -> ExitCode {
    match action {
        ProjectAction::List(cmd) => list(ctx, &cmd),
        ProjectAction::Add(cmd) => add(ctx, &cmd),
        ProjectAction::Edit(cmd) => edit(ctx, &cmd),
        ProjectAction::Rm(cmd) => rm(ctx, &cmd),
        ProjectAction::Show(cmd) => show(ctx, &cmd),
    }
}

/// Parses one `--sort` flag of the form `field` or `field:desc`.
fn parse_sort(spec: &str) -> Result<Sort, String> {
    let (field, direction) = match spec.split_once(':') {
        Some((field, direction)) => (field, direction),
        None => (spec, "asc"),
    };

    let field = match field {
        "title" => SortField::Title,
        "slug" => SortField::Slug,
        "featured" => SortField::Featured,
        "createdAt" | "created" => SortField::CreatedAt,
        "updatedAt" | "updated" => SortField::UpdatedAt,
        other => return Err(format!("unknown sort field '{other}'")),
    };

    let descending = match direction {
        "asc" => false,
        "desc" => true,
        other => return Err(format!("unknown sort direction '{other}'")),
    };

    Ok(Sort { field, descending })
}

/// Builds the list query from command flags.
fn build_query(ctx: &CommandContext, cmd: &ProjectListCommand) -> Result<ListQuery, String> {
    let mut filters = Vec::new();
    if let Some(title) = &cmd.title {
        filters.push(Filter {
            field: FilterField::Title,
            op: FilterOp::Contains,
            value: title.clone(),
        });
    }
    if let Some(slug) = &cmd.slug {
        filters.push(Filter {
            field: FilterField::Slug,
            op: FilterOp::Eq,
            value: slug.clone(),
        });
    }
    if let Some(featured) = cmd.featured {
        filters.push(Filter {
            field: FilterField::Featured,
            op: FilterOp::Eq,
            value: featured.to_string(),
        });
    }

    let sort = cmd
        .sort
        .iter()
        .map(|spec| parse_sort(spec))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListQuery {
        page: cmd.page,
        per_page: cmd.per_page.unwrap_or(ctx.config.page_size),
        filters,
        sort,
    })
}

/// Lists projects with filtering, sorting, and pagination.
fn list(ctx: &mut CommandContext, cmd: &ProjectListCommand) -> ExitCode {
    let query = match build_query(ctx, cmd) {
        Ok(query) => query,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let result = store.list_projects(&query);

    if cmd.output.json {
        return print_json(&result);
    }

    if result.rows.is_empty() {
        println!("No projects found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", project_table(&result.rows));
    println!(
        "page {} of {} ({} total)",
        query.page.max(1),
        result.page_count,
        result.total
    );
    ExitCode::SUCCESS
}

/// Adds a new project.
fn add(ctx: &mut CommandContext, cmd: &ProjectAddCommand) -> ExitCode {
    let content = match resolve_content(cmd.content.as_deref(), cmd.content_file.as_ref()) {
        Ok(Some(content)) => content,
        Ok(None) => match document_json(&Document::empty()) {
            Ok(content) => content,
            Err(code) => return code,
        },
        Err(code) => return code,
    };

    let draft = ProjectDraft {
        id: None,
        title: cmd.title.clone(),
        slug: cmd.slug.clone().unwrap_or_else(|| slugify(&cmd.title)),
        description: cmd.description.clone(),
        content,
        image: cmd.image_url.clone(),
        demo_url: cmd.demo_url.clone(),
        github_url: cmd.github_url.clone(),
        featured: cmd.featured,
    };

    let session = ctx.session(cmd.session.as_viewer);
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    let outcome = upsert_project(store, &session, draft);
    if cmd.output.json
        && let folio_store::ActionOutcome::Data(project) = &outcome
    {
        return print_json(project);
    }
    report_outcome(&outcome, |project| {
        format!("Added project '{}' ({})", project.title, project.slug)
    })
}

/// Edits an existing project.
fn edit(ctx: &mut CommandContext, cmd: &ProjectEditCommand) -> ExitCode {
    let content = match resolve_content(cmd.content.as_deref(), cmd.content_file.as_ref()) {
        Ok(content) => content,
        Err(code) => return code,
    };

    let session = ctx.session(cmd.session.as_viewer);
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    let id = match resolve_project_id(store, &cmd.id) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let Some(existing) = store.project_by_id(&id).cloned() else {
        eprintln!("error: no project with id '{id}'");
        return ExitCode::FAILURE;
    };

    // Unset flags keep the stored values.
    let draft = ProjectDraft {
        id: Some(existing.id),
        title: cmd.title.clone().unwrap_or(existing.title),
        slug: cmd.slug.clone().unwrap_or(existing.slug),
        description: cmd.description.clone().unwrap_or(existing.description),
        content: content.unwrap_or(existing.content),
        image: cmd.image_url.clone().or(existing.image),
        demo_url: cmd.demo_url.clone().or(existing.demo_url),
        github_url: cmd.github_url.clone().or(existing.github_url),
        featured: cmd.featured.unwrap_or(existing.featured),
    };

    let outcome = upsert_project(store, &session, draft);
    if cmd.output.json
        && let folio_store::ActionOutcome::Data(project) = &outcome
    {
        return print_json(project);
    }
    report_outcome(&outcome, |project| {
        format!("Updated project '{}' ({})", project.title, project.slug)
    })
}

/// Removes projects by id or slug.
fn rm(ctx: &mut CommandContext, cmd: &ProjectRmCommand) -> ExitCode {
    let session = ctx.session(cmd.session.as_viewer);
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    let mut ids = Vec::with_capacity(cmd.ids.len());
    for reference in &cmd.ids {
        match resolve_project_id(store, reference) {
            Ok(id) => ids.push(id),
            Err(code) => return code,
        }
    }

    let outcome = folio_store::delete_projects(store, &session, &ids);
    report_outcome(&outcome, |removed| {
        format!(
            "Removed {removed} project{}",
            if *removed == 1 { "" } else { "s" }
        )
    })
}

/// Shows a single project.
fn show(ctx: &mut CommandContext, cmd: &ProjectShowCommand) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    let id = match resolve_project_id(store, &cmd.id) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let Some(project) = store.project_by_id(&id) else {
        eprintln!("error: no project with id '{id}'");
        return ExitCode::FAILURE;
    };

    if cmd.output.json {
        return print_json(project);
    }

    println!("{}", project.title);
    println!("   slug:        {}", project.slug);
    println!("   description: {}", project.description);
    println!("   featured:    {}", project.featured);
    if let Some(url) = &project.demo_url {
        println!("   demo:        {url}");
    }
    if let Some(url) = &project.github_url {
        println!("   github:      {url}");
    }
    if let Some(url) = &project.image {
        println!("   image:       {url}");
    }
    println!("   created:     {}", project.created_at.to_rfc3339());
    println!("   updated:     {}", project.updated_at.to_rfc3339());

    match Document::from_json(&project.content) {
        Ok(doc) => {
            let text = doc.flatten();
            if !text.is_empty() {
                println!();
                println!("{text}");
            }
        }
        Err(e) => eprintln!("warning: stored content is not a valid document: {e}"),
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_spec_parses_field_and_direction() {
        let sort = parse_sort("title:desc").unwrap();
        assert_eq!(sort.field, SortField::Title);
        assert!(sort.descending);

        let sort = parse_sort("createdAt").unwrap();
        assert_eq!(sort.field, SortField::CreatedAt);
        assert!(!sort.descending);
    }

    #[test]
    fn bad_sort_specs_are_rejected() {
        assert!(parse_sort("size").is_err());
        assert!(parse_sort("title:sideways").is_err());
    }
}
