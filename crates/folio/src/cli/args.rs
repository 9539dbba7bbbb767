//! Clap argument definitions for the `folio` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio content manager - projects, pages, and rich-text editing")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared session flags.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Act as a read-only viewer instead of the configured admin
    #[arg(long)]
    pub as_viewer: bool,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.folio.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `folio project list`.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectListCommand {
    /// Page number (1-based)
    #[arg(short = 'p', long, default_value = "1")]
    pub page: usize,

    /// Rows per page (defaults to the configured page size)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Filter: title contains this text (case-insensitive)
    #[arg(long)]
    pub title: Option<String>,

    /// Filter: slug equals this value (case-insensitive)
    #[arg(long)]
    pub slug: Option<String>,

    /// Filter: featured flag (true or false)
    #[arg(long)]
    pub featured: Option<bool>,

    /// Sort criteria, highest priority first (e.g. "title", "createdAt:desc")
    #[arg(short = 's', long = "sort")]
    pub sort: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `folio project add`.
#[derive(Args, Debug, Clone)]
pub struct ProjectAddCommand {
    /// Project title
    #[arg(long)]
    pub title: String,

    /// URL slug (defaults to a slugified title)
    #[arg(long)]
    pub slug: Option<String>,

    /// Short description
    #[arg(long)]
    pub description: String,

    /// Rich-text content as a document JSON file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Rich-text content as plain text (paragraphs split on blank lines)
    #[arg(long)]
    pub content: Option<String>,

    /// Mark the project as featured
    #[arg(long)]
    pub featured: bool,

    /// Demo URL
    #[arg(long)]
    pub demo_url: Option<String>,

    /// GitHub URL
    #[arg(long)]
    pub github_url: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image_url: Option<String>,

    #[command(flatten)]
    /// Session flags.
    pub session: SessionArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `folio project edit`.
#[derive(Args, Debug, Clone)]
pub struct ProjectEditCommand {
    /// Project id or slug
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New slug
    #[arg(long)]
    pub slug: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New content as a document JSON file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// New content as plain text
    #[arg(long)]
    pub content: Option<String>,

    /// New featured flag (true or false)
    #[arg(long)]
    pub featured: Option<bool>,

    /// New demo URL
    #[arg(long)]
    pub demo_url: Option<String>,

    /// New GitHub URL
    #[arg(long)]
    pub github_url: Option<String>,

    /// New image URL
    #[arg(long)]
    pub image_url: Option<String>,

    #[command(flatten)]
    /// Session flags.
    pub session: SessionArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `folio project rm`.
#[derive(Args, Debug, Clone)]
pub struct ProjectRmCommand {
    /// Project ids or slugs to remove
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    /// Session flags.
    pub session: SessionArgs,
}

/// Arguments for `folio project show`.
#[derive(Args, Debug, Clone)]
pub struct ProjectShowCommand {
    /// Project id or slug
    pub id: String,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Project management subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ProjectAction {
    /// List projects with filtering, sorting, and pagination
    List(ProjectListCommand),
    /// Add a new project
    Add(ProjectAddCommand),
    /// Edit an existing project
    Edit(ProjectEditCommand),
    /// Remove projects
    Rm(ProjectRmCommand),
    /// Show a single project
    Show(ProjectShowCommand),
}

/// Arguments for `folio about set`.
#[derive(Args, Debug, Clone)]
pub struct AboutSetCommand {
    /// Page title
    #[arg(long)]
    pub title: String,

    /// Page content as a document JSON file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Page content as plain text
    #[arg(long)]
    pub content: Option<String>,

    #[command(flatten)]
    /// Session flags.
    pub session: SessionArgs,
}

/// About page subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum AboutAction {
    /// Show the about page
    Show(OutputArgs),
    /// Replace the about page
    Set(AboutSetCommand),
}

/// Arguments for `folio contact set`.
#[derive(Args, Debug, Clone)]
pub struct ContactSetCommand {
    /// Contact email address
    #[arg(long)]
    pub email: String,

    /// Contact blurb as a document JSON file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Contact blurb as plain text
    #[arg(long)]
    pub content: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// GitHub profile URL
    #[arg(long)]
    pub github: Option<String>,

    /// LinkedIn profile URL
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Twitter profile URL
    #[arg(long)]
    pub twitter: Option<String>,

    #[command(flatten)]
    /// Session flags.
    pub session: SessionArgs,
}

/// Contact record subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ContactAction {
    /// Show the contact record
    Show(OutputArgs),
    /// Replace the contact record
    Set(ContactSetCommand),
}

/// Arguments for `folio settings set`.
#[derive(Args, Debug, Clone)]
pub struct SettingsSetCommand {
    /// Site title
    #[arg(long)]
    pub site_title: Option<String>,

    /// Default rows per page for listings
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Maintenance mode (true or false)
    #[arg(long)]
    pub maintenance: Option<bool>,

    #[command(flatten)]
    /// Session flags.
    pub session: SessionArgs,
}

/// Site settings subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsAction {
    /// Show the site settings
    Show(OutputArgs),
    /// Update the site settings
    Set(SettingsSetCommand),
}

/// Arguments for `folio edit search`.
#[derive(Args, Debug, Clone)]
pub struct EditSearchCommand {
    /// Document JSON file to search
    pub file: PathBuf,

    /// Search term
    pub term: String,

    /// Replace the selected match with this text and save the file
    #[arg(short = 'r', long)]
    pub replace: Option<String>,

    /// Replace every match instead of just the selected one
    #[arg(long, requires = "replace")]
    pub all: bool,

    /// Treat the term as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Select the given match (0-based) instead of the first
    #[arg(long)]
    pub select: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Rich-text editing subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum EditAction {
    /// Find and replace inside a document file
    #[command(after_help = "\
EXAMPLES:
  folio edit search notes.json cat              List matches for 'cat'
  folio edit search notes.json cat --select 2   Select the third match
  folio edit search notes.json cat -r dog       Replace the selected match
  folio edit search notes.json cat -r dog --all Replace every match
  folio edit search notes.json 'c.t' --regex    Regular expression search")]
    Search(EditSearchCommand),
}

/// Supported `folio` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize folio configuration in current directory
    Init(InitCommand),

    /// Show configuration, data file, and content statistics
    Status,

    /// Manage projects
    Project {
        /// Project action to run
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage the about page
    About {
        /// About page action to run
        #[command(subcommand)]
        action: AboutAction,
    },

    /// Manage the contact record
    Contact {
        /// Contact action to run
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Manage site settings
    Settings {
        /// Settings action to run
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Edit rich-text documents
    Edit {
        /// Edit action to run
        #[command(subcommand)]
        action: EditAction,
    },
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_hierarchical_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help with hierarchical subcommand display.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: folio <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");

        for subsub in sub.get_subcommands() {
            let subname = subsub.get_name();
            if subname == "help" {
                continue;
            }
            let subabout = subsub
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("    {subname:8} {subabout}");
        }
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn project_list_flags() {
        let cli = Cli::try_parse_from([
            "folio", "project", "list", "--page", "2", "--title", "rust", "--sort", "title:desc",
            "--json",
        ])
        .unwrap();
        let Commands::Project {
            action: ProjectAction::List(cmd),
        } = cli.command
        else {
            panic!("expected project list");
        };
        assert_eq!(cmd.page, 2);
        assert_eq!(cmd.title.as_deref(), Some("rust"));
        assert_eq!(cmd.sort, vec!["title:desc"]);
        assert!(cmd.output.json);
    }

    #[test]
    fn edit_search_all_requires_replace() {
        let result = Cli::try_parse_from(["folio", "edit", "search", "doc.json", "cat", "--all"]);
        assert!(result.is_err());
    }

    #[test]
    fn edit_search_replace_all_parses() {
        let cli = Cli::try_parse_from([
            "folio", "edit", "search", "doc.json", "cat", "-r", "dog", "--all",
        ])
        .unwrap();
        let Commands::Edit {
            action: EditAction::Search(cmd),
        } = cli.command
        else {
            panic!("expected edit search");
        };
        assert_eq!(cmd.term, "cat");
        assert_eq!(cmd.replace.as_deref(), Some("dog"));
        assert!(cmd.all);
        assert!(!cmd.regex);
    }
}
