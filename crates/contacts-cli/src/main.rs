//! contacts CLI — sequentially numbered contact notes
//!
//! Commands: init, new, next, list, template, completions

mod config;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use contacts_core::{select_template, ContactsSettings, TemplateKind};
use contacts_vault::{
    ContactCreator, EditorWorkspace, FsVault, NullWorkspace, StderrNotifier, Workspace,
};

#[derive(Parser)]
#[command(name = "contacts")]
#[command(version)]
#[command(about = "Create sequentially numbered contact notes in a markdown vault")]
struct Cli {
    /// Vault root directory
    #[arg(long, global = true, env = "CONTACTS_VAULT", default_value = ".")]
    vault: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Write a default config and create the contacts folder
    Init,
    /// Create a new contact note and open it
    #[command(alias = "n")]
    New {
        /// Template kind: custom, frontmatter or default
        #[arg(long, short)]
        template: Option<String>,
        /// Vault-relative folder (overrides config)
        #[arg(long, short)]
        folder: Option<String>,
        /// Create the note without opening an editor
        #[arg(long)]
        no_open: bool,
    },
    /// Print the name the next contact note would get
    Next {
        #[arg(long, short)]
        folder: Option<String>,
    },
    /// List files in the contacts folder
    #[command(alias = "ls")]
    List {
        #[arg(long, short)]
        folder: Option<String>,
    },
    /// Print the body a template kind produces
    Template {
        /// Template kind: custom, frontmatter or default
        kind: String,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_vault(root: &Path) -> anyhow::Result<FsVault> {
    FsVault::open(root).with_context(|| format!("opening vault {}", root.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init) => cmd_init(&cli.vault),
        Some(Commands::New {
            template,
            folder,
            no_open,
        }) => cmd_new(&cli.vault, template.as_deref(), folder, no_open).await,
        Some(Commands::Next { folder }) => cmd_next(&cli.vault, folder),
        Some(Commands::List { folder }) => cmd_list(&cli.vault, folder),
        Some(Commands::Template { kind }) => cmd_template(&cli.vault, &kind),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "contacts", &mut io::stdout());
            Ok(())
        }
        None => {
            println!("contacts v{}", env!("CARGO_PKG_VERSION"));
            println!("Run `contacts --help` for usage.");
            Ok(())
        }
    }
}

fn cmd_init(root: &Path) -> anyhow::Result<()> {
    let vault = open_vault(root)?;
    let written = config::init_settings(root)?;
    let settings = config::load_settings(root)?;
    let folder = vault.absolute(&settings.folder)?;
    std::fs::create_dir_all(&folder)
        .with_context(|| format!("creating {}", folder.display()))?;
    if written {
        println!("Initialized contacts in {}", root.display());
    } else {
        println!("Config already exists at {}", config::config_path(root).display());
    }
    Ok(())
}

async fn cmd_new(
    root: &Path,
    template: Option<&str>,
    folder: Option<String>,
    no_open: bool,
) -> anyhow::Result<()> {
    let vault = open_vault(root)?;
    let settings = config::load_settings(root)?;
    let folder = folder.unwrap_or_else(|| settings.folder.clone());
    let kind = template.map_or(settings.template, TemplateKind::parse);

    let workspace: Box<dyn Workspace> = if no_open {
        Box::new(NullWorkspace)
    } else {
        Box::new(EditorWorkspace::new(vault.clone(), settings.editor.as_deref())?)
    };
    let notifier = StderrNotifier;
    let creator = ContactCreator::new(&vault, workspace.as_ref(), &notifier);

    let created = creator
        .create_contact(&folder, kind, &settings.custom_template)
        .await
        .context("creating contact note")?;

    let output = match created {
        Some(note) => serde_json::json!({
            "created": true,
            "path": note.path,
            "template": kind.as_str(),
        }),
        None => serde_json::json!({
            "created": false,
            "folder": folder,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn folder_or_default(root: &Path, folder: Option<String>) -> anyhow::Result<String> {
    match folder {
        Some(folder) => Ok(folder),
        None => Ok(config::load_settings(root)?.folder),
    }
}

fn cmd_next(root: &Path, folder: Option<String>) -> anyhow::Result<()> {
    let vault = open_vault(root)?;
    let folder = folder_or_default(root, folder)?;
    let notifier = StderrNotifier;
    let creator = ContactCreator::new(&vault, &NullWorkspace, &notifier);
    let next = creator.next_number_in(&folder)?;
    println!("{}", next.note_name());
    Ok(())
}

fn cmd_list(root: &Path, folder: Option<String>) -> anyhow::Result<()> {
    let vault = open_vault(root)?;
    let folder = folder_or_default(root, folder)?;
    let files = vault.find_contact_files(&folder)?;
    let json: Vec<serde_json::Value> = files
        .iter()
        .map(|entry| {
            serde_json::json!({
                "path": entry.path(),
                "name": entry.basename(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn cmd_template(root: &Path, kind: &str) -> anyhow::Result<()> {
    let kind = TemplateKind::parse(kind);
    let settings = if kind == TemplateKind::Custom {
        config::load_settings(root)?
    } else {
        ContactsSettings::default()
    };
    println!("{}", select_template(kind, &settings.custom_template));
    Ok(())
}
