//! Trellis CLI - inspect and edit node-tree documents.
//!
//! Stands in for the visual editor panes: `tree` is the hierarchy view,
//! `inspect` is the property inspector, `set` is an inspector edit.
//! Documents are JSON; without `--file` the built-in sample document is
//! used.

mod logger;
mod outline;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use node::{fixtures, Node};
use node_tree::{compute_component_labels, find_node_by_id, node_to_style, update_node_by_id};
use schemars::schema_for;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Trellis - node-tree document editor
#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Inspect and edit trellis node-tree documents")]
struct Cli {
    /// Document to operate on (JSON). Defaults to the built-in sample.
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node hierarchy with component badges
    Tree {
        /// Hide component badges
        #[arg(long)]
        no_labels: bool,
    },

    /// Print a node's attributes and computed style
    Inspect {
        /// Node id to inspect
        id: String,
    },

    /// Set a property on a node and print the updated document
    Set {
        /// Node id to edit
        id: String,
        /// Property key (kebab-case, e.g. border-radius)
        key: String,
        /// Property value
        value: String,
        /// Remove this property before setting the new one
        #[arg(long)]
        replace: Option<String>,
    },

    /// Print the JSON schema of the document format
    Schema,
}

fn main() -> Result<()> {
    logger::init().context("Failed to initialize logging")?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { no_labels } => {
            let doc = load_document(cli.file.as_deref())?;
            print_tree(&doc, !no_labels)
        }
        Commands::Inspect { id } => {
            let doc = load_document(cli.file.as_deref())?;
            inspect(&doc, &id)
        }
        Commands::Set {
            id,
            key,
            value,
            replace,
        } => {
            let doc = load_document(cli.file.as_deref())?;
            set_property(&doc, &id, &key, &value, replace.as_deref())
        }
        Commands::Schema => print_schema(),
    }
}

/// Load a document from disk, or fall back to the sample document.
fn load_document(path: Option<&Path>) -> Result<Vec<Rc<Node>>> {
    match path {
        Some(path) => {
            log::debug!("loading document from {}", path.display());
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid document in {}", path.display()))
        }
        None => {
            log::debug!("no --file given, using the sample document");
            Ok(fixtures::sample_document())
        }
    }
}

fn print_tree(doc: &[Rc<Node>], with_labels: bool) -> Result<()> {
    let labels = with_labels.then(|| compute_component_labels(doc));
    print!("{}", outline::render_outline(doc, labels.as_ref()));
    Ok(())
}

fn inspect(doc: &[Rc<Node>], id: &str) -> Result<()> {
    let Some(found) = find_node_by_id(doc, id) else {
        bail!("No node with id {id:?} in document");
    };

    println!("{}", serde_json::to_string_pretty(found)?);
    println!();
    println!("computed style:");
    println!("{}", serde_json::to_string_pretty(&node_to_style(found))?);
    Ok(())
}

fn set_property(
    doc: &[Rc<Node>],
    id: &str,
    key: &str,
    value: &str,
    replace: Option<&str>,
) -> Result<()> {
    if find_node_by_id(doc, id).is_none() {
        bail!("No node with id {id:?} in document");
    }

    let updated = update_node_by_id(doc, id, |mut draft| {
        if let Some(old_key) = replace {
            draft.clear_attr(old_key);
        }
        draft.set_attr(key, value);
        draft
    });
    log::debug!("set {key}={value} on node {id}");

    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}

fn print_schema() -> Result<()> {
    let schema = schema_for!(Node);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
