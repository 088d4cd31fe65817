use crate::output::{print_json, print_table};
use anyhow::{anyhow, Result};
use cardlink_core::{Action, ActionKind, BusinessCard, CardId};
use clap::Subcommand;
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand definition
// ---------------------------------------------------------------------------

#[derive(Subcommand, Debug)]
pub enum CardSubcommand {
    /// Create a new business card
    Create {
        /// Display name of the card owner
        #[arg(long)]
        name: String,
    },
    /// List all cards
    List,
    /// Show one card in full
    Show { id: String },
    /// Append an action to a card's lead-capture sequence
    AddAction {
        id: String,
        /// Action kind: website, form, or download
        #[arg(long)]
        kind: String,
        /// Target URL (website and download actions)
        #[arg(long)]
        url: Option<String>,
        /// File location (download actions; falls back to --url)
        #[arg(long)]
        file: Option<String>,
        /// 1-based execution position (defaults to list position)
        #[arg(long)]
        order: Option<u32>,
        /// Store the action disabled
        #[arg(long)]
        inactive: bool,
    },
    /// Remove an action from a card
    RemoveAction { id: String, action_id: u32 },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcommand: CardSubcommand, json: bool) -> Result<()> {
    match subcommand {
        CardSubcommand::Create { name } => run_create(root, &name, json),
        CardSubcommand::List => run_list(root, json),
        CardSubcommand::Show { id } => run_show(root, &id, json),
        CardSubcommand::AddAction {
            id,
            kind,
            url,
            file,
            order,
            inactive,
        } => run_add_action(root, &id, &kind, url, file, order, inactive, json),
        CardSubcommand::RemoveAction { id, action_id } => {
            run_remove_action(root, &id, action_id, json)
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run_create(root: &Path, name: &str, json: bool) -> Result<()> {
    let card = BusinessCard::create(root, name)?;
    if json {
        print_json(&card)?;
    } else {
        println!("Created card {} ({})", card.id, card.name);
    }
    Ok(())
}

fn run_list(root: &Path, json: bool) -> Result<()> {
    let cards = BusinessCard::list(root)?;
    if json {
        print_json(&cards)?;
        return Ok(());
    }
    let rows: Vec<Vec<String>> = cards
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.card_config.actions.len().to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "ACTIONS"], rows);
    Ok(())
}

fn run_show(root: &Path, id: &str, json: bool) -> Result<()> {
    let id = CardId::parse(id)?;
    let card = BusinessCard::load(root, &id)?;
    if json {
        print_json(&card)?;
        return Ok(());
    }
    println!("{}  {}", card.id, card.name);
    let rows: Vec<Vec<String>> = card
        .card_config
        .actions
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.kind.to_string(),
                a.order.map(|o| o.to_string()).unwrap_or_default(),
                if a.active { "yes" } else { "no" }.to_string(),
                a.url.clone().or_else(|| a.file.clone()).unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["ID", "KIND", "ORDER", "ACTIVE", "TARGET"], rows);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_add_action(
    root: &Path,
    id: &str,
    kind: &str,
    url: Option<String>,
    file: Option<String>,
    order: Option<u32>,
    inactive: bool,
    json: bool,
) -> Result<()> {
    let kind = ActionKind::from(kind.to_string());
    if matches!(kind, ActionKind::Unknown(_)) {
        return Err(anyhow!(
            "unknown action kind '{kind}': expected website, form, or download"
        ));
    }

    let id = CardId::parse(id)?;
    let mut card = BusinessCard::load(root, &id)?;
    let action_id = card.add_action(Action {
        id: 0,
        kind,
        url,
        file,
        order,
        active: !inactive,
        delay: None,
    });
    card.save(root)?;

    if json {
        print_json(&serde_json::json!({ "actionId": action_id }))?;
    } else {
        println!("Added action {action_id} to {id}");
    }
    Ok(())
}

fn run_remove_action(root: &Path, id: &str, action_id: u32, json: bool) -> Result<()> {
    let id = CardId::parse(id)?;
    let mut card = BusinessCard::load(root, &id)?;
    card.remove_action(action_id)?;
    card.save(root)?;

    if json {
        print_json(&serde_json::json!({ "removed": action_id }))?;
    } else {
        println!("Removed action {action_id} from {id}");
    }
    Ok(())
}
