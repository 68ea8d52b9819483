use anyhow::{Context, Result};
use reibun_anki::{AnkiConnectClient, AnkiNote};
use reibun_config::Config;
use reibun_core::catalog::MessageCatalog;
use reibun_core::workflow::{self, WorkflowOutcome};
use reibun_tatoeba::TatoebaClient;

use crate::cli::InsertArgs;
use crate::prompt::TerminalPrompter;
use crate::session::EditorSession;

pub async fn handle_insert(
    config: &Config,
    catalog: &dyn MessageCatalog,
    args: InsertArgs,
) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("insert needs an interactive terminal");
    }

    let client = AnkiConnectClient::new(config.anki.url.clone());
    let version = client
        .check_connection()
        .await
        .context("AnkiConnect is not reachable, is Anki running?")?;
    tracing::info!("Connected to AnkiConnect (version {version})");

    let note = AnkiNote::load(client, args.note_id).await?;
    let focused = match &args.field {
        Some(name) => Some(
            note.position(name)
                .with_context(|| format!("Note has no field named '{name}'"))?,
        ),
        // The note's first field is the word field on common note types
        None => Some(0),
    };
    let mut session = EditorSession::new(note, focused);

    let source = TatoebaClient::new(config.tatoeba.url.clone());
    let prompter = TerminalPrompter::new();
    let destinations = config.fields.destinations();

    let outcome = workflow::run(&mut session, &prompter, &source, catalog, &destinations).await?;

    if let WorkflowOutcome::Committed(example) = outcome {
        tracing::info!("example committed to note {}", args.note_id);
        println!();
        println!("{}", example.display_line());
    }

    Ok(())
}
