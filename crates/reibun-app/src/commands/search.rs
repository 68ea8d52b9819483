use anyhow::Result;
use reibun_config::Config;
use reibun_core::catalog::{MessageCatalog, MessageKey};
use reibun_core::ports::ExampleSource;
use reibun_core::types::{ExampleQuery, FetchOutcome};
use reibun_tatoeba::TatoebaClient;

use crate::cli::SearchArgs;

pub async fn handle_search(
    config: &Config,
    catalog: &dyn MessageCatalog,
    args: SearchArgs,
) -> Result<()> {
    let Some(query) = ExampleQuery::new(args.word, args.language) else {
        anyhow::bail!("The word to search for is empty");
    };

    let client = TatoebaClient::new(config.tatoeba.url.clone());
    let outcome = client.fetch(&query).await;
    println!("{}", render(&outcome, catalog));
    Ok(())
}

/// One numbered block per example, reported outcomes as catalog text.
fn render(outcome: &FetchOutcome, catalog: &dyn MessageCatalog) -> String {
    match outcome {
        FetchOutcome::Found(examples) => {
            let mut lines = Vec::new();
            for (number, example) in examples.iter().enumerate() {
                lines.push(format!("{}) {}", number + 1, example.japanese()));
                lines.push(format!("   {}", example.translation()));
            }
            lines.join("\n")
        }
        FetchOutcome::NotFound { word } => {
            catalog.text_with(MessageKey::ExampleNotFound, "word", word)
        }
        FetchOutcome::ServiceError(_) => catalog.text(MessageKey::ServiceUnreachable),
    }
}
