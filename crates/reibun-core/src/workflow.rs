use crate::catalog::{MessageCatalog, MessageKey};
use crate::ports::{EditContext, ExampleSource, Prompter};
use crate::types::{
    DestinationFields, ExampleQuery, FetchOutcome, SentenceExample, TargetLanguage,
};

/// Where the user backed out of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelStage {
    LanguageChoice,
    ExampleChoice,
}

/// Terminal state of one selection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The picked example was written into both destination fields
    Committed(SentenceExample),
    NoFieldSelected,
    Cancelled(CancelStage),
    NotFound { word: String },
    ServiceUnreachable { reason: String },
    MissingField { field: String },
}

/// Run one selection flow: prompt for a translation language, fetch
/// examples for the focused field's word, prompt for a pick and commit it
/// into the two destination fields. User facing reporting happens through
/// the prompter; the returned outcome is for the host. The error arm is
/// reserved for host-side persist/reload failures.
pub async fn run(
    ctx: &mut dyn EditContext,
    prompter: &dyn Prompter,
    source: &dyn ExampleSource,
    catalog: &dyn MessageCatalog,
    destinations: &DestinationFields,
) -> anyhow::Result<WorkflowOutcome> {
    let word = match ctx.focused_text() {
        Some(text) if !text.is_empty() => text,
        _ => {
            prompter
                .notify(&catalog.text(MessageKey::SelectFieldToUse))
                .await;
            return Ok(WorkflowOutcome::NoFieldSelected);
        }
    };

    let labels: Vec<String> = TargetLanguage::ALL
        .iter()
        .map(|language| language.label().to_string())
        .collect();
    let language = match prompter
        .choose(&catalog.text(MessageKey::SelectTranslationLanguage), &labels, 0)
        .await
        .and_then(|row| TargetLanguage::ALL.get(row).copied())
    {
        Some(language) => language,
        None => return Ok(WorkflowOutcome::Cancelled(CancelStage::LanguageChoice)),
    };

    let Some(query) = ExampleQuery::new(word, language) else {
        // Empty text was already rejected before the language prompt
        return Ok(WorkflowOutcome::NoFieldSelected);
    };

    let examples = match source.fetch(&query).await {
        FetchOutcome::Found(examples) => examples,
        FetchOutcome::NotFound { word } => {
            prompter
                .notify(&catalog.text_with(MessageKey::ExampleNotFound, "word", &word))
                .await;
            return Ok(WorkflowOutcome::NotFound { word });
        }
        FetchOutcome::ServiceError(reason) => {
            tracing::warn!("example fetch failed: {reason}");
            prompter
                .notify(&catalog.text(MessageKey::ServiceUnreachable))
                .await;
            return Ok(WorkflowOutcome::ServiceUnreachable { reason });
        }
    };

    let choices: Vec<String> = examples.iter().map(SentenceExample::display_line).collect();
    let example = match prompter
        .choose(&catalog.text(MessageKey::SelectSentence), &choices, 0)
        .await
        .and_then(|row| examples.get(row))
    {
        Some(example) => example.clone(),
        None => {
            prompter
                .notify(&catalog.text(MessageKey::NoExampleSelected))
                .await;
            return Ok(WorkflowOutcome::Cancelled(CancelStage::ExampleChoice));
        }
    };

    // Both destinations must resolve before anything is written
    let names = ctx.record().field_names();
    let Some(japanese_index) = position(&names, &destinations.japanese) else {
        return missing_field(prompter, catalog, &destinations.japanese).await;
    };
    let Some(translation_index) = position(&names, &destinations.translation) else {
        return missing_field(prompter, catalog, &destinations.translation).await;
    };

    let record = ctx.record();
    record.set_field(japanese_index, example.japanese().to_string());
    record.set_field(translation_index, example.translation().to_string());
    if record.is_persisted() {
        record.persist().await?;
    }
    ctx.reload().await?;

    tracing::debug!("example committed for '{}'", query.word());
    Ok(WorkflowOutcome::Committed(example))
}

fn position(names: &[String], field: &str) -> Option<usize> {
    names.iter().position(|name| name == field)
}

async fn missing_field(
    prompter: &dyn Prompter,
    catalog: &dyn MessageCatalog,
    field: &str,
) -> anyhow::Result<WorkflowOutcome> {
    prompter
        .notify(&catalog.text_with(MessageKey::FieldNotFound, "field", field))
        .await;
    Ok(WorkflowOutcome::MissingField {
        field: field.to_string(),
    })
}
