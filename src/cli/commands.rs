use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::output::{render_listing, render_status};
use crate::cli::{Cli, Command, CreateArgs, UpdateArgs};
use crate::config::{Config, ConfigError};
use crate::form::{FormIntent, FormReducer, FormState};
use crate::error::StoreError;
use crate::listing::{Draft, Field, ListingForm, Record, RecordId};
use crate::mvi::Reducer;
use crate::remote::ResourceClient;
use crate::search::{filter_by_name, SearchDebouncer};
use crate::store::CollectionStore;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let client = ResourceClient::new(config.endpoint()?, &config.remote)
        .context("Failed to build HTTP client")?;
    tracing::debug!(endpoint = %client.endpoint().collection(), "Using remote collection");
    let store = CollectionStore::new(client);

    match cli.command {
        Command::List { search, json } => list(&store, search.as_deref(), json).await,
        Command::Create(args) => create(&store, &args).await,
        Command::Update(args) => update(&store, &args).await,
        Command::Delete { id, yes } => delete(&store, &RecordId::from(id), yes).await,
        Command::Browse => {
            browse(&store, Duration::from_millis(config.search.debounce_ms)).await
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::read_from(&path)?;
    if let Some(base_url) = &cli.base_url {
        config.remote.base_url = base_url.clone();
    }
    if let Some(resource) = &cli.resource {
        config.remote.resource = resource.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn list(store: &CollectionStore, search: Option<&str>, json: bool) -> anyhow::Result<()> {
    let items = store.list().await?;
    let shown = filter_by_name(&items, search.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        print_listings(&shown);
    }
    Ok(())
}

async fn create(store: &CollectionStore, args: &CreateArgs) -> anyhow::Result<()> {
    let (state, draft) = submit_form(ListingForm::default(), &args.changes())?;
    let record = finish_form(state, store.create_draft(&draft).await)?;
    println!("Created:\n{}", render_listing(&record));
    Ok(())
}

async fn update(store: &CollectionStore, args: &UpdateArgs) -> anyhow::Result<()> {
    let id = RecordId::from(args.id.clone());

    // PUT replaces the whole record, so start from the current values.
    store.list().await?;
    let base = match store.snapshot().find(&id) {
        Some(record) => ListingForm::from(record),
        None => {
            eprintln!("Listing {} not found; every field must be given", id);
            ListingForm::default()
        }
    };

    let (state, draft) = submit_form(base, &args.changes())?;
    let record = finish_form(state, store.update_draft(&id, draft).await)?;
    println!("Updated:\n{}", render_listing(&record));
    Ok(())
}

async fn delete(store: &CollectionStore, id: &RecordId, yes: bool) -> anyhow::Result<()> {
    if !yes && !confirm(&format!("Delete listing {}? [y/N] ", id)).await? {
        println!("Cancelled.");
        return Ok(());
    }
    store.delete(id).await?;
    println!("Deleted listing {}", id);
    Ok(())
}

async fn browse(store: &CollectionStore, delay: Duration) -> anyhow::Result<()> {
    let loaded = store.list().await;
    println!("{}", render_status(&store.snapshot()));
    let items = loaded?;
    print_listings(&filter_by_name(&items, ""));
    println!("-- type to search, Ctrl-D to quit");

    let (input, mut settled) = SearchDebouncer::spawn(delay);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if !input.push(line) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(error = %err, "Stopped reading search input");
                    break;
                }
            }
        }
    });

    while let Some(query) = settled.recv().await {
        let snapshot = store.snapshot();
        let matches = filter_by_name(&snapshot.items, &query);
        println!("-- {} match(es) for '{}'", matches.len(), query.trim());
        print_listings(&matches);
    }

    reader.await.context("stdin reader stopped unexpectedly")?;
    Ok(())
}

/// Runs the edits through the form reducer and submits.
///
/// Field errors are printed one per line before failing. On success the
/// form is left `submitting` with its validated draft.
fn submit_form(
    base: ListingForm,
    changes: &[(Field, String)],
) -> anyhow::Result<(FormState, Draft)> {
    let mut state = FormReducer::reduce(FormState::default(), FormIntent::Load { form: base });
    for (field, value) in changes {
        state = FormReducer::reduce(
            state,
            FormIntent::Change {
                field: *field,
                value: value.clone(),
            },
        );
    }
    state = FormReducer::reduce(state, FormIntent::Submit);

    match state.pending.clone() {
        Some(draft) => Ok((state, draft)),
        None => {
            for error in &state.errors {
                eprintln!("  {}", error);
            }
            anyhow::bail!("listing has {} invalid field(s)", state.errors.len())
        }
    }
}

/// Settles a submitted form with the store's answer.
fn finish_form<T>(state: FormState, result: Result<T, StoreError>) -> anyhow::Result<T> {
    let error = result.as_ref().err().map(ToString::to_string);
    let state = FormReducer::reduce(state, FormIntent::Finished { error });

    match state.last_failure {
        Some(message) => anyhow::bail!("Submit failed: {}", message),
        None => Ok(result?),
    }
}

fn print_listings(records: &[&Record]) {
    if records.is_empty() {
        println!("No listings.");
        return;
    }
    for record in records {
        println!("{}", render_listing(record));
    }
}

async fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Vec<(Field, String)> {
        vec![
            (Field::Name, "Honda Wave".into()),
            (Field::Color, "Red".into()),
            (Field::Price, "18500000".into()),
            (Field::Description, "test".into()),
            (Field::ImageUrl, "https://x/y.jpg".into()),
        ]
    }

    #[test]
    fn submit_form_hands_out_pending_draft() {
        let (state, draft) = submit_form(ListingForm::default(), &filled()).unwrap();
        assert!(state.submitting);
        assert_eq!(state.pending.as_ref(), Some(&draft));
        assert_eq!(draft.price, 18_500_000.0);
    }

    #[test]
    fn submit_form_rejects_invalid_fields() {
        let err = submit_form(ListingForm::default(), &[]).unwrap_err();
        assert_eq!(err.to_string(), "listing has 5 invalid field(s)");
    }

    #[test]
    fn finish_form_reports_store_failure() {
        let (state, _) = submit_form(ListingForm::default(), &filled()).unwrap();
        let failure = StoreError::Response {
            url: "http://h/listings".into(),
            status: 500,
        };

        let err = finish_form::<()>(state, Err(failure)).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Submit failed: Remote responded with HTTP 500 for 'http://h/listings'"
        );
    }

    #[test]
    fn finish_form_passes_success_through() {
        let (state, _) = submit_form(ListingForm::default(), &filled()).unwrap();
        assert_eq!(finish_form(state, Ok(7)).unwrap(), 7);
    }
}
