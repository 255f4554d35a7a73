use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rivulet::prelude::*;
use rivulet::signal::Event;
use rivulet::ui::{ErrorAlertViewModel, UiConfig};

#[derive(Debug, Clone)]
struct UnknownWord(String);

const DICTIONARY: [&str; 4] = ["signal", "stream", "observer", "operator"];

/// Pretends to look a word up somewhere slow
fn lookup(word: String) -> BoxStream<'static, Result<String, UnknownWord>> {
    if DICTIONARY.contains(&word.as_str()) {
        stream::iter(vec![Ok(word)]).boxed()
    } else {
        stream::iter(vec![Err(UnknownWord(word))]).boxed()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = UiConfig::default();
    let (observer, queries) = rivulet::signal::pipe::<String, NoError>();

    let producer = tokio::spawn(async move {
        for word in ["signal", "sink", "stream", "operator", "pipe"] {
            observer.send_value(word.to_string())?;
        }
        observer.send_completed()
    });

    // failed lookups come out as values, so one unknown word does not end the search
    let lookups = queries.flat_map(|query| match query {
        Ok(word) => lookup(word).into_results().boxed(),
        Err(never) => match never {},
    });

    let mut found = Vec::new();
    for event in rivulet::signal::collect_events(lookups).await {
        match event {
            Event::Value(Ok(word)) => {
                tracing::info!("Found {word}");
                found.push(word);
            }
            Event::Value(Err(UnknownWord(word))) => {
                let alert = ErrorAlertViewModel::new(
                    "Unknown word",
                    format!("{word} is not in the dictionary"),
                    &config,
                );
                tracing::warn!("{:?}", alert);
            }
            Event::Failed(never) => match never {},
            Event::Completed => tracing::info!("Lookups completed"),
        }
    }
    producer.await??;

    for (len, words) in found.grouped_by(String::len) {
        tracing::info!("{len} letters: {}", words.join(", "));
    }
    Ok(())
}
