use std::time::Duration;

use tokio::sync::mpsc;

/// Collapses bursts of query edits into the last one.
///
/// A query is emitted once no newer edit has arrived for `delay`. Dropping
/// the [`QueryInput`] flushes a pending query and then closes the output.
pub struct SearchDebouncer;

impl SearchDebouncer {
    /// Spawns the debounce task on the current tokio runtime.
    pub fn spawn(delay: Duration) -> (QueryInput, mpsc::UnboundedReceiver<String>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::unbounded_channel();
        tokio::spawn(debounce_loop(input_rx, output_tx, delay));
        (QueryInput { sender: input_tx }, output_rx)
    }
}

#[derive(Clone)]
pub struct QueryInput {
    sender: mpsc::UnboundedSender<String>,
}

impl QueryInput {
    /// Returns false once the debounce task has stopped.
    pub fn push(&self, query: impl Into<String>) -> bool {
        self.sender.send(query.into()).is_ok()
    }
}

async fn debounce_loop(
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<String>,
    delay: Duration,
) {
    let mut pending: Option<String> = None;

    loop {
        let Some(query) = pending.take() else {
            match input.recv().await {
                Some(query) => pending = Some(query),
                None => break,
            }
            continue;
        };

        let next = tokio::select! {
            next = input.recv() => Some(next),
            _ = tokio::time::sleep(delay) => None,
        };

        match next {
            Some(Some(newer)) => pending = Some(newer),
            Some(None) => {
                let _ = output.send(query);
                break;
            }
            None => {
                tracing::debug!(query = %query, "Search query settled");
                if output.send(query).is_err() {
                    break;
                }
            }
        }
    }
}
