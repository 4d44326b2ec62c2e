use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::dispatch::PendingSummaries;

/// Outcome of one chunk task, empty when the task failed or ran out of time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialResult {
    pub index: usize,
    pub text: String,
}

/// Wait for every chunk task under one shared deadline
///
/// Results are returned in chunk order with exactly one entry per chunk.
/// Tasks still running at the deadline are cancelled and their positions left
/// empty, as are positions whose task panicked or was aborted.
pub async fn collect_partials(mut pending: PendingSummaries, timeout: Duration) -> Vec<PartialResult> {
    let deadline = Instant::now() + timeout;
    let mut slots: Vec<Option<String>> = vec![None; pending.total];

    loop {
        match tokio::time::timeout_at(deadline, pending.tasks.join_next()).await {
            Ok(Some(Ok((index, text)))) => {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(text);
                }
            }
            Ok(Some(Err(e))) => warn!("Chunk task did not complete: {}", e),
            Ok(None) => break,
            Err(_) => {
                warn!(
                    "Summary deadline of {:?} reached with {} chunk(s) outstanding, cancelling",
                    timeout,
                    pending.tasks.len()
                );
                pending.cancel.cancel();
                pending.tasks.abort_all();
                break;
            }
        }
    }

    let filled = slots.iter().filter(|slot| slot.is_some()).count();
    info!("Collected {}/{} chunk summaries", filled, slots.len());

    slots
        .into_iter()
        .enumerate()
        .map(|(index, text)| PartialResult {
            index,
            text: text.unwrap_or_default(),
        })
        .collect()
}

/// Join partial results with single spaces, keeping empty positions
pub fn join_partials(partials: &[PartialResult]) -> String {
    partials
        .iter()
        .map(|partial| partial.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collect all chunk summaries into the joined summary string
pub async fn collect(pending: PendingSummaries, timeout: Duration) -> String {
    join_partials(&collect_partials(pending, timeout).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::split_text;
    use crate::dispatch::dispatch;
    use crate::testing::{Reply, ScriptedClient};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_order_preserved_under_reverse_completion() {
        // Chunk i finishes after (5 - i) * 10ms, so completion order is reversed
        let mut client = ScriptedClient::new();
        let text: String = (0..5).map(|i| format!("<{}>", i)).collect();
        for i in 0..5u64 {
            client = client.on(
                &format!("<{}>", i),
                Reply::delayed(&format!("S{}", i), Duration::from_millis((5 - i) * 10)),
            );
        }
        let chunks = split_text(&text, 3).unwrap();
        assert_eq!(chunks.len(), 5);

        let pending = dispatch(Arc::new(client), "m", chunks, 100);
        let joined = collect(pending, Duration::from_secs(1)).await;
        assert_eq!(joined, "S0 S1 S2 S3 S4");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_degrades_to_empty_position() {
        let client = Arc::new(
            ScriptedClient::new()
                .on("aaa", Reply::text("A"))
                .on("bbb", Reply::Hang)
                .on("ccc", Reply::delayed("C", Duration::from_millis(50))),
        );
        let chunks = split_text("aaabbbccc", 3).unwrap();
        let timeout = Duration::from_millis(500);

        let started = Instant::now();
        let pending = dispatch(client.clone(), "m", chunks, 100);
        let partials = collect_partials(pending, timeout).await;
        let elapsed = started.elapsed();

        assert_eq!(
            partials,
            vec![
                PartialResult { index: 0, text: "A".to_string() },
                PartialResult { index: 1, text: String::new() },
                PartialResult { index: 2, text: "C".to_string() },
            ]
        );
        assert_eq!(join_partials(&partials), "A  C");
        // one shared window, not one per chunk
        assert!(elapsed >= timeout);
        assert!(elapsed < timeout * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_many_hung_chunks_share_one_deadline() {
        let client = Arc::new(ScriptedClient::new().on("x", Reply::Hang));
        let chunks = split_text(&"x".repeat(10), 1).unwrap();
        let timeout = Duration::from_millis(300);

        let started = Instant::now();
        let pending = dispatch(client, "m", chunks, 100);
        let joined = collect(pending, timeout).await;

        assert_eq!(joined, " ".repeat(9));
        assert!(started.elapsed() < timeout * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_cancels_outstanding_tasks() {
        let client = Arc::new(ScriptedClient::new().on("bbb", Reply::Hang));
        let chunks = split_text("aaabbb", 3).unwrap();

        let pending = dispatch(client.clone(), "m", chunks, 100);
        let token = pending.cancellation_token();
        let joined = collect(pending, Duration::from_millis(100)).await;

        assert_eq!(joined, "ok ");
        assert!(token.is_cancelled());

        // let the cancelled task unwind
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(client.abandoned(), 1);
    }

    #[tokio::test]
    async fn test_failure_isolation() {
        let client = Arc::new(
            ScriptedClient::new()
                .on("aaa", Reply::text("A"))
                .on("bbb", Reply::Fail)
                .on("ccc", Reply::text("C")),
        );
        let chunks = split_text("aaabbbccc", 3).unwrap();

        let joined = collect(dispatch(client, "m", chunks, 100), Duration::from_secs(5)).await;
        assert_eq!(joined, "A  C");
    }

    #[tokio::test]
    async fn test_panicking_task_leaves_empty_position() {
        let client = Arc::new(
            ScriptedClient::new()
                .on("aaa", Reply::Panic)
                .on("bbb", Reply::text("B")),
        );
        let chunks = split_text("aaabbb", 3).unwrap();

        let partials = collect_partials(dispatch(client, "m", chunks, 100), Duration::from_secs(5)).await;
        assert_eq!(partials.len(), 2);
        assert_eq!(partials[0].text, "");
        assert_eq!(partials[1].text, "B");
    }

    #[tokio::test]
    async fn test_nothing_to_collect() {
        let pending = dispatch(Arc::new(ScriptedClient::new()), "m", Vec::new(), 100);
        assert_eq!(collect(pending, Duration::from_secs(1)).await, "");
    }
}
