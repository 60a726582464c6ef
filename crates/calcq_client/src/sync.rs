use std::sync::atomic::{AtomicU64, Ordering};

use futures::{future, stream, Stream, StreamExt};

use crate::config::RefreshOrdering;
use crate::error::ClientError;
use crate::render::render_expressions;
use crate::traits::{ExpressionApi, ExpressionView};

/// What a successful list refresh did to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced with this many records.
    Rendered(usize),
    /// A newer refresh had already rendered, so this one was dropped.
    /// Only happens with [`RefreshOrdering::LatestIssued`].
    Discarded,
}

/// The client sync loop.
///
/// Ties a transport to a view: submissions go out through the transport,
/// and every list refresh replaces what the view shows. `ExpressionSync`
/// holds no copy of the records itself; the view always reflects the latest
/// accepted snapshot.
///
/// All methods take `&self`, so one instance can run the poll loop while
/// the same instance handles submissions.
///
/// # Example
///
/// ```rust,ignore
/// let transport = HttpTransport::new(base_url);
/// let sync = ExpressionSync::new(transport, view, RefreshOrdering::LastCompleted);
///
/// // On form submission
/// sync.submit().await?;
///
/// // For the lifetime of the view
/// sync.run_polling(interval_ticks(Duration::from_secs(3))).await;
/// ```
pub struct ExpressionSync<A, V> {
    api: A,
    view: V,
    ordering: RefreshOrdering,
    /// Sequence number of the most recently started refresh
    issued: AtomicU64,
    /// Highest sequence number that reached the view
    rendered: AtomicU64,
}

impl<A, V> ExpressionSync<A, V>
where
    A: ExpressionApi,
    V: ExpressionView,
{
    pub fn new(api: A, view: V, ordering: RefreshOrdering) -> Self {
        Self {
            api,
            view,
            ordering,
            issued: AtomicU64::new(0),
            rendered: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn ordering(&self) -> RefreshOrdering {
        self.ordering
    }

    /// Send the current input to the service.
    ///
    /// On success the input is cleared and the list is refreshed right away.
    /// On failure the user is notified once and the input is left as it was.
    pub async fn submit(&self) -> Result<(), ClientError> {
        let expression = self.view.input_value();
        log::info!(
            "[ExpressionSync::submit] Submitting expression ({} bytes)",
            expression.len()
        );

        if let Err(e) = self.api.create_expression(&expression).await {
            log::warn!("[ExpressionSync::submit] Submission failed: {}", e);
            self.view.notify(&e.to_string());
            return Err(e);
        }

        self.view.clear_input();
        // Refresh failures are logged inside refresh() and never reach the user.
        let _ = self.refresh().await;
        Ok(())
    }

    /// Fetch the full collection and replace the rendered list.
    ///
    /// Errors are logged and returned, but the view is left untouched so the
    /// last good list stays on screen.
    pub async fn refresh(&self) -> Result<RefreshOutcome, ClientError> {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let records = match self.api.list_expressions().await {
            Ok(records) => records,
            Err(e) => {
                log::error!("[ExpressionSync::refresh] Failed to load expressions: {}", e);
                return Err(e);
            }
        };

        if !self.claim_render(sequence) {
            log::debug!(
                "[ExpressionSync::refresh] Dropping refresh #{} in favour of a newer one",
                sequence
            );
            return Ok(RefreshOutcome::Discarded);
        }

        self.view.render(render_expressions(&records));
        Ok(RefreshOutcome::Rendered(records.len()))
    }

    /// Refresh once immediately, then once per tick, until `ticks` ends.
    ///
    /// A tick never waits for earlier refreshes to finish; slow responses
    /// simply overlap. Failed refreshes do not slow down or stop the loop.
    pub async fn run_polling<S>(&self, ticks: S)
    where
        S: Stream<Item = ()>,
    {
        stream::once(future::ready(()))
            .chain(ticks)
            .for_each_concurrent(None, |()| async move {
                let _ = self.refresh().await;
            })
            .await;
    }

    fn claim_render(&self, sequence: u64) -> bool {
        let newest = self.rendered.fetch_max(sequence, Ordering::SeqCst);
        match self.ordering {
            RefreshOrdering::LastCompleted => true,
            RefreshOrdering::LatestIssued => newest < sequence,
        }
    }
}
