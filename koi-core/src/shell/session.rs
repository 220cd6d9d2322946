//! Async driver that runs shell effects.

use std::fmt;

use tracing::{info, warn};

use crate::{
    export::{DEFAULT_EXPORT_NAME, ExportError, ExportOutcome, FileSink, export_rows},
    fetch::CatalogSource,
};

use super::{
    messages::{Effect, Message},
    state::AppState,
    update::update,
};

/// Drives an [`AppState`] by running the effects its updates request.
///
/// Fetches run to completion before `dispatch` returns, so a session never
/// has more than one search in flight.
pub struct Session<S, F> {
    state: AppState,
    source: S,
    sink: F,
    export_name: String,
    clipboard: Option<String>,
}

impl<S, F> fmt::Debug for Session<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("export_name", &self.export_name)
            .finish_non_exhaustive()
    }
}

impl<S, F> Session<S, F>
where
    S: CatalogSource,
    F: FileSink,
{
    /// Session over the initial explorer state.
    pub fn new(source: S, sink: F) -> Self {
        Self::with_state(AppState::new(), source, sink)
    }

    /// Session resuming from `state`.
    pub fn with_state(state: AppState, source: S, sink: F) -> Self {
        Self {
            state,
            source,
            sink,
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            clipboard: None,
        }
    }

    /// Base name for exported files (default `koi_data`).
    pub fn with_export_name(mut self, name: impl Into<String>) -> Self {
        self.export_name = name.into();
        self
    }

    /// Current explorer state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// File sink exports go to.
    pub fn sink(&self) -> &F {
        &self.sink
    }

    /// Last text copied with [`Message::CopyQuery`].
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Applies `message` and every follow-up message its effects produce.
    ///
    /// Fetch failures end up in the state as a user-facing message; only a
    /// failing file sink is reported to the caller.
    pub async fn dispatch(&mut self, message: Message) -> Result<(), ExportError> {
        let mut next = Some(message);

        while let Some(message) = next.take() {
            match update(&mut self.state, message) {
                Effect::None => {}
                Effect::Fetch(query) => {
                    let result = self.source.fetch(&query).await.map_err(|err| {
                        warn!(error = %err, kind = ?err.kind(), "catalog fetch failed");
                        err.user_message()
                    });
                    next = Some(Message::SearchCompleted(result));
                }
                Effect::Export(kind) => {
                    let outcome =
                        export_rows(&self.sink, self.state.results(), kind, &self.export_name)?;
                    if let ExportOutcome::Written { filename, bytes } = outcome {
                        info!(%kind, %filename, bytes, "export finished");
                    }
                }
                Effect::CopyQuery(query) => {
                    self.clipboard = Some(query);
                }
            }
        }

        Ok(())
    }
}
