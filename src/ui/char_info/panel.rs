//! Fetch lifecycle for the character info panel.
//!
//! The panel owns the `CharacterService` (built once, reused for every
//! refresh) and the MVI state. Fetches run as tokio tasks; their outcomes
//! come back as intents over a channel and are applied on the UI thread by
//! `poll` or `next_completion`.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::StalePolicy;
use crate::marvel::CharacterService;
use crate::ui::mvi::Reducer;

use super::intent::{CharInfoIntent, RequestId};
use super::reducer::CharInfoReducer;
use super::state::CharInfoState;

pub struct CharInfoPanel {
    service: Arc<dyn CharacterService>,
    runtime: Handle,
    character_id: Option<u32>,
    mounted: bool,
    state: CharInfoState,
    last_request: RequestId,
    completions_tx: mpsc::UnboundedSender<CharInfoIntent>,
    completions_rx: mpsc::UnboundedReceiver<CharInfoIntent>,
}

impl CharInfoPanel {
    pub fn new(
        service: Arc<dyn CharacterService>,
        runtime: Handle,
        stale_policy: StalePolicy,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            service,
            runtime,
            character_id: None,
            mounted: false,
            state: CharInfoState::new(stale_policy),
            last_request: 0,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &CharInfoState {
        &self.state
    }

    pub fn character_id(&self) -> Option<u32> {
        self.character_id
    }

    /// Number of fetches issued so far.
    pub fn requests_issued(&self) -> RequestId {
        self.last_request
    }

    /// Attach the panel to the host. Runs the first refresh cycle.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.refresh();
    }

    /// Change the input id. A new value on a mounted panel refreshes it.
    pub fn set_character_id(&mut self, id: Option<u32>) {
        if self.character_id == id {
            return;
        }
        self.character_id = id;
        if self.mounted {
            self.refresh();
        }
    }

    /// Run one refresh cycle for the current id.
    ///
    /// An absent id (`None` or `0`) is a no-op: nothing is requested and
    /// whatever the panel shows stays on screen. Superseded requests are not
    /// cancelled.
    pub fn refresh(&mut self) {
        let Some(id) = self.character_id.filter(|id| *id != 0) else {
            return;
        };

        self.last_request += 1;
        let request = self.last_request;
        self.dispatch(CharInfoIntent::Requested { request });
        tracing::trace!(character_id = id, request, "Issuing character request");

        let service = Arc::clone(&self.service);
        let tx = self.completions_tx.clone();
        self.runtime.spawn(async move {
            let intent = match service.fetch_by_id(id).await {
                Ok(record) => CharInfoIntent::Loaded {
                    request,
                    record: Arc::new(record),
                },
                Err(_) => CharInfoIntent::Failed { request },
            };
            if tx.send(intent).is_err() {
                tracing::trace!(request, "Panel dropped before fetch completed");
            }
        });
    }

    /// Apply every completion that has arrived. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.completions_rx.try_recv() {
            self.dispatch(intent);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it.
    pub async fn next_completion(&mut self) {
        if let Some(intent) = self.completions_rx.recv().await {
            self.dispatch(intent);
        }
    }

    /// Advance the spinner.
    pub fn on_tick(&mut self) {
        self.dispatch(CharInfoIntent::AnimationTick);
    }

    fn dispatch(&mut self, intent: CharInfoIntent) {
        self.state = CharInfoReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
