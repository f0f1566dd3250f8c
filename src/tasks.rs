//! Async task management for non-blocking catalog fetches.
//!
//! Fetches run on background tokio tasks so the UI stays responsive.
//! Results come back to the main event loop over an unbounded channel:
//! 1. The app records a pending `PageRequest` when the page changes
//! 2. The main loop takes it and hands it to `TaskSpawner`
//! 3. The spawned task fetches the page and sends an `ApiMessage`
//! 4. The main loop polls the channel with `try_recv()` and passes the
//!    message to the app, which drops it if the request is stale

use tokio::sync::mpsc;
use tracing::{debug, error, Instrument};

use crate::api::{ArtworkPage, CatalogClient};
use crate::error::AppError;
use crate::page::PageRequest;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// A page fetch finished.
    PageFetched {
        request: PageRequest,
        result: Result<ArtworkPage, String>,
    },
}

/// Spawns background tasks for catalog operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task to fetch the page described by `request`.
    pub fn spawn_fetch_page(&self, client: &CatalogClient, request: PageRequest) {
        let tx = self.tx.clone();
        let client = client.clone();
        let span = tracing::info_span!(
            "fetch_page",
            generation = request.generation,
            page = request.page
        );
        tokio::spawn(
            async move {
                let result = client
                    .fetch_artworks(request.page, request.size)
                    .await
                    .map_err(|e| {
                        error!("Error fetching data: {}", e);
                        AppError::from(e).user_message()
                    });
                if tx.send(ApiMessage::PageFetched { request, result }).is_err() {
                    debug!("Event loop gone, dropping fetch result");
                }
            }
            .instrument(span),
        );
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
