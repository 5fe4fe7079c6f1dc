use std::sync::Arc;
use std::time::Duration;

use sharkdeal_api::{CheapSharkClient, DealsFetch};
use sharkdeal_core::models::StoreDirectory;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error};

use crate::message::Message;
use crate::model::Model;

pub type RefreshTask = JoinHandle<(DealsFetch, StoreDirectory)>;

pub struct TaskManager {
    pub client: Arc<CheapSharkClient>,
    pub refresh_task: Option<RefreshTask>,
    pub probes: JoinSet<(String, bool)>,
    pub thumbnail_timeout: Duration,
}

impl TaskManager {
    pub fn new(client: CheapSharkClient, thumbnail_timeout: Duration) -> Self {
        Self {
            client: Arc::new(client),
            refresh_task: None,
            probes: JoinSet::new(),
            thumbnail_timeout,
        }
    }
}

/// Fetch deals and stores together. A refresh already in flight is aborted.
pub fn start_refresh(model: &mut Model, tasks: &mut TaskManager) {
    if let Some(task) = tasks.refresh_task.take() {
        debug!("aborting previous refresh");
        task.abort();
    }
    model.set_loading(true);

    let client = Arc::clone(&tasks.client);
    let upper_price = model.upper_price();
    tasks.refresh_task = Some(tokio::spawn(async move {
        tokio::join!(
            client.fetch_deals(upper_price),
            client.fetch_store_directory()
        )
    }));
}

/// Probe thumbnails of the visible deals that have not been checked yet
fn start_probes(model: &mut Model, tasks: &mut TaskManager) {
    let urls = model.thumbnails.claim_unprobed(model.view.visible_deals());
    for url in urls {
        let client = Arc::clone(&tasks.client);
        let timeout = tasks.thumbnail_timeout;
        tasks.probes.spawn(async move {
            let reachable = client.is_reachable(&url, timeout).await;
            (url, reachable)
        });
    }
}

/// Check all running tasks and return messages for completed ones
pub async fn check_tasks(model: &mut Model, tasks: &mut TaskManager) -> Vec<Message> {
    let mut messages = Vec::new();

    if tasks.refresh_task.as_ref().is_some_and(|task| task.is_finished()) {
        if let Some(task) = tasks.refresh_task.take() {
            match task.await {
                Ok((fetch, stores)) => {
                    // fetch_deals already logged the failure; the list just stays empty
                    messages.push(Message::DealsRefreshed {
                        deals: fetch.deals,
                        stores,
                    });
                }
                Err(e) => {
                    error!(error = %e, "refresh task failed");
                    messages.push(Message::DealsRefreshed {
                        deals: Vec::new(),
                        stores: StoreDirectory::new(),
                    });
                }
            }
        }
    }

    while let Some(result) = tasks.probes.try_join_next() {
        match result {
            Ok((url, reachable)) => messages.push(Message::ThumbnailProbed { url, reachable }),
            Err(e) => error!(error = %e, "thumbnail probe task failed"),
        }
    }

    if !model.loading.deals {
        start_probes(model, tasks);
    }

    messages
}
