//! Background request worker.
//!
//! Receives [`UiCommand`]s from the UI thread, runs each request as its
//! own tokio task and posts the settlement back as an [`AppEvent`].
//! Requests are never cancelled; a settlement nobody wants is dropped by
//! the page it was meant for.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use crate::api::InferenceClient;
use crate::request::execute;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Queue depth between the UI and the worker. Each page has at most one
/// request in flight, so this is never close to full.
pub const COMMAND_QUEUE: usize = 16;

pub fn spawn_request_worker(
    handle: &Handle,
    client: InferenceClient,
    mut commands: Receiver<UiCommand>,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Submit(submission) => {
                    let client = client.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        let settlement = execute(&client, submission).await;
                        if events.send(AppEvent::Settled(settlement)).is_err() {
                            tracing::debug!("UI gone before request settled");
                        }
                    });
                }
            }
        }
        tracing::debug!("Request worker stopped");
    })
}
