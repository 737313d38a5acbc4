use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Receiver;
use compass_core::ItemId;
use std::thread;
use tokio::runtime::Builder;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 32;
const NAVIGATION_CAPACITY: usize = 16;

/// The GUI's ends of the channels to the background runtime.
pub struct Services {
    pub events: Receiver<AppEvent>,
    /// Navigations published here reach every `subscribe`d socket client.
    pub navigations: broadcast::Sender<ItemId>,
}

/// Starts the control socket and the config watcher on a tokio runtime in
/// their own thread.
pub fn start_background_services() -> std::io::Result<Services> {
    let (tx, events) = async_channel::bounded(EVENT_CAPACITY);
    let (navigations, _) = broadcast::channel(NAVIGATION_CAPACITY);

    let rt = Builder::new_multi_thread()
        .enable_all()
        .thread_name("compass-worker")
        .build()?;

    let server_navigations = navigations.clone();
    thread::Builder::new()
        .name("compass-services".to_string())
        .spawn(move || {
            rt.block_on(async move {
                tokio::spawn(server::run_server(tx.clone(), server_navigations));
                tokio::spawn(config::watch_config(tx));

                std::future::pending::<()>().await;
            });
        })?;

    Ok(Services {
        events,
        navigations,
    })
}
