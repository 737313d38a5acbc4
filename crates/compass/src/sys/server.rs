use crate::events::AppEvent;
use crate::sys::SOCKET_PATH;
use crate::sys::protocol::{self, Command};
use async_channel::Sender;
use compass_core::ItemId;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;
use tokio::net::unix::OwnedWriteHalf;
use tokio::sync::broadcast;

pub async fn run_server(tx: Sender<AppEvent>, navigations: broadcast::Sender<ItemId>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                let tx = tx.clone();
                let navigations = navigations.clone();
                tokio::spawn(async move {
                    let (reader, writer) = stream.into_split();
                    let mut writer = Some(writer);
                    let mut lines = BufReader::new(reader).lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match line.parse::<Command>() {
                            Ok(Command::Subscribe) => {
                                if let Some(writer) = writer.take() {
                                    tokio::spawn(forward_navigations(
                                        writer,
                                        navigations.subscribe(),
                                    ));
                                }
                            }
                            Ok(command) => {
                                if let Some(event) = command.into_event()
                                    && tx.send(event).await.is_err()
                                {
                                    break;
                                }
                            }
                            Err(e) => log::warn!("Ignoring control message: {}", e),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

async fn forward_navigations(mut writer: OwnedWriteHalf, mut rx: broadcast::Receiver<ItemId>) {
    loop {
        match rx.recv().await {
            Ok(id) => {
                if writer
                    .write_all(protocol::navigation_line(&id).as_bytes())
                    .await
                    .is_err()
                {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                log::warn!("Subscriber fell behind, skipped {} navigations", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
