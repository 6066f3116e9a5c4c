//! Background execution of API commands.
//!
//! Requests run on a tokio runtime; results come back to the UI thread as
//! [`ApiEvent`]s over an unbounded channel, drained once per tick.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::debug;

use super::{ApiEvent, Command};
use crate::api::UsersClient;

pub struct Dispatcher {
    client: UsersClient,
    handle: Handle,
    tx: UnboundedSender<ApiEvent>,
}

impl Dispatcher {
    pub fn new(client: UsersClient, handle: Handle) -> (Self, UnboundedReceiver<ApiEvent>) {
        let (tx, rx) = unbounded_channel();
        (Self { client, handle, tx }, rx)
    }

    /// Spawn the request behind `cmd`. Each call is independent; nothing is
    /// coalesced or cancelled. `Quit` is handled by the event loop and ignored here.
    pub fn dispatch(&self, cmd: Command) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        match cmd {
            Command::FetchUsers => {
                debug!("spawning users fetch");
                self.handle.spawn(async move {
                    let res = client.list_users().await;
                    let _ = tx.send(ApiEvent::UsersLoaded(res));
                });
            }
            Command::CreateUser(new) => {
                debug!(name = %new.name, "spawning user create");
                self.handle.spawn(async move {
                    let res = client.create_user(&new).await;
                    let _ = tx.send(ApiEvent::UserCreated(res));
                });
            }
            Command::Quit => {}
        }
    }
}
