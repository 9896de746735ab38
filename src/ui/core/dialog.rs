//! Modal dialogs with typed results.
//!
//! A dialog session wraps the content in a [`DialogShell`], opens it on the
//! host and suspends until the content fires its [`CompletionSignal`]. The shell
//! is then dismissed and only afterwards is the result taken from the content.
//!
//! ```text
//! Created -> Shown -> CompletionSignaled -> Dismissed -> ResultReturned
//! ```

use log::{debug, warn};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use uuid::Uuid;

use super::factory::ViewFactory;
use super::view::View;
use crate::constants::{LOG_DIALOG_SIGNAL_DROPPED, LOG_DIALOG_STATE};
use crate::error::ViewError;

/// View shared between the dialog session and the host rendering it
pub type SharedView = Arc<Mutex<dyn View>>;

/// Content that produces a typed result and signals when it is done
pub trait Dialog: View {
    type Output: Send + 'static;

    /// Hand the content the signal it must fire once its result is final
    fn bind_completion(&mut self, signal: CompletionSignal);

    /// Title of the shell the content is shown in
    fn set_title(&mut self, _title: &str) {}

    /// Take the final result. Only called after the shell has been dismissed.
    fn take_result(&mut self) -> Self::Output;
}

/// One-shot completion signal owned by dialog content
#[derive(Debug)]
pub struct CompletionSignal {
    sender: oneshot::Sender<()>,
}

impl CompletionSignal {
    fn new() -> (Self, oneshot::Receiver<()>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Signal completion. Consumes the signal, so it fires at most once.
    pub fn complete(self) {
        // The session may already be gone; nothing to notify then
        let _ = self.sender.send(());
    }
}

/// The modal shell a host opens for a dialog
#[derive(Clone)]
pub struct DialogShell {
    pub id: Uuid,
    pub title: String,
    /// Window the dialog is parented to
    pub owner: String,
    pub content: SharedView,
}

/// Presentation collaborator for dialogs
pub trait DialogHost: Send + Sync {
    /// Open the shell modally over its owner
    fn open(&self, shell: DialogShell);

    /// Close a previously opened shell
    fn dismiss(&self, shell_id: Uuid);
}

/// Host window and presentation collaborator a dialog is shown on
#[derive(Clone)]
pub struct HostContext {
    pub owner: String,
    pub host: Arc<dyn DialogHost>,
}

impl HostContext {
    pub fn new(owner: impl Into<String>, host: Arc<dyn DialogHost>) -> Self {
        Self {
            owner: owner.into(),
            host,
        }
    }
}

/// Lifecycle of a dialog session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Created,
    Shown,
    CompletionSignaled,
    Dismissed,
    ResultReturned,
}

struct DialogSession {
    id: Uuid,
    title: String,
    state: DialogState,
}

impl DialogSession {
    fn new(title: &str) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            state: DialogState::Created,
        };
        debug!("{} {}: {:?} ({})", LOG_DIALOG_STATE, session.id, session.state, session.title);
        session
    }

    fn advance(&mut self, next: DialogState) {
        debug!("{} {}: {:?} -> {:?}", LOG_DIALOG_STATE, self.id, self.state, next);
        self.state = next;
    }
}

/// Runs dialogs and hands their typed results back to the caller
pub struct DialogCoordinator {
    factory: Arc<ViewFactory>,
}

impl DialogCoordinator {
    pub fn new(factory: Arc<ViewFactory>) -> Self {
        Self { factory }
    }

    /// Build the dialog registered under `view_id`, show it, and return its result.
    ///
    /// # Errors
    /// * [`ViewError::Capability`] if `view_id` is not a renderable view
    /// * [`ViewError::Construction`] if the view fails to construct
    /// * [`ViewError::Configuration`] if the constructed view is not a `V`
    pub async fn show_dialog<V: Dialog>(
        &self,
        host: &HostContext,
        view_id: &str,
        title: &str,
    ) -> Result<V::Output, ViewError> {
        let view = self.factory.create_hard(view_id)?;

        let dialog = view.into_any().downcast::<V>().map_err(|_| ViewError::Configuration {
            view: view_id.to_string(),
            expected: std::any::type_name::<V>(),
        })?;

        Ok(self.show_dialog_with(host, title, *dialog).await)
    }

    /// Show existing dialog content and return its result
    pub async fn show_dialog_with<V: Dialog>(&self, host: &HostContext, title: &str, mut dialog: V) -> V::Output {
        let mut session = DialogSession::new(title);

        let (signal, completed) = CompletionSignal::new();
        dialog.bind_completion(signal);
        dialog.set_title(&session.title);

        let content = Arc::new(Mutex::new(dialog));
        let shell = DialogShell {
            id: session.id,
            title: session.title.clone(),
            owner: host.owner.clone(),
            content: content.clone(),
        };

        host.host.open(shell);
        session.advance(DialogState::Shown);

        // The shell is closed either way and the result is read as is
        if completed.await.is_err() {
            warn!("{} {} ({})", LOG_DIALOG_SIGNAL_DROPPED, session.id, session.title);
        }
        session.advance(DialogState::CompletionSignaled);

        host.host.dismiss(session.id);
        session.advance(DialogState::Dismissed);

        let result = content.lock().unwrap_or_else(|e| e.into_inner()).take_result();
        session.advance(DialogState::ResultReturned);
        result
    }
}
