//! Drawer presentation.
//!
//! Drawers are best-effort overlay panels. The presenter builds the content and
//! hands it to the single registered [`DrawerSubscriber`], which owns showing
//! and dismissing it. A missing subscriber or a failing constructor turns the
//! request into a no-op.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use super::factory::ViewFactory;
use super::view::{View, ViewContent};
use crate::constants::LOG_DRAWER_SKIPPED;
use crate::error::ViewError;

/// Edge a drawer slides in from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerDirection {
    Left,
    Top,
    #[default]
    Right,
    Bottom,
}

/// A drawer handed to the presentation subscriber
pub struct DrawerRequest {
    pub title: Option<String>,
    pub content: Box<dyn View>,
    pub direction: DrawerDirection,
}

/// Presentation collaborator for drawers
#[async_trait]
pub trait DrawerSubscriber: Send + Sync {
    /// Show the drawer; returns once the drawer has been dismissed
    async fn show_drawer(&self, request: DrawerRequest);
}

/// Shows drawers through the registered subscriber
pub struct DrawerPresenter {
    factory: Arc<ViewFactory>,
    subscriber: RwLock<Option<Arc<dyn DrawerSubscriber>>>,
    default_direction: DrawerDirection,
}

impl DrawerPresenter {
    pub fn new(factory: Arc<ViewFactory>) -> Self {
        Self {
            factory,
            subscriber: RwLock::new(None),
            default_direction: DrawerDirection::default(),
        }
    }

    /// Edge used by [`DrawerPresenter::show_default`]
    pub fn default_direction(&self) -> DrawerDirection {
        self.default_direction
    }

    pub fn set_default_direction(&mut self, direction: DrawerDirection) {
        self.default_direction = direction;
    }

    /// Set the presentation subscriber, replacing any previous one
    pub fn subscribe(&self, subscriber: Arc<dyn DrawerSubscriber>) {
        *self.subscriber.write().unwrap_or_else(|e| e.into_inner()) = Some(subscriber);
    }

    /// Remove the presentation subscriber
    pub fn unsubscribe(&self) {
        *self.subscriber.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn has_subscriber(&self) -> bool {
        self.subscriber.read().unwrap_or_else(|e| e.into_inner()).is_some()
    }

    fn current_subscriber(&self) -> Option<Arc<dyn DrawerSubscriber>> {
        self.subscriber.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Build the view registered under `view_id` and show it as a drawer.
    ///
    /// Completes without doing anything if the view fails to construct or no
    /// subscriber is registered.
    ///
    /// # Errors
    /// [`ViewError::Capability`] if `view_id` does not construct a renderable view
    pub async fn show(&self, view_id: &str, title: Option<&str>, direction: DrawerDirection) -> Result<(), ViewError> {
        let Some(content) = self.factory.create_soft(view_id)? else {
            debug!("{}: {} produced no content", LOG_DRAWER_SKIPPED, view_id);
            return Ok(());
        };

        self.present(content, title, direction).await;
        Ok(())
    }

    /// Like [`DrawerPresenter::show`], sliding in from the default edge
    pub async fn show_default(&self, view_id: &str, title: Option<&str>) -> Result<(), ViewError> {
        self.show(view_id, title, self.default_direction).await
    }

    /// Show existing content as a drawer.
    ///
    /// # Errors
    /// [`ViewError::InvalidView`] if the content is not a renderable view
    pub async fn show_instance(
        &self,
        content: ViewContent,
        title: Option<&str>,
        direction: DrawerDirection,
    ) -> Result<(), ViewError> {
        let content = content.into_view().ok_or(ViewError::InvalidView)?;
        self.present(content, title, direction).await;
        Ok(())
    }

    async fn present(&self, content: Box<dyn View>, title: Option<&str>, direction: DrawerDirection) {
        let Some(subscriber) = self.current_subscriber() else {
            debug!("{}: no drawer subscriber", LOG_DRAWER_SKIPPED);
            return;
        };

        let request = DrawerRequest {
            title: title.map(str::to_string),
            content,
            direction,
        };
        subscriber.show_drawer(request).await;
    }
}
