//! View service: the facade the rest of the application navigates through.
//!
//! It owns the shared [`ViewFactory`] and wires the page registry, the drawer
//! presenter and the dialog coordinator to it. Pages are registered during
//! [`Service::initialize`] (and by other services' initialization) before any
//! navigation request is served; registration needs `&mut self`, so it cannot
//! overlap lookups.

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::dialog::{Dialog, DialogCoordinator, HostContext};
use super::drawer::{DrawerDirection, DrawerPresenter, DrawerSubscriber};
use super::factory::ViewFactory;
use super::pages::{Page, PageEvent, PageRegistry, SupportPredicate};
use super::view::{View, ViewContent};
use crate::actor::Actor;
use crate::constants::{ICON_HOME, PAGE_HOME, VIEW_HOME};
use crate::error::ViewError;

/// Application service lifecycle
#[async_trait]
pub trait Service: Send {
    async fn initialize(&mut self) -> Result<()>;
    async fn start(&mut self) -> Result<()>;
    async fn shutdown(&mut self) -> Result<()>;
}

/// Page navigation, drawers and dialogs over one view factory
pub struct ViewService<S = Actor> {
    factory: Arc<ViewFactory>,
    pages: PageRegistry<S>,
    drawers: DrawerPresenter,
    dialogs: DialogCoordinator,
}

impl<S: 'static> ViewService<S> {
    pub fn new(factory: Arc<ViewFactory>) -> Self {
        Self {
            pages: PageRegistry::new(factory.clone()),
            drawers: DrawerPresenter::new(factory.clone()),
            dialogs: DialogCoordinator::new(factory.clone()),
            factory,
        }
    }

    pub fn factory(&self) -> &Arc<ViewFactory> {
        &self.factory
    }

    /// Register a page shown for every subject
    pub fn add_page(&mut self, name: &str, icon: &str, view_id: &str) -> Result<&Page<S>, ViewError> {
        self.pages.register(name, icon, view_id, None)
    }

    /// Register a page shown only for subjects accepted by `supports`
    pub fn add_page_with<F>(&mut self, name: &str, icon: &str, view_id: &str, supports: F) -> Result<&Page<S>, ViewError>
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        let predicate: SupportPredicate<S> = Arc::new(supports);
        self.pages.register(name, icon, view_id, Some(predicate))
    }

    pub fn get_page(&self, name: &str) -> Result<&Page<S>, ViewError> {
        self.pages.get(name)
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page<S>> {
        self.pages.pages()
    }

    pub fn pages_for<'a>(&'a self, subject: Option<&'a S>) -> impl Iterator<Item = &'a Page<S>> + 'a {
        self.pages.pages_for(subject)
    }

    pub fn subscribe_pages(&self) -> mpsc::UnboundedReceiver<PageEvent<S>> {
        self.pages.subscribe()
    }

    /// Build the view of a page for navigation
    pub fn create_page(&self, name: &str) -> Result<Box<dyn View>, ViewError> {
        let page = self.pages.get(name)?;
        self.factory.create_hard(&page.view_id)
    }

    pub fn set_drawer_subscriber(&self, subscriber: Arc<dyn DrawerSubscriber>) {
        self.drawers.subscribe(subscriber);
    }

    pub fn clear_drawer_subscriber(&self) {
        self.drawers.unsubscribe();
    }

    pub async fn show_drawer(
        &self,
        view_id: &str,
        title: Option<&str>,
        direction: DrawerDirection,
    ) -> Result<(), ViewError> {
        self.drawers.show(view_id, title, direction).await
    }

    /// Show a drawer from the configured default edge
    pub async fn show_default_drawer(&self, view_id: &str, title: Option<&str>) -> Result<(), ViewError> {
        self.drawers.show_default(view_id, title).await
    }

    pub fn default_drawer_direction(&self) -> DrawerDirection {
        self.drawers.default_direction()
    }

    pub fn set_default_drawer_direction(&mut self, direction: DrawerDirection) {
        self.drawers.set_default_direction(direction);
    }

    pub async fn show_drawer_instance(
        &self,
        content: ViewContent,
        title: Option<&str>,
        direction: DrawerDirection,
    ) -> Result<(), ViewError> {
        self.drawers.show_instance(content, title, direction).await
    }

    pub async fn show_dialog<V: Dialog>(
        &self,
        host: &HostContext,
        view_id: &str,
        title: &str,
    ) -> Result<V::Output, ViewError> {
        self.dialogs.show_dialog::<V>(host, view_id, title).await
    }

    pub async fn show_dialog_with<V: Dialog>(&self, host: &HostContext, title: &str, dialog: V) -> V::Output {
        self.dialogs.show_dialog_with(host, title, dialog).await
    }
}

#[async_trait]
impl<S: Send + 'static> Service for ViewService<S> {
    async fn initialize(&mut self) -> Result<()> {
        self.add_page(PAGE_HOME, ICON_HOME, VIEW_HOME)?;
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        info!("View service started with {} page(s)", self.pages.len());
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.drawers.unsubscribe();
        Ok(())
    }
}
