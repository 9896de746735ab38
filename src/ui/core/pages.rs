//! Page registry.
//!
//! Pages are the named top-level views of the application. Names are unique for
//! the lifetime of the registry: pages are never replaced or removed. Each page
//! may carry a support predicate over the current subject (usually the selected
//! [`Actor`](crate::actor::Actor)) deciding whether the page applies to it.

use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use super::factory::ViewFactory;
use super::view::ViewId;
use crate::constants::LOG_PAGE_ADDED;
use crate::error::ViewError;

/// Predicate deciding whether a page applies to a subject
pub type SupportPredicate<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;

/// A registered page
pub struct Page<S> {
    pub name: String,
    pub icon: String,
    pub view_id: ViewId,
    supports: Option<SupportPredicate<S>>,
}

impl<S> Page<S> {
    /// Whether the page applies to the subject.
    ///
    /// Pages without a predicate apply to everything, including no subject.
    /// Pages with a predicate never apply when there is no subject.
    pub fn supports(&self, subject: Option<&S>) -> bool {
        match (&self.supports, subject) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(predicate), Some(subject)) => predicate(subject),
        }
    }

    pub fn has_predicate(&self) -> bool {
        self.supports.is_some()
    }
}

impl<S> Clone for Page<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            icon: self.icon.clone(),
            view_id: self.view_id.clone(),
            supports: self.supports.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Page<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("view_id", &self.view_id)
            .field("has_predicate", &self.supports.is_some())
            .finish()
    }
}

/// Notification sent to page subscribers
#[derive(Debug)]
pub enum PageEvent<S> {
    Added(Page<S>),
}

impl<S> Clone for PageEvent<S> {
    fn clone(&self) -> Self {
        match self {
            PageEvent::Added(page) => PageEvent::Added(page.clone()),
        }
    }
}

/// Registry of uniquely named pages, in insertion order
pub struct PageRegistry<S> {
    factory: Arc<ViewFactory>,
    pages: Vec<Page<S>>,
    index: HashMap<String, usize>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<PageEvent<S>>>>,
}

impl<S: 'static> PageRegistry<S> {
    pub fn new(factory: Arc<ViewFactory>) -> Self {
        Self {
            factory,
            pages: Vec::new(),
            index: HashMap::new(),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a page.
    ///
    /// # Errors
    /// * [`ViewError::DuplicateName`] if a page with this name exists
    /// * [`ViewError::Capability`] if `view_id` does not construct a renderable view
    pub fn register(
        &mut self,
        name: &str,
        icon: &str,
        view_id: &str,
        supports: Option<SupportPredicate<S>>,
    ) -> Result<&Page<S>, ViewError> {
        if self.index.contains_key(name) {
            return Err(ViewError::DuplicateName(name.to_string()));
        }

        if !self.factory.is_renderable(view_id) {
            return Err(ViewError::Capability(view_id.to_string()));
        }

        let page = Page {
            name: name.to_string(),
            icon: icon.to_string(),
            view_id: view_id.to_string(),
            supports,
        };

        info!("{}: {} ({})", LOG_PAGE_ADDED, page.name, page.view_id);
        self.notify(&page);

        let position = self.pages.len();
        self.index.insert(page.name.clone(), position);
        self.pages.push(page);
        Ok(&self.pages[position])
    }

    /// Look up a page by name
    pub fn get(&self, name: &str) -> Result<&Page<S>, ViewError> {
        self.index
            .get(name)
            .map(|&position| &self.pages[position])
            .ok_or_else(|| ViewError::NotFound(name.to_string()))
    }

    /// All pages. Currently in registration order; callers should not rely on it.
    pub fn pages(&self) -> impl Iterator<Item = &Page<S>> {
        self.pages.iter()
    }

    /// Pages that apply to the subject
    pub fn pages_for<'a>(&'a self, subject: Option<&'a S>) -> impl Iterator<Item = &'a Page<S>> + 'a {
        self.pages.iter().filter(move |page| page.supports(subject))
    }

    /// Receive a notification for every page registered from now on.
    ///
    /// The channel is unbounded: a subscriber that drains late still sees every page.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<PageEvent<S>> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).push(sender);
        receiver
    }

    /// Send a page-added event to every live subscriber, forgetting dropped ones
    fn notify(&self, page: &Page<S>) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|sender| sender.send(PageEvent::Added(page.clone())).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|sender| !sender.is_closed());
        subscribers.len()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
