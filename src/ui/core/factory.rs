//! View factory: constructs view content from a view id.
//!
//! Constructors are registered up front and keyed by view id. Construction
//! happens in one of two modes:
//!
//! * **soft** ([`ViewFactory::create_soft`]) - a failing constructor is logged
//!   and reported as "no content", used for best-effort drawers
//! * **hard** ([`ViewFactory::create_hard`]) - a failing constructor becomes a
//!   [`ViewError::Construction`], used for dialogs and pages

use anyhow::Result;
use log::{debug, error};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::view::{View, ViewContent};
use crate::constants::{LOG_ERROR_CREATE_VIEW, LOG_VIEW_REGISTERED, VIEW_CONFIRM, VIEW_HOME, VIEW_TEXT_PROMPT};
use crate::error::ViewError;
use crate::ui::views::{ConfirmDialog, HomeView, TextPromptDialog};

type ViewConstructor = Box<dyn Fn() -> Result<Box<dyn View>> + Send + Sync>;
type ContentConstructor = Box<dyn Fn() -> Result<Box<dyn Any + Send>> + Send + Sync>;

/// Registered constructor; the variant records whether it yields a renderable view.
enum Constructor {
    View(ViewConstructor),
    Content(ContentConstructor),
}

/// Table of view constructors keyed by view id
pub struct ViewFactory {
    entries: RwLock<HashMap<String, Arc<Constructor>>>,
}

impl ViewFactory {
    /// Create an empty factory
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a factory with the built-in views registered
    pub fn with_builtin_views() -> Result<Self, ViewError> {
        let factory = Self::new();
        factory.register_default_view::<HomeView>(VIEW_HOME)?;
        factory.register_default_view::<ConfirmDialog>(VIEW_CONFIRM)?;
        factory.register_default_view::<TextPromptDialog>(VIEW_TEXT_PROMPT)?;
        Ok(factory)
    }

    /// Register a constructor for a renderable view
    pub fn register_view<V, F>(&self, id: &str, constructor: F) -> Result<(), ViewError>
    where
        V: View,
        F: Fn() -> Result<V> + Send + Sync + 'static,
    {
        let constructor: ViewConstructor = Box::new(move || {
            let mut view = constructor()?;
            view.init()?;
            Ok(Box::new(view) as Box<dyn View>)
        });
        self.insert(id, std::any::type_name::<V>(), Constructor::View(constructor))
    }

    /// Register a renderable view built with `Default`
    pub fn register_default_view<V>(&self, id: &str) -> Result<(), ViewError>
    where
        V: View + Default,
    {
        self.register_view(id, || Ok(V::default()))
    }

    /// Register a constructor for content that is not a renderable view
    pub fn register_content<T, F>(&self, id: &str, constructor: F) -> Result<(), ViewError>
    where
        T: Any + Send,
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        let constructor: ContentConstructor =
            Box::new(move || constructor().map(|content| Box::new(content) as Box<dyn Any + Send>));
        self.insert(id, std::any::type_name::<T>(), Constructor::Content(constructor))
    }

    fn insert(&self, id: &str, type_name: &'static str, constructor: Constructor) -> Result<(), ViewError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());

        if entries.contains_key(id) {
            return Err(ViewError::DuplicateView(id.to_string()));
        }

        debug!("{}: {} ({})", LOG_VIEW_REGISTERED, id, type_name);
        entries.insert(id.to_string(), Arc::new(constructor));
        Ok(())
    }

    /// Whether a view id constructs a renderable view. Unknown ids are not renderable.
    pub fn is_renderable(&self, id: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .map(|constructor| matches!(**constructor, Constructor::View(_)))
            .unwrap_or(false)
    }

    /// Look up the constructor, releasing the table lock before it runs
    fn view_constructor(&self, id: &str) -> Result<Arc<Constructor>, ViewError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        match entries.get(id) {
            Some(constructor) if matches!(**constructor, Constructor::View(_)) => Ok(constructor.clone()),
            _ => Err(ViewError::Capability(id.to_string())),
        }
    }

    fn construct(id: &str, constructor: &Constructor) -> Result<Box<dyn View>, ViewError> {
        match constructor {
            Constructor::View(construct) => construct().map_err(|source| ViewError::Construction {
                view: id.to_string(),
                source,
            }),
            Constructor::Content(_) => Err(ViewError::Capability(id.to_string())),
        }
    }

    /// Construct a view, propagating constructor failures
    pub fn create_hard(&self, id: &str) -> Result<Box<dyn View>, ViewError> {
        let constructor = self.view_constructor(id)?;
        Self::construct(id, &constructor)
    }

    /// Construct a view, logging constructor failures and returning `None` for them.
    ///
    /// Ids that are unknown or not renderable are still reported as
    /// [`ViewError::Capability`].
    pub fn create_soft(&self, id: &str) -> Result<Option<Box<dyn View>>, ViewError> {
        let constructor = self.view_constructor(id)?;
        match Self::construct(id, &constructor) {
            Ok(view) => Ok(Some(view)),
            Err(ViewError::Construction { view, source }) => {
                error!("{}: {}: {:#}", LOG_ERROR_CREATE_VIEW, view, source);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Construct any registered content, renderable or not.
    ///
    /// The result can be handed to a drawer as an existing instance, which
    /// checks renderability itself.
    ///
    /// # Errors
    /// * [`ViewError::Capability`] if `view_id` is not registered
    /// * [`ViewError::Construction`] if the constructor fails
    pub fn create_content(&self, id: &str) -> Result<ViewContent, ViewError> {
        let constructor = self
            .entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| ViewError::Capability(id.to_string()))?;

        let to_error = |source| ViewError::Construction {
            view: id.to_string(),
            source,
        };
        match &*constructor {
            Constructor::View(construct) => construct().map(ViewContent::View).map_err(to_error),
            Constructor::Content(construct) => construct().map(ViewContent::Opaque).map_err(to_error),
        }
    }
}

impl Default for ViewFactory {
    fn default() -> Self {
        Self::new()
    }
}
