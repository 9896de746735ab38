//! Core navigation and modal-interaction machinery.
//!
//! # Module Components
//!
//! - [`view`] - The renderable view trait and constructed content
//! - [`factory`] - View constructors keyed by view id, with soft and hard failure modes
//! - [`pages`] - Registry of uniquely named pages and their support predicates
//! - [`drawer`] - Best-effort overlay drawers handed to a presentation subscriber
//! - [`dialog`] - Modal dialogs returning typed results
//! - [`service`] - The [`ViewService`] facade and service lifecycle
//!
//! # Architecture
//!
//! 1. **Views** implement the [`View`] trait for rendering and key handling
//! 2. The **factory** builds views from ids registered up front
//! 3. **Pages** name views and decide which subjects they apply to
//! 4. **Drawers** and **dialogs** hand built views to a presentation collaborator
//!
//! This core never draws anything itself: the host decides where and when
//! views are rendered.

pub mod dialog;
pub mod drawer;
pub mod factory;
pub mod pages;
pub mod service;
pub mod view;

pub use dialog::{CompletionSignal, Dialog, DialogCoordinator, DialogHost, DialogShell, DialogState, HostContext};
pub use drawer::{DrawerDirection, DrawerPresenter, DrawerRequest, DrawerSubscriber};
pub use factory::ViewFactory;
pub use pages::{Page, PageEvent, PageRegistry, SupportPredicate};
pub use service::{Service, ViewService};
pub use view::{View, ViewAction, ViewContent, ViewId};
