use std::sync::Arc;

use crossterm::event::KeyCode;
use viewhost::actor::{Actor, ActorKind};
use viewhost::config::Config;
use viewhost::constants::{PAGE_HOME, VIEW_CONFIRM, VIEW_HOME};
use viewhost::ui::core::{DrawerDirection, HostContext, PageEvent};
use viewhost::ui::views::{ConfirmDialog, HomeView};
use viewhost::{Service, ViewError, ViewFactory, ViewService};

use crate::support::{event_log, key, BlankView, RecordingSubscriber, ScriptedHost};

fn service() -> ViewService<Actor> {
    let factory = ViewFactory::with_builtin_views().unwrap();
    factory.register_default_view::<BlankView>("appearance").unwrap();
    factory
        .register_view::<BlankView, _>("broken", || anyhow::bail!("no memory access"))
        .unwrap();
    ViewService::new(Arc::new(factory))
}

#[tokio::test]
async fn test_initialize_registers_home() {
    let mut views = service();
    let mut events = views.subscribe_pages();

    views.initialize().await.unwrap();
    views.start().await.unwrap();

    let home = views.get_page(PAGE_HOME).unwrap();
    assert_eq!(home.view_id, VIEW_HOME);
    assert!(home.supports(None));

    let PageEvent::Added(page) = events.recv().await.unwrap();
    assert_eq!(page.name, PAGE_HOME);

    // Initializing twice would register Home twice
    assert!(views.initialize().await.is_err());
}

#[tokio::test]
async fn test_create_page() {
    let mut views = service();
    views.initialize().await.unwrap();
    views.add_page("Broken", "Scene", "broken").unwrap();

    let view = views.create_page(PAGE_HOME).unwrap();
    assert!(view.as_ref().as_any().is::<HomeView>());

    assert!(matches!(views.create_page("Broken"), Err(ViewError::Construction { .. })));
    assert!(matches!(views.create_page("Missing"), Err(ViewError::NotFound(_))));
}

#[tokio::test]
async fn test_pages_for_actor() {
    let mut views = service();
    views.initialize().await.unwrap();
    views
        .add_page_with("Appearance", "Appearance", "appearance", |actor: &Actor| actor.is_character())
        .unwrap();

    let mount = Actor::new("Chocobo", ActorKind::Mount);
    let names: Vec<&str> = views.pages_for(Some(&mount)).map(|page| page.name.as_str()).collect();
    assert_eq!(names, vec![PAGE_HOME]);

    let player = Actor::new("Player", ActorKind::Player);
    assert_eq!(views.pages_for(Some(&player)).count(), 2);
}

#[tokio::test]
async fn test_drawers_and_dialogs_through_service() {
    let mut views = service();
    views.initialize().await.unwrap();

    // No subscriber yet
    views.show_drawer(VIEW_HOME, None, DrawerDirection::Left).await.unwrap();

    let subscriber = RecordingSubscriber::new();
    views.set_drawer_subscriber(subscriber.clone());
    views
        .show_drawer(VIEW_HOME, Some("Home"), DrawerDirection::Left)
        .await
        .unwrap();
    assert_eq!(subscriber.requests().len(), 1);

    let log = event_log();
    let host = ScriptedHost::new(log, vec![key(KeyCode::Char('n'))]);
    let context = HostContext::new("main", host);
    let confirmed = views
        .show_dialog::<ConfirmDialog>(&context, VIEW_CONFIRM, "Reset?")
        .await
        .unwrap();
    assert!(!confirmed);

    views.shutdown().await.unwrap();
    views.show_drawer(VIEW_HOME, None, DrawerDirection::Left).await.unwrap();
    assert_eq!(subscriber.requests().len(), 1);
}

#[tokio::test]
async fn test_default_drawer_direction_from_config() {
    let config: Config = toml::from_str("[drawers]\ndefault_direction = \"bottom\"").unwrap();

    let mut views = service();
    assert_eq!(views.default_drawer_direction(), DrawerDirection::Right);
    views.set_default_drawer_direction(config.drawers.default_direction);

    let subscriber = RecordingSubscriber::new();
    views.set_drawer_subscriber(subscriber.clone());
    views.show_default_drawer(VIEW_HOME, Some("Home")).await.unwrap();
    views
        .show_drawer(VIEW_HOME, None, DrawerDirection::Top)
        .await
        .unwrap();

    assert_eq!(
        subscriber.requests(),
        vec![
            (Some("Home".to_string()), DrawerDirection::Bottom),
            (None, DrawerDirection::Top),
        ]
    );
}
