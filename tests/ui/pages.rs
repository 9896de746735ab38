use std::sync::Arc;

use viewhost::actor::{Actor, ActorKind};
use viewhost::ui::core::{PageEvent, PageRegistry, SupportPredicate, ViewFactory};
use viewhost::ViewError;

use crate::support::BlankView;

fn factory() -> Arc<ViewFactory> {
    let factory = ViewFactory::new();
    factory.register_default_view::<BlankView>("blank").unwrap();
    factory.register_default_view::<BlankView>("other").unwrap();
    factory.register_content("settings_model", || Ok(42_u32)).unwrap();
    Arc::new(factory)
}

fn characters_only() -> SupportPredicate<Actor> {
    Arc::new(|actor: &Actor| actor.is_character())
}

#[test]
fn test_duplicate_name_keeps_first_page() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());
    registry.register("Pose", "Pose", "blank", None).unwrap();

    let result = registry.register("Pose", "Camera", "other", Some(characters_only()));
    assert!(matches!(result, Err(ViewError::DuplicateName(name)) if name == "Pose"));

    let page = registry.get("Pose").unwrap();
    assert_eq!(page.icon, "Pose");
    assert_eq!(page.view_id, "blank");
    assert!(!page.has_predicate());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_non_renderable_content_is_rejected() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());

    let result = registry.register("Settings", "Settings", "settings_model", None);
    assert!(matches!(result, Err(ViewError::Capability(id)) if id == "settings_model"));

    let result = registry.register("Scene", "Scene", "unknown_view", None);
    assert!(matches!(result, Err(ViewError::Capability(_))));

    assert!(registry.is_empty());
}

#[test]
fn test_lookup_miss() {
    let registry: PageRegistry<Actor> = PageRegistry::new(factory());
    assert!(matches!(registry.get("Nowhere"), Err(ViewError::NotFound(name)) if name == "Nowhere"));
}

#[test]
fn test_supports_without_predicate() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());
    let page = registry.register("Home", "Home", "blank", None).unwrap();

    assert!(page.supports(None));
    assert!(page.supports(Some(&Actor::new("Mount", ActorKind::Mount))));
    assert!(page.supports(Some(&Actor::new("Player", ActorKind::Player))));
}

#[test]
fn test_supports_with_predicate() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());
    let page = registry
        .register("Appearance", "Appearance", "blank", Some(characters_only()))
        .unwrap();

    assert!(!page.supports(None));
    assert!(page.supports(Some(&Actor::new("Player", ActorKind::Player))));
    assert!(!page.supports(Some(&Actor::new("Chocobo", ActorKind::Mount))));
}

#[test]
fn test_pages_for_filters_and_keeps_order() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());
    registry.register("Home", "Home", "blank", None).unwrap();
    registry
        .register("Appearance", "Appearance", "blank", Some(characters_only()))
        .unwrap();
    registry.register("Camera", "Camera", "other", None).unwrap();

    let all: Vec<&str> = registry.pages().map(|page| page.name.as_str()).collect();
    assert_eq!(all, vec!["Home", "Appearance", "Camera"]);

    let mount = Actor::new("Chocobo", ActorKind::Mount);
    let for_mount: Vec<&str> = registry.pages_for(Some(&mount)).map(|page| page.name.as_str()).collect();
    assert_eq!(for_mount, vec!["Home", "Camera"]);

    let player = Actor::new("Player", ActorKind::Player);
    assert_eq!(registry.pages_for(Some(&player)).count(), 3);
    assert_eq!(registry.pages_for(None).count(), 2);
}

#[tokio::test]
async fn test_page_added_notification() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());
    let mut events = registry.subscribe();

    registry.register("Home", "Home", "blank", None).unwrap();
    let _ = registry.register("Home", "Home", "blank", None);
    registry.register("Camera", "Camera", "blank", None).unwrap();

    let PageEvent::Added(first) = events.recv().await.unwrap();
    let PageEvent::Added(second) = events.recv().await.unwrap();
    assert_eq!(first.name, "Home");
    assert_eq!(second.name, "Camera");
    assert!(events.try_recv().is_err());
}

#[test]
fn test_late_subscriber_drain_sees_every_page() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());
    let mut events = registry.subscribe();

    for i in 0..100 {
        registry.register(&format!("Page{}", i), "Scene", "blank", None).unwrap();
    }

    let mut received = Vec::new();
    while let Ok(PageEvent::Added(page)) = events.try_recv() {
        received.push(page.name);
    }
    assert_eq!(received.len(), 100);
    assert_eq!(received.first().map(String::as_str), Some("Page0"));
    assert_eq!(received.last().map(String::as_str), Some("Page99"));
}

#[test]
fn test_dropped_subscribers_are_forgotten() {
    let mut registry: PageRegistry<Actor> = PageRegistry::new(factory());
    let mut kept = registry.subscribe();
    let dropped = registry.subscribe();
    assert_eq!(registry.subscriber_count(), 2);

    drop(dropped);
    registry.register("Home", "Home", "blank", None).unwrap();

    assert_eq!(registry.subscriber_count(), 1);
    assert!(matches!(kept.try_recv(), Ok(PageEvent::Added(page)) if page.name == "Home"));
}
