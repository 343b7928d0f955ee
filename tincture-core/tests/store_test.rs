//! Tests for the state store and group propagation

use tincture_core::{
    resolve_group_surface, ComponentId, ComponentState, GroupPseudo, InteractionEvent, MountOptions,
    StateStore,
};
use tincture_theme::{ThemeName, ThemeRegistry, ThemeToken};

fn mounted(store: &mut StateStore) -> ComponentId {
    let id = ComponentId::new();
    store.mount(id, MountOptions::default());
    id
}

#[test]
fn test_owner_state_reaches_subscribers() {
    let mut store = StateStore::new();
    let card = mounted(&mut store);
    let title = mounted(&mut store);
    let icon = mounted(&mut store);

    store.register_group(card, "card").unwrap();
    store.subscribe(title, "card").unwrap();
    store.subscribe(icon, "card").unwrap();
    assert!(store.get(card).unwrap().has_dyn_group_children());

    store.dispatch(card, InteractionEvent::PointerEnter).unwrap();
    for id in [card, title, icon] {
        let observed = store.get(id).unwrap().group_state("card").unwrap();
        assert!(observed.is_active(GroupPseudo::Hover));
        assert!(!observed.is_active(GroupPseudo::Press));
    }

    store.dispatch(card, InteractionEvent::PressIn).unwrap();
    let observed = store.get(title).unwrap().group_state("card").unwrap();
    assert!(observed.is_active(GroupPseudo::Press));

    // The subscriber's own flags are untouched.
    assert!(!store.get(title).unwrap().is_pressed());
}

#[test]
fn test_group_media() {
    let mut store = StateStore::new();
    let card = mounted(&mut store);
    let title = mounted(&mut store);
    store.register_group(card, "card").unwrap();
    store.subscribe(title, "card").unwrap();

    store.set_group_media("card", "sm", true).unwrap();
    let observed = store.get(title).unwrap().group_state("card").unwrap();
    assert!(observed.media_matches("sm"));
    assert!(store.set_group_media("list", "sm", true).is_err());
}

#[test]
fn test_unmounting_owner_removes_group() {
    let mut store = StateStore::new();
    let card = mounted(&mut store);
    let title = mounted(&mut store);
    store.register_group(card, "card").unwrap();
    store.subscribe(title, "card").unwrap();

    store.unmount(card).unwrap();
    assert!(store.group_owner("card").is_none());
    assert!(store.get(title).unwrap().group.is_none());
    assert!(store.get(title).unwrap().validate().is_ok());
}

#[test]
fn test_unmounting_last_subscriber_resets_owner() {
    let mut store = StateStore::new();
    let card = mounted(&mut store);
    let a = mounted(&mut store);
    let b = mounted(&mut store);
    store.register_group(card, "card").unwrap();
    store.subscribe(a, "card").unwrap();
    store.subscribe(b, "card").unwrap();

    store.unmount(a).unwrap();
    assert!(store.get(card).unwrap().has_dyn_group_children());
    assert_eq!(store.subscribers("card"), &[b]);

    store.unmount(b).unwrap();
    let owner = store.get(card).unwrap();
    assert!(!owner.has_dyn_group_children());
    assert!(owner.group.is_none());
    assert!(owner.validate().is_ok());
}

#[test]
fn test_group_surface_follows_owner() {
    let theme = ThemeRegistry::builtin().get(ThemeName::Dark);
    let mut store = StateStore::new();
    let card = mounted(&mut store);
    let title = mounted(&mut store);
    store.register_group(card, "card").unwrap();
    store.subscribe(title, "card").unwrap();

    store.dispatch(card, InteractionEvent::Focus { visible: true }).unwrap();
    let surface = resolve_group_surface(theme, store.get(title).unwrap(), "card").unwrap();
    assert_eq!(&surface.color, theme.get(ThemeToken::ColorFocus));
}

#[test]
fn test_invariants_hold_after_any_sequence() {
    let events = [
        InteractionEvent::BeginEnter,
        InteractionEvent::PointerEnter,
        InteractionEvent::EnterComplete,
        InteractionEvent::PointerEnter,
        InteractionEvent::PressIn,
        InteractionEvent::Focus { visible: true },
        InteractionEvent::FocusWithin(true),
        InteractionEvent::SetDisabled(true),
        InteractionEvent::PressIn,
        InteractionEvent::Unmount,
        InteractionEvent::PointerEnter,
        InteractionEvent::Mount,
        InteractionEvent::SetDisabled(false),
        InteractionEvent::PressIn,
        InteractionEvent::PointerLeave,
        InteractionEvent::Blur,
        InteractionEvent::Unmount,
    ];

    // Every rotation of the sequence, from every starting lifecycle.
    for start in [
        ComponentState::initial(),
        ComponentState::mounted(),
        ComponentState::should_enter(),
    ] {
        for offset in 0..events.len() {
            let mut state = start.clone();
            for event in events.iter().cycle().skip(offset).take(events.len()) {
                state.apply(event.clone());
                assert!(state.validate().is_ok(), "{:?} after {:?}", state, event);
                if state.is_unmounted() {
                    assert!(!state.is_interacting());
                }
            }
        }
    }
}
