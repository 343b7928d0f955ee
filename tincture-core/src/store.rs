//! # State Store
//!
//! [StateStore] owns the [ComponentState] of every live component instance.
//! Records are created on mount, mutated through [StateStore::dispatch] and
//! discarded on unmount.
//!
//! The store also wires named groups. A group has one owner and any number
//! of subscribers. Whenever the owner's state changes and it has subscribers,
//! the owner's pseudo flags are published under the group name into the
//! owner's own `group` map and into every subscriber's.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::{StateError, StateResult};
use crate::event::InteractionEvent;
use crate::group::GroupState;
use crate::state::{ComponentState, MountState};

/// Unique identifier for a component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u64);

impl ComponentId {
    /// Generate a new unique component ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

/// How a component mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountOptions {
    /// Start in `should-enter` and wait for [InteractionEvent::EnterComplete].
    pub animate_enter: bool,
}

#[derive(Debug, Clone)]
struct Group {
    owner: ComponentId,
    subscribers: Vec<ComponentId>,
    media: IndexMap<String, bool>,
}

/// Interaction state of every mounted component.
#[derive(Debug, Default)]
pub struct StateStore {
    components: HashMap<ComponentId, ComponentState>,
    groups: IndexMap<String, Group>,
}

impl StateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the record for a component.
    ///
    /// A known id that is still mounted keeps its record. A known id that was
    /// unmounted through [InteractionEvent::Unmount] mounts again per `options`.
    pub fn mount(&mut self, id: ComponentId, options: MountOptions) -> &ComponentState {
        log::debug!("Mounting component {:?} ({:?})", id, options);
        let state = self.components.entry(id).or_insert_with(ComponentState::initial);
        if state.unmounted == MountState::Unmounted {
            state.apply(if options.animate_enter {
                InteractionEvent::BeginEnter
            } else {
                InteractionEvent::Mount
            });
        }
        state
    }

    /// Discard a component's record and return its final state.
    ///
    /// Groups owned by the component are removed, and subscriptions it held
    /// are dropped.
    pub fn unmount(&mut self, id: ComponentId) -> StateResult<ComponentState> {
        let mut state = self
            .components
            .remove(&id)
            .ok_or(StateError::UnknownComponent(id))?;
        state.apply(InteractionEvent::Unmount);
        log::debug!("Unmounted component {:?}", id);

        let owned: Vec<String> = self
            .groups
            .iter()
            .filter(|(_, group)| group.owner == id)
            .map(|(name, _)| name.clone())
            .collect();
        for name in owned {
            if let Some(group) = self.groups.shift_remove(&name) {
                log::debug!("Removing group '{}' with its owner", name);
                for subscriber in group.subscribers {
                    if let Some(record) = self.components.get_mut(&subscriber) {
                        remove_group_entry(record, &name);
                    }
                }
            }
        }

        let mut abandoned = Vec::new();
        for (name, group) in self.groups.iter_mut() {
            let before = group.subscribers.len();
            group.subscribers.retain(|subscriber| *subscriber != id);
            if before != group.subscribers.len() && group.subscribers.is_empty() {
                abandoned.push((name.clone(), group.owner));
            }
        }
        for (name, owner) in abandoned {
            self.reset_owner(owner, &name);
        }

        Ok(state)
    }

    /// The state of a component.
    pub fn get(&self, id: ComponentId) -> Option<&ComponentState> {
        self.components.get(&id)
    }

    /// Whether a record exists for the component.
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    /// Number of live components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component is live.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Apply an event to a component. Returns whether its state changed.
    pub fn dispatch(&mut self, id: ComponentId, event: InteractionEvent) -> StateResult<bool> {
        let state = self
            .components
            .get_mut(&id)
            .ok_or(StateError::UnknownComponent(id))?;
        let changed = state.apply(event);

        if changed {
            let owned: Vec<String> = self
                .groups
                .iter()
                .filter(|(_, group)| group.owner == id)
                .map(|(name, _)| name.clone())
                .collect();
            for name in owned {
                self.publish(&name);
            }
        }
        Ok(changed)
    }

    /// Register a named group owned by a component.
    pub fn register_group(&mut self, owner: ComponentId, name: impl Into<String>) -> StateResult<()> {
        let name = name.into();
        if !self.components.contains_key(&owner) {
            return Err(StateError::UnknownComponent(owner));
        }
        if self.groups.contains_key(&name) {
            return Err(StateError::DuplicateGroup(name));
        }

        log::debug!("Registering group '{}' owned by {:?}", name, owner);
        self.groups.insert(
            name,
            Group {
                owner,
                subscribers: Vec::new(),
                media: IndexMap::new(),
            },
        );
        Ok(())
    }

    /// The owner of a group.
    pub fn group_owner(&self, name: &str) -> Option<ComponentId> {
        self.groups.get(name).map(|group| group.owner)
    }

    /// Components observing a group.
    pub fn subscribers(&self, name: &str) -> &[ComponentId] {
        self.groups
            .get(name)
            .map(|group| group.subscribers.as_slice())
            .unwrap_or(&[])
    }

    /// Make `child` observe a group. Subscribing twice is a no-op.
    pub fn subscribe(&mut self, child: ComponentId, name: &str) -> StateResult<()> {
        if !self.components.contains_key(&child) {
            return Err(StateError::UnknownComponent(child));
        }
        let group = self
            .groups
            .get_mut(name)
            .ok_or_else(|| StateError::UnknownGroup(name.to_string()))?;
        if group.subscribers.contains(&child) {
            return Ok(());
        }
        group.subscribers.push(child);
        let owner = group.owner;

        if let Some(record) = self.components.get_mut(&owner) {
            record.has_dyn_group_children = Some(true);
        }
        self.publish(name);
        Ok(())
    }

    /// Publish a media-query match for a group.
    pub fn set_group_media(&mut self, name: &str, key: impl Into<String>, matches: bool) -> StateResult<()> {
        let group = self
            .groups
            .get_mut(name)
            .ok_or_else(|| StateError::UnknownGroup(name.to_string()))?;
        group.media.insert(key.into(), matches);
        self.publish(name);
        Ok(())
    }

    /// Copy the owner's current group state to the owner and its subscribers.
    fn publish(&mut self, name: &str) {
        let Some(group) = self.groups.get(name) else {
            return;
        };
        if group.subscribers.is_empty() {
            return;
        }
        let Some(owner) = self.components.get(&group.owner) else {
            return;
        };

        let mut state = GroupState::from_pseudo(owner.pseudo());
        if !group.media.is_empty() {
            state.media = Some(group.media.clone());
        }
        log::trace!("Publishing group '{}': {:?}", name, state);

        for id in std::iter::once(&group.owner).chain(group.subscribers.iter()) {
            if let Some(record) = self.components.get_mut(id) {
                record
                    .group
                    .get_or_insert_with(IndexMap::new)
                    .insert(name.to_string(), state.clone());
            }
        }
    }

    fn reset_owner(&mut self, owner: ComponentId, name: &str) {
        let still_observed = self
            .groups
            .values()
            .any(|group| group.owner == owner && !group.subscribers.is_empty());
        if let Some(record) = self.components.get_mut(&owner) {
            remove_group_entry(record, name);
            if !still_observed {
                record.has_dyn_group_children = None;
            }
        }
    }
}

fn remove_group_entry(record: &mut ComponentState, name: &str) {
    if let Some(groups) = record.group.as_mut() {
        groups.shift_remove(name);
        if groups.is_empty() {
            record.group = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids() {
        assert_ne!(ComponentId::new(), ComponentId::new());
    }

    #[test]
    fn mount_options() {
        let mut store = StateStore::new();
        let plain = ComponentId::new();
        let animated = ComponentId::new();
        assert!(store.mount(plain, MountOptions::default()).is_mounted());
        assert!(store
            .mount(animated, MountOptions { animate_enter: true })
            .should_enter_now());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remount_after_unmount_event() {
        let mut store = StateStore::new();
        let id = ComponentId::new();
        store.mount(id, MountOptions::default());
        store.dispatch(id, InteractionEvent::Unmount).unwrap();
        assert!(store.get(id).unwrap().is_unmounted());

        assert!(store.mount(id, MountOptions::default()).is_mounted());

        store.dispatch(id, InteractionEvent::Unmount).unwrap();
        assert!(store
            .mount(id, MountOptions { animate_enter: true })
            .should_enter_now());
    }

    #[test]
    fn mounting_a_live_id_keeps_its_record() {
        let mut store = StateStore::new();
        let id = ComponentId::new();
        store.mount(id, MountOptions::default());
        store.dispatch(id, InteractionEvent::PointerEnter).unwrap();

        let state = store.mount(id, MountOptions { animate_enter: true });
        assert!(state.is_mounted());
        assert!(state.is_hovered());
    }

    #[test]
    fn unknown_component() {
        let mut store = StateStore::new();
        let id = ComponentId::new();
        assert_eq!(
            store.dispatch(id, InteractionEvent::PointerEnter),
            Err(StateError::UnknownComponent(id))
        );
        assert_eq!(store.unmount(id), Err(StateError::UnknownComponent(id)));
    }

    #[test]
    fn unmount_returns_final_state() {
        let mut store = StateStore::new();
        let id = ComponentId::new();
        store.mount(id, MountOptions::default());
        store.dispatch(id, InteractionEvent::PointerEnter).unwrap();

        let last = store.unmount(id).unwrap();
        assert!(last.is_unmounted());
        assert!(!last.is_hovered());
        assert!(store.get(id).is_none());
    }

    #[test]
    fn duplicate_group() {
        let mut store = StateStore::new();
        let a = ComponentId::new();
        let b = ComponentId::new();
        store.mount(a, MountOptions::default());
        store.mount(b, MountOptions::default());
        store.register_group(a, "card").unwrap();
        assert_eq!(
            store.register_group(b, "card"),
            Err(StateError::DuplicateGroup("card".to_string()))
        );
        assert_eq!(
            store.subscribe(b, "list"),
            Err(StateError::UnknownGroup("list".to_string()))
        );
    }

    #[test]
    fn groups_without_subscribers_stay_quiet() {
        let mut store = StateStore::new();
        let owner = ComponentId::new();
        store.mount(owner, MountOptions::default());
        store.register_group(owner, "card").unwrap();
        store.dispatch(owner, InteractionEvent::PointerEnter).unwrap();

        let state = store.get(owner).unwrap();
        assert!(state.group.is_none());
        assert!(!state.has_dyn_group_children());
    }
}
