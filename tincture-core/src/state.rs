//! # Component Interaction State
//!
//! Every rendered component carries a [ComponentState] record: whether it is
//! mounted, which pointer and focus flags are set, an optional animation
//! override, and the state it observes for named groups.
//!
//! Flags are optional. An absent flag reads as `false`, which lets a record
//! describe "not tracked" separately from "tracked and off".
//!
//! ```rust
//! use tincture_core::event::InteractionEvent;
//! use tincture_core::state::ComponentState;
//!
//! let mut state = ComponentState::mounted();
//! state.apply(InteractionEvent::PointerEnter);
//! assert!(state.is_hovered());
//! assert!(state.validate().is_ok());
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{StateError, StateResult};
use crate::group::{GroupState, PseudoGroupState};

const SHOULD_ENTER: &str = "should-enter";

/// Mount lifecycle of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MountState {
    /// Not mounted yet, or already unmounted.
    #[default]
    Unmounted,
    /// About to mount with an enter animation.
    ShouldEnter,
    /// Mounted and interactive.
    Mounted,
}

impl MountState {
    /// Whether the component is fully mounted.
    pub fn is_mounted(self) -> bool {
        self == MountState::Mounted
    }
}

impl Serialize for MountState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MountState::Unmounted => serializer.serialize_bool(true),
            MountState::Mounted => serializer.serialize_bool(false),
            MountState::ShouldEnter => serializer.serialize_str(SHOULD_ENTER),
        }
    }
}

impl<'de> Deserialize<'de> for MountState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MountVisitor;

        impl Visitor<'_> for MountVisitor {
            type Value = MountState;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a boolean or \"{}\"", SHOULD_ENTER)
            }

            fn visit_bool<E: de::Error>(self, unmounted: bool) -> Result<MountState, E> {
                Ok(if unmounted {
                    MountState::Unmounted
                } else {
                    MountState::Mounted
                })
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MountState, E> {
                if value == SHOULD_ENTER {
                    Ok(MountState::ShouldEnter)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(MountVisitor)
    }
}

/// An animation driver's override for the component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    /// Style properties set by the animation, by property name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<IndexMap<String, String>>,
    /// Skip class-based styling while the animation runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_classes: Option<bool>,
}

/// Runtime interaction state of one component instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentState {
    /// Mount lifecycle.
    pub unmounted: MountState,
    /// The component ignores pointer and press input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// A pointer is over the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<bool>,
    /// The component is pressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press: Option<bool>,
    /// A press began and has not been released.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_in: Option<bool>,
    /// The component has focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<bool>,
    /// The focus was reached by keyboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_visible: Option<bool>,
    /// Focus is on a descendant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_within: Option<bool>,
    /// Animation override, if an animation is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationState>,
    /// Observed state of named groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<IndexMap<String, GroupState>>,
    /// Descendants subscribe to this component's group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_dyn_group_children: Option<bool>,
}

impl ComponentState {
    /// The state of a component before it mounts.
    pub fn initial() -> Self {
        Self::with_mount(MountState::Unmounted)
    }

    /// The state of a component that mounts without an enter animation.
    pub fn mounted() -> Self {
        Self::with_mount(MountState::Mounted)
    }

    /// The state of a component that is about to play its enter animation.
    pub fn should_enter() -> Self {
        Self::with_mount(MountState::ShouldEnter)
    }

    fn with_mount(unmounted: MountState) -> Self {
        Self {
            unmounted,
            disabled: Some(false),
            hover: Some(false),
            press: Some(false),
            press_in: Some(false),
            focus: Some(false),
            focus_visible: Some(false),
            focus_within: Some(false),
            animation: None,
            group: None,
            has_dyn_group_children: None,
        }
    }

    /// Whether the component is fully mounted.
    pub fn is_mounted(&self) -> bool {
        self.unmounted.is_mounted()
    }

    /// Whether the component is unmounted or still waiting to enter.
    pub fn is_unmounted(&self) -> bool {
        !self.is_mounted()
    }

    /// Whether an enter animation is pending.
    pub fn should_enter_now(&self) -> bool {
        self.unmounted == MountState::ShouldEnter
    }

    /// Whether the component is disabled. Absent flags read as `false`.
    pub fn is_disabled(&self) -> bool {
        flag(self.disabled)
    }

    /// Whether a pointer is over the component.
    pub fn is_hovered(&self) -> bool {
        flag(self.hover)
    }

    /// Whether the component is pressed.
    pub fn is_pressed(&self) -> bool {
        flag(self.press)
    }

    /// Whether a press is held down.
    pub fn is_pressing_in(&self) -> bool {
        flag(self.press_in)
    }

    /// Whether the component has focus.
    pub fn is_focused(&self) -> bool {
        flag(self.focus)
    }

    /// Whether the focus came from the keyboard.
    pub fn is_focus_visible(&self) -> bool {
        flag(self.focus_visible)
    }

    /// Whether a descendant has focus.
    pub fn is_focus_within(&self) -> bool {
        flag(self.focus_within)
    }

    /// Whether descendants subscribe to this component's groups.
    pub fn has_dyn_group_children(&self) -> bool {
        flag(self.has_dyn_group_children)
    }

    /// Whether any pointer, press or focus flag is set.
    pub fn is_interacting(&self) -> bool {
        self.interaction_flags().iter().any(|(_, value)| flag(*value))
    }

    /// The flags this component publishes to its group subscribers.
    pub fn pseudo(&self) -> PseudoGroupState {
        PseudoGroupState {
            hover: Some(self.is_hovered()),
            press: Some(self.is_pressed()),
            focus: Some(self.is_focused()),
            focus_visible: Some(self.is_focus_visible()),
            focus_within: Some(self.is_focus_within()),
        }
    }

    /// The observed state of a group, if any.
    pub fn group_state(&self, name: &str) -> Option<&GroupState> {
        self.group.as_ref().and_then(|groups| groups.get(name))
    }

    /// Check the record's invariants.
    pub fn validate(&self) -> StateResult<()> {
        if self.is_unmounted() {
            if let Some((name, _)) = self.interaction_flags().into_iter().find(|(_, value)| flag(*value)) {
                return Err(StateError::inconsistent(format!(
                    "'{}' is set on an unmounted component",
                    name
                )));
            }
        }

        let has_groups = self.group.as_ref().is_some_and(|groups| !groups.is_empty());
        if has_groups && self.has_dyn_group_children == Some(false) {
            return Err(StateError::inconsistent(
                "group map is populated but hasDynGroupChildren is false",
            ));
        }

        Ok(())
    }

    pub(crate) fn clear_interaction(&mut self) -> bool {
        let mut changed = false;
        for slot in [
            &mut self.hover,
            &mut self.press,
            &mut self.press_in,
            &mut self.focus,
            &mut self.focus_visible,
            &mut self.focus_within,
        ] {
            changed |= set(slot, false);
        }
        changed
    }

    fn interaction_flags(&self) -> [(&'static str, Option<bool>); 6] {
        [
            ("hover", self.hover),
            ("press", self.press),
            ("pressIn", self.press_in),
            ("focus", self.focus),
            ("focusVisible", self.focus_visible),
            ("focusWithin", self.focus_within),
        ]
    }
}

fn flag(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Store `value`, returning whether the observable flag changed.
pub(crate) fn set(slot: &mut Option<bool>, value: bool) -> bool {
    let changed = flag(*slot) != value;
    *slot = Some(value);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_states() {
        let initial = ComponentState::initial();
        assert!(initial.is_unmounted());
        assert!(!initial.is_interacting());
        assert_eq!(initial.hover, Some(false));

        assert!(ComponentState::mounted().is_mounted());
        assert!(ComponentState::should_enter().should_enter_now());
        assert!(ComponentState::should_enter().is_unmounted());
    }

    #[test]
    fn absent_flags_read_false() {
        let state = ComponentState {
            unmounted: MountState::Mounted,
            ..Default::default()
        };
        assert!(!state.is_hovered());
        assert!(!state.is_disabled());
        assert_eq!(state.pseudo().hover, Some(false));
    }

    #[test]
    fn unmounted_with_hover_is_inconsistent() {
        let state = ComponentState {
            hover: Some(true),
            ..ComponentState::initial()
        };
        assert!(matches!(
            state.validate(),
            Err(StateError::InconsistentState { .. })
        ));
    }

    #[test]
    fn groups_without_dyn_children_are_inconsistent() {
        let mut groups = IndexMap::new();
        groups.insert("card".to_string(), GroupState::default());
        let state = ComponentState {
            group: Some(groups),
            has_dyn_group_children: Some(false),
            ..ComponentState::mounted()
        };
        assert!(state.validate().is_err());
    }

    #[test]
    fn serde_shape() {
        let state = ComponentState {
            press_in: Some(true),
            press: Some(true),
            ..ComponentState::mounted()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["unmounted"], serde_json::json!(false));
        assert_eq!(json["pressIn"], serde_json::json!(true));
        assert!(json.get("group").is_none());

        let entering: ComponentState =
            serde_json::from_str(r#"{"unmounted":"should-enter","hover":false}"#).unwrap();
        assert_eq!(entering.unmounted, MountState::ShouldEnter);
        assert_eq!(entering.focus, None);

        assert!(serde_json::from_str::<ComponentState>(r#"{"unmounted":"later"}"#).is_err());
    }
}
