use crate::state::{set, AnimationState, ComponentState, MountState};

/// Something that happened to a component instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    /// The component mounted without an enter animation.
    Mount,
    /// The component is about to play its enter animation.
    BeginEnter,
    /// The enter animation finished.
    EnterComplete,
    /// The component is going away.
    Unmount,
    /// A pointer moved over the component.
    PointerEnter,
    /// The pointer left the component.
    PointerLeave,
    /// A press started.
    PressIn,
    /// A press was released or cancelled.
    PressOut,
    /// A press completed.
    Press,
    /// The component received focus.
    Focus {
        /// Focus came from the keyboard.
        visible: bool,
    },
    /// The component lost focus.
    Blur,
    /// Focus entered or left a descendant.
    FocusWithin(bool),
    /// The component became disabled or enabled.
    SetDisabled(bool),
    /// An animation started driving the component.
    Animate(AnimationState),
    /// The running animation finished.
    ClearAnimation,
}

impl InteractionEvent {
    /// Events that still apply while the component is unmounted.
    pub fn applies_while_unmounted(&self) -> bool {
        matches!(
            self,
            InteractionEvent::Mount
                | InteractionEvent::BeginEnter
                | InteractionEvent::EnterComplete
                | InteractionEvent::Unmount
                | InteractionEvent::SetDisabled(_)
                | InteractionEvent::Animate(_)
                | InteractionEvent::ClearAnimation
        )
    }

    /// Pointer and press events, which a disabled component ignores.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            InteractionEvent::PointerEnter
                | InteractionEvent::PointerLeave
                | InteractionEvent::PressIn
                | InteractionEvent::PressOut
                | InteractionEvent::Press
        )
    }
}

impl ComponentState {
    /// Apply an event. Returns whether the state changed.
    pub fn apply(&mut self, event: InteractionEvent) -> bool {
        if self.is_unmounted() && !event.applies_while_unmounted() {
            log::trace!("Ignoring {:?} on unmounted component", event);
            return false;
        }
        if self.is_disabled() && event.is_pointer() {
            log::trace!("Ignoring {:?} on disabled component", event);
            return false;
        }

        let changed = match event {
            InteractionEvent::Mount => self.set_mount(MountState::Mounted),
            InteractionEvent::BeginEnter => {
                self.unmounted == MountState::Unmounted && self.set_mount(MountState::ShouldEnter)
            },
            InteractionEvent::EnterComplete => {
                self.unmounted == MountState::ShouldEnter && self.set_mount(MountState::Mounted)
            },
            InteractionEvent::Unmount => {
                let mount = self.set_mount(MountState::Unmounted);
                self.clear_interaction() | mount
            },
            InteractionEvent::PointerEnter => set(&mut self.hover, true),
            InteractionEvent::PointerLeave => {
                set(&mut self.hover, false) | set(&mut self.press, false)
            },
            InteractionEvent::PressIn => set(&mut self.press, true) | set(&mut self.press_in, true),
            InteractionEvent::PressOut | InteractionEvent::Press => {
                set(&mut self.press, false) | set(&mut self.press_in, false)
            },
            InteractionEvent::Focus { visible } => {
                set(&mut self.focus, true) | set(&mut self.focus_visible, visible)
            },
            InteractionEvent::Blur => {
                set(&mut self.focus, false) | set(&mut self.focus_visible, false)
            },
            InteractionEvent::FocusWithin(within) => set(&mut self.focus_within, within),
            InteractionEvent::SetDisabled(disabled) => {
                let mut changed = set(&mut self.disabled, disabled);
                if disabled {
                    changed |= set(&mut self.hover, false);
                    changed |= set(&mut self.press, false);
                    changed |= set(&mut self.press_in, false);
                }
                changed
            },
            InteractionEvent::Animate(animation) => {
                let changed = self.animation.as_ref() != Some(&animation);
                self.animation = Some(animation);
                changed
            },
            InteractionEvent::ClearAnimation => self.animation.take().is_some(),
        };

        if changed {
            log::trace!("Component state is now {:?}", self);
        }
        changed
    }

    fn set_mount(&mut self, mount: MountState) -> bool {
        let changed = self.unmounted != mount;
        self.unmounted = mount;
        changed
    }
}
