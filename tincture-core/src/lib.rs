#![warn(missing_docs)]

//! Component interaction state for tincture.
//!
//! A [state::ComponentState] records whether a component is mounted and which
//! pointer, press and focus flags are set. Interaction handlers write to it
//! with [event::InteractionEvent]s, usually through a [store::StateStore],
//! and rendering reads it back with [resolve::resolve_surface].

/// Contains the [error::StateError] type.
pub mod error;
/// Contains [event::InteractionEvent] and the state transitions.
pub mod event;
/// Contains group state shared between components.
pub mod group;
/// Contains style resolution from state and theme.
pub mod resolve;
/// Contains the [state::ComponentState] record.
pub mod state;
/// Contains the [store::StateStore] and component identifiers.
pub mod store;

pub use error::{StateError, StateResult};
pub use event::InteractionEvent;
pub use group::{GroupPseudo, GroupState, PseudoGroupState};
pub use resolve::{resolve_group_surface, resolve_surface, Interaction, Surface, SurfaceTokens};
pub use state::{AnimationState, ComponentState, MountState};
pub use store::{ComponentId, MountOptions, StateStore};
