//! # Group State
//!
//! A group lets descendants style themselves off an ancestor's interaction
//! state ("when the card is hovered, tint the title"). The owner publishes
//! its pseudo state under the group name, and every subscriber observes it
//! in its own `group` map.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The pseudo flags a group owner shares with its subscribers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudoGroupState {
    /// The owner is hovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<bool>,
    /// The owner is pressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press: Option<bool>,
    /// The owner has focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<bool>,
    /// The owner has keyboard-visible focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_visible: Option<bool>,
    /// Focus is somewhere inside the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_within: Option<bool>,
}

impl PseudoGroupState {
    /// Whether the given pseudo flag is set.
    pub fn get(&self, pseudo: GroupPseudo) -> bool {
        let flag = match pseudo {
            GroupPseudo::Hover => self.hover,
            GroupPseudo::Press => self.press,
            GroupPseudo::Focus => self.focus,
            GroupPseudo::FocusVisible => self.focus_visible,
            GroupPseudo::FocusWithin => self.focus_within,
        };
        flag.unwrap_or(false)
    }
}

/// Interaction state observed for one named group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    /// The owner's pseudo flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<PseudoGroupState>,
    /// Media-query matches published for the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<IndexMap<String, bool>>,
}

impl GroupState {
    /// A group state carrying only pseudo flags.
    pub fn from_pseudo(pseudo: PseudoGroupState) -> Self {
        Self {
            pseudo: Some(pseudo),
            media: None,
        }
    }

    /// Whether the owner currently has the given pseudo flag.
    pub fn is_active(&self, pseudo: GroupPseudo) -> bool {
        self.pseudo.is_some_and(|state| state.get(pseudo))
    }

    /// Whether a media key matched. Absent keys are unmatched.
    pub fn media_matches(&self, key: &str) -> bool {
        self.media
            .as_ref()
            .and_then(|media| media.get(key).copied())
            .unwrap_or(false)
    }

    /// Set a media flag.
    pub fn with_media(mut self, key: impl Into<String>, matches: bool) -> Self {
        self.media.get_or_insert_with(IndexMap::new).insert(key.into(), matches);
        self
    }
}

/// A pseudo flag that group-based styles can select on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupPseudo {
    /// `hover`
    Hover,
    /// `press`
    Press,
    /// `focus`
    Focus,
    /// `focusVisible`
    FocusVisible,
    /// `focusWithin`
    FocusWithin,
}

impl GroupPseudo {
    /// Every pseudo flag.
    pub const ALL: [GroupPseudo; 5] = [
        GroupPseudo::Hover,
        GroupPseudo::Press,
        GroupPseudo::Focus,
        GroupPseudo::FocusVisible,
        GroupPseudo::FocusWithin,
    ];

    /// The style-prop spelling of the flag.
    pub fn as_str(self) -> &'static str {
        match self {
            GroupPseudo::Hover => "hover",
            GroupPseudo::Press => "press",
            GroupPseudo::Focus => "focus",
            GroupPseudo::FocusVisible => "focusVisible",
            GroupPseudo::FocusWithin => "focusWithin",
        }
    }

    /// Parse `hover`, `focusVisible`, `focus_visible` and the like.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|pseudo| {
            pseudo.as_str() == name || pseudo.as_str().eq_ignore_ascii_case(&name.replace('_', ""))
        })
    }
}

impl Display for GroupPseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
