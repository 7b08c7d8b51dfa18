//! Static model produced by the compiler.
//!
//! The model is the complete handoff to the execution engine: concepts
//! describe object templates, actuators are the rewriting rules applied in
//! declaration order, and worlds are initial-state recipes.
//!
//! All types are plain values. Nothing here validates cross-references; a
//! rule may mention a tag or slot no concept declares.

use std::fmt;

use sepro_foundation::LabelSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Concepts
// =============================================================================

/// An object template: a name plus its tags and slots.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Concept {
    /// Concept name (case-sensitive)
    pub name: String,
    /// Boolean labels set on new instances
    pub tags: LabelSet,
    /// Named link endpoints
    pub slots: LabelSet,
}

impl Concept {
    /// Creates a concept with no tags or slots.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: LabelSet::new(),
            slots: LabelSet::new(),
        }
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// A condition on an object's tags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Predicate {
    /// Trivially true: `ALL` or `ANY`.
    Any,
    /// Presence (or absence) of tags.
    TagSet(TagSetPredicate),
}

impl Predicate {
    /// Returns true for the wildcard predicate.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns the tag predicate, if this is one.
    #[must_use]
    pub const fn as_tag_set(&self) -> Option<&TagSetPredicate> {
        match self {
            Self::TagSet(p) => Some(p),
            Self::Any => None,
        }
    }
}

/// Tests that all `tags` are present, or with `is_negated` that they are absent.
///
/// With a `slot`, the test applies to the object linked through that slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagSetPredicate {
    /// Tags in source order, without duplicates
    pub tags: Vec<String>,
    /// `NOT` was given
    pub is_negated: bool,
    /// Slot the tested object is reached through
    pub slot: Option<String>,
}

impl TagSetPredicate {
    /// Creates a positive predicate on a single tag.
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tags: vec![tag.into()],
            is_negated: false,
            slot: None,
        }
    }

    /// Returns the negated form of this predicate.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.is_negated = !self.is_negated;
        self
    }

    /// Returns this predicate tested through `slot`.
    #[must_use]
    pub fn in_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Which object an action or binding target refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectContextType {
    /// The object the rule matched.
    #[default]
    This,
    /// The world's designated root object.
    Root,
    /// The interaction partner.
    Other,
}

impl fmt::Display for ObjectContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::This => "this",
            Self::Root => "root",
            Self::Other => "other",
        })
    }
}

/// An effect applied when an actuator fires.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Explicit no-op: `NOTHING`.
    Nothing,
    /// `SET` or `UNSET` tags.
    Tags(TagsAction),
    /// `BIND` a slot to another object.
    Bind(BindAction),
}

/// Sets or unsets tags on the addressed object.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagsAction {
    /// Tags in source order
    pub tags: Vec<String>,
    /// `UNSET` rather than `SET`
    pub is_unset: bool,
    /// Object the tags are changed on
    pub in_context: ObjectContextType,
    /// Slot followed from the context object
    pub in_slot: Option<String>,
}

/// Points `source_slot` of the addressed object at the target object.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BindAction {
    /// Slot being rebound
    pub source_slot: String,
    /// Context of the target object
    pub target_context: ObjectContextType,
    /// Slot followed from the target context
    pub target_slot: Option<String>,
    /// Object owning `source_slot`
    pub in_context: ObjectContextType,
    /// Slot followed from `in_context`
    pub in_slot: Option<String>,
}

// =============================================================================
// Actuators
// =============================================================================

/// A rule: conditions, an optional interaction partner, and actions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Actuator {
    /// Matches only the world's root object
    pub is_root: bool,
    /// Conditions on the matched object; never empty
    pub conditions: Vec<Predicate>,
    /// Conditions on the interaction partner; `None` without an `ON` clause
    pub other_conditions: Option<Vec<Predicate>>,
    /// Effects in source order; never empty
    pub actions: Vec<Action>,
}

impl Actuator {
    /// Returns true if the rule has an `ON` clause.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.other_conditions.is_some()
    }
}

// =============================================================================
// Worlds
// =============================================================================

/// An object instance created when a world is initialized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldObject {
    /// Concept to instantiate
    pub concept_name: String,
    /// Name other clauses refer to the instance by
    pub alias: Option<String>,
}

/// An `alias.slotName` reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotPath {
    /// Object alias
    pub object: String,
    /// Slot on that object
    pub slot: String,
}

impl SlotPath {
    /// Creates a path.
    #[must_use]
    pub fn new(object: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            slot: slot.into(),
        }
    }
}

impl fmt::Display for SlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object, self.slot)
    }
}

/// Links the slot at `from` to the object at `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldBinding {
    /// Slot being set
    pub from: SlotPath,
    /// Slot path naming the target
    pub to: SlotPath,
}

/// A named initial-state recipe.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    /// World name
    pub name: String,
    /// Alias or concept of the root object
    pub root_name: Option<String>,
    /// Instances in source order
    pub objects: Vec<WorldObject>,
    /// Bindings in source order
    pub bindings: Vec<WorldBinding>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Model
// =============================================================================

/// Everything declared in one source text, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model {
    /// Concepts in source order
    pub concepts: Vec<Concept>,
    /// Actuators in source order (the order the engine applies them)
    pub actuators: Vec<Actuator>,
    /// Worlds in source order
    pub worlds: Vec<World>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty() && self.actuators.is_empty() && self.worlds.is_empty()
    }

    /// Looks up a concept by exact, case-sensitive name.
    ///
    /// With duplicate declarations the first one wins.
    #[must_use]
    pub fn get_concept(&self, name: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.name == name)
    }

    /// Looks up a world by exact, case-sensitive name.
    #[must_use]
    pub fn get_world(&self, name: &str) -> Option<&World> {
        self.worlds.iter().find(|w| w.name == name)
    }
}
