//! Built-in projectors for the name traversals.
//!
//! Read-only projectors have the `(child, parent) -> R` shape expected by
//! [`Comida::for_each_match`]; [`remove_child`] takes a [`Slot`] and is meant
//! for [`Comida::for_each_match_mut`]. Any function or closure with the same
//! shape can be used in their place.

use std::fmt;

use crate::domain::comida::Comida;
use crate::domain::locate::Slot;

pub fn return_parent<'a>(_child: &'a Comida, parent: &'a Comida) -> &'a Comida {
    parent
}

pub fn return_child<'a>(child: &'a Comida, _parent: &'a Comida) -> &'a Comida {
    child
}

pub fn return_parent_name<'a>(_child: &'a Comida, parent: &'a Comida) -> &'a str {
    parent.name()
}

pub fn return_child_name<'a>(child: &'a Comida, _parent: &'a Comida) -> &'a str {
    child.name()
}

/// The matched child's own quantity; callers sum these.
pub fn sum_quantities(child: &Comida, _parent: &Comida) -> f64 {
    child.quantity()
}

/// Detach the matched child from its parent and hand it back.
pub fn remove_child(slot: Slot<'_>) -> Comida {
    slot.remove()
}

/// The built-in projector kinds, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    ReturnParent,
    ReturnChild,
    ReturnParentName,
    ReturnChildName,
    SumQuantities,
    RemoveChild,
}

impl Projection {
    pub const ALL: [Projection; 6] = [
        Projection::ReturnParent,
        Projection::ReturnChild,
        Projection::ReturnParentName,
        Projection::ReturnChildName,
        Projection::SumQuantities,
        Projection::RemoveChild,
    ];

    /// Whether applying this projection edits the tree.
    pub fn is_mutating(self) -> bool {
        matches!(self, Projection::RemoveChild)
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Projection::ReturnParent => "parent",
            Projection::ReturnChild => "child",
            Projection::ReturnParentName => "parent-name",
            Projection::ReturnChildName => "child-name",
            Projection::SumQuantities => "quantity",
            Projection::RemoveChild => "remove",
        };
        f.write_str(label)
    }
}

/// Owned result of a runtime-selected [`Projection`].
#[derive(Debug, Clone, PartialEq)]
pub enum Projected {
    Node(Comida),
    Name(String),
    Quantity(f64),
    Removed(Comida),
}

impl fmt::Display for Projected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projected::Node(node) => write!(f, "{}", node),
            Projected::Name(name) => f.write_str(name),
            Projected::Quantity(quantity) => write!(f, "{:?}", quantity),
            Projected::Removed(node) => write!(f, "removed {:?} {}", node.quantity(), node.name()),
        }
    }
}

impl Comida {
    /// Run a built-in projection over every occurrence of `name`.
    ///
    /// Borrowed results are cloned into [`Projected`]; only
    /// [`Projection::RemoveChild`] changes `self`.
    pub fn project(&mut self, name: &str, projection: Projection) -> Vec<Projected> {
        match projection {
            Projection::ReturnParent => self
                .for_each_match(name, return_parent)
                .into_iter()
                .cloned()
                .map(Projected::Node)
                .collect(),
            Projection::ReturnChild => self
                .for_each_match(name, return_child)
                .into_iter()
                .cloned()
                .map(Projected::Node)
                .collect(),
            Projection::ReturnParentName => self
                .for_each_match(name, return_parent_name)
                .into_iter()
                .map(|n| Projected::Name(n.to_string()))
                .collect(),
            Projection::ReturnChildName => self
                .for_each_match(name, return_child_name)
                .into_iter()
                .map(|n| Projected::Name(n.to_string()))
                .collect(),
            Projection::SumQuantities => self
                .for_each_match(name, sum_quantities)
                .into_iter()
                .map(Projected::Quantity)
                .collect(),
            Projection::RemoveChild => self
                .for_each_match_mut(name, remove_child)
                .into_iter()
                .map(Projected::Removed)
                .collect(),
        }
    }

    /// Sum of the quantities of every `name` in the subtree.
    pub fn total_quantity(&self, name: &str) -> f64 {
        self.for_each_match(name, sum_quantities).into_iter().sum()
    }

    /// Names of the nodes that directly hold `name`, one per occurrence.
    pub fn parents_of(&self, name: &str) -> Vec<&str> {
        self.for_each_match(name, return_parent_name)
    }

    /// Remove every `name` in the subtree and return the removed nodes.
    pub fn remove_all(&mut self, name: &str) -> Vec<Comida> {
        self.for_each_match_mut(name, remove_child)
    }
}
