//! The recipe node: a named quantity holding an ordered list of sub-recipes.
//!
//! A leaf ingredient and a composed recipe are the same type; leafness is only
//! "no children". Children are owned by their parent, so every clone is deep and
//! no subtree is ever reachable from two parents.

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Quantity of a freshly created node.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// One element handed to [`Comida::add_into`].
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Bare ingredient name, merged into an existing child of the same name.
    Name(String),
    /// Complete node, appended as a new child without merging.
    Node(Comida),
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Item::Name(name.to_string())
    }
}

impl From<String> for Item {
    fn from(name: String) -> Self {
        Item::Name(name)
    }
}

impl From<&String> for Item {
    fn from(name: &String) -> Self {
        Item::Name(name.clone())
    }
}

impl From<Comida> for Item {
    fn from(node: Comida) -> Self {
        Item::Node(node)
    }
}

/// A single item or an ordered sequence of items.
///
/// Mixed sequences are built with [`Items::push`]:
/// ```
/// use comida::{Comida, Items};
/// let items = Items::new().push(Comida::new("massa")).push("queijo");
/// let pizza = Comida::with_items("pizza", items);
/// assert_eq!(pizza.children().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items(Vec<Item>);

impl Items {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(mut self, item: impl Into<Item>) -> Self {
        self.0.push(item.into());
        self
    }
}

impl IntoIterator for Items {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Item> for Items {
    fn from(item: Item) -> Self {
        Self(vec![item])
    }
}

impl From<&str> for Items {
    fn from(name: &str) -> Self {
        Item::from(name).into()
    }
}

impl From<String> for Items {
    fn from(name: String) -> Self {
        Item::from(name).into()
    }
}

impl From<Comida> for Items {
    fn from(node: Comida) -> Self {
        Item::from(node).into()
    }
}

impl<T: Into<Item>> From<Vec<T>> for Items {
    fn from(items: Vec<T>) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Item>, const N: usize> From<[T; N]> for Items {
    fn from(items: [T; N]) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

/// What [`Comida::decrement_or_remove`] should act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target<'a> {
    /// First direct child with this name.
    Name(&'a str),
    /// First direct child structurally equal to this node.
    Node(&'a Comida),
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(name: &'a str) -> Self {
        Target::Name(name)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(name: &'a String) -> Self {
        Target::Name(name.as_str())
    }
}

impl<'a> From<&'a Comida> for Target<'a> {
    fn from(node: &'a Comida) -> Self {
        Target::Node(node)
    }
}

/// Recipe node: name, quantity and owned sub-ingredients.
#[derive(Debug, Clone)]
pub struct Comida {
    pub(crate) name: String,
    pub(crate) quantity: f64,
    pub(crate) children: Vec<Comida>,
}

impl Comida {
    /// Create a leaf with quantity 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: DEFAULT_QUANTITY,
            children: Vec::new(),
        }
    }

    /// Create a node and merge the initial items into it.
    pub fn with_items(name: impl Into<String>, items: impl Into<Items>) -> Self {
        let mut node = Self::new(name);
        node.add_into(items);
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn children(&self) -> &[Comida] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Merge items into the direct children.
    ///
    /// A bare name that matches an existing child bumps that child's quantity
    /// by one; an unknown name becomes a new leaf. Nodes are always appended,
    /// even if a sibling carries the same name.
    #[instrument(level = "trace", skip(self, items), fields(recipe = %self.name))]
    pub fn add_into(&mut self, items: impl Into<Items>) -> &mut Self {
        for item in items.into() {
            match item {
                Item::Name(name) => {
                    if let Some(existing) = self.get_child_by_name_mut(&name) {
                        let bumped = existing.quantity + 1.0;
                        existing.set_quantity(bumped);
                        trace!(ingredient = %name, quantity = bumped, "merged");
                    } else {
                        trace!(ingredient = %name, "added");
                        self.children.push(Comida::new(name));
                    }
                }
                Item::Node(node) => {
                    trace!(ingredient = %node.name, "appended");
                    self.children.push(node);
                }
            }
        }
        self
    }

    /// Set the quantity, rescaling the whole subtree by the same ratio.
    ///
    /// Non-positive (and NaN) values are ignored without error. After a write
    /// the node's own quantity is exactly `value`.
    pub fn set_quantity(&mut self, value: f64) -> &mut Self {
        if value > 0.0 {
            let ratio = value / self.quantity;
            for child in &mut self.children {
                child.scale_tree(ratio);
            }
            self.quantity = value;
        } else {
            debug!(name = %self.name, value, "ignoring non-positive quantity");
        }
        self
    }

    /// Like [`Comida::set_quantity`] but rejects non-positive or non-finite values.
    pub fn try_set_quantity(&mut self, value: f64) -> DomainResult<&mut Self> {
        if !(value > 0.0 && value.is_finite()) {
            return Err(DomainError::InvalidQuantity {
                name: self.name.clone(),
                value,
            });
        }
        Ok(self.set_quantity(value))
    }

    /// Multiply this node and every descendant by `factor`.
    ///
    /// The factor is not validated: zero or negative factors produce
    /// non-positive quantities. Use [`Comida::try_scale_into`] to reject them.
    #[instrument(level = "debug", skip(self), fields(name = %self.name))]
    pub fn scale_into(&mut self, factor: f64) -> &mut Self {
        self.scale_tree(factor);
        self
    }

    /// Scale by the reciprocal of `divisor`.
    pub fn divide_into(&mut self, divisor: f64) -> &mut Self {
        self.scale_into(1.0 / divisor)
    }

    pub fn try_scale_into(&mut self, factor: f64) -> DomainResult<&mut Self> {
        check_factor(factor)?;
        Ok(self.scale_into(factor))
    }

    pub fn try_divide_into(&mut self, divisor: f64) -> DomainResult<&mut Self> {
        check_factor(divisor)?;
        let factor = 1.0 / divisor;
        check_factor(factor)?;
        Ok(self.scale_into(factor))
    }

    fn scale_tree(&mut self, factor: f64) {
        self.quantity *= factor;
        for child in &mut self.children {
            child.scale_tree(factor);
        }
    }

    /// First direct child named `name`.
    pub fn get_child_by_name(&self, name: &str) -> Option<&Comida> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn get_child_by_name_mut(&mut self, name: &str) -> Option<&mut Comida> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// True if `name` occurs anywhere below this node.
    pub fn contains(&self, name: &str) -> bool {
        !self.locate(name, true, true).is_empty()
    }

    /// Drop the first direct child named `name`, whatever its quantity.
    pub fn remove_by_name(&mut self, name: &str) -> &mut Self {
        if let Some(pos) = self.position_of(name) {
            let removed = self.children.remove(pos);
            trace!(recipe = %self.name, ingredient = %removed.name, "removed");
        }
        self
    }

    /// Take one unit of a direct child away, dropping it once one unit or
    /// less is left. Unknown targets are ignored.
    #[instrument(level = "trace", skip(self, target), fields(recipe = %self.name))]
    pub fn decrement_or_remove<'a>(&mut self, target: impl Into<Target<'a>>) -> &mut Self {
        let position = match target.into() {
            Target::Name(name) => self.position_of(name),
            Target::Node(node) => self.children.iter().position(|c| c == node),
        };
        if let Some(pos) = position {
            let child = &mut self.children[pos];
            if child.quantity > 1.0 {
                let lowered = child.quantity - 1.0;
                child.set_quantity(lowered);
                trace!(ingredient = %child.name, quantity = lowered, "decremented");
            } else {
                let removed = self.children.remove(pos);
                trace!(ingredient = %removed.name, "removed");
            }
        }
        self
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|c| c.name == name)
    }
}

fn check_factor(factor: f64) -> DomainResult<()> {
    if factor > 0.0 && factor.is_finite() {
        Ok(())
    } else {
        Err(DomainError::InvalidFactor(factor))
    }
}

/// Structural equality: same name, exactly the same quantity, and the same
/// children once both sides are sorted by name. Sibling order is ignored.
impl PartialEq for Comida {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name
            || self.quantity != other.quantity
            || self.children.len() != other.children.len()
        {
            return false;
        }
        let by_name = |a: &&Comida, b: &&Comida| a.name.cmp(&b.name);
        self.children
            .iter()
            .sorted_by(by_name)
            .zip(other.children.iter().sorted_by(by_name))
            .all(|(mine, theirs)| mine == theirs)
    }
}
