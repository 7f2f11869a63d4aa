//! Textual views of a recipe tree.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use termtree::Tree;

use crate::domain::comida::Comida;

/// Formatting knobs for [`Comida::render_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix repeated once per depth level
    pub indent: String,
    /// Fixed number of decimals; `None` prints the shortest exact form (`1.0`, `0.5`)
    pub precision: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            precision: None,
        }
    }
}

fn format_quantity(quantity: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, quantity),
        None => format!("{:?}", quantity),
    }
}

/// Nested quantities keyed by ingredient name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Contents {
    /// Leaf ingredient
    Quantity(f64),
    /// Recipe with its own ingredients
    Group(BTreeMap<String, Contents>),
}

impl Comida {
    /// One `<quantity> <name>` line per node, depth-first, children indented
    /// one level deeper than their parent.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        for (depth, node) in self.iter() {
            out.push_str(&options.indent.repeat(depth));
            out.push_str(&format_quantity(node.quantity, options.precision));
            out.push(' ');
            out.push_str(&node.name);
            out.push('\n');
        }
        out
    }

    /// Pre-order walk yielding `(depth, node)`, starting with `(0, self)`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![(0, self)],
        }
    }

    /// Number of levels, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// All leaf ingredients in pre-order; a leaf node yields itself.
    pub fn leaf_nodes(&self) -> Vec<&Comida> {
        self.iter()
            .map(|(_, node)| node)
            .filter(|node| node.is_leaf())
            .collect()
    }

    pub fn to_tree(&self) -> Tree<String> {
        let label = format!("{} {}", format_quantity(self.quantity, None), self.name);
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree()).collect();
        Tree::new(label).with_leaves(leaves)
    }

    /// Map of the direct children: leaves map to their quantity, recipes to
    /// their own contents. Later siblings win on duplicate names.
    pub fn contents(&self) -> BTreeMap<String, Contents> {
        self.children
            .iter()
            .map(|child| {
                let value = if child.is_leaf() {
                    Contents::Quantity(child.quantity)
                } else {
                    Contents::Group(child.contents())
                };
                (child.name.clone(), value)
            })
            .collect()
    }
}

impl fmt::Display for Comida {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderOptions::default()))
    }
}

pub struct Iter<'a> {
    stack: Vec<(usize, &'a Comida)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Comida);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}
