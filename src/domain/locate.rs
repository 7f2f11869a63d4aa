//! Name search over a recipe tree.
//!
//! [`Comida::locate`] is the primitive: it reports `(child, parent)` match sites
//! in depth-first, left-to-right order. The traversals apply a projector to
//! every site; the mutable one hands out a [`Slot`] so the projector can edit
//! or remove the matched child.

use tracing::{instrument, trace};

use crate::domain::comida::Comida;

/// A match: the matched child and the node that directly holds it.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub child: &'a Comida,
    pub parent: &'a Comida,
}

/// Mutable access to one match site.
#[derive(Debug)]
pub struct Slot<'a> {
    parent: &'a mut Comida,
    index: usize,
}

impl<'a> Slot<'a> {
    pub fn child(&self) -> &Comida {
        &self.parent.children[self.index]
    }

    pub fn child_mut(&mut self) -> &mut Comida {
        &mut self.parent.children[self.index]
    }

    pub fn parent(&self) -> &Comida {
        self.parent
    }

    /// Position of the child among its siblings.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Detach the child from its parent.
    pub fn remove(self) -> Comida {
        self.parent.children.remove(self.index)
    }
}

/// Site address relative to the searched node: indices down to the parent,
/// then the child's index inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Location {
    parent_path: Vec<usize>,
    index: usize,
}

impl Comida {
    /// Find children named `name`.
    ///
    /// * `recursive` - descend into non-matching children that have children
    /// * `first_only` - stop scanning a node's children after its first match;
    ///   sibling branches already being searched are unaffected
    ///
    /// Matching children are never descended into.
    pub fn locate(&self, name: &str, recursive: bool, first_only: bool) -> Vec<Site<'_>> {
        let mut sites = Vec::new();
        self.collect_sites(name, recursive, first_only, &mut sites);
        sites
    }

    fn collect_sites<'a>(
        &'a self,
        name: &str,
        recursive: bool,
        first_only: bool,
        sites: &mut Vec<Site<'a>>,
    ) {
        for child in &self.children {
            if child.name == name {
                sites.push(Site {
                    child,
                    parent: self,
                });
                if first_only {
                    break;
                }
            } else if recursive && !child.is_leaf() {
                child.collect_sites(name, recursive, first_only, sites);
            }
        }
    }

    /// Apply `projector` to every `(child, parent)` site of `name` anywhere in
    /// the subtree, in discovery order.
    pub fn for_each_match<'a, R>(
        &'a self,
        name: &str,
        mut projector: impl FnMut(&'a Comida, &'a Comida) -> R,
    ) -> Vec<R> {
        self.locate(name, true, false)
            .into_iter()
            .map(|site| projector(site.child, site.parent))
            .collect()
    }

    /// Mutable counterpart of [`Comida::for_each_match`].
    ///
    /// Sites are visited last-to-first so that a projector removing its child
    /// leaves the remaining addresses valid; results are still returned in
    /// discovery order.
    #[instrument(level = "debug", skip(self, projector), fields(recipe = %self.name))]
    pub fn for_each_match_mut<R>(
        &mut self,
        name: &str,
        mut projector: impl FnMut(Slot<'_>) -> R,
    ) -> Vec<R> {
        let mut locations = Vec::new();
        self.collect_locations(name, &mut Vec::new(), &mut locations);
        trace!(matches = locations.len(), "located");

        let mut results: Vec<R> = locations
            .iter()
            .rev()
            .filter_map(|location| {
                let parent = self.node_at_mut(&location.parent_path)?;
                if location.index >= parent.children.len() {
                    return None;
                }
                Some(projector(Slot {
                    parent,
                    index: location.index,
                }))
            })
            .collect();
        results.reverse();
        results
    }

    fn collect_locations(&self, name: &str, path: &mut Vec<usize>, out: &mut Vec<Location>) {
        for (index, child) in self.children.iter().enumerate() {
            if child.name == name {
                out.push(Location {
                    parent_path: path.clone(),
                    index,
                });
            } else if !child.is_leaf() {
                path.push(index);
                child.collect_locations(name, path, out);
                path.pop();
            }
        }
    }

    fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Comida> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Items;

    // r
    // ├── a
    // │   └── x
    // ├── x
    // └── b
    //     └── c
    //         └── x
    fn fixture() -> Comida {
        let a = Comida::with_items("a", "x");
        let b = Comida::with_items("b", Comida::with_items("c", "x"));
        Comida::with_items("r", Items::new().push(a).push("x").push(b))
    }

    #[test]
    fn test_collect_locations_records_paths_in_discovery_order() {
        let mut out = Vec::new();
        fixture().collect_locations("x", &mut Vec::new(), &mut out);
        assert_eq!(
            out,
            vec![
                Location { parent_path: vec![0], index: 0 },
                Location { parent_path: vec![], index: 1 },
                Location { parent_path: vec![2, 0], index: 0 },
            ]
        );
    }

    #[test]
    fn test_node_at_mut_follows_path() {
        let mut root = fixture();
        assert_eq!(root.node_at_mut(&[2, 0]).map(|n| n.name.clone()), Some("c".to_string()));
        assert!(root.node_at_mut(&[1, 0]).is_none());
        assert_eq!(root.node_at_mut(&[]).map(|n| n.name.clone()), Some("r".to_string()));
    }
}
