//! Parallel style resolution over an element tree.
//!
//! Parents must be styled before children (inheritance), so elements are grouped into
//! waves by depth and each wave runs in parallel on the engine's pool. The root of each
//! tree resolves in the first wave; `rem` lengths below it use its computed font size.

use crate::{CascadeInput, StyleConfig, StyleEnvironment, resolve_style};
use anyhow::{Context as _, Result, bail};
use css_cascade::{ComputedStyle, StyleSnapshot as _};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use tracing::info_span;

/// Opaque element identity supplied by the caller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeKey(pub u64);

/// Computed styles by element.
pub type StyleMap = HashMap<NodeKey, ComputedStyle>;

/// One element and the declarations that won for it.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledElement {
    pub key: NodeKey,
    pub parent: Option<NodeKey>,
    pub input: CascadeInput,
}

/// An element together with the root of the tree it belongs to.
#[derive(Copy, Clone)]
struct Placed<'tree> {
    element: &'tree StyledElement,
    root: NodeKey,
}

impl Placed<'_> {
    /// The environment this element resolves in. The root itself sees the configured
    /// root font size; everything below it sees the root's computed `font-size`.
    fn environment(&self, base: &StyleEnvironment, styles: &StyleMap) -> StyleEnvironment {
        if self.element.parent.is_none() {
            return *base;
        }
        styles.get(&self.root).map_or(*base, |root| StyleEnvironment {
            root_font_size_px: root.font_size_px(),
            ..*base
        })
    }

    fn resolve(&self, base: &StyleEnvironment, styles: &StyleMap) -> ComputedStyle {
        let parent = self.element.parent.and_then(|key| styles.get(&key));
        resolve_style(&self.element.input, parent, &self.environment(base, styles))
    }
}

/// Elements in any order; parent links define the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementTree {
    elements: Vec<StyledElement>,
}

impl ElementTree {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: NodeKey, parent: Option<NodeKey>, input: CascadeInput) {
        self.elements.push(StyledElement { key, parent, input });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Group elements by depth.
    ///
    /// # Errors
    /// Fails on duplicate keys, parents that are not in the tree, and parent cycles.
    fn waves(&self) -> Result<Vec<Vec<Placed<'_>>>> {
        let mut by_key: HashMap<NodeKey, &StyledElement> = HashMap::with_capacity(self.len());
        for element in &self.elements {
            if by_key.insert(element.key, element).is_some() {
                bail!("duplicate element key {:?}", element.key);
            }
        }
        let mut by_depth: BTreeMap<usize, Vec<Placed<'_>>> = BTreeMap::new();
        for element in &self.elements {
            let (depth, root) = depth_of(element, &by_key)?;
            by_depth
                .entry(depth)
                .or_default()
                .push(Placed { element, root });
        }
        Ok(by_depth.into_values().collect())
    }
}

/// Number of ancestors of `element`, and the key of its outermost ancestor.
fn depth_of(
    element: &StyledElement,
    by_key: &HashMap<NodeKey, &StyledElement>,
) -> Result<(usize, NodeKey)> {
    let mut depth = 0;
    let mut current = element;
    while let Some(parent_key) = current.parent {
        let Some(parent) = by_key.get(&parent_key) else {
            bail!(
                "element {:?} names missing parent {parent_key:?}",
                current.key
            );
        };
        depth += 1;
        if depth > by_key.len() {
            bail!("parent cycle through element {:?}", element.key);
        }
        current = parent;
    }
    Ok((depth, current.key))
}

/// Resolves element trees on a dedicated rayon pool.
pub struct StyleEngine {
    config: StyleConfig,
    pool: rayon::ThreadPool,
}

impl StyleEngine {
    /// Create an engine and its thread pool.
    ///
    /// # Errors
    /// Returns an error if the thread pool cannot be created.
    pub fn new(config: StyleConfig) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count())
            .thread_name(|index| format!("style-{index}"))
            .build()
            .context("building style thread pool")?;
        log::debug!("style engine using {} threads", pool.current_num_threads());
        Ok(Self { config, pool })
    }

    /// Resolve every element of `tree`.
    ///
    /// # Errors
    /// Fails on duplicate keys, missing parents and parent cycles; nothing is resolved then.
    pub fn resolve_tree(&self, tree: &ElementTree) -> Result<StyleMap> {
        let _span = info_span!("style.resolve_tree", elements = tree.len()).entered();
        let waves = tree.waves()?;
        let environment = self.config.environment();
        let mut styles = StyleMap::with_capacity(tree.len());
        for wave in waves {
            let resolved: Vec<(NodeKey, ComputedStyle)> = self.pool.install(|| {
                wave.par_iter()
                    .map(|placed| (placed.element.key, placed.resolve(&environment, &styles)))
                    .collect()
            });
            styles.extend(resolved);
        }
        Ok(styles)
    }

    /// Resolve a tree on the calling thread, in the same wave order.
    ///
    /// # Errors
    /// Same as [`Self::resolve_tree`].
    pub fn resolve_tree_serial(&self, tree: &ElementTree) -> Result<StyleMap> {
        let environment = self.config.environment();
        let mut styles = StyleMap::with_capacity(tree.len());
        for wave in tree.waves()? {
            for placed in wave {
                let style = placed.resolve(&environment, &styles);
                styles.insert(placed.element.key, style);
            }
        }
        Ok(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_properties::RuntimeFeatures;

    fn engine() -> Result<StyleEngine> {
        StyleEngine::new(StyleConfig::new(
            Some(2),
            RuntimeFeatures::empty(),
            16.0,
            None,
        ))
    }

    fn rejected(engine: &StyleEngine, tree: &ElementTree, reason: &str) -> bool {
        engine
            .resolve_tree(tree)
            .err()
            .is_some_and(|error| error.to_string().contains(reason))
    }

    /// # Errors
    /// Returns an error if the pool cannot be built.
    ///
    /// # Panics
    /// Panics if malformed trees are accepted.
    #[test]
    fn malformed_trees_are_rejected() -> Result<()> {
        let engine = engine()?;

        let mut duplicate = ElementTree::new();
        duplicate.push(NodeKey(1), None, CascadeInput::default());
        duplicate.push(NodeKey(1), None, CascadeInput::default());
        assert!(rejected(&engine, &duplicate, "duplicate"));

        let mut orphan = ElementTree::new();
        orphan.push(NodeKey(2), Some(NodeKey(9)), CascadeInput::default());
        assert!(rejected(&engine, &orphan, "missing parent"));

        let mut cycle = ElementTree::new();
        cycle.push(NodeKey(3), Some(NodeKey(4)), CascadeInput::default());
        cycle.push(NodeKey(4), Some(NodeKey(3)), CascadeInput::default());
        assert!(rejected(&engine, &cycle, "cycle"));
        Ok(())
    }

    /// # Errors
    /// Returns an error if the pool cannot be built or the tree fails to resolve.
    #[test]
    fn empty_tree() -> Result<()> {
        let styles = engine()?.resolve_tree(&ElementTree::new())?;
        assert!(styles.is_empty());
        Ok(())
    }
}
