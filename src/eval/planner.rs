//! Pruned category search over a dependency graph of hand categories.
//!
//! An edge `A -> B` means every hand containing `B` also contains `A`, so
//! `B` can only be reached by adding structure to `A`. Each node knows the
//! strongest category in its subtree; once the best score found so far is at
//! least that strong, the node and everything below it are skipped.
//!
//! ```text
//! HighCard ─┬─► Pair ─┬─► TwoPair ──────► FullHouse
//!           │         └─► ThreeOfAKind ─┬─► FullHouse
//!           │                           └─► FourOfAKind
//!           ├─► Straight ─► StraightFlush ─► RoyalFlush
//!           └─► Flush ────► StraightFlush
//! ```

use std::sync::OnceLock;

use super::category::{HandCategory, NUM_CATEGORIES};
use super::detect::find_hand;
use super::score::Score;
use crate::cards::Card;

/// Children of each category, indexed like [`HandCategory::ALL`].
const EDGES: [&[HandCategory]; NUM_CATEGORIES] = [
    // HighCard
    &[HandCategory::Pair, HandCategory::Straight, HandCategory::Flush],
    // Pair
    &[HandCategory::TwoPair, HandCategory::ThreeOfAKind],
    // TwoPair
    &[HandCategory::FullHouse],
    // ThreeOfAKind
    &[HandCategory::FourOfAKind, HandCategory::FullHouse],
    // Straight
    &[HandCategory::StraightFlush],
    // Flush
    &[HandCategory::StraightFlush],
    // FullHouse
    &[],
    // FourOfAKind
    &[],
    // StraightFlush
    &[HandCategory::RoyalFlush],
    // RoyalFlush
    &[],
];

/// One category in the planner graph.
#[derive(Debug, Clone)]
pub struct EvaluationNode {
    category: HandCategory,
    children: Vec<HandCategory>,
    subtree_max: HandCategory,
}

impl EvaluationNode {
    /// The category this node tries to form.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Strictly stronger refinements of this category.
    pub fn children(&self) -> &[HandCategory] {
        &self.children
    }

    /// Strongest category reachable from this node, itself included.
    pub fn subtree_max(&self) -> HandCategory {
        self.subtree_max
    }
}

/// Arena of [`EvaluationNode`]s indexed by [`HandCategory::index`].
#[derive(Debug, Clone)]
pub struct EvaluationPlanner {
    nodes: Vec<EvaluationNode>,
}

impl EvaluationPlanner {
    /// Build the graph and precompute each node's subtree maximum.
    pub fn new() -> Self {
        let mut nodes: Vec<EvaluationNode> = HandCategory::ALL
            .iter()
            .map(|&category| EvaluationNode {
                category,
                children: EDGES[category.index()].to_vec(),
                subtree_max: category,
            })
            .collect();

        // Edges only point to stronger categories, so strongest-first is a
        // reverse topological order.
        for index in (0..NUM_CATEGORIES).rev() {
            let node = &nodes[index];
            debug_assert!(node.children.iter().all(|&child| child > node.category));
            let subtree_max = node
                .children
                .iter()
                .map(|child| nodes[child.index()].subtree_max)
                .fold(node.category, HandCategory::max);
            nodes[index].subtree_max = subtree_max;
        }

        Self { nodes }
    }

    /// The node for `category`.
    pub fn node(&self, category: HandCategory) -> &EvaluationNode {
        &self.nodes[category.index()]
    }

    /// All nodes, weakest category first.
    pub fn nodes(&self) -> &[EvaluationNode] {
        &self.nodes
    }

    /// Find the strongest category formable from `sorted` (ascending cards),
    /// skipping subtrees that cannot beat the best result so far.
    ///
    /// Returns `None` only for an empty pool or an unsound graph.
    pub fn search(&self, sorted: &[Card]) -> Option<Score> {
        let mut best: Option<Score> = None;
        let mut visited = 0u16;
        let mut frontier = vec![HandCategory::HighCard];

        while let Some(category) = frontier.pop() {
            let bit = 1u16 << category.index();
            if visited & bit != 0 {
                continue;
            }
            visited |= bit;

            let node = self.node(category);
            if best.as_ref().is_some_and(|b| b.category() >= node.subtree_max) {
                continue;
            }

            if best.as_ref().map_or(true, |b| category > b.category()) {
                if let Some(cards) = find_hand(sorted, category) {
                    best = Some(Score::new(category, cards, sorted.to_vec()));
                }
            }
            frontier.extend_from_slice(&node.children);
        }

        best
    }
}

impl Default for EvaluationPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide planner, built on first use.
pub fn planner() -> &'static EvaluationPlanner {
    static PLANNER: OnceLock<EvaluationPlanner> = OnceLock::new();
    PLANNER.get_or_init(EvaluationPlanner::new)
}
