use std::collections::HashMap;

use netwalk_core::{Connections, Grid, Position, PositionSet, Rotation};
use tinyvec::ArrayVec;

use crate::{
    BoxedSolver, Move, Solver, SolverError,
    solver::{check_dimensions, push_moves, tile_rotation},
};

/// The result of a [`TreeSolver`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePlan {
    moves: Vec<Move>,
    cost: usize,
    nodes: usize,
    distinct_subtrees: usize,
    cache_hits: usize,
}

impl TreePlan {
    /// Returns the ordered moves.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Consumes the plan and returns its moves.
    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Returns the total number of quarter turns.
    #[must_use]
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Returns the number of tiles in the server's tree.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of structurally distinct subtrees.
    #[must_use]
    pub fn distinct_subtrees(&self) -> usize {
        self.distinct_subtrees
    }

    /// Returns how many subtrees reused an already computed cost.
    #[must_use]
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }
}

/// A solver that evaluates the solution's tree bottom-up.
///
/// The solution tree is rebuilt from the server. Subtrees are keyed by their
/// shape together with the rotation offset of every tile in them, so subtrees
/// that repeat elsewhere in the grid reuse a cached cost. Moves are emitted top
/// down from the server. Tiles outside the tree are handled last, in row-major
/// order.
///
/// The cache belongs to a single [`TreeSolver::plan`] call.
///
/// # Examples
///
/// ```
/// use netwalk_core::Grid;
/// use netwalk_solver::TreeSolver;
///
/// let solution: Grid = "44444/7fffd/11111".parse()?;
/// let plan = TreeSolver::new().plan(&solution, &solution)?;
///
/// assert_eq!(plan.cost(), 0);
/// assert_eq!(plan.nodes(), 15);
/// assert!(plan.cache_hits() > 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSolver {}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
struct SubtreeId(usize);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SubtreeKey {
    shape: Connections,
    offset: u8,
    children: ArrayVec<[SubtreeId; 4]>,
}

#[derive(Debug)]
struct Node {
    position: Position,
    rotation: Rotation,
    children: ArrayVec<[usize; 4]>,
}

impl TreeSolver {
    /// Creates a new `TreeSolver`.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Computes the move list together with cache statistics.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Solver::solve`].
    pub fn plan(&self, live: &Grid, solution: &Grid) -> Result<TreePlan, SolverError> {
        check_dimensions(live, solution)?;

        let (nodes, in_tree) = build_tree(live, solution)?;

        // Children are created after their parent, so reverse creation order
        // visits every child before its parent.
        let mut ids: Vec<SubtreeId> = vec![SubtreeId::default(); nodes.len()];
        let mut interned: HashMap<SubtreeKey, SubtreeId> = HashMap::new();
        let mut costs: Vec<usize> = Vec::new();
        let mut cache_hits = 0;
        for (i, node) in nodes.iter().enumerate().rev() {
            let key = SubtreeKey {
                shape: solution[node.position],
                offset: node.rotation.clockwise_steps(),
                children: node.children.iter().map(|&child| ids[child]).collect(),
            };
            ids[i] = match interned.get(&key) {
                Some(&id) => {
                    cache_hits += 1;
                    id
                }
                None => {
                    let own = usize::from(node.rotation.steps());
                    let below = key.children.iter().map(|id| costs[id.0]).sum::<usize>();
                    let id = SubtreeId(costs.len());
                    costs.push(own + below);
                    interned.insert(key, id);
                    id
                }
            };
        }
        let tree_cost = ids.first().map_or(0, |root| costs[root.0]);

        let mut moves = Vec::with_capacity(tree_cost);
        for node in &nodes {
            push_moves(&mut moves, node.position, node.rotation);
        }
        debug_assert_eq!(moves.len(), tree_cost);
        for pos in live.positions().filter(|&pos| !in_tree.contains(pos)) {
            push_moves(&mut moves, pos, tile_rotation(live, solution, pos)?);
        }
        let cost = moves.len();

        let plan = TreePlan {
            moves,
            cost,
            nodes: nodes.len(),
            distinct_subtrees: costs.len(),
            cache_hits,
        };
        log::debug!(
            "tree solver: {} moves, {} nodes, {} distinct subtrees, {} cache hits",
            plan.cost,
            plan.nodes,
            plan.distinct_subtrees,
            plan.cache_hits
        );
        Ok(plan)
    }
}

/// Walks the solution tree from the server with an explicit stack.
///
/// Returns the nodes in creation order (every parent precedes its children)
/// and the set of positions they cover.
fn build_tree(live: &Grid, solution: &Grid) -> Result<(Vec<Node>, PositionSet), SolverError> {
    let server = solution.server();
    let mut visited = PositionSet::for_grid(solution);
    let mut nodes = Vec::new();

    visited.insert(server);
    nodes.push(Node {
        position: server,
        rotation: tile_rotation(live, solution, server)?,
        children: ArrayVec::new(),
    });
    let mut stack = vec![0];
    while let Some(parent) = stack.pop() {
        let position = nodes[parent].position;
        for (_, next) in solution.linked_neighbors(position) {
            if !visited.insert(next) {
                continue;
            }
            let child = nodes.len();
            nodes.push(Node {
                position: next,
                rotation: tile_rotation(live, solution, next)?,
                children: ArrayVec::new(),
            });
            nodes[parent].children.push(child);
            stack.push(child);
        }
    }
    Ok((nodes, visited))
}

impl Solver for TreeSolver {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn clone_box(&self) -> BoxedSolver {
        Box::new(*self)
    }

    fn solve(&self, live: &Grid, solution: &Grid) -> Result<Vec<Move>, SolverError> {
        Ok(self.plan(live, solution)?.into_moves())
    }
}
