//! The grid graph: traversable cells and 4-connected adjacency.

use crate::bounds::Bounds;
use crate::error::TopologyError;
use gridmdp_core::{CellId, Direction, DirectionSet, Position, SensorDataError};
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Traversable cells of a bounded grid and their 4-connected neighbours.
///
/// Built once per episode by [`Grid::build`]. Cells are numbered in
/// canonical order (ascending `x`, then ascending `y`) and that numbering
/// never changes. Two cells are neighbours iff both are traversable and
/// their Manhattan distance is exactly 1, so a cell next to an obstacle or
/// the boundary simply has fewer neighbours.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Bounds,
    cells: IndexSet<Position>,
    obstacles: IndexSet<Position>,
    /// `links[cell][d]` is the neighbour reached by cardinal direction `d`.
    links: Vec<[Option<CellId>; 4]>,
    legal: Vec<DirectionSet>,
}

impl Grid {
    /// Build the grid graph for `bounds` minus `obstacles`.
    ///
    /// Obstacles outside the bounds are ignored. Returns
    /// `Err(TopologyError::NoTraversableCells)` if nothing is left.
    ///
    /// ```
    /// use gridmdp_core::Position;
    /// use gridmdp_space::{Bounds, Grid};
    ///
    /// // 3x3 room with a pillar in the middle.
    /// let grid = Grid::build(Bounds::new(3, 3).unwrap(), [Position::new(1, 1)]).unwrap();
    /// assert_eq!(grid.cell_count(), 8);
    /// let edge = grid.cell(Position::new(1, 0)).unwrap();
    /// assert_eq!(grid.neighbours(edge).len(), 2);
    /// ```
    pub fn build(
        bounds: Bounds,
        obstacles: impl IntoIterator<Item = Position>,
    ) -> Result<Self, TopologyError> {
        let obstacles: IndexSet<Position> = obstacles
            .into_iter()
            .filter(|p| bounds.contains(*p))
            .collect();

        let traversable = bounds.area() - obstacles.len() as u64;
        if traversable == 0 {
            return Err(TopologyError::NoTraversableCells);
        }
        if u32::try_from(traversable).is_err() {
            return Err(TopologyError::CellCountOverflow { count: traversable });
        }

        let mut cells = IndexSet::with_capacity(traversable as usize);
        for x in 0..bounds.width() {
            for y in 0..bounds.height() {
                let p = Position::new(x, y);
                if !obstacles.contains(&p) {
                    cells.insert(p);
                }
            }
        }

        // Probe the four cardinal offsets instead of comparing all pairs.
        let mut links = Vec::with_capacity(cells.len());
        let mut legal = Vec::with_capacity(cells.len());
        for p in &cells {
            let mut row = [None; 4];
            let mut set = DirectionSet::empty();
            for (slot, d) in Direction::CARDINAL.into_iter().enumerate() {
                if let Some(i) = cells.get_index_of(&p.step(d)) {
                    row[slot] = Some(CellId(i as u32));
                    set.insert(d);
                }
            }
            links.push(row);
            legal.push(set);
        }

        Ok(Self {
            bounds,
            cells,
            obstacles,
            links,
            legal,
        })
    }

    /// The grid bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of traversable cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All cell ids in canonical order.
    pub fn cell_ids(&self) -> impl ExactSizeIterator<Item = CellId> + '_ {
        (0..self.cells.len() as u32).map(CellId)
    }

    /// All traversable positions in canonical order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// The cell at `position`, if it is traversable.
    pub fn cell(&self, position: Position) -> Option<CellId> {
        self.cells.get_index_of(&position).map(|i| CellId(i as u32))
    }

    /// The cell at `position`, or the reason it is not a traversable cell.
    pub fn resolve(&self, position: Position) -> Result<CellId, SensorDataError> {
        if !self.bounds.contains(position) {
            return Err(SensorDataError::OutOfBounds {
                position,
                bounds: self.bounds.describe(),
            });
        }
        self.cell(position)
            .ok_or(SensorDataError::Obstacle { position })
    }

    /// Position of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this grid.
    pub fn position(&self, id: CellId) -> Position {
        self.cells[id.index()]
    }

    /// Whether `position` is an in-bounds obstacle.
    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    /// Whether `position` is a traversable cell.
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// The cell one step from `id` in `direction`.
    ///
    /// `Stop` returns `id` itself; a blocked cardinal direction returns `None`.
    pub fn neighbour(&self, id: CellId, direction: Direction) -> Option<CellId> {
        match direction {
            Direction::Stop => Some(id),
            d => self.links[id.index()][d as usize],
        }
    }

    /// Traversable neighbours of `id`, in canonical direction order.
    pub fn neighbours(&self, id: CellId) -> SmallVec<[CellId; 4]> {
        self.links[id.index()].iter().flatten().copied().collect()
    }

    /// `(direction, neighbour)` pairs for every open side of `id`.
    pub fn directional_neighbours(
        &self,
        id: CellId,
    ) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        Direction::CARDINAL
            .into_iter()
            .zip(self.links[id.index()])
            .filter_map(|(d, n)| n.map(|n| (d, n)))
    }

    /// Cardinal directions that lead from `id` to a neighbour.
    ///
    /// A static property of the topology, independent of whatever the host
    /// currently reports as legal.
    pub fn legal_directions(&self, id: CellId) -> DirectionSet {
        self.legal[id.index()]
    }

    /// Graph distance from the nearest of `sources` to every cell.
    ///
    /// Multi-source BFS over the neighbour relation. Cells unreachable from
    /// every source get `None`.
    pub fn distances_from(&self, sources: &[CellId]) -> Vec<Option<u32>> {
        let mut dist = vec![None; self.cells.len()];
        let mut queue = VecDeque::new();
        for &s in sources {
            if dist[s.index()].is_none() {
                dist[s.index()] = Some(0);
                queue.push_back(s);
            }
        }
        while let Some(cell) = queue.pop_front() {
            let next = dist[cell.index()].map_or(0, |d| d + 1);
            for nb in self.neighbours(cell) {
                if dist[nb.index()].is_none() {
                    dist[nb.index()] = Some(next);
                    queue.push_back(nb);
                }
            }
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn open(width: i32, height: i32) -> Grid {
        Grid::build(Bounds::new(width, height).unwrap(), []).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn open_grid_has_one_cell_per_coordinate() {
        let g = open(4, 3);
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.cell(p(0, 0)), Some(CellId(0)));
        assert_eq!(g.cell(p(0, 1)), Some(CellId(1)));
        assert_eq!(g.cell(p(1, 0)), Some(CellId(3)));
    }

    #[test]
    fn obstacles_are_removed() {
        let g = Grid::build(Bounds::new(3, 1).unwrap(), [p(1, 0)]).unwrap();
        assert_eq!(g.cell_count(), 2);
        assert!(g.is_obstacle(p(1, 0)));
        assert!(!g.contains(p(1, 0)));
        let west = g.cell(p(0, 0)).unwrap();
        assert!(g.neighbours(west).is_empty());
        assert!(g.legal_directions(west).is_empty());
    }

    #[test]
    fn out_of_bounds_obstacles_are_ignored() {
        let g = Grid::build(Bounds::new(2, 2).unwrap(), [p(5, 5), p(-1, 0)]).unwrap();
        assert_eq!(g.cell_count(), 4);
        assert!(!g.is_obstacle(p(5, 5)));
    }

    #[test]
    fn all_obstacles_is_invalid_topology() {
        let walls = [p(0, 0), p(1, 0)];
        assert_eq!(
            Grid::build(Bounds::new(2, 1).unwrap(), walls).unwrap_err(),
            TopologyError::NoTraversableCells
        );
    }

    // ── Adjacency ───────────────────────────────────────────────

    #[test]
    fn corridor_adjacency() {
        let g = open(3, 1);
        let mid = g.cell(p(1, 0)).unwrap();
        let legal: Vec<_> = g.legal_directions(mid).iter().collect();
        assert_eq!(legal, vec![Direction::East, Direction::West]);
        assert_eq!(g.neighbour(mid, Direction::East), g.cell(p(2, 0)));
        assert_eq!(g.neighbour(mid, Direction::North), None);
        assert_eq!(g.neighbour(mid, Direction::Stop), Some(mid));
    }

    #[test]
    fn corner_has_two_neighbours() {
        let g = open(5, 5);
        let corner = g.cell(p(0, 0)).unwrap();
        let n = g.neighbours(corner);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&g.cell(p(1, 0)).unwrap()));
        assert!(n.contains(&g.cell(p(0, 1)).unwrap()));
    }

    #[test]
    fn directional_neighbours_match_steps() {
        let g = Grid::build(Bounds::new(3, 3).unwrap(), [p(1, 2)]).unwrap();
        for id in g.cell_ids() {
            for (d, nb) in g.directional_neighbours(id) {
                assert_eq!(g.position(nb), g.position(id).step(d));
            }
        }
    }

    // ── Lookups ─────────────────────────────────────────────────

    #[test]
    fn resolve_distinguishes_obstacle_and_out_of_bounds() {
        let g = Grid::build(Bounds::new(2, 2).unwrap(), [p(1, 1)]).unwrap();
        assert_eq!(g.resolve(p(0, 1)), Ok(CellId(1)));
        assert_eq!(
            g.resolve(p(1, 1)),
            Err(SensorDataError::Obstacle { position: p(1, 1) })
        );
        assert!(matches!(
            g.resolve(p(2, 0)),
            Err(SensorDataError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn distances_follow_walls() {
        // 3x2 with a wall at (1,0): path from (0,0) to (2,0) goes over the top.
        let g = Grid::build(Bounds::new(3, 2).unwrap(), [p(1, 0)]).unwrap();
        let src = g.cell(p(0, 0)).unwrap();
        let dist = g.distances_from(&[src]);
        assert_eq!(dist[g.cell(p(2, 0)).unwrap().index()], Some(4));
        assert_eq!(dist[g.cell(p(1, 1)).unwrap().index()], Some(2));
    }

    #[test]
    fn distances_unreachable_is_none() {
        let g = Grid::build(Bounds::new(3, 1).unwrap(), [p(1, 0)]).unwrap();
        let dist = g.distances_from(&[g.cell(p(0, 0)).unwrap()]);
        assert_eq!(dist[g.cell(p(2, 0)).unwrap().index()], None);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_open_room() {
        compliance::run_full_compliance(&open(6, 4));
    }

    #[test]
    fn compliance_walled_room() {
        let walls = [p(1, 1), p(2, 1), p(3, 1), p(3, 2), p(0, 3)];
        let g = Grid::build(Bounds::new(5, 4).unwrap(), walls).unwrap();
        compliance::run_full_compliance(&g);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn adjacency_is_symmetric_under_random_walls(
            width in 1i32..8,
            height in 1i32..8,
            walls in proptest::collection::vec((0i32..8, 0i32..8), 0..20),
        ) {
            let walls: Vec<Position> = walls.into_iter().map(Position::from).collect();
            let Ok(g) = Grid::build(Bounds::new(width, height).unwrap(), walls) else {
                return Ok(());
            };
            for a in g.cell_ids() {
                for b in g.neighbours(a) {
                    prop_assert!(g.neighbours(b).contains(&a));
                    prop_assert_eq!(g.position(a).manhattan(g.position(b)), 1);
                }
            }
        }

        #[test]
        fn pairwise_definition_matches_probing(
            width in 1i32..6,
            height in 1i32..6,
            walls in proptest::collection::vec((0i32..6, 0i32..6), 0..10),
        ) {
            let walls: Vec<Position> = walls.into_iter().map(Position::from).collect();
            let Ok(g) = Grid::build(Bounds::new(width, height).unwrap(), walls) else {
                return Ok(());
            };
            for a in g.cell_ids() {
                let pairwise: Vec<CellId> = g
                    .cell_ids()
                    .filter(|&b| g.position(a).manhattan(g.position(b)) == 1)
                    .collect();
                let mut probed = g.neighbours(a).to_vec();
                probed.sort();
                prop_assert_eq!(probed, pairwise);
            }
        }
    }
}
