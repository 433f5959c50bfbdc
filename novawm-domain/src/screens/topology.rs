use std::collections::HashMap;

use novawm_core::types::{Direction, Point, Rect};
use tracing::{debug, info};

use super::errors::TopologyError;

/// Index of a monitor inside the current [`ScreenTopology`].
///
/// Only meaningful until the next [`ScreenTopology::rebuild`]; hold on to the
/// monitor's [`Rect`] when an identity has to survive a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
struct MonitorNode {
    bounds: Rect,
    /// Indexed by [`Direction::index`].
    neighbors: [Option<MonitorId>; 4],
}

/// Graph of physical monitors and their up/down/left/right adjacency.
///
/// Nodes live in an arena (`Vec`) and refer to each other by index, so a
/// rebuild simply replaces the arena. The root monitor, the one at `(0, 0)`,
/// is always `MonitorId(0)` when the topology is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenTopology {
    nodes: Vec<MonitorNode>,
}

/// Lookup tables over one input box list, answering "which box sits directly
/// next to this one".
struct Adjacency {
    by_origin: HashMap<Point, Rect>,
    by_below_origin: HashMap<Point, Rect>,
    by_right_origin: HashMap<Point, Rect>,
}

impl Adjacency {
    fn new(boxes: &[Rect]) -> Self {
        let mut adjacency = Adjacency {
            by_origin: HashMap::new(),
            by_below_origin: HashMap::new(),
            by_right_origin: HashMap::new(),
        };
        // The first box listed wins whenever two share a key.
        for rect in boxes {
            adjacency.by_origin.entry(rect.origin).or_insert(*rect);
            adjacency.by_below_origin.entry(rect.below_origin()).or_insert(*rect);
            adjacency.by_right_origin.entry(rect.right_origin()).or_insert(*rect);
        }
        adjacency
    }

    fn neighbor(&self, rect: &Rect, dir: Direction) -> Option<Rect> {
        match dir {
            Direction::Down => self.by_origin.get(&rect.below_origin()),
            Direction::Right => self.by_origin.get(&rect.right_origin()),
            Direction::Up => self.by_below_origin.get(&rect.origin),
            Direction::Left => self.by_right_origin.get(&rect.origin),
        }
        .copied()
        .filter(|found| found != rect)
    }
}

impl ScreenTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a topology from `boxes`, see [`ScreenTopology::rebuild`].
    pub fn from_boxes(boxes: &[Rect]) -> Result<Self, TopologyError> {
        Ok(ScreenTopology {
            nodes: Self::build(boxes)?,
        })
    }

    /// Replaces the whole graph with one built from `boxes`.
    ///
    /// The box at `(0, 0)` becomes the root. Discovery walks depth-first from
    /// the root along `down` and `right`; every other discovered monitor
    /// expands in all four directions. Boxes not connected to the root are
    /// left out. On error the current graph is kept untouched.
    pub fn rebuild(&mut self, boxes: &[Rect]) -> Result<(), TopologyError> {
        let nodes = Self::build(boxes)?;
        info!("Rebuilt monitor topology: {} monitor(s) from {} box(es).", nodes.len(), boxes.len());
        self.nodes = nodes;
        Ok(())
    }

    fn build(boxes: &[Rect]) -> Result<Vec<MonitorNode>, TopologyError> {
        if let Some(degenerate) = boxes.iter().find(|rect| rect.is_empty()) {
            return Err(TopologyError::DegenerateMonitor(*degenerate));
        }
        let adjacency = Adjacency::new(boxes);
        let root = *adjacency
            .by_origin
            .get(&Point::new(0, 0))
            .ok_or(TopologyError::NoRootMonitor)?;

        let mut nodes: Vec<MonitorNode> = Vec::new();
        let mut index_of: HashMap<Rect, MonitorId> = HashMap::new();
        let mut pending: Vec<(Rect, &[Direction])> = vec![(root, &[Direction::Down, Direction::Right])];

        while let Some((rect, directions)) = pending.pop() {
            if index_of.contains_key(&rect) {
                continue;
            }
            index_of.insert(rect, MonitorId(nodes.len()));
            nodes.push(MonitorNode {
                bounds: rect,
                neighbors: [None; 4],
            });

            for dir in directions {
                if let Some(next) = adjacency.neighbor(&rect, *dir) {
                    if !index_of.contains_key(&next) {
                        pending.push((next, &Direction::ALL));
                    }
                }
            }
        }

        for node in nodes.iter_mut() {
            for dir in Direction::ALL {
                node.neighbors[dir.index()] = adjacency
                    .neighbor(&node.bounds, dir)
                    .and_then(|rect| index_of.get(&rect).copied());
            }
        }

        let unreachable = boxes.iter().filter(|rect| !index_of.contains_key(rect)).count();
        if unreachable > 0 {
            debug!("{} monitor box(es) are not adjacent to the root monitor and were ignored.", unreachable);
        }
        Ok(nodes)
    }

    /// The monitor at `(0, 0)`, if any topology has been built.
    pub fn root(&self) -> Option<MonitorId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(MonitorId(0))
        }
    }

    /// First monitor whose bounds contain `point` (left/top inclusive,
    /// right/bottom exclusive).
    pub fn screen_of_point(&self, point: Point) -> Option<MonitorId> {
        self.nodes
            .iter()
            .position(|node| node.bounds.contains_point(point))
            .map(MonitorId)
    }

    /// The monitor whose bounds are exactly `rect`.
    pub fn screen_of_box(&self, rect: &Rect) -> Option<MonitorId> {
        self.nodes.iter().position(|node| node.bounds == *rect).map(MonitorId)
    }

    pub fn box_of_screen(&self, id: MonitorId) -> Option<Rect> {
        self.nodes.get(id.0).map(|node| node.bounds)
    }

    pub fn neighbor(&self, id: MonitorId, dir: Direction) -> Option<MonitorId> {
        self.nodes.get(id.0).and_then(|node| node.neighbors[dir.index()])
    }

    /// Bounds of the monitor containing `point`.
    pub fn box_of_point(&self, point: Point) -> Option<Rect> {
        self.screen_of_point(point).and_then(|id| self.box_of_screen(id))
    }

    /// Iterates all monitors in discovery order, root first.
    pub fn monitors(&self) -> impl Iterator<Item = (MonitorId, Rect)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (MonitorId(index), node.bounds))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn square(x: i32, y: i32) -> Rect {
        Rect::from_coords(x, y, 100, 100)
    }

    fn l_shape() -> ScreenTopology {
        ScreenTopology::from_boxes(&[square(0, 0), square(100, 0), square(0, 100)]).unwrap()
    }

    fn grid() -> ScreenTopology {
        ScreenTopology::from_boxes(&[square(0, 0), square(100, 0), square(0, 100), square(100, 100)]).unwrap()
    }

    #[test]
    fn screen_of_point_in_l_shape() {
        let topology = l_shape();
        assert_eq!(topology.box_of_point(Point::new(150, 50)), Some(square(100, 0)));
        assert_eq!(topology.screen_of_point(Point::new(250, 250)), None);
        // The empty corner of the L belongs to nobody.
        assert_eq!(topology.screen_of_point(Point::new(150, 150)), None);
    }

    #[rstest]
    #[case(Point::new(0, 0), Some(square(0, 0)))]
    #[case(Point::new(99, 99), Some(square(0, 0)))]
    #[case(Point::new(100, 99), Some(square(100, 0)))]
    #[case(Point::new(99, 100), Some(square(0, 100)))]
    #[case(Point::new(-1, 0), None)]
    fn screen_of_point_edges(#[case] point: Point, #[case] expected: Option<Rect>) {
        assert_eq!(l_shape().box_of_point(point), expected);
    }

    #[test]
    fn root_is_origin_monitor() {
        let topology = ScreenTopology::from_boxes(&[square(100, 0), square(0, 0)]).unwrap();
        let root = topology.root().unwrap();
        assert_eq!(topology.box_of_screen(root), Some(square(0, 0)));
        assert_eq!(topology.len(), 2);
    }

    #[test]
    fn grid_links_are_symmetric() {
        let topology = grid();
        assert_eq!(topology.len(), 4);
        for (id, _) in topology.monitors() {
            for dir in Direction::ALL {
                if let Some(other) = topology.neighbor(id, dir) {
                    assert_eq!(topology.neighbor(other, dir.opposite()), Some(id));
                }
            }
        }
    }

    #[test]
    fn grid_navigation() {
        let topology = grid();
        let root = topology.root().unwrap();
        let right = topology.neighbor(root, Direction::Right).unwrap();
        let diagonal = topology.neighbor(right, Direction::Down).unwrap();
        assert_eq!(topology.box_of_screen(diagonal), Some(square(100, 100)));
        let back = topology.neighbor(diagonal, Direction::Left).unwrap();
        assert_eq!(topology.box_of_screen(back), Some(square(0, 100)));
        assert_eq!(topology.neighbor(root, Direction::Up), None);
        assert_eq!(topology.neighbor(root, Direction::Left), None);
    }

    #[test]
    fn monitors_left_of_root_are_found_through_other_nodes() {
        // (-100, 100) is only reachable via the monitor below the root.
        let topology =
            ScreenTopology::from_boxes(&[square(0, 0), square(0, 100), square(-100, 100)]).unwrap();
        assert_eq!(topology.len(), 3);
        let below = topology.screen_of_box(&square(0, 100)).unwrap();
        let left = topology.neighbor(below, Direction::Left).unwrap();
        assert_eq!(topology.box_of_screen(left), Some(square(-100, 100)));
    }

    #[test]
    fn duplicate_boxes_create_one_node() {
        let topology = ScreenTopology::from_boxes(&[square(0, 0), square(0, 0), square(100, 0)]).unwrap();
        assert_eq!(topology.len(), 2);
    }

    #[test]
    fn disconnected_boxes_are_ignored() {
        let topology = ScreenTopology::from_boxes(&[square(0, 0), square(500, 500)]).unwrap();
        assert_eq!(topology.len(), 1);
        assert_eq!(topology.screen_of_point(Point::new(550, 550)), None);
    }

    #[test]
    fn screen_of_box_is_exact() {
        let topology = l_shape();
        assert!(topology.screen_of_box(&square(100, 0)).is_some());
        assert_eq!(topology.screen_of_box(&Rect::from_coords(100, 0, 99, 100)), None);
    }

    #[test]
    fn failed_rebuild_keeps_previous_graph() {
        let mut topology = l_shape();
        let before = topology.clone();

        assert_eq!(topology.rebuild(&[square(100, 0)]), Err(TopologyError::NoRootMonitor));
        assert_eq!(topology, before);

        let flat = Rect::from_coords(100, 0, 0, 100);
        assert_eq!(
            topology.rebuild(&[square(0, 0), flat]),
            Err(TopologyError::DegenerateMonitor(flat))
        );
        assert_eq!(topology, before);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(ScreenTopology::from_boxes(&[]), Err(TopologyError::NoRootMonitor));
        assert!(ScreenTopology::new().is_empty());
        assert_eq!(ScreenTopology::new().root(), None);
    }

    #[test]
    fn rebuild_replaces_everything() {
        let mut topology = grid();
        topology.rebuild(&[Rect::from_coords(0, 0, 1920, 1080)]).unwrap();
        assert_eq!(topology.len(), 1);
        assert_eq!(topology.screen_of_point(Point::new(150, 150)), topology.root());
    }
}
