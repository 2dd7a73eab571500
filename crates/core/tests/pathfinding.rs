//! Drives the path search contract end to end with a small A* search. The
//! search only knows about [PathTile] and [PathUnit], so it would run over any
//! grid that implements them.

use hexmap::{
    AxialPoint, HasHexPosition, HexMap, MapConfig, PathTile, PathUnit, Relief,
    ReliefKind, Unit, UnitId, UnitKind,
};
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
    hash::Hash,
};

/// A node waiting to be expanded. Ordered so the heap pops the lowest
/// priority first.
struct Candidate {
    priority: f64,
    index: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Cheapest path from `start` to `goal`, and its total cost
fn find_path<T, U>(start: T, goal: T, unit: &U) -> Option<(Vec<T>, f64)>
where
    T: PathTile + Copy + Eq + Hash,
    U: PathUnit<T>,
{
    let mut nodes = vec![start];
    let mut indexes: HashMap<T, usize> = HashMap::new();
    indexes.insert(start, 0);
    let mut costs = vec![0.0];
    let mut came_from: Vec<Option<usize>> = vec![None];

    let mut frontier = BinaryHeap::new();
    frontier.push(Candidate {
        priority: start.cost_estimate(&goal),
        index: 0,
    });

    while let Some(Candidate { priority, index }) = frontier.pop() {
        let current = nodes[index];
        let cost_so_far = costs[index];
        if priority > cost_so_far + current.cost_estimate(&goal) {
            // Stale entry, this node was reached more cheaply since
            continue;
        }
        if current == goal {
            let mut path = vec![current];
            let mut step = index;
            while let Some(previous) = came_from[step] {
                path.push(nodes[previous]);
                step = previous;
            }
            path.reverse();
            return Some((path, cost_so_far));
        }

        for next in current.neighbors() {
            let cost =
                next.aggregate_cost_to_enter(cost_so_far, &current, unit);
            if cost.is_infinite() {
                continue;
            }
            let next_index = *indexes.entry(next).or_insert_with(|| {
                nodes.push(next);
                costs.push(f64::INFINITY);
                came_from.push(None);
                nodes.len() - 1
            });
            if cost < costs[next_index] {
                costs[next_index] = cost;
                came_from[next_index] = Some(index);
                frontier.push(Candidate {
                    priority: cost + next.cost_estimate(&goal),
                    index: next_index,
                });
            }
        }
    }
    None
}

/// A map with a column of water running top to bottom through the middle
fn channel_map() -> HexMap {
    let mut map = HexMap::new(MapConfig {
        seed: 0.into(),
        columns: 10,
        rows: 3,
        ..Default::default()
    })
    .unwrap();
    for r in 0..3 {
        map.tile_mut(AxialPoint::new(5, r)).unwrap().relief =
            Relief::new(ReliefKind::Water, 0.0);
    }
    map
}

fn positions<T: HasHexPosition>(path: &[T]) -> Vec<AxialPoint> {
    path.iter().map(HasHexPosition::position).collect()
}

#[test]
fn test_land_unit_goes_around_the_world() {
    let map = channel_map();
    let start = map.tile(AxialPoint::new(3, 1)).unwrap();
    let goal = map.tile(AxialPoint::new(7, 1)).unwrap();
    let unit = Unit::new(UnitId(0), UnitKind::Land, 1.0);

    let (path, cost) = find_path(start, goal, &unit).unwrap();
    let path = positions(&path);
    // The only way around the water is across the map seam
    assert_eq!(path.len(), 7, "{:?}", path);
    assert_eq!(cost, 6.0);
    assert!(path.iter().all(|pos| pos.q() != 5));
    assert!(path.iter().any(|pos| pos.q() == 0));
    assert!(path.iter().any(|pos| pos.q() == 9));
}

#[test]
fn test_amphibious_unit_crosses_water() {
    let map = channel_map();
    let start = map.tile(AxialPoint::new(3, 1)).unwrap();
    let goal = map.tile(AxialPoint::new(7, 1)).unwrap();
    let unit = Unit::new(UnitId(1), UnitKind::Amphibious, 1.0);

    let (path, cost) = find_path(start, goal, &unit).unwrap();
    let path = positions(&path);
    // Straight through the water, not around the world
    assert!(
        path.iter().all(|pos| (3..=7).contains(&pos.q())),
        "{:?}",
        path
    );
    assert!(path.iter().any(|pos| pos.q() == 5));
    assert_eq!(cost, 4.0);
}

/// Total cost of walking a fixed route, one step at a time
fn route_cost(map: &HexMap, route: &[AxialPoint], unit: &Unit) -> f64 {
    route.windows(2).fold(0.0, |cost_so_far, step| {
        let from = map.tile(step[0]).unwrap();
        let to = map.tile(step[1]).unwrap();
        to.aggregate_cost_to_enter(cost_so_far, &from, unit)
    })
}

#[test]
fn test_amphibious_half_turn_rounding() {
    let map = channel_map();
    let unit = Unit::new(UnitId(1), UnitKind::Amphibious, 1.0);
    let one_water = [
        AxialPoint::new(3, 1),
        AxialPoint::new(4, 1),
        AxialPoint::new(5, 1),
        AxialPoint::new(6, 1),
        AxialPoint::new(7, 1),
    ];
    let two_water = [
        AxialPoint::new(3, 1),
        AxialPoint::new(4, 1),
        AxialPoint::new(5, 0),
        AxialPoint::new(5, 1),
        AxialPoint::new(6, 1),
        AxialPoint::new(7, 1),
    ];
    // After one water tile there's half a turn left that a land step can't
    // use, so a second water tile fits in for free
    assert_eq!(route_cost(&map, &one_water, &unit), 4.0);
    assert_eq!(route_cost(&map, &two_water, &unit), 4.0);
    // A third one isn't
    let three_water = [
        AxialPoint::new(3, 1),
        AxialPoint::new(4, 1),
        AxialPoint::new(5, 0),
        AxialPoint::new(5, 1),
        AxialPoint::new(5, 2),
        AxialPoint::new(6, 1),
        AxialPoint::new(7, 1),
    ];
    assert_eq!(route_cost(&map, &three_water, &unit), 5.0);
}

#[test]
fn test_naval_unit_stays_on_water() {
    let map = channel_map();
    let start = map.tile(AxialPoint::new(5, 0)).unwrap();
    let goal = map.tile(AxialPoint::new(5, 2)).unwrap();
    let unit = Unit::new(UnitId(2), UnitKind::Naval, 1.0);

    let (path, cost) = find_path(start, goal, &unit).unwrap();
    assert_eq!(
        positions(&path),
        vec![
            AxialPoint::new(5, 0),
            AxialPoint::new(5, 1),
            AxialPoint::new(5, 2)
        ]
    );
    assert_eq!(cost, 2.0);

    // No way onto land
    let land = map.tile(AxialPoint::new(2, 1)).unwrap();
    assert!(find_path(start, land, &unit).is_none());
}

#[test]
fn test_impassable_step() {
    let map = channel_map();
    let land = map.tile(AxialPoint::new(4, 1)).unwrap();
    let water = map.tile(AxialPoint::new(5, 1)).unwrap();
    let unit = Unit::new(UnitId(0), UnitKind::Land, 1.0);
    assert_eq!(
        water.aggregate_cost_to_enter(0.0, &land, &unit),
        f64::INFINITY
    );
    assert_eq!(land.aggregate_cost_to_enter(1.0, &water, &unit), 2.0);
    // Half a turn left isn't enough for a full step
    assert_eq!(land.aggregate_cost_to_enter(1.5, &water, &unit), 3.0);
}
