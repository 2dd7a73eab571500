use crate::{
    path::PathTile,
    unit::UnitId,
    util,
    world::{
        edge::{Edge, EdgeLookup, RiverSet},
        hex::{distance, geometry, AxialPoint, EdgeScope, HasHexPosition},
        terrain::{
            Biome, Building, City, Feature, FeatureKind, People, Relief,
            ReliefKind, Resource, Yields,
        },
        HexMap,
    },
};
use anyhow::bail;
use log::trace;
use nalgebra::{Point3, Vector3};
use std::{
    cell::OnceCell,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::Deref,
    slice,
};

/// A single cell of a [HexMap]. A tile's position is fixed when the map is
/// created, and so is its place in the map's topology. Everything else on the
/// tile is simulation state that generation and game steps are free to
/// mutate, via [HexMap::tile_mut].
///
/// Queries that need the rest of the map (neighbors, rivers, distances) live
/// on [TileRef], which pairs a tile with the map that owns it.
#[derive(Clone, Debug)]
pub struct HexTile {
    /// The location of this tile in the map. Every tile in a map has a unique
    /// position, and it never changes.
    position: AxialPoint,

    /// Random rotation (in degrees) used when drawing this tile's resource
    resource_rotation: u16,

    /// Height of the terrain, normalized so that `[0, 1]` spans sea level to
    /// the highest peak. -1 until generation sets it.
    pub elevation: f64,
    /// Rain that fell on this tile. Moisture is derived from the rain on
    /// neighboring tiles.
    pub rain: f64,
    /// Normalized humidity, `[0, 1]`
    pub moisture: f64,
    /// Normalized temperature, `[0, 1]`
    pub temperature: f64,

    pub relief: Relief,
    pub biome: Biome,
    pub feature: Option<Feature>,
    pub resource: Option<Resource>,
    /// Name of a notable geological formation (peak, rift, volcano...)
    pub geology: Option<String>,
    /// Distinguishes seas from lakes on water tiles
    pub is_sea: bool,
    /// Whether this tile was visible on the last visibility update. `None`
    /// means it has never been updated.
    pub is_visible: Option<bool>,
    /// Name of the people that owns this tile
    pub owner: Option<String>,

    units: Vec<UnitId>,
    city: Option<City>,
    building: Option<Building>,

    /// Positions of every adjacent tile. Filled the first time it's needed
    /// and never invalidated, since the map's topology can't change.
    neighbors: OnceCell<Vec<AxialPoint>>,
    /// Rivers along this tile's boundaries. Filled the first time it's
    /// needed. The rivers themselves live in the map's river table.
    rivers: OnceCell<RiverSet>,
}

impl HexTile {
    pub(crate) fn new(position: AxialPoint, resource_rotation: u16) -> Self {
        Self {
            position,
            resource_rotation,
            elevation: -1.0,
            rain: 0.0,
            moisture: 0.0,
            temperature: 0.0,
            relief: Relief::default(),
            biome: Biome::default(),
            feature: None,
            resource: None,
            geology: None,
            is_sea: false,
            is_visible: None,
            owner: None,
            units: Vec::new(),
            city: None,
            building: None,
            neighbors: OnceCell::new(),
            rivers: OnceCell::new(),
        }
    }

    pub fn resource_rotation(&self) -> u16 {
        self.resource_rotation
    }

    /// Cost for a unit to move onto this tile, before any unit-specific rules
    /// are applied. This is 1, plus the movement penalties of the relief,
    /// feature and resource. The penalties are never negative, so this is
    /// always at least 1 plus the relief penalty.
    pub fn entry_cost(&self) -> f64 {
        let mut cost = 1.0 + self.relief.movement_cost;
        if let Some(feature) = &self.feature {
            cost += feature.movement_cost;
        }
        if let Some(resource) = &self.resource {
            cost += resource.movement_cost;
        }
        cost
    }

    /// Can a city be founded here? Only a city already standing on dry land
    /// blocks it.
    pub fn can_build_city(&self) -> bool {
        !(self.city.is_some() && !self.relief.is_water())
    }

    /// Is there anything left for `people` to discover on this tile?
    pub fn can_be_searched(&self, people: &People) -> bool {
        if people.has_searched(self.position) {
            return false;
        }
        self.resource.is_some()
    }

    /// Total output of this tile per turn
    pub fn yields(&self) -> Yields {
        let mut yields = self.biome.yields;

        match self.relief.kind {
            ReliefKind::Hill => {
                yields.food -= 1;
                if yields.military > 0 {
                    yields.military += 1;
                } else {
                    yields.wealth += 1;
                }
            }
            ReliefKind::Mountain => {
                yields.food -= 1;
                if yields.culture > 0 {
                    yields.culture += 1;
                } else if yields.science > 0 {
                    yields.science += 1;
                } else {
                    yields.wealth += 1;
                }
            }
            ReliefKind::Water | ReliefKind::Flat => {}
        }

        match self.feature.map(|feature| feature.kind) {
            Some(FeatureKind::Forest) | Some(FeatureKind::Jungle) => {
                if yields.wealth > 0 {
                    yields.wealth += 1;
                } else {
                    yields.military += 1;
                }
            }
            Some(FeatureKind::Reef) => yields.military += 1,
            _ => {}
        }

        if let Some(resource) = &self.resource {
            yields += resource.yields;
        }

        yields
    }

    /// All units currently on this tile
    pub fn units(&self) -> &[UnitId] {
        &self.units
    }

    pub fn add_unit(&mut self, unit: UnitId) {
        self.units.push(unit);
    }

    /// Take a unit off this tile. Returns an error if the unit isn't here,
    /// which means the caller's idea of where its units are is broken.
    pub fn remove_unit(&mut self, unit: UnitId) -> anyhow::Result<()> {
        match self.units.iter().position(|u| *u == unit) {
            Some(index) => {
                self.units.remove(index);
                Ok(())
            }
            None => bail!("{} is not on tile {}", unit, self.position),
        }
    }

    pub fn city(&self) -> Option<&City> {
        self.city.as_ref()
    }

    pub fn add_city(&mut self, city: City) {
        self.city = Some(city);
    }

    pub fn remove_city(&mut self) -> Option<City> {
        self.city.take()
    }

    pub fn building(&self) -> Option<&Building> {
        self.building.as_ref()
    }

    pub fn set_building(&mut self, building: Building) {
        self.building = Some(building);
    }
}

impl HasHexPosition for HexTile {
    fn position(&self) -> AxialPoint {
        self.position
    }
}

impl Display for HexTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.position.q(), self.position.r())
    }
}

/// A tile, borrowed together with the map that owns it. The map reference is
/// how a tile reaches its neighbors and the edge table; since it's a borrow, a
/// tile reference can never outlive its map.
///
/// Derefs to [HexTile], so all the tile-local queries are available here
/// too. Two references are equal if they point at the same position.
#[derive(Copy, Clone, Debug)]
pub struct TileRef<'a> {
    map: &'a HexMap,
    tile: &'a HexTile,
}

impl<'a> TileRef<'a> {
    pub(crate) fn new(map: &'a HexMap, tile: &'a HexTile) -> Self {
        Self { map, tile }
    }

    /// The map this tile belongs to
    pub fn map(self) -> &'a HexMap {
        self.map
    }

    /// The tile itself, with the map's lifetime
    pub fn tile(self) -> &'a HexTile {
        self.tile
    }

    /// World-space center of this tile. See [geometry::position].
    pub fn world_position(self) -> Point3<f64> {
        geometry::position(self.tile.position)
    }

    /// World-space center of this tile, one map width to the west. See
    /// [geometry::mirrored_position].
    pub fn mirrored_position(self) -> Point3<f64> {
        geometry::mirrored_position(self.tile.position, self.map.column_count())
    }

    /// World-space center of the copy of this tile closest to the camera.
    /// See [geometry::position_from_camera].
    pub fn position_from_camera(self, camera: &Point3<f64>) -> Point3<f64> {
        geometry::position_from_camera(
            self.tile.position,
            camera,
            self.map.column_count(),
        )
    }

    /// Steps from this tile to another, across the map seam if that's
    /// shorter. See [distance::grid_distance].
    pub fn distance_to(self, other: TileRef<'_>) -> usize {
        distance::grid_distance(
            self.tile.position,
            other.position(),
            self.map.column_count(),
        )
    }

    /// Shortest world-space displacement from this tile to another. See
    /// [distance::world_distance].
    pub fn world_distance_to(self, other: TileRef<'_>) -> Vector3<f64> {
        distance::world_distance(
            self.tile.position,
            other.position(),
            self.map.column_count(),
        )
    }

    /// Every tile adjacent to this one, including across the map seam. An
    /// interior tile has 6 neighbors; tiles in the first and last rows have
    /// fewer, since the map doesn't wrap vertically. No particular order is
    /// guaranteed.
    ///
    /// On a map only 3 columns wide this isn't the same as every tile that
    /// [distance::grid_distance] puts 1 step away, since that wraps its `q`
    /// and `s` deltas separately and counts a few non-adjacent tiles too.
    ///
    /// The neighbor list is resolved against the map on the first call and
    /// cached on the tile from then on.
    pub fn neighbors(self) -> Neighbors<'a> {
        let map = self.map;
        let position = self.tile.position;
        let points = self.tile.neighbors.get_or_init(|| {
            let neighbors: Vec<AxialPoint> = map
                .tiles_within_range(position, 1)
                .into_iter()
                .map(|tile| tile.position())
                .filter(|pos| *pos != position)
                .collect();
            trace!("Cached {} neighbors for {}", neighbors.len(), position);
            neighbors
        });
        Neighbors {
            map,
            points: points.iter(),
        }
    }

    /// The edges along this tile's boundaries. [EdgeScope::All] gives every
    /// edge; [EdgeScope::Owned] gives only the three this tile owns, which is
    /// what you want when walking over every tile so that each edge comes up
    /// once. Boundaries that face off the map have no edge and are skipped.
    pub fn edges(self, scope: EdgeScope) -> impl Iterator<Item = &'a Edge> {
        let map = self.map;
        let position = self.tile.position;
        scope.directions().iter().filter_map(move |direction| {
            map.edge_between(position, position.adjacent(*direction))
        })
    }

    /// Every river that runs along one of this tile's boundaries. Resolved on
    /// the first call and cached from then on, so rivers added to the map
    /// afterwards don't show up here. Use [Self::has_river] for a live check.
    pub fn bordering_rivers(self) -> &'a RiverSet {
        self.tile.rivers.get_or_init(|| {
            let rivers: RiverSet =
                self.edges(EdgeScope::All).filter_map(Edge::river).collect();
            trace!(
                "Cached {} bordering rivers for {}",
                rivers.len(),
                self.tile.position
            );
            rivers
        })
    }

    /// Does any river run along this tile's boundaries? This always checks
    /// the current state of the map, ignoring the cached river set.
    pub fn has_river(self) -> bool {
        self.edges(EdgeScope::All)
            .any(|edge| edge.river().is_some())
    }

    /// Human-readable summary of the tile, for tooltips and the like
    pub fn description(self) -> String {
        let tile = self.tile;
        let mut description =
            format!("{} {}", tile.biome.kind, tile.relief.kind);

        if let Some(feature) = &tile.feature {
            description += &format!(", {}", feature.kind);
        }
        if let Some(resource) = &tile.resource {
            description += &format!(", {}", resource.name);
        }
        if self.has_river() {
            description += ", River";
        }

        description += &format!(
            ".\n \nElevation: {}m\nTemperature: {}°C\nHumidity: {}%",
            (tile.elevation * 4000.0) as i32,
            util::round_tenths(tile.temperature * 70.0 - 30.0),
            util::round_tenths(tile.moisture * 100.0),
        );

        if let Some(owner) = &tile.owner {
            description += &format!("\n \nOwner: {}.", owner);
        }
        if let Some(building) = &tile.building {
            description += &format!("\nBuilding: {}.", building.name);
        }

        description
    }
}

impl<'a> Deref for TileRef<'a> {
    type Target = HexTile;

    fn deref(&self) -> &HexTile {
        self.tile
    }
}

impl<'a> HasHexPosition for TileRef<'a> {
    fn position(&self) -> AxialPoint {
        self.tile.position
    }
}

impl<'a> PartialEq for TileRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.tile.position == other.tile.position
    }
}

impl<'a> Eq for TileRef<'a> {}

impl<'a> Hash for TileRef<'a> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tile.position.hash(state);
    }
}

impl<'a> Display for TileRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.tile, f)
    }
}

impl<'a> PathTile for TileRef<'a> {
    type Neighbors = Neighbors<'a>;

    fn neighbors(&self) -> Neighbors<'a> {
        TileRef::neighbors(*self)
    }

    fn entry_cost(&self) -> f64 {
        self.tile.entry_cost()
    }

    fn cost_estimate(&self, other: &Self) -> f64 {
        distance::cost_estimate(
            self.tile.position,
            other.position(),
            self.map.column_count(),
        )
    }
}

/// Iterator over the neighbors of a tile. See [TileRef::neighbors].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    map: &'a HexMap,
    points: slice::Iter<'a, AxialPoint>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = TileRef<'a>;

    fn next(&mut self) -> Option<TileRef<'a>> {
        let map = self.map;
        self.points.next().map(|pos| map.expect_tile(*pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl<'a> ExactSizeIterator for Neighbors<'a> {}

impl<'a> FusedIterator for Neighbors<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::terrain::BiomeKind;

    fn tile() -> HexTile {
        HexTile::new(AxialPoint::new(3, 4), 0)
    }

    fn resource(movement_cost: f64) -> Resource {
        Resource {
            name: "Iron".into(),
            movement_cost,
            yields: Yields {
                military: 2,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_entry_cost() {
        let mut tile = tile();
        tile.relief = Relief::new(ReliefKind::Hill, 1.0);
        assert_eq!(tile.entry_cost(), 2.0);

        tile.feature = Some(Feature::new(FeatureKind::Forest, 0.5));
        assert_eq!(tile.entry_cost(), 2.5);

        tile.resource = Some(resource(0.25));
        assert_eq!(tile.entry_cost(), 2.75);
    }

    #[test]
    fn test_entry_cost_monotonic() {
        let mut tile = tile();
        tile.relief = Relief::new(ReliefKind::Flat, 1.0);
        let mut previous = tile.entry_cost();
        for i in 0..10 {
            let penalty = f64::from(i) * 0.5;
            tile.feature = Some(Feature::new(FeatureKind::Marsh, penalty));
            tile.resource = Some(resource(penalty));
            let cost = tile.entry_cost();
            assert!(cost >= previous);
            assert!(cost >= 1.0 + tile.relief.movement_cost);
            previous = cost;
        }
    }

    #[test]
    fn test_can_build_city() {
        let mut tile = tile();
        assert!(tile.can_build_city());

        tile.add_city(City {
            name: "Tenochtitlan".into(),
        });
        assert!(!tile.can_build_city());

        // A city on water doesn't block anything
        tile.relief = Relief::new(ReliefKind::Water, 0.0);
        assert!(tile.can_build_city());

        tile.relief = Relief::default();
        assert_eq!(
            tile.remove_city(),
            Some(City {
                name: "Tenochtitlan".into()
            })
        );
        assert!(tile.can_build_city());
    }

    #[test]
    fn test_can_be_searched() {
        let mut tile = tile();
        let mut people = People::new("Aztecs");
        assert!(!tile.can_be_searched(&people));

        tile.resource = Some(resource(0.0));
        assert!(tile.can_be_searched(&people));

        people.mark_searched(tile.position());
        assert!(!tile.can_be_searched(&people));
    }

    #[test]
    fn test_yields() {
        let base = Yields {
            food: 2,
            wealth: 1,
            ..Default::default()
        };
        let mut tile = tile();
        tile.biome = Biome::new(BiomeKind::Savanna, base);
        assert_eq!(tile.yields(), base);

        // Hill: no military, so wealth gets the bonus
        tile.relief = Relief::new(ReliefKind::Hill, 1.0);
        assert_eq!(
            tile.yields(),
            Yields {
                food: 1,
                wealth: 2,
                ..Default::default()
            }
        );

        // Mountain with science: science gets the bonus
        tile.biome.yields.science = 1;
        tile.relief = Relief::new(ReliefKind::Mountain, 2.0);
        assert_eq!(
            tile.yields(),
            Yields {
                food: 1,
                wealth: 1,
                science: 2,
                ..Default::default()
            }
        );

        // Forest: existing wealth gets the bonus
        tile.relief = Relief::default();
        tile.feature = Some(Feature::new(FeatureKind::Forest, 1.0));
        assert_eq!(
            tile.yields(),
            Yields {
                food: 2,
                wealth: 2,
                science: 1,
                ..Default::default()
            }
        );

        // Reef plus a resource
        tile.feature = Some(Feature::new(FeatureKind::Reef, 0.0));
        tile.resource = Some(resource(0.0));
        assert_eq!(
            tile.yields(),
            Yields {
                food: 2,
                wealth: 1,
                military: 3,
                science: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_units() {
        let mut tile = tile();
        assert!(tile.units().is_empty());
        tile.add_unit(UnitId(1));
        tile.add_unit(UnitId(2));
        assert_eq!(tile.units(), &[UnitId(1), UnitId(2)]);

        tile.remove_unit(UnitId(1)).unwrap();
        assert_eq!(tile.units(), &[UnitId(2)]);

        // Removing a unit that isn't there is a loud failure
        let err = tile.remove_unit(UnitId(1)).unwrap_err();
        assert_eq!(err.to_string(), "unit #1 is not on tile (3, 4, -7)");
    }

    #[test]
    fn test_display() {
        assert_eq!(tile().to_string(), "3, 4");
    }
}
