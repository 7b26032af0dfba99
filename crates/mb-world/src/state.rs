//! Robot position and pending parcels.

use mb_core::{NodeId, SimRng};
use mb_spatial::RoadGraph;

use crate::{WorldError, WorldResult};

/// A parcel waiting at `place` to be carried to `address`.
///
/// Parcels held by a [`VillageState`] always have `place != address`; a
/// parcel that reaches its address is delivered and disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub place:   NodeId,
    pub address: NodeId,
}

impl Parcel {
    #[inline]
    pub fn new(place: NodeId, address: NodeId) -> Self {
        Self { place, address }
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}

/// One snapshot of the world: where the robot is and which parcels are
/// still pending, in the order they were created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VillageState {
    /// The robot's current place.
    pub place: NodeId,

    /// Pending parcels, oldest first.
    pub parcels: Vec<Parcel>,
}

impl VillageState {
    /// Build a state, dropping any parcel that is already at its address.
    pub fn new(place: NodeId, parcels: Vec<Parcel>) -> Self {
        let parcels = parcels.into_iter().filter(|p| !p.is_delivered()).collect();
        Self { place, parcels }
    }

    /// A fresh world: the robot at `start` and `parcel_count` parcels with
    /// uniformly random place and address.
    ///
    /// Each address is resampled until it differs from its place, so at
    /// least two places are needed once any parcel is requested.
    pub fn random(
        graph:        &RoadGraph,
        start:        NodeId,
        parcel_count: usize,
        rng:          &mut SimRng,
    ) -> WorldResult<Self> {
        graph.try_neighbors(start)?;

        let places: Vec<NodeId> = graph.node_ids().collect();
        if parcel_count > 0 && places.len() < 2 {
            return Err(WorldError::TooFewPlaces { requested: parcel_count, places: places.len() });
        }

        let mut parcels = Vec::with_capacity(parcel_count);
        for _ in 0..parcel_count {
            let place = places[rng.gen_range(0..places.len())];
            let address = loop {
                let candidate = places[rng.gen_range(0..places.len())];
                if candidate != place {
                    break candidate;
                }
            };
            parcels.push(Parcel { place, address });
        }

        Ok(Self { place: start, parcels })
    }

    /// The state after the robot tries to walk to `destination`.
    ///
    /// Walking anywhere that is not a road away is a no-op and returns an
    /// identical copy.  Otherwise every parcel at the robot's current place
    /// comes along, and parcels that arrive at their address are dropped.
    /// Surviving parcels keep their relative order.
    pub fn move_to(&self, graph: &RoadGraph, destination: NodeId) -> VillageState {
        if !graph.is_neighbor(self.place, destination) {
            return self.clone();
        }

        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    Parcel { place: destination, address: p.address }
                } else {
                    *p
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();

        VillageState { place: destination, parcels }
    }

    /// `true` once every parcel has been delivered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.parcels.is_empty()
    }

    #[inline]
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// Parcels currently lying at `node`.
    pub fn parcels_at(&self, node: NodeId) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(move |p| p.place == node)
    }
}
