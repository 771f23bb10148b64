use crate::models::common::{Cost, Distance, Duration};
use crate::models::problem::{Edge, Node, RouteConstraints, TransportMode};
use serde::{Deserialize, Serialize};

/// An itemized cost of a segment or a route.
///
/// The `total` field always equals the sum of all other numeric fields.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// A base transportation cost.
    pub linehaul: Cost,
    /// A fuel surcharge.
    pub fuel_surcharge: Cost,
    /// Accessorial charges.
    pub accessorials: Cost,
    /// Detention charges.
    pub detention: Cost,
    /// Drayage charges.
    pub drayage: Cost,
    /// Toll charges.
    pub tolls: Cost,
    /// Customs clearance charges.
    pub customs: Cost,
    /// An insurance premium.
    pub insurance: Cost,
    /// A sum of all components above.
    pub total: Cost,
    /// An ISO currency code.
    pub currency: String,
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self {
            linehaul: 0.,
            fuel_surcharge: 0.,
            accessorials: 0.,
            detention: 0.,
            drayage: 0.,
            tolls: 0.,
            customs: 0.,
            insurance: 0.,
            total: 0.,
            currency: "USD".to_string(),
        }
    }
}

impl CostBreakdown {
    /// Accumulates another breakdown into this one, field by field.
    pub fn add(&mut self, other: &CostBreakdown) {
        self.linehaul += other.linehaul;
        self.fuel_surcharge += other.fuel_surcharge;
        self.accessorials += other.accessorials;
        self.detention += other.detention;
        self.drayage += other.drayage;
        self.tolls += other.tolls;
        self.customs += other.customs;
        self.insurance += other.insurance;
        self.total += other.total;
    }

    /// Returns a sum of all cost components, which must match `total`.
    pub fn component_sum(&self) -> Cost {
        self.linehaul
            + self.fuel_surcharge
            + self.accessorials
            + self.detention
            + self.drayage
            + self.tolls
            + self.customs
            + self.insurance
    }
}

/// A single leg of a route over one edge.
///
/// Holds value snapshots of node and edge data, so the segment stays usable
/// after subsequent network mutation.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// A segment id derived from the route id and segment index.
    pub id: String,
    /// A snapshot of the origin node.
    pub from: Node,
    /// A snapshot of the destination node.
    pub to: Node,
    /// A snapshot of the traversed edge.
    pub edge: Edge,
    /// A transportation mode of the traversed edge.
    pub mode: TransportMode,
    /// A segment distance in kilometers.
    pub distance: Distance,
    /// An estimated transit time in minutes.
    pub estimated_time: Duration,
    /// An itemized segment cost.
    pub cost: CostBreakdown,
    /// Segment carbon emissions in kg CO2.
    pub carbon_emissions: f64,
}

/// A symmetric confidence band around route totals.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBand {
    /// A confidence level the band was computed for.
    pub level: f64,
    /// A lower time bound in minutes.
    pub time_min: Duration,
    /// An upper time bound in minutes.
    pub time_max: Duration,
    /// A lower cost bound.
    pub cost_min: Cost,
    /// An upper cost bound.
    pub cost_max: Cost,
}

/// Diagnostic information about how a route was computed.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    /// A name of the algorithm which found the path.
    pub algorithm: String,
    /// A wall clock computation time in milliseconds.
    pub compute_time_ms: u64,
    /// Amount of alternatives considered.
    pub alternatives_considered: usize,
}

/// A materialized transportation route.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// An unique route id.
    pub id: String,
    /// Route legs in travel order.
    pub segments: Vec<Segment>,
    /// A total distance in kilometers.
    pub total_distance: Distance,
    /// A total transit time in minutes.
    pub total_time: Duration,
    /// An itemized total cost.
    pub total_cost: CostBreakdown,
    /// Total carbon emissions in kg CO2.
    pub total_carbon: f64,
    /// A service level in [0, 100].
    pub service_level: f64,
    /// An aggregated reliability in [0, 1].
    pub reliability: f64,
    /// A risk score in [0, 100].
    pub risk_score: f64,
    /// A snapshot of constraints the route was requested with.
    pub constraints: RouteConstraints,
    /// A stochastic confidence band, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceBand>,
    /// Diagnostic metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RouteMetadata>,
}

impl Route {
    /// Returns the first node of the route, if any segment exists.
    pub fn origin(&self) -> Option<&Node> {
        self.segments.first().map(|segment| &segment.from)
    }

    /// Returns the last node of the route, if any segment exists.
    pub fn destination(&self) -> Option<&Node> {
        self.segments.last().map(|segment| &segment.to)
    }

    /// Checks whether a node with given id appears as a segment endpoint.
    pub fn visits(&self, node_id: &str) -> bool {
        self.segments.iter().any(|segment| segment.from.id == node_id || segment.to.id == node_id)
    }
}
