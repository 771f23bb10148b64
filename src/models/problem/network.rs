use crate::models::common::{Coordinates, Cost, Distance, Duration};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifies a role of a node within the logistics network.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// A consolidation hub.
    Hub,
    /// A sea port.
    Port,
    /// An airport.
    Airport,
    /// A warehouse.
    Warehouse,
    /// A depot.
    Depot,
    /// A rail terminal.
    RailTerminal,
    /// An origin point.
    Origin,
    /// A destination point.
    Destination,
    /// A transfer point between modes.
    TransferPoint,
    /// A customs checkpoint.
    Customs,
}

/// Specifies a transportation mode of an edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Truck transportation.
    Road,
    /// Rail transportation.
    Rail,
    /// Sea freight.
    Sea,
    /// Air freight.
    Air,
    /// A combined mode leg.
    Intermodal,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportMode::Road => "road",
            TransportMode::Rail => "rail",
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
            TransportMode::Intermodal => "intermodal",
        };
        write!(f, "{name}")
    }
}

/// Specifies node operating hours as opaque HH:MM strings.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    /// Opening time.
    pub open: String,
    /// Closing time.
    pub close: String,
}

/// Represents a location within the logistics network.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// An unique node id.
    pub id: String,
    /// A human readable name.
    pub name: String,
    /// A node role.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// A geographic position.
    pub coordinates: Coordinates,
    /// A handling capacity in units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// Fixed costs applied when the node is used.
    #[serde(default)]
    pub fixed_costs: Cost,
    /// A dwell time spent at the node, in minutes.
    #[serde(default)]
    pub dwell_time: Duration,
    /// Operating hours, if the node is not always open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<OperatingHours>,
    /// A set of opaque facility tags.
    #[serde(default)]
    pub facilities: Vec<String>,
    /// Whether shipments leaving this node require customs clearance.
    #[serde(default)]
    pub customs_required: bool,
}

/// Represents a directed connection between two nodes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// An unique edge id.
    pub id: String,
    /// A source node id.
    pub source: String,
    /// A target node id.
    pub target: String,
    /// A transportation mode.
    pub mode: TransportMode,
    /// A distance in kilometers.
    pub distance: Distance,
    /// A base transit time in minutes.
    pub base_time: Duration,
    /// A base monetary cost.
    pub base_cost: Cost,
    /// A capacity in units.
    pub capacity: f64,
    /// A reliability in [0, 1].
    pub reliability: f64,
    /// Carbon emissions in kg CO2 per km.
    pub carbon_emissions: f64,
    /// A fuel cost component.
    pub fuel_cost: Cost,
    /// A toll cost component, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toll_cost: Option<Cost>,
    /// A speed limit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<f64>,
    /// A road quality indicator, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_quality: Option<f64>,
}
