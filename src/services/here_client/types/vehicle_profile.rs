use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Truck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineGas {
    Diesel,
    Gas,
    Electric,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub vehicle_type: VehicleType,
    pub engine_gas: EngineGas,
    /// Consumption in the unit HERE expects for the engine type (l/100km for fuel).
    pub engine_consumption: f64,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VehicleType::Car => write!(f, "car"),
            VehicleType::Truck => write!(f, "truck"),
        }
    }
}

impl fmt::Display for EngineGas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineGas::Diesel => write!(f, "diesel"),
            EngineGas::Gas => write!(f, "gas"),
            EngineGas::Electric => write!(f, "electric"),
        }
    }
}
