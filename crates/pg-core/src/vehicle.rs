//! Vehicle-type codes and the UCC vehicle buckets.
//!
//! Parcel records carry an integer vehicle-type code from the model's
//! taxonomy (`VEHTYPE` column).  Direct deliveries always use a van.  Under
//! the UCC scenario the final leg's vehicle is resampled from a per-segment
//! share distribution over seven abstract buckets ([`UccVehicle`]), each of
//! which maps to a code in the model taxonomy.

use std::fmt;

// ── VehicleType ───────────────────────────────────────────────────────────────

/// Integer vehicle-type code in the model's taxonomy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VehicleType(pub u8);

impl VehicleType {
    /// Default for direct parcel deliveries.
    pub const VAN: VehicleType = VehicleType(7);
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── UccVehicle ────────────────────────────────────────────────────────────────

/// Abstract vehicle bucket used in the UCC vehicle-share tables.
///
/// The raw share table has one fuel-type column per bucket × fuel type; the
/// buckets below are what remains after the fuel columns are collapsed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum UccVehicle {
    Levv,
    Moped,
    Van,
    Truck,
    TractorTrailer,
    WasteCollection,
    SpecialConstruction,
}

impl UccVehicle {
    /// Number of buckets, and the width of a collapsed share row.
    pub const COUNT: usize = 7;

    /// All buckets in share-table column order.
    pub const ALL: [UccVehicle; Self::COUNT] = [
        UccVehicle::Levv,
        UccVehicle::Moped,
        UccVehicle::Van,
        UccVehicle::Truck,
        UccVehicle::TractorTrailer,
        UccVehicle::WasteCollection,
        UccVehicle::SpecialConstruction,
    ];

    /// Map this bucket to the model taxonomy's vehicle-type code.
    ///
    /// Waste-collection and special-construction vehicles share a code.
    pub fn vehicle_type(self) -> VehicleType {
        match self {
            UccVehicle::Levv => VehicleType(8),
            UccVehicle::Moped => VehicleType(9),
            UccVehicle::Van => VehicleType(7),
            UccVehicle::Truck => VehicleType(1),
            UccVehicle::TractorTrailer => VehicleType(5),
            UccVehicle::WasteCollection => VehicleType(6),
            UccVehicle::SpecialConstruction => VehicleType(6),
        }
    }
}

impl fmt::Display for UccVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UccVehicle::Levv => "LEVV",
            UccVehicle::Moped => "moped",
            UccVehicle::Van => "van",
            UccVehicle::Truck => "truck",
            UccVehicle::TractorTrailer => "tractor-trailer",
            UccVehicle::WasteCollection => "waste-collection",
            UccVehicle::SpecialConstruction => "special-construction",
        };
        f.write_str(name)
    }
}
