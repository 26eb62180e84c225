use serde::{Deserialize, Serialize};
use std::ops::BitOr;

pub const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TireType {
    Solid,
    Pneumatic,
    Tubeless,
    TubelessWithJelly,
    Other,
}

impl TireType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Pneumatic => "pneumatic",
            Self::Tubeless => "tubeless",
            Self::TubelessWithJelly => "tubeless_with_jelly",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suspension {
    None,
    Front,
    Rear,
    FrontRear,
}

impl Suspension {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Front => "front",
            Self::Rear => "rear",
            Self::FrontRear => "front_rear",
        }
    }

    pub fn is_present(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BrakeType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "drum")]
    Drum,
    #[serde(rename = "mechanical_disc")]
    MechanicalDisc,
    #[serde(rename = "hydraulic_disc")]
    HydraulicDisc,
    #[serde(rename = "electronic")]
    Electronic,
    #[serde(rename = "drum+electronic")]
    DrumElectronic,
    #[serde(rename = "disc+electronic")]
    DiscElectronic,
}

impl BrakeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Drum => "drum",
            Self::MechanicalDisc => "mechanical_disc",
            Self::HydraulicDisc => "hydraulic_disc",
            Self::Electronic => "electronic",
            Self::DrumElectronic => "drum+electronic",
            Self::DiscElectronic => "disc+electronic",
        }
    }
}

/// Orthogonal braking capabilities of one brake, or of a whole item when
/// both sides are OR-ed together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BrakeTraits {
    pub has_disc: bool,
    pub has_electronic: bool,
    pub has_drum: bool,
    pub has_hydraulic: bool,
}

impl BrakeTraits {
    pub fn of(brake: BrakeType) -> Self {
        let mut traits = Self::default();
        match brake {
            BrakeType::None => {}
            BrakeType::Drum => traits.has_drum = true,
            BrakeType::MechanicalDisc => traits.has_disc = true,
            BrakeType::HydraulicDisc => {
                traits.has_disc = true;
                traits.has_hydraulic = true;
            }
            BrakeType::Electronic => traits.has_electronic = true,
            BrakeType::DrumElectronic => {
                traits.has_drum = true;
                traits.has_electronic = true;
            }
            BrakeType::DiscElectronic => {
                traits.has_disc = true;
                traits.has_electronic = true;
            }
        }
        traits
    }
}

impl BitOr for BrakeTraits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            has_disc: self.has_disc || rhs.has_disc,
            has_electronic: self.has_electronic || rhs.has_electronic,
            has_drum: self.has_drum || rhs.has_drum,
            has_hydraulic: self.has_hydraulic || rhs.has_hydraulic,
        }
    }
}

/// A catalog entry as authored on disk. Tire size is in inches here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price_min_juta: Option<f64>,
    pub price_max_juta: Option<f64>,
    pub battery_capacity_wh: Option<f64>,
    pub motor_power_nominal_w: Option<f64>,
    pub motor_power_max_w: Option<f64>,
    pub max_speed_kmh: Option<f64>,
    pub max_range_km: Option<f64>,
    pub max_payload_kg: Option<f64>,
    pub unit_weight_kg: Option<f64>,
    pub foldable: bool,
    pub front_brake: BrakeType,
    pub rear_brake: BrakeType,
    pub tire_size_inch: Option<f64>,
    pub tire_type: TireType,
    pub suspension: Suspension,
    pub ip_body: Option<String>,
    pub ip_battery: Option<String>,
    pub dimensions_open_mm: Option<String>,
    pub dimensions_folded_mm: Option<String>,
    pub official_service: bool,
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub warnings: Option<Vec<String>>,
}

impl CatalogRecord {
    /// A record with every optional figure absent and the most basic hardware.
    pub fn new(id: &str, brand: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            price_min_juta: None,
            price_max_juta: None,
            battery_capacity_wh: None,
            motor_power_nominal_w: None,
            motor_power_max_w: None,
            max_speed_kmh: None,
            max_range_km: None,
            max_payload_kg: None,
            unit_weight_kg: None,
            foldable: false,
            front_brake: BrakeType::None,
            rear_brake: BrakeType::None,
            tire_size_inch: None,
            tire_type: TireType::Other,
            suspension: Suspension::None,
            ip_body: None,
            ip_battery: None,
            dimensions_open_mm: None,
            dimensions_folded_mm: None,
            official_service: false,
            image_url: None,
            description: String::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            warnings: None,
        }
    }
}

/// Normalized, immutable catalog item consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub max_range_km: Option<f64>,
    pub motor_power_nominal_w: Option<f64>,
    pub motor_power_max_w: Option<f64>,
    pub max_speed_kmh: Option<f64>,
    pub battery_capacity_wh: Option<f64>,
    pub max_payload_kg: Option<f64>,
    pub unit_weight_kg: Option<f64>,
    pub foldable: bool,
    pub tire_size_mm: Option<u32>,
    pub tire_type: TireType,
    pub suspension: Suspension,
    pub front_brake: BrakeType,
    pub rear_brake: BrakeType,
    pub brakes: BrakeTraits,
    pub ip_body: Option<String>,
    pub ip_battery: Option<String>,
    pub official_service: bool,
    pub price_min_juta: Option<f64>,
    pub price_max_juta: Option<f64>,
    pub dimensions_open_mm: Option<String>,
    pub dimensions_folded_mm: Option<String>,
    pub image_url: Option<String>,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub warnings: Option<Vec<String>>,
    pub source: Option<String>,
}

impl Item {
    pub fn from_record(record: CatalogRecord, source: Option<String>) -> Self {
        let brakes = BrakeTraits::of(record.front_brake) | BrakeTraits::of(record.rear_brake);
        Self {
            id: record.id,
            brand: record.brand,
            model: record.name,
            max_range_km: record.max_range_km,
            motor_power_nominal_w: record.motor_power_nominal_w,
            motor_power_max_w: record.motor_power_max_w,
            max_speed_kmh: record.max_speed_kmh,
            battery_capacity_wh: record.battery_capacity_wh,
            max_payload_kg: record.max_payload_kg,
            unit_weight_kg: record.unit_weight_kg,
            foldable: record.foldable,
            tire_size_mm: record.tire_size_inch.map(inches_to_mm),
            tire_type: record.tire_type,
            suspension: record.suspension,
            front_brake: record.front_brake,
            rear_brake: record.rear_brake,
            brakes,
            ip_body: record.ip_body,
            ip_battery: record.ip_battery,
            official_service: record.official_service,
            price_min_juta: record.price_min_juta,
            price_max_juta: record.price_max_juta,
            dimensions_open_mm: record.dimensions_open_mm,
            dimensions_folded_mm: record.dimensions_folded_mm,
            image_url: record.image_url,
            description: record.description,
            pros: record.pros,
            cons: record.cons,
            warnings: record.warnings,
            source,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Nominal power, falling back to peak power when nominal is absent or zero.
    pub fn motor_power_w(&self) -> Option<f64> {
        self.motor_power_nominal_w
            .filter(|watts| *watts != 0.0)
            .or(self.motor_power_max_w)
    }

    /// Inverse of the load-time conversion. Lossy: the stored value was rounded up.
    pub fn tire_size_inch(&self) -> Option<f64> {
        self.tire_size_mm.map(|mm| f64::from(mm) / MM_PER_INCH)
    }

    pub fn has_ip_rating(&self) -> bool {
        self.ip_body
            .as_deref()
            .map(|rating| !rating.is_empty())
            .unwrap_or(false)
    }

    /// Rough water rating read from `ip_body`: the first run of digits as one
    /// integer ("IP54" reads as 54, "IPX5" as 5). Anything after that run, such
    /// as a certificate date, is ignored. No digits reads as 0.
    pub fn ip_body_level(&self) -> u64 {
        self.ip_body
            .as_deref()
            .unwrap_or_default()
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .map_while(|c| c.to_digit(10))
            .fold(0u64, |level, digit| {
                level.saturating_mul(10).saturating_add(u64::from(digit))
            })
    }
}

impl From<CatalogRecord> for Item {
    fn from(record: CatalogRecord) -> Self {
        Self::from_record(record, None)
    }
}

fn inches_to_mm(inches: f64) -> u32 {
    (inches * MM_PER_INCH).ceil().max(0.0) as u32
}
