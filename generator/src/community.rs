//! Community Generator
//!
//! Walks the building catalog room by room, flips occupancy per room,
//! synthesizes one family per occupied room, and aggregates each family
//! into a household. Generation is a single synchronous pass, reproducible
//! from (config, seed), and hard-capped on resident count.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::family::FamilySynthesizer;
use crate::records::{
    Household, HouseholdId, HouseholdStatus, HouseholdType, PropertyType, Resident,
};
use crate::resident::Dwelling;
use crate::rng::{derive_seed, SeededRng};

const AREA_MIN: f64 = 60.0;
const AREA_MAX: f64 = 140.0;

/// Floor-area distribution; samples are clamped into [AREA_MIN, AREA_MAX].
static AREA_DIST: Lazy<Normal<f64>> =
    Lazy::new(|| Normal::new(95.0, 20.0).expect("valid normal parameters"));

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("building catalog is empty")]
    EmptyBuildingCatalog,
    #[error("building layout has no rooms")]
    NoRooms,
    #[error("resident cap must be positive")]
    ZeroResidentCap,
    #[error("occupancy rate {0} outside [0, 1]")]
    InvalidOccupancy(f64),
}

/// Shape of the community to synthesize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityConfig {
    pub street_address: String,
    pub buildings: Vec<String>,
    pub units_per_building: u32,
    pub floors_per_unit: u32,
    pub rooms_per_floor: u32,
    pub occupancy_rate: f64,
    pub max_residents: usize,
    pub reference_year: i32,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            street_address: "幸福花园小区".to_string(),
            buildings: (1..=12).map(|i| format!("{}号楼", i)).collect(),
            units_per_building: 3,
            floors_per_unit: 6,
            rooms_per_floor: 4,
            occupancy_rate: 0.8,
            max_residents: 1200,
            reference_year: 2025,
        }
    }
}

impl CommunityConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.buildings.is_empty() {
            return Err(GeneratorError::EmptyBuildingCatalog);
        }
        if self.units_per_building == 0 || self.floors_per_unit == 0 || self.rooms_per_floor == 0 {
            return Err(GeneratorError::NoRooms);
        }
        if self.max_residents == 0 {
            return Err(GeneratorError::ZeroResidentCap);
        }
        if !(0.0..=1.0).contains(&self.occupancy_rate) {
            return Err(GeneratorError::InvalidOccupancy(self.occupancy_rate));
        }
        Ok(())
    }
}

/// The generated dataset. `buildings` lists the catalog entries that
/// actually received at least one household, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityData {
    pub residents: Vec<Resident>,
    pub households: Vec<Household>,
    pub buildings: Vec<String>,
}

/// Generate a community dataset, reproducibly, from a seed.
pub fn generate(config: &CommunityConfig, seed: u32) -> Result<CommunityData, GeneratorError> {
    config.validate()?;

    let mut rng = SeededRng::new(derive_seed(seed, "community"));
    let mut families = FamilySynthesizer::new(derive_seed(seed, "families"), config.reference_year);

    let mut residents: Vec<Resident> = Vec::new();
    let mut households: Vec<Household> = Vec::new();
    let mut next_resident_id: u64 = 1;
    let mut next_household_id: u64 = 1;

    'catalog: for building in &config.buildings {
        let households_before = households.len();

        for unit in 1..=config.units_per_building {
            for floor in 1..=config.floors_per_unit {
                for room_index in 1..=config.rooms_per_floor {
                    if residents.len() >= config.max_residents {
                        break 'catalog;
                    }
                    if !rng.chance(config.occupancy_rate) {
                        continue;
                    }

                    let room = format!("{}{:02}", floor, room_index);
                    let unit_label = format!("{}单元", unit);
                    let address = format!(
                        "{}{}{}{}室",
                        config.street_address, building, unit_label, room
                    );
                    let dwelling = Dwelling {
                        building: building.clone(),
                        unit: unit_label,
                        room,
                        address,
                    };

                    let mut members = families.synthesize(next_resident_id, &dwelling);
                    // Hard cap: cut the family that crosses it
                    let remaining = config.max_residents - residents.len();
                    if members.len() > remaining {
                        members.truncate(remaining);
                    }
                    next_resident_id += members.len() as u64;

                    households.push(Household {
                        id: HouseholdId(next_household_id),
                        address: dwelling.address.clone(),
                        building: dwelling.building.clone(),
                        unit: dwelling.unit.clone(),
                        room: dwelling.room.clone(),
                        head_name: members[0].name.clone(),
                        member_count: members.len() as u32,
                        members: members.iter().map(|m| m.id).collect(),
                        registration_date: registration_date(config.reference_year, &mut rng),
                        household_type: if members.len() == 1 {
                            HouseholdType::Single
                        } else {
                            HouseholdType::Family
                        },
                        area_sqm: draw_area(&mut rng),
                        property_type: draw_property_type(&mut rng),
                        status: draw_household_status(&mut rng),
                    });
                    next_household_id += 1;
                    residents.extend(members);
                }
            }
        }

        debug!(
            "{}: {} households, {} residents so far",
            building,
            households.len() - households_before,
            residents.len()
        );
    }

    // Households are appended building by building, so consecutive
    // dedup recovers the contributing catalog entries in order.
    let mut buildings: Vec<String> = Vec::new();
    for household in &households {
        if buildings.last() != Some(&household.building) {
            buildings.push(household.building.clone());
        }
    }

    info!(
        "Generated {} residents in {} households across {} buildings (seed {})",
        residents.len(),
        households.len(),
        buildings.len(),
        seed
    );

    Ok(CommunityData {
        residents,
        households,
        buildings,
    })
}

/// Generate with a fresh entropy seed: a new dataset on every call.
pub fn generate_with_ambient_seed(config: &CommunityConfig) -> Result<CommunityData, GeneratorError> {
    let seed = SeededRng::from_entropy().next_u32();
    generate(config, seed)
}

fn registration_date(reference_year: i32, rng: &mut SeededRng) -> NaiveDate {
    let year = reference_year - rng.range_inclusive(0, 15) as i32;
    let month = rng.range_inclusive(1, 12);
    let day = rng.range_inclusive(1, 28);
    NaiveDate::from_ymd_opt(year, month, day).expect("day <= 28 is valid in every month")
}

fn draw_area(rng: &mut SeededRng) -> f64 {
    let raw = AREA_DIST.sample(rng);
    (raw.clamp(AREA_MIN, AREA_MAX) * 10.0).round() / 10.0
}

fn draw_property_type(rng: &mut SeededRng) -> PropertyType {
    let r = rng.uniform();
    if r < 0.65 {
        PropertyType::Owned
    } else if r < 0.90 {
        PropertyType::Rented
    } else if r < 0.97 {
        PropertyType::Public
    } else {
        PropertyType::Other
    }
}

fn draw_household_status(rng: &mut SeededRng) -> HouseholdStatus {
    let r = rng.uniform();
    if r < 0.96 {
        HouseholdStatus::Active
    } else if r < 0.99 {
        HouseholdStatus::Moved
    } else {
        HouseholdStatus::Demolished
    }
}
