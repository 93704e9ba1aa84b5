//! Console state and serializable row types

use generator::{CommunityConfig, CommunityData, Household, Resident};
use serde::Serialize;

use crate::store::Store;

/// Everything a console session operates on: the configuration and seed the
/// dataset was generated from, plus one store per collection.
pub struct AppState {
    pub config: CommunityConfig,
    pub seed: u32,
    pub residents: Store<Resident>,
    pub households: Store<Household>,
    pub buildings: Vec<String>,
}

impl AppState {
    pub fn from_dataset(config: CommunityConfig, seed: u32, data: CommunityData) -> Self {
        Self {
            config,
            seed,
            residents: Store::from_items(data.residents),
            households: Store::from_items(data.households),
            buildings: data.buildings,
        }
    }

    /// Rebuild the dataset shape from the stores.
    pub fn dataset(&self) -> CommunityData {
        CommunityData {
            residents: self.residents.list().to_vec(),
            households: self.households.list().to_vec(),
            buildings: self.buildings.clone(),
        }
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct ResidentRow {
    pub id: u64,
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub phone: String,
    pub building: String,
    pub unit: String,
    pub room: String,
    pub household_role: String,
    pub education: String,
    pub occupation: String,
    pub marital_status: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct HouseholdRow {
    pub id: u64,
    pub address: String,
    pub head_name: String,
    pub member_count: u32,
    pub household_type: String,
    pub area_sqm: f64,
    pub status: String,
}

#[derive(Serialize, Clone)]
pub struct PopulationSummary {
    pub seed: u32,
    pub residents: usize,
    pub households: usize,
    pub buildings: usize,
    pub avg_household_size: f64,
    pub male: usize,
    pub female: usize,
}

#[derive(Serialize, Clone)]
pub struct AgeBucket {
    pub label: String,
    pub count: usize,
}

#[derive(Serialize, Clone)]
pub struct DemographicsSummary {
    pub age_buckets: Vec<AgeBucket>,
    pub registered: usize,
    pub temporary: usize,
    pub unregistered: usize,
    pub party_members: usize,
    pub advanced_age: usize,
}
