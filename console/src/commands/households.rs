//! Household queries

use generator::{Household, HouseholdStatus, HouseholdType};

use crate::state::{AppState, HouseholdRow, ResidentRow};

fn type_label(household_type: HouseholdType) -> &'static str {
    match household_type {
        HouseholdType::Single => "单人户",
        HouseholdType::Family => "家庭户",
        HouseholdType::Group => "集体户",
        HouseholdType::Other => "其他",
    }
}

fn status_label(status: HouseholdStatus) -> &'static str {
    match status {
        HouseholdStatus::Active => "正常",
        HouseholdStatus::Moved => "迁出",
        HouseholdStatus::Demolished => "注销",
    }
}

fn build_household_row(household: &Household) -> HouseholdRow {
    HouseholdRow {
        id: household.id.0,
        address: household.address.clone(),
        head_name: household.head_name.clone(),
        member_count: household.member_count,
        household_type: type_label(household.household_type).to_string(),
        area_sqm: household.area_sqm,
        status: status_label(household.status).to_string(),
    }
}

pub fn list_households(state: &AppState, limit: usize) -> Vec<HouseholdRow> {
    state
        .households
        .list()
        .iter()
        .take(limit)
        .map(build_household_row)
        .collect()
}

pub fn get_household(state: &AppState, id: u64) -> Option<HouseholdRow> {
    state.households.get(id).map(build_household_row)
}

/// Member rows for one household, in household order.
pub fn household_members(state: &AppState, id: u64) -> Vec<ResidentRow> {
    let Some(household) = state.households.get(id) else {
        return Vec::new();
    };
    household
        .members
        .iter()
        .filter_map(|member_id| super::residents::get_resident(state, member_id.0))
        .collect()
}
