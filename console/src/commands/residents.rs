//! Resident queries

use generator::{Gender, HouseholdRole, MaritalStatus, Resident};

use crate::state::{AppState, ResidentRow};

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "男",
        Gender::Female => "女",
    }
}

fn role_label(role: HouseholdRole) -> &'static str {
    match role {
        HouseholdRole::Head => "户主",
        HouseholdRole::Spouse => "配偶",
        HouseholdRole::Child => "子女",
        HouseholdRole::Parent => "父母",
        HouseholdRole::Other => "其他",
    }
}

fn marital_label(status: MaritalStatus) -> &'static str {
    match status {
        MaritalStatus::Single => "未婚",
        MaritalStatus::Married => "已婚",
        MaritalStatus::Divorced => "离异",
        MaritalStatus::Widowed => "丧偶",
    }
}

fn build_resident_row(resident: &Resident) -> ResidentRow {
    ResidentRow {
        id: resident.id.0,
        name: resident.name.clone(),
        gender: gender_label(resident.gender).to_string(),
        age: resident.age,
        phone: resident.phone.clone(),
        building: resident.building.clone(),
        unit: resident.unit.clone(),
        room: resident.room.clone(),
        household_role: role_label(resident.household_role).to_string(),
        education: resident.education.label().to_string(),
        occupation: resident.occupation.clone(),
        marital_status: marital_label(resident.marital_status).to_string(),
        tags: resident.tags.clone(),
    }
}

pub fn list_residents(state: &AppState, limit: usize) -> Vec<ResidentRow> {
    state
        .residents
        .list()
        .iter()
        .take(limit)
        .map(build_resident_row)
        .collect()
}

pub fn get_resident(state: &AppState, id: u64) -> Option<ResidentRow> {
    state.residents.get(id).map(build_resident_row)
}

pub fn residents_by_building(state: &AppState, building: &str, limit: usize) -> Vec<ResidentRow> {
    state
        .residents
        .list()
        .iter()
        .filter(|r| r.building == building)
        .take(limit)
        .map(build_resident_row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use generator::{generate, CommunityConfig};

    fn test_state() -> AppState {
        let config = CommunityConfig::default();
        let data = generate(&config, 2025).unwrap();
        AppState::from_dataset(config, 2025, data)
    }

    #[test]
    fn test_list_respects_limit() {
        let state = test_state();
        assert_eq!(list_residents(&state, 10).len(), 10);
    }

    #[test]
    fn test_get_known_resident() {
        let state = test_state();
        let first = &state.residents.list()[0];
        let row = get_resident(&state, first.id.0).unwrap();
        assert_eq!(row.name, first.name);
        assert!(matches!(row.gender.as_str(), "男" | "女"));
    }

    #[test]
    fn test_building_filter_matches() {
        let state = test_state();
        let building = state.buildings[0].clone();
        let rows = residents_by_building(&state, &building, usize::MAX);
        assert!(!rows.is_empty());
        for row in rows {
            assert_eq!(row.building, building);
        }
    }
}
