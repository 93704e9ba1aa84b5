//! Aggregate statistics over the dataset

use generator::{Gender, PoliticalStatus, RegistrationStatus};

use crate::state::{AgeBucket, AppState, DemographicsSummary, PopulationSummary};

pub fn population_summary(state: &AppState) -> PopulationSummary {
    let residents = state.residents.list();
    let households = state.households.len();
    let male = residents.iter().filter(|r| r.gender == Gender::Male).count();

    let avg_household_size = if households == 0 {
        0.0
    } else {
        residents.len() as f64 / households as f64
    };

    PopulationSummary {
        seed: state.seed,
        residents: residents.len(),
        households,
        buildings: state.buildings.len(),
        avg_household_size: (avg_household_size * 100.0).round() / 100.0,
        male,
        female: residents.len() - male,
    }
}

pub fn demographics(state: &AppState) -> DemographicsSummary {
    let residents = state.residents.list();

    let bucket = |label: &str, lo: u32, hi: u32| AgeBucket {
        label: label.to_string(),
        count: residents
            .iter()
            .filter(|r| (lo..=hi).contains(&r.age))
            .count(),
    };

    let count_registration = |status: RegistrationStatus| {
        residents
            .iter()
            .filter(|r| r.registration_status == status)
            .count()
    };

    DemographicsSummary {
        age_buckets: vec![
            bucket("0-17", 0, 17),
            bucket("18-34", 18, 34),
            bucket("35-59", 35, 59),
            bucket("60+", 60, u32::MAX),
        ],
        registered: count_registration(RegistrationStatus::Registered),
        temporary: count_registration(RegistrationStatus::Temporary),
        unregistered: count_registration(RegistrationStatus::Unregistered),
        party_members: residents
            .iter()
            .filter(|r| r.political_status == PoliticalStatus::PartyMember)
            .count(),
        advanced_age: residents.iter().filter(|r| r.age >= 70).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generator::{generate, CommunityConfig};

    fn test_state() -> AppState {
        let config = CommunityConfig::default();
        let data = generate(&config, 42).unwrap();
        AppState::from_dataset(config, 42, data)
    }

    #[test]
    fn test_population_summary_totals() {
        let state = test_state();
        let summary = population_summary(&state);
        assert_eq!(summary.residents, state.residents.len());
        assert_eq!(summary.male + summary.female, summary.residents);
        assert!(summary.avg_household_size >= 1.0);
    }

    #[test]
    fn test_age_buckets_cover_everyone() {
        let state = test_state();
        let summary = demographics(&state);
        let total: usize = summary.age_buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, state.residents.len());
    }

    #[test]
    fn test_registration_counts_cover_everyone() {
        let state = test_state();
        let summary = demographics(&state);
        assert_eq!(
            summary.registered + summary.temporary + summary.unregistered,
            state.residents.len()
        );
    }
}
