//! Family Synthesizer
//!
//! Builds one family per dwelling: 1-4 members sharing surname and address,
//! with sequential ids from a caller-provided start id.

use crate::records::{MaritalStatus, Resident};
use crate::resident::{Dwelling, ResidentSynthesizer, RoleContext};
use crate::rng::{derive_seed, SeededRng};

/// Probability that a multi-person family includes a spouse.
const SPOUSE_PROBABILITY: f64 = 0.8;

/// Seeded synthesizer producing whole families.
pub struct FamilySynthesizer {
    residents: ResidentSynthesizer,
    rng: SeededRng,
}

impl FamilySynthesizer {
    pub fn new(seed: u32, reference_year: i32) -> Self {
        Self {
            residents: ResidentSynthesizer::new(derive_seed(seed, "residents"), reference_year),
            rng: SeededRng::new(derive_seed(seed, "family-shape")),
        }
    }

    /// Synthesize one family at the dwelling. Members get ids `start_id`,
    /// `start_id + 1`, ... in order: head, optional spouse, children.
    pub fn synthesize(&mut self, start_id: u64, dwelling: &Dwelling) -> Vec<Resident> {
        let size = self.family_size();
        let mut members = Vec::with_capacity(size);

        if size == 1 {
            members.push(self.residents.synthesize(start_id, &RoleContext::Head, dwelling));
            return members;
        }

        let head = self
            .residents
            .synthesize(start_id, &RoleContext::Parent, dwelling);
        // Single-character surname table, so the first char is the surname
        let surname: String = head.name.chars().take(1).collect();
        let head_name = head.name.clone();
        let head_gender = head.gender;
        members.push(head);
        let mut next_id = start_id + 1;

        if self.rng.chance(SPOUSE_PROBABILITY) {
            let ctx = RoleContext::Spouse {
                surname: surname.clone(),
                gender: head_gender.opposite(),
                emergency_contact: head_name.clone(),
            };
            members.push(self.residents.synthesize(next_id, &ctx, dwelling));
            next_id += 1;
            // Head and spouse agree on marital status
            members[0].marital_status = MaritalStatus::Married;
        }

        while members.len() < size {
            let ctx = RoleContext::Child {
                surname: surname.clone(),
                emergency_contact: head_name.clone(),
            };
            members.push(self.residents.synthesize(next_id, &ctx, dwelling));
            next_id += 1;
        }

        members
    }

    /// Family size from nested thresholds: 30% one, 12% two, 21% three,
    /// remainder four.
    fn family_size(&mut self) -> usize {
        let r = self.rng.uniform();
        if r < 0.30 {
            1
        } else if r < 0.42 {
            2
        } else if r < 0.63 {
            3
        } else {
            4
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::HouseholdRole;

    fn test_dwelling() -> Dwelling {
        Dwelling {
            building: "5号楼".to_string(),
            unit: "1单元".to_string(),
            room: "402".to_string(),
            address: "幸福花园小区5号楼1单元402室".to_string(),
        }
    }

    #[test]
    fn test_family_sizes_in_range() {
        let mut synth = FamilySynthesizer::new(2025, 2025);
        let dwelling = test_dwelling();
        for i in 0..200 {
            let family = synth.synthesize(i * 10, &dwelling);
            assert!((1..=4).contains(&family.len()));
        }
    }

    #[test]
    fn test_size_distribution_roughly_matches() {
        let mut synth = FamilySynthesizer::new(404, 2025);
        let dwelling = test_dwelling();
        let draws = 3000;
        let singles = (0..draws)
            .filter(|i| synth.synthesize(i * 10, &dwelling).len() == 1)
            .count();
        let freq = singles as f64 / draws as f64;
        assert!((freq - 0.30).abs() < 0.04, "got {:.3}", freq);
    }

    #[test]
    fn test_members_share_surname_and_address() {
        let mut synth = FamilySynthesizer::new(7, 2025);
        let dwelling = test_dwelling();
        for i in 0..100 {
            let family = synth.synthesize(i * 10, &dwelling);
            if family.len() < 2 {
                continue;
            }
            let surname = family[0].name.chars().next().unwrap();
            for member in &family {
                assert_eq!(member.name.chars().next().unwrap(), surname);
                assert_eq!(member.address, dwelling.address);
                assert_eq!(member.building, dwelling.building);
                assert_eq!(member.room, dwelling.room);
            }
        }
    }

    #[test]
    fn test_sequential_ids_from_start() {
        let mut synth = FamilySynthesizer::new(11, 2025);
        let dwelling = test_dwelling();
        let family = synth.synthesize(500, &dwelling);
        for (offset, member) in family.iter().enumerate() {
            assert_eq!(member.id.0, 500 + offset as u64);
        }
    }

    #[test]
    fn test_single_member_family_is_a_head() {
        let mut synth = FamilySynthesizer::new(13, 2025);
        let dwelling = test_dwelling();
        for i in 0..300 {
            let family = synth.synthesize(i * 10, &dwelling);
            if family.len() == 1 {
                assert_eq!(family[0].household_role, HouseholdRole::Head);
                return;
            }
        }
        panic!("no single-member family in 300 draws");
    }

    #[test]
    fn test_spouse_pairs_are_married_and_opposite() {
        let mut synth = FamilySynthesizer::new(17, 2025);
        let dwelling = test_dwelling();
        for i in 0..200 {
            let family = synth.synthesize(i * 10, &dwelling);
            if let Some(spouse) = family
                .iter()
                .find(|m| m.household_role == HouseholdRole::Spouse)
            {
                assert_eq!(spouse.gender, family[0].gender.opposite());
                assert_eq!(spouse.marital_status, MaritalStatus::Married);
                assert_eq!(family[0].marital_status, MaritalStatus::Married);
                assert_eq!(spouse.emergency_contact, family[0].name);
            }
        }
    }

    #[test]
    fn test_children_follow_the_head() {
        let mut synth = FamilySynthesizer::new(19, 2025);
        let dwelling = test_dwelling();
        for i in 0..200 {
            let family = synth.synthesize(i * 10, &dwelling);
            for child in family
                .iter()
                .filter(|m| m.household_role == HouseholdRole::Child)
            {
                assert!(child.age <= 17);
                assert_eq!(child.marital_status, MaritalStatus::Single);
                assert_eq!(child.emergency_contact, family[0].name);
            }
        }
    }
}
