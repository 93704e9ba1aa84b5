//! Resident Synthesizer
//!
//! Composes the attribute synthesizers into one internally consistent
//! resident record, under an explicit role context.

use crate::attributes;
use crate::names::NameGenerator;
use crate::records::{Gender, HouseholdRole, Resident, ResidentId};
use crate::rng::{derive_seed, SeededRng};

/// Role a resident is synthesized under. Each variant carries exactly the
/// family context it constrains; standalone roles carry none.
#[derive(Debug, Clone)]
pub enum RoleContext {
    /// Head of a single-person household.
    Head,
    /// Head of a multi-person family (parent age band).
    Parent,
    /// Spouse of a family head: fixed surname, fixed gender, head as
    /// emergency contact.
    Spouse {
        surname: String,
        gender: Gender,
        emergency_contact: String,
    },
    /// Child of a family: fixed surname, head as emergency contact.
    Child {
        surname: String,
        emergency_contact: String,
    },
    /// Elderly resident.
    Elderly,
}

impl RoleContext {
    /// Inclusive age range for this role.
    pub fn age_band(&self) -> (u32, u32) {
        match self {
            RoleContext::Head => (18, 80),
            RoleContext::Parent | RoleContext::Spouse { .. } => (25, 55),
            RoleContext::Child { .. } => (0, 17),
            RoleContext::Elderly => (60, 85),
        }
    }

    /// Household role recorded on the resident.
    pub fn household_role(&self) -> HouseholdRole {
        match self {
            RoleContext::Head | RoleContext::Parent => HouseholdRole::Head,
            RoleContext::Spouse { .. } => HouseholdRole::Spouse,
            RoleContext::Child { .. } => HouseholdRole::Child,
            RoleContext::Elderly => HouseholdRole::Parent,
        }
    }
}

/// Dwelling location a resident is registered at.
#[derive(Debug, Clone)]
pub struct Dwelling {
    pub building: String,
    pub unit: String,
    pub room: String,
    pub address: String,
}

/// Seeded synthesizer producing fully populated residents.
pub struct ResidentSynthesizer {
    rng: SeededRng,
    names: NameGenerator,
    reference_year: i32,
}

impl ResidentSynthesizer {
    pub fn new(seed: u32, reference_year: i32) -> Self {
        Self {
            rng: SeededRng::new(seed),
            names: NameGenerator::new(derive_seed(seed, "names")),
            reference_year,
        }
    }

    /// Synthesize one resident. The draw order is fixed: gender, name, age,
    /// birth date, id number, phone, marital status, occupation/education,
    /// residence/political/health/registration, emergency contact, tags.
    pub fn synthesize(&mut self, id: u64, ctx: &RoleContext, dwelling: &Dwelling) -> Resident {
        let gender = match ctx {
            RoleContext::Spouse { gender, .. } => *gender,
            _ => self.names.gender(0.5),
        };
        let name = match ctx {
            RoleContext::Spouse { surname, .. } | RoleContext::Child { surname, .. } => {
                self.names.full_name_with_surname(surname, gender)
            }
            _ => self.names.full_name(gender),
        };

        let age = attributes::age_for_role(ctx, &mut self.rng);
        let birth_date = attributes::birth_date_for_age(age, self.reference_year, &mut self.rng);
        let id_number = attributes::id_number(birth_date, &mut self.rng);
        let phone = attributes::phone_number(age, &mut self.rng);
        let marital_status = attributes::marital_status(age, ctx, &mut self.rng);
        let (occupation, education) = attributes::occupation_education(age, &mut self.rng);
        let residence_type = attributes::residence_type(&mut self.rng);
        let move_in_date = attributes::move_in_date(age, self.reference_year, &mut self.rng);
        let political_status = attributes::political_status(age, &mut self.rng);
        let health_status = attributes::health_status(age, &mut self.rng);
        let registration_status = attributes::registration_status(&mut self.rng);

        let (emergency_contact, emergency_phone) = match ctx {
            RoleContext::Spouse {
                emergency_contact, ..
            }
            | RoleContext::Child {
                emergency_contact, ..
            } => (
                emergency_contact.clone(),
                attributes::mobile_number(&mut self.rng),
            ),
            _ => (
                self.names.full_name(gender.opposite()),
                attributes::mobile_number(&mut self.rng),
            ),
        };

        let mut resident = Resident {
            id: ResidentId(id),
            name,
            id_number,
            phone,
            gender,
            birth_date,
            age,
            ethnicity: "汉族".to_string(),
            education,
            occupation,
            marital_status,
            building: dwelling.building.clone(),
            unit: dwelling.unit.clone(),
            room: dwelling.room.clone(),
            address: dwelling.address.clone(),
            residence_type,
            move_in_date,
            household_role: ctx.household_role(),
            political_status,
            health_status,
            emergency_contact,
            emergency_phone,
            registration_status,
            tags: Vec::new(),
            notes: String::new(),
        };
        resident.tags = attributes::derive_tags(&resident);
        resident
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MaritalStatus;

    fn test_dwelling() -> Dwelling {
        Dwelling {
            building: "3号楼".to_string(),
            unit: "2单元".to_string(),
            room: "301".to_string(),
            address: "幸福花园小区3号楼2单元301室".to_string(),
        }
    }

    #[test]
    fn test_age_bands_per_role() {
        let mut synth = ResidentSynthesizer::new(2025, 2025);
        let dwelling = test_dwelling();
        let child_ctx = RoleContext::Child {
            surname: "李".to_string(),
            emergency_contact: "李强".to_string(),
        };
        for i in 0..100 {
            let head = synth.synthesize(i, &RoleContext::Head, &dwelling);
            assert!((18..=80).contains(&head.age));
            let parent = synth.synthesize(i, &RoleContext::Parent, &dwelling);
            assert!((25..=55).contains(&parent.age));
            let child = synth.synthesize(i, &child_ctx, &dwelling);
            assert!(child.age <= 17);
            let elder = synth.synthesize(i, &RoleContext::Elderly, &dwelling);
            assert!((60..=85).contains(&elder.age));
        }
    }

    #[test]
    fn test_phone_consistency() {
        let mut synth = ResidentSynthesizer::new(7, 2025);
        let dwelling = test_dwelling();
        let ctx = RoleContext::Child {
            surname: "张".to_string(),
            emergency_contact: "张伟".to_string(),
        };
        for i in 0..200 {
            let resident = synth.synthesize(i, &ctx, &dwelling);
            assert_eq!(resident.phone.is_empty(), resident.age < 12);
        }
    }

    #[test]
    fn test_spouse_context_is_honored() {
        let mut synth = ResidentSynthesizer::new(11, 2025);
        let dwelling = test_dwelling();
        let ctx = RoleContext::Spouse {
            surname: "王".to_string(),
            gender: Gender::Female,
            emergency_contact: "王军".to_string(),
        };
        for i in 0..50 {
            let spouse = synth.synthesize(i, &ctx, &dwelling);
            assert_eq!(spouse.gender, Gender::Female);
            assert!(spouse.name.starts_with('王'));
            assert_eq!(spouse.marital_status, MaritalStatus::Married);
            assert_eq!(spouse.emergency_contact, "王军");
            assert_eq!(spouse.household_role, HouseholdRole::Spouse);
        }
    }

    #[test]
    fn test_birth_date_consistent_with_age() {
        let mut synth = ResidentSynthesizer::new(13, 2025);
        let dwelling = test_dwelling();
        for i in 0..100 {
            let resident = synth.synthesize(i, &RoleContext::Head, &dwelling);
            let birth_year = resident.birth_date.format("%Y").to_string();
            assert_eq!(birth_year, (2025 - resident.age as i32).to_string());
            assert!(resident.id_number.contains(&birth_year));
        }
    }

    #[test]
    fn test_elderly_tagged_at_seventy() {
        let mut synth = ResidentSynthesizer::new(17, 2025);
        let dwelling = test_dwelling();
        for i in 0..200 {
            let elder = synth.synthesize(i, &RoleContext::Elderly, &dwelling);
            assert_eq!(
                elder.age >= 70,
                elder.tags.iter().any(|t| t == "高龄老人")
            );
        }
    }

    #[test]
    fn test_same_seed_same_resident() {
        let dwelling = test_dwelling();
        let mut a = ResidentSynthesizer::new(99, 2025);
        let mut b = ResidentSynthesizer::new(99, 2025);
        for i in 0..50 {
            let ra = a.synthesize(i, &RoleContext::Head, &dwelling);
            let rb = b.synthesize(i, &RoleContext::Head, &dwelling);
            assert_eq!(ra.name, rb.name);
            assert_eq!(ra.id_number, rb.id_number);
            assert_eq!(ra.phone, rb.phone);
            assert_eq!(ra.tags, rb.tags);
        }
    }
}
