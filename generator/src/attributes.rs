//! Attribute Synthesizers
//!
//! Pure draws for individual resident fields. Each function is total: every
//! branch lands on a valid value of the target domain, so synthesis cannot
//! fail. Age gates what the other draws may produce (phone, occupation,
//! education, marital status).

use chrono::NaiveDate;

use crate::records::{
    Education, HealthStatus, MaritalStatus, PoliticalStatus, RegistrationStatus, Resident,
    ResidenceType,
};
use crate::resident::RoleContext;
use crate::rng::SeededRng;

/// Region prefix shared by all synthesized ID numbers.
const REGION_PREFIX: &str = "110108";

/// Check characters used by the national ID format.
const ID_CHECK_CHARS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "X",
];

/// Valid-looking mobile number prefixes.
const MOBILE_PREFIXES: &[&str] = &[
    "130", "131", "132", "135", "136", "137", "138", "139", "150", "151", "152", "155", "157",
    "158", "159", "176", "177", "178", "180", "181", "182", "185", "186", "187", "188", "189",
];

/// Occupation pool for working-age residents.
const OCCUPATIONS: &[&str] = &[
    "公司职员",
    "工人",
    "教师",
    "医生",
    "护士",
    "工程师",
    "公务员",
    "个体经营",
    "销售",
    "会计",
    "司机",
    "厨师",
    "保安",
    "快递员",
    "程序员",
    "设计师",
    "律师",
    "银行职员",
    "自由职业",
];

/// Occupation string for retirees.
pub const RETIRED: &str = "退休";

/// Minimum age for carrying a phone number.
const PHONE_MIN_AGE: u32 = 12;

/// Age threshold for the 高龄老人 tag.
const ADVANCED_AGE: u32 = 70;

/// Uniform integer age within the role's band.
pub fn age_for_role(role: &RoleContext, rng: &mut SeededRng) -> u32 {
    let (lo, hi) = role.age_band();
    rng.range_inclusive(lo, hi)
}

/// Birth date consistent with `age` at the reference year. Days are capped
/// at 28 so any month is valid.
pub fn birth_date_for_age(age: u32, reference_year: i32, rng: &mut SeededRng) -> NaiveDate {
    let year = reference_year - age as i32;
    let month = rng.range_inclusive(1, 12);
    let day = rng.range_inclusive(1, 28);
    NaiveDate::from_ymd_opt(year, month, day).expect("day <= 28 is valid in every month")
}

/// ID-number-like string: region prefix + birth date + sequence + check
/// character. Cosmetic only; the check character is not a real checksum.
pub fn id_number(birth_date: NaiveDate, rng: &mut SeededRng) -> String {
    format!(
        "{}{}{}{}",
        REGION_PREFIX,
        birth_date.format("%Y%m%d"),
        rng.digits(3),
        rng.pick(ID_CHECK_CHARS)
    )
}

/// Random mobile number: known prefix + 8 digits.
pub fn mobile_number(rng: &mut SeededRng) -> String {
    format!("{}{}", rng.pick(MOBILE_PREFIXES), rng.digits(8))
}

/// Phone for a resident of the given age; empty under 12.
pub fn phone_number(age: u32, rng: &mut SeededRng) -> String {
    if age < PHONE_MIN_AGE {
        return String::new();
    }
    mobile_number(rng)
}

/// Marital status gated by role and age. Children are always single;
/// spouses are married by construction.
pub fn marital_status(age: u32, role: &RoleContext, rng: &mut SeededRng) -> MaritalStatus {
    if matches!(role, RoleContext::Child { .. }) {
        return MaritalStatus::Single;
    }
    if matches!(role, RoleContext::Spouse { .. }) {
        return MaritalStatus::Married;
    }
    if age < 25 {
        return MaritalStatus::Single;
    }
    if age >= 65 && rng.chance(0.12) {
        return MaritalStatus::Widowed;
    }
    let r = rng.uniform();
    if r < 0.78 {
        MaritalStatus::Married
    } else if r < 0.86 {
        MaritalStatus::Divorced
    } else {
        MaritalStatus::Single
    }
}

/// Occupation and education, gated by age bracket.
pub fn occupation_education(age: u32, rng: &mut SeededRng) -> (String, Education) {
    if age < 7 {
        return (String::new(), Education::Illiterate);
    }
    if age < 12 {
        return (String::new(), Education::Primary);
    }
    if age < 15 {
        return (String::new(), Education::JuniorMiddle);
    }
    if age < 18 {
        return (String::new(), Education::SeniorMiddle);
    }

    if age >= 60 {
        let occupation = if rng.chance(0.85) {
            RETIRED.to_string()
        } else {
            (*rng.pick(OCCUPATIONS)).to_string()
        };
        let r = rng.uniform();
        let education = if r < 0.15 {
            Education::Illiterate
        } else if r < 0.45 {
            Education::Primary
        } else if r < 0.75 {
            Education::JuniorMiddle
        } else if r < 0.92 {
            Education::SeniorMiddle
        } else {
            Education::Vocational
        };
        return (occupation, education);
    }

    let occupation = (*rng.pick(OCCUPATIONS)).to_string();
    let r = rng.uniform();
    let education = if age < 36 {
        if r < 0.05 {
            Education::SeniorMiddle
        } else if r < 0.20 {
            Education::Vocational
        } else if r < 0.45 {
            Education::College
        } else if r < 0.85 {
            Education::Bachelor
        } else {
            Education::Postgraduate
        }
    } else if age < 50 {
        if r < 0.10 {
            Education::JuniorMiddle
        } else if r < 0.30 {
            Education::SeniorMiddle
        } else if r < 0.50 {
            Education::Vocational
        } else if r < 0.75 {
            Education::College
        } else {
            Education::Bachelor
        }
    } else {
        if r < 0.10 {
            Education::Primary
        } else if r < 0.40 {
            Education::JuniorMiddle
        } else if r < 0.70 {
            Education::SeniorMiddle
        } else if r < 0.90 {
            Education::Vocational
        } else {
            Education::College
        }
    };
    (occupation, education)
}

pub fn residence_type(rng: &mut SeededRng) -> ResidenceType {
    let r = rng.uniform();
    if r < 0.60 {
        ResidenceType::Owner
    } else if r < 0.85 {
        ResidenceType::Tenant
    } else if r < 0.95 {
        ResidenceType::Relative
    } else {
        ResidenceType::Other
    }
}

pub fn political_status(age: u32, rng: &mut SeededRng) -> PoliticalStatus {
    if age >= 18 && rng.chance(0.12) {
        return PoliticalStatus::PartyMember;
    }
    if (14..=35).contains(&age) && rng.chance(0.15) {
        return PoliticalStatus::LeagueMember;
    }
    PoliticalStatus::Masses
}

pub fn health_status(age: u32, rng: &mut SeededRng) -> HealthStatus {
    let chronic = if age >= 70 {
        0.35
    } else if age >= 60 {
        0.20
    } else {
        0.05
    };
    let r = rng.uniform();
    if r < chronic {
        return HealthStatus::ChronicIllness;
    }
    // Split the remaining mass 50/30/20
    let rest = (r - chronic) / (1.0 - chronic);
    if rest < 0.50 {
        HealthStatus::Healthy
    } else if rest < 0.80 {
        HealthStatus::Good
    } else {
        HealthStatus::Fair
    }
}

pub fn registration_status(rng: &mut SeededRng) -> RegistrationStatus {
    let r = rng.uniform();
    if r < 0.80 {
        RegistrationStatus::Registered
    } else if r < 0.95 {
        RegistrationStatus::Temporary
    } else {
        RegistrationStatus::Unregistered
    }
}

/// Move-in date within the last 15 years, never before the resident was born.
pub fn move_in_date(age: u32, reference_year: i32, rng: &mut SeededRng) -> NaiveDate {
    let years_back = rng.range_inclusive(0, 15).min(age);
    let year = reference_year - years_back as i32;
    let month = rng.range_inclusive(1, 12);
    let day = rng.range_inclusive(1, 28);
    NaiveDate::from_ymd_opt(year, month, day).expect("day <= 28 is valid in every month")
}

/// Deterministic tag set from already-chosen fields. No randomness here:
/// recomputing for the same resident always yields the same tags.
pub fn derive_tags(resident: &Resident) -> Vec<String> {
    let mut tags = Vec::new();
    if resident.residence_type == ResidenceType::Tenant {
        tags.push("租户");
    }
    if resident.political_status == PoliticalStatus::PartyMember {
        tags.push("党员");
    }
    if resident.occupation == RETIRED {
        tags.push("退休人员");
    }
    if resident.age >= ADVANCED_AGE {
        tags.push("高龄老人");
    }
    tags.into_iter().map(String::from).collect()
}
