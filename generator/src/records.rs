//! Record types for the synthesized dataset
//!
//! Plain serializable structs consumed by the console layer. Records are
//! created once during generation and never mutated by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResidentId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseholdId(pub u64);

// ============================================================================
// Resident enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Education levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Education {
    Illiterate,
    Primary,
    JuniorMiddle,
    SeniorMiddle,
    Vocational,
    College,
    Bachelor,
    Postgraduate,
}

impl Education {
    pub fn label(self) -> &'static str {
        match self {
            Education::Illiterate => "文盲",
            Education::Primary => "小学",
            Education::JuniorMiddle => "初中",
            Education::SeniorMiddle => "高中",
            Education::Vocational => "中专",
            Education::College => "大专",
            Education::Bachelor => "本科",
            Education::Postgraduate => "硕士及以上",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceType {
    Owner,
    Tenant,
    Relative,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseholdRole {
    Head,
    Spouse,
    Child,
    Parent,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoliticalStatus {
    Masses,
    PartyMember,
    LeagueMember,
}

impl PoliticalStatus {
    pub fn label(self) -> &'static str {
        match self {
            PoliticalStatus::Masses => "群众",
            PoliticalStatus::PartyMember => "中共党员",
            PoliticalStatus::LeagueMember => "共青团员",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Good,
    Fair,
    ChronicIllness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    Registered,
    Temporary,
    Unregistered,
}

// ============================================================================
// Resident
// ============================================================================

/// One synthesized person record.
///
/// Internal consistency guarantees: `age` matches `birth_date` against the
/// configured reference year and the role band the resident was created
/// under; `phone` is empty exactly when `age < 12`; children are always
/// `Single`; `tags` are a pure function of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resident {
    pub id: ResidentId,
    pub name: String,
    pub id_number: String,
    pub phone: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub age: u32,
    pub ethnicity: String,
    pub education: Education,
    pub occupation: String,
    pub marital_status: MaritalStatus,
    pub building: String,
    pub unit: String,
    pub room: String,
    pub address: String,
    pub residence_type: ResidenceType,
    pub move_in_date: NaiveDate,
    pub household_role: HouseholdRole,
    pub political_status: PoliticalStatus,
    pub health_status: HealthStatus,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub registration_status: RegistrationStatus,
    pub tags: Vec<String>,
    pub notes: String,
}

// ============================================================================
// Household
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseholdType {
    Single,
    Family,
    Group,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Owned,
    Rented,
    Public,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseholdStatus {
    Active,
    Moved,
    Demolished,
}

/// Aggregate of all residents registered at one dwelling unit.
///
/// `member_count == members.len()`, `members` lists the dwelling's residents
/// in synthesis order, and `head_name` is the first member's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    pub id: HouseholdId,
    pub address: String,
    pub building: String,
    pub unit: String,
    pub room: String,
    pub head_name: String,
    pub member_count: u32,
    pub members: Vec<ResidentId>,
    pub registration_date: NaiveDate,
    pub household_type: HouseholdType,
    pub area_sqm: f64,
    pub property_type: PropertyType,
    pub status: HouseholdStatus,
}
