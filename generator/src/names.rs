//! Name Generation for Residents
//!
//! Weighted surname and given-name-character pools, sampled from a seeded
//! stream so name sequences are reproducible.

use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::records::Gender;
use crate::rng::SeededRng;
use crate::sampler::WeightedTable;

/// Surnames weighted loosely after national frequency ordering.
const SURNAMES: &[(&str, f64)] = &[
    ("王", 7.2),
    ("李", 7.1),
    ("张", 6.8),
    ("刘", 5.4),
    ("陈", 4.6),
    ("杨", 3.1),
    ("赵", 2.3),
    ("黄", 2.2),
    ("周", 2.1),
    ("吴", 2.0),
    ("徐", 1.7),
    ("孙", 1.5),
    ("胡", 1.4),
    ("朱", 1.3),
    ("高", 1.2),
    ("林", 1.2),
    ("何", 1.2),
    ("郭", 1.1),
    ("马", 1.1),
    ("罗", 0.9),
    ("梁", 0.8),
    ("宋", 0.8),
    ("郑", 0.8),
    ("谢", 0.7),
    ("韩", 0.7),
    ("唐", 0.6),
    ("冯", 0.6),
    ("于", 0.6),
    ("董", 0.6),
    ("程", 0.5),
];

/// Given-name characters for males, common characters weighted up.
const MALE_GIVEN_CHARS: &[(&str, f64)] = &[
    ("伟", 3.0),
    ("强", 3.0),
    ("军", 2.5),
    ("磊", 2.5),
    ("勇", 2.5),
    ("杰", 2.5),
    ("涛", 2.0),
    ("斌", 2.0),
    ("辉", 2.0),
    ("刚", 2.0),
    ("健", 1.5),
    ("明", 1.5),
    ("亮", 1.5),
    ("俊", 1.5),
    ("峰", 1.5),
    ("超", 1.5),
    ("平", 1.0),
    ("鹏", 1.0),
    ("飞", 1.0),
    ("宇", 1.0),
    ("浩", 1.0),
    ("凯", 1.0),
    ("鑫", 1.0),
    ("波", 1.0),
    ("龙", 1.0),
    ("建", 1.0),
    ("国", 1.0),
    ("华", 1.0),
    ("文", 1.0),
    ("东", 1.0),
];

/// Given-name characters for females, common characters weighted up.
const FEMALE_GIVEN_CHARS: &[(&str, f64)] = &[
    ("芳", 3.0),
    ("娜", 3.0),
    ("敏", 2.5),
    ("静", 2.5),
    ("丽", 2.5),
    ("娟", 2.5),
    ("艳", 2.0),
    ("秀", 2.0),
    ("英", 2.0),
    ("慧", 2.0),
    ("玉", 1.5),
    ("兰", 1.5),
    ("红", 1.5),
    ("梅", 1.5),
    ("琳", 1.5),
    ("雪", 1.5),
    ("云", 1.0),
    ("莲", 1.0),
    ("霞", 1.0),
    ("燕", 1.0),
    ("萍", 1.0),
    ("玲", 1.0),
    ("婷", 1.0),
    ("欣", 1.0),
    ("悦", 1.0),
    ("蕾", 1.0),
    ("月", 1.0),
    ("晶", 1.0),
    ("倩", 1.0),
    ("佳", 1.0),
];

/// Seeded generator for full Chinese names.
///
/// Given-name length follows roughly 70% two characters, 20% one character,
/// 10% three characters, and the same character never appears twice in a
/// row within one given name.
pub struct NameGenerator {
    rng: SeededRng,
    surnames: WeightedTable<&'static str>,
    male_chars: WeightedTable<&'static str>,
    female_chars: WeightedTable<&'static str>,
}

impl NameGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SeededRng::new(seed),
            surnames: WeightedTable::from_pairs(SURNAMES),
            male_chars: WeightedTable::from_pairs(MALE_GIVEN_CHARS),
            female_chars: WeightedTable::from_pairs(FEMALE_GIVEN_CHARS),
        }
    }

    /// Draw one surname from the weighted table.
    pub fn surname(&mut self) -> &'static str {
        *self.surnames.sample(&mut self.rng)
    }

    /// Draw a given name for the gender's character pool.
    pub fn given_name(&mut self, gender: Gender) -> String {
        let pool = match gender {
            Gender::Male => &self.male_chars,
            Gender::Female => &self.female_chars,
        };

        let r = self.rng.uniform();
        let length = if r < 0.70 {
            2
        } else if r < 0.90 {
            1
        } else {
            3
        };

        let mut name = String::new();
        let mut previous: Option<&str> = None;
        for _ in 0..length {
            let mut ch = *pool.sample(&mut self.rng);
            // Redraw on immediate repeats
            while previous == Some(ch) {
                ch = *pool.sample(&mut self.rng);
            }
            name.push_str(ch);
            previous = Some(ch);
        }
        name
    }

    /// Surname + given name.
    pub fn full_name(&mut self, gender: Gender) -> String {
        let surname = self.surname();
        format!("{}{}", surname, self.given_name(gender))
    }

    /// Given name appended to a surname inherited from family context.
    pub fn full_name_with_surname(&mut self, surname: &str, gender: Gender) -> String {
        format!("{}{}", surname, self.given_name(gender))
    }

    /// Draw a gender with the given male probability.
    pub fn gender(&mut self, male_probability: f64) -> Gender {
        if self.rng.chance(male_probability) {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

// Fixed-seed module-level generators: the name sequences are identical
// across process runs.
static NAME_GEN: Lazy<Mutex<NameGenerator>> = Lazy::new(|| Mutex::new(NameGenerator::new(2025)));
static LEADER_NAME_GEN: Lazy<Mutex<NameGenerator>> =
    Lazy::new(|| Mutex::new(NameGenerator::new(808)));

/// Next name from the shared fixed-seed stream.
pub fn gen_name() -> String {
    let mut gen = NAME_GEN.lock().unwrap();
    let gender = gen.gender(0.5);
    gen.full_name(gender)
}

/// Next leader name from its own fixed-seed stream (male-weighted pool mix).
pub fn gen_leader_name() -> String {
    let mut gen = LEADER_NAME_GEN.lock().unwrap();
    let gender = gen.gender(0.7);
    gen.full_name(gender)
}
