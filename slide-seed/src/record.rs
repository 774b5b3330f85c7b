use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

/// Subjects the synthetic slides are attributed to.
pub const NAMES: [&str; 10] = [
    "Edison", "Einstein", "Curie", "Tesla", "Newton", "Galileo", "Darwin", "Feynman", "Bohr",
    "Hawking",
];

pub const TISSUES: [&str; 10] = [
    "Heart", "Brain", "Liver", "Kidney", "Lung", "Pancreas", "Stomach", "Intestine", "Skin",
    "Bone",
];

pub const STAINS: [&str; 10] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Brown", "Black", "White",
];

pub const PROJECTS: [&str; 10] = [
    "Animate dead",
    "Revive",
    "Clone",
    "Regenerate",
    "Transplant",
    "Repair",
    "Enhance",
    "Modify",
    "Adapt",
    "Fortify",
];

/// Scan dates fall within the last five years of the sampling date.
pub const MAX_AGE_DAYS: i64 = 365 * 5;

/// One synthetic slide row: `name,date,tissue,stain,project` on the wire,
/// with the date rendered as `YYYY-MM-DD`.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SlideRecord {
    pub name: &'static str,
    pub date: NaiveDate,
    pub tissue: &'static str,
    pub stain: &'static str,
    pub project: &'static str,
}

impl SlideRecord {
    /// Draws one record, each field independently and uniformly from its
    /// source list. The date is `today` minus a uniform offset in
    /// `[0, MAX_AGE_DAYS]` days.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        SlideRecord {
            name: NAMES[rng.gen_range(0..NAMES.len())],
            date: today - Duration::days(rng.gen_range(0..=MAX_AGE_DAYS)),
            tissue: TISSUES[rng.gen_range(0..TISSUES.len())],
            stain: STAINS[rng.gen_range(0..STAINS.len())],
            project: PROJECTS[rng.gen_range(0..PROJECTS.len())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_sample_fields_come_from_source_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = fixed_today();
        for _ in 0..1000 {
            let record = SlideRecord::sample(&mut rng, today);
            assert!(NAMES.contains(&record.name));
            assert!(TISSUES.contains(&record.tissue));
            assert!(STAINS.contains(&record.stain));
            assert!(PROJECTS.contains(&record.project));
        }
    }

    #[test]
    fn test_sample_date_within_five_years() {
        let mut rng = StdRng::seed_from_u64(11);
        let today = fixed_today();
        let oldest = today - Duration::days(MAX_AGE_DAYS);
        for _ in 0..1000 {
            let record = SlideRecord::sample(&mut rng, today);
            assert!(record.date <= today);
            assert!(record.date >= oldest);
        }
    }

    #[test]
    fn test_sample_is_deterministic_for_a_seed() {
        let today = fixed_today();
        let mut rng_1 = StdRng::seed_from_u64(42);
        let mut rng_2 = StdRng::seed_from_u64(42);
        let record_1 = SlideRecord::sample(&mut rng_1, today);
        let record_2 = SlideRecord::sample(&mut rng_2, today);
        assert_eq!(record_1, record_2);
    }
}
