//! Job names and role classification.
//!
//! Tables are generated by `build.rs` from `data/jobs.csv`. Base classes
//! have a name but no role.

use auralyte_types::{JobId, Role};

include!(concat!(env!("OUT_DIR"), "/job_tables.rs"));

/// Role of a job, `None` for base classes and unknown ids
pub fn job_role(job: JobId) -> Option<Role> {
    JOB_ROLES.get(&job).copied()
}

pub fn job_name(job: JobId) -> Option<&'static str> {
    JOB_NAMES.get(&job).copied()
}

/// Whether `job` is classified under `role`
pub fn is_role(job: JobId, role: Role) -> bool {
    job_role(job) == Some(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tanks_are_tanks() {
        for job in [19, 21, 32, 37] {
            assert!(is_role(job, Role::Tank), "job {job} should be a tank");
        }
        assert!(!is_role(24, Role::Tank));
    }

    #[test]
    fn every_role_has_members() {
        let counts: Vec<usize> = Role::ALL
            .iter()
            .map(|role| JOB_ROLES.values().filter(|r| *r == role).count())
            .collect();
        assert_eq!(counts, vec![4, 4, 5, 3, 4]);
    }

    #[test]
    fn base_classes_have_no_role() {
        assert_eq!(job_role(1), None);
        assert_eq!(job_name(1), Some("Gladiator"));
        assert_eq!(job_role(999), None);
        assert_eq!(job_name(999), None);
    }
}
