//! JSON instance loading.
//!
//! The instance format is a nested list: outer index = job, inner list of
//! `[machine_id, duration]` integer pairs.
//!
//! ```json
//! [[[0, 3], [1, 2]], [[1, 4], [0, 1]]]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{JobSpec, RawJobs};

impl JobSpec {
    /// Parses and validates an instance from JSON text.
    ///
    /// # Errors
    /// [`JobShopError::Parse`](crate::JobShopError::Parse) for bad JSON or a
    /// wrong shape (e.g. a pair with three elements), and
    /// [`JobShopError::Invalid`](crate::JobShopError::Invalid) for integrity faults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawJobs = serde_json::from_str(json)?;
        Self::from_pairs(raw)
    }

    /// Parses and validates an instance from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawJobs = serde_json::from_reader(reader)?;
        Self::from_pairs(raw)
    }

    /// Loads an instance file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let spec = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            jobs = spec.num_jobs(),
            machines = spec.num_machines(),
            "loaded job-shop instance"
        );
        Ok(spec)
    }

    /// Serializes the instance back to its JSON text form.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_pairs())?)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::JobShopError;
    use crate::models::JobSpec;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_instance() {
        let spec = JobSpec::from_json_str("[[[0, 3], [1, 2]], [[1, 4]]]").unwrap();
        assert_eq!(spec.num_jobs(), 2);
        assert_eq!(spec.num_machines(), 2);
        assert_eq!(spec.job(0).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_from_reader() {
        let data = b"[[[2, 1]]]";
        let spec = JobSpec::from_reader(&data[..]).unwrap();
        assert_eq!(spec.num_machines(), 3);
    }

    #[test]
    fn test_bad_pair_shape() {
        let err = JobSpec::from_json_str("[[[0, 3, 9]]]").unwrap_err();
        assert!(matches!(err, JobShopError::Parse(_)));
    }

    #[test]
    fn test_not_json() {
        let err = JobSpec::from_json_str("jobs: 3").unwrap_err();
        assert!(matches!(err, JobShopError::Parse(_)));
    }

    #[test]
    fn test_negative_values_rejected() {
        let err = JobSpec::from_json_str("[[[0, -3]]]").unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeDuration);
    }

    #[test]
    fn test_huge_machine_id_rejected() {
        let err = JobSpec::from_json_str("[[[9223372036854775807, 1]]]").unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors[0].kind, ValidationErrorKind::MachineOutOfRange);
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = JobSpec::from_json_str("[]").unwrap_err();
        assert!(matches!(err, JobShopError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = JobSpec::from_path("/nonexistent/instance.json").unwrap_err();
        assert!(matches!(err, JobShopError::Io(_)));
    }

    #[test]
    fn test_json_round_trip_text() {
        let spec = JobSpec::from_json_str("[[[0,3],[1,2]],[[1,4]]]").unwrap();
        assert_eq!(spec.to_json_string().unwrap(), "[[[0,3],[1,2]],[[1,4]]]");
    }
}
