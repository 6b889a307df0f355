use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::errors::SamplerError;

pub const DEFAULT_DAYS_PER_INTERVAL: i64 = 7;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Parameters {
    /// The start date anchors the interval boundaries. Samples dated before it are never
    /// selected. Defaults to the earliest date in the metadata.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// The number of days covered by each interval.
    #[serde(default = "default_days_per_interval")]
    pub days_per_interval: i64,

    /// The maximum number of samples selected from each interval. Every eligible sample is
    /// selected when unset.
    #[serde(default)]
    pub samples_per_interval: Option<i64>,

    /// Seed for the random selection within intervals.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_days_per_interval() -> i64 {
    DEFAULT_DAYS_PER_INTERVAL
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            start_date: None,
            days_per_interval: DEFAULT_DAYS_PER_INTERVAL,
            samples_per_interval: None,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ParametersError {
    IoError(std::io::Error),
    YamlError(serde_yaml::Error),
}

impl std::error::Error for ParametersError {}

impl std::fmt::Display for ParametersError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParametersError::IoError(error) => write!(formatter, "IO error: {}", error),
            ParametersError::YamlError(error) => write!(formatter, "YAML error: {}", error),
        }
    }
}

impl std::fmt::Display for Parameters {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = vec![];
        self.write(&mut output).map_err(|_| std::fmt::Error)?;
        let output = String::from_utf8(output).map_err(|_| std::fmt::Error)?;
        write!(formatter, "{}", output)
    }
}

impl Parameters {
    /// Check positivity constraints on the interval length and the per-interval cap.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.days_per_interval <= 0 {
            return Err(SamplerError::InvalidParameter(format!(
                "days_per_interval must be a positive integer, got {}",
                self.days_per_interval
            )));
        }
        if let Some(samples_per_interval) = self.samples_per_interval
            && samples_per_interval <= 0
        {
            return Err(SamplerError::InvalidParameter(format!(
                "samples_per_interval must be a positive integer, got {samples_per_interval}"
            )));
        }
        Ok(())
    }

    pub fn write(&self, writer: &mut dyn std::io::Write) -> Result<(), ParametersError> {
        serde_yaml::to_writer(writer, self).map_err(ParametersError::YamlError)
    }

    pub fn read(reader: &mut dyn std::io::Read) -> Result<Parameters, ParametersError> {
        serde_yaml::from_reader(reader).map_err(ParametersError::YamlError)
    }

    pub fn write_to_file(&self, filename: &str) -> Result<(), ParametersError> {
        let file = fs::File::create(filename).map_err(ParametersError::IoError)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write(&mut writer)
    }

    pub fn read_from_file(filename: &str) -> Result<Parameters, ParametersError> {
        let file = fs::File::open(filename).map_err(ParametersError::IoError)?;
        let mut reader = std::io::BufReader::new(file);
        Self::read(&mut reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn read_write() {
        let mut buffer = Vec::new();
        let parameters = Parameters {
            start_date: NaiveDate::from_ymd_opt(2019, 12, 26),
            days_per_interval: 14,
            samples_per_interval: Some(2),
            seed: Some(1),
        };
        parameters.write(&mut buffer).unwrap();
        let read_parameters = Parameters::read(&mut buffer.as_slice()).unwrap();
        assert_eq!(read_parameters, parameters);
    }

    #[test]
    fn read_defaults() {
        let content = "samples_per_interval: 1\n";
        let parameters = Parameters::read(&mut content.as_bytes()).unwrap();
        assert_eq!(parameters.start_date, None);
        assert_eq!(parameters.days_per_interval, DEFAULT_DAYS_PER_INTERVAL);
        assert_eq!(parameters.samples_per_interval, Some(1));
        assert_eq!(parameters.seed, None);
    }

    #[test]
    fn read_start_date() {
        let content = "start_date: 2019-12-27\n";
        let parameters = Parameters::read(&mut content.as_bytes()).unwrap();
        assert_eq!(parameters.start_date, NaiveDate::from_ymd_opt(2019, 12, 27));
    }

    #[test]
    #[serial]
    fn read_write_file() {
        let tmp_path = std::env::temp_dir().join("test_parameters.yaml");
        let path = tmp_path.to_str().unwrap();
        let parameters = Parameters {
            start_date: None,
            days_per_interval: 7,
            samples_per_interval: None,
            seed: Some(42),
        };
        parameters.write_to_file(path).unwrap();
        let read_parameters = Parameters::read_from_file(path).unwrap();
        assert_eq!(read_parameters, parameters);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn validate() {
        assert!(Parameters::default().validate().is_ok());

        for days_per_interval in [0, -7] {
            let parameters = Parameters {
                days_per_interval,
                ..Default::default()
            };
            assert!(matches!(
                parameters.validate(),
                Err(SamplerError::InvalidParameter(_))
            ));
        }

        for samples_per_interval in [0, -1] {
            let parameters = Parameters {
                samples_per_interval: Some(samples_per_interval),
                ..Default::default()
            };
            assert!(matches!(
                parameters.validate(),
                Err(SamplerError::InvalidParameter(_))
            ));
        }
    }
}
