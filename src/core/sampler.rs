//! Longitudinal subsampling: bounded random selection per fixed-length interval.

use chrono::NaiveDate;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index;

use super::interval::Intervals;
use super::record::DateColumn;
use super::selection::Selection;
use crate::config::Parameters;
use crate::errors::{Result, SamplerError};

/// Selects at most a fixed number of records from every interval of
/// `days_per_interval` days, starting at the anchor date.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalSampler {
    start_date: Option<NaiveDate>,
    days_per_interval: i64,
    samples_per_interval: Option<usize>,
    seed: Option<u64>,
}

impl IntervalSampler {
    /// Create a sampler from validated parameters.
    pub fn new(parameters: &Parameters) -> Result<Self> {
        parameters.validate()?;
        let samples_per_interval = parameters
            .samples_per_interval
            .map(|cap| {
                usize::try_from(cap).map_err(|_| {
                    SamplerError::InvalidParameter(format!(
                        "samples_per_interval out of range: {cap}"
                    ))
                })
            })
            .transpose()?;
        Ok(Self {
            start_date: parameters.start_date,
            days_per_interval: parameters.days_per_interval,
            samples_per_interval,
            seed: parameters.seed,
        })
    }

    /// Decide for every record of `dates` whether it is included.
    ///
    /// Records without a date or dated before the anchor are never included.
    /// Every other record is assigned to the interval containing its date, and
    /// each interval keeps at most `samples_per_interval` of its records,
    /// drawn uniformly without replacement.
    pub fn select<'a>(&self, dates: &'a DateColumn) -> Result<Selection<'a>> {
        let anchor = self.resolve_anchor(dates)?;
        log::info!(
            "Selecting from {} records with anchor {anchor} and {} day intervals",
            dates.len(),
            self.days_per_interval
        );

        let intervals = Intervals::partition(dates.records(), anchor, self.days_per_interval);
        log::debug!(
            "{} records without date, {} records before anchor, {} eligible records in {} intervals",
            dates.n_absent(),
            dates.len() - dates.n_absent() - intervals.n_eligible(),
            intervals.n_eligible(),
            intervals.len()
        );

        let mut rng = self.make_rng();
        let mut inclusion = vec![false; dates.len()];
        for (key, members) in intervals.iter() {
            let n_selected = self.sample_interval(&mut rng, members, &mut inclusion);
            log::trace!(
                "Interval {key} starting {}: selected {n_selected} of {}",
                intervals.start(key),
                members.len()
            );
        }

        Ok(Selection::new(
            inclusion,
            dates,
            anchor,
            self.days_per_interval,
        ))
    }

    /// Explicit start date if configured, otherwise the earliest date.
    fn resolve_anchor(&self, dates: &DateColumn) -> Result<NaiveDate> {
        self.start_date.or_else(|| dates.min_date()).ok_or_else(|| {
            SamplerError::EmptyInput(format!(
                "No start date given and no dated records in column `{}`",
                dates.name()
            ))
        })
    }

    /// Fresh random source for a single selection.
    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Mark the selected members of one interval and return how many were marked.
    fn sample_interval<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        members: &[usize],
        inclusion: &mut [bool],
    ) -> usize {
        match self.samples_per_interval {
            Some(cap) if members.len() > cap => {
                for position in index::sample(rng, members.len(), cap) {
                    inclusion[members[position]] = true;
                }
                cap
            }
            _ => {
                for &member in members {
                    inclusion[member] = true;
                }
                members.len()
            }
        }
    }
}

/// Select records from `dates` with longitudinal subsampling.
pub fn select(
    dates: &DateColumn,
    start_date: Option<NaiveDate>,
    days_per_interval: i64,
    samples_per_interval: Option<i64>,
    seed: Option<u64>,
) -> Result<Selection<'_>> {
    let parameters = Parameters {
        start_date,
        days_per_interval,
        samples_per_interval,
        seed,
    };
    IntervalSampler::new(&parameters)?.select(dates)
}
