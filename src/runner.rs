use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::args::Args;
use crate::config::Parameters;
use crate::core::{DateColumn, IntervalSampler};
use crate::readwrite::{DATE_FORMAT, MetadataIO, SelectionIO};
use crate::stats::SelectionSummary;

pub struct Runner {
    args: Args,
    parameters: Parameters,
    metadata: DateColumn,
}

impl Runner {
    pub fn new(args: Args) -> Result<Runner> {
        Self::setup_logger(&args);

        let parameters = Self::load_parameters(&args)?;
        log::info!("Loaded parameters\n{}", parameters);

        let delimiter = Self::delimiter(&args)?;
        let metadata = DateColumn::read(args.metadata.as_str(), args.column.as_str(), delimiter)
            .with_context(|| format!("Unable to load metadata from {}", args.metadata))?;
        log::info!(
            "Loaded {} samples ({} without date) from {}",
            metadata.len(),
            metadata.n_absent(),
            args.metadata
        );

        Ok(Self {
            args,
            parameters,
            metadata,
        })
    }

    pub fn start(&self) -> Result<()> {
        let sampler = IntervalSampler::new(&self.parameters)?;
        let selection = sampler.select(&self.metadata)?;

        log::info!(
            "Selected {} of {} samples, anchored at {}",
            selection.n_included(),
            selection.inclusion().len(),
            selection.anchor()
        );
        for count in selection.interval_counts() {
            log::debug!("{count}");
        }

        log::info!("Storing selection to {}...", self.args.output);
        selection
            .write(self.args.output.as_str())
            .with_context(|| format!("Unable to write selection to {}", self.args.output))?;
        log::info!("Finished storing selection.");
        Ok(())
    }

    /// Setup logging level and file
    fn setup_logger(args: &Args) {
        let log_level = match args.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        simple_logging::log_to_file(args.log_file.as_str(), log_level).unwrap_or_else(|_| {
            eprintln!("Unable to open log file.");
            std::process::exit(1);
        });
    }

    /// Read parameters from file if given and apply overrides from the command line.
    fn load_parameters(args: &Args) -> Result<Parameters> {
        let mut parameters = match &args.parameters {
            Some(path) => Parameters::read_from_file(path)
                .with_context(|| format!("Unable to load parameters from {path}"))?,
            None => Parameters::default(),
        };

        if let Some(start_date) = &args.start_date {
            let start_date = NaiveDate::parse_from_str(start_date, DATE_FORMAT)
                .with_context(|| format!("Invalid start date `{start_date}`"))?;
            parameters.start_date = Some(start_date);
        }
        if let Some(days_per_interval) = args.days_per_interval {
            parameters.days_per_interval = days_per_interval;
        }
        if let Some(samples_per_interval) = args.samples_per_interval {
            parameters.samples_per_interval = Some(samples_per_interval);
        }
        if let Some(seed) = args.seed {
            parameters.seed = Some(seed);
        }

        parameters.validate()?;
        Ok(parameters)
    }

    /// Field delimiter as a byte. Accepts a single ascii character or the `\t` escape.
    fn delimiter(args: &Args) -> Result<u8> {
        if args.tsv {
            return Ok(b'\t');
        }
        let mut chars = args.delimiter.chars();
        match (chars.next(), chars.next()) {
            _ if args.delimiter == "\\t" => Ok(b'\t'),
            (Some(delimiter), None) if delimiter.is_ascii() => Ok(delimiter as u8),
            _ => bail!(
                "Delimiter `{}` is not a single ascii character",
                args.delimiter
            ),
        }
    }
}
