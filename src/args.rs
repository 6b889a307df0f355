use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to metadata table with sample ids in the first column.
    #[clap(long, short)]
    pub metadata: String,

    /// Name of the metadata column holding collection dates (YYYY-MM-DD).
    #[clap(long, default_value = "date")]
    pub column: String,

    /// Field delimiter of the metadata table, a single character or `\t`.
    #[clap(long, default_value = ",")]
    pub delimiter: String,

    /// Read the metadata table as tab separated, overriding `--delimiter`.
    #[clap(long)]
    pub tsv: bool,

    /// Path to sampling parameters (yaml file). Flags take precedence.
    #[clap(long)]
    pub parameters: Option<String>,

    /// Start of the first interval. Defaults to the earliest date.
    #[clap(long)]
    pub start_date: Option<String>,

    /// Number of days per interval.
    #[clap(long, allow_negative_numbers = true)]
    pub days_per_interval: Option<i64>,

    /// Maximum number of samples selected per interval.
    #[clap(long, allow_negative_numbers = true)]
    pub samples_per_interval: Option<i64>,

    /// Seed for the random selection.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Path to output (csv file)
    #[clap(long, short)]
    pub output: String,

    /// Path to log file.
    #[clap(long, default_value = "genome-sampler.log")]
    pub log_file: String,

    /// Increase logging verbosity.
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
