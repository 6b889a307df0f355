use clap::Parser;
use genome_sampler::args::Args;
use genome_sampler::runner::Runner;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let runner = Runner::new(args)?;
    runner.start()
}
