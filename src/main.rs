use buspass::cli::{Cli, Commands};
use buspass::{Config, init_config, init_tracing, run};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Writing the default config must not depend on the current one parsing.
    if cli.command() == &Commands::InitConfig {
        init_tracing("info");
        return init_config();
    }

    let (config, config_path) = Config::load()?;
    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(cli, config, config_path))
}
