use anyhow::Context;
use clap::Parser;
use log::info;
use marlin_gen::{GeneratorConfig, KernelGenerator, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "marlin-gen",
    about = "Writes one CUDA source file per Marlin kernel instantiation"
)]
struct Opts {
    /// Directory to regenerate. Wiped before writing.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the files that would be written and exit.
    #[arg(long)]
    dry_run: bool,

    /// Log every written file.
    #[arg(short, long)]
    verbose: bool,
}

pub fn start_logger(level: log::LevelFilter) {
    let logger = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();
    if let Err(error) = logger {
        eprintln!("Error initializing logging: {:?}", error);
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    start_logger(if opts.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    let config = GeneratorConfig::new(opts.output_dir);
    let generator =
        KernelGenerator::from_config(config).context("Failed to load the kernel template")?;

    if opts.dry_run {
        for filename in generator.plan() {
            println!("{}", filename);
        }
        return Ok(());
    }

    let report = generator.generate().with_context(|| {
        format!(
            "Failed to generate kernels into {}",
            generator.config().output_dir.display()
        )
    })?;
    info!(
        "Wrote {} kernels to {}",
        report.written,
        report.output_dir.display()
    );
    Ok(())
}
