// SPDX-License-Identifier: GPL-3.0-only
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use package_exploder::logging::setup_logging;
use package_exploder::{
    Config, DirectoryModule, DiskFileSystem, ExploderError, PackageExploder, PackageFiles,
    TracingExploderLog, ZipArchiveExtractor,
};

#[derive(Debug, Parser)]
#[command(name = "package-exploder", version, about = "Explode web application packages onto disk")]
struct Cli {
    /// Application root, overriding the configured one
    #[arg(long, global = true, env = "EXPLODER_APPLICATION_ROOT")]
    app_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Explode every package zip that is new or has changed
    Explode,
    /// Re-explode one zip regardless of its recorded version
    ExplodeZip { zip: PathBuf },
    /// Explode the packages embedded in a module directory
    ExplodeModule { module: PathBuf },
    /// Delete every exploded package directory
    Clean,
    /// Print the version recorded in an exploded package directory
    Version { directory: PathBuf },
    /// Log the package zips and exploded directories
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(app_root) = cli.app_root {
        config.application_root = app_root;
    }

    // Initialize logging
    setup_logging(&config.log_level)?;

    info!("Starting package-exploder v{}", env!("CARGO_PKG_VERSION"));

    let exploder = PackageExploder::new(
        Arc::new(DiskFileSystem::new()),
        Arc::new(ZipArchiveExtractor::new()),
        Arc::new(TracingExploderLog::new()),
        config.layout(),
    );
    let app_root = config.application_root.as_path();

    match cli.command {
        Command::Explode => match exploder.explode_all_zips(app_root) {
            Ok(directories) => print_directories(&directories),
            Err(e) => {
                // Skipped and exploded directories are still usable
                if let ExploderError::Batch { directories, .. } = &e {
                    print_directories(directories);
                }
                return Err(e).context("Failed to explode package zips");
            }
        },
        Command::ExplodeZip { zip } => {
            let directory = exploder
                .explode(app_root, &zip)
                .with_context(|| format!("Failed to explode {}", zip.display()))?;
            println!("{}", directory.display());
        }
        Command::ExplodeModule { module } => {
            let module = DirectoryModule::open(&module)
                .with_context(|| format!("Failed to open module {}", module.display()))?;
            let mut files = PackageFiles::new();
            exploder
                .explode_module(app_root, &module, &mut files)
                .context("Failed to explode module")?;
            for name in files.folder_names() {
                files.for_folder(name, |path| println!("{}\t{}", name, path.display()));
            }
        }
        Command::Clean => {
            exploder
                .clean_all(app_root)
                .context("Failed to clean package directories")?;
        }
        Command::Version { directory } => {
            println!("{}", exploder.read_version(&directory)?);
        }
        Command::Status => {
            exploder.log_package_state(app_root)?;
        }
    }

    Ok(())
}

fn print_directories(directories: &[PathBuf]) {
    for directory in directories {
        println!("{}", directory.display());
    }
}
