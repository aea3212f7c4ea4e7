use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use verman::bumper::VersionBumper;
use verman::config;
use verman::manifest::ManifestAttributes;
use verman::memory;
use verman::store::VersionStore;
use verman::ui;
use verman::version::SemVer;

#[derive(Parser)]
#[command(
    name = "verman",
    about = "Manage the project's persisted semantic version"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Version file path, overrides configuration")]
    file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Increment one component of the version and persist it
    Bump {
        #[arg(value_enum)]
        part: BumpPart,
    },

    /// Print the current version
    Current,

    /// Print JVM heap flags sized from total system memory
    JvmArgs,

    /// Print manifest attributes for packaging
    Manifest {
        #[arg(long, help = "Override the runtime profile")]
        profile: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BumpPart {
    Major,
    Minor,
    Patch,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let version_file = args.file.unwrap_or_else(|| config.version_file.clone());
    let mut store = VersionStore::new(version_file);

    match args.command {
        Command::Bump { part } => {
            let mut bumper = VersionBumper::new(&mut store);
            let result = match part {
                BumpPart::Major => bumper.bump_major(),
                BumpPart::Minor => bumper.bump_minor(),
                BumpPart::Patch => bumper.bump_patch(),
            };
            match result {
                Ok(version) => println!("{}", version),
                Err(e) => {
                    ui::display_error(&format!("Version bump failed: {}", e));
                    std::process::exit(1);
                }
            }
        }
        Command::Current => {
            println!("{}", current_version(&mut store));
        }
        Command::JvmArgs => {
            let heap = memory::detect_heap_settings();
            println!("{}", heap.jvm_args().join(" "));
        }
        Command::Manifest { profile } => {
            let version = current_version(&mut store);
            let profile = profile.unwrap_or_else(|| config.run.profile.clone());
            let attrs = ManifestAttributes::new(config.project.name.clone(), version, profile);
            print!("{}", attrs);
        }
    }

    Ok(())
}

fn current_version(store: &mut VersionStore) -> SemVer {
    match store.current_version() {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!("Failed to read current version: {}", e));
            std::process::exit(1);
        }
    }
}
