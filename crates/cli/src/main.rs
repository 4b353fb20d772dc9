use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{env, fs, fs::File};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use keyhole_class_file::{
    serialize_class_file, sinks::FileSink, AttributeView, ClassFile, ClassView, LoadedClass,
    MethodView, Version,
};

#[derive(Parser)]
#[command(name = "keyhole")]
#[command(version)]
#[command(about = "Provides instrumentation and introspection for JVM bytecode")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a class file and print a summary of its contents
    Inspect {
        /// Input .class file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Write a minimal synthetic class file
    WriteClass {
        /// Output path for the generated .class file
        #[arg(value_name = "FILE")]
        output: PathBuf,
    },

    /// List JVM processes that expose attach metadata
    AttachmentTargets,
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Inspect { input } => inspect(input),
        Commands::WriteClass { output } => write_class(output),
        Commands::AttachmentTargets => attachment_targets(),
    };

    if let Err(error) = result {
        eprintln!("[ERROR] {error:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn inspect(input: &Path) -> Result<()> {
    let loaded = LoadedClass::from_file(input)
        .with_context(|| format!("Failed to read class from file ({})", input.display()))?;

    log::debug!("Read {} bytes from {}", loaded.raw().len(), input.display());

    let class_file = loaded
        .class_file()
        .with_context(|| format!("Failed to parse class from file ({})", input.display()))?;

    let view = ClassView::new(&class_file);

    println!("Class File Overview:");
    println!("  Name         - {} ({})", view.name()?, view.superclass()?);
    println!(
        "  Version      - {}.{} (Java {})",
        class_file.version.major,
        class_file.version.minor,
        jdk_release(class_file.version)
    );
    println!("  Access Flags - 0x{:04X}", class_file.access_flags.bits());

    let entries = class_file.constant_pool.entries();
    if !entries.is_empty() {
        println!("Constant Pool Entries:");

        for (i, entry) in entries.iter().enumerate() {
            println!("  {:>2}#: [{}]", i + 1, entry.name());
        }
    }

    if !class_file.methods.is_empty() {
        println!("Available Methods:");

        for method in &class_file.methods {
            let method = MethodView::new(&class_file.constant_pool, method);
            println!("  {}", method.name()?);
        }
    }

    if !class_file.attributes.is_empty() {
        println!("Assigned Attributes:");

        for attribute in &class_file.attributes {
            let attribute = AttributeView::new(&class_file.constant_pool, attribute);
            println!("  {}", attribute.name()?);
        }
    }

    Ok(())
}

fn write_class(output: &Path) -> Result<()> {
    let class_file = ClassFile::new("MyClass", "java/lang/Object");

    let file = File::create(output)
        .with_context(|| format!("Failed to open requested file ({})", output.display()))?;

    let mut sink = FileSink::new(file);
    serialize_class_file(&mut sink, &class_file)?;

    Ok(())
}

fn attachment_targets() -> Result<()> {
    let username = env::var("USER").context("USER environment variable is not set")?;
    let perf_dir = env::temp_dir().join(format!("hsperfdata_{username}"));

    // HotSpot drops one perf data file per PID into the per-user
    // directory; their names are the attachable process ids.
    if !perf_dir.exists() {
        bail!("No processes found via user performance data fingerprinting");
    }

    if !perf_dir.is_dir() {
        bail!(
            "User performance data location ({}) not a directory",
            perf_dir.display()
        );
    }

    let entries = fs::read_dir(&perf_dir)
        .with_context(|| format!("Failed to list {}", perf_dir.display()))?;

    for entry in entries {
        println!("{}", entry?.file_name().to_string_lossy());
    }

    Ok(())
}

/// Named JDK release for a class file version. Majors below 49 all bundle
/// into release 1; from JDK 5 on, the major runs 44 ahead of the release
/// number.
fn jdk_release(version: Version) -> u16 {
    if version.major < 49 {
        return 1;
    }

    version.major - 44
}

#[cfg(test)]
mod jdk_release_tests {
    use super::*;

    #[test]
    fn it_should_bundle_early_majors_into_release_one() {
        assert_eq!(1, jdk_release(Version { major: 45, minor: 3 }));
        assert_eq!(1, jdk_release(Version { major: 48, minor: 0 }));
    }

    #[test]
    fn it_should_offset_modern_majors_by_44() {
        assert_eq!(11, jdk_release(Version { major: 55, minor: 0 }));
        assert_eq!(17, jdk_release(Version { major: 61, minor: 0 }));
    }
}
