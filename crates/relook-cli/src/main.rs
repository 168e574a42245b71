use clap::{Parser, Subcommand};
use std::path::PathBuf;

use relook_cli::commands::{
    cmd_analyze, cmd_apply, cmd_batch, cmd_preset_create, cmd_preset_list, cmd_preset_show,
};

#[derive(Parser)]
#[command(name = "relook")]
#[command(version, about = "Photo look analysis and filter synthesis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the look parameters of an image
    Analyze {
        /// Input image file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Save the inferred parameter vector to a JSON file
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Save the inferred look as a named preset
        #[arg(long, value_name = "NAME")]
        save_preset: Option<String>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Apply a look to a single image
    Apply {
        /// Input image file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Named preset to apply
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Parameter vector JSON file to apply
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,

        /// Parameter overrides (name=value,name=value)
        #[arg(long, value_name = "OVERRIDES")]
        set: Option<String>,

        /// Apply the negated vector to undo a look
        #[arg(long)]
        negate: bool,

        /// Downscale so the longest side is at most this many pixels
        #[arg(long, value_name = "N")]
        max_dimension: Option<u32>,

        /// JPEG quality for the output (1-100)
        #[arg(short, long, value_name = "N")]
        quality: Option<u8>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Apply one look to many images
    Batch {
        /// Input files or directories
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Named preset to apply
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Parameter vector JSON file to apply
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,

        /// Parameter overrides (name=value,name=value)
        #[arg(long, value_name = "OVERRIDES")]
        set: Option<String>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Manage look presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List available presets
    List,

    /// Show details of a preset
    Show {
        /// Preset name
        name: String,

        /// Print the preset as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a preset from explicit parameter values
    Create {
        /// Preset name
        name: String,

        /// Parameter values (name=value,name=value)
        #[arg(long, value_name = "OVERRIDES")]
        set: Option<String>,

        /// Parameter vector JSON file
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,

        /// Free-form notes stored with the preset
        #[arg(long, value_name = "TEXT")]
        notes: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            json,
            save,
            save_preset,
            verbose,
        } => cmd_analyze(input, json, save, save_preset, verbose),

        Commands::Apply {
            input,
            out,
            preset,
            params,
            set,
            negate,
            max_dimension,
            quality,
            verbose,
        } => cmd_apply(
            input,
            out,
            preset,
            params,
            set,
            negate,
            max_dimension,
            quality,
            verbose,
        ),

        Commands::Batch {
            inputs,
            recursive,
            preset,
            params,
            set,
            out,
            threads,
            verbose,
        } => cmd_batch(inputs, recursive, preset, params, set, out, threads, verbose),

        Commands::Preset { action } => match action {
            PresetAction::List => cmd_preset_list(),
            PresetAction::Show { name, json } => cmd_preset_show(name, json),
            PresetAction::Create {
                name,
                set,
                params,
                notes,
            } => cmd_preset_create(name, set, params, notes),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
