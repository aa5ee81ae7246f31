use clap::{Parser, Subcommand};
use dh_guide::{ConfigValues, HardwareProfile, config, engine, output, page};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("DH_GUIDE_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("DH_GUIDE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Hardware selections. Each flag overrides the matching `[profile]` value
/// from `dh-guide.toml`.
#[derive(clap::Args, Clone)]
struct ProfileArgs {
    /// CPU hardware threads: 4, 8, 12 or 16
    #[arg(long, allow_hyphen_values = true)]
    cpu: Option<String>,
    /// GPU tier: entry, mid, high or ultra
    #[arg(long)]
    gpu: Option<String>,
    /// Optimization target: performance, balanced or visuals
    #[arg(long)]
    target: Option<String>,
}

#[derive(Parser)]
#[command(name = "dh-guide")]
#[command(about = "Optimized Distant Horizons settings for your hardware")]
#[command(long_about = "\
Optimized Distant Horizons settings for your hardware

Pick a CPU thread tier, a GPU tier and what you want to optimize for, and
get a ready-to-use distant_horizons.toml plus advice for your launcher.

  CPU threads:  4 (budget), 8 (mid-range), 12 (high-end), 16 (16+, enthusiast)
  GPU level:    entry  GTX 1050 / RX 570
                mid    RTX 3060 / RX 6600
                high   RTX 4070 / RX 7800
                ultra  RTX 4090 / RX 7900 XTX
  Target:       performance, balanced, visuals

Defaults come from dh-guide.toml in the config directory; run
'dh-guide gen-config' to print a documented one.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding dh-guide.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the config for a profile, with advisories
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Print the result as JSON instead
        #[arg(long)]
        json: bool,
        /// Also write the config file into this directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print key settings for every valid profile
    Matrix,
    /// Write the calculator result page and config file
    Page {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Print a stock dh-guide.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { profile, json, out } => {
            let tool_config = config::load_config(&cli.config_dir)?;
            let profile = resolve_profile(&tool_config, &profile)?;
            let generated = engine::generate_config(&profile);

            if json {
                println!("{}", output::format_json(&profile, &generated)?);
            } else {
                output::print_generated(&profile, &generated);
                println!();
                output::print_values(&ConfigValues::resolve(&profile));
            }

            if let Some(dir) = out {
                std::fs::create_dir_all(&dir)?;
                let path = dir.join(&tool_config.output.filename);
                std::fs::write(&path, &generated.document)?;
                // Keep stdout clean JSON when asked for it
                if !json {
                    output::print_written(&[path]);
                }
            }
        }
        Command::Matrix => {
            let profiles: Vec<HardwareProfile> = HardwareProfile::all().collect();
            let values: Vec<ConfigValues> = profiles.iter().map(ConfigValues::resolve).collect();
            output::print_matrix(profiles.iter().zip(values.iter()));
        }
        Command::Page {
            profile,
            output: output_dir,
        } => {
            let tool_config = config::load_config(&cli.config_dir)?;
            let profile = resolve_profile(&tool_config, &profile)?;
            let generated = engine::generate_config(&profile);
            println!("==> Rendering calculator page → {}", output_dir.display());
            let written = page::write_calculator_page(
                &output_dir,
                &profile,
                &generated,
                &tool_config.output.filename,
            )?;
            output::print_written(&written);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Combine `dh-guide.toml` with CLI flags into a validated profile.
fn resolve_profile(
    tool_config: &config::ToolConfig,
    args: &ProfileArgs,
) -> Result<HardwareProfile, dh_guide::ProfileError> {
    tool_config.profile_with(
        args.cpu.as_deref(),
        args.gpu.as_deref(),
        args.target.as_deref(),
    )
}
