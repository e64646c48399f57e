use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitrine::{config, generate, logging, output};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Static builder for a single-page agency site")]
#[command(long_about = "\
Static builder for a single-page agency site

All content has built-in defaults. Put a site.toml in the content directory
to override any of it; tables merge key-by-key, arrays replace.

Content structure:

  content/
  ├── site.toml      # Optional overrides (company, stats, services, theme, ...)
  └── assets/        # Optional, copied to the output as-is

Run 'vitrine gen-config' to print a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log projection details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project the content onto the page and write the site
    Build,
    /// Validate site.toml and print the content inventory
    Check,
    /// Print a stock site.toml with the main options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::build(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = config::load_config(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
