use clap::{Parser, Subcommand};
use mdsite::posting::IndexOutcome;
use mdsite::{config, convert, output, posting};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Static site generator for markdown directory trees")]
#[command(long_about = "\
Static site generator for markdown directory trees

Your filesystem is the site map. Directories become sections, markdown
files become pages, and a directory named \"posting\" is rebuilt as a
token-templated post index.

Content structure:

  content/
  ├── config.toml              # Site config (optional)
  ├── index.md                 # → site/index.html
  ├── guide/
  │   ├── intro.md             # → site/guide/intro.html
  │   └── page2.md             # Siblings order numerically: page2 < page10
  └── posting/                 # Reserved, never converted recursively
      ├── postMain.html        # Template with {{name}} placeholders
      ├── tech/                # Category (subdirectory name)
      │   └── rust-notes.html  # Fragment (previously converted page)
      └── life/
          └── coffee.html

Internal links to .md files are rewritten to their .html counterparts, and
every page is re-indented two spaces per nesting level.

Run 'mdsite gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "site", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the content tree into the output site
    Build,
    /// Rebuild only the post index inside the output tree
    Index,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!(
                "==> Converting {} \u{2192} {}",
                cli.source.display(),
                cli.output.display()
            );
            let outcome = convert::convert(&cli.source, &cli.output, &site_config);
            output::print_build_output(&outcome);
            if !outcome.is_clean() {
                return Err(
                    format!("build finished with {} skipped entries", outcome.failures.len())
                        .into(),
                );
            }
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Index => {
            let site_config = config::load_config(&cli.source)?;
            let posting_root = cli.output.join(&site_config.posting_dir);
            let index = posting::build_post_index(&posting_root, &site_config.template_file)?;
            output::print_index_outcome(&index);
            if let IndexOutcome::TemplateMissing(path) = index {
                return Err(format!("no template at {}", path.display()).into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
