use clap::{Parser, Subcommand};
use navmark::resolve::{LinkDir, LinkFile, LinkSource};
use navmark::{mark, output};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "navmark")]
#[command(about = "Mark the current page in a navigation link set")]
#[command(long_about = "\
Mark the current page in a navigation link set

Resolves a link collection, compares every entry's href against the page
being rendered, and emits the collection again with a boolean 'current'
flag on each entry. Everything else in an entry passes through untouched.

Link sources:

  links.toml / links.json      One document, top-level table of key → entry:

                                 [home]
                                 href = \"/index.html\"
                                 label = \"Home\"

  links/                       A directory tree, one entry per file:

                                 links/
                                 ├── 010-home.toml        → key \"home\"
                                 ├── 020-docs/
                                 │   └── 010-guide.toml   → key \"docs/guide\"
                                 └── github.toml          → unnumbered, sorts last

                               The NNN- prefix orders entries and is
                               stripped from keys.

Matching is exact string equality — no trailing-slash or case folding.
With no --source, 'mark' emits an empty collection.")]
#[command(version)]
struct Cli {
    /// Link source: a JSON/TOML table file or a directory of entry files
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate every link with whether it is the current page
    Mark {
        /// URL/path of the page being rendered
        #[arg(long)]
        current: String,

        /// Write annotated JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit one-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Resolve the link source and report what it contains
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let source = cli.source.as_deref().map(open_source);

    match cli.command {
        Command::Mark {
            current,
            output: out_path,
            compact,
        } => {
            let marked = mark::mark_current(source.as_deref(), &current)?;
            let json = if compact {
                serde_json::to_string(&marked)?
            } else {
                serde_json::to_string_pretty(&marked)?
            };
            match out_path {
                Some(path) => {
                    std::fs::write(&path, json + "\n")?;
                    output::print_mark_output(&marked);
                    println!("Annotated links written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Check => {
            let links = match &source {
                Some(source) => source.resolve()?,
                None => Vec::new(),
            };
            output::print_check_output(&links);
        }
    }

    Ok(())
}

/// Pick a resolver by what the path points at: directories resolve as
/// one-entry-per-file trees, files as single-table documents.
fn open_source(path: &Path) -> Box<dyn LinkSource> {
    if path.is_dir() {
        Box::new(LinkDir::new(path))
    } else {
        Box::new(LinkFile::new(path))
    }
}
