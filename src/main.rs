use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use vidgallery::{config, gallery, Annotations, PageConfig};

const DEFAULT_ROOT: &str = "pose";

#[derive(Parser, Debug)]
#[command(name = "vidgallery")]
#[command(author, version, about = "Build a side-by-side comparison page for demo videos")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Videos root with one folder per section (default: pose)
    root: Option<PathBuf>,

    /// Output HTML file
    #[arg(short, long, default_value = "poseanything.html")]
    output: PathBuf,

    /// JSON file mapping case names to captions
    #[arg(short, long, default_value = "anno.json")]
    annotations: PathBuf,

    /// JSON page description (default: built-in PoseAnything page)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Don't open the page in a browser
    #[arg(long)]
    no_open: bool,

    /// Report skipped sections and per-section counts
    #[arg(short, long)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the built-in page description as JSON
    Config,
}

fn main() {
    let args = Args::parse();

    if let Some(Command::Config) = args.command {
        match serde_json::to_string_pretty(&PageConfig::default()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let page = match &args.config {
        Some(path) => match config::load(path) {
            Ok(page) => page,
            Err(e) => {
                eprintln!("\x1b[31mError:\x1b[0m could not load config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PageConfig::default(),
    };

    if !args.quiet {
        eprintln!("\x1b[1mvidgallery - Supplementary Video Page\x1b[0m");
        eprintln!("{}", "─".repeat(70));
    }

    let (annotations, load_error) = Annotations::load_or_default(&args.annotations);
    if !args.quiet {
        let path = args.annotations.display();
        match load_error {
            None => {
                eprintln!("Loaded {} caption(s) from '{}'", annotations.len(), path);
                if !annotations.ignored().is_empty() {
                    eprintln!(
                        "\x1b[33mWarning:\x1b[0m ignored caption(s) that are not text: {}",
                        annotations.ignored().join(", ")
                    );
                }
            }
            Some(e) if e.kind() == io::ErrorKind::NotFound => eprintln!(
                "\x1b[33mWarning:\x1b[0m annotation file '{}' not found. Using filenames as captions.",
                path
            ),
            Some(e) => eprintln!(
                "\x1b[33mWarning:\x1b[0m could not read '{}': {}. Using filenames as captions.",
                path, e
            ),
        }
    }

    let root = args.root.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    if !root.is_dir() {
        eprintln!("\x1b[31mError:\x1b[0m the directory '{}' was not found.", root.display());
        std::process::exit(1);
    }

    let built = match gallery::generate(&args.output, &page, &root, &annotations) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m failed to write '{}': {}", args.output.display(), e);
            std::process::exit(1);
        }
    };

    if !args.quiet {
        for skipped in &built.skipped {
            if skipped.reason.is_author_error() {
                eprintln!("\x1b[33mWarning:\x1b[0m skipped '{}': {}", skipped.title, skipped.reason);
            } else if args.verbose {
                eprintln!("\x1b[90m  skipped '{}': {}\x1b[0m", skipped.title, skipped.reason);
            }
        }

        if args.verbose {
            for section in &built.sections {
                let videos = section.cells().filter(|c| !c.is_placeholder()).count();
                let missing = section.cells().filter(|c| c.is_placeholder()).count();
                eprintln!(
                    "  {:<32} {:>3} row(s)  {:>3} video(s)  {:>3} missing",
                    section.title,
                    section.rows().count(),
                    videos,
                    missing
                );
            }
        }

        eprintln!("\n{}", "─".repeat(70));
        eprintln!(
            "  {} section(s), {} row(s), {} video(s), {} placeholder(s)",
            built.sections.len(),
            built.row_count(),
            built.video_count(),
            built.placeholder_count()
        );
        eprintln!("\n\x1b[32mPage saved: {}\x1b[0m", args.output.display());
    }

    if !args.no_open {
        match open::that(&args.output) {
            Ok(()) => {
                if !args.quiet {
                    eprintln!("Opening the page in your default browser...");
                }
            }
            Err(e) => eprintln!(
                "Could not open a browser ({}). Please open '{}' manually.",
                e,
                args.output.display()
            ),
        }
    }
}
