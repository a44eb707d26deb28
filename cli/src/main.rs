//! pagemark CLI - page data generation and lookup tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagemark::{
    arabic_to_roman, roman_to_arabic, source, tokenize_emphasis_with, Chapter, Delimiters, Error,
    IndexOptions, JsonFormat, NumeralStyle, Page, PageDrift, PageIndex, Pagemark, SearchOptions,
};

#[derive(Parser)]
#[command(name = "pagemark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Generate and query page data for marked-up book text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a single chapter file
    Index {
        /// Chapter file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Chapter id (defaults to the file stem)
        #[arg(long)]
        chapter: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Generate page data for a directory of chapters
    #[command(alias = "gen")]
    Generate {
        /// Chapter directory
        #[arg(value_name = "DIR", env = "PAGEMARK_CONTENT_DIR")]
        dir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Index chapters one at a time
        #[arg(long)]
        sequential: bool,

        /// Accepted chapter file extensions
        #[arg(long, value_delimiter = ',', default_value = "md,txt")]
        extensions: Vec<String>,
    },

    /// Check stored page data against the chapters it was generated from
    Verify {
        /// Chapter directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Stored page data
        #[arg(value_name = "PAGE_DATA")]
        page_data: PathBuf,
    },

    /// Print one page as text
    Page {
        /// Chapter directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Chapter id
        #[arg(long)]
        chapter: String,

        #[command(flatten)]
        lookup: PageLookup,

        /// Number headings with roman numerals
        #[arg(long)]
        roman: bool,

        /// Emphasis delimiters
        #[arg(long, value_enum, default_value = "asterisk")]
        emphasis: EmphasisMode,

        /// Keep page-label paragraphs
        #[arg(long)]
        keep_markers: bool,
    },

    /// Search page text
    Search {
        /// Chapter directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Search term
        #[arg(value_name = "TERM")]
        term: String,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Allow matches inside words
        #[arg(long)]
        partial: bool,

        /// Maximum number of hits to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Split text into emphasis runs
    Tokenize {
        /// Text to tokenize
        #[arg(value_name = "TEXT")]
        text: String,

        /// Emphasis delimiters
        #[arg(long, value_enum, default_value = "asterisk")]
        emphasis: EmphasisMode,

        /// Print runs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert between arabic and roman page numbers
    Roman {
        /// Number such as "17" or "xvii"
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Show index statistics
    Info {
        /// Chapter directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PageLookup {
    /// Page number
    #[arg(long)]
    number: Option<u32>,

    /// Page label, decimal or roman
    #[arg(long)]
    label: Option<String>,

    /// Byte offset into the chapter text
    #[arg(long)]
    offset: Option<usize>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EmphasisMode {
    /// `*text*` only
    Asterisk,
    /// `*text*` and `_text_`
    Underscore,
}

impl From<EmphasisMode> for Delimiters {
    fn from(mode: EmphasisMode) -> Self {
        match mode {
            EmphasisMode::Asterisk => Delimiters::Asterisk,
            EmphasisMode::Underscore => Delimiters::AsteriskOrUnderscore,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Index {
            input,
            chapter,
            output,
            compact,
        }) => cmd_index(&input, chapter.as_deref(), output.as_deref(), compact),
        Some(Commands::Generate {
            dir,
            output,
            compact,
            sequential,
            extensions,
        }) => cmd_generate(&dir, output.as_deref(), compact, sequential, &extensions),
        Some(Commands::Verify { dir, page_data }) => cmd_verify(&dir, &page_data),
        Some(Commands::Page {
            dir,
            chapter,
            lookup,
            roman,
            emphasis,
            keep_markers,
        }) => cmd_page(&dir, &chapter, &lookup, roman, emphasis, keep_markers),
        Some(Commands::Search {
            dir,
            term,
            case_sensitive,
            partial,
            limit,
        }) => cmd_search(&dir, &term, case_sensitive, partial, limit),
        Some(Commands::Tokenize {
            text,
            emphasis,
            json,
        }) => cmd_tokenize(&text, emphasis, json),
        Some(Commands::Roman { value }) => cmd_roman(&value),
        Some(Commands::Info { dir }) => cmd_info(&dir),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pagemark <COMMAND>".yellow());
            println!("       pagemark --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_index(
    input: &Path,
    chapter: Option<&str>,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut loaded = Chapter::from_file(input)?;
    if let Some(id) = chapter {
        loaded.id = id.to_string();
    }

    let mut index = PageIndex::new();
    let count = index.add_chapter(&loaded.id, &loaded.text);
    log::info!("{}: {} pages", loaded.id, count);

    let json = pagemark::render::to_json(&index, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_generate(
    dir: &Path,
    output: Option<&Path>,
    compact: bool,
    sequential: bool,
    extensions: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let options = generate_options(sequential, extensions);

    let files = source::chapter_files(dir, &options)?;
    if files.is_empty() {
        return Err(Error::NoChapters(dir.display().to_string()).into());
    }

    let pb = ProgressBar::new(files.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut chapters = Vec::with_capacity(files.len());
    for path in &files {
        pb.set_message(format!("Reading {}...", path.display()));
        chapters.push(Chapter::from_file(path)?);
        pb.inc(1);
    }

    pb.set_message("Indexing pages...");
    let index = PageIndex::build(&chapters, &options);
    let json = pagemark::render::to_json(&index, json_format(compact))?;
    pb.inc(1);
    pb.finish_with_message("Done!");

    // Keep stdout clean for redirection when no output file is given.
    if let Some(path) = output {
        fs::write(path, &json)?;
        println!(
            "\n{} {} pages from {} chapters",
            "Generated".green().bold(),
            index.len(),
            index.chapter_count()
        );
        println!("  {} {}", "└─".dimmed(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn generate_options(sequential: bool, extensions: &[String]) -> IndexOptions {
    IndexOptions::new()
        .with_parallel(!sequential)
        .with_extensions(extensions)
}

fn cmd_verify(dir: &Path, page_data: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let stored = pagemark::render::from_json(&fs::read_to_string(page_data)?)?;
    let book = Pagemark::new().load_dir(dir)?;
    let drift = book.verify(&stored);

    if drift.is_empty() {
        println!(
            "{} {} pages match",
            "Up to date:".green().bold(),
            book.index.len()
        );
        return Ok(());
    }

    println!(
        "{} {} pages differ",
        "Page data is stale:".yellow().bold(),
        drift.len()
    );
    for item in &drift {
        let label = match item {
            PageDrift::Missing(_) => "missing".red(),
            PageDrift::Unexpected(_) => "unexpected".yellow(),
            PageDrift::Changed(_) => "changed".cyan(),
        };
        println!("  {} {}", label, item.page_id());
    }
    std::process::exit(1);
}

fn cmd_page(
    dir: &Path,
    chapter: &str,
    lookup: &PageLookup,
    roman: bool,
    emphasis: EmphasisMode,
    keep_markers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Pagemark::new().with_delimiters(emphasis.into());
    if roman {
        builder = builder.with_numeral_style(NumeralStyle::Roman);
    }
    if keep_markers {
        builder = builder.keep_page_markers();
    }
    let book = builder.load_dir(dir)?;

    if !book.index.contains_chapter(chapter) {
        return Err(Error::InvalidChapterId(chapter.to_string()).into());
    }

    let page = find_page(&book.index, chapter, lookup)
        .ok_or_else(|| Error::Other(format!("Page not found in {}", chapter)))?;
    println!("{}", book.page_text(page));
    Ok(())
}

fn find_page<'a>(index: &'a PageIndex, chapter: &str, lookup: &PageLookup) -> Option<&'a Page> {
    if let Some(number) = lookup.number {
        index.page_by_number(chapter, number)
    } else if let Some(ref label) = lookup.label {
        index.page_by_label(chapter, label)
    } else {
        index.page_for_position(chapter, lookup.offset?)
    }
}

fn cmd_search(
    dir: &Path,
    term: &str,
    case_sensitive: bool,
    partial: bool,
    limit: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = SearchOptions::new();
    if case_sensitive {
        options = options.case_sensitive();
    }
    if partial {
        options = options.partial_words();
    }

    let book = Pagemark::new().load_dir(dir)?;
    let hits = book.search(term, &options)?;

    println!(
        "{} {} hits for {:?}",
        "Found".green().bold(),
        hits.len(),
        term
    );
    println!("{}", "─".repeat(40).dimmed());

    for hit in hits.iter().take(limit) {
        println!(
            "{} {}",
            format!("p. {}", hit.page_number).cyan().bold(),
            hit.chapter_id.dimmed()
        );
        println!("  {}", hit.excerpt);
    }
    if hits.len() > limit {
        println!("{}", format!("... {} more", hits.len() - limit).dimmed());
    }

    Ok(())
}

fn cmd_tokenize(
    text: &str,
    emphasis: EmphasisMode,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let runs = tokenize_emphasis_with(text, emphasis.into());

    if json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
        return Ok(());
    }

    for run in &runs {
        if run.emphasis {
            println!("{} {:?}", "emphasis".cyan().bold(), run.text);
        } else {
            println!("{}    {:?}", "plain".dimmed(), run.text);
        }
    }
    Ok(())
}

fn cmd_roman(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", convert_numeral(value)?);
    Ok(())
}

fn convert_numeral(value: &str) -> pagemark::Result<String> {
    let value = value.trim();
    if let Ok(number) = value.parse::<u32>() {
        return Ok(arabic_to_roman(number));
    }
    roman_to_arabic(value)
        .map(|number| number.to_string())
        .ok_or_else(|| Error::Other(format!("Invalid numeral: {}", value)))
}

fn cmd_info(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let book = Pagemark::new().load_dir(dir)?;
    let stats = book.stats();

    println!("{}", "Book Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Directory".bold(), dir.display());
    println!("{}: {}", "Chapters".bold(), stats.chapter_count);
    println!("{}: {}", "Pages".bold(), stats.page_count);
    if let Some(range) = book.index.page_range() {
        println!(
            "{}: {}-{}",
            "Page range".bold(),
            range.start(),
            range.end()
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Source bytes".bold(), stats.source_bytes);
    println!("{}: {}", "Indexed bytes".bold(), stats.indexed_bytes);
    println!("{}: {}", "Unindexed bytes".bold(), stats.unindexed_bytes());
    println!("{}: {}", "Empty pages".bold(), stats.empty_pages);
    println!("{}: {}", "Duplicate pages".bold(), stats.duplicate_pages);
    println!("{}: {}", "Out of order".bold(), stats.out_of_order_pages);

    println!();
    println!("{}", "Chapters".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for chapter_id in book.index.chapter_ids() {
        let numbers: Vec<u32> = book
            .index
            .pages_in_chapter(chapter_id)
            .map(|p| p.page_number)
            .collect();
        match (numbers.first(), numbers.last()) {
            (Some(first), Some(last)) => println!(
                "{}: {} pages ({}-{})",
                chapter_id.bold(),
                numbers.len(),
                first,
                last
            ),
            _ => println!("{}: {}", chapter_id.bold(), "no pages".dimmed()),
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagemark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page data generation and lookup tool");
    println!();
    println!("License: MIT");
}
