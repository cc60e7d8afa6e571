//! untextract CLI - paragraphs, sentences and words from Textract output

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use untextract::comprehend::{
    annotations_sentences, annotations_words, ComprehendResponse, DominantLanguageResponse,
    EntitiesResponse, KeyPhrasesResponse,
};
use untextract::render::{self, JsonFormat};
use untextract::{
    parse_file_with_options, Annotation, Granularity, PageSelection, ParseOptions,
    TextAnalyzer, TokenizeOptions, Tokens, Untextract,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "untextract")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Reconstruct paragraphs and extract tokens from Textract output",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flat text of the document
    Text(ExtractArgs),

    /// Print one word token per line
    Words(ExtractArgs),

    /// Print one sentence per line
    Sentences(ExtractArgs),

    /// Print one reconstructed paragraph per line
    #[command(alias = "para")]
    Paragraphs {
        #[command(flatten)]
        args: ExtractArgs,

        /// Print thresholds and per-line signals instead of paragraphs
        #[arg(long)]
        debug: bool,
    },

    /// Dump pages, lines, words, tables and form fields
    Outline {
        /// Saved Textract response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Saved Textract response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Tokenize a saved Comprehend response
    Comprehend {
        /// Saved Comprehend response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Response type (detected from the JSON keys if not specified)
        #[arg(long, value_enum)]
        kind: Option<ComprehendKind>,

        /// Stem every word
        #[arg(long)]
        stemmed: bool,

        /// Treat each annotation as a sentence instead of splitting words
        #[arg(long)]
        sentences: bool,

        /// Output as JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct ExtractArgs {
    /// Saved Textract response (JSON)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Stem every word
    #[arg(long)]
    stemmed: bool,

    /// Paragraph threshold margin
    #[arg(long, default_value_t = untextract::layout::DEFAULT_EPSILON, env = "UNTEXTRACT_EPSILON")]
    epsilon: f64,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Output as pretty JSON
    #[arg(long)]
    json: bool,

    /// Output as compact JSON
    #[arg(long, conflicts_with = "json")]
    compact: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl ExtractArgs {
    fn json_format(&self) -> Option<JsonFormat> {
        if self.compact {
            Some(JsonFormat::Compact)
        } else if self.json {
            Some(JsonFormat::Pretty)
        } else {
            None
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ComprehendKind {
    /// Dominant language detection
    Languages,
    /// Entity detection
    Entities,
    /// Key phrase detection
    KeyPhrases,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text(args) => cmd_extract(&args, Granularity::Text),
        Commands::Words(args) => cmd_extract(&args, Granularity::Words),
        Commands::Sentences(args) => cmd_extract(&args, Granularity::Sentences),
        Commands::Paragraphs { args, debug } => {
            if debug {
                cmd_layout_report(&args)
            } else {
                cmd_extract(&args, Granularity::Paragraphs)
            }
        }
        Commands::Outline {
            input,
            pages,
            output,
        } => cmd_outline(&input, pages.as_deref(), output.as_deref()),
        Commands::Info { input } => cmd_info(&input),
        Commands::Comprehend {
            input,
            kind,
            stemmed,
            sentences,
            json,
        } => cmd_comprehend(&input, kind, stemmed, sentences, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn page_selection(pages: Option<&str>) -> CliResult<PageSelection> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?),
        None => Ok(PageSelection::All),
    }
}

fn builder(args: &ExtractArgs) -> CliResult<Untextract> {
    let mut builder = Untextract::new()
        .with_pages(page_selection(args.pages.as_deref())?)
        .with_epsilon(args.epsilon);
    if args.stemmed {
        builder = builder.stemmed();
    }
    Ok(builder)
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn render_tokens(tokens: &Tokens, format: Option<JsonFormat>) -> CliResult<String> {
    Ok(match format {
        Some(format) => render::to_json(tokens, format)?,
        None => render::to_text(tokens),
    })
}

fn cmd_extract(args: &ExtractArgs, granularity: Granularity) -> CliResult<()> {
    let result = builder(args)?.parse(&args.input)?;
    let tokens = result.tokenize(granularity);
    log::info!("{} {} extracted", tokens.len(), granularity);

    let content = render_tokens(&tokens, args.json_format())?;
    write_output(args.output.as_deref(), &content)
}

fn cmd_layout_report(args: &ExtractArgs) -> CliResult<()> {
    let result = builder(args)?.parse(&args.input)?;
    let report = result.layout_report()?;

    let content = match args.json_format() {
        Some(format) => render::to_json(&report, format)?,
        None => report.to_string(),
    };
    write_output(args.output.as_deref(), &content)
}

fn cmd_outline(input: &Path, pages: Option<&str>, output: Option<&Path>) -> CliResult<()> {
    let options = ParseOptions::new().with_pages(page_selection(pages)?);
    let doc = parse_file_with_options(input, options)?;
    write_output(output, &render::outline(&doc))
}

fn cmd_info(input: &Path) -> CliResult<()> {
    let result = Untextract::new().parse(input)?;
    let doc = result.document();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Lines".bold(), doc.line_count());

    let tables: usize = doc.pages.iter().map(|p| p.tables.len()).sum();
    let fields: usize = doc.pages.iter().map(|p| p.form.fields.len()).sum();
    println!("{}: {}", "Tables".bold(), tables);
    println!("{}: {}", "Form fields".bold(), fields);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = result.plain_text();
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    match result.layout_report() {
        Ok(report) => {
            println!("{}: {}", "Paragraphs".bold(), report.paragraphs.len());
            println!(
                "{}: {:.4}",
                "Vertical threshold".bold(),
                report.thresholds.vertical
            );
            println!("{}: {:.4}", "Indent threshold".bold(), report.thresholds.indent);
        }
        Err(untextract::Error::EmptyDocument) => {
            println!("{}: 0", "Paragraphs".bold());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn detect_kind(value: &serde_json::Value) -> CliResult<ComprehendKind> {
    let has = |key: &str| value.get(key).is_some();
    if has("Languages") {
        Ok(ComprehendKind::Languages)
    } else if has("Entities") {
        Ok(ComprehendKind::Entities)
    } else if has("KeyPhrases") {
        Ok(ComprehendKind::KeyPhrases)
    } else {
        Err("Unrecognized Comprehend response: expected Languages, Entities or KeyPhrases".into())
    }
}

fn tokenize_annotations<A: Annotation>(
    items: &[A],
    analyzer: &TextAnalyzer,
    stemmed: bool,
    sentences: bool,
) -> Vec<String> {
    if sentences {
        annotations_sentences(items, analyzer, stemmed)
    } else {
        annotations_words(items, analyzer, stemmed)
    }
}

fn cmd_comprehend(
    input: &Path,
    kind: Option<ComprehendKind>,
    stemmed: bool,
    sentences: bool,
    json: bool,
) -> CliResult<()> {
    let content = fs::read_to_string(input)?;
    let kind = match kind {
        Some(kind) => kind,
        None => detect_kind(&serde_json::from_str(&content)?)?,
    };
    log::debug!("Reading {:?} response from {}", kind, input.display());

    let analyzer = TextAnalyzer::new();
    let items = match kind {
        ComprehendKind::Languages => {
            let response = DominantLanguageResponse::from_json(&content)?;
            tokenize_annotations(&response.languages, &analyzer, stemmed, sentences)
        }
        ComprehendKind::Entities => {
            let response = EntitiesResponse::from_json(&content)?;
            tokenize_annotations(&response.entities, &analyzer, stemmed, sentences)
        }
        ComprehendKind::KeyPhrases => {
            let response = KeyPhrasesResponse::from_json(&content)?;
            tokenize_annotations(&response.key_phrases, &analyzer, stemmed, sentences)
        }
    };

    if json {
        println!("{}", render::to_json(&items[..], JsonFormat::Pretty)?);
    } else {
        println!("{}", items.join("\n"));
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "untextract".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Paragraph reconstruction and tokenization for Textract output");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/untextract".dimmed());
    println!("License: MIT");
    let defaults = TokenizeOptions::default();
    println!("Default epsilon: {}", defaults.epsilon);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_paragraphs_args() {
        let cli = Cli::try_parse_from([
            "untextract",
            "paragraphs",
            "response.json",
            "--stemmed",
            "--epsilon",
            "0.05",
            "--debug",
        ])
        .unwrap();

        match cli.command {
            Commands::Paragraphs { args, debug } => {
                assert!(debug);
                assert!(args.stemmed);
                assert_eq!(args.epsilon, 0.05);
                assert_eq!(args.json_format(), None);
            }
            _ => panic!("expected paragraphs command"),
        }
    }

    #[test]
    fn test_json_flags_conflict() {
        let result =
            Cli::try_parse_from(["untextract", "words", "r.json", "--json", "--compact"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_detect_kind() {
        let value = serde_json::json!({"KeyPhrases": []});
        assert_eq!(detect_kind(&value).unwrap(), ComprehendKind::KeyPhrases);
        assert!(detect_kind(&serde_json::json!({"Blocks": []})).is_err());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(Some(&path), "one\ntwo").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo");
    }
}
