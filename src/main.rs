use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use std::fs;
use std::path::{Path, PathBuf};

use gomode::lexer::Style;
use gomode::{highlight, reindent, GoMode, ModeConfig, ModeRegistry};

#[derive(Parser)]
#[command(name = "gomode")]
#[command(author, version, about = "Tokenize and auto-indent Go source line by line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with indentUnit / tabSize / indentWithTabs
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Columns per indentation level (overrides the config file)
    #[arg(long, global = true)]
    indent_unit: Option<u32>,

    /// Tab stop width (overrides the config file)
    #[arg(long, global = true)]
    tab_size: Option<u32>,

    /// Indent with tabs instead of spaces
    #[arg(long, global = true)]
    tabs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the classified token stream of a file
    Tokens {
        /// The source file to tokenize
        input: PathBuf,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a file with ANSI syntax colors
    Highlight {
        /// The source file to highlight
        input: PathBuf,
    },

    /// Re-indent a file
    Indent {
        /// The source file to re-indent
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Only report whether the file is already indented
        #[arg(long)]
        check: bool,
    },

    /// Show the mode registered for a MIME type
    Mime {
        /// MIME type, e.g. text/x-go
        mime: String,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let mode = build_mode(&cli)?;

    let result = match cli.command {
        Commands::Tokens { input, json } => tokens(&mode, &input, json),
        Commands::Highlight { input } => print_highlighted(&mode, &input),
        Commands::Indent {
            input,
            output,
            check,
        } => indent(&mode, &input, output.as_deref(), check),
        Commands::Mime { mime } => show_mime(&mime),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn build_mode(cli: &Cli) -> Result<GoMode> {
    let mut config = match &cli.config {
        Some(path) => ModeConfig::load(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => ModeConfig::default(),
    };
    if let Some(indent_unit) = cli.indent_unit {
        config.indent_unit = indent_unit;
    }
    if let Some(tab_size) = cli.tab_size {
        config.tab_size = tab_size;
    }
    if cli.tabs {
        config.indent_with_tabs = true;
    }
    log::debug!("mode config: {:?}", config);
    Ok(GoMode::new(config)?)
}

fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("Failed to read source file: {:?}", input))
}

fn tokens(mode: &GoMode, input: &Path, json: bool) -> Result<()> {
    let source = read_source(input)?;
    let lines = highlight(mode, &source);

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    for line in &lines {
        for span in &line.spans {
            let style = span.style.map_or("-", Style::as_str);
            println!(
                "{:4}:{:<4} {:<9} {:?}",
                line.line, span.start, style, span.text
            );
        }
    }
    Ok(())
}

fn paint(text: &str, style: Option<Style>) -> ColoredString {
    match style {
        Some(Style::Keyword) => text.blue().bold(),
        Some(Style::Atom) => text.magenta(),
        Some(Style::Number) => text.cyan(),
        Some(Style::String) => text.green(),
        Some(Style::Comment) => text.bright_black().italic(),
        Some(Style::Operator) => text.yellow(),
        Some(Style::Variable) | None => text.normal(),
    }
}

fn print_highlighted(mode: &GoMode, input: &Path) -> Result<()> {
    let source = read_source(input)?;
    for line in highlight(mode, &source) {
        let painted: String = line
            .spans
            .iter()
            .map(|span| paint(&span.text, span.style).to_string())
            .collect();
        println!("{}", painted);
    }
    Ok(())
}

fn indent(mode: &GoMode, input: &Path, output: Option<&Path>, check: bool) -> Result<()> {
    let source = read_source(input)?;
    let indented = reindent(mode, &source);

    if check {
        if indented != source {
            anyhow::bail!("{:?} is not indented", input);
        }
        println!("{}: {:?} is indented", "ok".green().bold(), input);
        return Ok(());
    }

    match output {
        Some(path) => fs::write(path, &indented)
            .with_context(|| format!("Failed to write output file: {:?}", path))?,
        None => print!("{}", indented),
    }
    Ok(())
}

fn show_mime(mime: &str) -> Result<()> {
    let registry = ModeRegistry::with_defaults();
    let spec = registry.resolve_mime(mime)?;
    println!("{}", serde_json::to_string_pretty(spec)?);
    Ok(())
}
