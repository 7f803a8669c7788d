use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use markseg::config::DEFAULT_WRAPPER_TAG;
use markseg::{
    parse_fragment, tokenize_sentence_with, ScriptTokenizer, TokenizerConfig,
    WhitespaceTokenizer, WordTokenizer,
};

#[derive(Debug, Parser)]
#[command(
    name = "markseg",
    version,
    about = "Tokenize the text of markup-bearing sentences, one per line"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Word tokenizer applied to text nodes
    #[arg(short, long, value_enum, default_value_t = TokenizerArg::Script)]
    tokenizer: TokenizerArg,
    /// Name of the synthetic wrapper element
    #[arg(short, long, default_value = DEFAULT_WRAPPER_TAG)]
    wrapper: String,
    /// Print the parsed tree of each line as JSON instead of tokens
    #[arg(long)]
    tree: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TokenizerArg {
    Script,
    Whitespace,
}

impl TokenizerArg {
    fn build(self) -> Box<dyn WordTokenizer> {
        match self {
            Self::Script => Box::new(ScriptTokenizer),
            Self::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let config = TokenizerConfig::default().with_wrapper_tag(args.wrapper.clone());
    config.validate().context("invalid configuration")?;
    let words = args.tokenizer.build();

    let input_data = read_input(&args.input)?;
    let mut output = String::new();
    let mut failures = 0usize;

    for (index, line) in input_data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(line = index + 1, "processing");
        match render_line(line, &args, words.as_ref(), &config) {
            Ok(rendered) => {
                output.push_str(&rendered);
                output.push('\n');
            }
            Err(err) => {
                failures += 1;
                error!(line = index + 1, "{err:#}");
            }
        }
    }

    write_output(&args.output, output.as_bytes())?;

    if failures > 0 {
        bail!("{failures} line(s) could not be tokenized");
    }
    Ok(())
}

fn render_line(
    line: &str,
    args: &Args,
    words: &dyn WordTokenizer,
    config: &TokenizerConfig,
) -> Result<String> {
    if args.tree {
        let document = parse_fragment(line, config)?;
        serde_json::to_string(&document).context("failed to serialize tree")
    } else {
        Ok(tokenize_sentence_with(line, words, config)?)
    }
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
