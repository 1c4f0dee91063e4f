use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use autocorrect::buffer::StringBuffer;
use autocorrect::dictionary::WordList;
use autocorrect::live::session::Session;
use autocorrect::live::{KeyEvent, LiveController};
use autocorrect::pipeline::{correct_with, Correction, Mode};
use autocorrect::speller::suggestion::CandidateList;
use autocorrect::speller::{CandidateRanker, SpellerConfig, Verdict};
use autocorrect::tokenizer::Tokenize;

trait OutputWriter {
    fn write_verdict(&mut self, word: &str, verdict: &Verdict);
    fn write_correction(&mut self, correction: &Correction);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter;

fn status(verdict: &Verdict) -> &'static str {
    match verdict {
        Verdict::Ignored => "IGNORED",
        Verdict::Known => "CORRECT",
        Verdict::Unavailable => "UNAVAILABLE",
        Verdict::Misspelled(_) => "INCORRECT",
    }
}

impl OutputWriter for StdoutWriter {
    fn write_verdict(&mut self, word: &str, verdict: &Verdict) {
        println!("Input: {}\t\t[{}]", word, status(verdict));

        if let Some(list) = verdict.suggestions() {
            for sugg in list.iter() {
                println!("{}", sugg);
            }
            println!();
        }
    }

    fn write_correction(&mut self, correction: &Correction) {
        println!("Output  : {}", correction.text);
        if correction.findings.is_empty() {
            return;
        }

        println!("Flagged :");
        for finding in correction.findings.iter() {
            println!(
                "  {} -> {}",
                finding.original,
                finding.suggestions.iter().collect::<Vec<_>>().join(", ")
            );
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct SuggestionRequest {
    word: String,
    status: &'static str,
    suggestions: CandidateList,
}

struct JsonWriter {
    results: Vec<SuggestionRequest>,
    corrections: Vec<Correction>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter {
            results: vec![],
            corrections: vec![],
        }
    }
}

impl OutputWriter for JsonWriter {
    fn write_verdict(&mut self, word: &str, verdict: &Verdict) {
        self.results.push(SuggestionRequest {
            word: word.to_owned(),
            status: status(verdict),
            suggestions: verdict.suggestions().cloned().unwrap_or_default(),
        });
    }

    fn write_correction(&mut self, correction: &Correction) {
        self.corrections.push(correction.clone());
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        if self.corrections.is_empty() {
            println!("{}", serde_json::to_string_pretty(&self.results)?);
        } else if self.corrections.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&self.corrections[0])?);
        } else {
            println!("{}", serde_json::to_string_pretty(&self.corrections)?);
        }
        Ok(())
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "correct whole texts, reporting or replacing misspelled words")]
    Correct(CorrectArgs),

    #[options(help = "get suggestions for provided words")]
    Suggest(SuggestArgs),

    #[options(help = "print input in tokenized form")]
    Tokenize(TokenizeArgs),

    #[options(help = "replay stdin one keystroke at a time through the live corrector")]
    Live(LiveArgs),
}

#[derive(Debug, Options)]
struct CorrectArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list (.txt or .json) to be used", required)]
    dictionary: PathBuf,

    #[options(help = "JSON file with speller settings")]
    config: Option<PathBuf>,

    #[options(help = "replace misspelled words with their best guess")]
    auto: bool,

    #[options(help = "only report misspelled words, overriding --auto and the config")]
    report: bool,

    #[options(help = "maximum number of suggestions (up to 3)")]
    nbest: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be corrected")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list (.txt or .json) to be used", required)]
    dictionary: PathBuf,

    #[options(help = "JSON file with speller settings")]
    config: Option<PathBuf>,

    #[options(help = "maximum number of suggestions (up to 3)")]
    nbest: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "w", long = "words", help = "show words only")]
    is_words_only: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct LiveArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list (.txt or .json) to be used", required)]
    dictionary: PathBuf,

    #[options(help = "JSON file with speller settings")]
    config: Option<PathBuf>,

    #[options(no_short, long = "no-auto", help = "only show suggestions, never replace")]
    no_auto: bool,
}

fn read_stdin() -> anyhow::Result<String> {
    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn load_config(path: Option<&Path>, nbest: Option<usize>) -> anyhow::Result<SpellerConfig> {
    let mut config = match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SpellerConfig::default(),
    };

    if let Some(v) = nbest {
        config.n_best = v;
    }

    Ok(config)
}

/// `--report` wins over `--auto`, which wins over the config file.
fn resolve_mode(report: bool, auto: bool, config: &SpellerConfig) -> Mode {
    if report {
        Mode::Report
    } else if auto || config.auto_replace {
        Mode::Auto
    } else {
        Mode::Report
    }
}

fn load_dictionary(path: &Path) -> anyhow::Result<WordList> {
    WordList::open(path).with_context(|| format!("loading word list {}", path.display()))
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs: String = if args.inputs.is_empty() {
        read_stdin()?
    } else {
        args.inputs.join(" ")
    };

    if args.is_words_only {
        for (index, token) in inputs.word_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    } else {
        for token in inputs.tokens() {
            println!("{:>4}: \"{}\"", token.index, token.text);
        }
    }

    Ok(())
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), args.nbest)?;
    let ranker = CandidateRanker::new(load_dictionary(&args.dictionary)?, config);

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let words = if args.inputs.is_empty() {
        read_stdin()?
            .split_whitespace()
            .map(|x| x.to_string())
            .collect()
    } else {
        args.inputs
    };

    for word in words {
        let verdict = ranker.check(&word);
        writer.write_verdict(&word, &verdict);
    }

    writer.finish()
}

fn correct(args: CorrectArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), args.nbest)?;
    let mode = resolve_mode(args.report, args.auto, &config);
    let ranker = CandidateRanker::new(load_dictionary(&args.dictionary)?, config);

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let text = if args.inputs.is_empty() {
        read_stdin()?
    } else {
        args.inputs.join(" ")
    };

    writer.write_correction(&correct_with(&ranker, &text, mode));
    writer.finish()
}

fn live(args: LiveArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref(), None)?;
    if args.no_auto {
        config.auto_replace = false;
    }

    let controller = LiveController::new(load_dictionary(&args.dictionary)?, config);
    let session = Session::new(controller, StringBuffer::new(""));

    eprintln!("Reading from stdin...");
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;

        let mut updates = session.type_str(&line);
        updates.push(session.type_key(&KeyEvent::new("Return", Some('\n'))));

        for update in updates.iter().filter(|u| !u.is_cleared()) {
            println!("{}", update);
        }
    }

    println!("{}", session.into_buffer().text());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Correct(args)) => correct(args),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Tokenize(args)) => tokenize(args),
        Some(Command::Live(args)) => live(args),
    }
}
