use std::path::PathBuf;
use std::process;

use amygdala::{
    parse_label_list, ClassifierError, EmotionClassifier, FailureReport, PredictionReport,
    DEFAULT_MAX_LENGTH,
};
use clap::error::ErrorKind;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ONNX emotion model
    model: PathBuf,

    /// Text to classify
    text: String,

    /// Comma-separated emotion labels in model output order. When omitted,
    /// labels come from the model's metadata or the built-in table
    labels: Option<String>,

    /// Encoded sequence length the model was trained with
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Path to a vocab.json file from the model's training pipeline
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    // stdout carries exactly one JSON object per invocation; argument errors
    // honor that contract too. Help and version keep clap's usual output.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => fail(format!("invalid arguments: {}", err.kind())),
    };

    match run(&args) {
        Ok(report) => println!("{}", report.to_json()),
        Err(err) => fail(err.to_string()),
    }
}

fn run(args: &Args) -> anyhow::Result<PredictionReport> {
    if args.text.trim().is_empty() {
        return Err(ClassifierError::InvalidInput("empty text provided".to_string()).into());
    }

    let mut builder = EmotionClassifier::builder().with_max_length(args.max_length)?;
    if let Some(path) = &args.vocabulary {
        builder = builder.with_vocabulary_file(path)?;
    }
    if let Some(raw) = &args.labels {
        builder = builder.with_labels(parse_label_list(raw)?)?;
    }
    let classifier = builder.with_model_file(&args.model)?.build()?;

    info!("Classifying {} characters of text", args.text.chars().count());
    let prediction = classifier.predict(&args.text)?;

    Ok(PredictionReport::new(
        prediction,
        args.model.display().to_string(),
        &args.text,
    ))
}

fn fail(message: impl Into<String>) -> ! {
    println!("{}", FailureReport::new(message).to_json());
    process::exit(1);
}
