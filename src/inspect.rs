//! Diagnostic tool: prints an ONNX model's signature and metadata as JSON,
//! under the same stdout/stderr contract as the classifier binary.

use std::path::PathBuf;
use std::process;

use amygdala::{create_session_builder, FailureReport, RuntimeConfig, LABEL_METADATA_KEY};
use anyhow::bail;
use clap::error::ErrorKind;
use clap::Parser;
use log::info;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect an ONNX model's inputs, outputs, and metadata", long_about = None)]
struct Args {
    /// Path to the ONNX model to inspect
    model: PathBuf,
}

#[derive(Debug, Serialize)]
struct TensorInfo {
    name: String,
    value_type: String,
}

#[derive(Debug, Serialize)]
struct InspectionReport {
    success: bool,
    model: String,
    inputs: Vec<TensorInfo>,
    outputs: Vec<TensorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_metadata: Option<String>,
}

impl InspectionReport {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            FailureReport::new(format!("report serialization failed: {}", e)).to_json()
        })
    }
}

fn main() {
    env_logger::init();

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

fn run(args: &Args) -> anyhow::Result<InspectionReport> {
    if !args.model.exists() {
        bail!("model file not found: {}", args.model.display());
    }

    info!("Loading model from {}", args.model.display());
    let session =
        create_session_builder(&RuntimeConfig::default())?.commit_from_file(&args.model)?;

    let inputs = session
        .inputs
        .iter()
        .map(|input| TensorInfo {
            name: input.name.clone(),
            value_type: format!("{:?}", input.input_type),
        })
        .collect();
    let outputs = session
        .outputs
        .iter()
        .map(|output| TensorInfo {
            name: output.name.clone(),
            value_type: format!("{:?}", output.output_type),
        })
        .collect();

    let (producer, label_metadata) = match session.metadata() {
        Ok(metadata) => (
            metadata.producer().ok(),
            metadata.custom(LABEL_METADATA_KEY).ok().flatten(),
        ),
        Err(_) => (None, None),
    };

    Ok(InspectionReport {
        success: true,
        model: args.model.display().to_string(),
        inputs,
        outputs,
        producer,
        label_metadata,
    })
}

fn fail(message: impl Into<String>) -> ! {
    println!("{}", FailureReport::new(message).to_json());
    process::exit(1);
}
