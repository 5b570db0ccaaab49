//! Minimal CLI: infer → (interface | schema)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::emit::{self, SchemaDocOptions};
use crate::infer;
use crate::source;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer structure from JSON/NDJSON/CSV samples and emit a TypeScript-style interface or a draft-07 JSON Schema
#[derive(Parser, Debug)]
#[command(name = "json-limn", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit a TypeScript-style interface definition
    Interface(InterfaceOut),
    /// infer and emit a draft-07 JSON Schema document
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (one document per line)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// treat input as CSV with a header row (one sample object per record)
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths, quoted glob patterns, or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug)]
struct InterfaceOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// top-level type name
    #[arg(long, default_value = "RootObject")]
    name: String,

    /// mark every field required instead of inferring optionality
    #[arg(long, default_value_t = false)]
    all_required: bool,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// schema document title
    #[arg(long, default_value = "RootObject")]
    title: String,

    /// mark every property required instead of inferring optionality
    #[arg(long, default_value_t = false)]
    all_required: bool,

    /// single-line output instead of pretty-printed
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Load every configured input into materialized sample values.
    fn load_samples(&self) -> Result<Vec<Value>> {
        let sources = source::resolve_input_patterns(&self.input)?;
        let mut samples = Vec::new();
        for src in sources {
            let label = src.label();
            let text = src.read_text()?;
            let docs = if self.csv {
                source::csv_rows(&text, &label)?
            } else {
                source::json_documents(&text, self.ndjson, &label)?
            };
            for doc in docs {
                let doc = match self.json_pointer.as_deref() {
                    Some(pointer) => source::select_pointer(&doc, pointer, &label)?,
                    None => doc,
                };
                samples.push(doc);
            }
        }
        if samples.is_empty() {
            bail!("no samples found in the given inputs");
        }
        Ok(samples)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Interface(target) => {
                let samples = target.input_settings.load_samples()?;
                let root = infer::infer_samples(samples.iter())?;
                let text = emit::render_interface(&root, &target.name, !target.all_required);
                write_output(target.out.as_deref(), &text)
            }
            Command::Schema(target) => {
                let samples = target.input_settings.load_samples()?;
                let root = infer::infer_samples(samples.iter())?;
                let options = SchemaDocOptions {
                    infer_optional: !target.all_required,
                    pretty: !target.compact,
                };
                let text = emit::render_json_schema(&root, &target.title, options)?;
                write_output(target.out.as_deref(), &text)
            }
        }
    }
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
