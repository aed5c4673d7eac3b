use clap::{Parser, Subcommand, ValueEnum};
use oinstec_forms::prelude::*;
use oinstec_forms::render::render_with;
use oinstec_forms::validate::validate_with;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyCli {
    /// Unknown operators count as satisfied
    Open,
    /// Unknown operators count as unsatisfied
    Closed,
}

/// Inspect dynamic inspection form templates against a set of answers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// How conditions with unrecognised operators evaluate
    #[arg(short, long, value_enum, default_value = "open", global = true)]
    policy: PolicyCli,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the visible fields in display order
    Visible {
        template: PathBuf,
        answers: Option<PathBuf>,
    },
    /// Explain why each field is visible or hidden
    Explain {
        template: PathBuf,
        answers: Option<PathBuf>,
        /// Only explain this field
        #[arg(short, long)]
        field: Option<String>,
    },
    /// Validate the answers of the visible fields
    Validate { template: PathBuf, answers: PathBuf },
    /// Report authoring problems in a template
    Lint { template: PathBuf },
    /// Draw the visible form as text
    Render {
        template: PathBuf,
        answers: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let policy = match cli.policy {
        PolicyCli::Open => UnknownOperatorPolicy::FailOpen,
        PolicyCli::Closed => UnknownOperatorPolicy::FailClosed,
    };
    let evaluator = Evaluator::builder().unknown_operator_policy(policy).build();

    let start = Instant::now();
    let code = match run(cli.command, &evaluator) {
        Ok(code) => code,
        Err(e) => exit_with_error(&e.to_string()),
    };
    tracing::debug!(elapsed = ?start.elapsed(), "done");
    std::process::exit(code);
}

fn run(command: Command, evaluator: &Evaluator) -> Result<i32> {
    match command {
        Command::Visible { template, answers } => {
            let template = FormTemplate::from_file_checked(&template)?;
            let answers = load_answers(answers)?;
            for field in evaluator.visible_fields(&template, &answers) {
                println!("{:>4}  {:<24} {}", field.order, field.id, field.kind);
            }
            Ok(0)
        }
        Command::Explain {
            template,
            answers,
            field,
        } => {
            let template = FormTemplate::from_file_checked(&template)?;
            let answers = load_answers(answers)?;
            let fields: Vec<&FieldDefinition> = match &field {
                Some(id) => vec![template.field(id).ok_or_else(|| {
                    format!("Field '{}' does not exist in template '{}'", id, template.id)
                })?],
                None => template.fields.iter().collect(),
            };
            for field in fields {
                let trace = evaluator.explain(field, &answers);
                println!("{}: {}", field.id, TraceFormatter::format_trace(&trace));
            }
            Ok(0)
        }
        Command::Validate { template, answers } => {
            let template = FormTemplate::from_file_checked(&template)?;
            let answers = AnswerMap::from_file(&answers)?;
            let issues = validate_with(evaluator, &template, &answers);
            if issues.is_empty() {
                println!("All visible answers are valid.");
                return Ok(0);
            }
            for issue in &issues {
                println!("  -> {}", issue);
            }
            Ok(2)
        }
        Command::Lint { template } => {
            let template = FormTemplate::from_file(&template)?;
            let problems = lint(&template);
            if problems.is_empty() {
                println!("Template '{}' has no problems.", template.id);
                return Ok(0);
            }
            for problem in &problems {
                println!("  -> {}", problem);
            }
            Ok(2)
        }
        Command::Render { template, answers } => {
            let template = FormTemplate::from_file_checked(&template)?;
            let answers = load_answers(answers)?;
            print!("{}", render_with(evaluator, &template, &answers));
            Ok(0)
        }
    }
}

fn load_answers(path: Option<PathBuf>) -> Result<AnswerMap> {
    match path {
        Some(path) => Ok(AnswerMap::from_file(path)?),
        None => {
            tracing::info!("no answers file provided, evaluating an empty form");
            Ok(AnswerMap::new())
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
