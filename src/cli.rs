use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

/// Execution provider for ONNX Runtime
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Provider {
	/// Auto-detect best available (TensorRT → CUDA → CoreML → XNNPACK → CPU)
	#[default]
	Auto,
	/// CPU only
	Cpu,
	/// NVIDIA CUDA GPU
	Cuda,
	/// NVIDIA TensorRT (optimized inference)
	Tensorrt,
	/// Apple CoreML (macOS only)
	Coreml,
	/// XNNPACK (optimized CPU kernels)
	Xnnpack,
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "duo",
	author,
	version,
	about = "Pick a pretrained model, load it and run a prediction",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {duo} {models}                            {models_desc}
  {duo} {run}  {run_text_args}  {run_text_desc}
  {duo} {run}  {run_img_args}      {run_img_desc}
  {duo} {repl}                              {repl_desc}
  {duo} {help}  {help_args}                        {help_desc}",
		title = "Examples:".bright_blue().bold(),
		duo = "duo".bright_blue(),
		models = "models".yellow(),
		models_desc = "List available models".dimmed(),
		run = "run".yellow(),
		run_text_args = "sentiment -t \"I love this\"",
		run_text_desc = "Classify sentiment".dimmed(),
		run_img_args = "digits -i seven.png",
		run_img_desc = "Recognize a digit".dimmed(),
		repl = "repl".yellow(),
		repl_desc = "Interactive session".dimmed(),
		help = "help".yellow(),
		help_args = "run",
		help_desc = "Show help for run".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Execution provider: auto, cpu, cuda, tensorrt, coreml, xnnpack
	#[arg(short = 'p', long = "provider", global = true, default_value = "auto")]
	pub provider: Provider,

	/// Directory holding the model files
	#[arg(long = "models-dir", global = true, value_name = "DIR")]
	pub models_dir: Option<PathBuf>,

	/// Command that trains the digit model; receives the artifact path as last argument
	#[arg(long = "train-cmd", global = true, value_name = "CMD")]
	pub train_cmd: Option<String>,

	/// Use built-in mock engines instead of ONNX models
	#[arg(long = "mock", global = true)]
	pub mock: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// List available models
	Models,

	/// Show name, category and description of a model
	Info {
		/// Model id or display name
		#[arg(value_name = "MODEL")]
		model: String,
	},

	/// Load a model and report its status
	Load {
		/// Model id or display name
		#[arg(value_name = "MODEL")]
		model: String,
	},

	/// Load a model and run one prediction
	#[command(group(ArgGroup::new("input").required(true).args(["text", "image"])))]
	Run {
		/// Model id or display name
		#[arg(value_name = "MODEL")]
		model: String,

		/// Text input
		#[arg(short = 't', long = "text", value_name = "TEXT")]
		text: Option<String>,

		/// Image input
		#[arg(short = 'i', long = "image", value_name = "PATH")]
		image: Option<PathBuf>,
	},

	/// Interactive session
	Repl,

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
