//! REPL mode - interactive session
//!
//! Keeps what the user has picked so far: selected model, input type, the text
//! buffer and the chosen image. `run` sends whichever payload the input type
//! points at, so a mismatch between model and input type is possible and reported.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::Category;
use crate::models::Dispatcher;
use crate::ui;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
	Models,
	Select(String),
	Info,
	Load(Option<String>),
	Mode(Category),
	Text(String),
	Image(PathBuf),
	Run(Option<String>),
	Clear,
	Help,
	Exit,
}

/// Parse one input line. `Ok(None)` for blank lines.
pub fn parse(line: &str) -> Result<Option<ReplCommand>, String> {
	let line = line.trim();
	if line.is_empty() {
		return Ok(None);
	}

	let (word, rest) = match line.split_once(char::is_whitespace) {
		Some((w, r)) => (w, r.trim()),
		None => (line, ""),
	};
	let arg = (!rest.is_empty()).then(|| rest.to_string());

	let cmd = match word.to_ascii_lowercase().as_str() {
		"models" | "ls" => ReplCommand::Models,
		"select" => ReplCommand::Select(arg.ok_or("Usage: select <model>")?),
		"info" => ReplCommand::Info,
		"load" => ReplCommand::Load(arg),
		"mode" => ReplCommand::Mode(rest.parse()?),
		"text" => ReplCommand::Text(rest.to_string()),
		"image" | "browse" => ReplCommand::Image(PathBuf::from(rest)),
		"run" => ReplCommand::Run(arg),
		"clear" => ReplCommand::Clear,
		"help" | "?" => ReplCommand::Help,
		"exit" | "quit" | "q" => ReplCommand::Exit,
		other => return Err(format!("Unknown command '{}'. Type 'help'", other)),
	};

	Ok(Some(cmd))
}

pub struct Session {
	dispatcher: Dispatcher,
	input_type: Category,
	text: String,
	image: Option<PathBuf>,
}

impl Session {
	pub fn new(dispatcher: Dispatcher) -> Self {
		Self {
			dispatcher,
			input_type: Category::Text,
			text: String::new(),
			image: None,
		}
	}

	pub fn dispatcher(&self) -> &Dispatcher {
		&self.dispatcher
	}

	pub fn input_type(&self) -> Category {
		self.input_type
	}

	/// What `run` would send right now
	pub fn payload(&self) -> String {
		match self.input_type {
			Category::Text => self.text.clone(),
			Category::Vision => self
				.image
				.as_ref()
				.map(|p| p.to_string_lossy().into_owned())
				.unwrap_or_default(),
		}
	}

	/// Execute one command. Returns false when the session should end.
	pub fn execute(&mut self, cmd: ReplCommand) -> bool {
		match cmd {
			ReplCommand::Models => {
				for info in self.dispatcher.infos() {
					println!("{}", super::models::format_row(&info));
				}
			}
			ReplCommand::Select(name) => {
				let info = self.dispatcher.select(&name);
				super::info::print(&info);
			}
			ReplCommand::Info => match self.dispatcher.selected() {
				Some(info) => super::info::print(&info),
				None => ui::warn("No model selected. Use 'select <model>'"),
			},
			ReplCommand::Load(name) => {
				let name = name.or_else(|| self.dispatcher.selected().map(|i| i.id));
				match name {
					Some(name) => {
						let _ = super::load::load(&mut self.dispatcher, &name);
					}
					None => ui::warn("Please select a model to load."),
				}
			}
			ReplCommand::Mode(category) => {
				self.input_type = category;
				ui::info(&format!("Input type: {}", category));
			}
			ReplCommand::Text(text) => {
				self.text = text;
				ui::debug(&format!("Text buffer: {} chars", self.text.chars().count()));
			}
			ReplCommand::Image(path) => {
				if path.as_os_str().is_empty() {
					self.image = None;
				} else {
					ui::info(&format!("Selected: {}", ui::path_link(&path, 60)));
					self.image = Some(path);
				}
			}
			ReplCommand::Run(name) => self.run(name),
			ReplCommand::Clear => {
				self.text.clear();
				self.image = None;
				print!("\x1b[2J\x1b[H");
				let _ = io::stdout().flush();
			}
			ReplCommand::Help => show_help(),
			ReplCommand::Exit => return false,
		}
		true
	}

	fn run(&mut self, name: Option<String>) {
		let payload = self.payload();
		let name = name.or_else(|| self.dispatcher.current().map(|i| i.id));

		match name {
			Some(name) => {
				let _ = super::run::predict(&mut self.dispatcher, &name, self.input_type, &payload);
			}
			None => {
				if let Err(e) = self.dispatcher.run_current(self.input_type, &payload) {
					ui::model_error(&e);
				}
			}
		}
	}
}

pub fn run(dispatcher: Dispatcher) -> Result<()> {
	ui::print_logo();
	ui::info("Starting interactive session");
	ui::info("Type 'help' for commands, or 'exit' to quit");
	println!();

	let mut session = Session::new(dispatcher);
	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		print!(
			"{} ",
			format!("duo[{}]>", session.input_type().as_str().to_lowercase())
				.bright_blue()
				.bold()
		);
		io::stdout().flush()?;

		let Some(line) = lines.next() else {
			println!();
			break;
		};

		match parse(&line?) {
			Ok(Some(cmd)) => {
				if !session.execute(cmd) {
					ui::info("Goodbye!");
					break;
				}
			}
			Ok(None) => continue,
			Err(msg) => ui::error(&msg),
		}

		println!();
	}

	Ok(())
}

fn show_help() {
	println!("{}", "REPL Commands:".bright_blue().bold());
	println!("  {}           List models", "models".dimmed());
	println!("  {}   Select a model and show its info", "select <model>".dimmed());
	println!("  {}             Show the selected model", "info".dimmed());
	println!("  {}    Load a model (default: selected)", "load [model]".dimmed());
	println!("  {}  Set input type", "mode text|image".dimmed());
	println!("  {}      Set the text input", "text <...>".dimmed());
	println!("  {}     Choose an image file", "image <path>".dimmed());
	println!("  {}     Run a model (default: loaded)", "run [model]".dimmed());
	println!("  {}            Reset inputs and screen", "clear".dimmed());
	println!("  {}             Exit", "exit".dimmed());
}
