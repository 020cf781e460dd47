//! Duo - pick a pretrained model, load it, run it
//!
//! Command-line front end for the sentiment and digit classifiers.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use duo::cli::{Cli, Command};
use duo::commands;
use duo::models::Dispatcher;
use duo::{config, runtime, ui, ModelError};

fn main() {
	if let Err(e) = run() {
		// Model errors were already printed where they happened
		if e.downcast_ref::<ModelError>().is_none() {
			ui::error(&format!("{:#}", e));
		}
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	runtime::set_provider(cli.provider);

	if let Some(dir) = cli.models_dir {
		config::set_model_dir(dir);
	}
	if let Some(cmd) = cli.train_cmd {
		config::set_train_cmd(cmd);
	}

	let mut dispatcher = if cli.mock {
		ui::debug("Using mock engines");
		Dispatcher::with_mocks()
	} else {
		Dispatcher::with_onnx()
	};

	match cli.command {
		Command::Models => commands::models::run(&dispatcher),
		Command::Info { model } => commands::info::run(&mut dispatcher, &model),
		Command::Load { model } => commands::load::run(&mut dispatcher, &model),
		Command::Run { model, text, image } => {
			commands::run::run(&mut dispatcher, &model, text.as_deref(), image.as_deref())
		}
		Command::Repl => commands::repl::run(dispatcher),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand.and_then(|sub| cmd.find_subcommand_mut(&sub).cloned()) {
				Some(mut sub_cmd) => sub_cmd.print_help()?,
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}
