use anyhow::Context;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::{PagerWriter, should_page};
use gitlet::errors::as_gitlet_error;
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive
const LOG_FILTER_ENV: &str = "GITLET_LOG";

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny single-user version-control system",
    long_about = "Gitlet keeps snapshots of the files in the current directory as commits, \
    organizes them into branches and merges branches back together. \
    All of its state lives in the .gitlet directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates a .gitlet directory in the current directory, \
        records the initial commit and points the master branch at it."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command snapshots the current content of a file into the staging area. \
        A file whose content matches the current commit is unstaged instead."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "This command creates a commit from the current commit's files and the staging area, \
        then advances the current branch to it."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file or stage its removal",
        long_about = "This command unstages a file; if the current commit tracks it, \
        the file is also staged for removal and deleted from the working directory."
    )]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: PathBuf,
    },
    #[command(
        name = "log",
        about = "Show the history of the current branch",
        long_about = "This command shows the commits from the current head back to the initial commit, \
        following first parents only."
    )]
    Log,
    #[command(
        name = "global-log",
        about = "Show every commit ever made",
        long_about = "This command shows every commit recorded in the repository, regardless of branch."
    )]
    GlobalLog,
    #[command(
        name = "find",
        about = "Print the ids of commits with the given message"
    )]
    Find {
        #[arg(index = 1, help = "The exact commit message to look for")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show branches, staged changes and working directory changes"
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Restore files or switch branches",
        long_about = "checkout -- <file> restores a file from the current commit. \
        checkout <commit> -- <file> restores it from the given commit (any unambiguous id prefix). \
        checkout <branch> replaces the working files with those of the branch head and switches to it.",
        arg_required_else_help = true
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when a file is given")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<PathBuf>,
    },
    #[command(
        name = "branch",
        about = "Create a branch at the current commit"
    )]
    Branch {
        #[arg(index = 1, help = "The name of the new branch")]
        name: String,
    },
    #[command(
        name = "rm-branch",
        about = "Delete a branch pointer"
    )]
    RmBranch {
        #[arg(index = 1, help = "The name of the branch to delete")]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Check out a commit and move the current branch to it"
    )]
    Reset {
        #[arg(index = 1, help = "The commit id (any unambiguous prefix)")]
        commit: String,
    },
    #[command(
        name = "merge",
        about = "Merge the given branch into the current branch"
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match as_gitlet_error(&error) {
            Some(gitlet_error) => {
                println!("{gitlet_error}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("fatal: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(command: &Commands) -> anyhow::Result<()> {
    let pwd = std::env::current_dir().context("Unable to determine the current directory")?;

    match command {
        Commands::Init => {
            Repository::init(&pwd, Box::new(std::io::stdout()))?;
        }
        Commands::Add { file } => {
            open(&pwd)?.add(file)?;
        }
        Commands::Commit { message } => {
            open(&pwd)?.commit(message)?;
        }
        Commands::Rm { file } => {
            open(&pwd)?.rm(file)?;
        }
        Commands::Log => {
            paged(&pwd, |repository| repository.log())?;
        }
        Commands::GlobalLog => {
            paged(&pwd, |repository| repository.global_log())?;
        }
        Commands::Find { message } => {
            open(&pwd)?.find(message)?;
        }
        Commands::Status => {
            open(&pwd)?.status()?;
        }
        Commands::Checkout { target, file } => match (target, file) {
            (Some(revision), Some(file)) => {
                open(&pwd)?.checkout_file(Some(revision.as_str()), file)?
            }
            (None, Some(file)) => open(&pwd)?.checkout_file(None, file)?,
            (Some(branch), None) => open(&pwd)?.checkout_branch(branch)?,
            (None, None) => anyhow::bail!("checkout needs a branch or `-- <file>`"),
        },
        Commands::Branch { name } => {
            open(&pwd)?.branch(name)?;
        }
        Commands::RmBranch { name } => {
            open(&pwd)?.rm_branch(name)?;
        }
        Commands::Reset { commit } => {
            open(&pwd)?.reset(commit)?;
        }
        Commands::Merge { branch } => {
            open(&pwd)?.merge(branch)?;
        }
    }

    Ok(())
}

fn open(pwd: &Path) -> anyhow::Result<Repository> {
    Repository::open(pwd, Box::new(std::io::stdout()))
}

/// Run a history command through the pager when stdout is an interactive terminal
fn paged(pwd: &Path, show: impl FnOnce(&Repository) -> anyhow::Result<()>) -> anyhow::Result<()> {
    if !should_page() {
        return show(&open(pwd)?);
    }

    let pager = Pager::new();
    let repository = Repository::open(pwd, Box::new(PagerWriter::new(pager.clone())))?;
    show(&repository)?;
    drop(repository);

    minus::page_all(pager).context("Unable to display the pager")
}
