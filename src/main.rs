use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use file_guard::Lock;
use sprig::areas::repository::Repository;
use sprig::artifacts::core::config::RepositoryConfig;
use sprig::errors::as_user_error;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sprig",
    version = "0.1.0",
    about = "A small local version control system",
    long_about = "sprig keeps snapshots of a working tree as commits, with branches, \
    three-way merges and push/fetch between repositories on the same filesystem.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create a new repository",
        long_about = "Creates the .sprig directory in the current directory (or at the given path) \
        with an initial commit on branch master."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or stage its removal and delete it"
    )]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "commit", about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches and working tree changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches to a branch. \
        checkout -- <file> restores a file from HEAD. \
        checkout <commit> -- <file> restores a file from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch to switch to, or commit to restore from")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "File to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at HEAD")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Check out a commit and move the current branch to it"
    )]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(name = "add-remote", about = "Register a remote repository")]
    AddRemote {
        #[arg(index = 1)]
        name: String,
        #[arg(index = 2, help = "Root or .sprig directory of the remote")]
        path: String,
    },
    #[command(name = "rm-remote", about = "Forget a remote repository")]
    RmRemote {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "push", about = "Send the current history to a remote branch")]
    Push {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(
        name = "fetch",
        about = "Copy a remote branch into <remote>/<branch>"
    )]
    Fetch {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(name = "pull", about = "Fetch a remote branch and merge it")]
    Pull {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
}

impl Commands {
    fn is_read_only(&self) -> bool {
        matches!(
            self,
            Commands::Log | Commands::GlobalLog | Commands::Find { .. } | Commands::Status
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli.command) {
        Err(error) => match as_user_error(&error) {
            Some(user_error) => {
                println!("{}", user_error);
                Ok(())
            }
            None => Err(error),
        },
        Ok(()) => Ok(()),
    }
}

fn run(command: &Commands) -> Result<()> {
    let pwd = std::env::current_dir()?;

    if let Commands::Init { path } = command {
        let path = path.as_ref().map(PathBuf::from).unwrap_or(pwd);
        return open_repository(&path)?.init();
    }

    let repository = open_repository(&pwd)?;
    repository.ensure_initialized()?;

    let lock_path = repository.metadata_path().join("lock");
    let mut lock_file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("Unable to open lock file {}", lock_path.display()))?;
    let lock = if command.is_read_only() {
        Lock::Shared
    } else {
        Lock::Exclusive
    };
    let _guard = file_guard::lock(&mut lock_file, lock, 0, 1)
        .with_context(|| format!("Unable to lock {}", lock_path.display()))?;

    match command {
        Commands::Init { .. } => unreachable!("init is handled before locking"),
        Commands::Add { file } => repository.add(file),
        Commands::Rm { file } => repository.rm(file),
        Commands::Commit { message } => repository.commit(message),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(message),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => match (target, file) {
            (commit, Some(file)) => repository.checkout_file(commit.as_deref(), file),
            (Some(branch), None) => repository.checkout_branch(branch),
            (None, None) => Cli::command()
                .error(
                    clap::error::ErrorKind::MissingRequiredArgument,
                    "checkout needs a branch, `-- <file>` or `<commit> -- <file>`",
                )
                .exit(),
        },
        Commands::Branch { name } => repository.branch(name),
        Commands::RmBranch { name } => repository.rm_branch(name),
        Commands::Reset { commit } => repository.reset(commit),
        Commands::Merge { branch } => repository.merge(branch).map(|_| ()),
        Commands::AddRemote { name, path } => repository.add_remote(name, path),
        Commands::RmRemote { name } => repository.rm_remote(name),
        Commands::Push { remote, branch } => repository.push(remote, branch),
        Commands::Fetch { remote, branch } => repository.fetch(remote, branch).map(|_| ()),
        Commands::Pull { remote, branch } => repository.pull(remote, branch).map(|_| ()),
    }
}

fn open_repository(path: &Path) -> Result<Repository> {
    Repository::new(
        path,
        Box::new(std::io::stdout()),
        RepositoryConfig::load_from_env(),
    )
}
