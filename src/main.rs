use clap::Parser;
use miette::Result;
use rxcat::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => rxcat::cli::commands::init::run(args, &global),
        Commands::Drug(cmd) => rxcat::cli::commands::drug::run(cmd, &global),
        Commands::Interaction(cmd) => rxcat::cli::commands::interaction::run(cmd, &global),
        Commands::Category(cmd) => rxcat::cli::commands::category::run(cmd, &global),
        Commands::Severity(cmd) => rxcat::cli::commands::severity::run(cmd, &global),
        Commands::Check(args) => rxcat::cli::commands::check::run(args, &global),
        Commands::Status(args) => rxcat::cli::commands::status::run(args, &global),
        Commands::Export(args) => rxcat::cli::commands::export::run(args, &global),
        Commands::Import(args) => rxcat::cli::commands::import::run(args, &global),
        Commands::Reset(args) => rxcat::cli::commands::reset::run(args, &global),
        Commands::Completions(args) => rxcat::cli::commands::completions::run(args),
    }
}
