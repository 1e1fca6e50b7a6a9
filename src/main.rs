use std::process;

use clap::Parser;
use tokio::io::{self, BufReader};
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

use cryptogram_solver::cli::Args;
use cryptogram_solver::lexicon::Lexicon;
use cryptogram_solver::session::Session;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(args.log_level().into()))
        .with_writer(std::io::stderr)
        .init();

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = runtime.block_on(run(args));
    // A pending stdin read would otherwise keep the runtime alive after Ctrl-C.
    runtime.shutdown_background();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> cryptogram_solver::Result<()> {
    let config = args.solver_config()?;
    let lexicon = Lexicon::load(&args.words);
    let session = Session::new(&lexicon, config)?
        .keep_punctuation(args.keep_punctuation)
        .show_key(args.verbose > 0);

    if let Some(cryptogram) = &args.cryptogram {
        print!("{}", session.solve_line(cryptogram));
        return Ok(());
    }

    let mut stdout = io::stdout();
    session
        .run(BufReader::new(io::stdin()), &mut stdout, tokio::signal::ctrl_c())
        .await?;
    Ok(())
}
