use clap::Parser;

use openmoo::cli::Args;
use openmoo::io::TerminalIO;
use openmoo::services::session::Session;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::random());

    let result = Session::new(&args, seed).and_then(|session| session.run(&mut TerminalIO));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
