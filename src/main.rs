use count_rows::args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse_normalized();
    log::debug!("count_rows v{}", count_rows::VERSION);

    match count_rows::app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
