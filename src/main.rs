mod counter;
mod error;
mod input;
mod output;
mod tokenizer;

use std::process::ExitCode;

use env_logger::Env;
use log::error;

use crate::counter::TokenCounter;
use crate::input::ReaderSource;
use crate::tokenizer::BpeTokenizer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stderr only; stdout carries nothing but the count
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let counter = TokenCounter::new(BpeTokenizer::new());
    let mut source = ReaderSource::stdin();
    let mut stdout = tokio::io::stdout();

    match counter.run(&mut source, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
