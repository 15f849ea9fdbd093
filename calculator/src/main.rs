use std::io;

use coursework::console::Console;
use coursework::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the prompts.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let mut session = Session::new(Console::new(stdin.lock(), io::stdout()));
    let summary = session.run()?;
    log::debug!("{:?}", summary);

    Ok(())
}
