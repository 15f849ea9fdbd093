use std::io;

use coursework::console::Console;
use coursework::greeting::Greeter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    Greeter::new(Console::new(stdin.lock(), io::stdout())).run()?;

    Ok(())
}
