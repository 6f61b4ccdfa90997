use std::io;

use anyhow::Result;
use factorial_calculator::run;

fn main() -> Result<()> {
    // log lines go to stderr so stdout stays exactly the program output
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
