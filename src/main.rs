use nearby::pipeline::{run, Config};
use nearby::Error;

fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let outcome = run(&config)?;

    log::info!("Run finished: {outcome:?}");
    Ok(())
}
