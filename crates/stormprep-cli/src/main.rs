use stormprep_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch};
use stormprep_lib::error::StormPrepError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), StormPrepError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => {
            run_fetch(params).await?;
        }
    }

    Ok(())
}
