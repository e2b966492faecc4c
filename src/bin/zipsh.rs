use std::{
    fs::File,
    io::{self, BufReader},
};

use clap::Parser;
use miette::Result;
use zipsh::{
    archive::ZipImage,
    cli::ZipshCLI,
    error::ShellError,
    identity::Identity,
    repl::Repl,
    repl_v2::ReplV2,
    system::ArchiveSystem,
};

fn main() -> Result<()> {
    let cli = ZipshCLI::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let image = ZipImage::open(&cli.image_path)?;
    let identity = Identity::detect(cli.user.clone(), cli.host.clone());
    let mut system = ArchiveSystem::new(image, identity);

    match &cli.script {
        Some(script) => {
            let file = File::open(script).map_err(|source| ShellError::ScriptUnreadable {
                path: script.clone(),
                source,
            })?;
            let mut repl = Repl::new(BufReader::new(file), io::stdout().lock(), system);
            repl.run()?;
        }
        None => {
            ReplV2::run(&mut system)?;
        }
    }

    Ok(())
}
