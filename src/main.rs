use anyhow::Result;
use clap::Parser;

use release_util::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-util",
    about = "Support library for release scripts: version bumps, file patching, artifact downloads"
)]
struct Args {
    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-util {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    ui::display_error("This is only a support module, it cannot be run");
    std::process::exit(1);
}
