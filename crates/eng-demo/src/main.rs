use std::io;

use eng_demo::{args::Args, sections};

fn main() -> anyhow::Result<()> {
    eng_demo::init_logger!();

    let args = Args::parse(std::env::args().skip(1))?;
    log::debug!("section `{}`, t = {}", args.section, args.time);
    sections::run(args.section, &args.camera, args.time, &mut io::stdout().lock())
}
