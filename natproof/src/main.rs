use clap::Parser;
use log::info;
use natproof::{demo, Cli, Error, Kind};
use std::fs::File;
use std::io::Write;

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        println!("status: {}", e.get_kind());
        if let Some(e) = e.get_error() {
            eprintln!("{}", e)
        };
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    if cli.list {
        for d in demo::DEMOS {
            println!("{:<12} {}", d.name, d.description)
        }
        return Ok(());
    }

    let unknown = || {
        let msg = format!("unknown demonstration {}, see --list", cli.demo);
        Error::new(Kind::UnknownDemo, msg.into())
    };
    let demo = demo::find(&cli.demo).ok_or_else(unknown)?;
    info!("running demonstration {}", demo.name);
    let proof = (demo.build)()?;
    info!("derivation has {} steps", proof.size());

    if let Some(file) = &cli.json {
        let mut f = File::create(file)?;
        writeln!(f, "{}", serde_json::to_string_pretty(&proof)?)?;
    }

    println!("status: proved");
    if cli.tree {
        cli.output(proof.display())?
    } else {
        cli.output(format_args!("{}\n", proof.prop()))?
    }
    Ok(())
}
