/*!
A simple CLI interface to the library.

# Use

```sh
natded_cli [--option(=value)]* file.wff
```

Reads formula strings, one per line, from `file.wff` or, if no path is
given, from stdin. All lines but the last are premises; the last line is
the goal. Runs `init_proof` → `derive` → `simplify`, then prints the
resulting Fitch proof.

## Options

- `--max-lines=N` caps how far the search driver grows the proof before
  giving up and returning a partial one.
*/

use std::io::Read;

use natded::context::{derive_with, init_proof, simplify};

mod args;
use args::parse_args;

/// Entrypoint to the CLI.
fn main() {
    let argv: Vec<String> = std::env::args().collect();

    let (cfg, cli_options) = match parse_args(&argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    #[cfg(feature = "cli-logging")]
    env_logger::init();

    let text = match read_input(&cli_options) {
        Ok(text) => text,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let wffs: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let (mut goals, mut proof) = match init_proof(&wffs) {
        Ok(pair) => pair,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = derive_with(&mut goals, &mut proof, &cfg) {
        println!("c {e}");
        std::process::exit(2);
    }

    let proof = simplify(&proof);
    for line in &proof {
        let indent = "  ".repeat(line.depth);
        let jstlns: Vec<String> = line.jstlns.iter().map(|n| n.to_string()).collect();
        println!(
            "{:>3}  {}{}    {}  {}",
            line.lnum,
            indent,
            line.tree,
            line.rule.label(),
            jstlns.join(",")
        );
    }
}

fn read_input(cli_options: &args::CliOptions) -> std::io::Result<String> {
    match &cli_options.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
