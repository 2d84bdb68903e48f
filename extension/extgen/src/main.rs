//! Extension header generator CLI.

use extgen::commands::{parse_args, run_generate, Invocation, USAGE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Invocation::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Invocation::Generate(options)) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(err.exit_code());
        }
    };

    extgen::init_tracing(options.verbose);

    match run_generate(&options, &mut std::io::stdout().lock()) {
        Ok(written) => {
            for path in written {
                println!("wrote {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
