//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = powline_cli::run() {
        eprintln!("powline: {err}");
        std::process::exit(1);
    }
}
