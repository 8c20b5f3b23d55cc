//! Binary entrypoint for typc-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = typc_cli::run() {
        // {err:#} keeps the cause chain on one line
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
