use std::process::ExitCode;

fn main() -> ExitCode {
    match t_plot::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("t-plot: {e}");
            ExitCode::FAILURE
        }
    }
}
