use divorce_intake_cli::run;

fn main() {
    if let Err(err) = run() {
        if let divorce_intake::error::AppError::Transformation(failure) = &err {
            match serde_json::to_string_pretty(&failure.failure()) {
                Ok(rendered) => println!("{rendered}"),
                Err(render_err) => eprintln!("application error: {render_err}"),
            }
        }
        eprintln!("application error: {err}");
        std::process::exit(err.exit_code());
    }
}
