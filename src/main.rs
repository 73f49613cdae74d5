use std::{fs, io::Write, process, time::Instant};

use log::info;

use tour_opt_core::{Result, SolverOptions, logging, run};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let report = run(&options)?;
    let rendered = report.render();

    if let Some(path) = options.output_path() {
        fs::write(path, rendered)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
    }

    info!(
        "output: n={} passes={} moves={} time={:.2}s",
        report.n,
        report.passes,
        report.moves,
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
