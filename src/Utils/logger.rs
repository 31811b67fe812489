use chrono::Local;
use csv::Writer;
use simplelog::*;
use std::fs::File;
use std::io;

/// installs terminal logging (and a timestamped log file if asked) for a calculus session.
/// Calling it twice is harmless: the second logger is simply not installed.
pub fn init_logger(loglevel: &str, log_to_file: bool) -> Result<(), String> {
    let log_option = match loglevel {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" | "none" => LevelFilter::Off,
        _ => {
            return Err(format!(
                "loglevel must be debug, info, warn, error or off, got '{}'",
                loglevel
            ));
        }
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("calculus_log_{}.txt", date_and_time);
        let file = File::create(&name).map_err(|e| format!("cannot create {}: {}", name, e))?;
        loggers.push(WriteLogger::new(log_option, Config::default(), file));
    }
    if CombinedLogger::init(loggers).is_err() {
        // a logger is already installed for this process
        log::debug!("logger already initialised, keeping the existing one");
    }
    Ok(())
}

/// saves the steps of a solution (label, LaTeX) into csv
pub fn save_steps_to_csv(steps: &[(String, String)], filename: &str) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(["step", "latex"])?;
    for (label, latex) in steps {
        writer.write_record([label.as_str(), latex.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
