use studybuddy_core::{BreakReminder, Config, ConsoleNotifier, TerminalHost};

pub fn run(minutes: Option<f64>) -> Result<(), Box<dyn std::error::Error>> {
    let minutes = match minutes {
        Some(minutes) => minutes,
        None => Config::load_or_default().reminder.break_minutes,
    };
    let mut reminder = BreakReminder::new(minutes)?;
    println!("Break reminder set for every {minutes} minute(s).");
    reminder.run(&mut TerminalHost::stdio(), &mut ConsoleNotifier)?;
    Ok(())
}
