use std::path::PathBuf;

use serde_json::json;
use studybuddy_core::{Config, RandomPicker, TipPicker, TipProvider};

use super::Context;

pub fn run(ctx: &Context, file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let provider = TipProvider::new(file.unwrap_or_else(|| PathBuf::from(&config.tips.path)));
    let mut picker: Box<dyn TipPicker> = match config.tips.seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::thread()),
    };

    let mut notices = ctx.notices();
    let tip = provider.present(picker.as_mut(), &mut notices);
    if ctx.json {
        ctx.print_json(&json!({ "tip": tip, "events": notices.into_events() }))?;
    }
    if tip.is_none() {
        return Err(format!("no tip available from {}", provider.path().display()).into());
    }
    Ok(())
}
