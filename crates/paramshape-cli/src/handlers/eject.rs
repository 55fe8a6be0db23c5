//! Eject command handler

use super::utils::{load_mapping, save_document};
use crate::cli::EjectArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use paramshape_core::EjectKey;
use serde_json::Value;

/// Handle the eject command
pub fn handle_eject(args: EjectArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("eject", &args.param.display().to_string());

    let mut param = load_mapping(&args.param)?;
    let before = param.len();

    let key = match args.keys.as_slice() {
        [single] => EjectKey::One(single.clone()),
        keys => EjectKey::Many(keys.to_vec()),
    };
    let ejected = paramshape_core::eject(&mut param, &key);

    tracing::debug!(
        requested = args.keys.len(),
        removed = before - param.len(),
        "Ejected keys"
    );

    output.data(&ejected)?;

    if args.show_remaining {
        output.section("Remaining")?;
        output.mapping(&param)?;
    }

    if args.write {
        save_document(&args.param, &Value::Object(param))?;
        output.success(&format!("✓ Updated {}", args.param.display()))?;
    }

    Ok(())
}
