//! Extract command handler

use super::utils::{load_mapping, parse_field};
use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use paramshape_core::FieldDescriptor;

/// Handle the extract command
pub fn handle_extract(args: ExtractArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("extract", &args.param.display().to_string());

    let param = load_mapping(&args.param)?;
    let fields = args
        .fields
        .iter()
        .map(|field| parse_field(field))
        .collect::<Result<Vec<FieldDescriptor>>>()?;

    tracing::debug!(
        keys = param.len(),
        fields = fields.len(),
        list = args.list,
        "Extracting fields"
    );

    let extracted = paramshape_core::extract(&param, &fields, !args.list);
    output.info(&format!("Extracted {} value(s)", extracted.len()))?;
    output.data(&extracted.into_value())
}
