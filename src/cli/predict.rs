use std::process;

use crate::cli::args::Cli;
use crate::cli::logging::set_verbose;
use crate::{error, verbose, warn, InferenceConfig, TollModel, DEFAULT_MODEL, VERSION};

/// Run one toll price prediction.
///
/// Loads the model, runs the forward pass, and prints the JSON record to
/// stdout. Any failure prints a diagnostic to stderr and exits non-zero;
/// nothing is written to stdout on failure.
pub fn run_prediction(args: &Cli) {
    set_verbose(args.verbose);

    let model_is_default = args.model.is_none();
    let model_path = args
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if model_is_default && args.verbose {
        warn!("'model' argument is missing. Using default '--model={DEFAULT_MODEL}'.");
    }

    verbose!("toll-inference {VERSION}");
    verbose!("Loading model from {model_path}");

    let mut model = match TollModel::load_with_config(&model_path, InferenceConfig::new()) {
        Ok(m) => m,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    verbose!(
        "Model loaded: input '{}', outputs {:?}",
        model.input_name(),
        model.output_names()
    );

    let prediction = match model.predict_price(args.area_type, args.hour) {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    match prediction.to_json_line() {
        Ok(line) => println!("{line}"),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
