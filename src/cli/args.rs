use clap::Parser;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"Examples:
    toll-inference 2 14
    toll-inference 0 23 --model models/toll_model.onnx
    toll-inference -- -1 99

On success the only line written to stdout is the prediction record:
    {"areaType": 2, "hour": 14, "price": 3.7}"#)]
pub struct Cli {
    /// Toll-zone area-type code
    #[arg(value_name = "AREA_TYPE", allow_negative_numbers = true)]
    pub area_type: i64,

    /// Hour of day
    #[arg(value_name = "HOUR", allow_negative_numbers = true)]
    pub hour: i64,

    /// Path to the ONNX model artifact [default: toll_model.onnx]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Show diagnostic output on stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Cli::parse_from(["toll-inference", "2", "14"]);
        assert_eq!(args.area_type, 2);
        assert_eq!(args.hour, 14);
        assert!(args.model.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_custom_model() {
        let args = Cli::parse_from([
            "toll-inference",
            "0",
            "23",
            "--model",
            "custom.onnx",
            "--verbose",
        ]);
        assert_eq!(args.area_type, 0);
        assert_eq!(args.hour, 23);
        assert_eq!(args.model, Some("custom.onnx".to_string()));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_negative_values() {
        // No range validation: semantically invalid codes still parse.
        let args = Cli::parse_from(["toll-inference", "--", "-1", "99"]);
        assert_eq!(args.area_type, -1);
        assert_eq!(args.hour, 99);
    }

    #[test]
    fn test_args_missing_hour_rejected() {
        let result = Cli::try_parse_from(["toll-inference", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_non_integer_rejected() {
        let result = Cli::try_parse_from(["toll-inference", "abc", "14"]);
        assert!(result.is_err());
    }
}
