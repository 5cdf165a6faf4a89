//! constants.rs
//! Layout constants for the emitted header and the reference defaults.

/// Number of byte tokens per payload line.
pub const BYTES_PER_LINE: usize = 12;

/// Indentation in front of every payload line.
pub const LINE_INDENT: &str = "    ";

/// Suffix appended to the uppercased identifier to form the include guard.
pub const GUARD_SUFFIX: &str = "_H";

/// Suffix appended to the identifier to form the length constant name.
pub const LEN_SUFFIX: &str = "_len";

/// Element type of the emitted array.
pub const ARRAY_CTYPE: &str = "const unsigned char";

/// Type of the emitted length constant.
pub const LEN_CTYPE: &str = "const unsigned int";

/// Defaults when nothing else is configured.
pub const DEFAULT_INPUT_FILE: &str = "brightness_model.tflite";
pub const DEFAULT_OUTPUT_FILE: &str = "brightness_model.h";
pub const DEFAULT_VARIABLE_NAME: &str = "brightness_model";

/// Environment variables read by `ConverterConfig::from_env`.
pub mod env_keys {
    pub const INPUT: &str = "MODELHDR_INPUT";
    pub const OUTPUT: &str = "MODELHDR_OUTPUT";
    pub const NAME: &str = "MODELHDR_NAME";
    pub const WRITE_POLICY: &str = "MODELHDR_WRITE_POLICY";
}

/// Number of leading bytes shown in debug previews.
pub const PREVIEW_LEN: usize = 16;
