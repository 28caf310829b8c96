use clap::{Parser, ValueEnum};

use super::DhArgs;

/// Dashboard step driven through `ctest -S`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtestStep {
    Start,
    Configure,
    Build,
    Test,
    Submit,
}

impl CtestStep {
    pub fn as_str(self) -> &'static str {
        match self {
            CtestStep::Start => "start",
            CtestStep::Configure => "configure",
            CtestStep::Build => "build",
            CtestStep::Test => "test",
            CtestStep::Submit => "submit",
        }
    }
}

/// Arguments for the ctest command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Start a dashboard:\n    dh-cmake ctest start\n\n\
                  Configure with extra CMake arguments:\n    dh-cmake ctest configure -- -DBUILD_TESTING=ON\n\n\
                  Submit to CDash as a nightly build:\n    dh-cmake ctest submit --model Nightly")]
pub struct CtestArgs {
    /// Dashboard step to run
    #[arg(value_enum)]
    pub step: CtestStep,

    /// Dashboard model (Experimental, Nightly, Continuous)
    #[arg(long, default_value = "Experimental")]
    pub model: String,

    #[command(flatten)]
    pub dh: DhArgs,

    /// Extra arguments passed to the configure command
    #[arg(last = true, value_name = "ARGS")]
    pub configure_args: Vec<String>,
}
