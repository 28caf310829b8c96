use clap::Parser;

use super::DhArgs;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install components of every package:\n    dh-cmake install\n\n\
                  Install only the development package:\n    dh-cmake install -p libfoo-dev\n\n\
                  Use a custom build directory:\n    dh-cmake install -B build")]
pub struct InstallArgs {
    #[command(flatten)]
    pub dh: DhArgs,
}
