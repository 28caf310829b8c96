use clap::{Parser, Subcommand};

use super::DhArgs;

/// Arguments for the cpack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate CPack metadata:\n    dh-cmake cpack generate\n\n\
                  Write cpack:Depends substitution variables:\n    dh-cmake cpack substvars\n\n\
                  Show components and dependencies of one package:\n    dh-cmake cpack show -p libfoo-dev")]
pub struct CpackArgs {
    #[command(subcommand)]
    pub command: CpackSubcommand,
}

/// CPack subcommands
#[derive(Subcommand, Debug)]
pub enum CpackSubcommand {
    /// Generate debian/.cpack/cpack-metadata.json with the CPack External generator
    Generate(CpackCommandArgs),

    /// Write cpack:Depends into debian/<package>.substvars
    Substvars(CpackCommandArgs),

    /// Show the components and dependencies of each package
    Show(CpackCommandArgs),
}

/// Arguments for cpack subcommands
#[derive(Parser, Debug)]
pub struct CpackCommandArgs {
    #[command(flatten)]
    pub dh: DhArgs,
}
