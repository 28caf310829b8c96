use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dh-cmake completions bash > ~/.bash_completion.d/dh-cmake\n\n\
                  Generate zsh completions:\n    dh-cmake completions zsh > ~/.zfunc/_dh-cmake")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
