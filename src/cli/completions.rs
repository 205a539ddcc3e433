use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dora completions bash > ~/.bash_completion.d/dora\n\n\
                  Generate zsh completions:\n    dora completions zsh > ~/.zfunc/_dora\n\n\
                  Generate fish completions:\n    dora completions fish > ~/.config/fish/completions/dora.fish\n\n\
                  Generate PowerShell completions:\n    dora completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
