mod encode;
mod split;
mod translate;
mod vocab;

/// Subcommands for charseq
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Inspect a source/target vocabulary pair.
    Vocab(vocab::VocabArgs),

    /// Print the filtered source index sequence of each line.
    Encode(encode::EncodeArgs),

    /// Split documents into one sentence per line.
    Split(split::SplitArgs),

    /// Translate each input line.
    Translate(translate::TranslateArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Split(cmd) => cmd.run(),
            Commands::Translate(cmd) => cmd.run(),
        }
    }
}
