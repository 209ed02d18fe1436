use std::io::Write;

use charseq::{CharVocab, SpecialTokens};

use crate::{
    input_output::OutputArgs,
    logging::LogArgs,
    vocab_args::{SourceVocabArgs, TargetVocabArgs},
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    source: SourceVocabArgs,

    #[command(flatten)]
    target: TargetVocabArgs,

    /// The decoder start token.
    #[arg(long, default_value = "0")]
    start: u32,

    /// The decoder stop token.
    #[arg(long, default_value = "1")]
    stop: u32,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let source = self.source.load()?;
        let target = self.target.load()?;
        let specials = SpecialTokens::new(self.start, self.stop);

        let mut writer = self.output.open_writer()?;
        write_report(&mut writer, &source, &target, specials)?;
        writer.flush()?;
        Ok(())
    }
}

/// Write a summary of a vocabulary pair and its special tokens.
fn write_report(
    writer: &mut dyn Write,
    source: &CharVocab<u32>,
    target: &CharVocab<u32>,
    specials: SpecialTokens<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(
        writer,
        "source: {} chars, max index {:?}",
        source.len(),
        source.max_index()
    )?;
    writeln!(
        writer,
        "target: {} chars, max index {:?}",
        target.len(),
        target.max_index()
    )?;
    writeln!(
        writer,
        "special tokens: start={} stop={}",
        specials.start, specials.stop
    )?;

    let mut problems = Vec::new();
    if let Err(err) = specials.validate() {
        problems.push(err.to_string());
    }
    if source.is_empty() {
        problems.push("source vocab is empty".to_string());
    }
    for (name, token) in [("start", specials.start), ("stop", specials.stop)] {
        if let Some(c) = target.index_to_char(token) {
            problems.push(format!(
                "target maps {name} token {token} to {c:?}; it will never be emitted"
            ));
        }
    }

    if problems.is_empty() {
        writeln!(writer, "valid: ok")?;
    } else {
        for problem in problems {
            log::warn!("{problem}");
            writeln!(writer, "invalid: {problem}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(
        source: &CharVocab<u32>,
        target: &CharVocab<u32>,
        specials: SpecialTokens<u32>,
    ) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, source, target, specials).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_valid() {
        let vocab = CharVocab::from_ordered_chars("abc".chars(), 2).unwrap();
        let text = report(&vocab, &vocab, SpecialTokens::default());

        assert_eq!(
            text,
            "source: 3 chars, max index Some(4)\n\
             target: 3 chars, max index Some(4)\n\
             special tokens: start=0 stop=1\n\
             valid: ok\n"
        );
    }

    #[test]
    fn test_report_problems() {
        let source = CharVocab::from_pairs(Vec::<(char, u32)>::new()).unwrap();
        let target = CharVocab::from_ordered_chars("ab".chars(), 1).unwrap();
        let text = report(&source, &target, SpecialTokens::new(2, 2));

        assert!(text.contains("invalid: start and stop tokens must differ"));
        assert!(text.contains("invalid: source vocab is empty"));
        assert!(text.contains("target maps stop token 2 to 'b'"));
        assert!(!text.contains("valid: ok"));
    }
}
