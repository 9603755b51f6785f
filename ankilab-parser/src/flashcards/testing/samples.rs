//! Curated model-output samples

use crate::flashcards::card::Card;
use crate::flashcards::parsing::parse_cards;

/// A verified sample of raw model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Preamble, one prose answer and one indented code answer.
    ClosureAndMemo,
    /// Headings, rules, score annotations, bold markers and numbered questions.
    NoisyMarkdown,
    /// Cards wrapped in code fences, with code answers and a marker-like comment.
    FencedCode,
    /// Portuguese markers and filler lines.
    Portuguese,
    /// Questions continued over several lines and unindented code answers.
    MultilineQuestion,
}

impl Sample {
    pub const ALL: [Sample; 5] = [
        Sample::ClosureAndMemo,
        Sample::NoisyMarkdown,
        Sample::FencedCode,
        Sample::Portuguese,
        Sample::MultilineQuestion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sample::ClosureAndMemo => "closure-and-memo",
            Sample::NoisyMarkdown => "noisy-markdown",
            Sample::FencedCode => "fenced-code",
            Sample::Portuguese => "portuguese",
            Sample::MultilineQuestion => "multiline-question",
        }
    }

    /// Raw text of the sample.
    pub fn source(self) -> &'static str {
        match self {
            Sample::ClosureAndMemo => include_str!("../../../samples/closure-and-memo.txt"),
            Sample::NoisyMarkdown => include_str!("../../../samples/noisy-markdown.txt"),
            Sample::FencedCode => include_str!("../../../samples/fenced-code.txt"),
            Sample::Portuguese => include_str!("../../../samples/portuguese.txt"),
            Sample::MultilineQuestion => include_str!("../../../samples/multiline-question.txt"),
        }
    }

    /// Run the recovery parser over the sample.
    pub fn parse(self) -> Vec<Card> {
        parse_cards(self.source())
    }
}
