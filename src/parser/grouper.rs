use super::lines::{LineClassifier, LineKind, SourceLine};
use crate::error::{ErrorKind, ParseError};

/// Which parser a definition block is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Enum,
    Interface,
    StringConst,
}

/// A contiguous run of source lines holding one definition
#[derive(Debug, Clone)]
pub struct DefinitionBlock {
    pub kind: BlockKind,
    pub lines: Vec<SourceLine>,
}

impl DefinitionBlock {
    fn open(kind: BlockKind, line: SourceLine) -> Self {
        Self { kind, lines: vec![line] }
    }

    pub fn header(&self) -> &SourceLine {
        &self.lines[0]
    }
}

/// Split source into lines, drop noise, and group the rest into definition
/// blocks. A line that belongs to no block is a hard error; callers are not
/// required to pre-validate input.
pub fn group(source: &str) -> Result<Vec<DefinitionBlock>, ParseError> {
    let mut classifier = LineClassifier::new();
    let mut blocks: Vec<DefinitionBlock> = Vec::new();

    for (number, text) in source.lines().enumerate() {
        let line = SourceLine { text: text.to_string(), number };
        match classifier.classify(&line.text) {
            LineKind::Blank | LineKind::Comment | LineKind::Decorator | LineKind::Import => {}
            LineKind::EnumHeader => blocks.push(DefinitionBlock::open(BlockKind::Enum, line)),
            LineKind::ClassHeader => blocks.push(DefinitionBlock::open(BlockKind::Interface, line)),
            LineKind::StringConst => blocks.push(DefinitionBlock::open(BlockKind::StringConst, line)),
            LineKind::Body => match blocks.last_mut() {
                Some(block) => block.lines.push(line),
                None => {
                    return Err(ParseError::new(
                        ErrorKind::UnexpectedContent,
                        "line does not belong to any definition",
                        line.span(),
                    )
                    .with_help(
                        "input files may only contain enum, dataclass, and string constant definitions",
                    ));
                }
            },
        }
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_are_tagged() {
        let source = "class Color(Enum):\n    RED = \"red\"\n\nclass Point:\n    x: int\n\nNAME = \"pyts\"\n";
        let blocks = group(source).unwrap();
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Enum, BlockKind::Interface, BlockKind::StringConst]);
        assert_eq!(blocks[0].lines.len(), 2);
    }

    #[test]
    fn test_noise_is_dropped() {
        let source = "from enum import Enum\n# colors\n@unique\nclass Color(Enum):\n    RED = \"red\"\n";
        let blocks = group(source).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines.len(), 2);
    }

    #[test]
    fn test_content_before_any_block() {
        let err = group("    RED = \"red\"\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedContent);
    }
}
