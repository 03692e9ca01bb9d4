use crate::span::Span;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Maps byte offsets in the source to line/character positions.
#[derive(Clone, Debug)]
pub struct SourceMap {
    source_len: usize,
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(idx, _)| idx + 1),
        );
        Self {
            source_len: source.len(),
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source_len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        Position {
            line,
            // Byte offset from line start (ASCII-safe for now).
            character: offset - self.line_starts[line],
        }
    }

    pub fn range(&self, span: Span) -> Range {
        Range {
            start: self.position(span.start),
            end: self.position(span.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, SourceMap};
    use crate::span::Span;

    #[test]
    fn positions_are_line_based() {
        let source = "ab\ncd\n";
        let map = SourceMap::new(source);

        assert_eq!(map.line_count(), 3);
        assert_eq!(
            map.position(0),
            Position {
                line: 0,
                character: 0
            }
        );
        assert_eq!(
            map.position(4),
            Position {
                line: 1,
                character: 1
            }
        );
        assert_eq!(
            map.position(6),
            Position {
                line: 2,
                character: 0
            }
        );

        let range = map.range(Span::new(1, 4));
        assert_eq!(range.start.line, 0);
        assert_eq!(range.end.line, 1);
    }

    #[test]
    fn offsets_past_the_end_are_clamped() {
        let map = SourceMap::new("ab");
        assert_eq!(
            map.position(99),
            Position {
                line: 0,
                character: 2
            }
        );
    }
}
