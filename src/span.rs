use std::{ops::Range, sync::Arc};

use colored::{Color, Colorize};

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    source_name: Arc<String>,
    lookup: Arc<Lookup>,
    location: Range<usize>,
}

impl Span {
    pub fn new(source_name: Arc<String>, lookup: Arc<Lookup>, location: Range<usize>) -> Self {
        Span {
            source_name,
            lookup,
            location,
        }
    }

    /// Span of the single character starting at byte `index`.
    pub fn at(source_name: Arc<String>, lookup: Arc<Lookup>, index: usize) -> Self {
        let width = lookup.source[index..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);

        Span::new(source_name, lookup, index..index + width)
    }

    pub fn line_col(&self) -> (usize, usize) {
        self.lookup.line_col(self.location.start)
    }

    pub fn pointer(&self, arrow_color: Color) -> String {
        let (line_i, col_i) = self.line_col();
        let line = self.lookup.line(line_i).trim_end();
        let line_n = line_i + 1;
        let col_n = col_i + 1;
        let offset = line_n.ilog10() as usize + 2;

        // Pointers never run past the end of the first line they start on.
        let start = self.lookup.col_char(line_i, self.location.start);
        let end = self.lookup.col_char(line_i, self.location.end.min(self.lookup.line_end(line_i)));
        let length = end.saturating_sub(start).max(1);

        format!(
            "\
            {arrow:>arr_space$} {name}:{line_n}:{col_n}\n\
            {cap:>width$}\n\
            {n} {line}\n\
            {cap:>width$} {pointer}\
            ",
            arrow = "-->".bright_blue().bold(),
            name = self.source_name,
            cap = "|".bright_blue().bold(),
            width = offset + 1,
            arr_space = offset + 2,
            n = format!("{line_n:<offset$}|").bright_blue().bold(),
            pointer = format!(
                "{blank:>start$}{blank:^>length$}",
                blank = "",
            )
            .color(arrow_color),
        )
    }
}

/// Maps byte offsets in a source to lines and columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    source: Arc<String>,
    heads: Box<[usize]>,
}

impl Lookup {
    pub fn new(source: Arc<String>) -> Self {
        let heads = std::iter::once(0)
            .chain(
                source
                    .char_indices()
                    .filter_map(|(i, c)| if c == '\n' { Some(i + 1) } else { None }),
            )
            .collect();

        Lookup { source, heads }
    }

    pub fn line_n(&self, index: usize) -> usize {
        match self.heads.binary_search(&index) {
            Ok(line) => line,
            Err(insert) => insert - 1,
        }
    }

    #[inline]
    pub fn line_col(&self, index: usize) -> (usize, usize) {
        let line = self.line_n(index);
        let col = self.col_from_line(line, index);

        (line, col)
    }

    #[inline]
    pub fn col_from_line(&self, line: usize, index: usize) -> usize {
        index - self.heads[line]
    }

    /// Column of `index` counted in characters rather than bytes.
    pub fn col_char(&self, line: usize, index: usize) -> usize {
        self.source[self.heads[line]..index].chars().count()
    }

    pub fn line_end(&self, line: usize) -> usize {
        self.heads
            .get(line + 1)
            .copied()
            .unwrap_or(self.source.len())
    }

    pub fn line(&self, index: usize) -> &str {
        &self.source[self.heads[index]..self.line_end(index)]
    }
}
