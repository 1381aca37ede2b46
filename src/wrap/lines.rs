/// Wrap text at word boundaries into lines of at most `columns` characters,
/// lazily. Words longer than the limit stand alone on their own line.
pub fn lines(text: &str, columns: usize) -> Lines<'_> {
    Lines::from((text, columns))
}

/// A lazy word-wrapping iterator.
///
/// Each `next` cuts the longest prefix that fits, splitting at the last
/// space whose position is within the column limit. A word longer than the
/// limit is emitted whole rather than mangled. A remainder strictly shorter
/// than the limit, empty included, is emitted as the final line. Lines
/// borrow from the input, so wrapping allocates nothing.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
    columns: usize,
}

/// (text, columns) construction
impl<'a> From<(&'a str, usize)> for Lines<'a> {
    fn from((text, columns): (&'a str, usize)) -> Self {
        Self {
            rest: Some(text),
            columns,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        let mut total = 0;
        let mut boundary = None;
        let mut fallback = None;
        for (i, (at, c)) in rest.char_indices().enumerate() {
            total += 1;
            if c == ' ' {
                if i <= self.columns {
                    boundary = Some(at);
                }
                if fallback.is_none() {
                    fallback = Some(at);
                }
            }
        }
        if total < self.columns {
            return Some(rest);
        }
        // spaces are single bytes, so slicing around one never splits a char
        match boundary.or(fallback) {
            Some(at) => {
                self.rest = Some(&rest[at + 1..]);
                Some(&rest[..at])
            }
            None => Some(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str =
        "The String global object is a constructor for strings, or a sequence of characters.";

    #[test]
    fn twenty_six_columns() {
        assert_eq!(
            lines(SENTENCE, 26).collect::<Vec<&str>>(),
            vec![
                "The String global object",
                "is a constructor for",
                "strings, or a sequence of",
                "characters.",
            ],
        );
    }

    #[test]
    fn twelve_columns() {
        assert_eq!(
            lines(SENTENCE, 12).collect::<Vec<&str>>(),
            vec![
                "The String",
                "global",
                "object is a",
                "constructor",
                "for strings,",
                "or a",
                "sequence of",
                "characters.",
            ],
        );
    }

    #[test]
    fn no_multiword_line_exceeds_columns() {
        for columns in 1..40 {
            for line in lines(SENTENCE, columns) {
                assert!(line.chars().count() <= columns || !line.contains(' '));
            }
        }
    }

    #[test]
    fn rejoins_to_original() {
        for columns in 1..40 {
            let rejoined = lines(SENTENCE, columns).collect::<Vec<&str>>().join(" ");
            assert_eq!(rejoined, SENTENCE);
        }
    }

    #[test]
    fn short_text_comes_back_whole() {
        assert_eq!(lines("hi there", 20).collect::<Vec<&str>>(), vec!["hi there"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(lines("", 5).collect::<Vec<&str>>(), vec![""]);
    }

    #[test]
    fn oversized_word_stands_alone() {
        assert_eq!(
            lines("a extraordinarily b", 7).collect::<Vec<&str>>(),
            vec!["a", "extraordinarily", "b"],
        );
    }

    #[test]
    fn zero_columns_still_terminates() {
        assert_eq!(lines("a b c", 0).collect::<Vec<&str>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn exact_fit_still_splits() {
        // the short-text check is strictly less-than, so a remainder of
        // exactly `columns` characters still breaks at its last space
        assert_eq!(lines("abcd efgh", 9).collect::<Vec<&str>>(), vec!["abcd", "efgh"]);
    }

    #[test]
    fn trailing_space_survives_in_final_line() {
        assert_eq!(lines("ab cd ", 4).collect::<Vec<&str>>(), vec!["ab", "cd "]);
    }
}
