// Query highlighting by text segmentation

/// A run of label text, flagged when it matched the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of a case-insensitive match of `query` at the start of `haystack`
fn match_len(haystack: &str, query: &[char]) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for q in query {
        let (_, c) = chars.next()?;
        if !chars_eq_ignore_case(c, *q) {
            return None;
        }
    }
    Some(chars.next().map(|(idx, _)| idx).unwrap_or(haystack.len()))
}

/// Split `label` into segments, marking every non-overlapping case-insensitive
/// occurrence of `query`, scanning left to right.
pub fn segments<'a>(label: &'a str, query: &str) -> Vec<Segment<'a>> {
    if label.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![Segment {
            text: label,
            is_match: false,
        }];
    }

    let query: Vec<char> = query.chars().collect();
    let mut result = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < label.len() {
        if let Some(len) = match_len(&label[pos..], &query) {
            if plain_start < pos {
                result.push(Segment {
                    text: &label[plain_start..pos],
                    is_match: false,
                });
            }
            result.push(Segment {
                text: &label[pos..pos + len],
                is_match: true,
            });
            pos += len;
            plain_start = pos;
        } else {
            pos += label[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < label.len() {
        result.push(Segment {
            text: &label[plain_start..],
            is_match: false,
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment<'_> {
        Segment {
            text,
            is_match: false,
        }
    }

    fn mark(text: &str) -> Segment<'_> {
        Segment {
            text,
            is_match: true,
        }
    }

    #[test]
    fn test_empty_query_is_single_plain_segment() {
        assert_eq!(segments("1.2.3", ""), vec![plain("1.2.3")]);
        assert!(segments("", "").is_empty());
        assert!(segments("", "1").is_empty());
    }

    #[test]
    fn test_marks_every_occurrence() {
        assert_eq!(
            segments("1.1.10", "1"),
            vec![
                mark("1"),
                plain("."),
                mark("1"),
                plain("."),
                mark("1"),
                plain("0"),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_preserves_original_case() {
        assert_eq!(
            segments("2.0-Beta", "beta"),
            vec![plain("2.0-"), mark("Beta")]
        );
    }

    #[test]
    fn test_non_overlapping() {
        assert_eq!(segments("aaa", "aa"), vec![mark("aa"), plain("a")]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(segments("1.2.3", "9"), vec![plain("1.2.3")]);
    }

    #[test]
    fn test_query_longer_than_label() {
        assert_eq!(segments("1.2", "1.2.3"), vec![plain("1.2")]);
    }

    #[test]
    fn test_markup_is_just_text() {
        let label = "<b>1.0</b>";
        let segs = segments(label, "<b>");
        assert_eq!(segs[0], mark("<b>"));
        let joined: String = segs.iter().map(|s| s.text).collect();
        assert_eq!(joined, label);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert_eq!(segments("1.2", "."), vec![plain("1"), mark("."), plain("2")]);
        assert_eq!(segments("1x2", "."), vec![plain("1x2")]);
    }

    #[test]
    fn test_multibyte_labels() {
        let segs = segments("版本 1.0 ÉTÉ", "été");
        assert_eq!(segs, vec![plain("版本 1.0 "), mark("ÉTÉ")]);
    }
}
