//! String utility functions for common string operations.

/// Split one delimited line into fields, honoring a quote character.
///
/// A delimiter inside a quoted field does not end the field, and a doubled
/// quote inside a quoted field stands for one literal quote. Quotes are not
/// included in the output.
///
/// # Example
///
/// ```
/// use pantry::string_utils::parse_delimited_line;
///
/// assert_eq!(parse_delimited_line("a,b,c", ',', '"'), vec!["a", "b", "c"]);
/// assert_eq!(
///     parse_delimited_line(r#""x,y",z"#, ',', '"'),
///     vec!["x,y", "z"]
/// );
/// ```
pub fn parse_delimited_line(line: &str, delimiter: char, quote: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == quote {
                if chars.peek() == Some(&quote) {
                    // Doubled quote: literal quote character
                    field.push(quote);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == quote {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(parse_delimited_line("a,b,c", ',', '"'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_field() {
        assert_eq!(parse_delimited_line("alone", ',', '"'), vec!["alone"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(parse_delimited_line("", ',', '"'), vec![""]);
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_field() {
        assert_eq!(parse_delimited_line("a,b,", ',', '"'), vec!["a", "b", ""]);
    }

    #[test]
    fn test_quoted_delimiter_does_not_split() {
        assert_eq!(
            parse_delimited_line(r#""one,two",three"#, ',', '"'),
            vec!["one,two", "three"]
        );
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        assert_eq!(
            parse_delimited_line(r#""say ""hi""",done"#, ',', '"'),
            vec![r#"say "hi""#, "done"]
        );
    }

    #[test]
    fn test_custom_delimiter_and_quote() {
        assert_eq!(
            parse_delimited_line("'a;b';c", ';', '\''),
            vec!["a;b", "c"]
        );
    }

    #[test]
    fn test_unterminated_quote_takes_rest_of_line() {
        assert_eq!(
            parse_delimited_line(r#""open,never closed"#, ',', '"'),
            vec!["open,never closed"]
        );
    }
}
