use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Clean one raw line of a text file, None if nothing is left.
    ///
    /// Only line endings are removed, the rest of the line is kept as-is so
    /// it can be traced back to the source file.
    fn process_line(&self, line: &str) -> Option<String> {
        let line = line.trim_end_matches(['\n', '\r']);

        if line.trim().is_empty() {
            return None;
        }

        Some(line.to_string())
    }

    /// Normalize a word form used as a frequency lookup key
    fn normalize_form(&self, form: &str) -> String {
        // NFKC folds half-width katakana and full-width latin
        form.trim().nfkc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_line_strips_line_endings_only() {
        let p = DefaultPreprocessor;
        assert_eq!(
            p.process_line("わんわん\tワンワン\twoof\r\n").as_deref(),
            Some("わんわん\tワンワン\twoof")
        );
        assert_eq!(p.process_line("   \r"), None);
        assert_eq!(p.process_line(""), None);
    }

    #[test]
    fn test_normalize_form_folds_half_width_katakana() {
        let p = DefaultPreprocessor;
        assert_eq!(p.normalize_form("ﾜﾝﾜﾝ"), "ワンワン");
        assert_eq!(p.normalize_form(" わんわん "), "わんわん");
    }
}
